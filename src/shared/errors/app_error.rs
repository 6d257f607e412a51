use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Upstream error (HTTP {status}): {message}")]
    UpstreamError { status: u16, message: String },

    #[error("Unexpected response shape: {0}")]
    ParseError(String),

    #[error("Empty result: {0}")]
    EmptyResult(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No playable source: {0}")]
    NoPlayableSource(String),

    #[error("All sources failed: {0}")]
    ChainExhausted(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Not supported: {0}")]
    NotSupported(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::UpstreamError {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            }
        } else if err.is_decode() {
            AppError::ParseError(err.to_string())
        } else {
            AppError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::InvalidInput(format!("Invalid number: {}", err))
    }
}

impl From<std::num::ParseFloatError> for AppError {
    fn from(err: std::num::ParseFloatError) -> Self {
        AppError::InvalidInput(format!("Invalid decimal number: {}", err))
    }
}

impl AppError {
    /// Failures an adapter call can produce. The resolution chain absorbs these
    /// and moves on to the next source.
    pub fn is_source_failure(&self) -> bool {
        matches!(
            self,
            AppError::NetworkError(_)
                | AppError::Timeout(_)
                | AppError::UpstreamError { .. }
                | AppError::ParseError(_)
                | AppError::EmptyResult(_)
                | AppError::NotSupported(_)
        )
    }

    /// Errors allowed to reach the presentation layer.
    pub fn is_user_visible(&self) -> bool {
        matches!(
            self,
            AppError::ChainExhausted(_)
                | AppError::NotFound(_)
                | AppError::NoPlayableSource(_)
                | AppError::InvalidInput(_)
        )
    }

    /// Localized message shown to the user in place of the technical one.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::ChainExhausted(_) => "Ошибка поиска. Проверьте соединение с сервером.",
            AppError::NotFound(_) => "Запрошенное аниме или эпизод не найдены.",
            AppError::NoPlayableSource(_) => "Видео для этого эпизода недоступно.",
            AppError::InvalidInput(_) => "Некорректный запрос.",
            _ => "Ошибка загрузки данных. Попробуйте обновить страницу.",
        }
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_failures_are_not_user_visible() {
        let failures = vec![
            AppError::NetworkError("refused".to_string()),
            AppError::Timeout("15s".to_string()),
            AppError::UpstreamError {
                status: 500,
                message: "boom".to_string(),
            },
            AppError::ParseError("bad json".to_string()),
            AppError::EmptyResult("popular".to_string()),
        ];

        for error in failures {
            assert!(error.is_source_failure(), "{:?}", error);
            assert!(!error.is_user_visible(), "{:?}", error);
        }
    }

    #[test]
    fn test_terminal_errors_are_user_visible() {
        assert!(AppError::ChainExhausted("search".to_string()).is_user_visible());
        assert!(AppError::NotFound("episode 3".to_string()).is_user_visible());
        assert!(AppError::NoPlayableSource("episode 3".to_string()).is_user_visible());
        assert!(!AppError::NoPlayableSource("x".to_string()).is_source_failure());
    }

    #[test]
    fn test_user_message_is_localized() {
        let error = AppError::ChainExhausted("search".to_string());
        assert_eq!(
            error.user_message(),
            "Ошибка поиска. Проверьте соединение с сервером."
        );
    }

    #[test]
    fn test_upstream_error_display() {
        let error = AppError::UpstreamError {
            status: 422,
            message: "limit must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Upstream error (HTTP 422): limit must be positive"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(AppError::NotFound("release".to_string())).unwrap();
        assert_eq!(json["type"], "NotFound");
        assert_eq!(json["message"], "release");
    }
}
