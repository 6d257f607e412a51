// Shared kernel used by every module

pub mod domain; // Shared value objects
pub mod errors; // Shared error types
pub mod utils; // Logging and lenient decoding helpers

pub use errors::{AppError, AppResult};
