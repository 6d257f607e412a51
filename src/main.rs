use anicat_lib::modules::catalog::{CatalogService, VideoQuality};
use anicat_lib::modules::provider::SearchFilters;
use anyhow::{bail, Context, Result};
use serde::Serialize;

const USAGE: &str = "usage: anicat <command>

commands:
  homepage                          popular and latest releases
  search <query...>                 text search
  browse <genre,...> [year]         catalog page narrowed by genres
  genres                            genre names to browse by
  details <id-or-alias>             release card with episodes
  episode <anime-id> <number>       one episode
  video <anime-id> <number> [480|720|1080]
                                    HLS stream for an episode
  status                            check every configured source";

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(service: &CatalogService, args: &[String]) -> Result<()> {
    let command = args.first().map(String::as_str).unwrap_or("homepage");
    let rest = args.get(1..).unwrap_or_default();

    match (command, rest) {
        ("homepage", _) => print_json(&service.resolve_homepage().await),
        ("search", words) => {
            let query = words.join(" ");
            print_json(&service.search(&query).await?)
        }
        ("browse", [genres, rest @ ..]) => {
            let mut filters = SearchFilters::new()
                .with_genres(genres.split(',').map(str::to_string).collect());
            if let Some(year) = rest.first() {
                filters = filters.with_year(year.parse().context("year must be a number")?);
            }
            print_json(&service.browse(&filters).await?)
        }
        ("genres", _) => print_json(&service.genres().await?),
        ("details", [id, ..]) => print_json(&service.get_anime_details(id).await?),
        ("episode", [id, number, ..]) => print_json(&service.get_episode(id, number).await?),
        ("video", [id, number, rest @ ..]) => {
            let quality = rest
                .first()
                .map(|q| q.parse::<VideoQuality>())
                .transpose()
                .context("quality must be 480, 720 or 1080")?;
            print_json(&service.resolve_episode_video(id, number, quality).await?)
        }
        ("status", _) => print_json(&service.check_status().await),
        _ => bail!("{}", USAGE),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let service = anicat_lib::bootstrap().context("failed to configure catalog sources")?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    let outcome = run(&service, &args).await;
    log::debug!("Resolution metrics: {:?}", service.metrics());

    if let Err(e) = &outcome {
        if let Some(app_error) = e.downcast_ref::<anicat_lib::shared::AppError>() {
            if app_error.is_user_visible() {
                eprintln!("{}", app_error.user_message());
            }
        }
    }
    outcome
}
