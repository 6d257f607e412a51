use crate::modules::catalog::domain::{entities::CanonicalAnime, value_objects::ReleaseStatus};

fn mock_entry(
    id: &str,
    title: &str,
    title_english: &str,
    poster_id: u32,
    genres: &[&str],
    rating: f64,
) -> CanonicalAnime {
    let mut anime = CanonicalAnime::new(id, title);
    anime.title_english = Some(title_english.to_string());
    anime.year = Some(2025);
    anime.status = ReleaseStatus::Ongoing;
    anime.poster_url = Some(format!(
        "https://www.anilibria.tv/storage/releases/posters/{}/medium.jpg",
        poster_id
    ));
    anime.genres = genres.iter().map(|g| g.to_string()).collect();
    anime.rating = Some(rating);
    anime
}

/// Built-in records served when every homepage source came back empty
pub fn mock_catalog() -> Vec<CanonicalAnime> {
    vec![
        mock_entry(
            "test1",
            "Эта фарфоровая кукла влюбилась 2",
            "Sono Bisque Doll wa Koi wo Suru 2",
            9964,
            &["Романтика", "Комедия", "Школа"],
            8.5,
        ),
        mock_entry(
            "test2",
            "Кайдзю номер восемь 2",
            "Kaiju No. 8 Season 2",
            9988,
            &["Экшен", "Сёнэн", "Супер сила"],
            8.8,
        ),
    ]
}
