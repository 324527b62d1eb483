use crate::config::Config;
use crate::retry::{with_retry, RetryConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One popular movie as the movies page renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PopularResponse {
    results: Vec<Movie>,
}

/// Fetch the popular-movies list from TMDB.
///
/// The movies page treats an upstream failure as an empty list, so the
/// caller decides whether to surface the error or degrade; this
/// function just reports it.
pub async fn fetch_popular_movies(client: &reqwest::Client, config: &Config) -> Result<Vec<Movie>> {
    let url = format!(
        "{}/movie/popular?api_key={}",
        config.tmdb_api_url, config.tmdb_api_key
    );

    let movies = with_retry(&RetryConfig::movie_listing(), "TMDB popular movies", || {
        let client = client.clone();
        let url = url.clone();
        async move {
            let response = client
                .get(&url)
                .send()
                .await
                .context("Failed to send request to TMDB API")?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                anyhow::bail!("TMDB API error ({}): {}", status, body);
            }

            let popular: PopularResponse = response
                .json()
                .await
                .context("Failed to parse TMDB response")?;

            Ok(popular.results)
        }
    })
    .await?;

    Ok(movies)
}
