use serde::Deserialize;
use tracing::debug;

use crate::{
    error::AppResult,
    models::{Candidate, MovieDetail},
};

const SEARCH_LANGUAGE: &str = "en-US";

pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(client: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self { client, api_key, base_url }
    }

    /// Title search. A response without `results` yields no candidates.
    pub async fn search_movies(&self, query: &str) -> AppResult<Vec<Candidate>> {
        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));
        debug!(query = %query, "searching movie database");

        let resp: SearchResponse = self
            .client
            .get(url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", query),
                ("language", SEARCH_LANGUAGE),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let results = resp.results.unwrap_or_default();
        debug!(query = %query, results = results.len(), "search finished");
        Ok(results)
    }

    pub async fn movie_detail(&self, tmdb_id: i32) -> AppResult<MovieDetail> {
        let url = format!("{}/movie/{}", self.base_url.trim_end_matches('/'), tmdb_id);
        debug!(tmdb_id, "fetching movie detail");

        let detail = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(detail)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Option<Vec<Candidate>>,
}
