pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod templates;
pub mod tmdb;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{config::Config, store::MovieStore, tmdb::TmdbClient};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: MovieStore,
    pub tmdb: Arc<TmdbClient>,
}

impl AppState {
    pub async fn from_config(config: Config) -> anyhow::Result<Arc<Self>> {
        let http = reqwest::Client::builder()
            .user_agent("movierank/0.1")
            .timeout(config.tmdb_timeout)
            .build()?;

        let db = db::connect_and_migrate(&config.database_url).await?;

        let tmdb =
            TmdbClient::new(http, config.tmdb_api_key.clone(), config.tmdb_base_url.clone());

        Ok(Arc::new(Self {
            config: Arc::new(config),
            store: MovieStore::new(db),
            tmdb: Arc::new(tmdb),
        }))
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/update/{movie_id}", get(routes::edit).post(routes::update))
        .route("/delete/{movie_id}", get(routes::delete))
        .route("/add", get(routes::add).post(routes::search))
        .route("/select/{movie_id}", get(routes::select))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
