use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    response::{Html, Redirect},
};

use crate::{
    AppState,
    error::AppResult,
    models::{AddForm, NewMovie, UpdateForm},
    templates,
};

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.store.list_ranked().await?;
    Ok(Html(templates::index_page(&movies)))
}

/// The form is bound to the id only; the stored rating and review are not loaded.
pub async fn edit(Path(movie_id): Path<i32>) -> Html<String> {
    Html(templates::edit_page(movie_id))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i32>,
    Form(form): Form<UpdateForm>,
) -> AppResult<Redirect> {
    state.store.apply_changes(movie_id, form.into_changes()).await?;
    Ok(Redirect::to("/"))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i32>,
) -> AppResult<Redirect> {
    state.store.delete(movie_id).await?;
    Ok(Redirect::to("/"))
}

pub async fn add() -> Html<String> {
    Html(templates::add_page())
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddForm>,
) -> AppResult<Html<String>> {
    let candidates = state.tmdb.search_movies(form.title()?).await?;
    Ok(Html(templates::select_page(&candidates)))
}

pub async fn select(
    State(state): State<Arc<AppState>>,
    Path(tmdb_id): Path<i32>,
) -> AppResult<Redirect> {
    let detail = state.tmdb.movie_detail(tmdb_id).await?;
    let new = NewMovie::from_detail(detail, &state.config.tmdb_image_base_url)?;
    let movie = state.store.create(new).await?;
    Ok(Redirect::to(&format!("/update/{}", movie.id)))
}
