use std::sync::Arc;

use axum::{
    Router,
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use axum_extra::extract::WithRejection;
use tracing::{info, warn};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{IdQuery, RatingForm, SearchForm},
    templates,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/add", get(add_form).post(add_search))
        .route("/add_record", get(add_record))
        .route("/update", get(edit_form).post(edit_submit))
        .route("/delete", get(delete))
        .with_state(state)
}

pub async fn home(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.store.list_all().await?;
    Ok(Html(templates::index_page(&movies)))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page())
}

pub async fn add_search(
    State(state): State<Arc<AppState>>,
    WithRejection(Form(form), _): WithRejection<Form<SearchForm>, AppError>,
) -> AppResult<Html<String>> {
    let candidates = state.catalog.search_by_title(&form.title).await?;
    Ok(Html(templates::select_page(&form.title, &candidates)))
}

pub async fn add_record(
    State(state): State<Arc<AppState>>,
    WithRejection(Query(q), _): WithRejection<Query<IdQuery>, AppError>,
) -> AppResult<Redirect> {
    let draft = state.catalog.fetch_detail(q.id).await?;
    let movie = state.store.insert(draft).await?;
    info!(id = movie.id, catalog_id = q.id, title = %movie.title, "movie added");
    Ok(Redirect::to(&format!("/update?id={}", movie.id)))
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    WithRejection(Query(q), _): WithRejection<Query<IdQuery>, AppError>,
) -> AppResult<Html<String>> {
    let movie = state.store.get(q.id).await?;
    Ok(Html(templates::edit_page(&movie, None)))
}

pub async fn edit_submit(
    State(state): State<Arc<AppState>>,
    WithRejection(Query(q), _): WithRejection<Query<IdQuery>, AppError>,
    WithRejection(Form(form), _): WithRejection<Form<RatingForm>, AppError>,
) -> AppResult<Response> {
    let movie = state.store.get(q.id).await?;

    let (rating, review) = match form.validate() {
        Ok(valid) => valid,
        Err(err) => {
            warn!(id = movie.id, error = %err, "rating form rejected");
            let body = templates::edit_page(&movie, Some(&err.to_string()));
            return Ok((err.status(), Html(body)).into_response());
        },
    };

    state.store.update_rating(movie.id, rating, &review).await?;
    info!(id = movie.id, rating, "movie rated");
    Ok(Redirect::to("/").into_response())
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    WithRejection(Query(q), _): WithRejection<Query<IdQuery>, AppError>,
) -> AppResult<Redirect> {
    state.store.delete(q.id).await?;
    info!(id = q.id, "movie deleted");
    Ok(Redirect::to("/"))
}
