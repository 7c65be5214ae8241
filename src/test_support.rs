use std::{collections::HashMap, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::{AppState, catalog::CatalogClient, db::connect_in_memory, store::MovieStore};

pub const FAKE_API_KEY: &str = "test-key";

pub async fn spawn_fake_catalog() -> String {
    let app = Router::new()
        .route("/search/movie", get(fake_search))
        .route("/movie/{id}", get(fake_detail));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind fake catalog");
    let addr = listener.local_addr().expect("fake catalog addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake catalog server");
    });
    format!("http://{addr}")
}

pub async fn test_state() -> Arc<AppState> {
    let base = spawn_fake_catalog().await;
    let catalog = CatalogClient::new(
        reqwest::Client::new(),
        FAKE_API_KEY.to_string(),
        base,
        "https://image.tmdb.org/t/p/w500".to_string(),
        100,
    );
    Arc::new(AppState {
        store: MovieStore::new(connect_in_memory().await),
        catalog: Arc::new(catalog),
    })
}

fn authorized(params: &HashMap<String, String>) -> bool {
    params.get("api_key").map(String::as_str) == Some(FAKE_API_KEY)
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "status_message": "Invalid API key" }))).into_response()
}

async fn fake_search(Query(params): Query<HashMap<String, String>>) -> Response {
    if !authorized(&params) {
        return unauthorized();
    }
    let query = params.get("query").map(|q| q.to_lowercase()).unwrap_or_default();
    let catalog = [
        json!({ "id": 14160, "title": "Up", "release_date": "2009-05-28", "overview": "Carl..." }),
        json!({ "id": 91776, "title": "Up in the Air", "release_date": "2009-12-04" }),
        json!({ "id": 1817, "title": "Phone Booth", "release_date": "2002-05-10" }),
        json!({ "id": 555, "title": "Upcoming Untitled", "release_date": "" }),
    ];
    let results: Vec<_> = catalog
        .into_iter()
        .filter(|m| {
            !query.is_empty()
                && m["title"].as_str().is_some_and(|t| t.to_lowercase().contains(&query))
        })
        .collect();
    Json(json!({ "page": 1, "results": results })).into_response()
}

async fn fake_detail(
    Path(id): Path<i32>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&params) {
        return unauthorized();
    }
    let body = match id {
        14160 => json!({
            "id": 14160,
            "title": "Up",
            "release_date": "2009-05-28",
            "overview": "Carl Fredricksen spent his entire life dreaming of exploring the globe.",
            "poster_path": "/mFvoEwSfLqbcWwFsDjQebn9bzFe.jpg",
        }),
        1817 => json!({
            "id": 1817,
            "title": "Phone Booth",
            "release_date": "2002-05-10",
            "overview": "Publicist Stuart Shepard finds himself trapped in a phone booth.",
            "poster_path": "/tjrX2oWRCM3Tvarz38zlZM7Uc10.jpg",
        }),
        999 => json!({
            "id": 999,
            "title": "Posterless",
            "release_date": "2020-01-01",
            "overview": "Nobody made a poster.",
            "poster_path": null,
        }),
        500 => json!({ "id": 500, "overview": "No title or date." }),
        _ => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({ "status_message": "The resource you requested could not be found." })),
            )
                .into_response();
        },
    };
    Json(body).into_response()
}
