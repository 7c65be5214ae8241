use std::{num::NonZeroU32, sync::Arc};

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use jiff::civil::Date;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::{CatalogCandidate, DraftMovie},
};

pub struct CatalogClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    image_base_url: String,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl CatalogClient {
    pub fn new(
        client: reqwest::Client,
        api_key: String,
        base_url: String,
        image_base_url: String,
        rps: u32,
    ) -> Self {
        if api_key.trim().is_empty() {
            tracing::warn!("no TMDB_API_KEY provided, catalog requests will be rejected upstream");
        }

        let rps = NonZeroU32::new(rps).unwrap_or(NonZeroU32::MIN);
        let limiter = Arc::new(RateLimiter::direct(Quota::per_second(rps)));
        Self { client, api_key, base_url, image_base_url, limiter }
    }

    pub async fn search_by_title(&self, title: &str) -> AppResult<Vec<CatalogCandidate>> {
        self.limiter.until_ready().await;

        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));
        debug!(query = %title, "searching catalog");

        let resp: SearchResponse = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str()), ("query", title)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(query = %title, results = resp.results.len(), "catalog search done");
        Ok(resp.results)
    }

    pub async fn fetch_detail(&self, catalog_id: i32) -> AppResult<DraftMovie> {
        self.limiter.until_ready().await;

        let url = format!("{}/movie/{}", self.base_url.trim_end_matches('/'), catalog_id);
        debug!(catalog_id, "fetching catalog detail");

        let detail: MovieDetail = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let year = release_year(&detail.release_date)?;
        let Some(poster_path) = detail.poster_path.filter(|p| !p.trim().is_empty()) else {
            return Err(AppError::Upstream(format!("catalog entry {catalog_id} has no poster")));
        };

        Ok(DraftMovie {
            title: detail.title,
            year,
            description: detail.overview,
            img_url: format!("{}{}", self.image_base_url.trim_end_matches('/'), poster_path),
        })
    }
}

fn release_year(release_date: &str) -> AppResult<i32> {
    let date: Date = release_date.trim().parse().map_err(|err| {
        AppError::Upstream(format!("unreadable release date {release_date:?}: {err}"))
    })?;
    Ok(i32::from(date.year()))
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<CatalogCandidate>,
}

#[derive(Debug, Deserialize)]
struct MovieDetail {
    title: String,
    release_date: String,
    overview: String,
    poster_path: Option<String>,
}
