use serde::Deserialize;

use crate::error::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq)]
pub struct DraftMovie {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub img_url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CatalogCandidate {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl CatalogCandidate {
    pub fn release_label(&self) -> &str {
        match self.release_date.as_deref() {
            Some(date) if !date.trim().is_empty() => date,
            _ => "unknown date",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct RatingForm {
    #[serde(default)]
    pub new_rating: String,
    #[serde(default)]
    pub new_review: String,
}

const MAX_RATING: f64 = 10.0;

impl RatingForm {
    pub fn validate(&self) -> AppResult<(f64, String)> {
        let raw_rating = self.new_rating.trim();
        if raw_rating.is_empty() {
            return Err(AppError::Validation("a rating is required".to_string()));
        }
        let rating: f64 = raw_rating.parse().map_err(|_| {
            AppError::Validation(format!("rating must be a number, got \"{raw_rating}\""))
        })?;
        if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
            return Err(AppError::Validation(format!(
                "rating must be between 0 and {MAX_RATING}"
            )));
        }

        let review = self.new_review.trim();
        if review.is_empty() {
            return Err(AppError::Validation("a review is required".to_string()));
        }

        Ok((rating, review.to_string()))
    }
}
