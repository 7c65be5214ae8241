use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set, SqlErr,
    TransactionTrait,
};
use tracing::debug;

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::DraftMovie,
};

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> AppResult<Vec<movie::Model>> {
        let movies = movie::Entity::find().order_by_asc(movie::Column::Id).all(&self.db).await?;
        debug!(count = movies.len(), "listed movies");
        Ok(movies)
    }

    pub async fn get(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id).one(&self.db).await?.ok_or(AppError::NotFound(id))
    }

    pub async fn insert(&self, draft: DraftMovie) -> AppResult<movie::Model> {
        let title = draft.title.clone();
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(draft.title),
            year: Set(draft.year),
            description: Set(draft.description),
            rating: Set(None),
            ranking: Set(None),
            review: Set(None),
            img_url: Set(draft.img_url),
        };

        let inserted = model.insert(&self.db).await.map_err(|err| conflict_or(err, &title))?;
        debug!(id = inserted.id, title = %inserted.title, "inserted movie");
        Ok(inserted)
    }

    pub async fn update_rating(
        &self,
        id: i32,
        rating: f64,
        review: &str,
    ) -> AppResult<movie::Model> {
        let txn = self.db.begin().await?;

        let Some(found) = movie::Entity::find_by_id(id).one(&txn).await? else {
            return Err(AppError::NotFound(id));
        };

        let mut model: movie::ActiveModel = found.into();
        model.rating = Set(Some(rating));
        model.review = Set(Some(review.to_string()));
        let updated = model.update(&txn).await?;

        txn.commit().await?;

        debug!(id, rating, "updated rating");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(id));
        }
        debug!(id, "deleted movie");
        Ok(())
    }
}

fn conflict_or(err: DbErr, title: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(title.to_string()),
        _ => err.into(),
    }
}
