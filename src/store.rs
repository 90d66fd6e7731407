use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::{MovieChanges, NewMovie},
};

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns every movie ordered by ascending rating (ties by id) and writes
    /// each one's 1-based position back as its ranking.
    pub async fn list_ranked(&self) -> AppResult<Vec<movie::Model>> {
        let txn = self.db.begin().await?;

        let movies = movie::Entity::find()
            .order_by_asc(movie::Column::Rating)
            .order_by_asc(movie::Column::Id)
            .all(&txn)
            .await?;

        let mut ranked = Vec::with_capacity(movies.len());
        for (position, row) in movies.into_iter().enumerate() {
            let mut active: movie::ActiveModel = row.into();
            active.ranking = Set((position + 1).to_string());
            ranked.push(active.update(&txn).await?);
        }

        txn.commit().await?;

        tracing::debug!(count = ranked.len(), "recomputed rankings");
        Ok(ranked)
    }

    pub async fn get(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id).one(&self.db).await?.ok_or(AppError::NotFound(id))
    }

    pub async fn create(&self, new: NewMovie) -> AppResult<movie::Model> {
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(new.title),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(new.rating),
            ranking: Set(String::new()),
            review: Set(new.review),
            img_url: Set(new.img_url),
        };

        let created = model.insert(&self.db).await?;
        tracing::info!(id = created.id, title = %created.title, "movie added");
        Ok(created)
    }

    pub async fn apply_changes(&self, id: i32, changes: MovieChanges) -> AppResult<movie::Model> {
        let txn = self.db.begin().await?;

        let current =
            movie::Entity::find_by_id(id).one(&txn).await?.ok_or(AppError::NotFound(id))?;

        let mut active: movie::ActiveModel = current.clone().into();
        if let Some(rating) = changes.rating {
            active.rating = Set(rating);
        }
        if let Some(review) = changes.review {
            active.review = Set(review);
        }
        if !active.is_changed() {
            return Ok(current);
        }
        let updated = active.update(&txn).await?;

        txn.commit().await?;

        tracing::info!(id, rating = updated.rating, "movie updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(id));
        }

        tracing::info!(id, "movie deleted");
        Ok(())
    }
}
