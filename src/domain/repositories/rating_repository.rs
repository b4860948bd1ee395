use async_trait::async_trait;

use crate::domain::entities::MovieRating;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Appends a rating; `created_at` is assigned by the store.
    async fn create(&self, movie_id: i32, score: i32) -> AppResult<MovieRating>;
}
