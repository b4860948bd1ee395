use async_trait::async_trait;

use crate::domain::entities::Genre;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Returns the genres that exist among `genre_ids`; missing ids are
    /// simply absent from the result (the service computes the missing set).
    async fn find_by_ids(&self, genre_ids: Vec<i32>) -> AppResult<Vec<Genre>>;
}
