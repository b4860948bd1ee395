use async_trait::async_trait;

use crate::domain::entities::Director;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait DirectorRepository: Send + Sync {
    async fn find_by_id(&self, director_id: i32) -> AppResult<Option<Director>>;
}
