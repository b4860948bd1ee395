use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::domain::entities::Director;
use crate::domain::repositories::DirectorRepository;
use crate::infrastructure::database::{connection::Database, models::DirectorRow};
use crate::schema::directors;
use crate::shared::errors::AppResult;

pub struct DirectorRepositoryImpl {
    db: Arc<Database>,
}

impl DirectorRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DirectorRepository for DirectorRepositoryImpl {
    async fn find_by_id(&self, director_id: i32) -> AppResult<Option<Director>> {
        let db = Arc::clone(&self.db);

        let row = task::spawn_blocking(move || -> AppResult<Option<DirectorRow>> {
            let mut conn = db.get_connection()?;
            let row = directors::table
                .filter(directors::id.eq(director_id))
                .first::<DirectorRow>(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row.map(Director::from))
    }
}
