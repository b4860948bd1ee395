use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::domain::entities::Genre;
use crate::domain::repositories::GenreRepository;
use crate::infrastructure::database::{connection::Database, models::GenreRow};
use crate::schema::genres;
use crate::shared::errors::AppResult;

pub struct GenreRepositoryImpl {
    db: Arc<Database>,
}

impl GenreRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GenreRepository for GenreRepositoryImpl {
    async fn find_by_ids(&self, genre_ids: Vec<i32>) -> AppResult<Vec<Genre>> {
        if genre_ids.is_empty() {
            return Ok(Vec::new());
        }

        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<GenreRow>> {
            let mut conn = db.get_connection()?;
            let rows = genres::table
                .filter(genres::id.eq_any(&genre_ids))
                .load::<GenreRow>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows.into_iter().map(Genre::from).collect())
    }
}
