use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::domain::entities::MovieRating;
use crate::domain::repositories::RatingRepository;
use crate::infrastructure::database::{
    connection::Database,
    models::{MovieRatingRow, NewMovieRatingRow},
};
use crate::schema::movie_ratings;
use crate::shared::errors::AppResult;

pub struct RatingRepositoryImpl {
    db: Arc<Database>,
}

impl RatingRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RatingRepository for RatingRepositoryImpl {
    async fn create(&self, movie_id: i32, score: i32) -> AppResult<MovieRating> {
        let db = Arc::clone(&self.db);

        let row = task::spawn_blocking(move || -> AppResult<MovieRatingRow> {
            let mut conn = db.get_connection()?;
            let row = diesel::insert_into(movie_ratings::table)
                .values(NewMovieRatingRow { movie_id, score })
                .get_result::<MovieRatingRow>(&mut conn)?;
            Ok(row)
        })
        .await??;

        Ok(MovieRating::from(row))
    }
}
