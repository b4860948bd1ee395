use std::sync::Arc;

use log::debug;

use crate::application::dto::{RatingCreate, RatingResponse};
use crate::domain::repositories::{MovieRepository, RatingRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::validation::Validator;

pub struct RatingService {
    rating_repo: Arc<dyn RatingRepository>,
    movie_repo: Arc<dyn MovieRepository>,
}

impl RatingService {
    pub fn new(rating_repo: Arc<dyn RatingRepository>, movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self {
            rating_repo,
            movie_repo,
        }
    }

    pub async fn create_rating(
        &self,
        movie_id: i32,
        rating_data: RatingCreate,
    ) -> AppResult<RatingResponse> {
        self.movie_repo
            .find_by_id(movie_id)
            .await?
            .ok_or(AppError::MovieNotFound { movie_id })?;

        // The store's CHECK constraint enforces the same range.
        Validator::validate_rating_score(rating_data.score)?;

        let rating = self.rating_repo.create(movie_id, rating_data.score).await?;
        debug!("Recorded rating {} for movie {}", rating.id, movie_id);

        Ok(RatingResponse::from(rating))
    }
}
