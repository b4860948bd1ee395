use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::MovieRating;

#[derive(Debug, Clone, Deserialize)]
pub struct RatingCreate {
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingResponse {
    pub rating_id: i32,
    pub movie_id: i32,
    pub score: i32,
    pub created_at: DateTime<Utc>,
}

impl From<MovieRating> for RatingResponse {
    fn from(rating: MovieRating) -> Self {
        RatingResponse {
            rating_id: rating.id,
            movie_id: rating.movie_id,
            score: rating.score,
            created_at: rating.created_at,
        }
    }
}
