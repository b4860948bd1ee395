use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Append-only: ratings are created with a store-assigned timestamp and
/// never updated or deleted individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRating {
    pub id: i32,
    pub movie_id: i32,
    pub score: i32,
    pub created_at: DateTime<Utc>,
}
