use serde::{Deserialize, Serialize};

use super::{Director, Genre};

/// Movie aggregate as the service layer sees it: the row plus its resolved
/// director and genre set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub release_year: i32,
    pub cast: Option<String>,
    pub description: Option<String>,
    pub director: Director,
    pub genres: Vec<Genre>,
}

/// A movie with its rating aggregates, computed at query time.
///
/// `average_rating` is `None` when the movie has no ratings; it is never 0.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieWithStats {
    pub movie: Movie,
    pub average_rating: Option<f64>,
    pub ratings_count: i64,
}
