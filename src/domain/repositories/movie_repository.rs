use async_trait::async_trait;

use crate::domain::entities::{Movie, MovieWithStats};
use crate::shared::errors::AppResult;

/// Filter and pagination parameters for the movie list query.
///
/// Filters compose with logical AND. `page` is 1-based; callers validate
/// `page >= 1` and `page_size` in 1..=100 before reaching the repository.
#[derive(Debug, Clone, Default)]
pub struct MovieListFilter {
    pub page: i64,
    pub page_size: i64,
    /// Case-insensitive substring match against the title.
    pub title: Option<String>,
    /// Exact-match release year.
    pub release_year: Option<i32>,
    /// A movie matches if any of its genres has this exact name.
    pub genre_name: Option<String>,
}

/// Insert payload; the caller has already resolved the director and all
/// genre ids.
#[derive(Debug, Clone)]
pub struct NewMovieRecord {
    pub title: String,
    pub director_id: i32,
    pub release_year: i32,
    pub cast: Option<String>,
    pub description: Option<String>,
    pub genre_ids: Vec<i32>,
}

/// Sparse update: `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct MovieFieldChanges {
    pub title: Option<String>,
    pub release_year: Option<i32>,
    pub cast: Option<String>,
}

impl MovieFieldChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.release_year.is_none() && self.cast.is_none()
    }
}

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn find_by_id(&self, movie_id: i32) -> AppResult<Option<Movie>>;

    /// Returns the page of movies with their rating aggregates, plus the
    /// total number of movies matching the filters before pagination.
    /// Aggregates for the whole page come from a single grouped query.
    async fn list_with_stats(
        &self,
        filter: MovieListFilter,
    ) -> AppResult<(Vec<MovieWithStats>, i64)>;

    async fn find_with_stats(&self, movie_id: i32) -> AppResult<Option<MovieWithStats>>;

    async fn create(&self, record: NewMovieRecord) -> AppResult<Movie>;

    /// Callers must not invoke this with an empty changeset.
    async fn update_fields(&self, movie_id: i32, changes: MovieFieldChanges) -> AppResult<()>;

    /// Sets the genre association to exactly this set.
    async fn replace_genres(&self, movie_id: i32, genre_ids: Vec<i32>) -> AppResult<()>;

    /// Removes the movie, its genre links, and all of its ratings.
    async fn delete(&self, movie_id: i32) -> AppResult<()>;
}
