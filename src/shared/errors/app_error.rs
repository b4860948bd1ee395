use thiserror::Error;

/// Closed set of failures the service can surface. Domain variants carry a
/// fixed HTTP status and a stable message; everything unexpected is folded
/// into `Database`/`Internal` and sanitized at the boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Movie not found")]
    MovieNotFound { movie_id: i32 },

    #[error("Invalid release_year: {release_year}")]
    InvalidReleaseYear { release_year: i32 },

    #[error("Director with id {director_id} not found")]
    DirectorNotFound { director_id: i32 },

    #[error("Genre with id {genre_id} not found")]
    GenreNotFound { genre_id: i32 },

    #[error("Invalid score: {score}. Score must be between 1 and 10")]
    InvalidRatingScore { score: i32 },

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status this error renders with at the boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::MovieNotFound { .. } => 404,
            AppError::InvalidReleaseYear { .. }
            | AppError::DirectorNotFound { .. }
            | AppError::GenreNotFound { .. }
            | AppError::InvalidRatingScore { .. }
            | AppError::Validation(_) => 422,
            AppError::Database(_) | AppError::Internal(_) => 500,
        }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        // Repositories use `.optional()` for row lookups, so a raw NotFound
        // reaching this conversion is an unexpected store failure, not a
        // domain not-found.
        AppError::Database(err.to_string())
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::Database(format!("Database pool error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("Blocking task failed: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_carry_their_status() {
        assert_eq!(AppError::MovieNotFound { movie_id: 1 }.status_code(), 404);
        assert_eq!(
            AppError::InvalidReleaseYear { release_year: 1799 }.status_code(),
            422
        );
        assert_eq!(
            AppError::DirectorNotFound { director_id: 9999 }.status_code(),
            422
        );
        assert_eq!(AppError::GenreNotFound { genre_id: 0 }.status_code(), 422);
        assert_eq!(
            AppError::InvalidRatingScore { score: 11 }.status_code(),
            422
        );
        assert_eq!(
            AppError::Validation("query.page: must be >= 1".into()).status_code(),
            422
        );
        assert_eq!(AppError::Database("boom".into()).status_code(), 500);
    }

    #[test]
    fn messages_match_the_wire_contract() {
        assert_eq!(
            AppError::MovieNotFound { movie_id: 42 }.to_string(),
            "Movie not found"
        );
        assert_eq!(
            AppError::InvalidReleaseYear { release_year: 2101 }.to_string(),
            "Invalid release_year: 2101"
        );
        assert_eq!(
            AppError::DirectorNotFound { director_id: 9999 }.to_string(),
            "Director with id 9999 not found"
        );
        assert_eq!(
            AppError::GenreNotFound { genre_id: 9999 }.to_string(),
            "Genre with id 9999 not found"
        );
        assert_eq!(
            AppError::InvalidRatingScore { score: 0 }.to_string(),
            "Invalid score: 0. Score must be between 1 and 10"
        );
    }

    #[test]
    fn diesel_errors_become_database_errors() {
        let err: AppError = diesel::result::Error::NotFound.into();
        assert!(matches!(err, AppError::Database(_)));
    }
}
