use std::collections::HashSet;
use std::sync::Arc;

use log::debug;

use crate::application::dto::{
    MovieCreate, MovieDetail, MovieListItem, MovieListResponse, MovieUpdate,
};
use crate::domain::entities::MovieWithStats;
use crate::domain::repositories::{
    DirectorRepository, GenreRepository, MovieFieldChanges, MovieListFilter, MovieRepository,
    NewMovieRecord,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::validation::Validator;

/// Business rules over the movie catalog: release-year bounds, referential
/// existence of director and genres, and shaping of response views.
pub struct MovieService {
    movie_repo: Arc<dyn MovieRepository>,
    director_repo: Arc<dyn DirectorRepository>,
    genre_repo: Arc<dyn GenreRepository>,
}

impl MovieService {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        director_repo: Arc<dyn DirectorRepository>,
        genre_repo: Arc<dyn GenreRepository>,
    ) -> Self {
        Self {
            movie_repo,
            director_repo,
            genre_repo,
        }
    }

    pub async fn get_movie_list(
        &self,
        page: i64,
        page_size: i64,
        title: Option<String>,
        release_year: Option<i32>,
        genre: Option<String>,
    ) -> AppResult<MovieListResponse> {
        if let Some(year) = release_year {
            Validator::validate_release_year(year)?;
        }

        let (rows, total_items) = self
            .movie_repo
            .list_with_stats(MovieListFilter {
                page,
                page_size,
                title,
                release_year,
                genre_name: genre,
            })
            .await?;

        debug!("Movie list query matched {} movies", total_items);

        Ok(MovieListResponse {
            page,
            page_size,
            total_items,
            items: rows.iter().map(MovieListItem::from).collect(),
        })
    }

    pub async fn get_movie_by_id(&self, movie_id: i32) -> AppResult<MovieDetail> {
        let row = self
            .movie_repo
            .find_with_stats(movie_id)
            .await?
            .ok_or(AppError::MovieNotFound { movie_id })?;

        Ok(MovieDetail::from(&row))
    }

    pub async fn create_movie(&self, movie_data: MovieCreate) -> AppResult<MovieDetail> {
        Validator::validate_release_year(movie_data.release_year)?;

        self.director_repo
            .find_by_id(movie_data.director_id)
            .await?
            .ok_or(AppError::DirectorNotFound {
                director_id: movie_data.director_id,
            })?;

        if !movie_data.genres.is_empty() {
            self.ensure_genres_exist(&movie_data.genres).await?;
        }

        let movie = self
            .movie_repo
            .create(NewMovieRecord {
                title: movie_data.title,
                director_id: movie_data.director_id,
                release_year: movie_data.release_year,
                cast: movie_data.cast,
                description: movie_data.description,
                genre_ids: movie_data.genres,
            })
            .await?;

        debug!("Created movie {} ({})", movie.id, movie.title);

        // No ratings can exist yet for a freshly created movie.
        Ok(MovieDetail::from(&MovieWithStats {
            movie,
            average_rating: None,
            ratings_count: 0,
        }))
    }

    pub async fn update_movie(
        &self,
        movie_id: i32,
        movie_data: MovieUpdate,
    ) -> AppResult<MovieDetail> {
        self.movie_repo
            .find_by_id(movie_id)
            .await?
            .ok_or(AppError::MovieNotFound { movie_id })?;

        if let Some(year) = movie_data.release_year {
            Validator::validate_release_year(year)?;
        }

        let changes = MovieFieldChanges {
            title: movie_data.title,
            release_year: movie_data.release_year,
            cast: movie_data.cast,
        };
        if !changes.is_empty() {
            self.movie_repo.update_fields(movie_id, changes).await?;
        }

        // `genres` present (even empty) replaces the whole association;
        // absent leaves it untouched.
        if let Some(genre_ids) = movie_data.genres {
            self.ensure_genres_exist(&genre_ids).await?;
            self.movie_repo.replace_genres(movie_id, genre_ids).await?;
        }

        // Re-fetch with fresh aggregates; the movie may have been deleted
        // concurrently.
        let row = self
            .movie_repo
            .find_with_stats(movie_id)
            .await?
            .ok_or(AppError::MovieNotFound { movie_id })?;

        Ok(MovieDetail::from(&row))
    }

    pub async fn delete_movie(&self, movie_id: i32) -> AppResult<()> {
        self.movie_repo
            .find_by_id(movie_id)
            .await?
            .ok_or(AppError::MovieNotFound { movie_id })?;

        self.movie_repo.delete(movie_id).await?;
        debug!("Deleted movie {} and its ratings", movie_id);
        Ok(())
    }

    /// All-or-nothing genre resolution. Rejects with the first missing id;
    /// when the lengths differ but no id is strictly missing (duplicate ids
    /// in the request), the cited id falls back to 0.
    async fn ensure_genres_exist(&self, genre_ids: &[i32]) -> AppResult<()> {
        let found = self.genre_repo.find_by_ids(genre_ids.to_vec()).await?;
        if found.len() != genre_ids.len() {
            let found_ids: HashSet<i32> = found.iter().map(|g| g.id).collect();
            let missing = genre_ids
                .iter()
                .copied()
                .find(|id| !found_ids.contains(id));
            return Err(AppError::GenreNotFound {
                genre_id: missing.unwrap_or(0),
            });
        }
        Ok(())
    }
}
