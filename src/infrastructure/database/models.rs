use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::entities::{Director, Genre, MovieRating};
use crate::schema::{directors, genres, genres_movie, movie_ratings, movies};

// ================== MOVIE MODELS ==================

/// DB row model (read)
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct MovieRow {
    pub id: i32,
    pub title: String,
    pub director_id: i32,
    pub release_year: i32,
    pub cast: Option<String>,
    pub description: Option<String>,
}

/// Insert payload (write)
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct NewMovieRow {
    pub title: String,
    pub director_id: i32,
    pub release_year: i32,
    pub cast: Option<String>,
    pub description: Option<String>,
}

/// Sparse update payload, `None` fields are not written
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = movies)]
pub struct MovieChangeset {
    pub title: Option<String>,
    pub release_year: Option<i32>,
    pub cast: Option<String>,
}

// ================== REFERENCE DATA MODELS ==================

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = directors)]
pub struct DirectorRow {
    pub id: i32,
    pub name: String,
    pub birth_year: Option<i32>,
    pub description: Option<String>,
}

impl From<DirectorRow> for Director {
    fn from(row: DirectorRow) -> Self {
        Director {
            id: row.id,
            name: row.name,
            birth_year: row.birth_year,
            description: row.description,
        }
    }
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = genres)]
pub struct GenreRow {
    pub id: i32,
    pub name: String,
}

impl From<GenreRow> for Genre {
    fn from(row: GenreRow) -> Self {
        Genre {
            id: row.id,
            name: row.name,
        }
    }
}

// ============= MOVIE-GENRE ASSOCIATION (join) =============

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = genres_movie)]
pub struct NewMovieGenreRow {
    pub movie_id: i32,
    pub genre_id: i32,
}

// ================== RATING MODELS ==================

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = movie_ratings)]
pub struct MovieRatingRow {
    pub id: i32,
    pub movie_id: i32,
    pub score: i32,
    pub created_at: DateTime<Utc>,
}

impl From<MovieRatingRow> for MovieRating {
    fn from(row: MovieRatingRow) -> Self {
        MovieRating {
            id: row.id,
            movie_id: row.movie_id,
            score: row.score,
            created_at: row.created_at,
        }
    }
}

/// Insert payload, `created_at` comes from the store's default
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movie_ratings)]
pub struct NewMovieRatingRow {
    pub movie_id: i32,
    pub score: i32,
}
