use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::dsl::{count_star, sum};
use diesel::pg::Pg;
use diesel::prelude::*;
use tokio::task;

use crate::domain::entities::{Director, Genre, Movie, MovieWithStats};
use crate::domain::repositories::{
    MovieFieldChanges, MovieListFilter, MovieRepository, NewMovieRecord,
};
use crate::infrastructure::database::{
    connection::Database,
    models::{DirectorRow, GenreRow, MovieChangeset, MovieRow, NewMovieGenreRow, NewMovieRow},
};
use crate::schema::{directors, genres, genres_movie, movie_ratings, movies};
use crate::shared::errors::{AppError, AppResult};

pub struct MovieRepositoryImpl {
    db: Arc<Database>,
}

impl MovieRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

/// Builds the filtered movie query. Boxed so the same filter set can be
/// used for both the count and the page query.
fn filtered_movies(filter: &MovieListFilter) -> movies::BoxedQuery<'static, Pg> {
    let mut query = movies::table.into_boxed();

    if let Some(title) = &filter.title {
        query = query.filter(movies::title.ilike(format!("%{}%", title)));
    }
    if let Some(year) = filter.release_year {
        query = query.filter(movies::release_year.eq(year));
    }
    if let Some(genre_name) = &filter.genre_name {
        // Membership via an id subquery keeps the outer count free of
        // join-induced duplicate rows.
        let matching_ids = genres_movie::table
            .inner_join(genres::table)
            .filter(genres::name.eq(genre_name.clone()))
            .select(genres_movie::movie_id);
        query = query.filter(movies::id.eq_any(matching_ids));
    }

    query
}

/// The page slice of the filtered query: stable id order, 1-based page
/// arithmetic.
fn page_query(filter: &MovieListFilter) -> movies::BoxedQuery<'static, Pg> {
    let offset = (filter.page - 1) * filter.page_size;
    filtered_movies(filter)
        .order(movies::id.asc())
        .offset(offset)
        .limit(filter.page_size)
}

/// Hydrates movie rows with their directors and genre sets in two batched
/// lookups, preserving the input row order.
fn load_movie_page(conn: &mut PgConnection, rows: Vec<MovieRow>) -> AppResult<Vec<Movie>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let movie_ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
    let director_ids: Vec<i32> = rows.iter().map(|r| r.director_id).collect();

    let directors_by_id: HashMap<i32, Director> = directors::table
        .filter(directors::id.eq_any(&director_ids))
        .load::<DirectorRow>(conn)?
        .into_iter()
        .map(|d| (d.id, Director::from(d)))
        .collect();

    let mut genres_by_movie: HashMap<i32, Vec<Genre>> = HashMap::new();
    let links: Vec<(i32, GenreRow)> = genres_movie::table
        .inner_join(genres::table)
        .filter(genres_movie::movie_id.eq_any(&movie_ids))
        .order(genres::id.asc())
        .select((genres_movie::movie_id, genres::all_columns))
        .load(conn)?;
    for (movie_id, genre) in links {
        genres_by_movie
            .entry(movie_id)
            .or_default()
            .push(Genre::from(genre));
    }

    let mut result = Vec::with_capacity(rows.len());
    for row in rows {
        let director = directors_by_id
            .get(&row.director_id)
            .cloned()
            .ok_or_else(|| {
                AppError::Database(format!(
                    "Movie {} references missing director {}",
                    row.id, row.director_id
                ))
            })?;
        result.push(Movie {
            id: row.id,
            title: row.title,
            release_year: row.release_year,
            cast: row.cast,
            description: row.description,
            director,
            genres: genres_by_movie.remove(&row.id).unwrap_or_default(),
        });
    }
    Ok(result)
}

/// One grouped query for the whole page. The mean is derived from the exact
/// integer sum; movies absent from the map have no ratings.
fn rating_stats(
    conn: &mut PgConnection,
    movie_ids: &[i32],
) -> AppResult<HashMap<i32, (Option<f64>, i64)>> {
    if movie_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows: Vec<(i32, i64, Option<i64>)> = movie_ratings::table
        .filter(movie_ratings::movie_id.eq_any(movie_ids))
        .group_by(movie_ratings::movie_id)
        .select((movie_ratings::movie_id, count_star(), sum(movie_ratings::score)))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(movie_id, count, total)| {
            let average = total.map(|t| t as f64 / count as f64);
            (movie_id, (average, count))
        })
        .collect())
}

#[async_trait]
impl MovieRepository for MovieRepositoryImpl {
    async fn find_by_id(&self, movie_id: i32) -> AppResult<Option<Movie>> {
        let db = Arc::clone(&self.db);

        let movie = task::spawn_blocking(move || -> AppResult<Option<Movie>> {
            let mut conn = db.get_connection()?;
            let row = movies::table
                .filter(movies::id.eq(movie_id))
                .first::<MovieRow>(&mut conn)
                .optional()?;
            match row {
                Some(row) => Ok(load_movie_page(&mut conn, vec![row])?.into_iter().next()),
                None => Ok(None),
            }
        })
        .await??;

        Ok(movie)
    }

    async fn list_with_stats(
        &self,
        filter: MovieListFilter,
    ) -> AppResult<(Vec<MovieWithStats>, i64)> {
        let db = Arc::clone(&self.db);

        let page = task::spawn_blocking(move || -> AppResult<(Vec<MovieWithStats>, i64)> {
            let mut conn = db.get_connection()?;

            // Count matches before pagination is applied.
            let total_items: i64 = filtered_movies(&filter).count().get_result(&mut conn)?;

            let rows = page_query(&filter).load::<MovieRow>(&mut conn)?;

            let hydrated = load_movie_page(&mut conn, rows)?;
            let movie_ids: Vec<i32> = hydrated.iter().map(|m| m.id).collect();
            let stats = rating_stats(&mut conn, &movie_ids)?;

            let items = hydrated
                .into_iter()
                .map(|movie| {
                    let (average_rating, ratings_count) =
                        stats.get(&movie.id).copied().unwrap_or((None, 0));
                    MovieWithStats {
                        movie,
                        average_rating,
                        ratings_count,
                    }
                })
                .collect();

            Ok((items, total_items))
        })
        .await??;

        Ok(page)
    }

    async fn find_with_stats(&self, movie_id: i32) -> AppResult<Option<MovieWithStats>> {
        let db = Arc::clone(&self.db);

        let result = task::spawn_blocking(move || -> AppResult<Option<MovieWithStats>> {
            let mut conn = db.get_connection()?;
            let row = movies::table
                .filter(movies::id.eq(movie_id))
                .first::<MovieRow>(&mut conn)
                .optional()?;
            let Some(row) = row else {
                return Ok(None);
            };

            let movie = load_movie_page(&mut conn, vec![row])?
                .into_iter()
                .next()
                .ok_or_else(|| AppError::Database("Movie row vanished during hydration".into()))?;

            // Aggregates over zero rows yield (0, NULL), i.e. no average.
            let (ratings_count, total): (i64, Option<i64>) = movie_ratings::table
                .filter(movie_ratings::movie_id.eq(movie_id))
                .select((count_star(), sum(movie_ratings::score)))
                .first(&mut conn)?;
            let average_rating = total.map(|t| t as f64 / ratings_count as f64);

            Ok(Some(MovieWithStats {
                movie,
                average_rating,
                ratings_count,
            }))
        })
        .await??;

        Ok(result)
    }

    async fn create(&self, record: NewMovieRecord) -> AppResult<Movie> {
        let db = Arc::clone(&self.db);

        let movie = task::spawn_blocking(move || -> AppResult<Movie> {
            let mut conn = db.get_connection()?;
            conn.transaction::<Movie, AppError, _>(|conn| {
                let row: MovieRow = diesel::insert_into(movies::table)
                    .values(NewMovieRow {
                        title: record.title,
                        director_id: record.director_id,
                        release_year: record.release_year,
                        cast: record.cast,
                        description: record.description,
                    })
                    .get_result(conn)?;

                if !record.genre_ids.is_empty() {
                    let links: Vec<NewMovieGenreRow> = record
                        .genre_ids
                        .iter()
                        .map(|&genre_id| NewMovieGenreRow {
                            movie_id: row.id,
                            genre_id,
                        })
                        .collect();
                    diesel::insert_into(genres_movie::table)
                        .values(&links)
                        .execute(conn)?;
                }

                load_movie_page(conn, vec![row])?
                    .into_iter()
                    .next()
                    .ok_or_else(|| {
                        AppError::Database("Inserted movie vanished during hydration".into())
                    })
            })
        })
        .await??;

        Ok(movie)
    }

    async fn update_fields(&self, movie_id: i32, changes: MovieFieldChanges) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::update(movies::table.find(movie_id))
                .set(MovieChangeset {
                    title: changes.title,
                    release_year: changes.release_year,
                    cast: changes.cast,
                })
                .execute(&mut conn)?;
            Ok(())
        })
        .await??;

        Ok(())
    }

    async fn replace_genres(&self, movie_id: i32, genre_ids: Vec<i32>) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            conn.transaction::<(), AppError, _>(|conn| {
                diesel::delete(
                    genres_movie::table.filter(genres_movie::movie_id.eq(movie_id)),
                )
                .execute(conn)?;

                if !genre_ids.is_empty() {
                    let links: Vec<NewMovieGenreRow> = genre_ids
                        .iter()
                        .map(|&genre_id| NewMovieGenreRow { movie_id, genre_id })
                        .collect();
                    diesel::insert_into(genres_movie::table)
                        .values(&links)
                        .execute(conn)?;
                }
                Ok(())
            })
        })
        .await??;

        Ok(())
    }

    async fn delete(&self, movie_id: i32) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            // The DDL also cascades; explicit child deletes keep the
            // transaction's effect visible in one place.
            conn.transaction::<(), AppError, _>(|conn| {
                diesel::delete(
                    movie_ratings::table.filter(movie_ratings::movie_id.eq(movie_id)),
                )
                .execute(conn)?;
                diesel::delete(
                    genres_movie::table.filter(genres_movie::movie_id.eq(movie_id)),
                )
                .execute(conn)?;
                diesel::delete(movies::table.find(movie_id)).execute(conn)?;
                Ok(())
            })
        })
        .await??;

        Ok(())
    }
}
