use serde::{Deserialize, Serialize};

use crate::domain::entities::MovieWithStats;

use super::director::{DirectorDetail, DirectorSummary};

/// Averages are exposed rounded to 2 decimal places; internal computation
/// keeps full precision. Ties round away from zero (7.125 -> 7.13).
pub(crate) fn round_average(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieCreate {
    pub title: String,
    pub director_id: i32,
    pub release_year: i32,
    pub cast: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub genres: Vec<i32>,
}

/// Partial update payload. Absent fields are untouched; for `genres`,
/// `Some(vec![])` clears the association while `None` leaves it alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub release_year: Option<i32>,
    pub cast: Option<String>,
    pub genres: Option<Vec<i32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieListItem {
    pub id: i32,
    pub title: String,
    pub release_year: i32,
    pub director: DirectorSummary,
    pub genres: Vec<String>,
    pub average_rating: Option<f64>,
    pub ratings_count: i64,
}

impl From<&MovieWithStats> for MovieListItem {
    fn from(row: &MovieWithStats) -> Self {
        MovieListItem {
            id: row.movie.id,
            title: row.movie.title.clone(),
            release_year: row.movie.release_year,
            director: DirectorSummary::from(&row.movie.director),
            genres: row.movie.genres.iter().map(|g| g.name.clone()).collect(),
            average_rating: row.average_rating.map(round_average),
            ratings_count: row.ratings_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetail {
    pub id: i32,
    pub title: String,
    pub release_year: i32,
    pub cast: Option<String>,
    pub description: Option<String>,
    pub director: DirectorDetail,
    pub genres: Vec<String>,
    pub average_rating: Option<f64>,
    pub ratings_count: i64,
}

impl From<&MovieWithStats> for MovieDetail {
    fn from(row: &MovieWithStats) -> Self {
        MovieDetail {
            id: row.movie.id,
            title: row.movie.title.clone(),
            release_year: row.movie.release_year,
            cast: row.movie.cast.clone(),
            description: row.movie.description.clone(),
            director: DirectorDetail::from(&row.movie.director),
            genres: row.movie.genres.iter().map(|g| g.name.clone()).collect(),
            average_rating: row.average_rating.map(round_average),
            ratings_count: row.ratings_count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MovieListResponse {
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub items: Vec<MovieListItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Director, Genre, Movie};

    fn sample(avg: Option<f64>, count: i64) -> MovieWithStats {
        MovieWithStats {
            movie: Movie {
                id: 1,
                title: "Stalker".into(),
                release_year: 1979,
                cast: Some("Alexander Kaidanovsky".into()),
                description: None,
                director: Director {
                    id: 7,
                    name: "Andrei Tarkovsky".into(),
                    birth_year: Some(1932),
                    description: None,
                },
                genres: vec![
                    Genre {
                        id: 1,
                        name: "Sci-Fi".into(),
                    },
                    Genre {
                        id: 2,
                        name: "Drama".into(),
                    },
                ],
            },
            average_rating: avg,
            ratings_count: count,
        }
    }

    #[test]
    fn average_is_rounded_to_two_places() {
        let item = MovieListItem::from(&sample(Some(23.0 / 3.0), 3));
        assert_eq!(item.average_rating, Some(7.67));
        assert_eq!(item.ratings_count, 3);
    }

    #[test]
    fn average_ties_round_away_from_zero() {
        // 57/8 = 7.125 exactly in binary; the tie goes up, not to even.
        assert_eq!(round_average(57.0 / 8.0), 7.13);
    }

    #[test]
    fn zero_ratings_keep_a_null_average() {
        let detail = MovieDetail::from(&sample(None, 0));
        assert_eq!(detail.average_rating, None);
        assert_eq!(detail.ratings_count, 0);
    }

    #[test]
    fn views_carry_genre_names_in_order() {
        let detail = MovieDetail::from(&sample(None, 0));
        assert_eq!(detail.genres, vec!["Sci-Fi", "Drama"]);
        assert_eq!(detail.director.birth_year, Some(1932));
    }

    #[test]
    fn genres_field_distinguishes_absent_from_empty() {
        let absent: MovieUpdate = serde_json::from_str(r#"{"title":"New"}"#).unwrap();
        assert!(absent.genres.is_none());

        let empty: MovieUpdate = serde_json::from_str(r#"{"genres":[]}"#).unwrap();
        assert_eq!(empty.genres, Some(vec![]));
    }
}
