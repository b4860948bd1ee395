use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use log::info;
use serde::Deserialize;

use crate::api::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::api::response::{empty_response, success_response};
use crate::api::routes::AppState;
use crate::application::dto::{MovieCreate, MovieUpdate};
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct MovieListParams {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    pub title: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

impl MovieListParams {
    pub fn validate(&self) -> AppResult<()> {
        if self.page < 1 {
            return Err(AppError::Validation(
                "query.page: must be greater than or equal to 1".into(),
            ));
        }
        if !(1..=100).contains(&self.page_size) {
            return Err(AppError::Validation(
                "query.page_size: must be between 1 and 100".into(),
            ));
        }
        Ok(())
    }
}

pub async fn list_movies(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<MovieListParams>,
) -> AppResult<Response> {
    params.validate()?;

    let result = state
        .movie_service
        .get_movie_list(
            params.page,
            params.page_size,
            params.title,
            params.release_year,
            params.genre,
        )
        .await?;

    Ok(success_response(StatusCode::OK, result))
}

pub async fn get_movie(
    State(state): State<AppState>,
    ApiPath(movie_id): ApiPath<i32>,
) -> AppResult<Response> {
    let result = state.movie_service.get_movie_by_id(movie_id).await?;
    Ok(success_response(StatusCode::OK, result))
}

pub async fn create_movie(
    State(state): State<AppState>,
    ApiJson(movie_data): ApiJson<MovieCreate>,
) -> AppResult<Response> {
    let result = state.movie_service.create_movie(movie_data).await?;
    info!("Created movie {}", result.id);
    Ok(success_response(StatusCode::CREATED, result))
}

pub async fn update_movie(
    State(state): State<AppState>,
    ApiPath(movie_id): ApiPath<i32>,
    ApiJson(movie_data): ApiJson<MovieUpdate>,
) -> AppResult<Response> {
    let result = state.movie_service.update_movie(movie_id, movie_data).await?;
    Ok(success_response(StatusCode::OK, result))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    ApiPath(movie_id): ApiPath<i32>,
) -> AppResult<Response> {
    state.movie_service.delete_movie(movie_id).await?;
    info!("Deleted movie {}", movie_id);
    Ok(empty_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: i64, page_size: i64) -> MovieListParams {
        MovieListParams {
            page,
            page_size,
            title: None,
            release_year: None,
            genre: None,
        }
    }

    #[test]
    fn page_must_be_at_least_one() {
        assert!(params(1, 10).validate().is_ok());
        let err = params(0, 10).validate().unwrap_err();
        assert_eq!(err.status_code(), 422);
        assert!(err.to_string().contains("query.page"));
    }

    #[test]
    fn page_size_is_capped_at_one_hundred() {
        assert!(params(1, 1).validate().is_ok());
        assert!(params(1, 100).validate().is_ok());
        assert!(params(1, 0).validate().is_err());
        assert!(params(1, 101).validate().is_err());
    }

    #[test]
    fn defaults_apply_when_params_are_absent() {
        let parsed: MovieListParams = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.page, 1);
        assert_eq!(parsed.page_size, 10);
        assert!(parsed.title.is_none());
    }
}
