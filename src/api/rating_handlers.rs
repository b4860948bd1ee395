use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use log::info;

use crate::api::extractors::{ApiJson, ApiPath};
use crate::api::response::success_response;
use crate::api::routes::AppState;
use crate::application::dto::RatingCreate;
use crate::shared::errors::AppResult;

pub async fn create_rating(
    State(state): State<AppState>,
    ApiPath(movie_id): ApiPath<i32>,
    ApiJson(rating_data): ApiJson<RatingCreate>,
) -> AppResult<Response> {
    let result = state
        .rating_service
        .create_rating(movie_id, rating_data)
        .await?;

    info!("Created rating {} for movie {}", result.rating_id, movie_id);
    Ok(success_response(StatusCode::CREATED, result))
}
