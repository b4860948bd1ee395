use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;

use crate::api::response::success_response;
use crate::api::{movie_handlers, rating_handlers};
use crate::application::services::{MovieService, RatingService};

#[derive(Clone)]
pub struct AppState {
    pub movie_service: Arc<MovieService>,
    pub rating_service: Arc<RatingService>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route(
            "/api/v1/movies",
            get(movie_handlers::list_movies).post(movie_handlers::create_movie),
        )
        .route(
            "/api/v1/movies/{movie_id}",
            get(movie_handlers::get_movie)
                .put(movie_handlers::update_movie)
                .delete(movie_handlers::delete_movie),
        )
        .route(
            "/api/v1/movies/{movie_id}/ratings",
            post(rating_handlers::create_rating),
        )
        .with_state(state)
}

async fn root() -> Response {
    success_response(
        StatusCode::OK,
        json!({ "message": "Movie Rating System API" }),
    )
}
