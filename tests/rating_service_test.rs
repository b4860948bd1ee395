mod common;

use std::sync::Arc;

use chrono::Utc;

use cinelog::application::dto::RatingCreate;
use cinelog::application::services::RatingService;
use cinelog::domain::entities::MovieRating;
use cinelog::shared::errors::AppError;

use common::{movie, MockMovieRepo, MockRatingRepo};

fn service(rating_repo: MockRatingRepo, movie_repo: MockMovieRepo) -> RatingService {
    RatingService::new(Arc::new(rating_repo), Arc::new(movie_repo))
}

#[tokio::test]
async fn rating_fails_for_unknown_movie() {
    let mut movie_repo = MockMovieRepo::new();
    movie_repo
        .expect_find_by_id()
        .withf(|&id| id == 404)
        .returning(|_| Ok(None));

    let service = service(MockRatingRepo::new(), movie_repo);

    let err = service
        .create_rating(404, RatingCreate { score: 5 })
        .await
        .unwrap_err();
    assert_eq!(err, AppError::MovieNotFound { movie_id: 404 });
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn rating_rejects_scores_outside_bounds() {
    let mut movie_repo = MockMovieRepo::new();
    movie_repo
        .expect_find_by_id()
        .returning(|id| Ok(Some(movie(id, "Solaris", 1972, vec![]))));

    // The rating repository must never be reached with an invalid score.
    let service = service(MockRatingRepo::new(), movie_repo);

    for score in [0, 11, -3] {
        let err = service
            .create_rating(1, RatingCreate { score })
            .await
            .unwrap_err();
        assert_eq!(err, AppError::InvalidRatingScore { score });
        assert_eq!(err.status_code(), 422);
    }
}

#[tokio::test]
async fn rating_accepts_inclusive_score_bounds() {
    let mut movie_repo = MockMovieRepo::new();
    movie_repo
        .expect_find_by_id()
        .returning(|id| Ok(Some(movie(id, "Solaris", 1972, vec![]))));

    let mut rating_repo = MockRatingRepo::new();
    rating_repo
        .expect_create()
        .times(2)
        .returning(|movie_id, score| {
            Ok(MovieRating {
                id: 77,
                movie_id,
                score,
                created_at: Utc::now(),
            })
        });

    let service = service(rating_repo, movie_repo);

    for score in [1, 10] {
        let response = service
            .create_rating(1, RatingCreate { score })
            .await
            .unwrap();
        assert_eq!(response.score, score);
    }
}

#[tokio::test]
async fn rating_response_carries_the_stored_fields() {
    let created_at = Utc::now();

    let mut movie_repo = MockMovieRepo::new();
    movie_repo
        .expect_find_by_id()
        .returning(|id| Ok(Some(movie(id, "Solaris", 1972, vec![]))));

    let mut rating_repo = MockRatingRepo::new();
    rating_repo
        .expect_create()
        .withf(|&movie_id, &score| movie_id == 3 && score == 8)
        .returning(move |movie_id, score| {
            Ok(MovieRating {
                id: 42,
                movie_id,
                score,
                created_at,
            })
        });

    let service = service(rating_repo, movie_repo);

    let response = service
        .create_rating(3, RatingCreate { score: 8 })
        .await
        .unwrap();

    assert_eq!(response.rating_id, 42);
    assert_eq!(response.movie_id, 3);
    assert_eq!(response.score, 8);
    assert_eq!(response.created_at, created_at);
}
