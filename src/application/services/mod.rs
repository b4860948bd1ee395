mod movie_service;
mod rating_service;

pub use movie_service::MovieService;
pub use rating_service::RatingService;
