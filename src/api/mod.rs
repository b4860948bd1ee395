pub mod extractors;
pub mod movie_handlers;
pub mod rating_handlers;
pub mod response;
pub mod routes;
