mod director_repository;
mod genre_repository;
mod movie_repository;
mod rating_repository;

pub use director_repository::DirectorRepository;
pub use genre_repository::GenreRepository;
pub use movie_repository::{MovieFieldChanges, MovieListFilter, MovieRepository, NewMovieRecord};
pub use rating_repository::RatingRepository;
