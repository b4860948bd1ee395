mod director_repository_impl;
mod genre_repository_impl;
mod movie_repository_impl;
mod rating_repository_impl;

pub use director_repository_impl::DirectorRepositoryImpl;
pub use genre_repository_impl::GenreRepositoryImpl;
pub use movie_repository_impl::MovieRepositoryImpl;
pub use rating_repository_impl::RatingRepositoryImpl;
