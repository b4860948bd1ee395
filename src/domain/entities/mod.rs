mod director;
mod genre;
mod movie;
mod rating;

pub use director::Director;
pub use genre::Genre;
pub use movie::{Movie, MovieWithStats};
pub use rating::MovieRating;
