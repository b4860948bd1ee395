mod director;
mod movie;
mod rating;

pub use director::{DirectorDetail, DirectorSummary};
pub use movie::{MovieCreate, MovieDetail, MovieListItem, MovieListResponse, MovieUpdate};
pub use rating::{RatingCreate, RatingResponse};
