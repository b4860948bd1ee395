use crate::shared::errors::AppError;

pub const MIN_RELEASE_YEAR: i32 = 1800;
pub const MAX_RELEASE_YEAR: i32 = 2100;

pub const MIN_RATING_SCORE: i32 = 1;
pub const MAX_RATING_SCORE: i32 = 10;

pub struct Validator;

impl Validator {
    /// Inclusive bounds; 1800 and 2100 are both valid.
    pub fn validate_release_year(release_year: i32) -> Result<(), AppError> {
        if !(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&release_year) {
            return Err(AppError::InvalidReleaseYear { release_year });
        }
        Ok(())
    }

    /// Enforced here and by the store's CHECK constraint.
    pub fn validate_rating_score(score: i32) -> Result<(), AppError> {
        if !(MIN_RATING_SCORE..=MAX_RATING_SCORE).contains(&score) {
            return Err(AppError::InvalidRatingScore { score });
        }
        Ok(())
    }
}
