use regex::Regex;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    /// Scores live on a 1-10 scale, matching the rating column constraint.
    pub fn validate_score(score: f64) -> Result<(), AppError> {
        if !(1.0..=10.0).contains(&score) {
            return Err(AppError::ValidationError(
                "Score must be between 1 and 10".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_review_text(text: &str) -> Result<(), AppError> {
        if text.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Review text cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_list_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "List name cannot be empty".to_string(),
            ));
        }
        if name.len() > 100 {
            return Err(AppError::ValidationError(
                "List name too long (max 100 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_username(username: &str) -> Result<(), AppError> {
        if username.len() < 3 || username.len() > 50 {
            return Err(AppError::ValidationError(
                "Username must be between 3 and 50 characters".to_string(),
            ));
        }

        let re = Regex::new(r"^[a-zA-Z0-9_\-.]+$")
            .map_err(|e| AppError::InternalError(format!("Invalid username pattern: {}", e)))?;
        if !re.is_match(username) {
            return Err(AppError::ValidationError(
                "Username contains invalid characters".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bounds_are_inclusive() {
        assert!(Validator::validate_score(1.0).is_ok());
        assert!(Validator::validate_score(10.0).is_ok());
        assert!(Validator::validate_score(0.9).is_err());
        assert!(Validator::validate_score(10.1).is_err());
    }

    #[test]
    fn review_text_must_have_content() {
        assert!(Validator::validate_review_text("great pacing").is_ok());
        assert!(Validator::validate_review_text("   ").is_err());
    }

    #[test]
    fn list_name_length_is_capped() {
        assert!(Validator::validate_list_name("Winter watchlist").is_ok());
        assert!(Validator::validate_list_name(&"x".repeat(101)).is_err());
        assert!(Validator::validate_list_name("").is_err());
    }

    #[test]
    fn username_charset() {
        assert!(Validator::validate_username("sana.k_92").is_ok());
        assert!(Validator::validate_username("no spaces").is_err());
        assert!(Validator::validate_username("ab").is_err());
    }
}
