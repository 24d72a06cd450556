use std::sync::LazyLock;

use derive_more::{AsRef, Display};
use regex::Regex;

use crate::{CreateError, SubmitError, ValidationError};

#[allow(async_fn_in_trait)]
pub trait SubscriptionRepository {
    /// Returns the confirmation message of the API.
    async fn create_subscription(&self, email: Email) -> Result<String, CreateError>;
}

#[allow(async_fn_in_trait)]
pub trait SubscriptionService {
    async fn subscribe(&self, email: &str) -> Result<String, SubmitError>;

    fn validate_email(&self, email: &str) -> Result<Email, ValidationError> {
        Ok(Email::new(email)?)
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rating(f64);

impl Rating {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 5.0;

    pub fn new(value: f64) -> Result<Self, RatingError> {
        if !value.is_finite() {
            return Err(RatingError::NotANumber);
        }
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(RatingError::OutOfRange);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RatingError {
    #[error("Рейтинг повинен бути числом")]
    NotANumber,
    #[error("Будь ласка, виберіть рейтинг від 1 до 5")]
    OutOfRange,
}

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+(\.\w+)?@[a-zA-Z_]+?\.[a-zA-Z]{2,3}$").expect("valid regex")
});

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn new(email: &str) -> Result<Self, EmailError> {
        let trimmed_email = email.trim();

        if !EMAIL.is_match(trimmed_email) {
            return Err(EmailError::Invalid);
        }

        Ok(Email(trimmed_email.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EmailError {
    #[error("Будь ласка, введіть коректний email")]
    Invalid,
}

/// Formats an average rating with one decimal.
#[must_use]
pub fn format_rating(rating: f32) -> String {
    if rating.is_finite() && rating > 0.0 {
        format!("{rating:.1}")
    } else {
        "0.0".to_string()
    }
}
