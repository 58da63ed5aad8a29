//! Crate-level error type.

use thiserror::Error;

use crate::types::{EmailError, PriceError};

/// Errors raised while building store entities from raw input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An email address failed validation.
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    /// A price failed validation.
    #[error("Invalid price: {0}")]
    Price(#[from] PriceError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Email, Price};

    fn build(email: &str, price: &str) -> Result<(Email, Price), StoreError> {
        Ok((Email::parse(email)?, price.parse()?))
    }

    #[test]
    fn test_question_mark_conversions() {
        assert!(build("a@b.c", "1").is_ok());
        assert_eq!(
            build("nope", "1"),
            Err(StoreError::Email(EmailError::MissingAtSymbol))
        );
        assert!(matches!(
            build("a@b.c", "-3"),
            Err(StoreError::Price(PriceError::Negative(_)))
        ));
    }

    #[test]
    fn test_messages() {
        let err = StoreError::from(EmailError::Empty);
        assert_eq!(err.to_string(), "Invalid email: email cannot be empty");
    }
}
