//! Identifier validation
//!
//! The pure first stage of every id-taking command pipeline: turn the raw
//! argument token into a well-formed storage key or fail with a
//! descriptive error. Existence is checked downstream by the store lookup,
//! never here.

use thiserror::Error;

/// Why an id token could not be validated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("missing parameter: expected a quiz id")]
    Missing,

    #[error("the value '{token}' is not a number")]
    NotANumber { token: String },
}

/// Validate a raw id token into an integer storage key.
///
/// # Errors
///
/// Returns [`IdError::Missing`] when the token is absent and
/// [`IdError::NotANumber`] when it does not parse to an integer.
pub fn validate_id(token: Option<&str>) -> Result<i64, IdError> {
    let token = token.ok_or(IdError::Missing)?;
    token.trim().parse::<i64>().map_err(|_| IdError::NotANumber {
        token: token.to_string(),
    })
}
