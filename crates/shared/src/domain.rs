use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ErrorCode};

pub const EMPTY_DESCRIPTION_MESSAGE: &str = "Please enter a description for the floorplan.";

/// Raw text read from the description field at click time.
///
/// The value is kept exactly as typed. Whitespace is only stripped when
/// checking for emptiness, never for transmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserInput(String);

impl UserInput {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Returns the input unchanged when it holds at least one non-whitespace character.
    pub fn validate(self) -> Result<Self, ApiError> {
        if self.is_blank() {
            return Err(ApiError::new(
                ErrorCode::Validation,
                EMPTY_DESCRIPTION_MESSAGE,
            ));
        }
        Ok(self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserInput {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserInput {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Urdu,
}
