use serde::{Deserialize, Serialize};

use crate::domain::{Language, UserInput};

pub const GENERATE_PATH: &str = "/generate";

/// Body of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub user_input: UserInput,
}

impl GenerateRequest {
    pub fn new(user_input: impl Into<UserInput>) -> Self {
        Self {
            user_input: user_input.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorplanSpec {
    pub bedrooms: u8,
    pub washrooms: u8,
    pub has_garage: bool,
    pub has_attached_washroom: bool,
    pub language: Language,
}

impl Default for FloorplanSpec {
    fn default() -> Self {
        Self {
            bedrooms: 2,
            washrooms: 1,
            has_garage: false,
            has_attached_washroom: false,
            language: Language::English,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerateStatus {
    Accepted,
}

/// What the bundled development server answers with. Clients treat the
/// response body as opaque JSON and never require this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub status: GenerateStatus,
    pub spec: FloorplanSpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_serializes_raw_input() {
        let body = serde_json::to_value(GenerateRequest::new(" open plan loft ")).expect("json");
        assert_eq!(body, serde_json::json!({ "user_input": " open plan loft " }));
    }

    #[test]
    fn generate_response_uses_snake_case_status() {
        let response = GenerateResponse {
            status: GenerateStatus::Accepted,
            spec: FloorplanSpec::default(),
        };
        let value = serde_json::to_value(response).expect("json");
        assert_eq!(value["status"], "accepted");
        assert_eq!(value["spec"]["bedrooms"], 2);
        assert_eq!(value["spec"]["language"], "English");
    }
}
