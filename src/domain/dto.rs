//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};

use crate::config::IdentityConfig;
use crate::service::Classification;

/// Request body for `POST /bfhl`.
#[derive(Debug, Clone, Deserialize)]
pub struct BfhlRequest {
    /// Ordered input tokens. Duplicates allowed; may be empty.
    pub data: Vec<String>,
}

/// Response body for `POST /bfhl`.
///
/// The field names and shape are part of the external contract and must not
/// change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BfhlResponse {
    /// Always true on a 200 response.
    pub is_success: bool,

    /// `{full_name}_{birth_date}`.
    pub user_id: String,

    /// Contact email.
    pub email: String,

    /// Roll number.
    pub roll_number: String,

    /// Numeric tokens with odd values, original string form.
    pub odd_numbers: Vec<String>,

    /// Numeric tokens with even values, original string form.
    pub even_numbers: Vec<String>,

    /// Tokens containing letters, upper-cased.
    pub alphabets: Vec<String>,

    /// Tokens with no letters that are not numeric.
    pub special_characters: Vec<String>,

    /// String-encoded decimal sum of all numeric tokens.
    pub sum: String,

    /// Reversed, alternate-cased letter concatenation.
    pub concat_string: String,
}

impl BfhlResponse {
    /// Assemble a success response from a classification and the static
    /// identity fields.
    #[must_use]
    pub fn new(identity: &IdentityConfig, classification: Classification) -> Self {
        Self {
            is_success: true,
            user_id: identity.user_id(),
            email: identity.email.clone(),
            roll_number: identity.roll_number.clone(),
            odd_numbers: classification.odd_numbers,
            even_numbers: classification.even_numbers,
            alphabets: classification.alphabets,
            special_characters: classification.special_characters,
            sum: classification.sum,
            concat_string: classification.concat_string,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_embeds_identity() {
        let identity = IdentityConfig::default();
        let response = BfhlResponse::new(&identity, Classification::default());

        assert!(response.is_success);
        assert_eq!(response.user_id, "meet_bhuva_01012005");
        assert_eq!(response.email, "meetpatel0852@gmail.com");
        assert_eq!(response.roll_number, "22BCE10033");
    }

    #[test]
    fn test_response_field_names() {
        let identity = IdentityConfig::default();
        let response = BfhlResponse::new(&identity, Classification::default());
        let value = serde_json::to_value(&response).unwrap();

        for field in [
            "is_success",
            "user_id",
            "email",
            "roll_number",
            "odd_numbers",
            "even_numbers",
            "alphabets",
            "special_characters",
            "sum",
            "concat_string",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
    }

    #[test]
    fn test_request_requires_data_field() {
        let result = serde_json::from_str::<BfhlRequest>(r#"{"items": []}"#);
        assert!(result.is_err());
    }
}
