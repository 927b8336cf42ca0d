//! Identity configuration.
//!
//! Static fields embedded verbatim in every `/bfhl` response. Loaded once at
//! startup and never mutated.

use config::ConfigError;
use serde::Deserialize;

/// Static identity fields.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Full name component of the user id.
    #[serde(default = "default_full_name")]
    pub full_name: String,

    /// Birth date component of the user id (DDMMYYYY).
    #[serde(default = "default_birth_date")]
    pub birth_date: String,

    /// Contact email.
    #[serde(default = "default_email")]
    pub email: String,

    /// Roll number.
    #[serde(default = "default_roll_number")]
    pub roll_number: String,
}

fn default_full_name() -> String {
    "meet_bhuva".to_string()
}

fn default_birth_date() -> String {
    "01012005".to_string()
}

fn default_email() -> String {
    "meetpatel0852@gmail.com".to_string()
}

fn default_roll_number() -> String {
    "22BCE10033".to_string()
}

impl IdentityConfig {
    /// Derive the user id as `{full_name}_{birth_date}`.
    #[must_use]
    pub fn user_id(&self) -> String {
        format!("{}_{}", self.full_name, self.birth_date)
    }

    /// Validate the identity fields.
    ///
    /// # Errors
    ///
    /// Returns an error if a user-id component is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.full_name.is_empty() {
            return Err(ConfigError::Message(
                "identity.full_name cannot be empty".to_string(),
            ));
        }
        if self.birth_date.is_empty() {
            return Err(ConfigError::Message(
                "identity.birth_date cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            full_name: default_full_name(),
            birth_date: default_birth_date(),
            email: default_email(),
            roll_number: default_roll_number(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_derivation() {
        let identity = IdentityConfig::default();
        assert_eq!(identity.user_id(), "meet_bhuva_01012005");
    }

    #[test]
    fn test_validation_rejects_empty_components() {
        let identity = IdentityConfig {
            full_name: String::new(),
            ..Default::default()
        };
        assert!(identity.validate().is_err());

        let identity = IdentityConfig {
            birth_date: String::new(),
            ..Default::default()
        };
        assert!(identity.validate().is_err());
    }
}
