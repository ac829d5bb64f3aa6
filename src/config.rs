use serde::Deserialize;

use crate::errors::MetadataError;

pub const DEFAULT_BILLING_PLACEHOLDER: &str = "None configured";
pub const DEFAULT_IMPORT_PLACEHOLDER: &str = "Never imported";

/// Texts the builder substitutes for missing billing and import data.
///
/// Passed explicitly by the caller; nothing is read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Sole entry of `Billing system(s)` when no connector is configured.
    pub billing_placeholder: String,
    /// `Import status` when the main connector never reported one.
    pub import_placeholder: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            billing_placeholder: DEFAULT_BILLING_PLACEHOLDER.to_string(),
            import_placeholder: DEFAULT_IMPORT_PLACEHOLDER.to_string(),
        }
    }
}

impl MetadataConfig {
    /// Rejects blank placeholders, which would render as empty rows.
    pub fn validate(&self) -> Result<(), MetadataError> {
        if self.billing_placeholder.trim().is_empty() {
            tracing::warn!("Rejected metadata config: blank billing placeholder");
            return Err(MetadataError::InvalidConfig(
                "billing_placeholder cannot be empty".to_string(),
            ));
        }
        if self.import_placeholder.trim().is_empty() {
            tracing::warn!("Rejected metadata config: blank import placeholder");
            return Err(MetadataError::InvalidConfig(
                "import_placeholder cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON config object. Missing keys take defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, MetadataError> {
        let config: MetadataConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MetadataConfig::default();

        assert_eq!(config.billing_placeholder, "None configured");
        assert_eq!(config.import_placeholder, "Never imported");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = MetadataConfig::from_json_str(r#"{"import_placeholder": "Not yet"}"#).unwrap();

        assert_eq!(config.billing_placeholder, DEFAULT_BILLING_PLACEHOLDER);
        assert_eq!(config.import_placeholder, "Not yet");
    }

    #[test]
    fn test_blank_placeholder_rejected() {
        let err = MetadataConfig::from_json_str(r#"{"billing_placeholder": "  "}"#).unwrap_err();

        assert_eq!(
            err,
            MetadataError::InvalidConfig("billing_placeholder cannot be empty".to_string())
        );
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = MetadataConfig::from_json_str("[1, 2]").unwrap_err();

        assert!(matches!(err, MetadataError::InvalidPayload(_)));
    }
}
