use std::fmt;

/// Errors raised around the metadata builder.
///
/// The builder itself never fails on missing account data; these cover
/// parsing provider snapshots and validating configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// An account snapshot could not be parsed.
    InvalidPayload(String),
    /// A builder configuration was rejected.
    InvalidConfig(String),
    /// Error with context chain for better debugging.
    WithContext {
        /// The underlying source of the error.
        source: Box<MetadataError>,
        /// Additional context message.
        context: String,
    },
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::InvalidPayload(msg) => write!(f, "Invalid payload: {}", msg),
            MetadataError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            MetadataError::WithContext { source, context } => {
                write!(f, "{}: {}", context, source)
            }
        }
    }
}

impl std::error::Error for MetadataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MetadataError::WithContext { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for MetadataError {
    /// Converts a `serde_json::Error` into a `MetadataError`.
    fn from(err: serde_json::Error) -> Self {
        MetadataError::InvalidPayload(err.to_string())
    }
}

/// Extension trait for adding context to errors.
/// Similar to `anyhow::Context` but for our `MetadataError` type.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T, MetadataError>;

    /// Add context lazily (only evaluated on error).
    fn with_context<F>(self, f: F) -> Result<T, MetadataError>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T, MetadataError> {
    fn context(self, context: impl Into<String>) -> Result<T, MetadataError> {
        self.map_err(|e| MetadataError::WithContext {
            source: Box::new(e),
            context: context.into(),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T, MetadataError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| MetadataError::WithContext {
            source: Box::new(e),
            context: f(),
        })
    }
}

/// Extension for serde_json::Error to add context
impl<T> ResultExt<T> for Result<T, serde_json::Error> {
    fn context(self, context: impl Into<String>) -> Result<T, MetadataError> {
        self.map_err(|e| MetadataError::WithContext {
            source: Box::new(MetadataError::from(e)),
            context: context.into(),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T, MetadataError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| MetadataError::WithContext {
            source: Box::new(MetadataError::from(e)),
            context: f(),
        })
    }
}

impl MetadataError {
    /// Returns the innermost error, skipping any context layers.
    pub fn root(&self) -> &MetadataError {
        match self {
            MetadataError::WithContext { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_chain_display() {
        let result: Result<(), MetadataError> =
            Err(MetadataError::InvalidConfig("blank placeholder".to_string()));
        let err = result.context("loading builder config").unwrap_err();

        assert_eq!(
            err.to_string(),
            "loading builder config: Invalid config: blank placeholder"
        );
        assert_eq!(
            err.root(),
            &MetadataError::InvalidConfig("blank placeholder".to_string())
        );
    }

    #[test]
    fn test_serde_error_maps_to_invalid_payload() {
        let parsed: Result<serde_json::Value, serde_json::Error> = serde_json::from_str("{");
        let err = parsed.with_context(|| "parsing snapshot".to_string()).unwrap_err();

        assert!(matches!(err.root(), MetadataError::InvalidPayload(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
