use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("Index {index} is out of range for a sequence of length {len}")]
    InvalidIndex { index: usize, len: usize },

    #[error("Unknown section: {key}")]
    UnknownSection { key: String },

    #[error("Section key '{key}' is defined more than once in the merged catalog")]
    CatalogMergeCollision { key: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ShowcaseError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ShowcaseError::InvalidIndex { .. } | ShowcaseError::UnknownSection { .. } => {
                ErrorSeverity::Medium
            }
            ShowcaseError::ConfigValidationError { .. }
            | ShowcaseError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            ShowcaseError::SerializationError(_) => ErrorSeverity::High,
            ShowcaseError::CatalogMergeCollision { .. } | ShowcaseError::IoError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ShowcaseError::InvalidIndex { len, .. } if *len == 0 => {
                "The sequence is empty; there is nothing to select".to_string()
            }
            ShowcaseError::InvalidIndex { len, .. } => {
                format!("Pick an index between 0 and {}", len - 1)
            }
            ShowcaseError::UnknownSection { .. } => {
                "Run the `sections` command to list the available keys".to_string()
            }
            ShowcaseError::CatalogMergeCollision { key } => format!(
                "Rename the technology section '{}' or change sections.certifications_key",
                key
            ),
            ShowcaseError::IoError(_) => {
                "Check that the content and config paths exist and are readable".to_string()
            }
            ShowcaseError::SerializationError(_) => {
                "Check the content JSON against the expected document shape".to_string()
            }
            ShowcaseError::ConfigValidationError { field, .. }
            | ShowcaseError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the configuration file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ShowcaseError::InvalidIndex { index, len } => {
                format!("There is no item #{} (only {} available)", index, len)
            }
            ShowcaseError::UnknownSection { key } => format!("No section named '{}'", key),
            ShowcaseError::CatalogMergeCollision { key } => {
                format!("Two sections share the key '{}'", key)
            }
            ShowcaseError::IoError(e) => format!("Could not read a file: {}", e),
            ShowcaseError::SerializationError(e) => format!("Content is not valid: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violations_are_not_critical() {
        let err = ShowcaseError::InvalidIndex { index: 4, len: 3 };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.recovery_suggestion(), "Pick an index between 0 and 2");

        let err = ShowcaseError::UnknownSection {
            key: "nope".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_merge_collision_is_critical() {
        let err = ShowcaseError::CatalogMergeCollision {
            key: "certifications".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.to_string().contains("certifications"));
    }

    #[test]
    fn test_config_errors_name_the_field() {
        let err = ShowcaseError::InvalidConfigValueError {
            field: "assets.base_url".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("assets.base_url"));
    }

    #[test]
    fn test_empty_sequence_suggestion() {
        let err = ShowcaseError::InvalidIndex { index: 0, len: 0 };
        assert!(err.recovery_suggestion().contains("empty"));
    }
}
