//! Crate error type.

use thiserror::Error;

/// Errors produced by the grouping engine.
///
/// The algorithm itself is total over well-formed input: unknown
/// preference references and empty populations are not errors. Only
/// caller configuration can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupingError {
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
}

impl GroupingError {
    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        GroupingError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GroupingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = GroupingError::invalid_config("group_count", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration: group_count must be at least 1"
        );
    }
}
