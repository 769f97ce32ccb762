//! # Error Types
//!
//! Structured error types for wsection. Each variant carries enough context
//! for a caller to understand and fix the problem programmatically.
//!
//! ## Example
//!
//! ```rust
//! use wsection::errors::SectionError;
//!
//! let err = SectionError::section_not_found("W99x999");
//! assert_eq!(err.error_code(), "SECTION_NOT_FOUND");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for wsection operations
pub type SectionResult<T> = Result<T, SectionError>;

/// Structured error type for section lookups and property access.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SectionError {
    /// The reference table cannot be located or read (includes a present
    /// but malformed table). The table is static, so retrying has no value.
    #[error("Section table unavailable: '{path}' - {reason}")]
    ResourceNotFound { path: String, reason: String },

    /// No row in the table matches the requested section name
    #[error("Section \"{section}\" not found")]
    SectionNotFound { section: String },

    /// A property that depends on the yield strength was read before the
    /// yield strength was set
    #[error("'{field}' is undefined: yield strength not set")]
    UndefinedValue { field: String },
}

impl SectionError {
    /// Create a ResourceNotFound error
    pub fn resource_not_found(path: impl Into<String>, reason: impl Into<String>) -> Self {
        SectionError::ResourceNotFound {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(section: impl Into<String>) -> Self {
        SectionError::SectionNotFound {
            section: section.into(),
        }
    }

    /// Create an UndefinedValue error
    pub fn undefined_value(field: impl Into<String>) -> Self {
        SectionError::UndefinedValue {
            field: field.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry with different input)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SectionError::SectionNotFound { .. } | SectionError::UndefinedValue { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SectionError::ResourceNotFound { .. } => "RESOURCE_NOT_FOUND",
            SectionError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            SectionError::UndefinedValue { .. } => "UNDEFINED_VALUE",
        }
    }
}
