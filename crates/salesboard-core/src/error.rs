//! # Error Types
//!
//! Domain-specific error types for salesboard-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  salesboard-core errors (this file)                                    │
//! │  ├── AnalysisError    - Fatal failures of one analysis run             │
//! │  └── ValidationError  - Structural input shape failures                │
//! │                                                                         │
//! │  report-cli errors (separate crate)                                    │
//! │  └── ConfigError      - Environment / argument configuration           │
//! │                                                                         │
//! │  Flow: ValidationError → AnalysisError → anyhow (binary boundary)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown seller ids and unknown SKUs are NOT errors. They are skipped
//! during accumulation and never surface here.

use thiserror::Error;

// =============================================================================
// Analysis Error
// =============================================================================

/// Errors that abort a sales analysis.
///
/// Every variant is fatal: no partial report is produced.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A required input collection is missing, not a sequence, or empty.
    ///
    /// ## When This Occurs
    /// - `sellers`, `products` or `purchase_records` has no entries
    /// - Raw JSON input lacks one of the collections or holds a non-array
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// A required strategy was not supplied.
    #[error("Invalid strategy: {strategy} is required")]
    InvalidStrategy { strategy: String },

    /// An element of a collection does not have the expected shape.
    #[error("Malformed {field}: {reason}")]
    Malformed { field: String, reason: String },

    /// Raw input text is not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Returns true for structural input failures (missing/empty collections).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AnalysisError::InvalidInput(_))
    }

    /// Returns true when a required strategy was absent.
    pub fn is_invalid_strategy(&self) -> bool {
        matches!(self, AnalysisError::InvalidStrategy { .. })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Structural validation errors.
///
/// Only the shape of the input is checked. Business semantics (negative
/// prices, discounts above 100, dangling ids) are left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required collection is absent.
    #[error("{field} is required")]
    Required { field: String },

    /// A collection is present but is not an ordered sequence.
    #[error("{field} must be a sequence")]
    NotASequence { field: String },

    /// A collection is present but holds no entries.
    #[error("{field} must not be empty")]
    Empty { field: String },
}

impl ValidationError {
    /// Name of the offending input field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::NotASequence { field }
            | ValidationError::Empty { field } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with AnalysisError.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

// =============================================================================
// Unit Tests
// =============================================================================
