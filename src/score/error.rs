//! Error types for MPO scoring.
//!
//! Two tiers exist. [`Error`] aborts a whole run: it can only come from the
//! fixed boundary constants, never from input data. [`RecordError`] describes
//! why a single record could not be scored; it is reported and the batch
//! continues.

use thiserror::Error;

use crate::model::property::Property;

/// Fatal scoring errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A transfer function was asked to interpolate over a zero-width span.
    #[error("degenerate transfer function boundaries: lower {lower} equals upper {upper}")]
    DegenerateBoundary {
        /// Breakpoint where the ramp starts.
        lower: f64,
        /// Breakpoint where the ramp ends.
        upper: f64,
    },
}

/// Per-record scoring failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required property field is absent.
    #[error("record {record}: required field '{property}' is missing")]
    MissingProperty {
        /// Record name, or `#<position>` when unnamed.
        record: String,
        /// The absent property.
        property: Property,
    },

    /// A property field is present but does not hold a finite number.
    #[error("record {record}: field '{property}' holds a non-numeric value '{value}'")]
    MalformedValue {
        /// Record name, or `#<position>` when unnamed.
        record: String,
        /// The offending property.
        property: Property,
        /// Raw field text.
        value: String,
    },
}

impl Error {
    pub fn degenerate(lower: f64, upper: f64) -> Self {
        Self::DegenerateBoundary { lower, upper }
    }
}

impl RecordError {
    /// The property the failure refers to.
    pub fn property(&self) -> Property {
        match self {
            RecordError::MissingProperty { property, .. }
            | RecordError::MalformedValue { property, .. } => *property,
        }
    }

    /// Label of the record the failure refers to.
    pub fn record(&self) -> &str {
        match self {
            RecordError::MissingProperty { record, .. }
            | RecordError::MalformedValue { record, .. } => record,
        }
    }
}
