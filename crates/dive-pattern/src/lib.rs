//! Geometric layout engine for the Poor Man's Dive cardboard viewer.
//!
//! The engine turns a validated [`ParameterSet`] into the control points,
//! drawing primitives and page placement of the cut-and-fold pattern. It
//! performs no I/O and knows nothing about markup; see the `dive-svg` crate
//! for serialization.

pub mod constants;
pub mod layout;
mod params;
mod pattern;
mod summary;
mod types;

pub use layout::*;
pub use params::*;
pub use pattern::{Pattern, SidePattern, generate};
pub use summary::{PageSummary, PatternSummary, calculate_summary};
pub use types::*;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Incorrect property name: {0}")]
    UnknownField(String),
    #[error("{field} value {value} out of range ({min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} value {raw:?} is not a number")]
    Unparsable { field: &'static str, raw: String },
    #[error("{field} cannot be unset")]
    Required { field: &'static str },
    #[error("dimensions {0:?} must have the form HxWxD")]
    MalformedDimensions(String),
}

impl ValidationError {
    /// Name of the parameter the error refers to
    pub fn field(&self) -> &str {
        match self {
            ValidationError::UnknownField(name) => name,
            ValidationError::OutOfRange { field, .. }
            | ValidationError::Unparsable { field, .. }
            | ValidationError::Required { field } => field,
            ValidationError::MalformedDimensions(_) => "dimensions",
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
