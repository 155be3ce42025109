//! Tagged cell value and its coercion rules.
//!
//! # Responsibility
//! - Represent cell contents as an explicit text/number variant.
//! - Centralize every text/number conversion used by retyping and filtering.
//!
//! # Invariants
//! - Coercions are total: unparsable input maps to a defined fallback, never
//!   to an error.
//! - The numeric view of unparsable or blank text is NaN, which fails every
//!   comparison.

use crate::model::column::ColumnType;
use serde::{Deserialize, Serialize};

/// Cell content for one row/column pair.
///
/// Serialized untagged so text cells appear as plain strings and number cells
/// as plain numbers, matching the external row shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Free-form text content.
    Text(String),
    /// Numeric content.
    Number(f64),
}

impl CellValue {
    /// Returns the default content for a freshly created cell of `ty`.
    ///
    /// Text columns default to the empty string, number columns to zero.
    pub fn default_for(ty: ColumnType) -> Self {
        match ty {
            ColumnType::Text => Self::Text(String::new()),
            ColumnType::Number => Self::Number(0.0),
        }
    }

    /// Returns the display text of this value.
    ///
    /// Numbers render without a trailing `.0` for whole values.
    pub fn display_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(value) => value.to_string(),
        }
    }

    /// Numeric view used by comparison filters.
    ///
    /// Text cells are parsed after trimming; unparsable or blank text yields
    /// NaN so that every ordering/equality comparison against it fails.
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) => parse_number(text),
        }
    }

    /// Coerces this value to a `ty` cell, preserving data where a best-effort
    /// conversion exists.
    ///
    /// # Contract
    /// - Same-type coercion is the identity.
    /// - Number to text renders the number.
    /// - Text to number parses the trimmed text; unparsable text falls back
    ///   to the number-column default (zero), never NaN, so retyped cells
    ///   stay representable.
    pub fn coerce_to(&self, ty: ColumnType) -> Self {
        match (self, ty) {
            (Self::Text(_), ColumnType::Text) | (Self::Number(_), ColumnType::Number) => {
                self.clone()
            }
            (Self::Number(value), ColumnType::Text) => Self::Text(value.to_string()),
            (Self::Text(text), ColumnType::Number) => {
                let parsed = parse_number(text);
                if parsed.is_nan() {
                    Self::Number(0.0)
                } else {
                    Self::Number(parsed)
                }
            }
        }
    }
}

/// Parses user-entered text as a comparison number.
///
/// Blank input is unparsable by contract and yields NaN.
pub(crate) fn parse_number(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}
