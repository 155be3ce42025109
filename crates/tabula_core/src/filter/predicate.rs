//! Filter operations and match evaluation.
//!
//! # Responsibility
//! - Define the comparison operations offered by column filter popovers.
//! - Decide whether a cell satisfies one column's filter entry.
//!
//! # Invariants
//! - Text comparisons are case-insensitive.
//! - Numeric comparisons against NaN are false, so unparsable cell or filter
//!   text excludes the row.
//! - An operation that does not apply to the column's current type passes
//!   every row instead of failing.

use crate::model::column::ColumnType;
use crate::model::value::{parse_number, CellValue};
use serde::{Deserialize, Serialize};

/// Comparison operation selectable in a column filter.
///
/// Text columns use `Contains`/`NotContains`/`Equals`; number columns use
/// `GreaterThan`/`LessThan`/`EqualTo`. Wire names are camelCase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOp {
    /// Case-insensitive substring containment.
    Contains,
    /// Negated case-insensitive substring containment.
    NotContains,
    /// Case-insensitive exact equality.
    Equals,
    /// Numeric `>` comparison.
    GreaterThan,
    /// Numeric `<` comparison.
    LessThan,
    /// Numeric `==` comparison.
    EqualTo,
}

impl FilterOp {
    /// Parses the camelCase wire name used by operation selectors.
    ///
    /// Returns `None` for unrecognized names so callers can treat them as an
    /// unset operation.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "contains" => Some(Self::Contains),
            "notContains" => Some(Self::NotContains),
            "equals" => Some(Self::Equals),
            "greaterThan" => Some(Self::GreaterThan),
            "lessThan" => Some(Self::LessThan),
            "equalTo" => Some(Self::EqualTo),
            _ => None,
        }
    }

    /// Returns the camelCase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::NotContains => "notContains",
            Self::Equals => "equals",
            Self::GreaterThan => "greaterThan",
            Self::LessThan => "lessThan",
            Self::EqualTo => "equalTo",
        }
    }

    /// Returns whether this operation belongs to the `ty` operation set.
    pub fn applies_to(self, ty: ColumnType) -> bool {
        match self {
            Self::Contains | Self::NotContains | Self::Equals => ty == ColumnType::Text,
            Self::GreaterThan | Self::LessThan | Self::EqualTo => ty == ColumnType::Number,
        }
    }
}

/// One column's filter state: comparison text plus optional operation.
///
/// `op = None` marks an entry the user is still configuring; it imposes no
/// constraint yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnFilter {
    /// Raw comparison text as typed by the user.
    pub value: String,
    /// Selected operation, if any.
    #[serde(rename = "operation")]
    pub op: Option<FilterOp>,
}

impl ColumnFilter {
    /// Returns whether `cell` satisfies this entry for a `ty` column.
    ///
    /// # Contract
    /// - No operation set: passes.
    /// - Number column: compares the numeric views of cell and filter text;
    ///   any NaN operand fails the comparison.
    /// - Text column: case-insensitive containment/equality on display text.
    /// - Operation outside the column's set: passes.
    pub fn matches(&self, ty: ColumnType, cell: &CellValue) -> bool {
        let Some(op) = self.op else {
            return true;
        };

        match ty {
            ColumnType::Number => {
                let cell_number = cell.as_number();
                let filter_number = parse_number(&self.value);
                match op {
                    FilterOp::GreaterThan => cell_number > filter_number,
                    FilterOp::LessThan => cell_number < filter_number,
                    FilterOp::EqualTo => cell_number == filter_number,
                    _ => true,
                }
            }
            ColumnType::Text => {
                let cell_text = cell.display_text().to_lowercase();
                let filter_text = self.value.to_lowercase();
                match op {
                    FilterOp::Contains => cell_text.contains(&filter_text),
                    FilterOp::NotContains => !cell_text.contains(&filter_text),
                    FilterOp::Equals => cell_text == filter_text,
                    _ => true,
                }
            }
        }
    }
}
