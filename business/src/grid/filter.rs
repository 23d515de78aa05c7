//! Column filters.
//!
//! A filter only decides whether a row is displayed. Rows that fail are
//! hidden from the table; the loaded data is never touched.

use std::collections::BTreeMap;

use super::columns::{CellValue, ColumnKey, FilterKind, column_def};
use crate::matches::MatchRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFilterOp {
    #[default]
    Contains,
    NotContains,
    Equals,
    NotEqual,
    StartsWith,
    EndsWith,
}

impl TextFilterOp {
    pub const ALL: [Self; 6] = [
        Self::Contains,
        Self::NotContains,
        Self::Equals,
        Self::NotEqual,
        Self::StartsWith,
        Self::EndsWith,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Contains => "Contains",
            Self::NotContains => "Does not contain",
            Self::Equals => "Equals",
            Self::NotEqual => "Does not equal",
            Self::StartsWith => "Begins with",
            Self::EndsWith => "Ends with",
        }
    }
}

/// Case-insensitive text predicate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFilter {
    pub op: TextFilterOp,
    pub text: String,
}

impl TextFilter {
    pub fn new(op: TextFilterOp, text: impl Into<String>) -> Self {
        Self {
            op,
            text: text.into(),
        }
    }

    pub fn contains(text: impl Into<String>) -> Self {
        Self::new(TextFilterOp::Contains, text)
    }

    pub fn is_active(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn matches(&self, value: &str) -> bool {
        if !self.is_active() {
            return true;
        }

        let value = value.to_lowercase();
        let needle = self.text.to_lowercase();

        match self.op {
            TextFilterOp::Contains => value.contains(&needle),
            TextFilterOp::NotContains => !value.contains(&needle),
            TextFilterOp::Equals => value == needle,
            TextFilterOp::NotEqual => value != needle,
            TextFilterOp::StartsWith => value.starts_with(&needle),
            TextFilterOp::EndsWith => value.ends_with(&needle),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberFilterOp {
    #[default]
    Equals,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    InRange,
}

/// Numeric predicate. `InRange` uses both bounds, inclusively.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumberFilter {
    pub op: NumberFilterOp,
    pub value: Option<f64>,
    pub value_to: Option<f64>,
}

impl NumberFilter {
    pub fn new(op: NumberFilterOp, value: f64) -> Self {
        Self {
            op,
            value: Some(value),
            value_to: None,
        }
    }

    pub fn in_range(from: f64, to: f64) -> Self {
        Self {
            op: NumberFilterOp::InRange,
            value: Some(from),
            value_to: Some(to),
        }
    }

    /// Builds the filter of a "min / max" input pair; `None` when both are empty.
    pub fn from_bounds(min: Option<f64>, max: Option<f64>) -> Option<Self> {
        match (min, max) {
            (Some(min), Some(max)) => Some(Self::in_range(min, max)),
            (Some(min), None) => Some(Self::new(NumberFilterOp::GreaterThanOrEqual, min)),
            (None, Some(max)) => Some(Self::new(NumberFilterOp::LessThanOrEqual, max)),
            (None, None) => None,
        }
    }

    pub fn is_active(&self) -> bool {
        match self.op {
            NumberFilterOp::InRange => self.value.is_some() && self.value_to.is_some(),
            _ => self.value.is_some(),
        }
    }

    /// Rows without a number fail every active filter.
    pub fn matches(&self, value: Option<f64>) -> bool {
        if !self.is_active() {
            return true;
        }
        let (Some(value), Some(bound)) = (value, self.value) else {
            return false;
        };

        match self.op {
            NumberFilterOp::Equals => value == bound,
            NumberFilterOp::NotEqual => value != bound,
            NumberFilterOp::LessThan => value < bound,
            NumberFilterOp::LessThanOrEqual => value <= bound,
            NumberFilterOp::GreaterThan => value > bound,
            NumberFilterOp::GreaterThanOrEqual => value >= bound,
            NumberFilterOp::InRange => {
                let to = self.value_to.unwrap_or(bound);
                let (low, high) = if bound <= to { (bound, to) } else { (to, bound) };
                low <= value && value <= high
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnFilter {
    Text(TextFilter),
    Number(NumberFilter),
}

impl ColumnFilter {
    pub fn is_active(&self) -> bool {
        match self {
            Self::Text(filter) => filter.is_active(),
            Self::Number(filter) => filter.is_active(),
        }
    }

    pub fn matches(&self, value: CellValue<'_>) -> bool {
        match (self, value) {
            (Self::Text(filter), CellValue::Text(text)) => filter.matches(text),
            (Self::Text(filter), other) => filter.matches(&other.to_string()),
            (Self::Number(filter), CellValue::Number(n)) => filter.matches(n),
            (Self::Number(filter), CellValue::Serial(n)) => filter.matches(Some(n as f64)),
            (Self::Number(filter), CellValue::Text(text)) => {
                filter.matches(text.trim().parse().ok())
            }
        }
    }
}

/// Active filters by column. All of them must pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterModel {
    filters: BTreeMap<ColumnKey, ColumnFilter>,
}

impl FilterModel {
    /// Installs `filter` on `key`. Columns without a filter refuse it.
    ///
    /// Returns whether the model changed.
    pub fn set(&mut self, key: ColumnKey, filter: ColumnFilter) -> bool {
        if column_def(key).filter == FilterKind::None {
            return false;
        }
        if !filter.is_active() {
            return self.clear(key);
        }
        if self.filters.get(&key) == Some(&filter) {
            return false;
        }
        self.filters.insert(key, filter);
        true
    }

    pub fn clear(&mut self, key: ColumnKey) -> bool {
        self.filters.remove(&key).is_some()
    }

    pub fn get(&self, key: ColumnKey) -> Option<&ColumnFilter> {
        self.filters.get(&key)
    }

    pub fn is_active(&self) -> bool {
        !self.filters.is_empty()
    }

    pub fn matches(&self, row: &MatchRow) -> bool {
        self.filters
            .iter()
            .all(|(key, filter)| filter.matches(key.value(row)))
    }
}
