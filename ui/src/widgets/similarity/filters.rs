//! Editable filter row state.
//!
//! The table's filter row edits raw strings; [`FilterInputs::apply_to`]
//! turns them into the grid's filter model once per frame.

use std::collections::BTreeMap;

use similarity_business::{
    ColumnFilter, ColumnKey, FilterKind, GridModel, NumberFilter, TextFilter, TextFilterOp,
    column_def,
};

/// Text typed into one text column's filter cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFilterInput {
    pub op: TextFilterOp,
    pub text: String,
}

/// Strings typed into a number column's min / max cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberFilterInput {
    pub min: String,
    pub max: String,
}

#[derive(Debug, Clone, Default)]
pub struct FilterInputs {
    text: BTreeMap<ColumnKey, TextFilterInput>,
    number: BTreeMap<ColumnKey, NumberFilterInput>,
}

impl FilterInputs {
    pub fn text_mut(&mut self, key: ColumnKey) -> &mut TextFilterInput {
        self.text.entry(key).or_default()
    }

    pub fn number_mut(&mut self, key: ColumnKey) -> &mut NumberFilterInput {
        self.number.entry(key).or_default()
    }

    /// Pushes the typed values into `grid`. Returns whether the grid's
    /// filters changed.
    pub fn apply_to(&self, grid: &mut GridModel) -> bool {
        let mut changed = false;

        for key in ColumnKey::ALL {
            let filter = match column_def(key).filter {
                FilterKind::None => continue,
                FilterKind::Text => self.text_filter(key),
                FilterKind::Number => self.number_filter(key),
            };
            changed |= match filter {
                Some(filter) => grid.set_filter(key, filter),
                None => grid.clear_filter(key),
            };
        }

        changed
    }

    fn text_filter(&self, key: ColumnKey) -> Option<ColumnFilter> {
        let input = self.text.get(&key)?;
        let text = input.text.trim();
        if text.is_empty() {
            return None;
        }
        Some(ColumnFilter::Text(TextFilter::new(input.op, text)))
    }

    fn number_filter(&self, key: ColumnKey) -> Option<ColumnFilter> {
        let input = self.number.get(&key)?;
        NumberFilter::from_bounds(parse_bound(&input.min), parse_bound(&input.max))
            .map(ColumnFilter::Number)
    }
}

/// Blank or unparsable input leaves that bound open.
fn parse_bound(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
