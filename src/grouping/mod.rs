//! Bucket nesting for grouped columns
//!
//! A layer's column order decides how bucket aggregations nest: every
//! bucketed column groups within the one before it. [`nest_column`] moves a
//! column directly under another; [`NestingControl`] describes the choice
//! offered for one column and produces the resulting order.
//!
//! Every operation returns a full replacement order. The layer itself is
//! never modified.

use serde::{Deserialize, Serialize};

/// Move `inner` to directly after `outer`.
///
/// `inner` is removed first and `outer` looked up afterwards. When `outer`
/// is not in the order (including the empty "no parent" choice), `inner`
/// moves to the front.
pub fn nest_column<S: AsRef<str>>(order: &[S], outer: &str, inner: &str) -> Vec<String> {
    let mut result: Vec<String> = order
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| *c != inner)
        .map(String::from)
        .collect();

    let position = result
        .iter()
        .position(|c| c == outer)
        .map_or(0, |outer_position| outer_position + 1);
    result.insert(position, inner.to_string());
    result
}

/// One column of a layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,

    #[serde(default)]
    pub label: String,

    /// Whether the column splits rows into buckets
    #[serde(default)]
    pub is_bucketed: bool,
}

impl Column {
    pub fn bucket(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            is_bucketed: true,
        }
    }

    pub fn metric(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            is_bucketed: false,
        }
    }
}

/// Columns plus the order they nest in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub columns: Vec<Column>,
    pub column_order: Vec<String>,
}

impl Layer {
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Column directly before `id` in the order, if any
    pub fn predecessor(&self, id: &str) -> Option<&str> {
        let index = self.column_order.iter().position(|c| c == id)?;
        index
            .checked_sub(1)
            .map(|previous| self.column_order[previous].as_str())
    }
}

/// A column the edited column can nest under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestingOption {
    pub column_id: String,
    pub label: String,
}

/// Nesting choice available for one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NestingControl {
    /// Exactly one other bucketed column: nest under it or over it
    Toggle {
        column_id: String,
        target: NestingOption,
        /// Whether the column currently has a predecessor
        nested: bool,
        order: Vec<String>,
    },

    /// Several other bucketed columns: pick a parent, or none
    Select {
        column_id: String,
        options: Vec<NestingOption>,
        selected: Option<String>,
        order: Vec<String>,
    },
}

impl NestingControl {
    /// Control for `column_id`, `None` when it has nothing to nest with.
    ///
    /// That is the case when the column is missing, is not bucketed, or is
    /// the only bucketed column of the layer.
    pub fn for_column(layer: &Layer, column_id: &str) -> Option<Self> {
        let column = layer.column(column_id)?;
        if !column.is_bucketed {
            return None;
        }

        let mut others: Vec<NestingOption> = layer
            .columns
            .iter()
            .filter(|c| c.id != column_id && c.is_bucketed)
            .map(|c| NestingOption {
                column_id: c.id.clone(),
                label: c.label.clone(),
            })
            .collect();

        let previous = layer.predecessor(column_id).map(String::from);
        let order = layer.column_order.clone();

        match others.len() {
            0 => None,
            1 => Some(NestingControl::Toggle {
                column_id: column_id.to_string(),
                target: others.remove(0),
                nested: previous.is_some(),
                order,
            }),
            _ => Some(NestingControl::Select {
                column_id: column_id.to_string(),
                options: others,
                selected: previous,
                order,
            }),
        }
    }

    /// Flip which of the two columns is on top.
    ///
    /// Returns `None` for a [`NestingControl::Select`].
    pub fn toggle(&self) -> Option<Vec<String>> {
        match self {
            NestingControl::Toggle {
                column_id,
                target,
                nested,
                order,
            } => Some(if *nested {
                nest_column(order.as_slice(), column_id, &target.column_id)
            } else {
                nest_column(order.as_slice(), &target.column_id, column_id)
            }),
            NestingControl::Select { .. } => None,
        }
    }

    /// Nest the column under `choice`, or at the top level for `None`.
    ///
    /// Returns `None` for a [`NestingControl::Toggle`].
    pub fn select(&self, choice: Option<&str>) -> Option<Vec<String>> {
        match self {
            NestingControl::Select {
                column_id, order, ..
            } => Some(nest_column(order.as_slice(), choice.unwrap_or(""), column_id)),
            NestingControl::Toggle { .. } => None,
        }
    }
}
