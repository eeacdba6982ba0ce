//! Table types.

use serde::{Deserialize, Serialize};

use super::node::null_as_empty;
use super::{HorizontalAlignment, Node, VerticalAlignment};
use crate::style::StyleSet;

/// A table structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    #[serde(default)]
    pub rows: Vec<TableRow>,

    /// Table style
    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub style: StyleSet,

    /// Value of the `cellspacing` attribute
    #[serde(default)]
    pub cell_spacing: u32,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with the given cell spacing.
    pub fn with_cell_spacing(cell_spacing: u32) -> Self {
        Self {
            cell_spacing,
            ..Self::new()
        }
    }

    /// Set the table style and return self.
    pub fn styled(mut self, style: StyleSet) -> Self {
        self.style = style;
        self
    }

    /// Add a row and return self.
    pub fn row(mut self, row: TableRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (widest row).
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.items.len()).max().unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    #[serde(default)]
    pub items: Vec<RowItem>,

    /// Row style
    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub style: StyleSet,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(items: Vec<RowItem>) -> Self {
        Self {
            items,
            style: StyleSet::new(),
        }
    }

    /// Create a row of default-aligned text cells.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(
            values
                .into_iter()
                .map(|v| RowItem::new(Node::text(v)))
                .collect(),
        )
    }

    /// Set the row style and return self.
    pub fn styled(mut self, style: StyleSet) -> Self {
        self.style = style;
        self
    }

    /// Add a cell and return self.
    pub fn item(mut self, item: RowItem) -> Self {
        self.items.push(item);
        self
    }
}

/// A table cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowItem {
    /// Cell content
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: Box<Node>,

    /// Cell style
    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub style: StyleSet,

    /// Horizontal alignment
    #[serde(default)]
    pub horizontal_align: HorizontalAlignment,

    /// Vertical alignment
    #[serde(default)]
    pub vertical_align: VerticalAlignment,
}

impl RowItem {
    /// Create a left/top aligned cell with content.
    pub fn new(content: impl Into<Node>) -> Self {
        Self {
            content: Box::new(content.into()),
            ..Self::default()
        }
    }

    /// Set the cell style and return self.
    pub fn styled(mut self, style: StyleSet) -> Self {
        self.style = style;
        self
    }

    /// Set both alignments and return self.
    pub fn align(mut self, horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        self.horizontal_align = horizontal;
        self.vertical_align = vertical;
        self
    }
}
