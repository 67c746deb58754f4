// ============================================================
// Layer 3 — Dataset Domain Type
// ============================================================
// A named table of numeric rows, already in randomized order.
//
// The registry shares one loaded Dataset between every request
// that names it, so the type is immutable once built: reading
// the file again produces a brand-new Dataset.
//
// Reference: Rust Book §5 (Structs), §8 (Vectors)

use serde::Serialize;

/// One data row — feature columns followed by target columns.
pub type Row = Vec<f64>;

/// A named, shuffled numeric table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    /// The storage name this table was loaded from (e.g. "iris.csv")
    name: String,

    /// Every data row in randomized order.
    /// Row width is not validated here; the model checks it.
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of the first row, if there is one
    pub fn width(&self) -> Option<usize> {
        self.rows.first().map(Vec::len)
    }
}
