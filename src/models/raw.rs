//! Raw input records, straight out of the delimited export.

/// Header row of the export, trimmed but otherwise untouched.
#[derive(Debug, Clone)]
pub struct Header {
    pub columns: Vec<String>,
}

/// One data row. Values are kept positional; `ColumnMap` knows which
/// index carries which semantic role.
#[derive(Debug, Clone)]
pub struct RawEvent {
    pub values: Vec<String>,
}

impl RawEvent {
    /// Cell at `idx`, empty string when the row is shorter than the header.
    pub fn get(&self, idx: usize) -> &str {
        self.values.get(idx).map(String::as_str).unwrap_or("")
    }
}
