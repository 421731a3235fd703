//! Metadata structures for introspected columns

use serde::{Deserialize, Serialize};

/// One row of `information_schema.COLUMNS`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Column name (`COLUMN_NAME`)
    pub name: String,

    /// Raw data type as reported by MySQL (`DATA_TYPE`, e.g. "bigint")
    pub raw_type: String,

    /// Column comment (`COLUMN_COMMENT`), empty when none was set
    pub comment: String,
}

impl ColumnMeta {
    pub fn new(
        name: impl Into<String>,
        raw_type: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
            comment: comment.into(),
        }
    }

    /// The comment, or the column name when the comment is empty
    pub fn description(&self) -> &str {
        if self.comment.is_empty() {
            &self.name
        } else {
            &self.comment
        }
    }
}
