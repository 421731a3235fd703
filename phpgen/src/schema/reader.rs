//! Column lookup behind an injectable source

use async_trait::async_trait;
use tracing::debug;

use super::metadata::ColumnMeta;
use crate::error::Result;

/// Anything that can list the columns of a table.
///
/// The MySQL implementation is [`MySqlSchemaSource`](super::MySqlSchemaSource);
/// tests supply in-memory sources.
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// Columns of `database`.`table` in ordinal order.
    ///
    /// A table with no columns, or one that does not exist, yields an empty
    /// vector rather than an error.
    async fn fetch_columns(&self, database: &str, table: &str) -> Result<Vec<ColumnMeta>>;
}

/// Fetch the columns of a table, logging what was found
pub async fn fetch_columns<S: SchemaSource + ?Sized>(
    source: &S,
    database: &str,
    table: &str,
) -> Result<Vec<ColumnMeta>> {
    let columns = source.fetch_columns(database, table).await?;
    if columns.is_empty() {
        debug!("No columns found for {}.{}", database, table);
    } else {
        debug!("Found {} columns in {}.{}", columns.len(), database, table);
    }
    Ok(columns)
}
