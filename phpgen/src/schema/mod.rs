//! Schema introspection through `information_schema.COLUMNS`

mod metadata;
mod mysql;
mod reader;

pub use metadata::*;
pub use mysql::MySqlSchemaSource;
pub use reader::*;
