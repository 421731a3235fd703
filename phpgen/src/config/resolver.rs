//! Merge command-line options onto a profile and validate the result

use std::fmt;

use super::defaults;
use super::settings::GenerationConfig;
use crate::codegen::to_class_name;
use crate::error::{CodegenError, Result};

/// Which kind of class a command generates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    /// Model class with `@property` annotations
    Model,
    /// Class holding one constant per column
    Column,
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorKind::Model => f.write_str("model"),
            GeneratorKind::Column => f.write_str("column"),
        }
    }
}

/// Options supplied on the command line.
///
/// `None` means the flag was not given at all; `Some("")` means it was given
/// with an empty value. The resolvers treat the two differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub pool: String,
    pub dir: Option<String>,
    pub database: Option<String>,
    pub table: Option<String>,
    pub class: Option<String>,
    /// Render and return the source without touching the filesystem
    pub dry_run: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            pool: defaults::POOL.to_string(),
            dir: None,
            database: None,
            table: None,
            class: None,
            dry_run: false,
        }
    }
}

/// Fully validated values used for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub directory: String,
    pub database: String,
    pub table: String,
    pub class_name: String,
}

/// Output directory: an explicit `--dir` wins, even when empty.
pub fn resolve_directory(
    config: &GenerationConfig,
    cli_dir: Option<&str>,
    kind: GeneratorKind,
) -> Result<String> {
    let dir = match cli_dir {
        Some(dir) => dir,
        None => match kind {
            GeneratorKind::Model => &config.model_path,
            GeneratorKind::Column => &config.column_path,
        },
    };

    if dir.is_empty() {
        return Err(CodegenError::DirectoryInvalid);
    }
    Ok(dir.to_string())
}

/// Database name: `--database` only overrides the profile when non-empty.
pub fn resolve_database(config: &GenerationConfig, cli_db: Option<&str>) -> Result<String> {
    let db = match cli_db {
        Some(db) if !db.is_empty() => db,
        _ => &config.database,
    };

    if db.is_empty() {
        return Err(CodegenError::DatabaseInvalid);
    }
    Ok(db.to_string())
}

pub fn resolve_table(cli_table: Option<&str>) -> Result<String> {
    match cli_table {
        None => Err(CodegenError::TableRequired),
        Some("") => Err(CodegenError::TableInvalid),
        Some(table) => Ok(table.to_string()),
    }
}

/// Class name: `--class` verbatim, or derived from the table name.
pub fn resolve_class_name(cli_class: Option<&str>, table: &str) -> Result<String> {
    match cli_class {
        Some("") => Err(CodegenError::ClassInvalid),
        Some(class) => Ok(class.to_string()),
        None => Ok(to_class_name(table)),
    }
}
