//! Command layer: resolve, introspect, render, write, report

use std::fmt;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::codegen::{generate_class, write_class, GeneratedClass};
use crate::config::{
    resolve_class_name, resolve_database, resolve_directory, resolve_table, GenerateOptions,
    GenerationConfig, GeneratorKind, ResolvedTarget, Settings,
};
use crate::error::{CodegenError, Result};
use crate::schema::{fetch_columns, ColumnMeta, MySqlSchemaSource, SchemaSource};

/// What a generator command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// A new file was written
    Created(PathBuf),
    /// A file already existed at the path and was left untouched
    Skipped(PathBuf),
    /// Dry run: the class was rendered but not written
    Rendered(GeneratedClass),
}

impl fmt::Display for GenerationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationOutcome::Created(path) => {
                write!(f, "create {} successfully.", path.display())
            }
            GenerationOutcome::Skipped(path) => {
                write!(f, "{} already exists, skipped.", path.display())
            }
            GenerationOutcome::Rendered(class) => {
                write!(f, "// {}\n{}", class.path.display(), class.content)
            }
        }
    }
}

/// Columns of one table, as shown by `inspect`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub database: String,
    pub table: String,
    pub columns: Vec<ColumnMeta>,
}

/// Generate one class using the MySQL pool configured for `options.pool`
pub async fn generate(
    kind: GeneratorKind,
    options: &GenerateOptions,
    settings: &Settings,
) -> Result<GenerationOutcome> {
    let profile = settings.load_profile(&options.pool)?;
    let source = connect(&profile, &options.pool)?;

    let result = run_generator(kind, options, &profile, &source).await;
    if let Err(e) = source.disconnect().await {
        warn!("Failed to close connection pool: {}", e);
    }
    result
}

/// Generate one class reading columns from `source`.
///
/// Steps run in a fixed order and the first failure ends the run; nothing
/// is written unless every step before the write succeeded.
pub async fn run_generator<S: SchemaSource + ?Sized>(
    kind: GeneratorKind,
    options: &GenerateOptions,
    profile: &GenerationConfig,
    source: &S,
) -> Result<GenerationOutcome> {
    let directory = resolve_directory(profile, options.dir.as_deref(), kind)?;
    let database = resolve_database(profile, options.database.as_deref())?;
    let table = resolve_table(options.table.as_deref())?;

    let columns = fetch_columns(source, &database, &table).await?;
    let class_name = resolve_class_name(options.class.as_deref(), &table)?;

    let target = ResolvedTarget {
        directory,
        database,
        table,
        class_name,
    };
    info!(
        "Generating {} class {} for {}.{}",
        kind, target.class_name, target.database, target.table
    );

    let class = generate_class(kind, &target, &columns);
    if options.dry_run {
        return Ok(GenerationOutcome::Rendered(class));
    }

    let outcome = write_class(&target.directory, &target.class_name, &class.content)?;
    if outcome.written {
        Ok(GenerationOutcome::Created(outcome.path))
    } else {
        Ok(GenerationOutcome::Skipped(outcome.path))
    }
}

/// List the columns of a table using the MySQL pool configured for `options.pool`
pub async fn inspect(options: &GenerateOptions, settings: &Settings) -> Result<TableReport> {
    let profile = settings.load_profile(&options.pool)?;
    let source = connect(&profile, &options.pool)?;

    let result = inspect_table(options, &profile, &source).await;
    if let Err(e) = source.disconnect().await {
        warn!("Failed to close connection pool: {}", e);
    }
    result
}

/// List the columns of a table reading from `source`
pub async fn inspect_table<S: SchemaSource + ?Sized>(
    options: &GenerateOptions,
    profile: &GenerationConfig,
    source: &S,
) -> Result<TableReport> {
    let database = resolve_database(profile, options.database.as_deref())?;
    let table = resolve_table(options.table.as_deref())?;
    let columns = fetch_columns(source, &database, &table).await?;

    Ok(TableReport {
        database,
        table,
        columns,
    })
}

fn connect(profile: &GenerationConfig, pool: &str) -> Result<MySqlSchemaSource> {
    let url = profile.url.as_deref().filter(|url| !url.is_empty()).ok_or_else(|| {
        CodegenError::ConfigMissing(format!("no connection url for pool `{}`", pool))
    })?;
    MySqlSchemaSource::new(url)
}
