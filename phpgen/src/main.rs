//! CLI entry point for phpgen

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use phpgen::codegen::classify;
use phpgen::config::defaults;
use phpgen::{GenerateOptions, GeneratorKind, Settings};

#[derive(Parser)]
#[command(name = "phpgen")]
#[command(about = "Generate PHP column-constant and model classes from a MySQL schema")]
#[command(version)]
struct Cli {
    /// Path to configuration file (TOML format, defaults to ./phpgen.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Dry run - print the generated class instead of writing it
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a class with one constant per column
    Column(GenerateArgs),
    /// Generate a model class with typed property annotations
    Model(GenerateArgs),
    /// Inspect a table (show its columns and mapped types for debugging)
    Inspect(TargetArgs),
}

#[derive(Args)]
struct TargetArgs {
    /// Configuration profile (pool) to use
    #[arg(short = 'P', long, default_value = defaults::POOL)]
    pool: String,

    /// Database name, also accepted as -DB (overrides the profile when non-empty)
    #[arg(long)]
    database: Option<String>,

    /// Table name
    #[arg(short = 'T', long)]
    table: Option<String>,
}

#[derive(Args)]
struct GenerateArgs {
    #[command(flatten)]
    target: TargetArgs,

    /// Output directory (overrides the profile)
    #[arg(short = 'D', long)]
    dir: Option<String>,

    /// Class name (derived from the table name when omitted)
    #[arg(short = 'C', long)]
    class: Option<String>,
}

impl TargetArgs {
    fn into_options(self, dry_run: bool) -> GenerateOptions {
        GenerateOptions {
            pool: self.pool,
            database: self.database,
            table: self.table,
            dry_run,
            ..Default::default()
        }
    }
}

impl GenerateArgs {
    fn into_options(self, dry_run: bool) -> GenerateOptions {
        GenerateOptions {
            dir: self.dir,
            class: self.class,
            ..self.target.into_options(dry_run)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    // Load settings first (before logging, so we can use settings.log_level)
    let settings = Settings::load(cli.config.as_deref());

    // Initialize logging
    // Priority: RUST_LOG env var > settings.log_level > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = settings
        .as_ref()
        .ok()
        .and_then(|s| s.log_level.as_deref())
        .unwrap_or(default_level);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    match run(cli, settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, settings: phpgen::Result<Settings>) -> Result<()> {
    let settings = settings?;

    let (kind, args) = match cli.command {
        Commands::Column(args) => (GeneratorKind::Column, args),
        Commands::Model(args) => (GeneratorKind::Model, args),
        Commands::Inspect(args) => {
            return inspect_table(args.into_options(cli.dry_run), &settings).await;
        }
    };

    let options = args.into_options(cli.dry_run);
    debug!("Resolved options: {:?}", options);

    let outcome = phpgen::generate(kind, &options, &settings).await?;
    println!("{}", outcome);
    Ok(())
}

async fn inspect_table(options: GenerateOptions, settings: &Settings) -> Result<()> {
    let report = phpgen::command::inspect(&options, settings).await?;

    println!("Table: {}.{}", report.database, report.table);
    println!("  Columns ({}):", report.columns.len());
    for col in &report.columns {
        let comment = if col.comment.is_empty() {
            String::new()
        } else {
            format!("  -- {}", col.comment)
        };
        println!(
            "    - {} {} -> {}{}",
            col.name,
            col.raw_type,
            classify(&col.raw_type),
            comment
        );
    }

    Ok(())
}

/// Rewrite the two-letter `-DB` short flag into `--database`.
///
/// Accepts `-DB shop`, `-DB=shop` and `-DBshop`. Arguments after `--` are
/// left alone.
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    let mut normalized = Vec::new();
    let mut passthrough = false;

    for arg in args {
        if passthrough {
            normalized.push(arg);
            continue;
        }
        match arg.to_str() {
            Some("--") => {
                passthrough = true;
                normalized.push(arg);
            }
            Some("-DB") => normalized.push(OsString::from("--database")),
            Some(flag) if flag.starts_with("-DB") => {
                let value = &flag["-DB".len()..];
                let value = value.strip_prefix('=').unwrap_or(value);
                normalized.push(OsString::from(format!("--database={}", value)));
            }
            _ => normalized.push(arg),
        }
    }

    normalized
}
