//! phpgen: Generate PHP column-constant and model classes from a MySQL schema
//!
//! This crate provides both a CLI tool and a library. It reads column
//! metadata from `information_schema.COLUMNS` and generates, per table:
//!
//! - a column-constants class: `TABLE_NAME` plus one constant per column,
//!   each documented with the column comment
//! - a model class extending `BaseModel`, with one `@property` annotation per
//!   column and the table name bound to `$table`
//!
//! Existing files are never overwritten.
//!
//! # Configuration
//!
//! Profiles are keyed by pool name in `phpgen.toml`:
//!
//! ```toml
//! [model.default]
//! url = "mysql://root@127.0.0.1:3306/shop"
//! database = "shop"
//! model_path = "app/Infrastructure/Database/Model"
//! column_path = "app/Infrastructure/Database/Constant"
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! phpgen column -T order_items
//! phpgen model -P report -DB report -T user_login_log -C LoginLog
//! ```
//!
//! # Library Usage
//!
//! ```rust,ignore
//! use phpgen::{GenerateOptions, GeneratorKind, Settings};
//!
//! let settings = Settings::load(None)?;
//! let options = GenerateOptions {
//!     table: Some("order_items".into()),
//!     ..Default::default()
//! };
//! let outcome = phpgen::command::generate(GeneratorKind::Column, &options, &settings).await?;
//! println!("{outcome}");
//! ```

pub mod codegen;
pub mod command;
pub mod config;
pub mod error;
pub mod schema;

pub use command::{generate, GenerationOutcome};
pub use config::{GenerateOptions, GenerationConfig, GeneratorKind, Settings};
pub use error::{CodegenError, Result};
pub use schema::{ColumnMeta, SchemaSource};
