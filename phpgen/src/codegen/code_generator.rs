//! Dispatch rendering by generator kind

use std::path::PathBuf;

use super::column_generator::render_column_constants;
use super::model_generator::render_model;
use super::naming::to_namespace;
use super::writer::class_file_path;
use crate::config::{GeneratorKind, ResolvedTarget};
use crate::schema::ColumnMeta;

/// Names shared by both renderers
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub table: &'a str,
    pub class_name: &'a str,
    pub namespace: &'a str,
}

/// A rendered class and the path it is meant for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClass {
    pub path: PathBuf,
    pub content: String,
}

impl GeneratorKind {
    /// Render the class body for `columns`
    pub fn render(&self, ctx: &RenderContext<'_>, columns: &[ColumnMeta]) -> String {
        match self {
            GeneratorKind::Model => render_model(ctx, columns),
            GeneratorKind::Column => render_column_constants(ctx, columns),
        }
    }
}

/// Render the class for a resolved target
pub fn generate_class(
    kind: GeneratorKind,
    target: &ResolvedTarget,
    columns: &[ColumnMeta],
) -> GeneratedClass {
    let namespace = to_namespace(&target.directory);
    let ctx = RenderContext {
        table: &target.table,
        class_name: &target.class_name,
        namespace: &namespace,
    };

    GeneratedClass {
        path: class_file_path(&target.directory, &target.class_name),
        content: kind.render(&ctx, columns),
    }
}
