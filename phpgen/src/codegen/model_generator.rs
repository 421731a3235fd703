//! Model generator - PHP model class with `@property` annotations

use super::type_mapper::classify;
use super::RenderContext;
use crate::config::defaults::BASE_MODEL;
use crate::schema::ColumnMeta;

/// Render a model class extending the base model, bound to the table.
pub fn render_model(ctx: &RenderContext<'_>, columns: &[ColumnMeta]) -> String {
    let mut code = String::new();

    code.push_str("<?php\n\n");
    code.push_str(&format!("namespace {};\n\n", ctx.namespace));

    code.push_str("/**\n");
    for col in columns {
        code.push_str(&format!(" * @property {}\n", property_mark(col)));
    }
    code.push_str(" */\n");

    code.push_str(&format!(
        "class {} extends {}\n{{\n",
        ctx.class_name, BASE_MODEL
    ));
    code.push_str(&format!(
        "    protected ?string $table = '{}';\n",
        ctx.table
    ));
    code.push_str("}\n");
    code
}

/// `<type> $<column> <comment>`, without trailing space for empty comments
fn property_mark(col: &ColumnMeta) -> String {
    let mark = format!("{} ${} {}", classify(&col.raw_type), col.name, col.comment);
    mark.trim_end().to_string()
}
