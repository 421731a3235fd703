//! Column-constants generator - one PHP constant per column

use super::naming::to_constant_name;
use super::RenderContext;
use crate::schema::ColumnMeta;

/// Render a class holding `TABLE_NAME` and one constant per column.
///
/// Each constant carries a doc comment with the column comment, or the
/// column name when the comment is empty.
pub fn render_column_constants(ctx: &RenderContext<'_>, columns: &[ColumnMeta]) -> String {
    let mut code = String::new();

    code.push_str("<?php\n\n");
    code.push_str("declare(strict_types=1);\n\n");
    code.push_str(&format!("namespace {};\n\n", ctx.namespace));
    code.push_str(&format!("class {}\n{{\n", ctx.class_name));

    code.push_str("    /**\n");
    code.push_str("     * Table name\n");
    code.push_str("     */\n");
    code.push_str(&format!("    const TABLE_NAME = \"{}\";\n", ctx.table));

    for col in columns {
        code.push('\n');
        code.push_str("    /**\n");
        code.push_str(&format!("     * {}\n", col.description()));
        code.push_str("     */\n");
        code.push_str(&format!(
            "    const {} = \"{}\";\n",
            to_constant_name(&col.name),
            col.name
        ));
    }

    code.push_str("}\n");
    code
}
