//! Naming utilities for code generation

/// Convert a table name to a class name.
///
/// Splits on `_` and uppercases the first character of every segment:
/// `user_login_log` becomes `UserLoginLog`. The rest of each segment is kept
/// as written, so `api_URL_map` becomes `ApiURLMap`.
pub fn to_class_name(table_name: &str) -> String {
    table_name.split('_').map(upper_first).collect()
}

/// Convert a column name to a constant name (`order_id` -> `ORDER_ID`)
pub fn to_constant_name(column_name: &str) -> String {
    column_name.to_uppercase()
}

/// Derive a PHP namespace from an output directory.
///
/// `app/Infrastructure/Database/Model` becomes
/// `App\Infrastructure\Database\Model`.
pub fn to_namespace(directory: &str) -> String {
    let trimmed = directory.trim_start_matches("./").trim_matches('/');
    upper_first(&trimmed.replace('/', "\\"))
}

/// Uppercase the first character, leave the rest untouched
fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
