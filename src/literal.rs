//! Literal quoting used by `%L`.

use crate::coerce::coerce_string;
use crate::value::Value;

/// Quote `value` as a SQL literal.
///
/// Null becomes a bare `NULL`, arrays become a parenthesized tuple and text
/// holding a backslash uses the `E'...'` form.
///
/// ```
/// use pg_escape::{quote_literal, Value};
///
/// assert_eq!(quote_literal(&Value::from("Tobi's")), "'Tobi''s'");
/// assert_eq!(quote_literal(&Value::from(vec!["a", "b"])), "('a', 'b')");
/// ```
pub fn quote_literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(quote_literal).collect();
            format!("({})", parts.join(", "))
        }
        other => quote_text(&coerce_string(other)),
    }
}

fn quote_text(text: &str) -> String {
    let escaped = text.replace('\'', "''");
    if text.contains('\\') {
        format!("E'{}'", escaped.replace('\\', "\\\\"))
    } else {
        format!("'{}'", escaped)
    }
}
