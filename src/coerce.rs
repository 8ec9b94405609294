//! Plain text coercion used by `%s`.

use crate::value::Value;

/// Convert a value to its plain textual form.
///
/// Null becomes the empty string; arrays join their coerced elements with `,`.
pub fn coerce_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::UInt(n) => n.to_string(),
        Value::Float(n) => float_text(*n),
        Value::Text(s) => s.clone(),
        Value::Array(items) => items.iter().map(coerce_string).collect::<Vec<_>>().join(","),
    }
}

/// Decimal text for a float, with the special values spelled the way
/// PostgreSQL reads them back.
fn float_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        // -0.0 compares equal to 0.0
        "0".to_string()
    } else {
        n.to_string()
    }
}
