//! Identifier quoting used by `%I`.

use std::sync::LazyLock;

use regex::Regex;

use crate::coerce::coerce_string;
use crate::error::{EscapeError, EscapeResult};
use crate::keywords::Keywords;
use crate::value::Value;

static UNQUOTED_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_][a-z0-9_$]*$").expect("identifier pattern is valid"));

static DEFAULT_KEYWORDS: LazyLock<Keywords> = LazyLock::new(Keywords::postgres);

/// Quote `value` as an identifier if it needs quoting, using the PostgreSQL
/// reserved-word table.
///
/// ```
/// use pg_escape::{quote_ident, Value};
///
/// assert_eq!(quote_ident(&Value::from("foo")).unwrap(), "foo");
/// assert_eq!(quote_ident(&Value::from("someStuff")).unwrap(), "\"someStuff\"");
/// ```
pub fn quote_ident(value: &Value) -> EscapeResult<String> {
    quote_ident_with(value, &DEFAULT_KEYWORDS)
}

/// Quote `value` as an identifier against a caller-supplied reserved-word table.
///
/// Dotted names are not split: `a.b` is one identifier and comes back as `"a.b"`.
pub fn quote_ident_with(value: &Value, keywords: &Keywords) -> EscapeResult<String> {
    let name = match value {
        Value::Null => return Err(EscapeError::MissingIdentifier),
        Value::Array(_) => return Err(EscapeError::SequenceIdentifier),
        other => coerce_string(other),
    };
    if name.is_empty() {
        return Err(EscapeError::MissingIdentifier);
    }

    if UNQUOTED_IDENT.is_match(&name) && !keywords.is_reserved(&name) {
        Ok(name)
    } else {
        Ok(format!("\"{}\"", name.replace('"', "\"\"")))
    }
}
