//! # pg-escape
//!
//! Escape values into SQL text: literals, identifiers and dollar-quoted
//! strings, plus a `%` template formatter that composes them.
//!
//! ## Quick Example
//!
//! ```rust
//! use pg_escape::pg_format;
//!
//! let sql = pg_format!("INSERT INTO %I VALUES (%L, %s)", "users", "Tobi's", 42)?;
//! assert_eq!(sql, "INSERT INTO users VALUES ('Tobi''s', 42)");
//! # Ok::<(), pg_escape::EscapeError>(())
//! ```
//!
//! ## Directives
//!
//! | Directive | Name       | Output                                |
//! |-----------|------------|---------------------------------------|
//! | `%s`      | String     | Plain text, NULL → empty              |
//! | `%I`      | Identifier | Quoted when needed: `"someStuff"`     |
//! | `%L`      | Literal    | `'it''s'`, `E'a\\b'`, `NULL`, `('a', 'b')` |
//! | `%Q`      | Dollar     | `$x$it's$x$`                          |
//! | `%%`      | Percent    | `%`                                   |
//!
//! The output is text to splice into a query. Nothing here binds parameters
//! or talks to a database.

pub mod coerce;
pub mod config;
pub mod dollar;
pub mod error;
pub mod format;
pub mod ident;
pub mod keywords;
pub mod literal;
pub mod template;
pub mod value;

pub use coerce::coerce_string;
pub use config::Config;
pub use dollar::{DollarOptions, RandomTags, TagSource, quote_dollar, quote_dollar_with};
pub use error::{EscapeError, EscapeResult};
pub use format::{DirectivePolicy, FormatOptions, Formatter, format};
pub use ident::{quote_ident, quote_ident_with};
pub use keywords::Keywords;
pub use literal::quote_literal;
pub use value::Value;

pub mod prelude {
    pub use crate::config::Config;
    pub use crate::dollar::{DollarOptions, RandomTags, TagSource};
    pub use crate::error::*;
    pub use crate::format::{DirectivePolicy, FormatOptions, Formatter};
    pub use crate::keywords::Keywords;
    pub use crate::value::Value;
    pub use crate::{coerce_string, format, quote_dollar, quote_ident, quote_literal};
}

/// Format a template with heterogeneous arguments.
///
/// Each argument is converted with `Value::from`.
///
/// ```
/// use pg_escape::pg_format;
///
/// let sql = pg_format!("SELECT %I FROM t WHERE id IN %L", "desc", vec![1, 2]).unwrap();
/// assert_eq!(sql, "SELECT \"desc\" FROM t WHERE id IN ('1', '2')");
/// ```
#[macro_export]
macro_rules! pg_format {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format($template, &[$($crate::Value::from($arg)),*])
    };
}
