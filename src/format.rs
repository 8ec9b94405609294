//! The `%` template formatter.
//!
//! | Directive | Output                         |
//! |-----------|--------------------------------|
//! | `%s`      | plain text ([`coerce_string`]) |
//! | `%I`      | identifier ([`quote_ident`])   |
//! | `%L`      | literal ([`quote_literal`])    |
//! | `%Q`      | dollar-quoted ([`quote_dollar`]) |
//! | `%%`      | a literal `%`                  |
//!
//! [`quote_ident`]: crate::quote_ident
//! [`quote_dollar`]: crate::quote_dollar

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::coerce::coerce_string;
use crate::dollar::{DollarOptions, RandomTags, TagSource, quote_dollar_with};
use crate::error::{EscapeError, EscapeResult};
use crate::ident::quote_ident_with;
use crate::keywords::Keywords;
use crate::literal::quote_literal;
use crate::template::{Directive, Segment, scan};
use crate::value::Value;

/// What to do with `%` followed by an unrecognized character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectivePolicy {
    /// Fail with [`EscapeError::InvalidDirective`] or [`EscapeError::TrailingPercent`].
    #[default]
    Reject,
    /// Copy the `%` and the character to the output unchanged.
    PassThrough,
}

/// Settings for a [`Formatter`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatOptions {
    pub keywords: Keywords,
    pub unknown_directive: DirectivePolicy,
    pub dollar: DollarOptions,
}

/// Expands `%` directives in a template against positional arguments.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Format `template`, drawing dollar-quote tags from the thread-local generator.
    pub fn format(&self, template: &str, args: &[Value]) -> EscapeResult<String> {
        self.format_with(template, args, &mut RandomTags(rand::thread_rng()))
    }

    /// Format `template`, drawing dollar-quote tags from `tags`.
    ///
    /// Arguments bind in order to `%s`, `%I`, `%L` and `%Q`; `%%` takes none.
    /// Surplus arguments are ignored.
    pub fn format_with<T: TagSource + ?Sized>(
        &self,
        template: &str,
        args: &[Value],
        tags: &mut T,
    ) -> EscapeResult<String> {
        let mut out = String::with_capacity(template.len());
        let mut remaining = args.iter();

        for span in scan(template)? {
            match span.segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Directive(directive) if !directive.takes_argument() => out.push('%'),
                Segment::Directive(directive) => {
                    let arg = remaining.next().ok_or_else(|| {
                        EscapeError::underflow(span.position, directive.symbol(), args.len())
                    })?;
                    trace!(position = span.position, directive = %directive.symbol(), "expanding");
                    out.push_str(&self.expand(directive, arg, tags)?);
                }
                Segment::Unknown(c) => match self.options.unknown_directive {
                    DirectivePolicy::Reject => return Err(EscapeError::invalid(span.position, c)),
                    DirectivePolicy::PassThrough => {
                        out.push('%');
                        out.push(c);
                    }
                },
                Segment::TrailingPercent => match self.options.unknown_directive {
                    DirectivePolicy::Reject => {
                        return Err(EscapeError::TrailingPercent {
                            position: span.position,
                        });
                    }
                    DirectivePolicy::PassThrough => out.push('%'),
                },
            }
        }

        Ok(out)
    }

    fn expand<T: TagSource + ?Sized>(
        &self,
        directive: Directive,
        arg: &Value,
        tags: &mut T,
    ) -> EscapeResult<String> {
        Ok(match directive {
            Directive::Percent => "%".to_string(),
            Directive::String => coerce_string(arg),
            Directive::Ident => quote_ident_with(arg, &self.options.keywords)?,
            Directive::Literal => quote_literal(arg),
            Directive::Dollar => quote_dollar_with(arg, tags, &self.options.dollar),
        })
    }
}

/// Format `template` with the default settings.
///
/// ```
/// use pg_escape::{format, Value};
///
/// let sql = format("select * from %I where name = %L", &["users".into(), "Tobi's".into()]).unwrap();
/// assert_eq!(sql, "select * from users where name = 'Tobi''s'");
/// ```
pub fn format(template: &str, args: &[Value]) -> EscapeResult<String> {
    Formatter::default().format(template, args)
}
