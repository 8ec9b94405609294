//! Template scanner using nom.
//!
//! Splits a template into literal text and `%` directives.
//!
//! ```text
//! where %I = %L and pct like '10%%'
//!
//! Text("where ")  Directive(Ident)  Text(" = ")  Directive(Literal)
//! Text(" and pct like '10")  Directive(Percent)  Text("'")
//! ```

use nom::{
    IResult,
    branch::alt,
    bytes::complete::is_not,
    character::complete::{anychar, char},
    combinator::{eof, map, value},
    sequence::preceded,
};

use crate::error::{EscapeError, EscapeResult};

/// A recognized directive selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `%%`
    Percent,
    /// `%s`
    String,
    /// `%I`
    Ident,
    /// `%L`
    Literal,
    /// `%Q`
    Dollar,
}

impl Directive {
    /// The selector character following `%`.
    pub fn symbol(self) -> char {
        match self {
            Directive::Percent => '%',
            Directive::String => 's',
            Directive::Ident => 'I',
            Directive::Literal => 'L',
            Directive::Dollar => 'Q',
        }
    }

    pub fn takes_argument(self) -> bool {
        self != Directive::Percent
    }
}

/// One piece of a scanned template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied through unchanged.
    Text(&'a str),
    Directive(Directive),
    /// `%` followed by a character that is not a directive.
    Unknown(char),
    /// A `%` with nothing after it.
    TrailingPercent,
}

/// A segment and the byte offset where it starts in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<'a> {
    pub position: usize,
    pub segment: Segment<'a>,
}

/// Scan a template into segments, left to right.
pub fn scan(template: &str) -> EscapeResult<Vec<Spanned<'_>>> {
    let mut rest = template;
    let mut segments = Vec::new();

    while !rest.is_empty() {
        let position = template.len() - rest.len();
        match parse_segment(rest) {
            Ok((remaining, segment)) => {
                segments.push(Spanned { position, segment });
                rest = remaining;
            }
            Err(e) => return Err(EscapeError::parse(position, format!("Scan failed: {:?}", e))),
        }
    }

    Ok(segments)
}

fn parse_segment(input: &str) -> IResult<&str, Segment<'_>> {
    alt((
        map(is_not("%"), Segment::Text),
        preceded(
            char('%'),
            alt((
                map(parse_directive, Segment::Directive),
                map(anychar, Segment::Unknown),
                value(Segment::TrailingPercent, eof),
            )),
        ),
    ))(input)
}

fn parse_directive(input: &str) -> IResult<&str, Directive> {
    alt((
        value(Directive::Percent, char('%')),
        value(Directive::String, char('s')),
        value(Directive::Ident, char('I')),
        value(Directive::Literal, char('L')),
        value(Directive::Dollar, char('Q')),
    ))(input)
}
