//! Dollar-quoted strings used by `%Q`.
//!
//! ```text
//! Tobi's  ->  $x$Tobi's$x$
//! ```
//!
//! The tag is drawn from a [`TagSource`] and redrawn until it does not occur
//! inside the content, so the closing delimiter can never appear early.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coerce::coerce_string;
use crate::value::Value;

/// Supplies the letters dollar-quote tags are built from.
pub trait TagSource {
    /// Next tag letter. Anything outside `a..=z` is folded back into that range.
    fn next_letter(&mut self) -> char;
}

/// A [`TagSource`] drawing uniformly from `a..=z` with any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomTags<R>(pub R);

impl<R: Rng> TagSource for RandomTags<R> {
    fn next_letter(&mut self) -> char {
        (b'a' + self.0.gen_range(0..26u8)) as char
    }
}

impl<T: TagSource + ?Sized> TagSource for &mut T {
    fn next_letter(&mut self) -> char {
        (**self).next_letter()
    }
}

/// Longest starting tag length honoured from [`DollarOptions::min_tag_len`]
/// (the PostgreSQL identifier length limit).
pub const MAX_TAG_LEN: usize = 63;

/// Tag length and retry settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DollarOptions {
    /// Length of the first tags tried, capped at [`MAX_TAG_LEN`].
    pub min_tag_len: usize,
    /// Draws at each length before the tag grows by one letter.
    pub attempts_per_len: usize,
}

impl Default for DollarOptions {
    fn default() -> Self {
        Self {
            min_tag_len: 1,
            attempts_per_len: 8,
        }
    }
}

/// Dollar-quote `value` with a random tag from the thread-local generator.
///
/// Null yields the empty string.
pub fn quote_dollar(value: &Value) -> String {
    quote_dollar_with(
        value,
        &mut RandomTags(rand::thread_rng()),
        &DollarOptions::default(),
    )
}

/// Dollar-quote `value` drawing tag letters from `tags`.
pub fn quote_dollar_with<T: TagSource + ?Sized>(
    value: &Value,
    tags: &mut T,
    opts: &DollarOptions,
) -> String {
    if value.is_null() {
        return String::new();
    }
    let content = coerce_string(value);
    let tag = pick_tag(&content, tags, opts);
    format!("${tag}${content}${tag}$")
}

fn pick_tag<T: TagSource + ?Sized>(content: &str, tags: &mut T, opts: &DollarOptions) -> String {
    let mut len = opts.min_tag_len.clamp(1, MAX_TAG_LEN);
    loop {
        for _ in 0..opts.attempts_per_len.max(1) {
            let tag: String = (0..len).map(|_| lowercase(tags.next_letter())).collect();
            // A tag longer than the content always passes, which bounds the loop.
            if !content.contains(tag.as_str()) {
                return tag;
            }
            debug!(tag = %tag, "dollar tag occurs in content, drawing another");
        }
        len += 1;
    }
}

fn lowercase(c: char) -> char {
    if c.is_ascii_lowercase() {
        c
    } else {
        (b'a' + (c as u32 % 26) as u8) as char
    }
}
