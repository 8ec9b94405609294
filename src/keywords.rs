//! Reserved words that must be quoted when used as identifiers.

use std::collections::BTreeSet;

/// PostgreSQL key words that cannot appear as bare column or table names,
/// plus the ones restricted from function and type names. Sorted, lowercase.
pub const POSTGRES_RESERVED: &[&str] = &[
    "all", "analyse", "analyze", "and", "any", "array", "as", "asc", "asymmetric",
    "authorization", "between", "bigint", "binary", "bit", "boolean", "both", "case",
    "cast", "char", "character", "check", "coalesce", "collate", "collation", "column",
    "concurrently", "constraint", "create", "cross", "current_catalog", "current_date",
    "current_role", "current_schema", "current_time", "current_timestamp",
    "current_user", "dec", "decimal", "default", "deferrable", "desc", "distinct",
    "do", "else", "end", "except", "exists", "extract", "false", "fetch", "float",
    "for", "foreign", "freeze", "from", "full", "grant", "greatest", "group",
    "grouping", "having", "ilike", "in", "initially", "inner", "inout", "int",
    "integer", "intersect", "interval", "into", "is", "isnull", "join", "lateral",
    "leading", "least", "left", "like", "limit", "localtime", "localtimestamp",
    "national", "natural", "nchar", "none", "normalize", "not", "notnull", "null",
    "nullif", "numeric", "offset", "on", "only", "or", "order", "out", "outer",
    "overlaps", "overlay", "placing", "position", "precision", "primary", "real",
    "references", "returning", "right", "row", "select", "session_user", "setof",
    "similar", "smallint", "some", "substring", "symmetric", "system_user", "table",
    "tablesample", "then", "time", "timestamp", "to", "trailing", "treat", "trim",
    "true", "union", "unique", "user", "using", "values", "varchar", "variadic",
    "verbose", "when", "where", "window", "with", "xmlattributes", "xmlconcat",
    "xmlelement", "xmlexists", "xmlforest", "xmlnamespaces", "xmlparse", "xmlpi",
    "xmlroot", "xmlserialize", "xmltable",
];

/// A reserved-word table: the PostgreSQL set plus caller-supplied extras.
///
/// Lookups are case-insensitive.
///
/// ```
/// use pg_escape::Keywords;
///
/// let kw = Keywords::postgres().with_extra(["tenant"]);
/// assert!(kw.is_reserved("SELECT"));
/// assert!(kw.is_reserved("Tenant"));
/// assert!(!kw.is_reserved("users"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keywords {
    extra: BTreeSet<String>,
}

impl Keywords {
    pub fn postgres() -> Self {
        Self::default()
    }

    /// Add words to the table.
    pub fn with_extra<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extend(words);
        self
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Whether `word` must be quoted to be used as an identifier.
    pub fn is_reserved(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        POSTGRES_RESERVED.binary_search(&lower.as_str()).is_ok() || self.extra.contains(&lower)
    }

    /// All words in the table, built-in first, then extras in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        POSTGRES_RESERVED
            .iter()
            .copied()
            .chain(self.extra.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        POSTGRES_RESERVED.len() + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
