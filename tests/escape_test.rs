use pg_escape::prelude::*;
use pg_escape::{pg_format, quote_dollar_with};
use pretty_assertions::assert_eq;

fn is_dollar_quoted(out: &str, content: &str) -> bool {
    let Some(inner) = out.strip_prefix('$') else {
        return false;
    };
    let Some((tag, rest)) = inner.split_once('$') else {
        return false;
    };
    !tag.is_empty()
        && tag.chars().all(|c| c.is_ascii_lowercase())
        && !content.contains(tag)
        && rest == format!("{content}${tag}$")
}

#[test]
fn test_format_string() {
    assert_eq!(pg_format!("some %s here", "thing").unwrap(), "some thing here");
    assert_eq!(
        pg_format!("some %s thing %s", "long", "here").unwrap(),
        "some long thing here"
    );
}

#[test]
fn test_format_primitive_numbers() {
    let len: usize = 3;
    assert_eq!(pg_format!("limit %s", len).unwrap(), "limit 3");
    assert_eq!(
        pg_format!("%s %L %s", u64::MAX, -0.0, 1.5f32).unwrap(),
        "18446744073709551615 '0' 1.5"
    );
}

#[test]
fn test_format_percent() {
    assert_eq!(pg_format!("some %%", "thing").unwrap(), "some %");
    assert_eq!(pg_format!("just %% a %s", "test").unwrap(), "just % a test");
}

#[test]
fn test_format_ident() {
    assert_eq!(pg_format!("some %I", "foo/bar/baz").unwrap(), "some \"foo/bar/baz\"");
}

#[test]
fn test_format_literal() {
    assert_eq!(pg_format!("%L", "Tobi's").unwrap(), "'Tobi''s'");
}

#[test]
fn test_format_dollar() {
    let out = pg_format!("%Q", "Tobi's").unwrap();
    assert!(is_dollar_quoted(&out, "Tobi's"), "{out}");
}

#[test]
fn test_format_mixed_query() {
    let sql = pg_format!(
        "INSERT INTO %I (%I, %I) VALUES (%L, %L) -- %s",
        "user",
        "name",
        "tags",
        "O'Brien",
        vec!["a", "b"],
        None::<&str>,
    )
    .unwrap();
    assert_eq!(
        sql,
        "INSERT INTO \"user\" (name, tags) VALUES ('O''Brien', ('a', 'b')) -- "
    );
}

#[test]
fn test_format_errors() {
    assert!(matches!(
        pg_format!("%s %s", "one"),
        Err(EscapeError::ArgumentUnderflow { .. })
    ));
    assert!(matches!(
        pg_format!("%x", "one"),
        Err(EscapeError::InvalidDirective { directive: 'x', .. })
    ));
    assert!(matches!(pg_format!("%I", ""), Err(EscapeError::MissingIdentifier)));
}

#[test]
fn test_string() {
    assert_eq!(coerce_string(&Value::Null), "");
    assert_eq!(coerce_string(&0.into()), "0");
    assert_eq!(coerce_string(&15.into()), "15");
    assert_eq!(coerce_string(&"something".into()), "something");
}

#[test]
fn test_dollar_quoted_string() {
    assert_eq!(quote_dollar(&Value::Null), "");
    assert!(is_dollar_quoted(&quote_dollar(&0.into()), "0"));
    assert!(is_dollar_quoted(&quote_dollar(&15.into()), "15"));
    assert!(is_dollar_quoted(&quote_dollar(&"something".into()), "something"));
}

#[test]
fn test_dollar_content_with_dollars() {
    let content = "$a$ $b$ $$ body $$";
    let out = quote_dollar(&content.into());
    assert!(is_dollar_quoted(&out, content), "{out}");
}

#[test]
fn test_ident_quotes_when_necessary() {
    let ident = |s: &str| quote_ident(&s.into()).unwrap();
    assert_eq!(ident("foo"), "foo");
    assert_eq!(ident("_foo"), "_foo");
    assert_eq!(ident("_foo_bar$baz"), "_foo_bar$baz");
    assert_eq!(ident("test.some.stuff"), "\"test.some.stuff\"");
    assert_eq!(ident("test.\"some\".stuff"), "\"test.\"\"some\"\".stuff\"");
    assert_eq!(ident("someStuff"), "\"someStuff\"");
}

#[test]
fn test_ident_reserved_words() {
    let ident = |s: &str| quote_ident(&s.into()).unwrap();
    assert_eq!(ident("desc"), "\"desc\"");
    assert_eq!(ident("join"), "\"join\"");
    assert_eq!(ident("cross"), "\"cross\"");
}

#[test]
fn test_ident_null() {
    let err = quote_ident(&Value::Null).unwrap_err();
    assert_eq!(err.to_string(), "identifier required");
}

#[test]
fn test_literal() {
    assert_eq!(quote_literal(&Value::Null), "NULL");
    assert_eq!(
        quote_literal(&vec!["foo", "bar", "baz' DROP TABLE foo;"].into()),
        "('foo', 'bar', 'baz'' DROP TABLE foo;')"
    );
    assert_eq!(quote_literal(&"hello world".into()), "'hello world'");
    assert_eq!(quote_literal(&"\\whoop\\".into()), "E'\\\\whoop\\\\'");
}

#[test]
fn test_formatter_from_config() {
    let config = Config::from_toml(
        r#"
        [format]
        unknown_directive = "pass-through"

        [identifiers]
        extra_reserved = ["tenant"]
        "#,
    )
    .unwrap();
    let f = config.formatter();
    assert_eq!(
        f.format("%I.%I 5%", &["tenant".into(), "id".into()]).unwrap(),
        "\"tenant\".id 5%"
    );
}

#[test]
fn test_injected_tag_source() {
    struct Always(char);
    impl TagSource for Always {
        fn next_letter(&mut self) -> char {
            self.0
        }
    }

    let out = quote_dollar_with(
        &"it's $z$".into(),
        &mut Always('z'),
        &DollarOptions::default(),
    );
    // "z" occurs in the content, so the tag grows to "zz".
    assert_eq!(out, "$zz$it's $z$$zz$");
}
