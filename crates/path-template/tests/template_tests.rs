//! Integration tests for path-template
//!
//! Tests are organized by feature area and cover:
//! - Parsing (literals, variables, splats, extensions, optional groups)
//! - Inspect round-trips
//! - Formatting with bindings and optional-group elision
//! - Token algebra (variables, add, without)

use path_template::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn lit(text: &str) -> Token {
    Token::literal(text)
}

fn sep() -> Token {
    Token::separator()
}

fn var(name: &str) -> Token {
    Token::variable(name)
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_splat() -> anyhow::Result<()> {
    let template = parse("/*parts")?;
    assert_eq!(template.tokens(), &[sep(), Token::splat("parts")]);
    Ok(())
}

#[test]
fn test_parse_splat_and_variable() -> anyhow::Result<()> {
    let template = parse("/blog/*date/posts/:id")?;
    assert_eq!(
        template.tokens(),
        &[
            sep(),
            lit("blog"),
            sep(),
            Token::splat("date"),
            sep(),
            lit("posts"),
            sep(),
            var("id"),
        ]
    );
    Ok(())
}

#[test]
fn test_parse_optional() -> anyhow::Result<()> {
    let template = parse("/foo(/bar)/baz")?;
    assert_eq!(
        template.tokens(),
        &[
            sep(),
            lit("foo"),
            Token::Group(vec![sep(), lit("bar")]),
            sep(),
            lit("baz"),
        ]
    );
    assert_eq!(template.tokens()[2].span(), 2);
    Ok(())
}

#[test]
fn test_parse_multiple_optional() -> anyhow::Result<()> {
    let template = parse("/files(/blog/:date)/:name(.:ext)")?;
    assert_eq!(
        template.tokens(),
        &[
            sep(),
            lit("files"),
            Token::Group(vec![sep(), lit("blog"), sep(), var("date")]),
            sep(),
            var("name"),
            Token::Group(vec![Token::extension(), var("ext")]),
        ]
    );

    let spans: Vec<usize> = template.tokens().iter().map(Token::span).collect();
    assert_eq!(spans, vec![0, 0, 4, 0, 0, 2]);
    Ok(())
}

#[test]
fn test_parse_nested_optional_spans() -> anyhow::Result<()> {
    let template = parse("/files(/blog(/:date))/:name")?;
    let Token::Group(outer) = &template.tokens()[2] else {
        panic!("expected an optional group, got {:?}", template.tokens()[2]);
    };

    assert_eq!(template.tokens()[2].span(), 5);
    assert_eq!(outer[2].span(), 2);
    Ok(())
}

#[rstest]
#[case("/users/:", ParseError::MissingVariableName { position: 7 })]
#[case("/foo(/bar", ParseError::UnclosedGroup { position: 4 })]
#[case("/foo(/bar(/baz)", ParseError::UnclosedGroup { position: 4 })]
#[case("/foo)", ParseError::UnexpectedGroupClose { position: 4 })]
#[case("/foo(/bar))", ParseError::UnexpectedGroupClose { position: 10 })]
fn test_parse_errors(#[case] text: &str, #[case] expected: ParseError) {
    assert_eq!(parse(text), Err(expected));
}

// ============================================================================
// Inspect
// ============================================================================

#[rstest]
#[case("/user/photos/default")]
#[case("/blog/:year/:month/posts/:id")]
#[case("/*parts")]
#[case("/src/*/readme")]
#[case("/blog/*date/posts/:id")]
#[case("/Applications/*.app/*.:ext")]
#[case("/foo(/bar)/baz")]
#[case("/foo(/bar)")]
#[case("/files(/blog(/:date)/:name)")]
#[case("/files(/blog(/:date))/:name")]
#[case("/user(/photo)(.:ext)")]
fn test_inspect_round_trip(#[case] text: &str) {
    let template = parse(text).unwrap();
    assert_eq!(inspect(&template), text);
    assert_eq!(template.to_string(), text);
}

// ============================================================================
// Format
// ============================================================================

#[test]
fn test_format_splat_and_variable() {
    let template = parse("/blog/*date/posts/:id").unwrap();
    let bindings = Bindings::new().with("date", vec![2012.to_string(), "jan".to_string()]).with("id", 1);
    assert_eq!(format(&template, &bindings).unwrap(), "/blog/2012/jan/posts/1");
}

#[test]
fn test_format_splat_with_mixed_values() {
    let template = parse("/*parts").unwrap();
    let bindings = Bindings::new().with(
        "parts",
        Value::Many(vec!["foo".into(), 1.to_string(), "bar".into(), 2.to_string()]),
    );
    assert_eq!(format(&template, &bindings).unwrap(), "/foo/1/bar/2");
}

#[test]
fn test_format_extensions() {
    let template = parse("/*parts.:ext").unwrap();
    let bindings = Bindings::new().with("parts", ["foo", "bar"]).with("ext", "txt");
    assert_eq!(format(&template, &bindings).unwrap(), "/foo/bar.txt");
}

#[rstest]
#[case(Bindings::new().with("name", "photo"), "/files/photo")]
#[case(Bindings::new().with("name", "photo").with("id", 42), "/files/photo")]
#[case(Bindings::new().with("name", "photo").with("year", 2012), "/files/blog/2012/photo")]
#[case(
    Bindings::new().with("name", "photo").with("year", 2012).with("id", 42),
    "/files/blog/2012/posts/42/photo"
)]
fn test_format_nested_optional(#[case] bindings: Bindings, #[case] expected: &str) {
    let template = parse("/files(/blog/:year(/posts/:id))/:name").unwrap();
    assert_eq!(format(&template, &bindings).unwrap(), expected);
}

#[test]
fn test_format_empty_bindings_equals_inspect_without_variable_groups() {
    // Groups with variables are dropped, empty splats vanish, plain groups stay
    let template = parse("/a(/b)(/:c)/*d/e(/f(/:g))").unwrap();
    let stripped = parse("/a(/b)/e(/f)").unwrap();

    let formatted = format(&template, &Bindings::new()).unwrap();
    let expected = inspect(&stripped).replace(|c: char| c == '(' || c == ')', "");
    assert_eq!(formatted, expected);
    assert_eq!(formatted, "/a/b/e/f");
}

#[test]
fn test_format_missing_variable_is_an_error() {
    let template = parse("/blog/:year/:month").unwrap();
    let err = format(&template, &Bindings::new().with("year", 2012)).unwrap_err();
    assert_eq!(err, FormatError::UnboundVariable { name: "month".to_string() });
}

#[test]
fn test_format_str() -> anyhow::Result<()> {
    let path = format_str("/users/:id(.:ext)", &Bindings::new().with("id", 7))?;
    assert_eq!(path, "/users/7");
    Ok(())
}

// ============================================================================
// Variables
// ============================================================================

#[rstest]
#[case("/user/photos/default", &[])]
#[case("/users/:id/photos/:photo", &["id", "photo"])]
#[case("/blog/*date/posts/:id", &["date", "id"])]
#[case("/src/*/readme", &[])]
#[case("/users/:id/photos/:photo/info/*types(.:ext)", &["id", "photo", "types", "ext"])]
fn test_variables(#[case] text: &str, #[case] expected: &[&str]) {
    assert_eq!(variables(&parse(text).unwrap()), expected);
}

// ============================================================================
// Add / Without
// ============================================================================

#[rstest]
#[case("/foo", "bar", "/foo/bar")]
#[case("/foo", "/bar", "/foo/bar")]
#[case("/foo/", "bar", "/foo/bar")]
#[case("/foo", ":bar", "/foo/:bar")]
#[case("/foo", "*bar", "/foo/*bar")]
#[case("/foo", ".bar", "/foo.bar")]
#[case("/foo", ".:bar", "/foo.:bar")]
#[case("/foo", "(/:bar)", "/foo/(/:bar)")]
fn test_add(#[case] base: &str, #[case] fragment: &str, #[case] expected: &str) {
    let template = parse(base).unwrap();
    let added = add(&template, fragment).unwrap();
    assert_eq!(added, parse(expected).unwrap());
    assert_eq!(template, parse(base).unwrap());
}

#[test]
fn test_add_chain_is_non_destructive() {
    let a = parse("/foo").unwrap();
    let b = a.add("bar").unwrap();
    let c = b.add("/baz/").unwrap();
    let d = c.add("/qux").unwrap();

    assert_eq!(a.inspect(), "/foo");
    assert_eq!(b.inspect(), "/foo/bar");
    assert_eq!(c.inspect(), "/foo/bar/baz/");
    assert_eq!(d.inspect(), "/foo/bar/baz/qux");
}

#[rstest]
#[case("/users/:id", "users", "/:id")]
#[case("/users/:id", "/users", "/:id")]
#[case("/users/:id", "/:id", "/users")]
#[case("/foo/foo/bar/bar/baz", "/foo/bar", "/foo/bar/baz")]
#[case("/files(/blog/:date)/:name", "/blog/:date", "/files/:name")]
fn test_without(#[case] base: &str, #[case] fragments: &str, #[case] expected: &str) {
    let template = parse(base).unwrap();
    assert_eq!(template.without(fragments).unwrap(), parse(expected).unwrap());
    assert_eq!(template.inspect(), base);
}

#[test]
fn test_without_then_match() {
    let template = parse("/api/users/:id").unwrap().without("/api").unwrap();
    let bindings = template.matches("/users/7").unwrap();
    assert_eq!(bindings.get_str("id"), Some("7"));
}
