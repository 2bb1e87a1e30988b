/// Structural operations over templates
///
/// All functions are **pure**: inputs are never modified and every derived
/// template is a new value.

use crate::error::ParseError;
use crate::template::token::{choice_points, MAX_CHOICE_POINTS, SEPARATOR};
use crate::template::{parse, Template, Token};

/// Names of all named variables and splats, left to right
///
/// Anonymous captures are skipped; names inside optional groups are included.
///
/// # Examples
///
/// ```
/// use path_template::{parse, variables};
///
/// let template = parse("/users/:id/photos/:photo/info/*types(.:ext)").unwrap();
/// assert_eq!(variables(&template), vec!["id", "photo", "types", "ext"]);
///
/// let template = parse("/src/*/readme").unwrap();
/// assert!(variables(&template).is_empty());
/// ```
pub fn variables(template: &Template) -> Vec<String> {
    fn names(tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .flat_map(|token| match token {
                Token::Group(inner) => names(inner),
                other => other.name().map(str::to_string).into_iter().collect(),
            })
            .collect()
    }

    names(template.tokens())
}

/// Appends a fragment to a template
///
/// A single leading `/` on the fragment is ignored. One `/` joins the two
/// unless the template already ends with `/` or the fragment starts with
/// an extension.
///
/// Fails with [`ParseError::TooManyChoicePoints`] when the combined template
/// would hold more variables, splats and groups than the parser accepts.
///
/// # Examples
///
/// ```
/// use path_template::{add, parse};
///
/// let base = parse("/foo").unwrap();
/// assert_eq!(add(&base, "bar").unwrap().inspect(), "/foo/bar");
/// assert_eq!(add(&base, "/:id").unwrap().inspect(), "/foo/:id");
/// assert_eq!(add(&base, ".:ext").unwrap().inspect(), "/foo.:ext");
/// assert_eq!(base.inspect(), "/foo");
/// ```
pub fn add(template: &Template, fragment: &str) -> Result<Template, ParseError> {
    let addition = parse(strip_leading_separator(fragment))?.into_tokens();

    let joins_directly =
        template.ends_with_separator() || addition.first().is_some_and(Token::is_extension);

    let mut tokens = template.tokens().to_vec();
    if !joins_directly {
        tokens.push(Token::separator());
    }
    tokens.extend(addition);

    if choice_points(&tokens) > MAX_CHOICE_POINTS {
        return Err(ParseError::TooManyChoicePoints {
            limit: MAX_CHOICE_POINTS,
        });
    }

    Ok(Template::from_tokens(tokens))
}

/// Removes fragments from a template
///
/// `fragments` is parsed like a template (`"/users/:id"`). Each literal,
/// variable or splat in it is a key, together with the `/` or `.` that
/// precedes it (`/` when nothing does). For each key in order, the first
/// remaining occurrence of that pair in the template is removed, searching
/// left to right and into optional groups. A group emptied by a removal is
/// dropped.
///
/// # Examples
///
/// ```
/// use path_template::{parse, without};
///
/// let template = parse("/users/:id").unwrap();
/// assert_eq!(without(&template, "users").unwrap().inspect(), "/:id");
/// assert_eq!(without(&template, "/:id").unwrap().inspect(), "/users");
///
/// let template = parse("/foo/foo/bar/bar/baz").unwrap();
/// assert_eq!(without(&template, "/foo/bar").unwrap().inspect(), "/foo/bar/baz");
/// ```
pub fn without(template: &Template, fragments: &str) -> Result<Template, ParseError> {
    let keys = removal_keys(parse(strip_leading_separator(fragments))?.into_tokens());

    let tokens = keys
        .iter()
        .fold(template.tokens().to_vec(), |mut tokens, (joiner, key)| {
            remove_first_pair(&mut tokens, joiner, key);
            tokens
        });

    Ok(Template::from_tokens(tokens))
}

fn strip_leading_separator(fragment: &str) -> &str {
    fragment.strip_prefix(SEPARATOR).unwrap_or(fragment)
}

/// Pairs each non-joiner token with the `/` or `.` before it
fn removal_keys(tokens: Vec<Token>) -> Vec<(Token, Token)> {
    let mut joiner = Token::separator();
    let mut keys = Vec::new();

    for token in tokens {
        if token.is_separator() || token.is_extension() {
            joiner = token;
        } else {
            keys.push((std::mem::replace(&mut joiner, Token::separator()), token));
        }
    }

    keys
}

/// Removes the first `joiner key` pair, descending into groups
fn remove_first_pair(tokens: &mut Vec<Token>, joiner: &Token, key: &Token) -> bool {
    for i in 0..tokens.len() {
        if let Token::Group(inner) = &mut tokens[i] {
            if remove_first_pair(inner, joiner, key) {
                if inner.is_empty() {
                    tokens.remove(i);
                }
                return true;
            }
            continue;
        }

        if &tokens[i] == joiner && tokens.get(i + 1) == Some(key) {
            tokens.drain(i..i + 2);
            return true;
        }
    }
    false
}
