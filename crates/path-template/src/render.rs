/// Rendering templates back to text
///
/// - [`inspect`] reproduces the template's surface syntax
/// - [`format`] substitutes bindings and drops optional groups whose
///   variables are not all bound

use tracing::debug;

use crate::bindings::Bindings;
use crate::error::{FormatError, Result};
use crate::path::{collapse_separators, has_repeated_separators};
use crate::template::token::{GROUP_CLOSE, GROUP_OPEN, SPLAT_MARKER, VARIABLE_MARKER};
use crate::template::{parse, Template, Token};

// ============================================================================
// Inspect
// ============================================================================

/// Renders a template in its surface syntax (pure function)
///
/// Left inverse of [`parse`](crate::parse): `inspect(&parse(s)?) == s`.
///
/// # Examples
///
/// ```
/// use path_template::{inspect, parse};
///
/// let template = parse("/files(/blog(/:date))/:name").unwrap();
/// assert_eq!(inspect(&template), "/files(/blog(/:date))/:name");
/// ```
pub fn inspect(template: &Template) -> String {
    inspect_tokens(template.tokens())
}

pub(crate) fn inspect_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    inspect_into(tokens, &mut out);
    out
}

fn inspect_into(tokens: &[Token], out: &mut String) {
    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Variable(name) => {
                out.push(VARIABLE_MARKER);
                out.push_str(name.as_deref().unwrap_or_default());
            }
            Token::Splat(name) => {
                out.push(SPLAT_MARKER);
                out.push_str(name.as_deref().unwrap_or_default());
            }
            Token::Group(inner) => {
                out.push(GROUP_OPEN);
                inspect_into(inner, out);
                out.push(GROUP_CLOSE);
            }
        }
    }
}

// ============================================================================
// Format
// ============================================================================

/// Builds a path from a template and bindings
///
/// # Rules
///
/// 1. Literals render verbatim
/// 2. A top-level variable renders its bound value and must be bound
/// 3. A top-level splat renders its segments joined by `/`, or nothing
/// 4. An optional group renders only if every variable and splat directly
///    inside it is bound; nested groups are decided on their own, but a
///    skipped group takes its nested groups with it
/// 5. Runs of `/` in the result collapse to one `/`
///
/// # Examples
///
/// ```
/// use path_template::{format, parse, Bindings};
///
/// let template = parse("/files(/blog/:year(/posts/:id))/:name").unwrap();
///
/// let bindings = Bindings::new().with("name", "photo").with("id", 42);
/// assert_eq!(format(&template, &bindings).unwrap(), "/files/photo");
///
/// let bindings = Bindings::new().with("name", "photo").with("year", 2012);
/// assert_eq!(format(&template, &bindings).unwrap(), "/files/blog/2012/photo");
/// ```
pub fn format(template: &Template, bindings: &Bindings) -> Result<String, FormatError> {
    let mut out = String::new();
    format_into(template.tokens(), bindings, &mut out)?;
    if !has_repeated_separators(&out) {
        return Ok(out);
    }
    Ok(collapse_separators(&out).into_owned())
}

/// Parses template text and formats it in one step
///
/// # Examples
///
/// ```
/// use path_template::{format_str, Bindings};
///
/// let path = format_str("/*parts.:ext", &Bindings::new().with("parts", ["foo", "bar"]).with("ext", "txt"));
/// assert_eq!(path.unwrap(), "/foo/bar.txt");
/// ```
pub fn format_str(text: &str, bindings: &Bindings) -> Result<String> {
    let template = parse(text)?;
    Ok(format(&template, bindings)?)
}

fn format_into(tokens: &[Token], bindings: &Bindings, out: &mut String) -> Result<(), FormatError> {
    for token in tokens {
        match token {
            Token::Literal(text) => out.push_str(text),
            Token::Variable(Some(name)) => {
                let value = bindings
                    .get(name)
                    .ok_or_else(|| FormatError::UnboundVariable { name: name.clone() })?;
                out.push_str(&value.render());
            }
            Token::Variable(None) => return Err(FormatError::AnonymousVariable),
            Token::Splat(name) => {
                if let Some(value) = name.as_deref().and_then(|name| bindings.get(name)) {
                    out.push_str(&value.render());
                }
            }
            Token::Group(inner) => {
                if is_satisfied(inner, bindings) {
                    format_into(inner, bindings, out)?;
                } else {
                    debug!(group = %inspect_tokens(inner), "skipping optional group with unbound variables");
                }
            }
        }
    }
    Ok(())
}

/// Whether every variable and splat directly inside a group is bound
fn is_satisfied(tokens: &[Token], bindings: &Bindings) -> bool {
    tokens.iter().all(|token| match token {
        Token::Variable(name) | Token::Splat(name) => {
            name.as_deref().is_some_and(|name| bindings.contains(name))
        }
        Token::Literal(_) | Token::Group(_) => true,
    })
}
