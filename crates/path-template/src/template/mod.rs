/// Template module
///
/// Contains the token model and the parser that produces it. A [`Template`]
/// is immutable once built: every operation that derives a new template
/// returns a fresh value and leaves its input untouched.

pub mod parser;
pub mod token;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bindings::Bindings;
use crate::error::{FormatError, ParseError};

pub use parser::parse;
pub use token::Token;

/// A parsed path template
///
/// Serializes as its surface syntax (`"/blog/:year(/:month)"`) and is parsed
/// again on deserialization, so a deserialized template always satisfies the
/// parser's invariants.
///
/// # Examples
///
/// ```
/// use path_template::Template;
///
/// let template: Template = "/blog/*date/:id/post".parse().unwrap();
/// assert_eq!(template.variables(), vec!["date", "id"]);
/// assert_eq!(template.to_string(), "/blog/*date/:id/post");
///
/// let bindings = template.matches("/blog/2012/02/22/1/post").unwrap();
/// assert_eq!(bindings.get_str("id"), Some("1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Template {
    tokens: Vec<Token>,
}

impl Template {
    /// Builds a template from tokens without going through the parser
    ///
    /// Callers are responsible for keeping `/` and `.` as standalone literals;
    /// the matcher and renderer rely on it.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Number of top-level tokens (a group counts once)
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether the last top-level token is the `/` literal
    pub fn ends_with_separator(&self) -> bool {
        self.tokens.last().is_some_and(Token::is_separator)
    }

    // ========================================================================
    // Operation Shorthands
    // ========================================================================

    /// See [`crate::inspect`]
    pub fn inspect(&self) -> String {
        crate::render::inspect(self)
    }

    /// See [`crate::format`]
    pub fn format(&self, bindings: &Bindings) -> Result<String, FormatError> {
        crate::render::format(self, bindings)
    }

    /// See [`crate::match_path`]
    pub fn matches(&self, path: &str) -> Option<Bindings> {
        crate::matcher::match_path(self, path)
    }

    /// See [`crate::variables`]
    pub fn variables(&self) -> Vec<String> {
        crate::algebra::variables(self)
    }

    /// See [`crate::add`]
    pub fn add(&self, fragment: &str) -> Result<Template, ParseError> {
        crate::algebra::add(self, fragment)
    }

    /// See [`crate::without`]
    pub fn without(&self, fragments: &str) -> Result<Template, ParseError> {
        crate::algebra::without(self, fragments)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

impl FromStr for Template {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for Template {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value)
    }
}

impl TryFrom<String> for Template {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse(&value)
    }
}

impl From<Template> for String {
    fn from(template: Template) -> Self {
        template.inspect()
    }
}
