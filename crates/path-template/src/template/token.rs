/// Token model for path templates
///
/// A template is an ordered list of tokens. Optional groups nest as a tree,
/// so group bracketing is always well formed by construction.

use serde::{Deserialize, Serialize};

// ============================================================================
// Grammar Characters
// ============================================================================

/// Separates path segments: `/users/:id`
pub const SEPARATOR: char = '/';
/// Introduces an extension: `/:file.:ext`
pub const EXTENSION: char = '.';
/// Prefix of a single-segment variable: `:id`
pub const VARIABLE_MARKER: char = ':';
/// Prefix of a multi-segment splat: `*parts` or bare `*`
pub const SPLAT_MARKER: char = '*';
/// Opens an optional group
pub const GROUP_OPEN: char = '(';
/// Closes an optional group
pub const GROUP_CLOSE: char = ')';

// ============================================================================
// Limits
// ============================================================================

/// Deepest optional-group nesting the parser accepts
pub const MAX_GROUP_DEPTH: usize = 32;

/// Most variables, splats and groups a single template may hold
///
/// Each one is a choice point for the matcher and costs a stack frame on the
/// search path. Literals are stepped through without recursion and are not
/// limited.
pub const MAX_CHOICE_POINTS: usize = 256;

/// Checks if a character may appear in a variable or splat name
///
/// Names are ASCII alphanumerics and `_`.
///
/// # Examples
///
/// ```
/// use path_template::template::token::is_name_char;
///
/// assert!(is_name_char('a'));
/// assert!(is_name_char('_'));
/// assert!(is_name_char('7'));
/// assert!(!is_name_char('-'));
/// assert!(!is_name_char('é'));
/// ```
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character ends a literal run
pub fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        SEPARATOR | EXTENSION | VARIABLE_MARKER | SPLAT_MARKER | GROUP_OPEN | GROUP_CLOSE
    )
}

/// Checks if a character ends a captured segment during matching
///
/// Both the separator and the extension character terminate a capture, so
/// `/:file(.:ext)` splits `robot.jpg` into `robot` and `jpg`.
pub fn is_boundary(c: char) -> bool {
    c == SEPARATOR || c == EXTENSION
}

// ============================================================================
// Token
// ============================================================================

/// A single element of a template
///
/// # Examples
///
/// ```
/// use path_template::{parse, Token};
///
/// let template = parse("/files(/:name)").unwrap();
/// assert_eq!(
///     template.tokens(),
///     &[
///         Token::separator(),
///         Token::literal("files"),
///         Token::Group(vec![Token::separator(), Token::variable("name")]),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    /// Text that must appear verbatim
    Literal(String),
    /// Single-segment capture; `None` matches without binding
    Variable(Option<String>),
    /// Zero or more segments; `None` matches without binding
    Splat(Option<String>),
    /// Optional sub-sequence, included or skipped as a whole
    Group(Vec<Token>),
}

impl Token {
    pub fn literal(text: impl Into<String>) -> Self {
        Token::Literal(text.into())
    }

    /// The `/` literal
    pub fn separator() -> Self {
        Token::Literal(SEPARATOR.to_string())
    }

    /// The `.` literal
    pub fn extension() -> Self {
        Token::Literal(EXTENSION.to_string())
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Token::Variable(Some(name.into()))
    }

    pub fn splat(name: impl Into<String>) -> Self {
        Token::Splat(Some(name.into()))
    }

    pub fn anonymous_splat() -> Self {
        Token::Splat(None)
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Token::Literal(text) if text.len() == 1 && text.starts_with(SEPARATOR))
    }

    pub fn is_extension(&self) -> bool {
        matches!(self, Token::Literal(text) if text.len() == 1 && text.starts_with(EXTENSION))
    }

    /// Name bound by a variable or splat
    pub fn name(&self) -> Option<&str> {
        match self {
            Token::Variable(name) | Token::Splat(name) => name.as_deref(),
            _ => None,
        }
    }

    /// Number of flat tokens covered by a group (0 for other tokens)
    ///
    /// This is the skip count of the flat representation, where a group is a
    /// marker followed by its content: nested group markers count as tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use path_template::parse;
    ///
    /// let template = parse("/files(/blog(/:date))/:name").unwrap();
    /// assert_eq!(template.tokens()[2].span(), 5);
    /// ```
    pub fn span(&self) -> usize {
        match self {
            Token::Group(inner) => flat_len(inner),
            _ => 0,
        }
    }
}

/// Number of tokens in the flat representation of a token list
pub fn flat_len(tokens: &[Token]) -> usize {
    tokens.iter().map(|token| 1 + token.span()).sum()
}

/// Number of variables, splats and groups in a token list, nested ones included
pub fn choice_points(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .map(|token| match token {
            Token::Literal(_) => 0,
            Token::Variable(_) | Token::Splat(_) => 1,
            Token::Group(inner) => 1 + choice_points(inner),
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiters() {
        for c in ['/', '.', ':', '*', '(', ')'] {
            assert!(is_delimiter(c), "{c} should be a delimiter");
        }
        assert!(!is_delimiter('-'));
        assert!(!is_delimiter('a'));
    }

    #[test]
    fn test_separator_and_extension() {
        assert!(Token::separator().is_separator());
        assert!(!Token::separator().is_extension());
        assert!(Token::extension().is_extension());
        assert!(!Token::literal("//").is_separator());
        assert!(!Token::variable("id").is_separator());
    }

    #[test]
    fn test_name() {
        assert_eq!(Token::variable("id").name(), Some("id"));
        assert_eq!(Token::splat("parts").name(), Some("parts"));
        assert_eq!(Token::anonymous_splat().name(), None);
        assert_eq!(Token::literal("id").name(), None);
    }

    #[test]
    fn test_span_counts_nested_markers() {
        let inner = Token::Group(vec![Token::separator(), Token::variable("date")]);
        let outer = Token::Group(vec![Token::separator(), Token::literal("blog"), inner.clone()]);

        assert_eq!(inner.span(), 2);
        assert_eq!(outer.span(), 5);
        assert_eq!(Token::separator().span(), 0);
        assert_eq!(flat_len(&[Token::separator(), outer]), 7);
    }

    #[test]
    fn test_choice_points() {
        let inner = Token::Group(vec![Token::separator(), Token::variable("date")]);
        let tokens = [Token::separator(), Token::anonymous_splat(), inner, Token::literal("x")];
        assert_eq!(choice_points(&tokens), 3);
        assert_eq!(choice_points(&[Token::separator()]), 0);
    }
}
