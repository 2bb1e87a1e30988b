/// Error types for template parsing and formatting
///
/// Matching never fails with an error: a path that does not fit a template is
/// reported as `None` by the matcher.

use thiserror::Error;

/// Malformed template text
///
/// Positions are byte offsets into the text handed to the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `:` not followed by a name (`/users/:`)
    #[error("expected a variable name after ':' at byte {position}")]
    MissingVariableName { position: usize },
    /// `(` without a matching `)` (`/foo(/bar`)
    #[error("optional group opened at byte {position} is never closed")]
    UnclosedGroup { position: usize },
    /// `)` with no open group (`/foo)/bar`)
    #[error("unexpected ')' at byte {position}: no optional group is open")]
    UnexpectedGroupClose { position: usize },
    /// `(` opening a group deeper than [`MAX_GROUP_DEPTH`](crate::template::token::MAX_GROUP_DEPTH)
    #[error("optional group at byte {position} is nested too deeply")]
    NestingTooDeep { position: usize },
    /// More variables, splats and groups than the matcher will search
    #[error("template has more than {limit} variables, splats and groups")]
    TooManyChoicePoints { limit: usize },
}

/// Bindings that cannot produce a path for a template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A variable outside any optional group has no binding
    #[error("no binding for required variable ':{name}'")]
    UnboundVariable { name: String },
    /// An anonymous variable outside any optional group can never be bound
    #[error("anonymous variable outside an optional group cannot be formatted")]
    AnonymousVariable,
}

/// Any error produced by this crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
