/// Template parser
///
/// Single left-to-right pass over the template text. Optional groups are
/// parsed by recursive descent, one call per nesting level.

use super::token::{
    is_delimiter, is_name_char, Token, EXTENSION, GROUP_CLOSE, GROUP_OPEN, MAX_CHOICE_POINTS,
    MAX_GROUP_DEPTH, SEPARATOR, SPLAT_MARKER, VARIABLE_MARKER,
};
use super::Template;
use crate::error::ParseError;

/// Parses template text into a [`Template`] (pure function)
///
/// # Grammar
///
/// - `/` and `.` are always their own one-character literals
/// - `:name` is a variable, `*name` a splat, bare `*` an anonymous splat
/// - `( ... )` is an optional group and may nest
/// - any other run of characters is a single literal
///
/// # Limits
///
/// Groups nest at most [`MAX_GROUP_DEPTH`] deep, and a template holds at most
/// [`MAX_CHOICE_POINTS`] variables, splats and groups. Longer inputs are
/// rejected with an error instead of exhausting the stack later.
///
/// # Examples
///
/// ```
/// use path_template::{parse, Token};
///
/// let template = parse("/blog/:year").unwrap();
/// assert_eq!(
///     template.tokens(),
///     &[
///         Token::separator(),
///         Token::literal("blog"),
///         Token::separator(),
///         Token::variable("year"),
///     ]
/// );
///
/// assert!(parse("/foo(/bar").is_err());
/// ```
pub fn parse(text: &str) -> Result<Template, ParseError> {
    let tokens = Parser::new(text).parse_sequence(None)?;
    Ok(Template::from_tokens(tokens))
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
    depth: usize,
    choice_points: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            depth: 0,
            choice_points: 0,
        }
    }

    fn count_choice_point(&mut self) -> Result<(), ParseError> {
        self.choice_points += 1;
        if self.choice_points > MAX_CHOICE_POINTS {
            return Err(ParseError::TooManyChoicePoints {
                limit: MAX_CHOICE_POINTS,
            });
        }
        Ok(())
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    /// Parses tokens until end of input, or until the `)` closing the group
    /// opened at `open`
    fn parse_sequence(&mut self, open: Option<usize>) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();

        while let Some(c) = self.peek() {
            match c {
                SEPARATOR | EXTENSION => {
                    self.bump(c);
                    tokens.push(Token::Literal(c.to_string()));
                }
                VARIABLE_MARKER => {
                    let position = self.pos;
                    self.bump(c);
                    let name = self.take_while(is_name_char);
                    if name.is_empty() {
                        return Err(ParseError::MissingVariableName { position });
                    }
                    self.count_choice_point()?;
                    tokens.push(Token::variable(name));
                }
                SPLAT_MARKER => {
                    self.bump(c);
                    let name = self.take_while(is_name_char);
                    self.count_choice_point()?;
                    tokens.push(Token::Splat((!name.is_empty()).then(|| name.to_string())));
                }
                GROUP_OPEN => {
                    let position = self.pos;
                    if self.depth >= MAX_GROUP_DEPTH {
                        return Err(ParseError::NestingTooDeep { position });
                    }
                    self.count_choice_point()?;
                    self.bump(c);
                    self.depth += 1;
                    let inner = self.parse_sequence(Some(position))?;
                    self.depth -= 1;
                    tokens.push(Token::Group(inner));
                }
                GROUP_CLOSE => {
                    if open.is_none() {
                        return Err(ParseError::UnexpectedGroupClose { position: self.pos });
                    }
                    self.bump(c);
                    return Ok(tokens);
                }
                _ => {
                    let text = self.take_while(|c| !is_delimiter(c));
                    tokens.push(Token::literal(text));
                }
            }
        }

        match open {
            Some(position) => Err(ParseError::UnclosedGroup { position }),
            None => Ok(tokens),
        }
    }

    /// Consumes the longest run of characters satisfying `pred`
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let text = self.text;
        let start = self.pos;
        let rest = &text[start..];
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &text[start..self.pos]
    }
}
