/// Backtracking matcher
///
/// Pairs a template with a path by depth-first search over
/// (token cursor, input cursor). Choice points, tried in this order:
///
/// - variables: longest run first, then one character shorter, down to one
/// - splats: most segments first, then one fewer, down to zero
/// - optional groups: include first, then skip
///
/// The first complete match in that order wins. The whole template and the
/// whole path must be consumed; there are no prefix matches.

use tracing::{debug, trace};

use crate::bindings::{Bindings, Value};
use crate::template::token::{is_boundary, SEPARATOR};
use crate::template::{Template, Token};

/// Result of matching a path against an ordered list of templates
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateMatch<'t> {
    /// The template that matched
    pub template: &'t Template,
    /// Position of the template in the list
    pub index: usize,
    /// Values captured from the path
    pub bindings: Bindings,
}

/// Matches a path against a single template
///
/// Returns `None` when the path does not fit. A template without variables
/// matches with empty bindings, which is distinct from `None`.
///
/// Variables and splat segments stop at `/` and at `.`, so a value containing
/// `.` does not match back: `format` renders `/users/:id` with
/// `id = "john.doe"` as `/users/john.doe`, but that path does not match
/// `/users/:id`.
///
/// # Examples
///
/// ```
/// use path_template::{match_path, parse};
///
/// let template = parse("/blog/*date/:id/post").unwrap();
/// let bindings = match_path(&template, "/blog/2012/02/22/1/post").unwrap();
/// assert_eq!(bindings.get_all("date").unwrap(), ["2012", "02", "22"]);
/// assert_eq!(bindings.get_str("id"), Some("1"));
///
/// assert!(match_path(&template, "/blog/post").is_none());
/// ```
pub fn match_path(template: &Template, path: &str) -> Option<Bindings> {
    let mut search = Search::new(path);
    let matched = search.run(template.tokens(), None, 0);
    trace!(%template, path, matched, "matched template against path");
    matched.then(|| search.into_bindings())
}

/// Matches a path against templates in order, returning the first match
///
/// # Examples
///
/// ```
/// use path_template::{match_first, parse};
///
/// let templates = vec![parse("/foo/bar").unwrap(), parse("/*parts").unwrap()];
///
/// let found = match_first(&templates, "/foo/bar").unwrap();
/// assert_eq!(found.index, 0);
/// assert!(found.bindings.is_empty());
///
/// let found = match_first(&templates, "/foo/bar/baz").unwrap();
/// assert_eq!(found.template, &templates[1]);
/// ```
pub fn match_first<'t>(templates: &'t [Template], path: &str) -> Option<TemplateMatch<'t>> {
    // Short-circuits on the first matching template
    templates.iter().enumerate().find_map(|(index, template)| {
        match_path(template, path).map(|bindings| {
            debug!(index, %template, path, "path matched template");
            TemplateMatch {
                template,
                index,
                bindings,
            }
        })
    })
}

// ============================================================================
// Search
// ============================================================================

/// Tokens left to match once the current token slice is exhausted
///
/// Entering an optional group pushes the tokens after the group; the chain
/// lives on the call stack.
struct Continuation<'c, 't> {
    tokens: &'t [Token],
    next: Option<&'c Continuation<'c, 't>>,
}

struct Search<'p> {
    input: &'p str,
    /// Captures on the current branch, truncated when a branch fails
    captures: Vec<(&'p str, Value)>,
}

impl<'p> Search<'p> {
    fn new(input: &'p str) -> Self {
        Self {
            input,
            captures: Vec::new(),
        }
    }

    fn into_bindings(self) -> Bindings {
        self.captures.into_iter().collect()
    }

    /// Recurses only at choice points; literals and group exits are stepped
    /// through in place, so stack depth is bounded by the template's
    /// variables, splats and groups
    fn run<'t>(
        &mut self,
        mut tokens: &'t [Token],
        mut rest: Option<&Continuation<'_, 't>>,
        mut pos: usize,
    ) -> bool
    where
        't: 'p,
    {
        loop {
            let Some((token, remaining)) = tokens.split_first() else {
                match rest {
                    Some(continuation) => {
                        tokens = continuation.tokens;
                        rest = continuation.next;
                        continue;
                    }
                    None => return pos == self.input.len(),
                }
            };

            match token {
                Token::Literal(text) => {
                    if !self.input[pos..].starts_with(text.as_str()) {
                        return false;
                    }
                    pos += text.len();
                    tokens = remaining;
                }
                Token::Variable(name) => {
                    return self.match_variable(name.as_deref(), remaining, rest, pos)
                }
                Token::Splat(name) => return self.match_splat(name.as_deref(), remaining, rest, pos),
                Token::Group(inner) => {
                    let after = Continuation {
                        tokens: remaining,
                        next: rest,
                    };
                    return self.run(inner, Some(&after), pos) || self.run(remaining, rest, pos);
                }
            }
        }
    }

    /// Records a capture, continues the search, and undoes the capture if
    /// the rest of the search fails
    fn bind_then<'t>(
        &mut self,
        name: Option<&'t str>,
        value: impl FnOnce() -> Value,
        remaining: &'t [Token],
        rest: Option<&Continuation<'_, 't>>,
        pos: usize,
    ) -> bool
    where
        't: 'p,
    {
        let mark = self.captures.len();
        if let Some(name) = name {
            self.captures.push((name, value()));
        }
        if self.run(remaining, rest, pos) {
            return true;
        }
        self.captures.truncate(mark);
        false
    }

    fn match_variable<'t>(
        &mut self,
        name: Option<&'t str>,
        remaining: &'t [Token],
        rest: Option<&Continuation<'_, 't>>,
        pos: usize,
    ) -> bool
    where
        't: 'p,
    {
        let input = self.input;
        let mut end = pos + segment_len(&input[pos..]);

        // Greedy, then shrink one character at a time (minimum one character)
        while end > pos {
            let captured = &input[pos..end];
            if self.bind_then(name, || Value::One(captured.to_string()), remaining, rest, end) {
                return true;
            }
            end = pos + captured.char_indices().next_back().map_or(0, |(i, _)| i);
        }
        false
    }

    fn match_splat<'t>(
        &mut self,
        name: Option<&'t str>,
        remaining: &'t [Token],
        rest: Option<&Continuation<'_, 't>>,
        pos: usize,
    ) -> bool
    where
        't: 'p,
    {
        let input = self.input;
        let segments = splat_segments(input, pos);

        // Most segments first, then one fewer at a time
        for count in (1..=segments.len()).rev() {
            let end = segments[count - 1].1;
            let value = || Value::Many(segments[..count].iter().map(|(s, _)| s.to_string()).collect());
            if self.bind_then(name, value, remaining, rest, end) {
                return true;
            }
        }

        let empty = || Value::Many(Vec::new());
        if self.bind_then(name, empty, remaining, rest, pos) {
            return true;
        }

        // An empty splat right after a separator hands that separator back to
        // the following tokens: `/foo/*bar/baz` matches `/foo/baz`
        pos > 0
            && input[..pos].ends_with(SEPARATOR)
            && self.bind_then(name, empty, remaining, rest, pos - SEPARATOR.len_utf8())
    }
}

/// Length of the capture-able run at the start of `input`
fn segment_len(input: &str) -> usize {
    input.find(is_boundary).unwrap_or(input.len())
}

/// Segments a splat could consume at `pos`, each paired with its end offset
///
/// A leading separator is absorbed when a segment follows it.
fn splat_segments(input: &str, pos: usize) -> Vec<(&str, usize)> {
    let mut segments = Vec::new();
    let mut cursor = pos;

    if let Some(after) = input[pos..].strip_prefix(SEPARATOR) {
        if segment_len(after) > 0 {
            cursor += SEPARATOR.len_utf8();
        }
    }

    loop {
        let len = segment_len(&input[cursor..]);
        if len == 0 {
            break;
        }
        segments.push((&input[cursor..cursor + len], cursor + len));
        cursor += len;

        match input[cursor..].strip_prefix(SEPARATOR) {
            Some(after) if segment_len(after) > 0 => cursor += SEPARATOR.len_utf8(),
            _ => break,
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::parse;

    #[test]
    fn test_segment_len() {
        assert_eq!(segment_len("robot.jpg"), 5);
        assert_eq!(segment_len("foo/bar"), 3);
        assert_eq!(segment_len("/foo"), 0);
        assert_eq!(segment_len("foo"), 3);
        assert_eq!(segment_len(""), 0);
    }

    #[test]
    fn test_splat_segments() {
        let segments: Vec<&str> = splat_segments("/foo/bar.txt", 1).into_iter().map(|(s, _)| s).collect();
        assert_eq!(segments, vec!["foo", "bar"]);

        let segments = splat_segments("/baz/qux", 0);
        assert_eq!(segments, vec![("baz", 4), ("qux", 8)]);

        assert!(splat_segments("/foo/", 5).is_empty());
        assert!(splat_segments("/", 0).is_empty());
        assert_eq!(splat_segments("a//b", 0), vec![("a", 1)]);
    }

    #[test]
    fn test_variable_shrinks_to_fit_literal() {
        let template = parse("/:name-:id").unwrap();
        let bindings = match_path(&template, "/photo-12").unwrap();
        assert_eq!(bindings.get_str("name"), Some("photo"));
        assert_eq!(bindings.get_str("id"), Some("12"));
    }

    #[test]
    fn test_variable_respects_char_boundaries() {
        let template = parse("/:word-x").unwrap();
        let bindings = match_path(&template, "/café-x").unwrap();
        assert_eq!(bindings.get_str("word"), Some("café"));
    }

    #[test]
    fn test_failed_branch_captures_are_discarded() {
        let template = parse("/foo(/:bar)*baz").unwrap();
        let bindings = match_path(&template, "/foo").unwrap();
        assert!(!bindings.contains("bar"));
        assert_eq!(bindings.get_all("baz"), Some(&[][..]));
    }

    #[test]
    fn test_anonymous_captures_do_not_bind() {
        let template = parse("/foo/*/bar").unwrap();
        assert_eq!(match_path(&template, "/foo/1/2/bar"), Some(Bindings::new()));
    }

    #[test]
    fn test_empty_template_matches_only_empty_path() {
        let template = parse("").unwrap();
        assert_eq!(match_path(&template, ""), Some(Bindings::new()));
        assert_eq!(match_path(&template, "/"), None);
    }
}
