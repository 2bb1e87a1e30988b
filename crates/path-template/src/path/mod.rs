/// Path utilities for formatted output
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

use crate::template::token::SEPARATOR;

/// Checks if a path contains two or more consecutive separators
///
/// # Examples
///
/// ```
/// use path_template::path::has_repeated_separators;
///
/// assert!(has_repeated_separators("/blog//posts"));
/// assert!(!has_repeated_separators("/blog/posts/"));
/// assert!(!has_repeated_separators(""));
/// ```
pub fn has_repeated_separators(path: &str) -> bool {
    path.as_bytes()
        .windows(2)
        .any(|pair| pair[0] == SEPARATOR as u8 && pair[1] == SEPARATOR as u8)
}

/// Collapses every run of separators into a single separator
///
/// Returns `Cow::Borrowed` when there is nothing to collapse (zero allocations).
/// Leading and trailing separators are kept; nothing else is normalized.
///
/// # Examples
///
/// ```
/// use path_template::path::collapse_separators;
/// use std::borrow::Cow;
///
/// let path = collapse_separators("/foo/bar");
/// assert!(matches!(path, Cow::Borrowed("/foo/bar")));
///
/// assert_eq!(collapse_separators("/blog//posts"), "/blog/posts");
/// assert_eq!(collapse_separators("//files///photo/"), "/files/photo/");
/// ```
pub fn collapse_separators(path: &str) -> Cow<'_, str> {
    // Fast path: already collapsed, return borrowed
    if !has_repeated_separators(path) {
        return Cow::Borrowed(path);
    }

    let mut collapsed = String::with_capacity(path.len());
    let mut previous = None;
    for c in path.chars() {
        if !(c == SEPARATOR && previous == Some(SEPARATOR)) {
            collapsed.push(c);
        }
        previous = Some(c);
    }
    Cow::Owned(collapsed)
}
