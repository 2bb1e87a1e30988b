/// Ordered template collections
///
/// A [`TemplateSet`] owns templates in priority order: the first template
/// that matches a path wins. Nothing is re-sorted behind the caller's back.

use crate::error::ParseError;
use crate::matcher::{match_first, TemplateMatch};
use crate::template::{parse, Template};

/// Templates tried in insertion order
///
/// # Examples
///
/// ```
/// use path_template::TemplateSet;
///
/// let set = TemplateSet::parse_all(["/blog/:year/:month/posts/:id", "/:controller/:action/:id"]).unwrap();
///
/// let found = set.match_path("/admin/edit/2").unwrap();
/// assert_eq!(found.index, 1);
/// assert_eq!(found.bindings.get_str("controller"), Some("admin"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSet {
    templates: Vec<Template>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every text, keeping the given order
    pub fn parse_all<I, S>(texts: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|text| parse(text.as_ref()))
            .collect()
    }

    // ========================================================================
    // Functional Builder Methods
    // ========================================================================

    /// Appends a template (functional builder)
    ///
    /// # Examples
    ///
    /// ```
    /// use path_template::{parse, TemplateSet};
    ///
    /// let set = TemplateSet::new()
    ///     .with_template(parse("/foo/bar").unwrap())
    ///     .with_template(parse("/*parts").unwrap());
    ///
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn with_template(mut self, template: Template) -> Self {
        self.add_template(template);
        self
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Appends a template with the lowest priority so far
    pub fn add_template(&mut self, template: Template) {
        self.templates.push(template);
    }

    /// Removes every template structurally equal to `template`
    ///
    /// Returns whether anything was removed.
    pub fn remove_template(&mut self, template: &Template) -> bool {
        let before = self.templates.len();
        self.templates.retain(|t| t != template);
        self.templates.len() != before
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// First template matching `path`, with its index and bindings
    pub fn match_path(&self, path: &str) -> Option<TemplateMatch<'_>> {
        match_first(&self.templates, path)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<Template> for TemplateSet {
    fn from_iter<I: IntoIterator<Item = Template>>(iter: I) -> Self {
        Self {
            templates: iter.into_iter().collect(),
        }
    }
}

impl Extend<Template> for TemplateSet {
    fn extend<I: IntoIterator<Item = Template>>(&mut self, iter: I) {
        self.templates.extend(iter);
    }
}

impl IntoIterator for TemplateSet {
    type Item = Template;
    type IntoIter = std::vec::IntoIter<Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.into_iter()
    }
}

impl<'a> IntoIterator for &'a TemplateSet {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}
