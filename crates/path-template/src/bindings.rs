/// Values bound to template variables
///
/// The same [`Bindings`] type is the input of `format` and the output of
/// `match`: a variable binds one string, a splat binds a sequence.

use std::borrow::Cow;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::template::token::SEPARATOR;

// ============================================================================
// Value
// ============================================================================

/// A single bound value
///
/// Serializes untagged: `"2012"` or `["2012", "jan"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    One(String),
    Many(Vec<String>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::One(value) => Some(value),
            Value::Many(_) => None,
        }
    }

    pub fn as_slice(&self) -> Option<&[String]> {
        match self {
            Value::One(_) => None,
            Value::Many(values) => Some(values),
        }
    }

    /// Text form used when formatting a path
    ///
    /// Sequences are joined with the separator.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Value::One(value) => Cow::Borrowed(value),
            Value::Many(values) => {
                let separator = SEPARATOR.to_string();
                Cow::Owned(values.join(separator.as_str()))
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

macro_rules! impl_value_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::One(value.to_string())
                }
            }
        )*
    };
}

impl_value_from_scalar!(
    &str, String, &String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize,
);

impl<T: ToString> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Many(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Value::Many(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Value::Many(values.iter().map(ToString::to_string).collect())
    }
}

// ============================================================================
// Bindings
// ============================================================================

/// Name → value mapping, ordered by name
///
/// # Examples
///
/// ```
/// use path_template::{parse, Bindings};
///
/// let bindings = Bindings::new()
///     .with("date", vec![2012, 1])
///     .with("id", 7);
///
/// let template = parse("/blog/*date/posts/:id").unwrap();
/// assert_eq!(template.format(&bindings).unwrap(), "/blog/2012/1/posts/7");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bindings {
    values: BTreeMap<String, Value>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binding (functional builder)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces a binding, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Value of a single-segment binding
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Segments of a splat binding
    pub fn get_all(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(Value::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.values.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Bindings {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for Bindings {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Bindings {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
