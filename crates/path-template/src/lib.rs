//! # path-template
//!
//! A compact DSL for hierarchical path templates, with support for:
//! - Literal segments (`/user/photos`)
//! - Single-segment variables (`/users/:id`)
//! - Multi-segment splats (`/files/*path`, anonymous `*`)
//! - Extensions (`/:file.:ext`)
//! - Nested optional groups (`/files(/blog(/:date))/:name`)
//!
//! ## Operations
//!
//! - [`parse`]: template text → [`Template`]
//! - [`inspect`]: [`Template`] → template text
//! - [`format`]: [`Template`] + [`Bindings`] → path
//! - [`match_path`] / [`match_first`]: path → [`Bindings`], by backtracking search
//! - [`variables`], [`add`], [`without`]: structural operations on templates
//!
//! Templates are immutable; every derived template is a new value.
//!
//! ## Matching
//!
//! Matching is a depth-first backtracking search. Variables and splats are
//! greedy and give characters/segments back on failure; optional groups are
//! tried included first, then skipped. The first complete match in that order
//! is returned, and the whole path must be consumed.
//!
//! ## Example
//!
//! ```
//! use path_template::{parse, Bindings};
//!
//! let template = parse("/files(/blog/:date)/:name(.:ext)").unwrap();
//!
//! let bindings = template.matches("/files/blog/2012/photo.jpg").unwrap();
//! assert_eq!(bindings.get_str("date"), Some("2012"));
//! assert_eq!(bindings.get_str("name"), Some("photo"));
//! assert_eq!(bindings.get_str("ext"), Some("jpg"));
//!
//! let path = template.format(&Bindings::new().with("name", "photo")).unwrap();
//! assert_eq!(path, "/files/photo");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod algebra;
mod bindings;
mod error;
mod matcher;
pub mod path;
mod render;
mod set;
pub mod template;

// ============================================================================
// Public API
// ============================================================================

pub use algebra::{add, variables, without};
pub use bindings::{Bindings, Value};
pub use error::{Error, FormatError, ParseError, Result};
pub use matcher::{match_first, match_path, TemplateMatch};
pub use render::{format, format_str, inspect};
pub use set::TemplateSet;
pub use template::{parse, Template, Token};
