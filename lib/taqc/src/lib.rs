//! Convert tagged Rust structs into URL query parameters.
//!
//! Fields carrying a `#[taqc("key[, option=value]*")]` attribute become
//! query parameters. Two conversion paths share the same rules:
//!
//! - [`convert_to_query_params`] - Reflective conversion of any [`Record`],
//!   checked at runtime
//! - [`ToQueryParams`] - Generated conversion, checked when the code is
//!   generated, either by `#[derive(Query)]` or by the `taqc-gen` tool
//!
//! # Example
//!
//! ```ignore
//! use taqc::prelude::*;
//!
//! #[derive(Query, Record)]
//! struct Search {
//!     #[taqc("q")]
//!     query: String,
//!     #[taqc("exact")]
//!     exact: bool,
//!     #[taqc("since, timeLayout=%Y-%m-%d")]
//!     since: Option<DateTime<Utc>>,
//!     #[taqc("tag")]
//!     tags: Vec<String>,
//! }
//!
//! let search = Search {
//!     query: "rust".to_string(),
//!     exact: true,
//!     since: None,
//!     tags: vec!["cli".to_string(), "web".to_string()],
//! };
//!
//! let generated = search.to_query_params();
//! let reflected = convert_to_query_params(Some(&search))?;
//! assert_eq!(generated, reflected);
//! assert_eq!(generated.encode(), "exact=1&q=rust&tag=cli&tag=web");
//! ```
//!
//! See the [tutorial][_tutorial] for a complete guide.

pub mod _tutorial;
pub mod prelude;

// Re-export core types
pub use taqc_core::{
    Error, FieldKind, FieldRef, QueryValues, Record, Reflect, Result, ScalarKind, TAG_NAME, Tag,
    TimeFormat, ToQueryParams, TypeLocation, UnixTimeUnit, Value, convert_to_query_params,
};

// Formatting functions called by generated code
pub use taqc_core::format;

#[doc(hidden)]
pub use taqc_core::__private;

// Re-export crates used by field types and by callers of `append_to_url`
pub use chrono;
pub use url;

// Re-export macros
pub use taqc_macro::{Query, Record};
