//! # Chapter 2: Generated Code
//!
//! Check tags and field types once, when the code is generated.
//!
//! ## `#[derive(Query)]`
//!
//! The derive implements [`ToQueryParams`][crate::ToQueryParams]. Invalid
//! tags and unsupported field types are compile errors:
//!
//! ```ignore
//! use taqc::prelude::*;
//!
//! #[derive(Query)]
//! struct Search {
//!     #[taqc("q")]
//!     query: String,
//!     #[taqc("page")]
//!     page: Option<i64>,
//! }
//!
//! let search = Search { query: "rust".to_string(), page: None };
//! assert_eq!(search.to_query_params().encode(), "q=rust");
//! ```
//!
//! A struct can derive both `Query` and `Record`: both paths produce the
//! same parameters.
//!
//! ## `taqc-gen`
//!
//! The `taqc-gen` tool writes the same implementation to a source file:
//!
//! ```text
//! taqc-gen --type Search src/
//! ```
//!
//! This scans `src/` for `struct Search`, and writes `src/search_gen.rs`
//! (or the `--output` file) starting with:
//!
//! ```text
//! // Code generated by taqc-gen --type Search src/; DO NOT EDIT.
//! ```
//!
//! Include it in the module declaring the struct:
//!
//! ```ignore
//! include!("search_gen.rs");
//! ```
//!
//! The file is only rewritten when its content changes. Use
//! `--crate-path` when `taqc` is re-exported under another path.
//!
//! ## Summary
//!
//! - `Record` + `convert_to_query_params` - checked at runtime
//! - `Query` - checked at compile time
//! - `taqc-gen` - checked when generating, output committed to the repository
