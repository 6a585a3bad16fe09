//! # Chapter 0: Getting Started
//!
//! Your first query string in 5 minutes.
//!
//! ## What You'll Learn
//!
//! - Tag struct fields with `#[taqc("...")]`
//! - Convert a struct with [`convert_to_query_params`][crate::convert_to_query_params]
//! - Encode the result or append it to a URL
//!
//! ## Prerequisites
//!
//! Add to `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! taqc = "0.1"
//! ```
//!
//! ## Your First Conversion
//!
//! ```ignore
//! use taqc::prelude::*;
//!
//! #[derive(Record)]
//! struct Search {
//!     #[taqc("q")]
//!     query: String,
//!     #[taqc("page")]
//!     page: i64,
//!     #[taqc("score")]
//!     min_score: f64,
//!     // Not tagged: never part of the query
//!     request_id: String,
//! }
//!
//! fn main() -> taqc::Result<()> {
//!     let search = Search {
//!         query: "rust lang".to_string(),
//!         page: 2,
//!         min_score: 0.5,
//!         request_id: "abc".to_string(),
//!     };
//!
//!     let query = convert_to_query_params(Some(&search))?;
//!     assert_eq!(query.get("page"), Some("2"));
//!     assert_eq!(query.get("score"), Some("0.500000"));
//!     assert_eq!(query.encode(), "page=2&q=rust+lang&score=0.500000");
//!     Ok(())
//! }
//! ```
//!
//! ## Using the Result
//!
//! [`QueryValues`][crate::QueryValues] maps each key to its list of values.
//! Keys are sorted, so the encoded string is deterministic:
//!
//! ```ignore
//! let mut url = taqc::url::Url::parse("https://api.example.com/search")?;
//! query.append_to_url(&mut url);
//! // https://api.example.com/search?page=2&q=rust+lang&score=0.500000
//! ```
//!
//! ## Next Steps
//!
//! - [Chapter 1: Tags & Field Types][super::chapter_1] - Options, time formats, errors
