//! # Chapter 1: Tags & Field Types
//!
//! How tags and field types drive the conversion.
//!
//! ## Tag Syntax
//!
//! A tag is `key[, option=value]*`. Surrounding spaces are trimmed, and an
//! empty key is an error.
//!
//! | Option | Values | Applies to |
//! |--------|--------|------------|
//! | `timeLayout` | a `strftime` pattern, e.g. `%Y-%m-%d` | time fields |
//! | `unixTimeUnit` | `sec` (default), `millisec`, `microsec`, `nanosec` | time fields |
//!
//! When both options are present, `timeLayout` wins. An unknown
//! `unixTimeUnit` is always an error, even when a layout is set.
//!
//! ## Field Types
//!
//! | Field type | Output |
//! |------------|--------|
//! | `String`, `&str` | the text |
//! | `i64` | decimal integer |
//! | `f64` | six decimals, e.g. `123.456000` |
//! | `bool` | `1` when true, omitted when false |
//! | `DateTime<Tz>` | unix timestamp or layout |
//! | `Option<T>` | as `T`, omitted when `None` |
//! | `Vec<T>` | one value per element, `T` not `bool` |
//!
//! ```ignore
//! use taqc::prelude::*;
//!
//! #[derive(Record)]
//! struct Events {
//!     #[taqc("from, unixTimeUnit=millisec")]
//!     from: DateTime<Utc>,
//!     #[taqc("day, timeLayout=%Y-%m-%d")]
//!     day: Option<DateTime<Utc>>,
//!     #[taqc("kind")]
//!     kinds: Vec<String>,
//!     #[taqc("archived")]
//!     archived: bool,
//! }
//! ```
//!
//! ## Errors
//!
//! The reflective converter reports problems as [`Error`][crate::Error]:
//!
//! ```ignore
//! match convert_to_query_params(Some(&events)) {
//!     Ok(query) => println!("{}", query.encode()),
//!     Err(Error::EmptyKey) => eprintln!("a tag has no key"),
//!     Err(Error::UnsupportedFieldType { kind, location }) => {
//!         eprintln!("cannot convert {kind} ({location})");
//!     }
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```
//!
//! Converting `None` fails with `Error::NilValue`:
//!
//! ```ignore
//! let missing: Option<&Events> = None;
//! assert_eq!(convert_to_query_params(missing), Err(Error::NilValue));
//! ```
//!
//! ## Next Steps
//!
//! - [Chapter 2: Generated Code][super::chapter_2] - Move the checks to build time
