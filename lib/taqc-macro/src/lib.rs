//! Derive macros for taqc query parameter conversions.
//!
//! - `#[derive(Query)]` - Generate a `ToQueryParams` implementation, checked
//!   at compile time
//! - `#[derive(Record)]` - Expose tagged fields to the reflective converter
//!
//! Both read the `#[taqc("key[, option=value]*")]` field attribute.

mod query_derive;
mod record_derive;

use proc_macro::TokenStream;

/// Derive `ToQueryParams` for a struct with named fields.
///
/// Each field carrying a `#[taqc("...")]` attribute becomes a query
/// parameter; other fields are ignored. The tag is `key[, option=value]*`
/// with the options:
///
/// - `timeLayout=<strftime pattern>` - Format time fields with a layout
/// - `unixTimeUnit=<sec|millisec|microsec|nanosec>` - Format time fields
///   as a unix timestamp (default: `sec`)
///
/// Supported field types are `String`, `&str`, `i64`, `f64`, `bool` and
/// `DateTime<Tz>`, optionally wrapped in `Option<..>` or (except `bool`)
/// `Vec<..>`. Invalid tags and unsupported types are compile errors.
///
/// # Example
///
/// ```ignore
/// use taqc::Query;
///
/// #[derive(Query)]
/// struct Search {
///     #[taqc("q")]
///     query: String,
///     #[taqc("exact")]
///     exact: bool,                       // "1" when true, omitted otherwise
///     #[taqc("since, unixTimeUnit=millisec")]
///     since: Option<DateTime<Utc>>,      // omitted when None
///     #[taqc("tag")]
///     tags: Vec<String>,                 // one value per element
///     page_token: String,                // not tagged, ignored
/// }
/// ```
#[proc_macro_derive(Query, attributes(taqc))]
pub fn derive_query(input: TokenStream) -> TokenStream {
    query_derive::expand_query_derive(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derive `Record` for a struct with named fields.
///
/// The fields carrying a `#[taqc("...")]` attribute are exposed, in
/// declaration order, to `convert_to_query_params`. Tags are not checked
/// here: they are parsed when converting.
///
/// # Example
///
/// ```ignore
/// use taqc::Record;
///
/// #[derive(Record)]
/// struct Search {
///     #[taqc("q")]
///     query: String,
///     #[taqc("page")]
///     page: Option<i64>,
/// }
///
/// let search = Search { query: "rust".to_string(), page: None };
/// let query = taqc::convert_to_query_params(Some(&search))?;
/// ```
#[proc_macro_derive(Record, attributes(taqc))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record_derive::expand_record_derive(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
