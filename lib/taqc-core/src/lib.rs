//! Core types and conversion rules for taqc.
//!
//! This crate provides the building blocks shared by the reflective and the
//! generated conversion paths:
//! - [`Tag`] - Parsing of `key[, option=value]*` field tags
//! - [`ScalarKind`] and [`FieldKind`] - Field kind classification
//! - [`format`] - Value formatting, including [`TimeFormat`]
//! - [`QueryValues`] - Query parameter multimap
//! - [`Reflect`], [`Value`] and [`Record`] - Runtime reflection model
//! - [`convert_to_query_params`] - Reflective converter
//! - [`ToQueryParams`] - Trait implemented by generated code
//! - [`Error`] and [`Result`] - Error handling

#[doc(hidden)]
pub mod __private;
mod convert;
mod error;
pub mod format;
mod kind;
pub mod prelude;
mod query;
mod rule;
mod tag;
mod value;

pub use convert::{FieldRef, Record, convert_to_query_params};
pub use error::{Error, Result, TypeLocation};
pub use format::TimeFormat;
pub use kind::{FieldKind, ScalarKind};
pub use query::QueryValues;
pub use tag::{TAG_NAME, Tag, UnixTimeUnit};
pub use value::{Reflect, Value};

/// Trait for types converted to query parameters by generated code.
///
/// This is automatically implemented by the `#[derive(Query)]` macro and by
/// the `taqc-gen` generator. Unlike [`convert_to_query_params`], tags and
/// field types are checked when the code is generated, so the conversion
/// itself cannot fail.
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
///     #[taqc("page")]
///     page: Option<i64>,
///     #[taqc("tag")]
///     tags: Vec<String>,
/// }
/// ```
pub trait ToQueryParams {
    /// Convert this value to query parameters.
    fn to_query_params(&self) -> QueryValues;
}

impl<T: ToQueryParams + ?Sized> ToQueryParams for &T {
    fn to_query_params(&self) -> QueryValues {
        (**self).to_query_params()
    }
}
