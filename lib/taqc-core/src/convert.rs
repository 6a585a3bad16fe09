//! Reflective conversion of records into query parameters.

use tracing::debug;

use crate::format::TimeFormat;
use crate::{Error, QueryValues, Reflect, Result, Tag, Value, rule};

/// A field of a record, as seen by the reflective converter.
#[derive(Clone, Copy)]
pub struct FieldRef<'a> {
    /// The field name.
    pub name: &'static str,
    /// The raw `taqc` tag, if the field carries one.
    pub tag: Option<&'static str>,
    value: FieldValue<'a>,
}

#[derive(Clone, Copy)]
enum FieldValue<'a> {
    Reflect(&'a dyn Reflect),
    /// A type without a [`Reflect`] implementation, by name.
    Opaque(&'static str),
}

impl<'a> FieldRef<'a> {
    /// A field carrying a tag.
    #[must_use]
    pub fn tagged(name: &'static str, tag: &'static str, value: &'a dyn Reflect) -> Self {
        Self {
            name,
            tag: Some(tag),
            value: FieldValue::Reflect(value),
        }
    }

    /// A field without a tag; it never reaches the output.
    #[must_use]
    pub fn untagged(name: &'static str, value: &'a dyn Reflect) -> Self {
        Self {
            name,
            tag: None,
            value: FieldValue::Reflect(value),
        }
    }

    /// A tagged field whose type cannot be reflected.
    ///
    /// It reflects as [`Value::Opaque`], so converting it fails with
    /// [`Error::UnsupportedFieldType`].
    #[must_use]
    pub const fn opaque(name: &'static str, tag: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            tag: Some(tag),
            value: FieldValue::Opaque(type_name),
        }
    }

    /// The dynamic view of the field value.
    #[must_use]
    pub fn value(&self) -> Value<'a> {
        match self.value {
            FieldValue::Reflect(value) => value.reflect(),
            FieldValue::Opaque(type_name) => Value::Opaque(type_name),
        }
    }
}

impl std::fmt::Debug for FieldRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRef")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("value", &self.value())
            .finish()
    }
}

/// Records whose fields can be inspected at runtime.
///
/// This is automatically implemented by the `#[derive(Record)]` macro, which
/// exposes the fields carrying a `#[taqc("...")]` attribute.
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
///     #[taqc("since, unixTimeUnit=millisec")]
///     since: Option<chrono::DateTime<chrono::Utc>>,
///     internal_id: u64,
/// }
/// ```
pub trait Record {
    /// The fields, in declaration order.
    fn fields(&self) -> Vec<FieldRef<'_>>;
}

impl<R: Record + ?Sized> Record for &R {
    fn fields(&self) -> Vec<FieldRef<'_>> {
        (**self).fields()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn fields(&self) -> Vec<FieldRef<'_>> {
        (**self).fields()
    }
}

/// Convert a record into query parameters according to its field tags.
///
/// Fields without a tag are skipped. Supported field types are strings,
/// `i64`, `f64`, `bool` and `chrono::DateTime`, optionally wrapped in an
/// `Option` or (except `bool`) a `Vec`:
///
/// * a `true` boolean becomes `key=1`, a `false` one is omitted,
/// * a `None` value is omitted,
/// * a sequence adds one `key=value` pair per element, in order,
/// * timestamps default to epoch seconds; `unixTimeUnit=` selects another
///   unit and `timeLayout=` a `strftime` layout, which takes priority.
///
/// The first error aborts the conversion.
///
/// # Errors
///
/// * [`Error::NilValue`] when `record` is `None`,
/// * [`Error::EmptyKey`], [`Error::UnsupportedUnixTimeUnit`] and
///   [`Error::InvalidTimeLayout`] for malformed tags,
/// * [`Error::UnsupportedFieldType`] for fields without a conversion rule.
pub fn convert_to_query_params<R: Record + ?Sized>(record: Option<&R>) -> Result<QueryValues> {
    let record = record.ok_or(Error::NilValue)?;

    let mut query = QueryValues::new();
    for field in record.fields() {
        let Some(raw_tag) = field.tag else {
            debug!(field = field.name, "skipping untagged field");
            continue;
        };

        let tag = Tag::parse(raw_tag)?;
        let time = TimeFormat::resolve(&tag)?;
        rule::apply(tag.key(), &field.value(), &time, &mut query)?;
    }

    debug!(keys = query.len(), "converted record to query parameters");
    Ok(query)
}
