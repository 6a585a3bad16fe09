//! Conversion rules: from a reflected value to query parameters.

use tracing::trace;

use crate::format::{self, TimeFormat};
use crate::{Error, QueryValues, Result, TypeLocation, Value};

/// How an emitted value is merged into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Replace any previous value.
    Set,
    /// Append to the previous values.
    Add,
}

/// Apply the conversion rules for one field.
///
/// * scalars are set (booleans only when `true`),
/// * optionals are set when present,
/// * sequences add one value per element, in order.
///
/// Anything else fails with [`Error::UnsupportedFieldType`].
pub fn apply(key: &str, value: &Value<'_>, time: &TimeFormat, out: &mut QueryValues) -> Result<()> {
    match value {
        Value::Pointer(None) => Ok(()),
        Value::Pointer(Some(inner)) => {
            emit(key, inner, time, TypeLocation::Pointer, Mode::Set, out)
        }
        Value::Sequence(items) => items
            .iter()
            .try_for_each(|item| emit(key, item, time, TypeLocation::Sequence, Mode::Add, out)),
        scalar => emit(key, scalar, time, TypeLocation::TopLevel, Mode::Set, out),
    }
}

fn emit(
    key: &str,
    value: &Value<'_>,
    time: &TimeFormat,
    location: TypeLocation,
    mode: Mode,
    out: &mut QueryValues,
) -> Result<()> {
    let supported = value.scalar_kind().is_some_and(|kind| {
        location != TypeLocation::Sequence || kind.allowed_in_sequence()
    });
    if !supported {
        return Err(Error::unsupported_field_type(value.kind_name(), location));
    }

    let Some(formatted) = format_scalar(value, time) else {
        return Ok(());
    };
    trace!(key, value = %formatted, ?mode, "emit query parameter");
    match mode {
        Mode::Set => out.set(key, formatted),
        Mode::Add => out.add(key, formatted),
    }
    Ok(())
}

/// Format a scalar value; `None` means the parameter is omitted.
fn format_scalar(value: &Value<'_>, time: &TimeFormat) -> Option<String> {
    match value {
        Value::String(text) => Some(format::string(*text)),
        Value::Int64(number) => Some(format::int64(*number)),
        Value::Float64(number) => Some(format::float64(*number)),
        Value::Bool(true) => Some(format::TRUE.to_string()),
        Value::Time(timestamp) => Some(time.format(timestamp)),
        Value::Bool(false) | Value::Pointer(_) | Value::Sequence(_) | Value::Opaque(_) => None,
    }
}
