//! Error types for taqc.

use std::fmt;

use derive_more::{Display, Error};

// ============================================================================
// Type Location
// ============================================================================

/// Where an unsupported kind was found inside a field's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeLocation {
    /// The field type itself (e.g. `u32`).
    TopLevel,
    /// Behind an optional value (e.g. `Option<u32>`).
    Pointer,
    /// As the element of a sequence (e.g. `Vec<bool>`).
    Sequence,
}

impl TypeLocation {
    /// Render `kind` the way it appears at this location.
    #[must_use]
    pub fn describe(self, kind: &str) -> String {
        match self {
            Self::TopLevel => kind.to_string(),
            Self::Pointer => format!("Option<{kind}>"),
            Self::Sequence => format!("Vec<{kind}>"),
        }
    }
}

impl fmt::Display for TypeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopLevel => write!(f, "top level"),
            Self::Pointer => write!(f, "pointer"),
            Self::Sequence => write!(f, "sequence"),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for taqc conversions.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// No record was given to the converter.
    #[display("given value is nil")]
    NilValue,

    /// A tag has an empty query parameter name.
    #[display("query parameter name is empty in a tag")]
    EmptyKey,

    /// The field's kind has no conversion rule.
    #[display("unsupported field type `{}` ({location})", location.describe(kind))]
    UnsupportedFieldType {
        /// Name of the offending kind.
        #[error(not(source))]
        kind: String,
        /// Where the kind was found.
        location: TypeLocation,
    },

    /// The `unixTimeUnit` option names an unknown unit.
    #[display("{value} is unsupported: unsupported unix time unit has given")]
    UnsupportedUnixTimeUnit {
        /// The raw unit value.
        #[error(not(source))]
        value: String,
    },

    /// The `timeLayout` option is not a valid `strftime` pattern.
    #[display("invalid time layout: {layout}")]
    InvalidTimeLayout {
        /// The raw layout value.
        #[error(not(source))]
        layout: String,
    },
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unsupported field type error.
    #[must_use]
    pub fn unsupported_field_type(kind: impl Into<String>, location: TypeLocation) -> Self {
        Self::UnsupportedFieldType {
            kind: kind.into(),
            location,
        }
    }

    /// Create an unsupported unix time unit error.
    #[must_use]
    pub fn unsupported_unix_time_unit(value: impl Into<String>) -> Self {
        Self::UnsupportedUnixTimeUnit {
            value: value.into(),
        }
    }

    /// Create an invalid time layout error.
    #[must_use]
    pub fn invalid_time_layout(layout: impl Into<String>) -> Self {
        Self::InvalidTimeLayout {
            layout: layout.into(),
        }
    }

    /// Returns `true` if this error comes from a malformed tag.
    #[must_use]
    pub const fn is_tag_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyKey | Self::UnsupportedUnixTimeUnit { .. } | Self::InvalidTimeLayout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn error_display() {
        check!(Error::NilValue.to_string() == "given value is nil");
        check!(Error::EmptyKey.to_string() == "query parameter name is empty in a tag");

        let err = Error::unsupported_unix_time_unit("hour");
        check!(err.to_string() == "hour is unsupported: unsupported unix time unit has given");

        let err = Error::invalid_time_layout("%Q");
        check!(err.to_string() == "invalid time layout: %Q");
    }

    #[test]
    fn unsupported_field_type_names_location() {
        let err = Error::unsupported_field_type("u32", TypeLocation::TopLevel);
        check!(err.to_string() == "unsupported field type `u32` (top level)");

        let err = Error::unsupported_field_type("u32", TypeLocation::Pointer);
        check!(err.to_string() == "unsupported field type `Option<u32>` (pointer)");

        let err = Error::unsupported_field_type("bool", TypeLocation::Sequence);
        check!(err.to_string() == "unsupported field type `Vec<bool>` (sequence)");
    }

    #[test]
    fn tag_errors() {
        check!(Error::EmptyKey.is_tag_error());
        check!(Error::unsupported_unix_time_unit("x").is_tag_error());
        check!(Error::invalid_time_layout("%Q").is_tag_error());
        check!(!Error::NilValue.is_tag_error());
        check!(!Error::unsupported_field_type("u8", TypeLocation::TopLevel).is_tag_error());
    }
}
