//! Field kind classification shared by the reflective and generated paths.

use std::fmt;

use crate::{Error, Result, TypeLocation};

/// Kind of a single (non-container) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Text, emitted verbatim.
    String,
    /// 64-bit signed integer, emitted in decimal.
    Int64,
    /// 64-bit float, emitted with six decimals.
    Float64,
    /// Boolean, emitted as `1` when true and omitted otherwise.
    Bool,
    /// Timestamp, emitted according to the field's time format.
    Time,
}

impl ScalarKind {
    /// Whether a sequence of this kind can be converted (every kind but `Bool`).
    #[must_use]
    pub const fn allowed_in_sequence(self) -> bool {
        !matches!(self, Self::Bool)
    }

    /// Short kind name, as used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int64 => "int64",
            Self::Float64 => "float64",
            Self::Bool => "bool",
            Self::Time => "time",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of a tagged field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A plain value.
    Scalar(ScalarKind),
    /// An optional value; absent values are omitted.
    Pointer(ScalarKind),
    /// A sequence; each element is added under the same key.
    Sequence(ScalarKind),
}

impl FieldKind {
    /// Build a sequence kind, rejecting element kinds without a rule.
    pub fn sequence(element: ScalarKind) -> Result<Self> {
        if element.allowed_in_sequence() {
            Ok(Self::Sequence(element))
        } else {
            Err(Error::unsupported_field_type(
                element.name(),
                TypeLocation::Sequence,
            ))
        }
    }

    /// The underlying scalar kind.
    #[must_use]
    pub const fn scalar(self) -> ScalarKind {
        match self {
            Self::Scalar(kind) | Self::Pointer(kind) | Self::Sequence(kind) => kind,
        }
    }

    /// Where the scalar sits in the field type.
    #[must_use]
    pub const fn location(self) -> TypeLocation {
        match self {
            Self::Scalar(_) => TypeLocation::TopLevel,
            Self::Pointer(_) => TypeLocation::Pointer,
            Self::Sequence(_) => TypeLocation::Sequence,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.location().describe(self.scalar().name()))
    }
}
