//! Conversion plan: one statement per tagged field.
//!
//! Statements are plain values, independent of the output syntax; see
//! [`crate::Printer`] for rendering.

use syn::{Ident, LitStr};
use taqc_core::{Error, FieldKind, ScalarKind, Tag, TimeFormat, TypeLocation};

use crate::classify::classify;
use crate::decl::{FieldDecl, StructDecl};

/// How a non-boolean scalar is turned into a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatter {
    /// Verbatim text.
    Str,
    /// Decimal integer.
    Int64,
    /// Fixed notation with six decimals.
    Float64,
    /// Timestamp with the field's time format.
    Time(TimeFormat),
}

/// A conversion step for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `set(key, format(field))`
    Set {
        /// Query parameter name.
        key: String,
        /// Struct field.
        field: Ident,
        /// Value formatter.
        format: Formatter,
    },
    /// `if field { set(key, "1") }`
    SetIfTrue {
        /// Query parameter name.
        key: String,
        /// Struct field.
        field: Ident,
    },
    /// `if let Some(value) = field { set(key, format(value)) }`
    SetIfSome {
        /// Query parameter name.
        key: String,
        /// Struct field.
        field: Ident,
        /// Value formatter.
        format: Formatter,
    },
    /// `if field == Some(true) { set(key, "1") }`
    SetIfSomeTrue {
        /// Query parameter name.
        key: String,
        /// Struct field.
        field: Ident,
    },
    /// `for item in field { add(key, format(item)) }`
    AddEach {
        /// Query parameter name.
        key: String,
        /// Struct field.
        field: Ident,
        /// Element formatter.
        format: Formatter,
    },
}

impl Statement {
    /// The query parameter name.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Set { key, .. }
            | Self::SetIfTrue { key, .. }
            | Self::SetIfSome { key, .. }
            | Self::SetIfSomeTrue { key, .. }
            | Self::AddEach { key, .. } => key,
        }
    }

    /// The struct field read by this statement.
    #[must_use]
    pub fn field(&self) -> &Ident {
        match self {
            Self::Set { field, .. }
            | Self::SetIfTrue { field, .. }
            | Self::SetIfSome { field, .. }
            | Self::SetIfSomeTrue { field, .. }
            | Self::AddEach { field, .. } => field,
        }
    }
}

/// Plan the conversion of a struct, in field order.
///
/// Untagged fields are skipped. Tag errors and unsupported field types are
/// reported on the offending attribute or type.
pub fn plan(decl: &StructDecl) -> syn::Result<Vec<Statement>> {
    decl.tagged_fields()
        .filter_map(|field| field.tag.as_ref().map(|tag| (field, tag)))
        .map(|(field, tag)| plan_field(field, tag))
        .collect()
}

fn plan_field(decl: &FieldDecl, tag: &LitStr) -> syn::Result<Statement> {
    let parsed = Tag::parse(&tag.value()).map_err(|err| syn::Error::new_spanned(tag, err))?;
    let time = TimeFormat::resolve(&parsed).map_err(|err| syn::Error::new_spanned(tag, err))?;
    let kind = classify(&decl.ty)?;

    let format = match kind.scalar() {
        ScalarKind::String => Some(Formatter::Str),
        ScalarKind::Int64 => Some(Formatter::Int64),
        ScalarKind::Float64 => Some(Formatter::Float64),
        ScalarKind::Time => Some(Formatter::Time(time)),
        ScalarKind::Bool => None,
    };

    let key = parsed.key().to_string();
    let field = decl.ident.clone();
    let statement = match (kind, format) {
        (FieldKind::Scalar(_), Some(format)) => Statement::Set { key, field, format },
        (FieldKind::Scalar(_), None) => Statement::SetIfTrue { key, field },
        (FieldKind::Pointer(_), Some(format)) => Statement::SetIfSome { key, field, format },
        (FieldKind::Pointer(_), None) => Statement::SetIfSomeTrue { key, field },
        (FieldKind::Sequence(_), Some(format)) => Statement::AddEach { key, field, format },
        (FieldKind::Sequence(scalar), None) => {
            let err = Error::unsupported_field_type(scalar.name(), TypeLocation::Sequence);
            return Err(syn::Error::new_spanned(&decl.ty, err));
        }
    };
    Ok(statement)
}
