//! Static classification of field types.

use quote::ToTokens;
use syn::{GenericArgument, PathArguments, Type, TypePath};
use taqc_core::{Error, FieldKind, ScalarKind, TypeLocation};

/// Classify a declared field type.
///
/// Supported: `String`, `&str`, `i64`, `f64`, `bool`, `DateTime<..>`, each
/// optionally wrapped in `Option<..>` or (except `bool`) in `Vec<..>`, a
/// slice reference or an array. Type aliases are not resolved.
pub fn classify(ty: &Type) -> syn::Result<FieldKind> {
    let ty = peel(ty);
    if let Some(kind) = scalar(ty) {
        return Ok(FieldKind::Scalar(kind));
    }

    if let Some(inner) = wrapped(ty, "Option") {
        return scalar(inner)
            .map(FieldKind::Pointer)
            .ok_or_else(|| unsupported(ty, inner, TypeLocation::Pointer));
    }

    if let Some(inner) = wrapped(ty, "Vec").or_else(|| slice_element(ty)) {
        return scalar(inner)
            .ok_or_else(|| unsupported(ty, inner, TypeLocation::Sequence))
            .and_then(|kind| {
                FieldKind::sequence(kind).map_err(|err| syn::Error::new_spanned(ty, err))
            });
    }

    Err(unsupported(ty, ty, TypeLocation::TopLevel))
}

/// Classify a type that is not a container.
fn scalar(ty: &Type) -> Option<ScalarKind> {
    match peel(ty) {
        Type::Reference(reference) => match peel(&reference.elem) {
            Type::Path(path) if is_plain(path, "str") => Some(ScalarKind::String),
            _ => None,
        },
        Type::Path(path) => {
            let segment = path.path.segments.last()?;
            let plain = segment.arguments.is_none() && path.qself.is_none();
            match segment.ident.to_string().as_str() {
                "String" if plain => Some(ScalarKind::String),
                "i64" if plain => Some(ScalarKind::Int64),
                "f64" if plain => Some(ScalarKind::Float64),
                "bool" if plain => Some(ScalarKind::Bool),
                "DateTime" if matches!(segment.arguments, PathArguments::AngleBracketed(_)) => {
                    Some(ScalarKind::Time)
                }
                _ => None,
            }
        }
        _ => None,
    }
}

/// The single type argument of `wrapper<T>`, if `ty` is one.
fn wrapped<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    });
    match (types.next(), types.next()) {
        (Some(inner), None) => Some(peel(inner)),
        _ => None,
    }
}

/// The element type of `&[T]` or `[T; N]`.
fn slice_element(ty: &Type) -> Option<&Type> {
    let ty = match ty {
        Type::Reference(reference) => peel(&reference.elem),
        other => other,
    };
    match ty {
        Type::Slice(slice) => Some(peel(&slice.elem)),
        Type::Array(array) => Some(peel(&array.elem)),
        _ => None,
    }
}

fn is_plain(path: &TypePath, name: &str) -> bool {
    path.qself.is_none() && path.path.is_ident(name)
}

/// Strip invisible groups and parentheses.
fn peel(mut ty: &Type) -> &Type {
    loop {
        match ty {
            Type::Group(group) => ty = &group.elem,
            Type::Paren(paren) => ty = &paren.elem,
            _ => return ty,
        }
    }
}

fn unsupported(ty: &Type, offending: &Type, location: TypeLocation) -> syn::Error {
    let err = Error::unsupported_field_type(type_name(offending), location);
    syn::Error::new_spanned(ty, err)
}

/// Compact rendering of a type, e.g. `Vec<u8>`.
fn type_name(ty: &Type) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}
