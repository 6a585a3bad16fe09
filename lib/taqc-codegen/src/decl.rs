//! Declaration model: the struct a conversion is generated for.

use syn::{Attribute, DeriveInput, Fields, Generics, Ident, ItemStruct, LitStr, Type};
use taqc_core::TAG_NAME;

/// A struct declaration with named fields.
#[derive(Debug, Clone)]
pub struct StructDecl {
    /// The struct name.
    pub ident: Ident,
    /// The struct generics.
    pub generics: Generics,
    /// The fields, in declaration order.
    pub fields: Vec<FieldDecl>,
}

/// A named field of a [`StructDecl`].
#[derive(Debug, Clone)]
pub struct FieldDecl {
    /// The field name.
    pub ident: Ident,
    /// The declared type.
    pub ty: Type,
    /// The raw `#[taqc("...")]` tag, if any.
    pub tag: Option<LitStr>,
}

impl FieldDecl {
    /// Whether the field takes part in the conversion.
    #[must_use]
    pub fn is_tagged(&self) -> bool {
        self.tag.is_some()
    }
}

impl StructDecl {
    /// Build the declaration from a derive input.
    pub fn from_derive_input(input: &DeriveInput) -> syn::Result<Self> {
        match &input.data {
            syn::Data::Struct(data) => {
                Self::from_parts(&input.ident, &input.generics, &data.fields, input)
            }
            _ => Err(syn::Error::new_spanned(
                input,
                "taqc derives only support structs",
            )),
        }
    }

    /// Build the declaration from a struct item found in a source file.
    pub fn from_item_struct(item: &ItemStruct) -> syn::Result<Self> {
        Self::from_parts(&item.ident, &item.generics, &item.fields, item)
    }

    fn from_parts(
        ident: &Ident,
        generics: &Generics,
        fields: &Fields,
        span: impl quote::ToTokens,
    ) -> syn::Result<Self> {
        let Fields::Named(named) = fields else {
            return Err(syn::Error::new_spanned(
                span,
                "taqc only supports structs with named fields",
            ));
        };

        let fields = named
            .named
            .iter()
            .filter_map(|field| field.ident.clone().map(|ident| (ident, field)))
            .map(|(ident, field)| {
                Ok(FieldDecl {
                    ident,
                    ty: field.ty.clone(),
                    tag: parse_tag(&field.attrs)?,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self {
            ident: ident.clone(),
            generics: generics.clone(),
            fields,
        })
    }

    /// The fields carrying a tag, in declaration order.
    pub fn tagged_fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.fields.iter().filter(|field| field.is_tagged())
    }
}

/// Extract the tag literal from `#[taqc("...")]`.
fn parse_tag(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut tag = None;
    for attr in attrs {
        if !attr.path().is_ident(TAG_NAME) {
            continue;
        }
        if tag.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "duplicate `taqc` attribute on field",
            ));
        }
        tag = Some(attr.parse_args::<LitStr>()?);
    }
    Ok(tag)
}
