//! Record derive macro implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse2};
use taqc_codegen::StructDecl;

/// Expand `#[derive(Record)]`.
///
/// Tagged fields whose type does not implement `Reflect` are exposed as
/// opaque values, and rejected by the converter.
pub fn expand_record_derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let decl = StructDecl::from_derive_input(&input)?;

    let name = &decl.ident;
    let (impl_generics, ty_generics, where_clause) = decl.generics.split_for_impl();

    let fields = decl.fields.iter().filter_map(|field| {
        let tag = field.tag.as_ref()?;
        let ident = &field.ident;
        let field_name = ident.to_string();
        Some(quote! {
            (&::taqc::__private::TaggedField {
                name: #field_name,
                tag: #tag,
                value: &self.#ident,
            })
                .field_ref()
        })
    });

    Ok(quote! {
        impl #impl_generics ::taqc::Record for #name #ty_generics #where_clause {
            #[allow(clippy::needless_borrow)]
            fn fields(&self) -> ::std::vec::Vec<::taqc::FieldRef<'_>> {
                #[allow(unused_imports)]
                use ::taqc::__private::{OpaqueField as _, ReflectField as _};
                ::std::vec![#(#fields),*]
            }
        }
    })
}
