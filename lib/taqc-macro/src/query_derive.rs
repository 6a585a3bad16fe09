//! Query derive macro implementation.

use proc_macro2::TokenStream;
use syn::{DeriveInput, parse2};
use taqc_codegen::{RustPrinter, StructDecl, expand};

/// Expand `#[derive(Query)]`.
pub fn expand_query_derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let decl = StructDecl::from_derive_input(&input)?;
    expand(&decl, &RustPrinter::default())
}
