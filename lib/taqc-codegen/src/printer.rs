//! Rendering of a conversion plan.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Ident, Path, parse_quote};
use taqc_core::{TimeFormat, UnixTimeUnit};

use crate::decl::StructDecl;
use crate::statement::{Formatter, Statement};

/// Renders a conversion plan into some output syntax.
pub trait Printer {
    /// The rendered output.
    type Output;

    /// Render the conversion of `decl` made of `statements`.
    fn print(&self, decl: &StructDecl, statements: &[Statement]) -> Self::Output;
}

/// Prints Rust code implementing `ToQueryParams`.
#[derive(Debug, Clone)]
pub struct RustPrinter {
    crate_path: Path,
}

impl Default for RustPrinter {
    fn default() -> Self {
        Self {
            crate_path: parse_quote!(::taqc),
        }
    }
}

impl RustPrinter {
    /// Create a printer whose generated code refers to `crate_path`
    /// (default: `::taqc`).
    #[must_use]
    pub fn new(crate_path: Path) -> Self {
        Self { crate_path }
    }

    /// The path generated code uses to reach the runtime crate.
    #[must_use]
    pub fn crate_path(&self) -> &Path {
        &self.crate_path
    }

    fn statement(&self, statement: &Statement) -> TokenStream {
        let krate = &self.crate_path;
        let key = statement.key();
        let field = statement.field();

        match statement {
            Statement::Set { format, .. } => {
                let value = self.format(format, &Access::Field(field));
                quote! {
                    query.set(#key, #value);
                }
            }
            Statement::SetIfTrue { .. } => quote! {
                if self.#field {
                    query.set(#key, #krate::format::TRUE);
                }
            },
            Statement::SetIfSome { format, .. } => {
                let binding = format_ident!("value");
                let value = self.format(format, &Access::Binding(&binding));
                quote! {
                    if let ::core::option::Option::Some(#binding) = &self.#field {
                        query.set(#key, #value);
                    }
                }
            }
            Statement::SetIfSomeTrue { .. } => quote! {
                if self.#field == ::core::option::Option::Some(true) {
                    query.set(#key, #krate::format::TRUE);
                }
            },
            Statement::AddEach { format, .. } => {
                let binding = format_ident!("item");
                let value = self.format(format, &Access::Binding(&binding));
                quote! {
                    for #binding in self.#field.iter() {
                        query.add(#key, #value);
                    }
                }
            }
        }
    }

    fn format(&self, format: &Formatter, access: &Access<'_>) -> TokenStream {
        let krate = &self.crate_path;
        let by_ref = access.by_ref();
        let by_value = access.by_value();

        match format {
            Formatter::Str => quote!(#krate::format::string(#by_ref)),
            Formatter::Int64 => quote!(#krate::format::int64(#by_value)),
            Formatter::Float64 => quote!(#krate::format::float64(#by_value)),
            Formatter::Time(TimeFormat::Layout(layout)) => {
                quote!(#krate::format::time_layout(#by_ref, #layout))
            }
            Formatter::Time(TimeFormat::Unix(unit)) => {
                let unit = unit_variant(*unit);
                quote!(#krate::format::unix_time(#by_ref, #krate::UnixTimeUnit::#unit))
            }
        }
    }
}

impl Printer for RustPrinter {
    type Output = TokenStream;

    fn print(&self, decl: &StructDecl, statements: &[Statement]) -> TokenStream {
        let krate = &self.crate_path;
        let name = &decl.ident;
        let (impl_generics, ty_generics, where_clause) = decl.generics.split_for_impl();
        let body = statements.iter().map(|statement| self.statement(statement));

        quote! {
            impl #impl_generics #krate::ToQueryParams for #name #ty_generics #where_clause {
                fn to_query_params(&self) -> #krate::QueryValues {
                    #[allow(unused_mut)]
                    let mut query = #krate::QueryValues::new();
                    #(#body)*
                    query
                }
            }
        }
    }
}

/// How the printed code reaches a value.
enum Access<'a> {
    /// `self.field`
    Field(&'a Ident),
    /// A local binding holding a reference.
    Binding(&'a Ident),
}

impl Access<'_> {
    fn by_ref(&self) -> TokenStream {
        match self {
            Self::Field(field) => quote!(&self.#field),
            Self::Binding(binding) => quote!(#binding),
        }
    }

    fn by_value(&self) -> TokenStream {
        match self {
            Self::Field(field) => quote!(self.#field),
            Self::Binding(binding) => quote!(*#binding),
        }
    }
}

fn unit_variant(unit: UnixTimeUnit) -> Ident {
    match unit {
        UnixTimeUnit::Sec => format_ident!("Sec"),
        UnixTimeUnit::Millisec => format_ident!("Millisec"),
        UnixTimeUnit::Microsec => format_ident!("Microsec"),
        UnixTimeUnit::Nanosec => format_ident!("Nanosec"),
    }
}
