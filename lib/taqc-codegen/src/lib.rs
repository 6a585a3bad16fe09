//! Code generation for taqc query parameter conversions.
//!
//! Generation is split in three steps:
//! - [`StructDecl`] - the declaration of the struct, with its tagged fields
//! - [`plan`] - one [`Statement`] per tagged field, specialized to the
//!   field's static type
//! - [`Printer`] - rendering of the statements, e.g. [`RustPrinter`]
//!
//! Both the `#[derive(Query)]` macro and the `taqc-gen` tool are built on
//! [`expand`].

mod classify;
mod decl;
mod printer;
mod statement;

pub use classify::classify;
pub use decl::{FieldDecl, StructDecl};
pub use printer::{Printer, RustPrinter};
pub use statement::{Formatter, Statement, plan};

/// Plan and print the conversion of `decl`.
pub fn expand<P: Printer>(decl: &StructDecl, printer: &P) -> syn::Result<P::Output> {
    let statements = plan(decl)?;
    Ok(printer.print(decl, &statements))
}
