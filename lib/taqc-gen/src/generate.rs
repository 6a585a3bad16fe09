//! Generation of `ToQueryParams` source files.

use std::fs;
use std::path::{Path, PathBuf};

use syn::ItemStruct;
use taqc_codegen::{RustPrinter, StructDecl, expand};
use tracing::{debug, info};

use crate::scan::find_struct;
use crate::{Error, GeneratorConfig, Result};

/// Outcome of a generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// The generated file.
    pub output: PathBuf,
    /// Whether the file was (re)written; `false` when it was up to date.
    pub written: bool,
}

/// Find the configured struct, generate its implementation and write it.
///
/// The output file is only written when its content changes.
///
/// # Errors
///
/// Returns an [`Error`] when the struct cannot be found or converted, or
/// when a file cannot be read or written.
pub fn generate(config: &GeneratorConfig) -> Result<Generated> {
    let found = find_struct(&config.inputs, &config.type_name)?;
    info!(
        type_name = %config.type_name,
        path = %found.path.display(),
        "generating ToQueryParams"
    );

    let code = render(config, &found.item)?;
    let output = config.output_path()?;
    let written = write_if_changed(&output, &code)?;
    if written {
        info!(output = %output.display(), "wrote generated code");
    } else {
        debug!(output = %output.display(), "generated code is up to date");
    }

    Ok(Generated { output, written })
}

/// Render the generated source file for `item`: the header comment followed
/// by the formatted implementation.
///
/// # Errors
///
/// Returns [`Error::Generate`] for invalid tags, unsupported field types or
/// an invalid crate path.
pub fn render(config: &GeneratorConfig, item: &ItemStruct) -> Result<String> {
    let crate_path: syn::Path = syn::parse_str(&config.crate_path)?;
    let decl = StructDecl::from_item_struct(item)?;
    let tokens = expand(&decl, &RustPrinter::new(crate_path))?;
    let file: syn::File = syn::parse2(tokens)?;

    Ok(format!(
        "{}\n\n{}",
        config.header(),
        prettyplease::unparse(&file)
    ))
}

fn write_if_changed(path: &Path, code: &str) -> Result<bool> {
    if fs::read_to_string(path).is_ok_and(|existing| existing == code) {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| Error::io(parent, err))?;
    }
    fs::write(path, code).map_err(|err| Error::io(path, err))?;
    Ok(true)
}
