//! Source scanner for discovering struct declarations.

use std::fs;
use std::path::{Path, PathBuf};

use syn::{Fields, Item, ItemStruct};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::{Error, Result};

/// A struct declaration found in the inputs.
#[derive(Debug, Clone)]
pub struct FoundStruct {
    /// The file declaring the struct.
    pub path: PathBuf,
    /// The declaration.
    pub item: ItemStruct,
}

/// Find the first struct with named fields called `name`.
///
/// Inputs are scanned in order; directories are walked recursively in file
/// name order, skipping `target` directories. Structs declared in inline
/// `mod` blocks are found too.
///
/// # Errors
///
/// Returns [`Error::TypeNotFound`] when no input declares the struct, and
/// [`Error::Walk`], [`Error::Io`] or [`Error::Parse`] when an input cannot
/// be read.
pub fn find_struct(inputs: &[PathBuf], name: &str) -> Result<FoundStruct> {
    for input in inputs {
        let walker = WalkDir::new(input)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_target_dir(entry));

        for entry in walker {
            let entry = entry?;
            if !is_rust_file(&entry) {
                continue;
            }
            if let Some(item) = scan_file(entry.path(), name)? {
                debug!(path = %entry.path().display(), name, "found struct");
                return Ok(FoundStruct {
                    path: entry.into_path(),
                    item,
                });
            }
        }
    }

    Err(Error::TypeNotFound {
        name: name.to_string(),
    })
}

/// Scan a single Rust file for the struct.
fn scan_file(path: &Path, name: &str) -> Result<Option<ItemStruct>> {
    trace!(path = %path.display(), "scanning file");
    let content = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
    let file = syn::parse_file(&content).map_err(|err| Error::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    Ok(find_in_items(&file.items, name).cloned())
}

fn find_in_items<'a>(items: &'a [Item], name: &str) -> Option<&'a ItemStruct> {
    items.iter().find_map(|item| match item {
        Item::Struct(item) if item.ident == name && matches!(item.fields, Fields::Named(_)) => {
            Some(item)
        }
        Item::Mod(module) => module
            .content
            .as_ref()
            .and_then(|(_, items)| find_in_items(items, name)),
        _ => None,
    })
}

fn is_target_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == "target"
}

fn is_rust_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() && entry.path().extension().is_some_and(|ext| ext == "rs")
}
