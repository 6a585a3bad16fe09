//! Generator configuration types.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Default path of the runtime crate in generated code.
pub const DEFAULT_CRATE_PATH: &str = "::taqc";

/// Configuration for a generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Name of the struct to generate code for.
    pub type_name: String,
    /// Files and directories to scan.
    pub inputs: Vec<PathBuf>,
    /// Explicit output file.
    pub output: Option<PathBuf>,
    /// Path of the runtime crate in generated code.
    pub crate_path: String,
    /// Arguments echoed in the generated file header.
    pub command_line: Vec<String>,
}

impl GeneratorConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder(type_name: impl Into<String>) -> GeneratorConfigBuilder {
        GeneratorConfigBuilder {
            type_name: type_name.into(),
            inputs: Vec::new(),
            output: None,
            crate_path: None,
            command_line: None,
        }
    }

    /// The file the generated code is written to.
    ///
    /// Unless an output is set, this is `<dir>/<type_name>_gen.rs` in
    /// snake case, where `<dir>` is the only input when it is a directory,
    /// and the parent of the first input otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the only input cannot be inspected.
    pub fn output_path(&self) -> Result<PathBuf> {
        if let Some(output) = &self.output {
            return Ok(output.clone());
        }

        let dir = match self.inputs.as_slice() {
            [only] if is_dir(only)? => only.as_path(),
            inputs => inputs
                .first()
                .and_then(|input| input.parent())
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new(".")),
        };
        Ok(dir.join(format!("{}_gen.rs", snake_case(&self.type_name))))
    }

    /// The header comment of generated files.
    #[must_use]
    pub fn header(&self) -> String {
        let mut header = String::from("// Code generated by taqc-gen");
        for arg in &self.command_line {
            header.push(' ');
            header.push_str(arg);
        }
        header.push_str("; DO NOT EDIT.");
        header
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub struct GeneratorConfigBuilder {
    type_name: String,
    inputs: Vec<PathBuf>,
    output: Option<PathBuf>,
    crate_path: Option<String>,
    command_line: Option<Vec<String>>,
}

impl GeneratorConfigBuilder {
    /// Add a file or directory to scan.
    #[must_use]
    pub fn input(mut self, input: impl Into<PathBuf>) -> Self {
        self.inputs.push(input.into());
        self
    }

    /// Add files or directories to scan.
    #[must_use]
    pub fn inputs<I>(mut self, inputs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        self.inputs.extend(inputs.into_iter().map(Into::into));
        self
    }

    /// Set the output file.
    #[must_use]
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Set the path of the runtime crate in generated code.
    #[must_use]
    pub fn crate_path(mut self, crate_path: impl Into<String>) -> Self {
        self.crate_path = Some(crate_path.into());
        self
    }

    /// Set the arguments echoed in the generated file header.
    #[must_use]
    pub fn command_line<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.command_line = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Build the configuration.
    ///
    /// Defaults: scan `.`, use `::taqc`, and echo `--type <type_name>`.
    #[must_use]
    pub fn build(self) -> GeneratorConfig {
        let inputs = if self.inputs.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.inputs
        };
        let command_line = self
            .command_line
            .unwrap_or_else(|| vec!["--type".to_string(), self.type_name.clone()]);

        GeneratorConfig {
            type_name: self.type_name,
            inputs,
            output: self.output,
            crate_path: self
                .crate_path
                .unwrap_or_else(|| DEFAULT_CRATE_PATH.to_string()),
            command_line,
        }
    }
}

fn is_dir(path: &Path) -> Result<bool> {
    fs::metadata(path)
        .map(|metadata| metadata.is_dir())
        .map_err(|err| Error::io(path, err))
}

/// Convert a type name to `snake_case`, keeping acronyms together
/// (`HTTPQuery` becomes `http_query`).
#[must_use]
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);

    for (index, &current) in chars.iter().enumerate() {
        if current.is_uppercase() {
            let previous = index.checked_sub(1).and_then(|i| chars.get(i));
            let next = chars.get(index + 1);
            let boundary = previous.is_some_and(|prev| {
                prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next.is_some_and(|next| next.is_lowercase()))
            });
            if boundary && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(current.to_lowercase());
        } else {
            result.push(current);
        }
    }
    result
}
