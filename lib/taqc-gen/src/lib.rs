//! Generate taqc `ToQueryParams` implementations from Rust sources.
//!
//! This crate backs the `taqc-gen` tool: it scans source files for a struct
//! declaration, and writes the same implementation `#[derive(Query)]` would
//! expand to, preceded by a `DO NOT EDIT` header.
//!
//! # Example
//!
//! ```ignore
//! let config = taqc_gen::GeneratorConfig::builder("Search")
//!     .input("src/")
//!     .build();
//!
//! let generated = taqc_gen::generate(&config)?;
//! println!("wrote {}", generated.output.display());
//! ```
//!
//! The generated file is meant to be included next to the struct:
//!
//! ```ignore
//! include!("search_gen.rs");
//! ```

mod config;
mod error;
mod generate;
mod scan;

pub use config::{DEFAULT_CRATE_PATH, GeneratorConfig, GeneratorConfigBuilder, snake_case};
pub use error::{Error, Result};
pub use generate::{Generated, generate, render};
pub use scan::{FoundStruct, find_struct};
