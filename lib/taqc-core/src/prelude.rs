//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use taqc_core::prelude::*;
//! ```

pub use crate::{
    Error, FieldRef, QueryValues, Record, Reflect, Result, TimeFormat, ToQueryParams,
    UnixTimeUnit, Value, convert_to_query_params,
};
