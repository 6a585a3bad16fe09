//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types, functions, and macros
//! for easy glob importing:
//!
//! ```ignore
//! use taqc::prelude::*;
//! ```

pub use crate::{
    Error, QueryValues, Query, Record, Reflect, Result, ToQueryParams, UnixTimeUnit,
    convert_to_query_params,
};
pub use chrono::{DateTime, FixedOffset, Utc};
