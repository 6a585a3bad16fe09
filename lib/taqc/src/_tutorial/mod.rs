//! # Tutorial: Query Parameters with taqc
//!
//! Learn to turn tagged structs into query strings step by step.
//!
//! ## Chapters
//!
//! 1. [Getting Started][chapter_0] - Tag a struct and convert it
//! 2. [Tags & Field Types][chapter_1] - Options, time formats, errors
//! 3. [Generated Code][chapter_2] - `#[derive(Query)]` and `taqc-gen`
//!
//! Ready? Start with [Chapter 0: Getting Started][chapter_0].

pub mod chapter_0;
pub mod chapter_1;
pub mod chapter_2;
