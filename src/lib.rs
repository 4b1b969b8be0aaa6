//! golex: score grading helpers and a lexical analyzer for Go (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod analysis;
pub mod config;
pub mod constants;
pub mod env;
pub mod grading;
pub mod lexer;
pub mod logging;
pub mod models;
pub mod output;
pub mod report;

pub use grading::{Grade, average, evaluate, grade_label};
pub use lexer::tokenize;
