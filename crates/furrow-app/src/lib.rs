//! The `furrow` command-line tool.

pub mod command;
pub mod error;
pub mod request;
