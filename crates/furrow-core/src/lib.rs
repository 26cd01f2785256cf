//! Shared configuration, errors and constants for the Furrow workspace.

pub mod config;
pub mod constants;
pub mod error;
