//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod init;
pub mod start;
pub mod validate;
