//! Shared domain types for Tally.
//!
//! The domain layer is intentionally small: the error hierarchy and the
//! [`Result`] alias used by every fallible operation in the crate.
//!
//! ```rust
//! use tally::domain::{AppError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(AppError::Configuration("SUPABASE_URL is not set".to_string()))
//! }
//! ```

pub mod errors;
pub mod result;

pub use errors::AppError;
pub use result::Result;
