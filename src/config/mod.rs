//! Configuration management for Tally.
//!
//! Configuration comes from the process environment (optionally seeded from a
//! `.env` file), captured once into an immutable [`EnvSnapshot`] and read
//! through a [`ConfigResolver`].
//!
//! # Overview
//!
//! - [`EnvSnapshot`] - the captured environment
//! - [`ConfigResolver`] - typed lookups (`resolve`, `resolve_bool`, `resolve_parsed`)
//! - [`ConfigSchema`] - the fixed required/optional key sets
//! - [`ConfigValidator`] - produces a [`ValidationReport`]
//! - [`Environment`] - the execution-mode signal
//! - [`LoggingConfig`] - logging settings
//!
//! # Quick Start
//!
//! ```rust
//! use tally::config::{ConfigResolver, ConfigSchema, ConfigValidator, EnvSnapshot, Environment};
//!
//! let resolver = ConfigResolver::new(EnvSnapshot::capture());
//! let schema = ConfigSchema::standard();
//! let report = ConfigValidator::new(&resolver, &schema, Environment::Development).validate();
//!
//! for entry in &report.missing {
//!     eprintln!("missing: {entry}");
//! }
//! ```
//!
//! # Environment Variables
//!
//! Required: `SUPABASE_URL`, `SUPABASE_ANON_KEY`, `CLERK_PUBLISHABLE_KEY`.
//! Optional: `RESEND_API_KEY`, `GEMINI_API_KEY`, `APP_URL`, `DEBUG_MODE`,
//! `ERROR_REPORTING_URL`.

pub mod keys;
pub mod resolver;
pub mod schema;
pub mod secret;
pub mod snapshot;
pub mod validator;

// Re-export commonly used types
pub use keys::ConfigKey;
pub use resolver::ConfigResolver;
pub use schema::{Advisory, ConfigSchema, Environment, LoggingConfig};
pub use secret::{mask, secret_string, SecretString, SecretValue};
pub use snapshot::EnvSnapshot;
pub use validator::{ConfigValidator, MissingKey, ValidationReport};
