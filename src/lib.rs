// Tally - shared expense tracking client
// Copyright (c) 2025 Tally Contributors
// Licensed under the MIT License

//! # Tally - bootstrap resilience layer
//!
//! Tally is the terminal client of a shared-expense tracker. This library
//! holds the layer that decides whether the client can start at all and keeps
//! it alive when part of it fails.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Resolving** configuration keys from an environment snapshot
//! - **Validating** the snapshot against a schema of required and optional keys
//! - **Gating** the application behind the identity provider's publishable key
//! - **Containing** render failures behind an error boundary with Retry and Reload
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Keys, snapshot, resolver, schema and validator
//! - [`bootstrap`] - The bootstrap gate and the identity provider
//! - [`containment`] - Error boundary, captured failures and reporters
//! - [`runtime`] - Application shell, terminal session and process restart
//! - [`ui`] - Component trait, screens and user actions
//! - [`domain`] - Error type and result alias
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use tally::bootstrap::{BootstrapGate, Mount};
//! use tally::config::{ConfigResolver, ConfigSchema, ConfigValidator, EnvSnapshot, Environment};
//! use tally::containment::{ErrorBoundary, TracingReporter};
//! use tally::runtime::AppShell;
//!
//! let resolver = ConfigResolver::new(EnvSnapshot::from_pairs([
//!     ("SUPABASE_URL", "https://abc.supabase.co"),
//!     ("SUPABASE_ANON_KEY", "anon"),
//!     ("CLERK_PUBLISHABLE_KEY", "pk_test_abc"),
//! ]));
//!
//! let schema = ConfigSchema::standard();
//! let report = ConfigValidator::new(&resolver, &schema, Environment::Development).validate();
//! assert!(report.is_valid);
//!
//! let gate = BootstrapGate::mount(&resolver, schema.critical_secret());
//! let Mount::Passed(provider) = gate.into_mount(AppShell::from_resolver(&resolver)) else {
//!     panic!("gate should pass");
//! };
//!
//! let mut boundary = ErrorBoundary::new(provider, Environment::Development, Arc::new(TracingReporter));
//! let screen = boundary.render_screen();
//! assert!(boundary.is_healthy());
//! println!("{screen}");
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::AppError`]. Resolution, validation and
//! the gate never fail; they describe problems in their results instead.
//!
//! ## Logging
//!
//! Tally uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(key = "CLERK_PUBLISHABLE_KEY", "Bootstrap gate passed");
//! warn!(warning = "RESEND_API_KEY not set", "Configuration warning");
//! ```

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod containment;
pub mod domain;
pub mod logging;
pub mod runtime;
pub mod ui;
