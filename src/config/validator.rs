//! Configuration validation
//!
//! [`ConfigValidator::validate`] classifies every recognized key as present,
//! missing or placeholder and returns a [`ValidationReport`]. Nothing here
//! returns an error: an incomplete environment is an expected outcome that
//! the report describes.
//!
//! # Example
//!
//! ```rust
//! use tally::config::{ConfigResolver, ConfigSchema, ConfigValidator, EnvSnapshot, Environment};
//!
//! let resolver = ConfigResolver::new(EnvSnapshot::from_pairs([
//!     ("SUPABASE_URL", "https://abcd.supabase.co"),
//!     ("SUPABASE_ANON_KEY", "eyJhbGciOiJIUzI1NiJ9"),
//!     ("CLERK_PUBLISHABLE_KEY", "pk_test_123"),
//! ]));
//! let schema = ConfigSchema::standard();
//! let report = ConfigValidator::new(&resolver, &schema, Environment::Development).validate();
//!
//! assert!(report.is_valid);
//! assert_eq!(report.warnings.len(), 2); // email and AI advisories
//! ```

use super::keys::ConfigKey;
use super::resolver::ConfigResolver;
use super::schema::{ConfigSchema, Environment};
use super::secret::mask;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Reason attached to a required key that holds template text
pub const PLACEHOLDER_REASON: &str = "contains placeholder value";

/// Template text left over from an unedited `.env` file, e.g. `your_supabase_url`
fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"your_[A-Za-z0-9]").expect("placeholder pattern is valid"))
}

/// True if `value` still holds unedited template text
pub fn is_placeholder(value: &str) -> bool {
    placeholder_pattern().is_match(value)
}

/// A required key that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingKey {
    /// The offending key
    pub key: ConfigKey,
    /// Why the key is considered missing, when it is not plain absence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl MissingKey {
    /// A key that is absent or blank
    pub fn absent(key: ConfigKey) -> Self {
        Self { key, reason: None }
    }

    /// A key that is present but still holds template text
    pub fn placeholder(key: ConfigKey) -> Self {
        Self {
            key,
            reason: Some(PLACEHOLDER_REASON.to_string()),
        }
    }
}

impl fmt::Display for MissingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "{} ({})", self.key, reason),
            None => write!(f, "{}", self.key),
        }
    }
}

/// Result of a validation pass
///
/// `is_valid` is true exactly when `missing` is empty; warnings never affect
/// validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Whether every required key is usable
    pub is_valid: bool,
    /// Required keys that are absent, blank or placeholders, in declaration order
    pub missing: Vec<MissingKey>,
    /// Advisory messages, in declaration order
    pub warnings: Vec<String>,
    /// Every recognized key and its value at validation time
    pub snapshot: BTreeMap<ConfigKey, Option<String>>,
}

impl ValidationReport {
    /// A copy with every snapshot value masked, safe to print or serialize
    pub fn redacted(&self) -> Self {
        Self {
            snapshot: self
                .snapshot
                .iter()
                .map(|(k, v)| (k.clone(), v.as_deref().map(mask)))
                .collect(),
            ..self.clone()
        }
    }

    /// True if `key` appears among the missing entries
    pub fn is_missing(&self, key: &ConfigKey) -> bool {
        self.missing.iter().any(|m| &m.key == key)
    }
}

/// Validates the resolved configuration against a [`ConfigSchema`]
#[derive(Debug, Clone, Copy)]
pub struct ConfigValidator<'a> {
    resolver: &'a ConfigResolver,
    schema: &'a ConfigSchema,
    environment: Environment,
}

impl<'a> ConfigValidator<'a> {
    /// Creates a validator
    ///
    /// `environment` is the execution-mode signal; production enables the
    /// debug-flag and placeholder checks.
    pub fn new(
        resolver: &'a ConfigResolver,
        schema: &'a ConfigSchema,
        environment: Environment,
    ) -> Self {
        Self {
            resolver,
            schema,
            environment,
        }
    }

    /// Runs every check and builds a fresh report
    pub fn validate(&self) -> ValidationReport {
        let mut missing = Vec::new();
        let mut warnings = Vec::new();

        for key in self.schema.required() {
            if self.blank(key) {
                missing.push(MissingKey::absent(key.clone()));
            }
        }

        for key in self.schema.optional() {
            if self.blank(key) {
                if let Some(message) = self.schema.advisory_for(key) {
                    warnings.push(message.to_string());
                }
            }
        }

        if self.environment.is_production() {
            if self.resolver.resolve_bool(self.schema.debug_flag(), false) {
                warnings.push(format!(
                    "{} is enabled in production",
                    self.schema.debug_flag()
                ));
            }

            for key in self.schema.placeholder_prone() {
                if let Some(value) = self.resolver.resolve(key) {
                    if is_placeholder(&value) {
                        missing.push(MissingKey::placeholder(key.clone()));
                    }
                }
            }
        }

        let snapshot = self
            .schema
            .all_keys()
            .map(|key| (key.clone(), self.resolver.resolve(key)))
            .collect();

        let report = ValidationReport {
            is_valid: missing.is_empty(),
            missing,
            warnings,
            snapshot,
        };

        tracing::debug!(
            environment = %self.environment,
            is_valid = report.is_valid,
            missing = report.missing.len(),
            warnings = report.warnings.len(),
            "Configuration validated"
        );

        report
    }

    fn blank(&self, key: &ConfigKey) -> bool {
        self.resolver
            .resolve(key)
            .map_or(true, |value| value.trim().is_empty())
    }
}
