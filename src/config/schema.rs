//! Configuration schema types
//!
//! [`ConfigSchema`] fixes which keys Tally recognizes and how each one is
//! judged during validation. [`Environment`] is the execution-mode signal,
//! supplied from outside the validated key set. [`LoggingConfig`] drives the
//! tracing subscriber.

use super::keys::{self, ConfigKey};
use crate::domain::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Runtime environment
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

impl Environment {
    /// True only for [`Environment::Production`]
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Lowercase name, as accepted on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory printed when an optional key is not set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    /// Optional key the advisory belongs to
    pub key: ConfigKey,
    /// Human-readable warning text
    pub message: &'static str,
}

/// The fixed set of recognized configuration keys
///
/// Required and optional keys are disjoint. Declaration order is preserved
/// and determines the order of entries in a validation report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSchema {
    required: Vec<ConfigKey>,
    optional: Vec<ConfigKey>,
    advisories: Vec<Advisory>,
    placeholder_prone: Vec<ConfigKey>,
    debug_flag: ConfigKey,
    critical_secret: ConfigKey,
}

impl ConfigSchema {
    /// Builds a schema, rejecting overlapping or inconsistent key sets
    ///
    /// # Errors
    ///
    /// Returns a configuration error if:
    /// - a key is listed as both required and optional
    /// - an advisory targets a key that is not optional
    /// - a placeholder-prone key or the critical secret is not required
    /// - the debug flag is not optional
    pub fn new(
        required: Vec<ConfigKey>,
        optional: Vec<ConfigKey>,
        advisories: Vec<Advisory>,
        placeholder_prone: Vec<ConfigKey>,
        debug_flag: ConfigKey,
        critical_secret: ConfigKey,
    ) -> Result<Self> {
        let schema = Self {
            required,
            optional,
            advisories,
            placeholder_prone,
            debug_flag,
            critical_secret,
        };
        schema.check()?;
        Ok(schema)
    }

    /// The schema of the Tally client
    pub fn standard() -> Self {
        let schema = Self {
            required: vec![
                keys::SUPABASE_URL,
                keys::SUPABASE_ANON_KEY,
                keys::CLERK_PUBLISHABLE_KEY,
            ],
            optional: vec![
                keys::RESEND_API_KEY,
                keys::GEMINI_API_KEY,
                keys::APP_URL,
                keys::DEBUG_MODE,
                keys::ERROR_REPORTING_URL,
            ],
            advisories: vec![
                Advisory {
                    key: keys::RESEND_API_KEY,
                    message: "RESEND_API_KEY is not set: email notifications are disabled",
                },
                Advisory {
                    key: keys::GEMINI_API_KEY,
                    message: "GEMINI_API_KEY is not set: AI receipt scanning is disabled",
                },
            ],
            placeholder_prone: vec![keys::SUPABASE_URL, keys::SUPABASE_ANON_KEY],
            debug_flag: keys::DEBUG_MODE,
            critical_secret: keys::CLERK_PUBLISHABLE_KEY,
        };
        debug_assert!(schema.check().is_ok(), "standard schema is inconsistent");
        schema
    }

    fn check(&self) -> Result<()> {
        let required: BTreeSet<&ConfigKey> = self.required.iter().collect();
        let optional: BTreeSet<&ConfigKey> = self.optional.iter().collect();

        if let Some(key) = required.intersection(&optional).next() {
            return Err(AppError::Configuration(format!(
                "Key {key} is declared both required and optional"
            )));
        }
        if let Some(advisory) = self.advisories.iter().find(|a| !optional.contains(&a.key)) {
            return Err(AppError::Configuration(format!(
                "Advisory for {} targets a key that is not optional",
                advisory.key
            )));
        }
        if let Some(key) = self.placeholder_prone.iter().find(|k| !required.contains(k)) {
            return Err(AppError::Configuration(format!(
                "Placeholder check for {key} targets a key that is not required"
            )));
        }
        if !optional.contains(&self.debug_flag) {
            return Err(AppError::Configuration(format!(
                "Debug flag {} must be an optional key",
                self.debug_flag
            )));
        }
        if !required.contains(&self.critical_secret) {
            return Err(AppError::Configuration(format!(
                "Critical secret {} must be a required key",
                self.critical_secret
            )));
        }
        Ok(())
    }

    /// Required keys in declaration order
    pub fn required(&self) -> &[ConfigKey] {
        &self.required
    }

    /// Optional keys in declaration order
    pub fn optional(&self) -> &[ConfigKey] {
        &self.optional
    }

    /// Required keys followed by optional keys
    pub fn all_keys(&self) -> impl Iterator<Item = &ConfigKey> {
        self.required.iter().chain(self.optional.iter())
    }

    /// Advisory message for an optional key, if one is defined
    pub fn advisory_for(&self, key: &ConfigKey) -> Option<&'static str> {
        self.advisories
            .iter()
            .find(|a| &a.key == key)
            .map(|a| a.message)
    }

    /// Required keys that commonly still hold template text
    pub fn placeholder_prone(&self) -> &[ConfigKey] {
        &self.placeholder_prone
    }

    /// Flag that enables debug behavior
    pub fn debug_flag(&self) -> &ConfigKey {
        &self.debug_flag
    }

    /// Key whose presence gates mounting the application
    pub fn critical_secret(&self) -> &ConfigKey {
        &self.critical_secret
    }
}

impl Default for ConfigSchema {
    fn default() -> Self {
        Self::standard()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    /// Validates the logging configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the rotation strategy is unknown or file logging is
    /// enabled without a directory
    pub fn validate(&self) -> std::result::Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("File logging enabled but no log directory provided".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
