//! Configuration key identifiers
//!
//! [`ConfigKey`] is a newtype over the environment variable name. The keys
//! Tally recognizes are declared here as constants; any other name is still a
//! valid key to resolve, it just resolves to nothing unless the environment
//! happens to carry it.

use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;
use std::str::FromStr;

/// Configuration key newtype wrapper
///
/// # Examples
///
/// ```
/// use tally::config::ConfigKey;
/// use std::str::FromStr;
///
/// let key = ConfigKey::from_str("SUPABASE_URL").unwrap();
/// assert_eq!(key.as_str(), "SUPABASE_URL");
/// assert_eq!(key, tally::config::keys::SUPABASE_URL);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigKey(Cow<'static, str>);

impl ConfigKey {
    /// Creates a key from a static name, usable in `const` position
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a new ConfigKey from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(ConfigKey)` if the name is a non-empty identifier made of
    /// ASCII letters, digits and underscores, `Err` otherwise
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Config key cannot be empty".to_string());
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(format!(
                "Config key '{name}' must contain only ASCII letters, digits and underscores"
            ));
        }
        Ok(Self(Cow::Owned(name)))
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ConfigKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ConfigKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Hosted database project URL
pub const SUPABASE_URL: ConfigKey = ConfigKey::from_static("SUPABASE_URL");

/// Hosted database anonymous (public) API key
pub const SUPABASE_ANON_KEY: ConfigKey = ConfigKey::from_static("SUPABASE_ANON_KEY");

/// Identity provider publishable key, the critical secret
pub const CLERK_PUBLISHABLE_KEY: ConfigKey = ConfigKey::from_static("CLERK_PUBLISHABLE_KEY");

/// Email provider API key
pub const RESEND_API_KEY: ConfigKey = ConfigKey::from_static("RESEND_API_KEY");

/// AI provider API key
pub const GEMINI_API_KEY: ConfigKey = ConfigKey::from_static("GEMINI_API_KEY");

/// Public URL the application is served from
pub const APP_URL: ConfigKey = ConfigKey::from_static("APP_URL");

/// Debug flag
pub const DEBUG_MODE: ConfigKey = ConfigKey::from_static("DEBUG_MODE");

/// Endpoint receiving render failure reports in production
pub const ERROR_REPORTING_URL: ConfigKey = ConfigKey::from_static("ERROR_REPORTING_URL");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_valid() {
        let key = ConfigKey::new("GEMINI_API_KEY").unwrap();
        assert_eq!(key, GEMINI_API_KEY);
        assert_eq!(key.to_string(), "GEMINI_API_KEY");
    }

    #[test]
    fn test_config_key_empty() {
        assert!(ConfigKey::new("").is_err());
        assert!(ConfigKey::new("   ").is_err());
    }

    #[test]
    fn test_config_key_invalid_chars() {
        assert!(ConfigKey::new("SUPABASE-URL").is_err());
        assert!(ConfigKey::new("KEY WITH SPACE").is_err());
    }

    #[test]
    fn test_config_key_serializes_as_plain_string() {
        let json = serde_json::to_string(&SUPABASE_URL).unwrap();
        assert_eq!(json, "\"SUPABASE_URL\"");
    }
}
