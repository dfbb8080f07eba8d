//! Secure credential handling using the secrecy crate
//!
//! The identity provider's publishable key travels through the gate as a
//! [`SecretString`]: its memory is zeroed on drop, `Debug` output is
//! redacted, and reading it requires an explicit `expose_secret()`.
//!
//! Operator-facing output never prints raw configuration values; it goes
//! through [`mask`] instead.
//!
//! # Example
//!
//! ```rust
//! use tally::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let key = secret_string("pk_test_abc123".to_string());
//! assert_eq!(key.expose_secret().as_ref(), "pk_test_abc123");
//! println!("{:?}", key); // Prints: Secret([REDACTED tally::config::secret::SecretValue])
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the required traits for Secret
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// Check if the secret value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Type alias for a secret string
pub type SecretString = Secret<SecretValue>;

/// Helper function to create a SecretString from a String
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

/// Masks a configuration value for display
///
/// Short values are fully hidden; longer ones keep a four-character prefix
/// so operators can tell which credential is loaded.
///
/// ```
/// use tally::config::mask;
///
/// assert_eq!(mask("pk_test_0123456789"), "pk_t****");
/// assert_eq!(mask("short"), "****");
/// assert_eq!(mask(""), "");
/// ```
pub fn mask(value: &str) -> String {
    const VISIBLE: usize = 4;
    const MIN_LEN_FOR_PREFIX: usize = 12;

    if value.is_empty() {
        return String::new();
    }
    if value.chars().count() < MIN_LEN_FOR_PREFIX {
        return "****".to_string();
    }
    let prefix: String = value.chars().take(VISIBLE).collect();
    format!("{prefix}****")
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_string_creation() {
        let secret = secret_string("pk_live_key".to_string());
        assert!(secret.expose_secret() == "pk_live_key");
        assert!(!secret.expose_secret().is_empty());
    }

    #[test]
    fn test_secret_debug_redacted() {
        let secret = secret_string("sensitive-data".to_string());
        let debug_output = format!("{secret:?}");

        // Should not contain the actual secret
        assert!(!debug_output.contains("sensitive-data"));
        // Should contain redaction indicator
        assert!(debug_output.contains("REDACTED") || debug_output.contains("Secret"));
    }

    #[test]
    fn test_mask_never_reveals_short_values() {
        assert_eq!(mask("abc"), "****");
        assert_eq!(mask("your_key_12"), "****");
    }

    #[test]
    fn test_mask_keeps_prefix_of_long_values() {
        let masked = mask("https://abcd.supabase.co");
        assert_eq!(masked, "http****");
        assert!(!masked.contains("supabase"));
    }
}
