//! Typed lookups against the environment snapshot

use super::snapshot::EnvSnapshot;
use std::str::FromStr;

/// Resolves configuration values from a captured [`EnvSnapshot`]
///
/// Lookups never fail. An unknown key is simply absent and callers decide
/// what absence means.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    snapshot: EnvSnapshot,
}

impl ConfigResolver {
    /// Creates a resolver over the given snapshot
    pub fn new(snapshot: EnvSnapshot) -> Self {
        Self { snapshot }
    }

    /// Returns the stored value for `key`, including an empty string
    pub fn resolve(&self, key: impl AsRef<str>) -> Option<String> {
        self.snapshot.get(key.as_ref()).map(str::to_string)
    }

    /// Returns the stored value, or `fallback` when the key is absent
    ///
    /// An explicitly empty value is returned as the empty string; the
    /// fallback only covers absence.
    pub fn resolve_or(&self, key: impl AsRef<str>, fallback: impl Into<String>) -> String {
        self.resolve(key).unwrap_or_else(|| fallback.into())
    }

    /// Interprets the value as a flag
    ///
    /// Returns `true` for exactly `"true"` or `"1"`, otherwise `fallback`.
    ///
    /// # Example
    ///
    /// ```
    /// use tally::config::{ConfigResolver, EnvSnapshot};
    ///
    /// let resolver = ConfigResolver::new(EnvSnapshot::from_pairs([("DEBUG_MODE", "1")]));
    /// assert!(resolver.resolve_bool("DEBUG_MODE", false));
    /// assert!(!resolver.resolve_bool("MISSING", false));
    /// ```
    pub fn resolve_bool(&self, key: impl AsRef<str>, fallback: bool) -> bool {
        match self.snapshot.get(key.as_ref()) {
            Some("true") | Some("1") => true,
            _ => fallback,
        }
    }

    /// Parses the value into `T`, or returns `fallback` if absent or unparsable
    pub fn resolve_parsed<T: FromStr>(&self, key: impl AsRef<str>, fallback: T) -> T {
        let key = key.as_ref();
        match self.snapshot.get(key) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::debug!(key = key, "Unparsable config value, using fallback");
                fallback
            }),
            None => fallback,
        }
    }

    /// The underlying snapshot
    pub fn snapshot(&self) -> &EnvSnapshot {
        &self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn resolver(pairs: &[(&str, &str)]) -> ConfigResolver {
        ConfigResolver::new(EnvSnapshot::from_pairs(pairs.iter().copied()))
    }

    #[test]
    fn test_resolve_present_and_absent() {
        let r = resolver(&[("SUPABASE_URL", "https://db.example.com")]);
        assert_eq!(
            r.resolve("SUPABASE_URL"),
            Some("https://db.example.com".to_string())
        );
        assert_eq!(r.resolve("NOT_A_KNOWN_KEY"), None);
    }

    #[test]
    fn test_resolve_or_fallback_only_on_absence() {
        let r = resolver(&[("EMPTY", "")]);
        assert_eq!(r.resolve_or("EMPTY", "fallback"), "");
        assert_eq!(r.resolve_or("ABSENT", "fallback"), "fallback");
    }

    #[test_case("true", true ; "literal true")]
    #[test_case("1", true ; "literal one")]
    #[test_case("yes", false ; "yes is not a flag")]
    #[test_case("TRUE", false ; "case sensitive")]
    #[test_case("0", false ; "zero")]
    #[test_case("", false ; "empty")]
    fn test_resolve_bool_values(stored: &str, expected: bool) {
        let r = resolver(&[("FLAG", stored)]);
        assert_eq!(r.resolve_bool("FLAG", false), expected);
    }

    #[test]
    fn test_resolve_bool_absent_uses_fallback() {
        let r = resolver(&[]);
        assert!(r.resolve_bool("FLAG", true));
        assert!(!r.resolve_bool("FLAG", false));
    }

    #[test]
    fn test_resolve_bool_unrecognized_value_uses_fallback() {
        let r = resolver(&[("FLAG", "yes")]);
        assert!(r.resolve_bool("FLAG", true));
    }

    #[test]
    fn test_resolve_parsed() {
        let r = resolver(&[("PORT", " 8080 "), ("BAD", "eighty")]);
        assert_eq!(r.resolve_parsed("PORT", 0u16), 8080);
        assert_eq!(r.resolve_parsed("BAD", 3000u16), 3000);
        assert_eq!(r.resolve_parsed("ABSENT", 42u32), 42);
    }
}
