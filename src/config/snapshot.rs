//! Process environment snapshot
//!
//! The environment is captured exactly once, after `.env` loading, and from
//! then on every component reads this immutable copy instead of the live
//! process environment.

use std::collections::BTreeMap;
use std::sync::Arc;

/// Immutable key/value view of the process environment
///
/// Cloning is cheap; all clones share the same captured map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: Arc<BTreeMap<String, String>>,
}

impl EnvSnapshot {
    /// Captures the current process environment
    ///
    /// Variables whose name or value is not valid Unicode are skipped; no key
    /// Tally recognizes can hold such a value meaningfully.
    pub fn capture() -> Self {
        let vars: BTreeMap<String, String> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();

        tracing::debug!(variable_count = vars.len(), "Captured environment snapshot");

        Self {
            vars: Arc::new(vars),
        }
    }

    /// Builds a snapshot from explicit pairs
    ///
    /// # Example
    ///
    /// ```
    /// use tally::config::EnvSnapshot;
    ///
    /// let snapshot = EnvSnapshot::from_pairs([("SUPABASE_URL", "https://db.example.com")]);
    /// assert_eq!(snapshot.get("SUPABASE_URL"), Some("https://db.example.com"));
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: Arc::new(
                pairs
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Raw lookup; an empty string is returned as-is
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Number of captured variables
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// True if nothing was captured
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_keeps_empty_values_distinct_from_absent() {
        let snapshot = EnvSnapshot::from_pairs([("EMPTY", "")]);
        assert_eq!(snapshot.get("EMPTY"), Some(""));
        assert_eq!(snapshot.get("ABSENT"), None);
    }

    #[test]
    fn test_capture_is_isolated_from_later_changes() {
        std::env::set_var("TALLY_SNAPSHOT_TEST_VAR", "before");
        let snapshot = EnvSnapshot::capture();
        std::env::set_var("TALLY_SNAPSHOT_TEST_VAR", "after");

        assert_eq!(snapshot.get("TALLY_SNAPSHOT_TEST_VAR"), Some("before"));
        std::env::remove_var("TALLY_SNAPSHOT_TEST_VAR");
    }

    #[test]
    fn test_clones_share_contents() {
        let snapshot = EnvSnapshot::from_pairs([("A", "1"), ("B", "2")]);
        let clone = snapshot.clone();
        assert_eq!(snapshot, clone);
        assert_eq!(clone.len(), 2);
        assert!(!clone.is_empty());
    }
}
