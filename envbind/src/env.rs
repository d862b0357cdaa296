//! Environment sources the binder reads from.

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::hash::BuildHasher;

/// A synchronous, read-only key-value lookup.
///
/// The binder treats an empty value the same as a missing one, so
/// implementations need not filter them.
pub trait Environment {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

/// The process environment.
///
/// Keys that cannot exist in a process environment (empty, or containing
/// `=` or NUL) are reported as missing. Values that are not valid UTF-8 are
/// converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        if key.is_empty() || key.contains(|c: char| c == '=' || c == '\0') {
            return None;
        }
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<S: BuildHasher> Environment for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_process_env_reads_variable() {
        env::set_var("ENVBIND_TEST_PROCESS", "value");
        assert_eq!(ProcessEnv.get("ENVBIND_TEST_PROCESS"), Some("value".to_string()));
        env::remove_var("ENVBIND_TEST_PROCESS");
        assert_eq!(ProcessEnv.get("ENVBIND_TEST_PROCESS"), None);
    }

    #[test]
    fn test_process_env_rejects_impossible_keys() {
        assert_eq!(ProcessEnv.get(""), None);
        assert_eq!(ProcessEnv.get("A=B"), None);
        assert_eq!(ProcessEnv.get("A\0B"), None);
    }

    #[test]
    fn test_map_sources() {
        let hash: HashMap<String, String> = [("PORT".to_string(), "80".to_string())].into();
        let tree: BTreeMap<String, String> = [("PORT".to_string(), "81".to_string())].into();
        assert_eq!(Environment::get(&hash, "PORT"), Some("80".to_string()));
        assert_eq!(Environment::get(&tree, "PORT"), Some("81".to_string()));
        assert_eq!(Environment::get(&tree, "HOST"), None);
    }

    #[test]
    fn test_reference_forwards() {
        let tree: BTreeMap<String, String> = [("K".to_string(), "v".to_string())].into();
        let forwarded = &tree;
        assert_eq!(Environment::get(&forwarded, "K"), Some("v".to_string()));
    }
}
