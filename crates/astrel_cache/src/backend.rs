//! Cache backend contract and an in-memory implementation.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::error::CacheError;

/// String-keyed, string-valued cache store with per-entry TTLs.
///
/// Implementations synchronize internally; all methods take `&self`.
pub trait CacheBackend {
    /// Fetch a value. Expired or absent entries are `None`.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    /// Store a value that expires after `ttl`.
    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;
    /// Remove a value. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;
    /// List live keys matching `pattern`. A trailing `*` matches any
    /// suffix; any other pattern matches exactly.
    fn keys(&self, pattern: &str) -> Result<Vec<String>, CacheError>;
}

struct Entry {
    value: String,
    expires_at: Instant,
}

/// Process-local backend backed by a mutexed map.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(pattern: &str, key: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => key.starts_with(prefix),
        None => key == pattern,
    }
}

impl CacheBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CacheError::Backend(e.to_string()))?;
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CacheError::Backend(e.to_string()))?;
        entries.insert(
            key.to_owned(),
            Entry {
                value: value.to_owned(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CacheError::Backend(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }

    fn keys(&self, pattern: &str) -> Result<Vec<String>, CacheError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| CacheError::Backend(e.to_string()))?;
        let now = Instant::now();
        let mut out: Vec<String> = entries
            .iter()
            .filter(|(k, e)| e.expires_at > now && matches(pattern, k))
            .map(|(k, _)| k.clone())
            .collect();
        out.sort();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60);

    #[test]
    fn set_then_get() {
        let backend = MemoryBackend::new();
        backend.set("chart:a", "1", TTL).unwrap();
        assert_eq!(backend.get("chart:a").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn missing_key_is_none() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("chart:missing").unwrap(), None);
    }

    #[test]
    fn zero_ttl_expires_immediately() {
        let backend = MemoryBackend::new();
        backend.set("chart:a", "1", Duration::ZERO).unwrap();
        assert_eq!(backend.get("chart:a").unwrap(), None);
    }

    #[test]
    fn delete_removes_entry() {
        let backend = MemoryBackend::new();
        backend.set("chart:a", "1", TTL).unwrap();
        backend.delete("chart:a").unwrap();
        backend.delete("chart:a").unwrap();
        assert_eq!(backend.get("chart:a").unwrap(), None);
    }

    #[test]
    fn keys_prefix_pattern() {
        let backend = MemoryBackend::new();
        backend.set("chart:a", "1", TTL).unwrap();
        backend.set("chart:b", "2", TTL).unwrap();
        backend.set("transits:a:2024-01-15", "3", TTL).unwrap();
        assert_eq!(backend.keys("chart:*").unwrap(), ["chart:a", "chart:b"]);
        assert_eq!(backend.keys("chart:a").unwrap(), ["chart:a"]);
        assert!(backend.keys("positions:*").unwrap().is_empty());
    }

    #[test]
    fn keys_skip_expired_entries() {
        let backend = MemoryBackend::new();
        backend.set("chart:a", "1", Duration::ZERO).unwrap();
        backend.set("chart:b", "2", TTL).unwrap();
        assert_eq!(backend.keys("chart:*").unwrap(), ["chart:b"]);
    }
}
