//! Get-or-compute façade over a cache backend.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::CacheBackend;

/// Return the cached value under `key`, or compute, store, and return.
///
/// The cache is an optimization, never a source of truth: a backend
/// read error, a decode failure, and a miss all fall through to
/// `compute`; a store failure after a successful compute is logged and
/// swallowed. Only `compute`'s own error reaches the caller.
pub fn get_or_compute<T, E, F>(
    backend: &dyn CacheBackend,
    key: &str,
    ttl: Duration,
    compute: F,
) -> Result<T, E>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Result<T, E>,
{
    match backend.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => {
                log::debug!("cache hit for {key}");
                return Ok(value);
            }
            Err(e) => log::warn!("cache decode failed for {key}: {e}"),
        },
        Ok(None) => log::debug!("cache miss for {key}"),
        Err(e) => log::warn!("cache read failed for {key}: {e}"),
    }

    let value = compute()?;

    match serde_json::to_string(&value) {
        Ok(raw) => {
            if let Err(e) = backend.set(key, &raw, ttl) {
                log::warn!("cache store failed for {key}: {e}");
            }
        }
        Err(e) => log::warn!("cache encode failed for {key}: {e}"),
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::error::CacheError;
    use std::cell::Cell;

    const TTL: Duration = Duration::from_secs(60);

    /// Backend whose operations all fail.
    struct BrokenBackend;

    impl CacheBackend for BrokenBackend {
        fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
            Err(CacheError::Backend("get refused".to_owned()))
        }
        fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), CacheError> {
            Err(CacheError::Backend("set refused".to_owned()))
        }
        fn delete(&self, _key: &str) -> Result<(), CacheError> {
            Err(CacheError::Backend("delete refused".to_owned()))
        }
        fn keys(&self, _pattern: &str) -> Result<Vec<String>, CacheError> {
            Err(CacheError::Backend("keys refused".to_owned()))
        }
    }

    fn counted(calls: &Cell<u32>, value: u32) -> impl FnOnce() -> Result<u32, CacheError> + '_ {
        move || {
            calls.set(calls.get() + 1);
            Ok(value)
        }
    }

    #[test]
    fn miss_computes_and_stores() {
        let backend = MemoryBackend::new();
        let calls = Cell::new(0);
        let v = get_or_compute(&backend, "k", TTL, counted(&calls, 7)).unwrap();
        assert_eq!(v, 7);
        assert_eq!(calls.get(), 1);
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("7"));
    }

    #[test]
    fn hit_skips_compute() {
        let backend = MemoryBackend::new();
        let calls = Cell::new(0);
        let first = get_or_compute(&backend, "k", TTL, counted(&calls, 7)).unwrap();
        let second = get_or_compute(&backend, "k", TTL, counted(&calls, 9)).unwrap();
        assert_eq!(first, 7);
        assert_eq!(second, 7);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn store_failure_still_returns_value() {
        let backend = BrokenBackend;
        let calls = Cell::new(0);
        let v = get_or_compute(&backend, "k", TTL, counted(&calls, 7)).unwrap();
        assert_eq!(v, 7);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn undecodable_entry_falls_through_to_compute() {
        let backend = MemoryBackend::new();
        backend.set("k", "not json", TTL).unwrap();
        let calls = Cell::new(0);
        let v = get_or_compute(&backend, "k", TTL, counted(&calls, 7)).unwrap();
        assert_eq!(v, 7);
        assert_eq!(calls.get(), 1);
        // The bad entry is overwritten by the fresh value.
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("7"));
    }

    #[test]
    fn compute_error_propagates() {
        let backend = MemoryBackend::new();
        let r: Result<u32, &str> = get_or_compute(&backend, "k", TTL, || Err("boom"));
        assert_eq!(r, Err("boom"));
        assert_eq!(backend.get("k").unwrap(), None);
    }
}
