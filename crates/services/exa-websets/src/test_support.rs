//! Helpers for tests that touch process-wide environment variables.
//!
//! Every test using these guards must be marked `#[serial(env)]`.

use crate::config::{ENV_API_KEY, ENV_BASE_URL};

/// Restores an environment variable to its previous value when dropped.
pub struct EnvGuard {
    key: &'static str,
    prev: Option<String>,
}

impl EnvGuard {
    /// Set `key` to `val` until the guard is dropped.
    #[must_use]
    pub fn set(key: &'static str, val: &str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: callers serialize env access with `#[serial(env)]`.
        unsafe { std::env::set_var(key, val) };
        Self { key, prev }
    }

    /// Unset `key` until the guard is dropped.
    #[must_use]
    pub fn remove(key: &'static str) -> Self {
        let prev = std::env::var(key).ok();
        // SAFETY: callers serialize env access with `#[serial(env)]`.
        unsafe { std::env::remove_var(key) };
        Self { key, prev }
    }

    /// Unset both the API key and the base URL override.
    #[must_use]
    pub fn without_exa_env() -> [Self; 2] {
        [Self::remove(ENV_API_KEY), Self::remove(ENV_BASE_URL)]
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.prev {
            // SAFETY: see `EnvGuard::set`.
            Some(v) => unsafe { std::env::set_var(self.key, v) },
            // SAFETY: see `EnvGuard::remove`.
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}
