//! Work-root override for tests.
//!
//! `QUANTCTL_HOME` is process-global, so [`HomeOverride`] holds a shared lock
//! for its whole lifetime and restores the previous value when dropped.

use std::env;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::HOME_ENV;

static HOME_LOCK: Mutex<()> = Mutex::new(());

pub struct HomeOverride {
    previous: Option<String>,
    _lock: MutexGuard<'static, ()>,
}

impl HomeOverride {
    fn lock() -> MutexGuard<'static, ()> {
        // A failed assertion in another test must not cascade.
        HOME_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Point the work root at `dir`.
    pub fn to(dir: &Path) -> Self {
        Self::with_value(Some(&dir.to_string_lossy()))
    }

    /// Set `QUANTCTL_HOME` to an arbitrary string (including blank).
    pub fn raw(value: &str) -> Self {
        Self::with_value(Some(value))
    }

    /// Remove `QUANTCTL_HOME` so the current directory is used.
    pub fn cleared() -> Self {
        Self::with_value(None)
    }

    #[allow(unsafe_code)]
    fn with_value(value: Option<&str>) -> Self {
        let lock = Self::lock();
        let previous = env::var(HOME_ENV).ok();
        // SAFETY: every test touching HOME_ENV holds HOME_LOCK.
        unsafe {
            match value {
                Some(v) => env::set_var(HOME_ENV, v),
                None => env::remove_var(HOME_ENV),
            }
        }
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for HomeOverride {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: the lock is still held; it is released after this body.
        unsafe {
            match self.previous.take() {
                Some(v) => env::set_var(HOME_ENV, v),
                None => env::remove_var(HOME_ENV),
            }
        }
    }
}
