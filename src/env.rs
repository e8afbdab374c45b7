use std::collections::HashMap;
use std::env;

use tracing::debug;

/// Read access to a set of environment variables.
///
/// Resolution goes through this trait instead of `std::env` directly so
/// that tests can hand in a plain map.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` when it is unset.
    fn get(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // A set but non-unicode value is still set; invalid bytes become U+FFFD
        let value = env::var_os(key)?;
        if value.to_str().is_none() {
            debug!("{} is not valid unicode, keeping it lossily converted", key);
        }
        Some(value.to_string_lossy().into_owned())
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Reads `key`, falling back to `default` when it is unset.
///
/// A variable set to the empty string counts as set.
pub fn var_or<E: EnvSource + ?Sized>(env: &E, key: &str, default: &str) -> String {
    env.get(key).unwrap_or_else(|| {
        debug!("{} not set, using default", key);
        default.to_string()
    })
}
