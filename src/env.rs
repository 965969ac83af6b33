//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env::var`].
//! Tests use [`Env::mock()`] backed by a `HashMap`, so nothing has to call
//! [`std::env::set_var`] / [`std::env::remove_var`].

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

/// Environment variable reader.
#[derive(Clone, Debug)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up an environment variable by name.
    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Look up a variable, treating empty values as unset.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        self.var(name).ok().filter(|v| !v.trim().is_empty())
    }

    /// Parse a non-empty variable into `T`, trimming surrounding whitespace.
    ///
    /// `None` when the variable is unset or blank; the error carries the
    /// offending value so callers can report it.
    pub fn parse<T>(&self, name: &str) -> Option<Result<T, String>>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.non_empty(name).map(|raw| {
            let value = raw.trim();
            value.parse().map_err(|e| format!("'{value}': {e}"))
        })
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}
