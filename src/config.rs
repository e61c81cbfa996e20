//! Server configuration
//!
//! Read once from the environment at startup.

use serde::Serialize;

use crate::pagination::DEFAULT_SIBLING_COUNT;

/// Environment variable overriding the pager sibling count
pub const SIBLING_COUNT_VAR: &str = "RECIPEKIT_SIBLING_COUNT";
/// Environment variable overriding the default page size
pub const PAGE_SIZE_VAR: &str = "RECIPEKIT_PAGE_SIZE";

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Defaults applied to tool calls that omit optional parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    pub sibling_count: u32,
    pub page_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            sibling_count: DEFAULT_SIBLING_COUNT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ServerConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            sibling_count: read_u32(&lookup, SIBLING_COUNT_VAR, 0)
                .unwrap_or(defaults.sibling_count),
            page_size: read_u32(&lookup, PAGE_SIZE_VAR, 1).unwrap_or(defaults.page_size),
        }
    }
}

fn read_u32<F>(lookup: &F, key: &str, min: u32) -> Option<u32>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<u32>() {
        Ok(value) if value >= min => Some(value),
        _ => {
            tracing::warn!("Ignoring invalid {}='{}', using default", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.sibling_count, 1);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (SIBLING_COUNT_VAR, "2"),
            (PAGE_SIZE_VAR, " 25 "),
        ]));
        assert_eq!(config.sibling_count, 2);
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_zero_siblings_allowed() {
        let config = ServerConfig::from_lookup(lookup_from(&[(SIBLING_COUNT_VAR, "0")]));
        assert_eq!(config.sibling_count, 0);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (SIBLING_COUNT_VAR, "-1"),
            (PAGE_SIZE_VAR, "0"),
        ]));
        assert_eq!(config, ServerConfig::default());
    }
}
