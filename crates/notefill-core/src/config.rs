//! Environment-variable configuration helpers.
//!
//! Every workflow binary is configured solely through named environment
//! variables. A missing mandatory variable is a pre-flight `Error::Config`
//! and the binary exits non-zero before touching the network.

use crate::error::{Error, Result};

/// Read a mandatory environment variable.
pub fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::Config(format!("{} not set", name))),
    }
}

/// Read an optional environment variable with a default.
pub fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Process env is shared across the test binary; use unique var names.

    #[test]
    fn test_require_env_present() {
        std::env::set_var("NOTEFILL_TEST_REQUIRED", "value");
        assert_eq!(require_env("NOTEFILL_TEST_REQUIRED").unwrap(), "value");
        std::env::remove_var("NOTEFILL_TEST_REQUIRED");
    }

    #[test]
    fn test_require_env_missing() {
        let err = require_env("NOTEFILL_TEST_MISSING").unwrap_err();
        match err {
            Error::Config(msg) => assert!(msg.contains("NOTEFILL_TEST_MISSING")),
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_require_env_blank_is_missing() {
        std::env::set_var("NOTEFILL_TEST_BLANK", "   ");
        assert!(require_env("NOTEFILL_TEST_BLANK").is_err());
        std::env::remove_var("NOTEFILL_TEST_BLANK");
    }

    #[test]
    fn test_env_or_default() {
        assert_eq!(env_or("NOTEFILL_TEST_ABSENT", "fallback"), "fallback");
    }
}
