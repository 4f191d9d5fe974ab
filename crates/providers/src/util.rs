//! Shared utility functions for provider adapters.

use sp_domain::config::AuthConfig;
use sp_domain::error::{Error, Result};

/// Convert a [`reqwest::Error`] into the domain [`Error`] type.
///
/// Timeout errors map to [`Error::Timeout`]; everything else maps to
/// [`Error::Http`].
pub(crate) fn from_reqwest(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout(e.to_string())
    } else {
        Error::Http(e.to_string())
    }
}

/// Resolve the API key from an [`AuthConfig`].
///
/// Precedence:
/// 1. `key` field (plaintext, logs a warning)
/// 2. `env` field (reads environment variable)
/// 3. Error
///
/// Empty or whitespace-only values count as missing.
pub(crate) fn resolve_api_key(auth: &AuthConfig) -> Result<String> {
    if let Some(ref key) = auth.key {
        if !key.trim().is_empty() {
            tracing::warn!(
                "API key loaded from plaintext config field 'key'; prefer 'env' instead"
            );
            return Ok(key.trim().to_string());
        }
    }

    if let Some(ref env_var) = auth.env {
        return match std::env::var(env_var) {
            Ok(val) if !val.trim().is_empty() => Ok(val.trim().to_string()),
            Ok(_) => Err(Error::Auth(format!(
                "API key environment variable '{env_var}' is empty"
            ))),
            Err(_) => Err(Error::Auth(format!(
                "API key environment variable '{env_var}' not set or not valid UTF-8"
            ))),
        };
    }

    Err(Error::Auth(
        "no API key configured: set 'env' or 'key' under [llm.auth]".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(env: Option<&str>, key: Option<&str>) -> AuthConfig {
        AuthConfig {
            env: env.map(String::from),
            key: key.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn resolve_api_key_plaintext() {
        let result = resolve_api_key(&auth(None, Some("sk-test-123"))).unwrap();
        assert_eq!(result, "sk-test-123");
    }

    #[test]
    fn resolve_api_key_env_var() {
        let var_name = "SP_TEST_RESOLVE_ENV_KEY_1234";
        std::env::set_var(var_name, "env-secret-value");
        let result = resolve_api_key(&auth(Some(var_name), None)).unwrap();
        assert_eq!(result, "env-secret-value");
        std::env::remove_var(var_name);
    }

    #[test]
    fn resolve_api_key_env_var_missing() {
        let err = resolve_api_key(&auth(Some("SP_TEST_NONEXISTENT_VAR_8888"), None)).unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
        assert!(err.to_string().contains("SP_TEST_NONEXISTENT_VAR_8888"));
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn resolve_api_key_env_var_blank() {
        let var_name = "SP_TEST_BLANK_KEY_4321";
        std::env::set_var(var_name, "   ");
        let err = resolve_api_key(&auth(Some(var_name), None)).unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
        std::env::remove_var(var_name);
    }

    #[test]
    fn resolve_api_key_no_config() {
        let err = resolve_api_key(&auth(None, None)).unwrap_err();
        assert!(err.to_string().contains("no API key configured"));
    }

    #[test]
    fn plaintext_takes_precedence_over_env() {
        let result = resolve_api_key(&auth(Some("SP_TEST_SHOULD_NOT_BE_READ"), Some("plaintext-wins")))
            .unwrap();
        assert_eq!(result, "plaintext-wins");
    }
}
