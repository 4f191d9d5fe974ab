use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Completion provider
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The single upstream completion provider (OpenAI-compatible wire format).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Identifier used in logs and trace events.
    #[serde(default = "d_provider_id")]
    pub id: String,
    #[serde(default = "d_base_url")]
    pub base_url: String,
    /// Model identifier sent with every request.
    #[serde(default = "d_model")]
    pub model: String,
    /// Upper bound on a single completion round-trip. Elapsing it is
    /// treated like any other transient provider failure.
    #[serde(default = "d_30000u")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            id: d_provider_id(),
            base_url: d_base_url(),
            model: d_model(),
            timeout_ms: 30_000,
            auth: AuthConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Header name (e.g. "Authorization", "api-key").
    #[serde(default = "d_auth_header")]
    pub header: String,
    /// Header value prefix (e.g. "Bearer ").
    #[serde(default = "d_auth_prefix")]
    pub prefix: String,
    /// Env var containing the key.
    #[serde(default = "d_auth_env")]
    pub env: Option<String>,
    /// Direct key (for config-only setups; prefer env).
    #[serde(default)]
    pub key: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            header: d_auth_header(),
            prefix: d_auth_prefix(),
            env: d_auth_env(),
            key: None,
        }
    }
}

// ── serde default helpers ───────────────────────────────────────────

fn d_provider_id() -> String {
    "openai".into()
}
fn d_base_url() -> String {
    "https://api.openai.com/v1".into()
}
fn d_model() -> String {
    "gpt-3.5-turbo".into()
}
fn d_30000u() -> u64 {
    30_000
}
fn d_auth_header() -> String {
    "Authorization".into()
}
fn d_auth_prefix() -> String {
    "Bearer ".into()
}
fn d_auth_env() -> Option<String> {
    Some("OPENAI_API_KEY".into())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn llm_config_defaults() {
        let cfg = LlmConfig::default();
        assert_eq!(cfg.base_url, "https://api.openai.com/v1");
        assert_eq!(cfg.model, "gpt-3.5-turbo");
        assert_eq!(cfg.timeout_ms, 30_000);
        assert_eq!(cfg.auth.env.as_deref(), Some("OPENAI_API_KEY"));
        assert!(cfg.auth.key.is_none());
    }

    #[test]
    fn llm_config_deserializes_overrides() {
        let toml_str = r#"
            base_url = "http://localhost:11434/v1"
            model = "llama3"
            timeout_ms = 5000

            [auth]
            env = "LOCAL_LLM_KEY"
        "#;
        let cfg: LlmConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.base_url, "http://localhost:11434/v1");
        assert_eq!(cfg.model, "llama3");
        assert_eq!(cfg.timeout_ms, 5000);
        assert_eq!(cfg.auth.env.as_deref(), Some("LOCAL_LLM_KEY"));
        assert_eq!(cfg.auth.header, "Authorization");
        assert_eq!(cfg.auth.prefix, "Bearer ");
    }
}
