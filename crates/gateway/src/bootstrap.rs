//! AppState construction shared by `serve` and `ask`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use sp_contextpack::DomainContext;
use sp_domain::config::{Config, ConfigSeverity};
use sp_providers::{CompletionGateway, LlmProvider, OpenAiCompatProvider};

use crate::assistant::Assistant;
use crate::state::AppState;

/// Validate config, build the provider and the assistant, and return a
/// fully-wired [`AppState`].
pub fn build_app_state(config: Arc<Config>) -> anyhow::Result<AppState> {
    // ── Config validation ────────────────────────────────────────────
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            ConfigSeverity::Warning => tracing::warn!("config: {issue}"),
            ConfigSeverity::Error => tracing::error!("config: {issue}"),
        }
    }
    let error_count = issues
        .iter()
        .filter(|i| i.severity == ConfigSeverity::Error)
        .count();
    if error_count > 0 {
        anyhow::bail!("config validation failed with {error_count} error(s)");
    }

    let assistant = build_assistant(&config)?;
    Ok(AppState::new(config, assistant))
}

/// Build the assistant from config alone. No validation is done here.
pub fn build_assistant(config: &Config) -> anyhow::Result<Assistant> {
    // ── Domain context ───────────────────────────────────────────────
    let context = match &config.assistant.domain_context_path {
        Some(path) => DomainContext::from_file(path)
            .with_context(|| format!("loading domain context from {}", path.display()))?,
        None => DomainContext::default(),
    };
    tracing::info!(
        chars = context.len(),
        custom = config.assistant.domain_context_path.is_some(),
        "domain context ready"
    );

    // ── Completion provider ──────────────────────────────────────────
    let provider: Arc<dyn LlmProvider> = Arc::new(
        OpenAiCompatProvider::from_config(&config.llm)
            .context("initializing completion provider")?,
    );
    tracing::info!(
        provider = %provider.provider_id(),
        model = %config.llm.model,
        credential = provider.has_credential(),
        "completion provider ready"
    );

    let gateway = CompletionGateway::new(
        provider,
        config.llm.model.clone(),
        Duration::from_millis(config.llm.timeout_ms),
    );

    Ok(Assistant::new(context, gateway))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = Config::default();
        config.server.port = 0;
        let err = build_app_state(Arc::new(config)).err().unwrap();
        assert!(err.to_string().contains("1 error(s)"));
    }

    #[test]
    fn custom_domain_context_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("domain.md");
        std::fs::write(&path, "  Custom program data  \n").unwrap();

        let mut config = Config::default();
        config.assistant.domain_context_path = Some(path);
        let assistant = build_assistant(&config).unwrap();
        assert_eq!(assistant.context().as_str(), "Custom program data");
    }

    #[test]
    fn missing_domain_context_file_is_an_error() {
        let mut config = Config::default();
        config.assistant.domain_context_path = Some("/nonexistent/domain.md".into());
        let err = build_assistant(&config).err().unwrap();
        assert!(format!("{err:#}").contains("loading domain context"));
    }

    #[test]
    fn default_config_uses_builtin_context() {
        let assistant = build_assistant(&Config::default()).unwrap();
        assert_eq!(
            assistant.context().as_str(),
            DomainContext::default().as_str()
        );
        assert_eq!(assistant.gateway().model(), "gpt-3.5-turbo");
    }
}
