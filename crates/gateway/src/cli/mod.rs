pub mod ask;
pub mod config;

use clap::{Parser, Subcommand};
use sp_contextpack::Topic;

/// StorePilot: an assistant gateway for the store opening program.
#[derive(Debug, Parser)]
#[command(name = "storepilot", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP server (default when no subcommand is given).
    Serve,
    /// Ask a single question and print the answer.
    Ask {
        /// The question to ask.
        query: String,
        /// Scope the answer: store, vendor, task or general.
        #[arg(long, default_value = "general")]
        topic: Topic,
        /// Print the answer and its source as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path specified by `SP_CONFIG` (or
/// `config.toml` by default). Returns the parsed [`Config`] and the
/// path that was used.
///
/// [`Config`]: sp_domain::config::Config
pub fn load_config() -> anyhow::Result<(sp_domain::config::Config, String)> {
    let config_path = std::env::var("SP_CONFIG").unwrap_or_else(|_| "config.toml".into());
    let config = load_config_from(&config_path)?;
    Ok((config, config_path))
}

/// A missing file yields the default configuration.
pub fn load_config_from(config_path: &str) -> anyhow::Result<sp_domain::config::Config> {
    if !std::path::Path::new(config_path).exists() {
        return Ok(sp_domain::config::Config::default());
    }
    let raw = std::fs::read_to_string(config_path)
        .map_err(|e| anyhow::anyhow!("reading {config_path}: {e}"))?;
    toml::from_str(&raw).map_err(|e| anyhow::anyhow!("parsing {config_path}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_defaults() {
        let cfg = load_config_from("/nonexistent/storepilot.toml").unwrap();
        assert_eq!(cfg.server.port, 3210);
        assert_eq!(cfg.llm.model, "gpt-3.5-turbo");
    }

    #[test]
    fn reads_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nport = 8080\n\n[llm]\nmodel = \"gpt-4o-mini\"\n",
        )
        .unwrap();

        let cfg = load_config_from(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.llm.model, "gpt-4o-mini");
    }

    #[test]
    fn malformed_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let path = path.to_str().unwrap();
        let err = load_config_from(path).unwrap_err();
        assert!(err.to_string().starts_with(&format!("parsing {path}")));
    }

    #[test]
    fn ask_parses_topic_flag() {
        let cli = Cli::try_parse_from(["storepilot", "ask", "Which vendors?", "--topic", "vendor"])
            .unwrap();
        match cli.command {
            Some(Command::Ask { query, topic, json }) => {
                assert_eq!(query, "Which vendors?");
                assert_eq!(topic, Topic::Vendor);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_topic_is_rejected() {
        assert!(Cli::try_parse_from(["storepilot", "ask", "x", "--topic", "weather"]).is_err());
    }

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["storepilot"]).unwrap();
        assert!(cli.command.is_none());
    }
}
