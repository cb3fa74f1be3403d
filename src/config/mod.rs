#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "llama3.1";

/// Ollama's standard local endpoint.
pub const DEFAULT_HOST: &str = "http://localhost:11434";

/// Values used when an option is not given on the command line.
#[derive(Debug, Clone)]
pub struct Defaults {
    pub model: String,
    pub host: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            host: DEFAULT_HOST.to_string(),
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub model: String,
    pub question_file: PathBuf,
    pub host: String,
    pub fail_on_service_error: bool,
}

impl RunConfig {
    pub fn new(model: impl Into<String>, question_file: impl Into<PathBuf>) -> Self {
        let defaults = Defaults::default();
        Self {
            model: model.into(),
            question_file: question_file.into(),
            host: defaults.host,
            fail_on_service_error: false,
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: cli::CliConfig, defaults: &Defaults) -> Self {
        Self {
            model: cli.model.unwrap_or_else(|| defaults.model.clone()),
            question_file: PathBuf::from(cli.question_file),
            host: cli.host.unwrap_or_else(|| defaults.host.clone()),
            fail_on_service_error: cli.fail_on_service_error,
        }
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("model", &self.model)?;
        validation::validate_path("question_file", &self.question_file)?;
        validation::validate_url("host", &self.host)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_host() {
        let config = RunConfig::new("llama3.1", "q.txt");
        assert_eq!(config.host, "http://localhost:11434");
        assert!(!config.fail_on_service_error);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_model() {
        let config = RunConfig::new("  ", "q.txt");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_question_file() {
        let config = RunConfig::new("llama3.1", "");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_host() {
        let mut config = RunConfig::new("llama3.1", "q.txt");
        config.host = "ftp://localhost".to_string();
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_from_cli_fills_in_defaults() {
        use clap::Parser;

        let cli = cli::CliConfig::try_parse_from(["ollama-ask", "--question-file", "q.txt"])
            .unwrap();
        let defaults = Defaults {
            model: "phi4".to_string(),
            host: "http://127.0.0.1:8080".to_string(),
        };

        let config = RunConfig::from_cli(cli, &defaults);
        assert_eq!(config.model, "phi4");
        assert_eq!(config.host, "http://127.0.0.1:8080");
        assert_eq!(config.question_file, PathBuf::from("q.txt"));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_from_cli_prefers_explicit_model() {
        use clap::Parser;

        let cli = cli::CliConfig::try_parse_from([
            "ollama-ask",
            "--model",
            "mistral",
            "--question-file",
            "q.txt",
        ])
        .unwrap();

        let config = RunConfig::from_cli(cli, &Defaults::default());
        assert_eq!(config.model, "mistral");
        assert_eq!(config.host, DEFAULT_HOST);
    }
}
