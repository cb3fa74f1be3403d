use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "ollama-ask")]
#[command(about = "Ask a question to an Ollama model.")]
pub struct CliConfig {
    /// Name of the Ollama model to use (e.g., llama3.2:latest)
    #[arg(long)]
    pub model: Option<String>,

    /// Path to the file containing the question to ask.
    #[arg(long)]
    pub question_file: String,

    /// Base URL of the Ollama service
    #[arg(long)]
    pub host: Option<String>,

    /// Exit with status 2 when the model could not be reached
    #[arg(long)]
    pub fail_on_service_error: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_file_is_required() {
        let result = CliConfig::try_parse_from(["ollama-ask"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parses_all_options() {
        let cli = CliConfig::try_parse_from([
            "ollama-ask",
            "--model",
            "mistral",
            "--question-file",
            "q.txt",
            "--host",
            "http://gpu-box:11434",
            "--fail-on-service-error",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.model.as_deref(), Some("mistral"));
        assert_eq!(cli.question_file, "q.txt");
        assert_eq!(cli.host.as_deref(), Some("http://gpu-box:11434"));
        assert!(cli.fail_on_service_error);
        assert!(cli.verbose);
    }

    #[test]
    fn test_help_does_not_hardcode_defaults() {
        use clap::CommandFactory;

        let help = CliConfig::command().render_help().to_string();
        assert!(help.contains("--model"));
        assert!(help.contains("--host"));
        assert!(!help.contains("[default:"));
    }

    #[test]
    fn test_model_and_host_are_optional() {
        let cli = CliConfig::try_parse_from(["ollama-ask", "--question-file", "q.txt"]).unwrap();
        assert!(cli.model.is_none());
        assert!(cli.host.is_none());
        assert!(!cli.fail_on_service_error);
    }
}
