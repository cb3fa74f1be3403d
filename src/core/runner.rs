use crate::config::RunConfig;
use crate::core::reader::read_question;
use crate::domain::ports::ChatClient;
use crate::utils::error::Result;
use std::io::Write;

/// Printed in place of the answer when the model could not be asked.
pub const SERVICE_FAILURE_ANSWER: &str = "Error: Could not get a response from the Ollama model.";

const SEPARATOR: &str = "--------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Answered,
    ServiceFailed,
    InputFailed,
}

impl RunOutcome {
    pub fn exit_code(self, fail_on_service_error: bool) -> i32 {
        match self {
            RunOutcome::Answered => 0,
            RunOutcome::ServiceFailed if fail_on_service_error => 2,
            RunOutcome::ServiceFailed => 0,
            RunOutcome::InputFailed => 1,
        }
    }
}

pub struct AskRunner<C: ChatClient> {
    client: C,
    config: RunConfig,
}

impl<C: ChatClient> AskRunner<C> {
    pub fn new(client: C, config: RunConfig) -> Self {
        Self { client, config }
    }

    /// Read the question, ask the model and print the answer to `out`.
    ///
    /// Diagnostics go to `err`. Only failures to write either stream are
    /// returned as errors.
    pub async fn run<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> Result<RunOutcome> {
        let model = &self.config.model;
        let path = &self.config.question_file;

        let question = match read_question(path).await {
            Ok(question) => question,
            Err(e) => {
                tracing::debug!("Question file error: {:?}", e);
                writeln!(err, "Error: {}", e)?;
                return Ok(RunOutcome::InputFailed);
            }
        };

        writeln!(out, "Using Ollama model: '{}'", model)?;
        writeln!(out, "Reading question from: '{}'", path.display())?;
        writeln!(out, "Question: \"{}\"", question)?;
        writeln!(out, "{}", SEPARATOR)?;
        out.flush()?;

        let (answer, outcome) = match self.client.chat(model, &question).await {
            Ok(answer) => (answer, RunOutcome::Answered),
            Err(e) => {
                tracing::debug!("Chat request failed ({:?}): {}", e.category(), e);
                writeln!(err, "Error interacting with Ollama model '{}': {}", model, e)?;
                (SERVICE_FAILURE_ANSWER.to_string(), RunOutcome::ServiceFailed)
            }
        };

        writeln!(out, "\nResponse:")?;
        writeln!(out, "{}", answer)?;
        writeln!(out, "{}", SEPARATOR)?;
        writeln!(out, "Ensure Ollama service is running and model is available.")?;
        out.flush()?;

        Ok(outcome)
    }
}
