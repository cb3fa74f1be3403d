pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{Defaults, RunConfig, DEFAULT_HOST, DEFAULT_MODEL};
pub use core::{
    client::OllamaClient,
    reader::read_question,
    runner::{AskRunner, RunOutcome, SERVICE_FAILURE_ANSWER},
};
pub use domain::ports::ChatClient;
pub use utils::error::{AskError, Result};
