use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Ask `model` a single question and return the answer text.
    async fn chat(&self, model: &str, question: &str) -> Result<String>;
}
