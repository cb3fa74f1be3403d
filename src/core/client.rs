use crate::config::DEFAULT_HOST;
use crate::domain::model::{ChatRequest, ChatResponse, ServiceErrorBody};
use crate::domain::ports::ChatClient;
use crate::utils::error::{AskError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

/// Client for a local Ollama service's chat endpoint.
///
/// No timeout is configured: a call waits until the service answers or the
/// connection fails.
pub struct OllamaClient {
    chat_endpoint: Url,
    client: Client,
}

impl OllamaClient {
    pub fn new(host: &str) -> Result<Self> {
        let mut base = Url::parse(host).map_err(|e| AskError::InvalidConfigValueError {
            field: "host".to_string(),
            value: host.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        // join() would otherwise replace the last path segment
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let chat_endpoint = base.join("api/chat").map_err(|e| AskError::ConfigError {
            message: format!("Cannot build chat endpoint from '{}': {}", host, e),
        })?;

        Ok(Self {
            chat_endpoint,
            client: Client::new(),
        })
    }

    pub fn chat_endpoint(&self) -> &Url {
        &self.chat_endpoint
    }
}

fn service_message(body: &str) -> String {
    match serde_json::from_str::<ServiceErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => body.trim().to_string(),
    }
}

#[async_trait]
impl ChatClient for OllamaClient {
    async fn chat(&self, model: &str, question: &str) -> Result<String> {
        let request = ChatRequest::single_question(model, question);

        tracing::debug!("Making chat request to: {}", self.chat_endpoint);
        let response = self
            .client
            .post(self.chat_endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Chat response status: {}", status);
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(AskError::ModelNotFound {
                model: model.to_string(),
                message: service_message(&body),
            });
        }

        if !status.is_success() {
            return Err(AskError::ServiceError {
                status: status.as_u16(),
                message: service_message(&body),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        Ok(parsed.message.content)
    }
}
