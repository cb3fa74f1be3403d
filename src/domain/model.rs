use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

impl ChatRequest {
    /// A one-turn conversation holding only the user's question.
    pub fn single_question(model: &str, question: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage::user(question)],
            stream: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    pub message: ChatMessage,
    #[serde(default)]
    pub done: Option<bool>,
}

/// Error body returned by the service, e.g. `{"error": "model 'x' not found"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceErrorBody {
    pub error: String,
}
