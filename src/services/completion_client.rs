use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A single assembled completion call.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// The consumed slice of the completion API: one call, one raw text reply.
/// No retry; a failed call fails that scenario's generation outright.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> AppResult<String>;
}

#[derive(Serialize)]
struct ChatCompletionPayload<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionReply {
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionReplyMessage,
}

#[derive(Deserialize)]
struct ChatCompletionReplyMessage {
    content: String,
}

/// Speaks the OpenAI-compatible `POST {base}/chat/completions` contract.
pub struct OpenAiCompletionClient {
    http: reqwest::Client,
    api_base: String,
    api_key: SecretString,
}

impl OpenAiCompletionClient {
    pub fn new(api_base: impl Into<String>, api_key: SecretString) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> AppResult<String> {
        let payload = ChatCompletionPayload {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(self.api_key.expose_secret())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::CompletionFailure(format!(
                "completion API returned {}: {}",
                status, body
            )));
        }

        let reply: ChatCompletionReply = response
            .json()
            .await
            .map_err(|e| AppError::CompletionFailure(format!("malformed API reply: {}", e)))?;

        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::CompletionFailure("completion API reply contained no choices".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_message_roles_serialize_lowercase() {
        let message = ChatMessage::system("sys");
        let json = serde_json::to_value(&message).expect("message should serialize");
        assert_eq!(json["role"], "system");

        let message = ChatMessage::user("usr");
        let json = serde_json::to_value(&message).expect("message should serialize");
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn completion_reply_parses_first_choice() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#;
        let reply: ChatCompletionReply =
            serde_json::from_str(json).expect("reply should deserialize");
        assert_eq!(reply.choices[0].message.content, "hello");
    }

    #[test]
    fn completion_payload_shape() {
        let payload = ChatCompletionPayload {
            model: "test-model",
            messages: &[ChatMessage::user("hi")],
            temperature: 0.7,
            max_tokens: 100,
        };
        let json = serde_json::to_value(&payload).expect("payload should serialize");
        assert_eq!(json["model"], "test-model");
        assert_eq!(json["max_tokens"], 100);
        assert_eq!(json["messages"][0]["content"], "hi");
    }
}
