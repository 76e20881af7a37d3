//! # Text Generation Payloads (`common::openai::models`)
//!
//! File: cli/src/common/openai/models.rs
//!
//! Request and response shapes for the `chat/completions` and
//! `images/generations` endpoints. Requests are serialized with camelCase
//! field names; responses keep the snake_case wire names the endpoint sends.
//!
use serde::{Deserialize, Serialize};

/// Role tag used for every message the dialog sends.
pub const USER_ROLE: &str = "user";

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: USER_ROLE.to_string(),
            content: content.into(),
        }
    }
}

/// Request body for `POST chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
}

impl CompletionRequest {
    /// A request carrying one user message.
    pub fn single_user_message(
        model: impl Into<String>,
        temperature: f64,
        content: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::user(content)],
            temperature,
        }
    }
}

/// Response body of `POST chat/completions`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    pub model: String,
    #[serde(default)]
    pub usage: Usage,
    pub choices: Vec<Choice>,
}

impl CompletionResponse {
    /// Content of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Choice {
    pub message: Message,
    #[serde(default)]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub index: u32,
}

/// Token accounting reported by the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Request body for `POST images/generations`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageGenerationRequest {
    pub prompt: String,
    /// Number of images to generate.
    pub n: u8,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageGenerationResponse {
    #[serde(default)]
    pub created: i64,
    pub data: Vec<ImageData>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageData {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_completion_request_serializes_camel_case() {
        let request = CompletionRequest::single_user_message("gpt-3.5-turbo", 0.7, "Tell me some joke");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "gpt-3.5-turbo",
                "messages": [{ "role": "user", "content": "Tell me some joke" }],
                "temperature": 0.7
            })
        );
    }

    #[test]
    fn test_completion_response_parses_sample_payload() {
        let body = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1677652288,
            "model": "gpt-3.5-turbo-0613",
            "usage": { "prompt_tokens": 9, "completion_tokens": 12, "total_tokens": 21 },
            "choices": [{
                "message": { "role": "assistant", "content": "Why did the crab never share?" },
                "finish_reason": "stop",
                "index": 0
            }]
        }"#;
        let response: CompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.id, "chatcmpl-123");
        assert_eq!(response.object, "chat.completion");
        assert_eq!(response.usage.total_tokens, 21);
        assert_eq!(response.choices[0].finish_reason.as_deref(), Some("stop"));
        assert_eq!(response.first_content(), Some("Why did the crab never share?"));
    }

    #[test]
    fn test_request_messages_read_back_as_response_messages() {
        // The request's message shape is the same one the response carries.
        let request = CompletionRequest::single_user_message("gpt-3.5-turbo", 0.7, "Tell me some joke");
        let messages = serde_json::to_value(&request).unwrap()["messages"].clone();
        let body = json!({
            "id": "x",
            "model": request.model,
            "choices": [{ "message": messages[0], "index": 0 }]
        });
        let response: CompletionResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.choices[0].message, request.messages[0]);
        assert_eq!(response.usage, Usage::default());
    }

    #[test]
    fn test_response_without_choices_has_no_content() {
        let response: CompletionResponse =
            serde_json::from_str(r#"{"id":"x","model":"m","choices":[]}"#).unwrap();
        assert_eq!(response.first_content(), None);
    }

    #[test]
    fn test_image_request_and_response() {
        let request = ImageGenerationRequest {
            prompt: "a calm lake".into(),
            n: 2,
            size: "512x512".into(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "prompt": "a calm lake", "n": 2, "size": "512x512" })
        );

        let response: ImageGenerationResponse = serde_json::from_str(
            r#"{"created": 1, "data": [{"url": "https://img.test/1.png"}]}"#,
        )
        .unwrap();
        assert_eq!(response.data[0].url, "https://img.test/1.png");
    }
}
