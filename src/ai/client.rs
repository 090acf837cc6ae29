//! Groq chat-completion client

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::AiConfig;
use crate::credentials::ApiKey;

/// A single-shot chat completion: system prompt + user text in, raw text out.
///
/// Every failure (transport, auth, provider) is reported as one opaque error.
pub trait CompletionBackend {
    async fn complete(&self, api_key: &ApiKey, system_prompt: &str, user_text: &str)
    -> Result<String>;

    /// Model identifier shown to the user
    fn model(&self) -> &str;
}

/// Fixed request parameters for every completion
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Request `response_format = {"type": "json_object"}`
    pub json_mode: bool,
}

impl From<&AiConfig> for CompletionSettings {
    fn from(config: &AiConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            json_mode: config.json_mode,
        }
    }
}

/// Groq API client for chat completions (OpenAI-compatible wire format)
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    settings: CompletionSettings,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl GroqClient {
    /// Create a new client; no request timeout beyond the transport default
    pub fn new(settings: CompletionSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    fn build_request<'a>(&'a self, system_prompt: &'a str, user_text: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.settings.model,
            messages: [
                Message {
                    role: "system",
                    content: system_prompt,
                },
                Message {
                    role: "user",
                    content: user_text,
                },
            ],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
            response_format: self.settings.json_mode.then_some(ResponseFormat {
                kind: "json_object",
            }),
        }
    }
}

impl CompletionBackend for GroqClient {
    async fn complete(
        &self,
        api_key: &ApiKey,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String> {
        let request = self.build_request(system_prompt, user_text);

        tracing::debug!(
            model = %self.settings.model,
            endpoint = %self.settings.endpoint,
            input_chars = user_text.chars().count(),
            "Sending completion request"
        );

        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(api_key.expose())
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Groq")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Groq API error ({}): {}", status, error_text);
        }

        let body = response
            .text()
            .await
            .context("Failed to read Groq response")?;

        extract_content(&body)
    }

    fn model(&self) -> &str {
        &self.settings.model
    }
}

/// Pull the first choice's message content out of a chat-completion body
fn extract_content(body: &str) -> Result<String> {
    let chat_response: ChatResponse =
        serde_json::from_str(body).context("Failed to parse Groq response")?;

    chat_response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| anyhow::anyhow!("No response content from model"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings(json_mode: bool) -> CompletionSettings {
        CompletionSettings {
            json_mode,
            ..CompletionSettings::from(&AiConfig::default())
        }
    }

    #[test]
    fn test_request_wire_shape() {
        let client = GroqClient::new(settings(true));
        let request = client.build_request("SYSTEM", "Dear Team, please send the Q3 invoice.");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "model": "llama-3.1-8b-instant",
                "messages": [
                    {"role": "system", "content": "SYSTEM"},
                    {"role": "user", "content": "Dear Team, please send the Q3 invoice."}
                ],
                "temperature": 0.7f32,
                "max_tokens": 1024,
                "response_format": {"type": "json_object"}
            })
        );
    }

    #[test]
    fn test_json_mode_off_omits_response_format() {
        let client = GroqClient::new(settings(false));
        let value = serde_json::to_value(client.build_request("s", "u")).unwrap();
        assert!(value.get("response_format").is_none());
    }

    #[test]
    fn test_user_text_forwarded_verbatim() {
        let client = GroqClient::new(settings(true));
        let text = "  \n  Hello there,\n\n  spaces kept  \n";
        let value = serde_json::to_value(client.build_request("s", text)).unwrap();
        assert_eq!(value["messages"][1]["content"], text);
    }

    #[test]
    fn test_extract_content_first_choice() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "{\"intent\":\"Offer\"}"}},
                {"index": 1, "message": {"role": "assistant", "content": "second"}}
            ]
        }"#;
        assert_eq!(extract_content(body).unwrap(), r#"{"intent":"Offer"}"#);
    }

    #[test]
    fn test_extract_content_no_choices() {
        let err = extract_content(r#"{"choices": []}"#).unwrap_err();
        assert!(err.to_string().contains("No response content"));
    }

    #[test]
    fn test_extract_content_null_content() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        assert!(extract_content(body).is_err());
    }

    #[test]
    fn test_extract_content_malformed_body() {
        let err = extract_content("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(err.to_string().contains("Failed to parse Groq response"));
    }
}
