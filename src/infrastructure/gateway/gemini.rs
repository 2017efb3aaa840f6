//! Google Gemini gateway 어댑터.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use url::Url;

use crate::application::ports::ModelGateway;
use crate::domain::generation::{GenerationSettings, ModelReply, TokenUsage};

use super::GatewaySpec;
use super::api_runner::{build_api_client, collect_text, require_content, send_json};

pub struct GeminiGateway {
    client: Client,
    base_url: String,
    model: String,
    credential: String,
}

impl GeminiGateway {
    pub fn new(spec: GatewaySpec) -> Self {
        Self {
            client: build_api_client(spec.timeout_secs),
            base_url: spec.base_url,
            model: spec.model,
            credential: spec.credential,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

pub(super) fn build_payload(prompt: &str, settings: &GenerationSettings) -> Value {
    json!({
        "contents": [
            {
                "parts": [
                    { "text": prompt }
                ]
            }
        ],
        "generationConfig": {
            "maxOutputTokens": settings.max_output_tokens,
            "temperature": settings.temperature
        }
    })
}

pub(super) fn parse_reply(name: &str, response: &Value) -> Result<ModelReply> {
    let content = response
        .pointer("/candidates/0/content")
        .map(collect_text)
        .unwrap_or_default();

    Ok(ModelReply {
        content: require_content(name, content)?,
        usage: TokenUsage {
            prompt_tokens: response
                .pointer("/usageMetadata/promptTokenCount")
                .and_then(Value::as_u64),
            completion_tokens: response
                .pointer("/usageMetadata/candidatesTokenCount")
                .and_then(Value::as_u64),
            total_tokens: response
                .pointer("/usageMetadata/totalTokenCount")
                .and_then(Value::as_u64),
        }
        .with_derived_total(),
    })
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str, settings: &GenerationSettings) -> Result<ModelReply> {
        let payload = build_payload(prompt, settings);

        // Gemini는 API key(query) 또는 OAuth(Bearer) 방식 모두 허용한다.
        let request = if self.credential.starts_with("AIza") {
            let mut url = Url::parse(&self.endpoint())?;
            url.query_pairs_mut().append_pair("key", &self.credential);
            self.client.post(url).json(&payload)
        } else {
            self.client
                .post(self.endpoint())
                .bearer_auth(&self.credential)
                .json(&payload)
        };

        let response = send_json(self.name(), "request Gemini API", request).await?;
        parse_reply(self.name(), &response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_generation_config() {
        let payload = build_payload("make soup", &GenerationSettings::default());
        assert_eq!(
            payload.pointer("/contents/0/parts/0/text").and_then(Value::as_str),
            Some("make soup")
        );
        assert_eq!(
            payload
                .pointer("/generationConfig/maxOutputTokens")
                .and_then(Value::as_u64),
            Some(1200)
        );
        assert!(payload.pointer("/generationConfig/temperature").is_some());
    }

    #[test]
    fn reply_text_and_usage_are_read() {
        let response = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "Step 1: Boil (5 minutes)" } ], "role": "model" } }
            ],
            "usageMetadata": { "promptTokenCount": 40, "candidatesTokenCount": 60 }
        });
        let reply = parse_reply("Gemini", &response).unwrap();

        assert_eq!(reply.content, "Step 1: Boil (5 minutes)");
        assert_eq!(reply.usage.total_tokens, Some(100));
    }

    #[test]
    fn missing_candidates_is_a_failure() {
        let err = parse_reply("Gemini", &json!({ "promptFeedback": {} })).unwrap_err();
        assert!(err.to_string().contains("empty response content"));
    }

    #[test]
    fn endpoint_joins_base_and_model() {
        let gateway = GeminiGateway::new(GatewaySpec {
            base_url: "https://example.test/v1beta/".to_string(),
            model: "gemini-1.5-pro-001".to_string(),
            credential: "AIza-x".to_string(),
            timeout_secs: 5,
        });
        assert_eq!(
            gateway.endpoint(),
            "https://example.test/v1beta/models/gemini-1.5-pro-001:generateContent"
        );
    }
}
