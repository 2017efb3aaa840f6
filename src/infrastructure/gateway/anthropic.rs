//! Anthropic/Claude gateway 어댑터.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use crate::application::ports::ModelGateway;
use crate::domain::generation::{GenerationSettings, ModelReply, TokenUsage};

use super::GatewaySpec;
use super::api_runner::{build_api_client, collect_text, require_content, send_json};

const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicGateway {
    client: Client,
    base_url: String,
    model: String,
    credential: String,
}

impl AnthropicGateway {
    pub fn new(spec: GatewaySpec) -> Self {
        Self {
            client: build_api_client(spec.timeout_secs),
            base_url: spec.base_url,
            model: spec.model,
            credential: spec.credential,
        }
    }
}

pub(super) fn build_payload(model: &str, prompt: &str, settings: &GenerationSettings) -> Value {
    json!({
        "model": model,
        "max_tokens": settings.max_output_tokens,
        "temperature": settings.temperature,
        "messages": [
            { "role": "user", "content": prompt }
        ]
    })
}

pub(super) fn parse_reply(name: &str, response: &Value) -> Result<ModelReply> {
    let content = response
        .get("content")
        .map(collect_text)
        .unwrap_or_default();

    Ok(ModelReply {
        content: require_content(name, content)?,
        usage: TokenUsage {
            prompt_tokens: response
                .pointer("/usage/input_tokens")
                .and_then(Value::as_u64),
            completion_tokens: response
                .pointer("/usage/output_tokens")
                .and_then(Value::as_u64),
            total_tokens: None,
        }
        .with_derived_total(),
    })
}

#[async_trait]
impl ModelGateway for AnthropicGateway {
    fn name(&self) -> &'static str {
        "Claude"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str, settings: &GenerationSettings) -> Result<ModelReply> {
        let endpoint = format!("{}/messages", self.base_url.trim_end_matches('/'));
        let payload = build_payload(&self.model, prompt, settings);

        // Anthropic API key(sk-ant-...)와 OAuth/Bearer 토큰을 모두 수용한다.
        let request = if self.credential.starts_with("sk-ant-") {
            self.client
                .post(endpoint)
                .header("x-api-key", &self.credential)
        } else {
            self.client.post(endpoint).bearer_auth(&self.credential)
        };
        let request = request
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&payload);

        let response = send_json(self.name(), "request Anthropic API", request).await?;
        parse_reply(self.name(), &response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_uses_single_user_message() {
        let settings = GenerationSettings {
            max_output_tokens: 321,
            temperature: 0.5,
        };
        let payload = build_payload("claude-3-7-sonnet-latest", "tacos", &settings);

        assert_eq!(payload["max_tokens"], 321);
        assert_eq!(payload["temperature"], 0.5);
        assert_eq!(payload["messages"][0]["role"], "user");
        assert_eq!(payload["messages"][0]["content"], "tacos");
    }

    #[test]
    fn reply_joins_text_blocks_and_sums_usage() {
        let response = json!({
            "content": [
                { "type": "text", "text": "Ingredients: 2 eggs\n" },
                { "type": "text", "text": "Step 1: Whisk (1 minute)" }
            ],
            "usage": { "input_tokens": 12, "output_tokens": 30 }
        });
        let reply = parse_reply("Claude", &response).unwrap();

        assert_eq!(reply.content, "Ingredients: 2 eggs\nStep 1: Whisk (1 minute)");
        assert_eq!(reply.usage.total_tokens, Some(42));
    }
}
