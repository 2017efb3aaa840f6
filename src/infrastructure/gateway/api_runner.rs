//! Gateway HTTP API 호출 공용 유틸리티.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::debug;

/// 게이트웨이 호출용 HTTP 클라이언트를 생성한다.
/// 코어 로직은 별도 타임아웃을 두지 않고 이 클라이언트의 타임아웃을 그대로 따른다.
pub fn build_api_client(timeout_secs: u64) -> Client {
    // TLS 설정 실패 등 예외 상황에서는 기본 클라이언트로 폴백한다.
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// JSON 응답을 기대하는 요청을 전송하고 실패/파싱 오류를 표준화한다.
pub async fn send_json(gateway_name: &str, action: &str, request: RequestBuilder) -> Result<Value> {
    let response = request
        .send()
        .await
        .with_context(|| format!("{gateway_name}: failed to {action}"))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .with_context(|| format!("{gateway_name}: failed to read {action} response body"))?;
    debug!(gateway = gateway_name, %status, body_len = body.len(), "received response");

    if !status.is_success() {
        bail!("{gateway_name}: {action} failed ({status}): {body}");
    }

    serde_json::from_str(&body)
        .with_context(|| format!("{gateway_name}: invalid JSON response while {action}"))
}

/// API 응답 구조에서 텍스트를 재귀적으로 추출한다.
pub fn collect_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.to_string(),
        Value::Array(items) => items
            .iter()
            .map(collect_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(""),
        Value::Object(map) => {
            if let Some(text) = map.get("text").and_then(Value::as_str) {
                return text.to_string();
            }
            if let Some(parts) = map.get("parts") {
                let text = collect_text(parts);
                if !text.is_empty() {
                    return text;
                }
            }
            if let Some(content) = map.get("content") {
                return collect_text(content);
            }
            String::new()
        }
        _ => String::new(),
    }
}

/// 응답 본문이 비어 있으면 실패로 처리한다.
pub fn require_content(gateway_name: &str, raw: String) -> Result<String> {
    if raw.trim().is_empty() {
        bail!("{gateway_name}: empty response content");
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn collects_nested_text_parts_in_order() {
        let value = json!({
            "parts": [
                { "text": "Ingredients: rice" },
                { "text": "\nStep 1: Rinse (1 minute)" }
            ]
        });
        assert_eq!(
            collect_text(&value),
            "Ingredients: rice\nStep 1: Rinse (1 minute)"
        );
    }

    #[test]
    fn non_text_values_collect_nothing() {
        assert_eq!(collect_text(&json!({"role": "model"})), "");
        assert_eq!(collect_text(&json!(42)), "");
    }

    #[test]
    fn blank_content_is_an_error() {
        let err = require_content("Gemini", "  \n".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "Gemini: empty response content");
        assert_eq!(require_content("Gemini", "ok".into()).unwrap(), "ok");
    }
}
