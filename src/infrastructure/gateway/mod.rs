//! 외부 텍스트 생성 서비스 게이트웨이 모음.
//! 백엔드별 HTTP 요청/응답 형식을 `ModelGateway` 포트 뒤로 숨긴다.

pub mod anthropic;
mod api_runner;
pub mod gemini;

use anyhow::{Result, bail};
use tracing::debug;

use crate::application::config::{Config, GatewayBackend};
use crate::application::ports::ModelGateway;
use crate::infrastructure::config::resolve_gateway_credential;

pub use anthropic::AnthropicGateway;
pub use gemini::GeminiGateway;

/// 게이트웨이 생성에 필요한 해석 완료 값.
#[derive(Debug, Clone)]
pub struct GatewaySpec {
    pub base_url: String,
    pub model: String,
    pub credential: String,
    pub timeout_secs: u64,
}

/// 설정에 지정된 백엔드의 게이트웨이를 만든다.
/// 자격 증명이 없으면 호출 전에 실패한다.
pub fn build_gateway(config: &Config) -> Result<Box<dyn ModelGateway>> {
    let backend = config.backend()?;
    let resolution = resolve_gateway_credential(&config.gateway, backend);
    let Some(credential) = resolution.credential else {
        bail!(
            "{} API key is not configured ({}). Set gateway.api_key or gateway.api_key_env",
            backend.code(),
            resolution.source.unwrap_or_default()
        );
    };

    let spec = GatewaySpec {
        base_url: config
            .gateway
            .api_base
            .clone()
            .unwrap_or_else(|| backend.default_api_base().to_string()),
        model: config
            .gateway
            .model
            .clone()
            .unwrap_or_else(|| backend.default_model().to_string()),
        credential,
        timeout_secs: config.timeout_secs(),
    };
    debug!(backend = backend.code(), model = %spec.model, "building gateway");

    let gateway: Box<dyn ModelGateway> = match backend {
        GatewayBackend::Gemini => Box::new(GeminiGateway::new(spec)),
        GatewayBackend::Anthropic => Box::new(AnthropicGateway::new(spec)),
    };
    Ok(gateway)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::GatewayConfig;

    #[test]
    fn inline_key_selects_configured_backend() {
        let config = Config {
            gateway: GatewayConfig {
                backend: Some("anthropic".to_string()),
                api_key: Some("sk-ant-test".to_string()),
                model: Some("claude-custom".to_string()),
                ..GatewayConfig::default()
            },
            ..Config::default()
        };
        let gateway = build_gateway(&config).unwrap();

        assert_eq!(gateway.name(), "Claude");
        assert_eq!(gateway.model(), "claude-custom");
    }

    #[test]
    fn missing_key_fails_before_any_call() {
        let config = Config {
            gateway: GatewayConfig {
                api_key_env: Some("CHEFPILOT_TEST_UNSET_KEY_VAR".to_string()),
                ..GatewayConfig::default()
            },
            ..Config::default()
        };
        let err = build_gateway(&config).err().unwrap();
        assert!(err.to_string().contains("CHEFPILOT_TEST_UNSET_KEY_VAR"));
    }
}
