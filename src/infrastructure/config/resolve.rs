//! 게이트웨이 자격 증명을 실제 런타임 값으로 해석하는 유틸리티.
//!
//! - 환경변수 접근은 인프라 계층에서만 수행한다.

use std::env;

use crate::application::config::{GatewayBackend, GatewayConfig};

/// API key 해석 결과. `source`는 진단 출력용 출처 라벨이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialResolution {
    pub credential: Option<String>,
    pub source: Option<String>,
}

/// inline → api_key_env → 백엔드 기본 환경변수 순으로 API key를 찾는다.
pub fn resolve_gateway_credential(
    cfg: &GatewayConfig,
    backend: GatewayBackend,
) -> CredentialResolution {
    resolve_with(cfg, backend, |name| env::var(name).ok())
}

fn resolve_with(
    cfg: &GatewayConfig,
    backend: GatewayBackend,
    lookup: impl Fn(&str) -> Option<String>,
) -> CredentialResolution {
    if let Some(key) = cfg.api_key.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        return CredentialResolution {
            credential: Some(key.to_string()),
            source: Some("inline".to_string()),
        };
    }

    let env_name = cfg
        .api_key_env
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| backend.default_api_key_env());

    match lookup(env_name).map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => CredentialResolution {
            credential: Some(v),
            source: Some(format!("env:{env_name}")),
        },
        _ => CredentialResolution {
            credential: None,
            source: Some(format!("env:{env_name} (missing)")),
        },
    }
}
