//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use std::path::PathBuf;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::domain::generation::GenerationSettings;
use crate::domain::shopping::SHOPPING_LIST_FILENAME;

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 전역 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// 텍스트 생성 백엔드 설정
    #[serde(default)]
    pub gateway: GatewayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DefaultsConfig {
    /// 응답 최대 토큰 수
    pub max_output_tokens: Option<u32>,
    /// 샘플링 temperature
    pub temperature: Option<f32>,
    /// 장보기 목록 저장 경로
    pub shopping_list_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GatewayConfig {
    /// gemini | anthropic (기본 gemini)
    pub backend: Option<String>,
    /// 모델 식별자(선택)
    pub model: Option<String>,
    /// API 베이스 URL(선택)
    pub api_base: Option<String>,
    /// 인증 키/토큰(직접값)
    pub api_key: Option<String>,
    /// 인증 키/토큰을 읽을 환경변수 이름
    pub api_key_env: Option<String>,
    /// HTTP 요청 타임아웃(초)
    pub timeout_secs: Option<u64>,
}

/// 지원하는 텍스트 생성 백엔드.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayBackend {
    Gemini,
    Anthropic,
}

impl GatewayBackend {
    /// 설정 문자열을 백엔드로 변환한다(미지정은 gemini).
    pub fn from_config(value: Option<&str>) -> Result<Self> {
        let Some(raw) = value else {
            return Ok(Self::Gemini);
        };

        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "gemini" | "google" => Ok(Self::Gemini),
            "anthropic" | "claude" => Ok(Self::Anthropic),
            other => bail!("unknown gateway backend '{other}' (expected gemini or anthropic)"),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Anthropic => "anthropic",
        }
    }

    /// 설정에 api_key/api_key_env가 모두 없을 때 읽는 환경변수.
    pub fn default_api_key_env(self) -> &'static str {
        match self {
            Self::Gemini => "GEMINI_API_KEY",
            Self::Anthropic => "ANTHROPIC_API_KEY",
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            Self::Gemini => "gemini-1.5-pro-001",
            Self::Anthropic => "claude-3-7-sonnet-latest",
        }
    }

    pub fn default_api_base(self) -> &'static str {
        match self {
            Self::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            Self::Anthropic => "https://api.anthropic.com/v1",
        }
    }
}

impl Config {
    pub fn generation_settings(&self) -> GenerationSettings {
        let fallback = GenerationSettings::default();
        GenerationSettings {
            max_output_tokens: self
                .defaults
                .max_output_tokens
                .unwrap_or(fallback.max_output_tokens),
            temperature: self.defaults.temperature.unwrap_or(fallback.temperature),
        }
    }

    pub fn shopping_list_path(&self) -> PathBuf {
        self.defaults
            .shopping_list_path
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(SHOPPING_LIST_FILENAME))
    }

    pub fn backend(&self) -> Result<GatewayBackend> {
        GatewayBackend::from_config(self.gateway.backend.as_deref())
    }

    pub fn timeout_secs(&self) -> u64 {
        self.gateway.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub(crate) fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);
        self.gateway.merge_from(other.gateway);
    }
}

impl DefaultsConfig {
    pub(crate) fn merge_from(&mut self, other: DefaultsConfig) {
        if other.max_output_tokens.is_some() {
            self.max_output_tokens = other.max_output_tokens;
        }
        if other.temperature.is_some() {
            self.temperature = other.temperature;
        }
        if other.shopping_list_path.is_some() {
            self.shopping_list_path = other.shopping_list_path;
        }
    }
}

impl GatewayConfig {
    pub(crate) fn merge_from(&mut self, other: GatewayConfig) {
        // 백엔드가 바뀌면 이전 백엔드 전용 값은 버린다.
        if other.backend.is_some() && other.backend != self.backend {
            *self = GatewayConfig {
                backend: other.backend,
                ..GatewayConfig::default()
            };
        }
        if other.model.is_some() {
            self.model = other.model;
        }
        if other.api_base.is_some() {
            self.api_base = other.api_base;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.api_key_env.is_some() {
            self.api_key_env = other.api_key_env;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
    }
}
