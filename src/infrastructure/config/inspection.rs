//! 적용 설정 진단(inspection) 뷰 모델.

use anyhow::Result;
use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::resolve_gateway_credential;
use crate::application::config::DefaultsConfig;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub defaults: DefaultsConfig,
    pub effective_defaults: EffectiveDefaults,
    pub gateway: GatewayInspection,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveDefaults {
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub shopping_list_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GatewayInspection {
    pub backend: String,
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
    pub api_key_source: Option<String>,
    pub api_key_resolved: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Result<Self> {
        let config = &loaded.config;
        let backend = config.backend()?;
        let settings = config.generation_settings();
        let credential = resolve_gateway_credential(&config.gateway, backend);

        Ok(Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            defaults: config.defaults.clone(),
            effective_defaults: EffectiveDefaults {
                max_output_tokens: settings.max_output_tokens,
                temperature: settings.temperature,
                shopping_list_path: config.shopping_list_path().display().to_string(),
            },
            gateway: GatewayInspection {
                backend: backend.code().to_string(),
                model: config
                    .gateway
                    .model
                    .clone()
                    .unwrap_or_else(|| backend.default_model().to_string()),
                api_base: config
                    .gateway
                    .api_base
                    .clone()
                    .unwrap_or_else(|| backend.default_api_base().to_string()),
                timeout_secs: config.timeout_secs(),
                api_key_resolved: credential.credential.is_some(),
                api_key_source: credential.source,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::application::config::{Config, GatewayConfig};

    fn loaded(config: Config) -> LoadedConfig {
        LoadedConfig {
            config,
            searched_paths: vec![PathBuf::from("/etc/chefpilot/config.json")],
            loaded_paths: Vec::new(),
        }
    }

    #[test]
    fn inline_credential_is_never_serialized() {
        let config = Config {
            gateway: GatewayConfig {
                api_key: Some("AIza-top-secret".to_string()),
                ..GatewayConfig::default()
            },
            ..Config::default()
        };
        let inspection = ConfigInspection::from_loaded(loaded(config)).unwrap();
        let json = serde_json::to_string(&inspection).unwrap();

        assert!(inspection.gateway.api_key_resolved);
        assert_eq!(inspection.gateway.api_key_source.as_deref(), Some("inline"));
        assert!(!json.contains("top-secret"));
    }

    #[test]
    fn effective_values_fill_in_backend_defaults() {
        let config = Config {
            gateway: GatewayConfig {
                backend: Some("anthropic".to_string()),
                api_key: Some("sk-ant-x".to_string()),
                ..GatewayConfig::default()
            },
            ..Config::default()
        };
        let inspection = ConfigInspection::from_loaded(loaded(config)).unwrap();

        assert_eq!(inspection.gateway.backend, "anthropic");
        assert_eq!(inspection.gateway.api_base, "https://api.anthropic.com/v1");
        assert_eq!(inspection.effective_defaults.max_output_tokens, 1200);
        assert_eq!(inspection.effective_defaults.shopping_list_path, "shopping_list.txt");
    }

    #[test]
    fn unknown_backend_fails_inspection() {
        let config = Config {
            gateway: GatewayConfig {
                backend: Some("mystery".to_string()),
                ..GatewayConfig::default()
            },
            ..Config::default()
        };
        assert!(ConfigInspection::from_loaded(loaded(config)).is_err());
    }
}
