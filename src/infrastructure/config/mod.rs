//! 사용자 설정(JSON) 로딩/병합 모듈.
//! 여러 경로의 설정을 우선순위대로 병합하고, 실행 진단용 정보를 함께 제공한다.

mod inspection;
mod loader;
mod resolve;

use anyhow::Result;

pub use crate::application::config::{
    Config, DefaultsConfig, GatewayBackend, GatewayConfig,
};
pub use inspection::{ConfigInspection, EffectiveDefaults, GatewayInspection};
pub use loader::{config_paths, load_dotenv};
pub use resolve::{CredentialResolution, resolve_gateway_credential};

/// 병합된 최종 설정을 로딩한다.
pub fn load() -> Result<Config> {
    Ok(loader::load_merged_config()?.config)
}

/// 디버깅/진단용 설정 정보를 구성한다.
pub fn inspect() -> Result<ConfigInspection> {
    let loaded = loader::load_merged_config()?;
    ConfigInspection::from_loaded(loaded)
}
