//! 설정 저장소 포트 구현 어댑터.

use anyhow::Result;

use crate::application::ports::ConfigRepository;
use crate::infrastructure::config;

/// JSON 파일 기반 설정 저장소 어댑터.
pub struct JsonConfigRepository;

impl ConfigRepository for JsonConfigRepository {
    fn load(&self) -> Result<config::Config> {
        config::load()
    }

    fn inspect(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(config::inspect()?)?)
    }
}
