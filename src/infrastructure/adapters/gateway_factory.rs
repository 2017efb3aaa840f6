//! Gateway 팩토리 포트 구현 어댑터.

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::{GatewayFactory, ModelGateway};
use crate::infrastructure::gateway;

/// 설정된 HTTP 백엔드(Gemini/Anthropic)를 생성하는 팩토리.
pub struct HttpGatewayFactory;

impl GatewayFactory for HttpGatewayFactory {
    fn build(&self, config: &Config) -> Result<Box<dyn ModelGateway>> {
        gateway::build_gateway(config)
    }
}
