//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;
use crate::domain::generation::{GenerationSettings, ModelReply};
use crate::domain::recipe::StepRecord;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    /// 탐색/로딩 경로와 적용값을 담은 진단 정보.
    fn inspect(&self) -> Result<serde_json::Value>;
}

/// 외부 텍스트 생성 서비스 호출 포트.
/// 한 번 호출해 전체 텍스트를 받거나 실패한다(재시도/스트리밍 없음).
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// 사용자 표시 이름
    fn name(&self) -> &'static str;
    /// 호출 대상 모델 식별자
    fn model(&self) -> &str;
    async fn generate(&self, prompt: &str, settings: &GenerationSettings) -> Result<ModelReply>;
}

/// 설정에 맞는 게이트웨이를 생성하는 팩토리 포트.
pub trait GatewayFactory: Send + Sync {
    fn build(&self, config: &Config) -> Result<Box<dyn ModelGateway>>;
}

/// 조리 단계 목록 렌더링 포트.
pub trait RecipeRenderer: Send + Sync {
    fn render_steps(&self, steps: &[StepRecord]) -> String;
}

/// 장보기 목록 내보내기 포트.
pub trait ShoppingListExporter: Send + Sync {
    fn export(&self, path: &Path, content: &str) -> Result<()>;
}

/// 단계별 카운트다운 표시 포트.
#[async_trait]
pub trait StepTimer: Send + Sync {
    async fn run(&self, minutes: f64) -> Result<()>;
}

/// 사용자 확인(y/n) 입력 포트.
pub trait UserConfirmer: Send + Sync {
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    /// 보조 본문(조리 단계 안내 등). quiet 모드에서는 생략된다.
    fn detail(&self, text: &str);
    /// 핵심 결과(모델 원문/장보기 목록). 항상 출력된다.
    fn raw(&self, line: &str);
}
