//! 설정 파일 탐색/병합 결과를 확인하는 유스케이스.

use anyhow::{Context, Result};

use crate::application::ports::ConfigRepository;

/// 병합된 설정과 자격 증명 출처를 JSON으로 보여준다(자격 증명 값은 노출하지 않는다).
pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> InspectConfigUseCase<'a> {
    /// 알 수 없는 백엔드 이름은 점검 단계에서 바로 오류로 알린다.
    pub fn execute(&self) -> Result<String> {
        let inspection = self.config_repo.inspect()?;
        serde_json::to_string_pretty(&inspection).context("failed to render config inspection")
    }
}
