//! chefpilot library root.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use application::usecases::generate_recipe::{GenerateOptions, GeneratedRecipe};
use domain::recipe::SuggestionRequest;
use interface::composition::AppComposition;

/// 라이브러리 직접 호출용 레시피 생성 함수.
/// 진행 섹션/단계 안내는 생략하지만 모델 원문과 장보기 목록은 stdout에 출력된다.
/// 호출자를 카운트다운 동안 막지 않도록 단계 타이머는 항상 끈다.
pub async fn generate_recipe(options: GenerateOptions) -> Result<GeneratedRecipe> {
    let composition = AppComposition::new(true, false);
    composition
        .generate_recipe_usecase()
        .execute(without_timers(options))
        .await
}

fn without_timers(options: GenerateOptions) -> GenerateOptions {
    GenerateOptions {
        offer_timers: false,
        ..options
    }
}

/// 라이브러리 직접 호출용 추천 함수. 추천 원문은 stdout에도 출력된다.
pub async fn suggest_recipes(request: SuggestionRequest) -> Result<String> {
    let composition = AppComposition::new(true, false);
    composition.suggest_recipes_usecase().execute(request).await
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    let composition = AppComposition::default();
    composition.inspect_config_usecase().execute()
}
