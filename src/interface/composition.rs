//! 애플리케이션 조립(composition root) 모듈.

use crate::application::ports::UserConfirmer;
use crate::application::usecases::generate_recipe::GenerateRecipeUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::suggest_recipes::SuggestRecipesUseCase;
use crate::infrastructure::adapters::{
    AutoConfirmer, ConsoleReporter, FileShoppingListExporter, HttpGatewayFactory,
    JsonConfigRepository, MarkdownRecipeRenderer, StdinConfirmer, TerminalStepTimer,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    gateway_factory: HttpGatewayFactory,
    renderer: MarkdownRecipeRenderer,
    exporter: FileShoppingListExporter,
    timer: TerminalStepTimer,
    reporter: ConsoleReporter,
    confirmer: Box<dyn UserConfirmer>,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl AppComposition {
    /// 출력 모드와 자동 확인 여부를 받아 실행 조합을 생성한다.
    pub fn new(quiet: bool, auto_confirm: bool) -> Self {
        let confirmer: Box<dyn UserConfirmer> = if auto_confirm {
            Box::new(AutoConfirmer)
        } else {
            Box::new(StdinConfirmer)
        };
        Self::with_confirmer(quiet, confirmer)
    }

    /// 확인 어댑터를 외부에서 주입한다.
    pub fn with_confirmer(quiet: bool, confirmer: Box<dyn UserConfirmer>) -> Self {
        Self {
            config_repo: JsonConfigRepository,
            gateway_factory: HttpGatewayFactory,
            renderer: MarkdownRecipeRenderer,
            exporter: FileShoppingListExporter,
            timer: TerminalStepTimer::default(),
            reporter: ConsoleReporter::new(quiet),
            confirmer,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 레시피 생성 유스케이스를 생성한다.
    pub fn generate_recipe_usecase(&self) -> GenerateRecipeUseCase<'_> {
        GenerateRecipeUseCase {
            config_repo: &self.config_repo,
            gateway_factory: &self.gateway_factory,
            renderer: &self.renderer,
            exporter: &self.exporter,
            timer: &self.timer,
            confirmer: self.confirmer.as_ref(),
            reporter: &self.reporter,
        }
    }

    /// 계절/지역 추천 유스케이스를 생성한다.
    pub fn suggest_recipes_usecase(&self) -> SuggestRecipesUseCase<'_> {
        SuggestRecipesUseCase {
            config_repo: &self.config_repo,
            gateway_factory: &self.gateway_factory,
            reporter: &self.reporter,
        }
    }
}
