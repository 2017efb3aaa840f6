//! 레시피 생성 전체 흐름 유스케이스.
//! 프롬프트 구성 → 모델 호출 → 단계/재료 추출 → 출력/내보내기/타이머 순으로 진행한다.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::application::ports::{
    ConfigRepository, GatewayFactory, RecipeRenderer, Reporter, ShoppingListExporter, StepTimer,
    UserConfirmer,
};
use crate::domain::extract::extract_recipe;
use crate::domain::policy::build_recipe_prompt;
use crate::domain::recipe::{ExtractedRecipe, GenerationMode, RecipeRequest};
use crate::domain::shopping::render_shopping_list;
use crate::domain::timer::timer_label;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub request: RecipeRequest,
    /// 장보기 목록을 파일로 저장할지 여부
    pub export_shopping_list: bool,
    /// 저장 경로(미지정 시 설정값/기본 파일명)
    pub shopping_list_path: Option<PathBuf>,
    /// 소요 시간이 있는 단계마다 타이머를 제안할지 여부
    pub offer_timers: bool,
}

impl GenerateOptions {
    pub fn new(request: RecipeRequest) -> Self {
        Self {
            request,
            export_shopping_list: false,
            shopping_list_path: None,
            offer_timers: false,
        }
    }
}

/// 생성 결과(원문 + 추출 결과 + 저장된 장보기 목록 경로).
#[derive(Debug, Clone)]
pub struct GeneratedRecipe {
    pub text: String,
    pub extracted: ExtractedRecipe,
    pub shopping_list_path: Option<PathBuf>,
}

pub struct GenerateRecipeUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub gateway_factory: &'a dyn GatewayFactory,
    pub renderer: &'a dyn RecipeRenderer,
    pub exporter: &'a dyn ShoppingListExporter,
    pub timer: &'a dyn StepTimer,
    pub confirmer: &'a dyn UserConfirmer,
    pub reporter: &'a dyn Reporter,
}

impl<'a> GenerateRecipeUseCase<'a> {
    /// 모델 호출이 실패하면 부분 결과 없이 오류를 그대로 반환한다.
    pub async fn execute(&self, options: GenerateOptions) -> Result<GeneratedRecipe> {
        let request = &options.request;
        self.report_request(request);

        let config = self.config_repo.load()?;
        let gateway = self.gateway_factory.build(&config)?;
        let settings = config.generation_settings();
        self.reporter
            .kv("Backend", &format!("{} ({})", gateway.name(), gateway.model()));

        let prompt = build_recipe_prompt(request);
        debug!(prompt_len = prompt.len(), "built recipe prompt");

        self.reporter.status("Gateway", "generating recipe...");
        let started = Instant::now();
        let reply = gateway
            .generate(&prompt, &settings)
            .await
            .context("failed to generate recipe")?;
        let elapsed = started.elapsed().as_secs_f64();
        info!(
            backend = gateway.name(),
            elapsed_secs = elapsed,
            usage = %reply.usage.summary(),
            "recipe generated"
        );

        self.reporter.section("Your Recipe");
        self.reporter.raw(reply.content.trim());

        let extracted = extract_recipe(&reply.content);
        debug!(
            steps = extracted.steps.len(),
            ingredients = extracted.ingredients.len(),
            "extracted recipe structure"
        );

        if !extracted.steps.is_empty() {
            self.reporter.section("Cooking Steps");
            self.reporter.detail(&self.renderer.render_steps(&extracted.steps));
        }

        let mut saved_path = None;
        if !extracted.ingredients.is_empty() {
            self.reporter.section("Shopping List");
            let shopping_list = render_shopping_list(&extracted.ingredients);
            self.reporter.raw(shopping_list.trim_end());

            if options.export_shopping_list {
                let path = options
                    .shopping_list_path
                    .clone()
                    .unwrap_or_else(|| config.shopping_list_path());
                self.exporter.export(&path, &shopping_list)?;
                self.reporter.kv("Saved", &path.display().to_string());
                saved_path = Some(path);
            }
        }

        if options.offer_timers {
            self.offer_timers(&extracted).await?;
        }

        self.reporter.status(
            "Done",
            &format!("Recipe generated in {elapsed:.2} seconds"),
        );

        Ok(GeneratedRecipe {
            text: reply.content,
            extracted,
            shopping_list_path: saved_path,
        })
    }

    fn report_request(&self, request: &RecipeRequest) {
        self.reporter.section("Request");
        self.reporter.kv(
            "Mode",
            match request.mode() {
                GenerationMode::ByName => "by dish name",
                GenerationMode::ByIngredients => "by ingredients",
            },
        );
        self.reporter.kv("Input", request.input());
        if !request.dietary().is_empty() {
            let tags: Vec<&str> = request.dietary().iter().map(|t| t.label()).collect();
            self.reporter.kv("Dietary", &tags.join(", "));
        }
        if let Some(allergens) = request.allergens() {
            self.reporter.kv("Exclude", allergens);
        }
        if let Some(season) = request.season() {
            self.reporter.kv("Season", season.label());
        }
        if let Some(region) = request.region() {
            self.reporter.kv("Region", region.label());
        }
    }

    async fn offer_timers(&self, extracted: &ExtractedRecipe) -> Result<()> {
        let timed: Vec<_> = extracted.steps.iter().filter(|s| s.is_timed()).collect();
        if timed.is_empty() {
            return Ok(());
        }

        self.reporter.section("Timers");
        for step in timed {
            let label = timer_label(&step.text, step.minutes);
            if !self.confirmer.confirm(&label)? {
                continue;
            }
            self.timer.run(step.minutes).await?;
        }
        Ok(())
    }
}
