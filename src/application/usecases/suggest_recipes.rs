//! 계절/지역 기반 레시피 추천 유스케이스.

use anyhow::{Context, Result};
use tracing::info;

use crate::application::ports::{ConfigRepository, GatewayFactory, Reporter};
use crate::domain::policy::build_suggestion_prompt;
use crate::domain::recipe::SuggestionRequest;

/// 추천 결과는 추출 없이 원문 그대로 보여준다.
pub struct SuggestRecipesUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub gateway_factory: &'a dyn GatewayFactory,
    pub reporter: &'a dyn Reporter,
}

impl<'a> SuggestRecipesUseCase<'a> {
    pub async fn execute(&self, request: SuggestionRequest) -> Result<String> {
        self.reporter.section("Suggestions");
        self.reporter.kv("Season", request.season.label());
        self.reporter.kv("Region", request.region.label());

        let config = self.config_repo.load()?;
        let gateway = self.gateway_factory.build(&config)?;
        let prompt = build_suggestion_prompt(&request);

        self.reporter.status("Gateway", "generating suggestions...");
        let reply = gateway
            .generate(&prompt, &config.generation_settings())
            .await
            .context("failed to generate suggestions")?;
        info!(backend = gateway.name(), usage = %reply.usage.summary(), "suggestions generated");

        self.reporter.section("Recipe Suggestions");
        self.reporter.raw(reply.content.trim());
        Ok(reply.content)
    }
}
