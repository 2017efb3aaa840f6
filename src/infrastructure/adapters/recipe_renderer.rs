//! 조리 단계 렌더링 포트 구현 어댑터.

use crate::application::ports::RecipeRenderer;
use crate::domain::recipe::StepRecord;
use crate::infrastructure::render;

pub struct MarkdownRecipeRenderer;

impl RecipeRenderer for MarkdownRecipeRenderer {
    fn render_steps(&self, steps: &[StepRecord]) -> String {
        render::render_steps_markdown(steps)
    }
}
