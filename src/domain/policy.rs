//! 도메인 정책(프롬프트 구성 규칙).
//!
//! 절(clause)은 항상 기본 → 식단 → 알레르기 → 계절 → 지역 → 형식 지시문 순서로 붙는다.

use crate::domain::recipe::{DietaryTag, GenerationMode, RecipeRequest, SuggestionRequest};

/// 추출기가 기대하는 응답 형태를 모델에 요구하는 고정 지시문.
pub const FORMAT_DIRECTIVE: &str = "Include dish name, a clearly labeled ingredients list with quantities (e.g., 'Ingredients: 2 cups flour, 1 tsp salt'), detailed nutritional information (calories, macronutrients, and micronutrients per serving), and clear, sequential step-by-step cooking instructions with estimated time for each step (e.g., 'Step 1: Preheat oven to 350°F (2 minutes)').";

/// 추천 요청에 붙는 고정 지시문.
pub const SUGGESTION_DIRECTIVE: &str =
    "For each recipe, include dish name, a brief description, and a short list of key seasonal ingredients.";

/// 레시피 생성 프롬프트를 만든다.
pub fn build_recipe_prompt(request: &RecipeRequest) -> String {
    let mut out = match request.mode() {
        GenerationMode::ByName => format!("Provide a detailed recipe for {}.", request.input()),
        GenerationMode::ByIngredients => format!(
            "Create a detailed recipe using the following ingredients: {}.",
            request.input()
        ),
    };

    if !request.dietary().is_empty() {
        out.push_str(&format!(
            " The recipe must adhere to the following dietary preferences: {}.",
            join_tags(request.dietary())
        ));
    }
    if let Some(allergens) = request.allergens() {
        out.push_str(&format!(" Exclude the following allergens: {allergens}."));
    }
    if let Some(season) = request.season() {
        out.push_str(&format!(" Use ingredients that are in season during {season}."));
    }
    if let Some(region) = request.region() {
        out.push_str(&format!(" The recipe should reflect the cuisine of {region}."));
    }

    out.push(' ');
    out.push_str(FORMAT_DIRECTIVE);
    out
}

/// 계절/지역 추천(3개) 프롬프트를 만든다.
pub fn build_suggestion_prompt(request: &SuggestionRequest) -> String {
    let mut out = format!(
        "Suggest 3 recipes that use ingredients in season during {} and reflect the cuisine of {}.",
        request.season, request.region
    );

    if !request.dietary.is_empty() {
        out.push_str(&format!(
            " The recipes must adhere to the following dietary preferences: {}.",
            join_tags(&request.dietary)
        ));
    }
    if let Some(allergens) = &request.allergens {
        out.push_str(&format!(" Exclude the following allergens: {allergens}."));
    }

    out.push(' ');
    out.push_str(SUGGESTION_DIRECTIVE);
    out
}

fn join_tags(tags: &[DietaryTag]) -> String {
    tags.iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(", ")
}
