//! 모델 응답 텍스트에서 조리 단계/재료 목록을 best-effort로 추출한다.
//!
//! 정규식 엔진 없이 두 번의 독립적인 스캔으로 구현한다.
//! 매칭 실패는 오류가 아니며 빈 목록으로 귀결된다.

use crate::domain::recipe::{ExtractedRecipe, StepImage, StepRecord};

const STEP_WORD: &str = "Step ";
const INGREDIENTS_LABEL: &str = "Ingredients:";
const NUTRITION_MARKER: &str = "Nutritional Information";

/// 이미지 분류 키워드(앞쪽 그룹이 우선).
const IMAGE_RULES: &[(&[&str], StepImage)] = &[
    (&["preheat", "oven"], StepImage::Oven),
    (&["mix", "stir", "blend"], StepImage::Mixing),
    (&["chop", "cut", "slice"], StepImage::Cutting),
    (&["cook", "fry", "sauté"], StepImage::Cooking),
    (&["bake"], StepImage::Baking),
];

/// 단계 목록과 재료 목록을 함께 추출한다.
pub fn extract_recipe(text: &str) -> ExtractedRecipe {
    ExtractedRecipe {
        steps: extract_steps(text),
        ingredients: extract_ingredients(text),
    }
}

/// `Step N:` 마커부터 처음 등장하는 괄호 그룹까지를 한 단계로 잘라낸다.
///
/// 괄호 그룹은 다음 줄에 있어도 되며, 그 사이에 다른 `Step N:` 마커가 있으면
/// 그 마커까지 한 단계에 포함된다. 매칭 구간은 서로 겹치지 않는다.
pub fn extract_steps(text: &str) -> Vec<StepRecord> {
    let mut steps = Vec::new();
    let mut pos = 0;

    while let Some((start, marker_end)) = find_step_marker(text, pos, true) {
        // 이 마커 뒤에 괄호 그룹이 없으면 이후 마커에도 없다.
        let Some((open, close)) = find_duration_group(text, marker_end) else {
            break;
        };

        let step_text = &text[start..=close];
        steps.push(StepRecord {
            text: step_text.to_string(),
            minutes: parse_duration_minutes(&text[open..=close]),
            image: image_for_step(step_text),
        });
        pos = close + 1;
    }

    steps
}

/// 소요 시간 토큰(`(2 minutes)` 등)을 분 단위로 변환한다.
/// 단위 단어가 없거나 숫자가 없으면 0을 반환한다.
pub fn parse_duration_minutes(token: &str) -> f64 {
    let inner = token
        .trim_matches(|c: char| c == '(' || c == ')')
        .to_lowercase();

    if inner.contains("minute") {
        first_digit_run(&inner).unwrap_or(0.0)
    } else if inner.contains("second") {
        first_digit_run(&inner).map(|n| n / 60.0).unwrap_or(0.0)
    } else {
        0.0
    }
}

/// 단계 설명 키워드로 장식용 이미지를 고른다.
pub fn image_for_step(step_text: &str) -> StepImage {
    let lower = step_text.to_lowercase();
    IMAGE_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, image)| *image)
        .unwrap_or(StepImage::Generic)
}

/// 첫 `Ingredients:` 라벨 뒤부터 다음 섹션 마커 전까지를 재료 목록으로 본다.
///
/// 섹션 마커는 `Step N`(콜론 불필요) 또는 `Nutritional Information`이며
/// 둘 다 없으면 텍스트 끝까지 읽는다. 쉼표/줄바꿈으로 나눈 뒤 trim하고,
/// 영숫자가 없는 조각(`**`, `---` 등 장식)은 버린다.
pub fn extract_ingredients(text: &str) -> Vec<String> {
    let Some(label) = text.find(INGREDIENTS_LABEL) else {
        return Vec::new();
    };
    let body_start = label + INGREDIENTS_LABEL.len();

    let step_end = find_step_marker(text, body_start, false).map(|(start, _)| start);
    let nutrition_end = text[body_start..]
        .find(NUTRITION_MARKER)
        .map(|idx| body_start + idx);
    let body_end = match (step_end, nutrition_end) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => text.len(),
    };

    text[body_start..body_end]
        .split([',', '\n'])
        .map(str::trim)
        .filter(|item| item.chars().any(char::is_alphanumeric))
        .filter(|item| !item.eq_ignore_ascii_case(INGREDIENTS_LABEL))
        .map(str::to_string)
        .collect()
}

/// `from` 이후 첫 `Step <digits>` 마커를 찾는다.
/// 반환값은 (마커 시작, 마커 끝) 바이트 위치다.
fn find_step_marker(text: &str, from: usize, require_colon: bool) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut search = from;

    while let Some(rel) = text.get(search..)?.find(STEP_WORD) {
        let start = search + rel;
        let digits_start = start + STEP_WORD.len();
        let digits_end = bytes[digits_start..]
            .iter()
            .position(|b| !b.is_ascii_digit())
            .map(|n| digits_start + n)
            .unwrap_or(bytes.len());

        if digits_end > digits_start {
            if !require_colon {
                return Some((start, digits_end));
            }
            if bytes.get(digits_end) == Some(&b':') {
                return Some((start, digits_end + 1));
            }
        }
        search = start + 1;
    }

    None
}

/// `from` 이후 첫 `(`+비어있지 않은 내용+`)` 그룹 위치를 찾는다.
fn find_duration_group(text: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();

    for open in from..bytes.len() {
        if bytes[open] != b'(' {
            continue;
        }
        let close = open + 1 + bytes[open + 1..].iter().position(|&b| b == b')')?;
        if close > open + 1 {
            return Some((open, close));
        }
    }

    None
}

fn first_digit_run(s: &str) -> Option<f64> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let run: String = s[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    run.parse::<f64>().ok()
}
