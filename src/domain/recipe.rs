//! 레시피 도메인 엔티티/값 객체.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// 사용자 입력 검증 실패(모델 호출 전에 거절된다).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecipeInputError {
    #[error("please enter some input first")]
    EmptyInput,
}

/// 고정 어휘 선택값(식단/계절/지역) 파싱 실패.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// 선택값 비교용 정규화: 소문자 + 공백/밑줄을 하이픈으로.
fn normalize_choice(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace([' ', '_'], "-")
}

/// 선택형 값 파싱. `none`(대소문자 무시)은 미선택으로 본다.
pub fn parse_optional_choice<T>(raw: &str) -> Result<Option<T>, ParseChoiceError>
where
    T: FromStr<Err = ParseChoiceError>,
{
    if raw.trim().eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    raw.parse().map(Some)
}

/// 고정 어휘 enum에 FromStr/Display/ALL을 붙인다.
macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// 프롬프트/화면 표기용 라벨.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ParseChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize_choice(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize_choice(v.label()) == wanted)
                    .ok_or_else(|| ParseChoiceError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.label())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

choice_enum!(
    /// 식단 선호 태그.
    DietaryTag, "dietary tag", {
        Vegan => "Vegan",
        Vegetarian => "Vegetarian",
        GlutenFree => "Gluten-Free",
        DairyFree => "Dairy-Free",
        Keto => "Keto",
        LowCarb => "Low-Carb",
    }
);

choice_enum!(
    /// 제철 재료 기준 계절. 미선택은 `Option::None`으로 표현한다.
    Season, "season", {
        Spring => "Spring",
        Summer => "Summer",
        Autumn => "Autumn",
        Winter => "Winter",
    }
);

choice_enum!(
    /// 지역 요리 스타일. 미선택은 `Option::None`으로 표현한다.
    Region, "region", {
        Italian => "Italian",
        Mexican => "Mexican",
        Indian => "Indian",
        Japanese => "Japanese",
        Mediterranean => "Mediterranean",
        American => "American",
        Pakistani => "Pakistani",
        Thai => "Thai",
        Chinese => "Chinese",
        French => "French",
        Brazilian => "Brazilian",
    }
);

/// 주 입력값 해석 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationMode {
    #[default]
    ByName,
    ByIngredients,
}

/// 레시피 생성 요청. 생성 후에는 변경되지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeRequest {
    mode: GenerationMode,
    input: String,
    dietary: Vec<DietaryTag>,
    allergens: Option<String>,
    season: Option<Season>,
    region: Option<Region>,
}

impl RecipeRequest {
    /// 주 입력값을 검증해 요청을 만든다. 공백뿐인 입력은 거절한다.
    pub fn new(mode: GenerationMode, input: &str) -> Result<Self, RecipeInputError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(RecipeInputError::EmptyInput);
        }
        Ok(Self {
            mode,
            input: input.to_string(),
            dietary: Vec::new(),
            allergens: None,
            season: None,
            region: None,
        })
    }

    /// 선택 순서를 유지하고 중복 태그는 무시한다.
    pub fn with_dietary(mut self, tags: impl IntoIterator<Item = DietaryTag>) -> Self {
        self.dietary = dedup_tags(tags);
        self
    }

    /// 알레르기 제외 문구는 그대로 전달한다(빈 문자열은 미지정).
    pub fn with_allergens(mut self, allergens: Option<&str>) -> Self {
        self.allergens = allergens.filter(|v| !v.is_empty()).map(str::to_string);
        self
    }

    pub fn with_season(mut self, season: Option<Season>) -> Self {
        self.season = season;
        self
    }

    pub fn with_region(mut self, region: Option<Region>) -> Self {
        self.region = region;
        self
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn dietary(&self) -> &[DietaryTag] {
        &self.dietary
    }

    pub fn allergens(&self) -> Option<&str> {
        self.allergens.as_deref()
    }

    pub fn season(&self) -> Option<Season> {
        self.season
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }
}

/// 계절/지역 기반 추천 요청. 추천 결과에는 추출을 적용하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRequest {
    pub season: Season,
    pub region: Region,
    pub dietary: Vec<DietaryTag>,
    pub allergens: Option<String>,
}

impl SuggestionRequest {
    pub fn new(
        season: Season,
        region: Region,
        dietary: impl IntoIterator<Item = DietaryTag>,
        allergens: Option<&str>,
    ) -> Self {
        Self {
            season,
            region,
            dietary: dedup_tags(dietary),
            allergens: allergens.filter(|v| !v.is_empty()).map(str::to_string),
        }
    }
}

/// 단계 설명에 붙는 장식용 이미지 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepImage {
    Oven,
    Mixing,
    Cutting,
    Cooking,
    Baking,
    Generic,
}

impl StepImage {
    pub fn url(self) -> &'static str {
        match self {
            Self::Oven => "https://images.unsplash.com/photo-1600585154340-be6161a56a0c",
            Self::Mixing => "https://images.unsplash.com/photo-1600585154526-990dced4db0d",
            Self::Cutting => "https://images.unsplash.com/photo-1586201375761-83865001e31c",
            Self::Cooking => "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38",
            Self::Baking => "https://images.unsplash.com/photo-1576618148400-f54bed99fcfd",
            Self::Generic => "https://images.unsplash.com/photo-1546069901-ba9599a7e63c",
        }
    }
}

/// 모델 응답에서 추출한 단일 조리 단계.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    /// `Step N:`부터 소요 시간 괄호까지의 원문
    pub text: String,
    /// 분 단위 소요 시간(초 단위 표기는 소수)
    pub minutes: f64,
    pub image: StepImage,
}

impl StepRecord {
    /// 타이머를 제공할 단계인지 여부.
    pub fn is_timed(&self) -> bool {
        self.minutes > 0.0
    }
}

/// 한 번의 추출 결과(단계 목록 + 재료 목록).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedRecipe {
    pub steps: Vec<StepRecord>,
    pub ingredients: Vec<String>,
}

impl ExtractedRecipe {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.ingredients.is_empty()
    }
}

fn dedup_tags(tags: impl IntoIterator<Item = DietaryTag>) -> Vec<DietaryTag> {
    let mut out = Vec::new();
    for tag in tags {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}
