//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::usecases::generate_recipe::GenerateOptions;
use crate::domain::recipe::{
    DietaryTag, GenerationMode, RecipeRequest, Region, Season, SuggestionRequest,
    parse_optional_choice,
};

#[derive(Debug, Parser)]
#[command(name = "chefpilot")]
#[command(about = "AI recipe generator with shopping lists and step timers")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print only the model output (no progress sections)
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Answer yes to every confirmation (e.g. start all step timers)
    #[arg(long, short, global = true)]
    yes: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a recipe from a dish name or a list of ingredients
    Recipe(RecipeArgs),
    /// Suggest three recipes for a season and regional cuisine
    Suggest(SuggestArgs),
    /// Show effective merged config and credential source
    Config,
}

#[derive(Debug, Args)]
struct PreferenceArgs {
    /// Dietary preference, repeatable (vegan, vegetarian, gluten-free, dairy-free, keto, low-carb)
    #[arg(long = "diet", value_name = "TAG")]
    diet: Vec<DietaryTag>,

    /// Allergens to exclude, passed to the model verbatim (e.g. "peanuts, shellfish")
    #[arg(long, value_name = "TEXT")]
    exclude: Option<String>,
}

#[derive(Debug, Args)]
struct RecipeArgs {
    /// Dish name, or comma-separated ingredients with --by-ingredients
    input: String,

    /// Treat INPUT as the ingredients you have
    #[arg(long)]
    by_ingredients: bool,

    #[command(flatten)]
    preferences: PreferenceArgs,

    /// Season for seasonal ingredients (none, spring, summer, autumn, winter)
    #[arg(long, value_name = "SEASON")]
    season: Option<String>,

    /// Regional cuisine (none, italian, mexican, indian, japanese, ...)
    #[arg(long, value_name = "REGION")]
    region: Option<String>,

    /// Save the shopping list as plain text (default: shopping_list.txt)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    shopping_list: Option<Option<PathBuf>>,

    /// Offer a countdown timer for every step with an estimated time
    #[arg(long)]
    timers: bool,
}

#[derive(Debug, Args)]
struct SuggestArgs {
    /// Season (spring, summer, autumn, winter)
    #[arg(long)]
    season: Season,

    /// Regional cuisine (italian, mexican, indian, japanese, ...)
    #[arg(long)]
    region: Region,

    #[command(flatten)]
    preferences: PreferenceArgs,
}

pub enum CliAction {
    InspectConfig,
    Recipe(GenerateOptions),
    Suggest(SuggestionRequest),
}

/// 파싱된 실행 동작 + 전역 출력/확인 옵션.
pub struct CliInvocation {
    pub action: CliAction,
    pub quiet: bool,
    pub auto_confirm: bool,
}

impl Cli {
    /// 프로세스 인자를 파싱한다. 입력 검증 실패는 메시지로 돌려준다.
    pub fn parse_action() -> Result<CliInvocation, String> {
        Cli::parse().into_invocation()
    }

    pub fn into_invocation(self) -> Result<CliInvocation, String> {
        let action = match self.command {
            Commands::Config => CliAction::InspectConfig,
            Commands::Recipe(args) => CliAction::Recipe(args.into_options()?),
            Commands::Suggest(args) => CliAction::Suggest(SuggestionRequest::new(
                args.season,
                args.region,
                args.preferences.diet,
                args.preferences.exclude.as_deref(),
            )),
        };

        Ok(CliInvocation {
            action,
            quiet: self.quiet,
            auto_confirm: self.yes,
        })
    }
}

impl RecipeArgs {
    fn into_options(self) -> Result<GenerateOptions, String> {
        let mode = if self.by_ingredients {
            GenerationMode::ByIngredients
        } else {
            GenerationMode::ByName
        };
        let season = self
            .season
            .as_deref()
            .map(parse_optional_choice::<Season>)
            .transpose()
            .map_err(|e| e.to_string())?
            .flatten();
        let region = self
            .region
            .as_deref()
            .map(parse_optional_choice::<Region>)
            .transpose()
            .map_err(|e| e.to_string())?
            .flatten();

        let request = RecipeRequest::new(mode, &self.input)
            .map_err(|e| e.to_string())?
            .with_dietary(self.preferences.diet)
            .with_allergens(self.preferences.exclude.as_deref())
            .with_season(season)
            .with_region(region);

        Ok(GenerateOptions {
            request,
            export_shopping_list: self.shopping_list.is_some(),
            shopping_list_path: self.shopping_list.flatten(),
            offer_timers: self.timers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(args: &[&str]) -> Result<CliInvocation, String> {
        let mut argv = vec!["chefpilot"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv)
            .map_err(|e| e.to_string())?
            .into_invocation()
    }

    fn recipe_options(args: &[&str]) -> GenerateOptions {
        match invocation(args).unwrap().action {
            CliAction::Recipe(options) => options,
            _ => panic!("expected recipe action"),
        }
    }

    #[test]
    fn recipe_with_all_preferences() {
        let options = recipe_options(&[
            "recipe",
            "flour, sugar, eggs",
            "--by-ingredients",
            "--diet",
            "vegan",
            "--diet",
            "gluten-free",
            "--exclude",
            "peanuts",
            "--season",
            "winter",
            "--region",
            "none",
        ]);
        let request = &options.request;

        assert_eq!(request.mode(), GenerationMode::ByIngredients);
        assert_eq!(request.input(), "flour, sugar, eggs");
        assert_eq!(request.dietary(), &[DietaryTag::Vegan, DietaryTag::GlutenFree]);
        assert_eq!(request.allergens(), Some("peanuts"));
        assert_eq!(request.season(), Some(Season::Winter));
        assert_eq!(request.region(), None);
        assert!(!options.export_shopping_list);
    }

    #[test]
    fn shopping_list_flag_with_and_without_path() {
        let default_path = recipe_options(&["recipe", "Apple Pie", "--shopping-list"]);
        assert!(default_path.export_shopping_list);
        assert_eq!(default_path.shopping_list_path, None);

        let custom = recipe_options(&["recipe", "Apple Pie", "--shopping-list", "out/list.txt"]);
        assert!(custom.export_shopping_list);
        assert_eq!(custom.shopping_list_path, Some(PathBuf::from("out/list.txt")));
    }

    #[test]
    fn blank_input_is_a_user_error() {
        let err = invocation(&["recipe", "   "]).err().unwrap();
        assert_eq!(err, "please enter some input first");
    }

    #[test]
    fn unknown_region_is_rejected() {
        let err = invocation(&["recipe", "Soup", "--region", "atlantis"]).err().unwrap();
        assert!(err.contains("unknown region 'atlantis'"));
    }

    #[test]
    fn suggest_requires_season_and_region() {
        assert!(invocation(&["suggest", "--season", "summer"]).is_err());

        let parsed = invocation(&[
            "suggest", "--season", "summer", "--region", "thai", "--diet", "keto", "--yes",
        ])
        .unwrap();
        assert!(parsed.auto_confirm);
        match parsed.action {
            CliAction::Suggest(request) => {
                assert_eq!(request.season, Season::Summer);
                assert_eq!(request.region, Region::Thai);
                assert_eq!(request.dietary, vec![DietaryTag::Keto]);
            }
            _ => panic!("expected suggest action"),
        }
    }

    #[test]
    fn config_subcommand() {
        let parsed = invocation(&["config", "--quiet"]).unwrap();
        assert!(parsed.quiet);
        assert!(matches!(parsed.action, CliAction::InspectConfig));
    }
}
