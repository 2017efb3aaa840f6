//! `chefpilot` 바이너리 진입점.

use chefpilot::interface::cli::{Cli, CliAction};
use chefpilot::interface::composition::AppComposition;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = chefpilot::infrastructure::config::load_dotenv() {
        tracing::warn!("{err:#}");
    }

    let invocation = match Cli::parse_action() {
        Ok(invocation) => invocation,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    let composition = AppComposition::new(invocation.quiet, invocation.auto_confirm);

    let result = match invocation.action {
        CliAction::InspectConfig => composition
            .inspect_config_usecase()
            .execute()
            .map(|json| println!("{json}")),
        CliAction::Recipe(options) => composition
            .generate_recipe_usecase()
            .execute(options)
            .await
            .map(|_| ()),
        CliAction::Suggest(request) => composition
            .suggest_recipes_usecase()
            .execute(request)
            .await
            .map(|_| ()),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
