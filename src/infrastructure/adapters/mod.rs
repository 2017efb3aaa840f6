//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod gateway_factory;
mod recipe_renderer;
mod reporter;
mod shopping_list_exporter;
mod step_timer;
mod user_confirmer;

pub use config_repository::JsonConfigRepository;
pub use gateway_factory::HttpGatewayFactory;
pub use recipe_renderer::MarkdownRecipeRenderer;
pub use reporter::ConsoleReporter;
pub use shopping_list_exporter::FileShoppingListExporter;
pub use step_timer::TerminalStepTimer;
pub use user_confirmer::{AutoConfirmer, StdinConfirmer};
