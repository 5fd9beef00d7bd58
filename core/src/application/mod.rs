use tracing::info;

use crate::{
    domain::{
        common::{GroceryKitConfig, entities::app_errors::CoreError, services::Service},
        settings::entities::OPENAI_API_KEY_SETTING,
    },
    infrastructure::{
        ingredient::JsonIngredientCatalog, llm::OpenAiLLMClient, settings::KeyValueSettingsStore,
    },
};

pub type GroceryKitService = Service<JsonIngredientCatalog, KeyValueSettingsStore, OpenAiLLMClient>;

pub async fn create_service(config: GroceryKitConfig) -> Result<GroceryKitService, CoreError> {
    let catalog = match &config.catalog.ingredients_file {
        Some(path) => JsonIngredientCatalog::from_path(path).await?,
        None => {
            info!("No ingredient catalog configured, the checklist will be empty");
            JsonIngredientCatalog::empty()
        }
    };

    let settings = match &config.settings.settings_file {
        Some(path) => KeyValueSettingsStore::open(path).await?,
        None => KeyValueSettingsStore::in_memory(),
    };
    if let Some(api_key) = config.settings.openai_api_key.clone() {
        settings.seed(OPENAI_API_KEY_SETTING, api_key).await;
    }

    let llm_client = OpenAiLLMClient::new(&config.llm)?;

    Ok(Service::new(catalog, settings, llm_client)
        .with_request_coalescing(config.generation.coalesce_requests))
}
