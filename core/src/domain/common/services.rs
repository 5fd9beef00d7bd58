use std::sync::Arc;

use crate::domain::{
    ingredient::ports::IngredientRepository,
    recipe::{coalesce::RequestCoalescer, ports::LLMClient},
    settings::ports::SettingsRepository,
};

pub struct Service<I, S, L>
where
    I: IngredientRepository,
    S: SettingsRepository,
    L: LLMClient,
{
    pub(crate) ingredient_repository: Arc<I>,
    pub(crate) settings_repository: Arc<S>,
    pub(crate) llm_client: Arc<L>,
    pub(crate) coalescer: Option<Arc<RequestCoalescer>>,
}

impl<I, S, L> Service<I, S, L>
where
    I: IngredientRepository,
    S: SettingsRepository,
    L: LLMClient,
{
    pub fn new(ingredient_repository: I, settings_repository: S, llm_client: L) -> Self {
        Self {
            ingredient_repository: Arc::new(ingredient_repository),
            settings_repository: Arc::new(settings_repository),
            llm_client: Arc::new(llm_client),
            coalescer: None,
        }
    }

    /// Enables sharing of in-flight upstream calls between identical submissions.
    pub fn with_request_coalescing(mut self, enabled: bool) -> Self {
        self.coalescer = enabled.then(|| Arc::new(RequestCoalescer::default()));
        self
    }
}

impl<I, S, L> Clone for Service<I, S, L>
where
    I: IngredientRepository,
    S: SettingsRepository,
    L: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            ingredient_repository: Arc::clone(&self.ingredient_repository),
            settings_repository: Arc::clone(&self.settings_repository),
            llm_client: Arc::clone(&self.llm_client),
            coalescer: self.coalescer.clone(),
        }
    }
}
