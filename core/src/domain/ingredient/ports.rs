use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, ingredient::entities::IngredientTag};

/// Read access to the ingredient taxonomy. Tags are managed elsewhere and never created here.
#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync + 'static {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<IngredientTag>, CoreError>> + Send;
}

pub trait IngredientService: Send + Sync {
    fn get_ingredients(&self) -> impl Future<Output = Result<Vec<IngredientTag>, CoreError>> + Send;
}
