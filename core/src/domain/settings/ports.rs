use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    settings::entities::{Settings, UpdateSettingsInput},
};

/// Key-value store holding the API key. Read on every generation request.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsRepository: Send + Sync + 'static {
    fn get_api_key(&self) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn set_api_key(&self, api_key: String) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait SettingsService: Send + Sync {
    fn get_settings(&self) -> impl Future<Output = Result<Settings, CoreError>> + Send;

    fn update_settings(
        &self,
        input: UpdateSettingsInput,
    ) -> impl Future<Output = Result<Settings, CoreError>> + Send;
}
