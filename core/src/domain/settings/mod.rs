pub mod entities;
pub mod ports;
pub mod services;

pub use entities::{Settings, UpdateSettingsInput};
pub use ports::{SettingsRepository, SettingsService};
