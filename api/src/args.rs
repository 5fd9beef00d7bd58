use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use grocerykit_core::domain::common::{
    CatalogConfig, GenerationConfig, GroceryKitConfig, LLMConfig, SettingsConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "grocerykit", version, about = "AI recipe suggestions from a grocery checklist")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub access: AccessArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/grocerykit`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3333"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "server-disable-metrics", env = "SERVER_DISABLE_METRICS")]
    pub disable_metrics: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(
        long = "openai-base-url",
        env = "OPENAI_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub base_url: String,

    #[arg(long = "openai-model", env = "OPENAI_MODEL", default_value = "gpt-4")]
    pub model: String,

    #[arg(long = "openai-max-tokens", env = "OPENAI_MAX_TOKENS", default_value_t = 500)]
    pub max_tokens: u32,

    #[arg(long = "openai-timeout-secs", env = "OPENAI_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,

    /// Share one upstream call between identical submissions that are in flight together.
    #[arg(long = "coalesce-requests", env = "COALESCE_REQUESTS")]
    pub coalesce_requests: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SettingsArgs {
    /// Initial API key. A key saved through the settings page takes precedence.
    #[arg(long = "openai-api-key", env = "GMK_OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long = "settings-file", env = "SETTINGS_FILE")]
    pub settings_file: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CatalogArgs {
    #[arg(long = "ingredients-file", env = "INGREDIENTS_FILE")]
    pub ingredients_file: Option<PathBuf>,
}

/// Who may trigger a paid upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenerationAccess {
    /// Anyone, authenticated or not.
    Open,
    /// Only callers presenting the access token.
    Gated,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AccessArgs {
    #[arg(
        long = "generation-access",
        env = "GENERATION_ACCESS",
        value_enum,
        default_value_t = GenerationAccess::Open
    )]
    pub generation_access: GenerationAccess,

    #[arg(long = "access-token", env = "GENERATION_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Bearer token for the settings page. The page is disabled when unset.
    #[arg(long = "admin-token", env = "ADMIN_TOKEN", hide_env_values = true)]
    pub admin_token: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for GroceryKitConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                base_url: args.llm.base_url,
                model: args.llm.model,
                max_tokens: args.llm.max_tokens,
                timeout_secs: args.llm.timeout_secs,
            },
            settings: SettingsConfig {
                openai_api_key: args.settings.openai_api_key,
                settings_file: args.settings.settings_file,
            },
            catalog: CatalogConfig {
                ingredients_file: args.catalog.ingredients_file,
            },
            generation: GenerationConfig {
                coalesce_requests: args.llm.coalesce_requests,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["grocerykit"]);

        assert_eq!(args.llm.model, "gpt-4");
        assert_eq!(args.llm.max_tokens, 500);
        assert_eq!(args.llm.timeout_secs, 60);
        assert!(!args.llm.coalesce_requests);
        assert_eq!(args.access.generation_access, GenerationAccess::Open);
    }

    #[test]
    fn test_gated_access_flag() {
        let args = Args::parse_from([
            "grocerykit",
            "--generation-access",
            "gated",
            "--access-token",
            "t0ken",
            "--coalesce-requests",
        ]);

        assert_eq!(args.access.generation_access, GenerationAccess::Gated);
        assert_eq!(args.access.access_token.as_deref(), Some("t0ken"));

        let config = GroceryKitConfig::from(args);
        assert!(config.generation.coalesce_requests);
    }
}
