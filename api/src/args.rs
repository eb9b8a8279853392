use std::time::Duration;

use clap::Parser;
use pantry_chef_core::domain::common::{
    DEFAULT_IMAGE_MODEL, DEFAULT_LLM_BASE_URL, DEFAULT_TEXT_MODEL, LLMConfig, PantryChefConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "pantry-chef-api", version, about = "Pantry Chef recipe generation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/functions/v1`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated list of origins, `*` allows any origin.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "llm-api-key", env = "LLM_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long = "llm-base-url", env = "LLM_BASE_URL", default_value = DEFAULT_LLM_BASE_URL)]
    pub base_url: String,

    #[arg(long = "llm-text-model", env = "LLM_TEXT_MODEL", default_value = DEFAULT_TEXT_MODEL)]
    pub text_model: String,

    #[arg(long = "llm-image-model", env = "LLM_IMAGE_MODEL", default_value = DEFAULT_IMAGE_MODEL)]
    pub image_model: String,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 120)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for PantryChefConfig {
    fn from(args: Args) -> Self {
        PantryChefConfig {
            llm: LLMConfig {
                api_key: args.llm.api_key,
                base_url: args.llm.base_url,
                text_model: args.llm.text_model,
                image_model: args.llm.image_model,
                request_timeout: Duration::from_secs(args.llm.timeout_secs),
            },
        }
    }
}
