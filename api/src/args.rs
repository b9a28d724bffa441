use clap::{Args as ClapArgs, Parser};
use foodlens_core::domain::common::{
    DEFAULT_ANALYSIS_MODEL, DEFAULT_MAPS_MODEL, DEFAULT_VISION_MODEL, FoodLensConfig, LLMConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "foodlens-api", version, about = "FoodLens HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_ANALYSIS_MODEL", default_value = DEFAULT_ANALYSIS_MODEL)]
    pub analysis_model: String,

    #[arg(long, env = "GEMINI_VISION_MODEL", default_value = DEFAULT_VISION_MODEL)]
    pub vision_model: String,

    #[arg(long, env = "GEMINI_MAPS_MODEL", default_value = DEFAULT_MAPS_MODEL)]
    pub maps_model: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for FoodLensConfig {
    fn from(args: Args) -> Self {
        FoodLensConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                analysis_model: args.llm.analysis_model,
                vision_model: args.llm.vision_model,
                maps_model: args.llm.maps_model,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_into_config() {
        let args = Args::try_parse_from([
            "foodlens-api",
            "--gemini-api-key",
            "secret",
            "--maps-model",
            "gemini-maps-test",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();

        assert_eq!(args.server.allowed_origins.len(), 2);

        let config = FoodLensConfig::from(args);
        assert_eq!(config.llm.gemini_api_key, "secret");
        assert_eq!(config.llm.maps_model, "gemini-maps-test");
    }
}
