use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::services::llm::{CredentialSource, DEFAULT_TIMEOUT_SECONDS, ProviderConfig, ProviderKind};
use crate::utils::StringExt;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub ai: AiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

/// AI provider selection. Unset model, temperature and endpoint fall back to
/// the selected provider's defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub provider: ProviderKind,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub model_name: Option<String>,
    pub temperature: Option<f64>,
    pub endpoint: Option<String>,
    /// Request timeout in seconds (accepts "60s", "2m")
    #[serde(deserialize_with = "deserialize_duration_secs")]
    pub timeout_secs: u64,
}

impl AiConfig {
    pub fn provider_config(&self) -> ProviderConfig {
        let mut config = ProviderConfig::defaults_for(self.provider);
        if let Some(model) = &self.model_name {
            config.model_name = model.clone();
        }
        if let Some(temperature) = self.temperature {
            config.temperature = temperature;
        }
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        config.timeout_seconds = self.timeout_secs;
        config
    }

    pub fn credential_source(&self) -> CredentialSource {
        CredentialSource::env(&self.api_key_env)
    }
}

/// Command line arguments for configuration overrides
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "kaogang")]
#[command(version, about = "Kaogang - Civil-service exam syllabus service")]
pub struct CommandLineArgs {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Server host (overrides config file)
    #[arg(long, value_name = "HOST")]
    pub server_host: Option<String>,

    /// Server port (overrides config file)
    #[arg(long, value_name = "PORT")]
    pub server_port: Option<u16>,

    /// Logging level (overrides config file, e.g., "info,kaogang=debug")
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// AI provider: minimax or gemini
    #[arg(long, value_name = "PROVIDER")]
    pub ai_provider: Option<ProviderKind>,

    /// Model identifier (overrides the provider default)
    #[arg(long, value_name = "MODEL")]
    pub ai_model: Option<String>,

    /// Sampling temperature (overrides the provider default)
    #[arg(long, value_name = "TEMPERATURE")]
    pub ai_temperature: Option<f64>,

    /// Provider endpoint URL (overrides the provider default)
    #[arg(long, value_name = "URL")]
    pub ai_endpoint: Option<String>,

    /// Request timeout (e.g., "60", "30s", "2m")
    #[arg(long, value_name = "DURATION")]
    pub ai_timeout_secs: Option<String>,
}

impl Config {
    /// Load configuration with command line, environment variable, and file support
    ///
    /// Loading order (priority from highest to lowest):
    /// 1. Command line arguments
    /// 2. Environment variables (prefixed with APP_)
    /// 3. Configuration file (config.toml)
    /// 4. Default values
    pub fn load() -> Result<Self, anyhow::Error> {
        let cli_args = CommandLineArgs::parse();
        Self::load_with(&cli_args)
    }

    pub fn load_with(cli_args: &CommandLineArgs) -> Result<Self, anyhow::Error> {
        let config_path = cli_args.config.clone().or_else(Self::find_config_file);
        let mut config = if let Some(config_path) = config_path {
            Self::from_toml(&config_path)?
        } else {
            tracing::warn!("Configuration file not found, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.apply_cli_overrides(cli_args);
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - APP_SERVER_HOST: Server host (default: 0.0.0.0)
    /// - APP_SERVER_PORT: Server port (default: 8080)
    /// - APP_LOG_LEVEL: Logging level (e.g., "info,kaogang=debug")
    /// - APP_AI_PROVIDER: minimax or gemini (default: minimax)
    /// - APP_AI_API_KEY_ENV: Variable holding the API key (default: API_KEY)
    /// - APP_AI_MODEL, APP_AI_TEMPERATURE, APP_AI_ENDPOINT: Provider overrides
    /// - APP_AI_TIMEOUT_SECS: Request timeout (accepts "30s", "2m")
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("APP_SERVER_HOST") {
            self.server.host = host;
            tracing::info!("Override server.host from env: {}", self.server.host);
        }

        if let Ok(port) = std::env::var("APP_SERVER_PORT")
            && let Ok(port) = port.parse()
        {
            self.server.port = port;
            tracing::info!("Override server.port from env: {}", self.server.port);
        }

        if let Ok(level) = std::env::var("APP_LOG_LEVEL") {
            self.logging.level = level;
            tracing::info!("Override logging.level from env: {}", self.logging.level);
        }

        if let Ok(provider) = std::env::var("APP_AI_PROVIDER") {
            match provider.parse() {
                Ok(kind) => {
                    self.ai.provider = kind;
                    tracing::info!("Override ai.provider from env: {}", self.ai.provider);
                },
                Err(e) => tracing::warn!("Invalid APP_AI_PROVIDER: {} (keep {})", e, self.ai.provider),
            }
        }

        if let Ok(var) = std::env::var("APP_AI_API_KEY_ENV") {
            self.ai.api_key_env = var;
            tracing::info!("Override ai.api_key_env from env: {}", self.ai.api_key_env);
        }

        if let Some(model) = std::env::var("APP_AI_MODEL").ok().clean() {
            tracing::info!("Override ai.model_name from env: {}", model);
            self.ai.model_name = Some(model);
        }

        if let Ok(temperature) = std::env::var("APP_AI_TEMPERATURE")
            && let Ok(temperature) = temperature.parse()
        {
            self.ai.temperature = Some(temperature);
            tracing::info!("Override ai.temperature from env: {}", temperature);
        }

        if let Some(endpoint) = std::env::var("APP_AI_ENDPOINT").ok().clean() {
            tracing::info!("Override ai.endpoint from env: {}", endpoint);
            self.ai.endpoint = Some(endpoint);
        }

        if let Ok(timeout) = std::env::var("APP_AI_TIMEOUT_SECS") {
            match parse_duration_to_secs(&timeout) {
                Ok(val) => {
                    self.ai.timeout_secs = val;
                    tracing::info!("Override ai.timeout_secs from env: {}", self.ai.timeout_secs);
                },
                Err(e) => tracing::warn!(
                    "Invalid APP_AI_TIMEOUT_SECS '{}': {} (keep {})",
                    timeout,
                    e,
                    self.ai.timeout_secs
                ),
            }
        }
    }

    /// Apply command line argument overrides (highest priority)
    fn apply_cli_overrides(&mut self, args: &CommandLineArgs) {
        if let Some(host) = &args.server_host {
            self.server.host = host.clone();
            tracing::info!("Override server.host from CLI: {}", self.server.host);
        }

        if let Some(port) = args.server_port {
            self.server.port = port;
            tracing::info!("Override server.port from CLI: {}", self.server.port);
        }

        if let Some(level) = &args.log_level {
            self.logging.level = level.clone();
            tracing::info!("Override logging.level from CLI: {}", self.logging.level);
        }

        if let Some(kind) = args.ai_provider {
            self.ai.provider = kind;
            tracing::info!("Override ai.provider from CLI: {}", self.ai.provider);
        }

        if let Some(model) = &args.ai_model {
            self.ai.model_name = Some(model.clone());
            tracing::info!("Override ai.model_name from CLI: {}", model);
        }

        if let Some(temperature) = args.ai_temperature {
            self.ai.temperature = Some(temperature);
            tracing::info!("Override ai.temperature from CLI: {}", temperature);
        }

        if let Some(endpoint) = &args.ai_endpoint {
            self.ai.endpoint = Some(endpoint.clone());
            tracing::info!("Override ai.endpoint from CLI: {}", endpoint);
        }

        if let Some(timeout) = &args.ai_timeout_secs {
            match parse_duration_to_secs(timeout) {
                Ok(val) => {
                    self.ai.timeout_secs = val;
                    tracing::info!("Override ai.timeout_secs from CLI: {}", self.ai.timeout_secs);
                },
                Err(e) => tracing::warn!(
                    "Invalid --ai-timeout-secs '{}': {} (keep {})",
                    timeout,
                    e,
                    self.ai.timeout_secs
                ),
            }
        }
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        if self.ai.api_key_env.trim().is_empty() {
            anyhow::bail!("ai.api_key_env cannot be empty");
        }

        self.ai
            .provider_config()
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid [ai] section: {}", e))?;

        Ok(())
    }

    fn find_config_file() -> Option<String> {
        let possible_paths =
            ["conf/config.toml", "config.toml", "./conf/config.toml", "./config.toml"];

        for path in &possible_paths {
            if Path::new(path).exists() {
                return Some(path.to_string());
            }
        }
        None
    }

    fn from_toml(path: &str) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".to_string(), port: 8080 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info,kaogang=debug".to_string(),
            file: Some("logs/kaogang.log".to_string()),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            api_key_env: "API_KEY".to_string(),
            model_name: None,
            temperature: None,
            endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

// =========================
// Helpers for parsing values
// =========================

fn parse_duration_to_secs(input: &str) -> Result<u64, String> {
    // Plain numbers are seconds
    if let Ok(val) = input.parse::<u64>() {
        return Ok(val);
    }

    let s = input.trim().to_lowercase();
    let (num_str, unit) = s.split_at(s.chars().take_while(|c| c.is_ascii_digit()).count());
    if num_str.is_empty() || unit.is_empty() {
        return Err("missing number or unit".into());
    }
    let n: u64 = num_str.parse().map_err(|_| "invalid number".to_string())?;
    let factor: u64 = match unit.trim() {
        "s" | "sec" | "secs" | "second" | "seconds" => 1,
        "m" | "min" | "mins" | "minute" | "minutes" => 60,
        "h" | "hr" | "hour" | "hours" => 60 * 60,
        _ => return Err(format!("unsupported unit: {}", unit)),
    };
    n.checked_mul(factor).ok_or_else(|| format!("duration too large: {}", input))
}

fn deserialize_duration_secs<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct Visitor;
    impl<'de> serde::de::Visitor<'de> for Visitor {
        type Value = u64;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a number of seconds or a string like '30s', '2m'")
        }
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v)
        }
        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            if v >= 0 { Ok(v as u64) } else { Err(E::custom("negative not allowed")) }
        }
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            parse_duration_to_secs(v).map_err(E::custom)
        }
    }
    deserializer.deserialize_any(Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration_to_secs("60"), Ok(60));
        assert_eq!(parse_duration_to_secs("30s"), Ok(30));
        assert_eq!(parse_duration_to_secs("2m"), Ok(120));
        assert_eq!(parse_duration_to_secs("1h"), Ok(3600));
        assert!(parse_duration_to_secs("s").is_err());
        assert!(parse_duration_to_secs("5w").is_err());
    }

    #[test]
    fn test_parse_duration_rejects_overflow() {
        assert!(parse_duration_to_secs("5124095576030432h").is_err());
        assert!(parse_duration_to_secs("307445734561825861m").is_err());
        assert_eq!(parse_duration_to_secs("5124095576030431h"), Ok(5124095576030431 * 3600));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ai.provider, ProviderKind::MiniMax);
        assert_eq!(config.ai.api_key_env, "API_KEY");
        assert_eq!(config.ai.provider_config(), ProviderConfig::minimax());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ai_section_from_toml() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 9000

            [ai]
            provider = "gemini"
            api_key_env = "GEMINI_KEY"
            temperature = 0.3
            timeout_secs = "2m"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        let provider = config.ai.provider_config();
        assert_eq!(provider.kind, ProviderKind::Gemini);
        assert_eq!(provider.model_name, "gemini-2.0-flash-exp");
        assert_eq!(provider.temperature, 0.3);
        assert_eq!(provider.timeout_seconds, 120);
        assert_eq!(config.ai.credential_source().label(), "GEMINI_KEY");
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut config = Config::default();
        let args = CommandLineArgs {
            server_port: Some(3000),
            ai_provider: Some(ProviderKind::Gemini),
            ai_endpoint: Some("http://localhost:4000/v1beta".to_string()),
            ai_timeout_secs: Some("15s".to_string()),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);

        assert_eq!(config.server.port, 3000);
        let provider = config.ai.provider_config();
        assert_eq!(provider.kind, ProviderKind::Gemini);
        assert_eq!(provider.endpoint, "http://localhost:4000/v1beta");
        assert_eq!(provider.timeout_seconds, 15);
    }

    #[test]
    fn test_validate_rejects_bad_ai_settings() {
        let mut config = Config::default();
        config.ai.temperature = Some(3.5);
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.ai.endpoint = Some("not a url".to_string());
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.ai.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
