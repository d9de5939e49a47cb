//! Layered configuration: defaults, then a TOML file named by `FIVEDRAW_CONFIG`,
//! then `FIVEDRAW_*` environment variables. Command-line flags are applied on top
//! by each command.

use serde::{Deserialize, Serialize};
use std::fs;

use fivedraw_ai::AI_KINDS;
use fivedraw_engine::rules::SimpleRules;

pub const ENV_CONFIG: &str = "FIVEDRAW_CONFIG";
pub const ENV_SEED: &str = "FIVEDRAW_SEED";
pub const ENV_STARTING_CASH: &str = "FIVEDRAW_STARTING_CASH";
pub const ENV_SMALL_BLIND: &str = "FIVEDRAW_SMALL_BLIND";
pub const ENV_BIG_BLIND: &str = "FIVEDRAW_BIG_BLIND";
pub const ENV_AI: &str = "FIVEDRAW_AI";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_cash: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub seed: Option<u64>,
    pub ai: String,
}

impl Config {
    pub fn rules(&self) -> SimpleRules {
        SimpleRules::new(self.small_blind, self.big_blind)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_cash: 1000,
            small_blind: SimpleRules::SMALL_BLIND,
            big_blind: SimpleRules::BIG_BLIND,
            seed: None,
            ai: "baseline".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_cash: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub seed: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_cash: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            seed: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_cash {
            cfg.starting_cash = v;
            sources.starting_cash = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Some(v) = env_number(ENV_SEED)? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_number(ENV_STARTING_CASH)? {
        cfg.starting_cash = v;
        sources.starting_cash = ValueSource::Env;
    }
    if let Some(v) = env_number(ENV_SMALL_BLIND)? {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = env_number(ENV_BIG_BLIND)? {
        cfg.big_blind = v;
        sources.big_blind = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var(ENV_AI)
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_number<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => v
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", key, v))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_cash: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ai: Option<String>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_cash == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_cash must be >0".into(),
        ));
    }
    if cfg.small_blind == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: small_blind must be >0".into(),
        ));
    }
    if cfg.small_blind > cfg.big_blind {
        return Err(ConfigError::Invalid(
            "Invalid configuration: small_blind must not exceed big_blind".into(),
        ));
    }
    if cfg.starting_cash < cfg.big_blind {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_cash must cover big_blind".into(),
        ));
    }
    if !AI_KINDS.contains(&cfg.ai.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai '{}' (expected one of {})",
            cfg.ai,
            AI_KINDS.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = Config::default();
        assert!(validate(&cfg).is_ok());
        assert_eq!(cfg.rules(), SimpleRules::default());
    }

    #[test]
    fn test_validate_rejects_inverted_blinds() {
        let cfg = Config {
            small_blind: 64,
            ..Config::default()
        };
        let msg = validate(&cfg).unwrap_err().to_string();
        assert!(msg.contains("small_blind"));
    }

    #[test]
    fn test_validate_rejects_cash_below_big_blind() {
        let cfg = Config {
            starting_cash: 20,
            ..Config::default()
        };
        let msg = validate(&cfg).unwrap_err().to_string();
        assert!(msg.contains("starting_cash must cover big_blind"));
        let cfg = Config {
            starting_cash: 32,
            ..Config::default()
        };
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_blinds() {
        let cfg = Config {
            small_blind: 0,
            big_blind: 0,
            ..Config::default()
        };
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_ai() {
        let cfg = Config {
            ai: "oracle".into(),
            ..Config::default()
        };
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn test_file_config_accepts_partial_tables() {
        let f: FileConfig = toml::from_str("big_blind = 50\nai = \"random\"\n").unwrap();
        assert_eq!(f.big_blind, Some(50));
        assert_eq!(f.ai.as_deref(), Some("random"));
        assert!(f.seed.is_none());
    }
}
