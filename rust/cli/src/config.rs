//! Layered CLI configuration.
//!
//! Values start from defaults, are overridden by the TOML file named in
//! `SVARKA_CONFIG`, then by `SVARKA_*` environment variables. Command-line
//! flags are applied last by each command. Every value remembers where it
//! came from so `svarka cfg` can show it.

use serde::{Deserialize, Serialize};
use std::fs;
use svarka_ai::{PolicyConfig, PolicyError};
use svarka_engine::game::{Lobby, MAX_SEATS};
use thiserror::Error;

pub const CONFIG_ENV: &str = "SVARKA_CONFIG";
pub const SEED_ENV: &str = "SVARKA_SEED";
pub const LOBBY_ENV: &str = "SVARKA_LOBBY";
pub const STARTING_BALANCE_ENV: &str = "SVARKA_STARTING_BALANCE";
pub const AI_PLAYERS_ENV: &str = "SVARKA_AI_PLAYERS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub lobby: Lobby,
    pub starting_balance: u32,
    /// Computer opponents seated with the human in `play`
    pub ai_players: usize,
    pub policy: PolicyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            lobby: Lobby::Beginner,
            starting_balance: 1_000,
            ai_players: 3,
            policy: PolicyConfig::default(),
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
    pub seed: ValueSource,
    pub lobby: ValueSource,
    pub starting_balance: ValueSource,
    pub ai_players: ValueSource,
    pub policy: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            lobby: ValueSource::Default,
            starting_balance: ValueSource::Default,
            ai_players: ValueSource::Default,
            policy: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Policy(#[from] PolicyError),
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.lobby {
            cfg.lobby = v;
            sources.lobby = ValueSource::File;
        }
        if let Some(v) = f.starting_balance {
            cfg.starting_balance = v;
            sources.starting_balance = ValueSource::File;
        }
        if let Some(v) = f.ai_players {
            cfg.ai_players = v;
            sources.ai_players = ValueSource::File;
        }
        if let Some(v) = f.policy {
            cfg.policy = v;
            sources.policy = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed '{}'", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(lobby) = std::env::var(LOBBY_ENV)
        && !lobby.is_empty()
    {
        cfg.lobby = lobby
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid lobby '{}'", lobby)))?;
        sources.lobby = ValueSource::Env;
    }
    if let Ok(balance) = std::env::var(STARTING_BALANCE_ENV)
        && !balance.is_empty()
    {
        cfg.starting_balance = balance
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid starting balance '{}'", balance)))?;
        sources.starting_balance = ValueSource::Env;
    }
    if let Ok(n) = std::env::var(AI_PLAYERS_ENV)
        && !n.is_empty()
    {
        cfg.ai_players = n
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid AI player count '{}'", n)))?;
        sources.ai_players = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    lobby: Option<Lobby>,
    #[serde(default)]
    starting_balance: Option<u32>,
    #[serde(default)]
    ai_players: Option<usize>,
    #[serde(default)]
    policy: Option<PolicyConfig>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_balance == 0 {
        return Err(ConfigError::Invalid(
            "starting_balance must be >0".into(),
        ));
    }
    if cfg.ai_players == 0 || cfg.ai_players >= MAX_SEATS {
        return Err(ConfigError::Invalid(format!(
            "ai_players must be between 1 and {}",
            MAX_SEATS - 1
        )));
    }
    cfg.policy.validate()?;
    Ok(())
}
