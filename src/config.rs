/***************************************/
/*        3rd party libraries          */
/***************************************/
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::car::DEFAULT_MAX_FLOOR;
use crate::shared::Floor;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub elevator: ElevatorConfig,
    pub console: ConsoleConfig,
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ElevatorConfig {
    pub max_floor: Floor,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ConsoleConfig {
    pub prompt: String,
    pub json_status: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for ElevatorConfig {
    fn default() -> Self {
        ElevatorConfig {
            max_floor: DEFAULT_MAX_FLOOR,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            prompt: "> ".to_string(),
            json_status: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
    parse_config(&config_str)
        .with_context(|| format!("Failed to parse configuration file {}", path.display()))
}

pub fn parse_config(config_str: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(config_str)?)
}
