use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::{FareConstants, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub fare: FareSettings,
    #[serde(default)]
    pub client: ClientSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Applied when a recommendations request has no `limit`; unset returns every candidate
    pub default_limit: Option<usize>,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: None,
            max_limit: default_max_limit(),
        }
    }
}

fn default_max_limit() -> usize { 100 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_location_weight")]
    pub location: u32,
    #[serde(default = "default_times_weight")]
    pub times: u32,
    #[serde(default = "default_major_weight")]
    pub major: u32,
    #[serde(default = "default_extracurriculars_weight")]
    pub extracurriculars: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            location: default_location_weight(),
            times: default_times_weight(),
            major: default_major_weight(),
            extracurriculars: default_extracurriculars_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(value: &WeightsConfig) -> Self {
        Self {
            location: value.location,
            times: value.times,
            major: value.major,
            extracurriculars: value.extracurriculars,
        }
    }
}

fn default_location_weight() -> u32 { 3 }
fn default_times_weight() -> u32 { 2 }
fn default_major_weight() -> u32 { 2 }
fn default_extracurriculars_weight() -> u32 { 1 }

#[derive(Debug, Clone, Deserialize)]
pub struct FareSettings {
    #[serde(default = "default_base_fare")]
    pub base_fare: f64,
    #[serde(default = "default_assumed_mpg")]
    pub assumed_mpg: f64,
    #[serde(default = "default_wear_rate")]
    pub wear_rate_per_mile: f64,
}

impl Default for FareSettings {
    fn default() -> Self {
        Self {
            base_fare: default_base_fare(),
            assumed_mpg: default_assumed_mpg(),
            wear_rate_per_mile: default_wear_rate(),
        }
    }
}

impl From<&FareSettings> for FareConstants {
    fn from(value: &FareSettings) -> Self {
        Self {
            base_fare: value.base_fare,
            assumed_mpg: value.assumed_mpg,
            wear_rate_per_mile: value.wear_rate_per_mile,
        }
    }
}

fn default_base_fare() -> f64 { 2.5 }
fn default_assumed_mpg() -> f64 { 24.0 }
fn default_wear_rate() -> f64 { 0.12 }

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String { "http://localhost:5000/api".to_string() }
fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CARPOOL__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CARPOOL__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    /// Reject weights and fare constants the formulas cannot work with
    fn validated(self) -> Result<Self, ConfigError> {
        let weights = &self.scoring.weights;
        if [weights.times, weights.major, weights.extracurriculars]
            .into_iter()
            .try_fold(weights.location, u32::checked_add)
            .is_none()
        {
            return Err(ConfigError::Message(
                "scoring.weights must sum to at most u32::MAX".to_string(),
            ));
        }

        let fare = &self.fare;
        if !(fare.assumed_mpg.is_finite() && fare.assumed_mpg > 0.0) {
            return Err(ConfigError::Message(format!(
                "fare.assumed_mpg must be a positive number, got {}",
                fare.assumed_mpg
            )));
        }
        if !fare.base_fare.is_finite() || !fare.wear_rate_per_mile.is_finite() {
            return Err(ConfigError::Message(
                "fare.base_fare and fare.wear_rate_per_mile must be finite".to_string(),
            ));
        }

        Ok(self)
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }

    pub fn fare_constants(&self) -> FareConstants {
        FareConstants::from(&self.fare)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("CARPOOL")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
