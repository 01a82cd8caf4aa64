use crate::services::ranking::{DuplicatePolicy, IndexOptions, TieBreak, DEFAULT_WINDOW_RADIUS};
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::PathBuf;

const ENV_PREFIX: &str = "LEADERBOARD_";

/// Service configuration, read from `LEADERBOARD_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// CSV file loaded once at startup
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    #[serde(default = "default_window_radius")]
    pub window_radius: usize,
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
    #[serde(default)]
    pub tie_break: TieBreak,
    /// actix worker count; actix picks one per core when unset. Zero is rejected.
    #[serde(default)]
    pub workers: Option<NonZeroUsize>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data.csv")
}

fn default_window_radius() -> usize {
    DEFAULT_WINDOW_RADIUS
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::prefixed(ENV_PREFIX).from_env()
    }

    /// Same as [`Config::from_env`] over explicit pairs, without touching the process env.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(pairs)
    }

    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            duplicate_policy: self.duplicate_policy,
            tie_break: self.tie_break,
        }
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
