use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BRAIN_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_SESSION_ID: &str = "rollout-dashboard";

// ---------------------------------------------------------------------------
// AdvisorConfig
// ---------------------------------------------------------------------------

/// Settings for the upstream advisory ("brain") service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Budget for `/query`, which may wait on a language model.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
    /// Budget for health probes and usage logging.
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
    #[serde(default = "default_session_id")]
    pub session_id: String,
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_hints")]
    pub hints: Vec<String>,
    /// How many records of each kind go into the context bundle.
    #[serde(default = "default_context_slice")]
    pub context_slice: usize,
}

fn default_base_url() -> String {
    DEFAULT_BRAIN_URL.to_string()
}

fn default_query_timeout_ms() -> u64 {
    15_000
}

fn default_probe_timeout_ms() -> u64 {
    1_500
}

fn default_session_id() -> String {
    DEFAULT_SESSION_ID.to_string()
}

fn default_user_id() -> String {
    "rollout-dashboard".to_string()
}

fn default_mode() -> String {
    "quick".to_string()
}

fn default_hints() -> Vec<String> {
    ["franchise_rollout", "crunchtime", "toast", "onboarding"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_context_slice() -> usize {
    3
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            query_timeout_ms: default_query_timeout_ms(),
            probe_timeout_ms: default_probe_timeout_ms(),
            session_id: default_session_id(),
            user_id: default_user_id(),
            mode: default_mode(),
            hints: default_hints(),
            context_slice: default_context_slice(),
        }
    }
}

impl AdvisorConfig {
    /// `base_url` joined with `path`, tolerating a trailing slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Load the program's franchise groups and deliverables at startup.
    #[serde(default = "default_seed")]
    pub seed: bool,
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

fn default_port() -> u16 {
    5000
}

fn default_seed() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            seed: default_seed(),
            advisor: AdvisorConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read a YAML config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        let config: ServerConfig = serde_yaml::from_str(&data)?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
