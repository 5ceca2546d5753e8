pub mod config;
pub mod serve;

use anyhow::{Context, Result};
use rollout_core::config::ServerConfig;
use std::path::Path;

/// Load the config file (if any) and apply flags that apply to every command.
pub fn load_config(path: Option<&Path>, brain_url: Option<String>) -> Result<ServerConfig> {
    let mut config = match path {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(url) = brain_url.filter(|u| !u.trim().is_empty()) {
        config.advisor.base_url = url;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brain_url_flag_overrides_default() {
        let config = load_config(None, Some("http://brain:9000".into())).unwrap();
        assert_eq!(config.advisor.base_url, "http://brain:9000");
    }

    #[test]
    fn blank_brain_url_is_ignored() {
        let config = load_config(None, Some("  ".into())).unwrap();
        assert_eq!(
            config.advisor.base_url,
            rollout_core::config::DEFAULT_BRAIN_URL
        );
    }
}
