use anyhow::Result;
use rollout_core::config::ServerConfig;

pub fn run(config: &ServerConfig) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}
