use anyhow::Result;
use rollout_core::config::ServerConfig;

pub fn run(mut config: ServerConfig, port: Option<u16>, no_seed: bool) -> Result<()> {
    if let Some(port) = port {
        config.port = port;
    }
    if no_seed {
        config.seed = false;
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
        let actual_port = listener.local_addr()?.port();
        println!("Rollout dashboard API → http://localhost:{actual_port}/api");

        tokio::select! {
            res = rollout_server::serve_on(config, listener) => res,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                Ok(())
            }
        }
    })
}
