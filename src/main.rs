use anyhow::Context;
use tinyserve::config::Config;
use tinyserve::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();

    let Some(addr) = cfg.listen_addr() else {
        println!("{}", Config::usage());
        return Ok(());
    };
    tracing::info!("The server will listen to port: {}", addr.port());

    let root = std::env::current_dir().context("failed to read working directory")?;
    tracing::info!("Serving files from {}", root.display());

    let listener = server::listener::bind(addr)?;

    tokio::select! {
        res = server::listener::serve(listener, root) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
