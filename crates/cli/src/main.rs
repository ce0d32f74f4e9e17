use anyhow::Context;
use clap::Parser;
use hostsdns_domain::CliOverrides;
use hostsdns_jobs::JobRunner;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "hostsdns")]
#[command(version)]
#[command(about = "Authoritative DNS answers from a hosts file, reloaded on change")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Hosts file to serve
    #[arg(long, value_name = "FILE")]
    hostfile: Option<String>,

    /// UDP port to listen on
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        hosts_path: cli.hostfile,
        dns_port: cli.port,
        bind_address: cli.bind,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting hostsdns v{}", env!("CARGO_PKG_VERSION"));

    let services = di::HostsServices::new(&config);

    if config.hosts.create_if_missing {
        services.source.ensure_exists().await?;
    }

    services
        .server
        .init_server()
        .await
        .with_context(|| format!("Failed to load hosts file {}", config.hosts.path))?;

    let shutdown = CancellationToken::new();
    bootstrap::spawn_shutdown_listener(shutdown.clone());

    JobRunner::new()
        .with_hosts_reload(services.reload_job(&config))
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    services
        .server
        .start(shutdown)
        .await
        .context("DNS server failed")?;

    info!(served_names = services.table.len(), "Server shutdown complete");
    Ok(())
}
