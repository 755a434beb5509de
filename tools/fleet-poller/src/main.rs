use clap::Parser;
use fleet_poller::cli::Cli;
use fleet_poller::config::PollerConfig;
use fleet_poller::driver::poll_fleet;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing; the report itself goes to stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = PollerConfig::from_cli(Cli::parse())?;
    let client = config.build_client()?;

    let report = poll_fleet(client.as_ref(), config.source_count).await;
    print!("{}", report.render());

    if let Some(path) = &config.json_path {
        report.write_to_file(path)?;
        tracing::info!(path = %path.display(), "Report written");
    }

    Ok(())
}
