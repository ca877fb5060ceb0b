use clap::Parser;
use eyre::Context;
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube_channel_catalog::{Catalog, Cli, YouTubeClient, sink};

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let client = YouTubeClient::new(&cli.api_key, reqwest::Client::new())
        .with_base_url(&cli.api_base_url);
    let output = cli.output_path();

    let dataset = Catalog::new(&client, cli.catalog_config())
        .run(&cli.query)
        .await
        .with_context(|| format!("catalog channel {:?}", cli.query))?;

    sink::write_csv_file(&dataset, &output)?;
    eprintln!("{} videos written to {}", dataset.len(), output.display());

    Ok(())
}
