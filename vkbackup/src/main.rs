use clap::Parser;
use tracing_subscriber::EnvFilter;
use vkbackup::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.as_filter())),
        )
        .init();

    let manifest = vkbackup::app::run(&cli).await?;
    println!(
        "Saved {} photo(s) to {}; summary written to {}",
        manifest.len(),
        cli.folder,
        cli.manifest.display()
    );
    Ok(())
}
