mod cli;
mod client;
mod state;

use anyhow::Result;
use clap::Parser;
use cli::opt;
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let opt = opt::Cli::parse();

    let _guard = dbdcare_utils::tracing::setup(
        dbdcare_utils::tracing::TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .default_level(LevelFilter::WARN)
            .stderr(true)
            .build(),
    )?;

    cli::exec(opt).await
}
