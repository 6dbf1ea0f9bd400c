use anyhow::Result;
use clap::Parser;
use crane::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    crane::application::run(cli).await
}
