use crate::cli::Cli;
use crate::config::RegistryConfig;
use crate::inventory::{find_host, inventory_document};
use crate::registry::RegistryClient;
use anyhow::Result;
use clap::CommandFactory;
use serde_json::{Map, Value};

pub async fn run(cli: Cli) -> Result<()> {
    if !cli.list && cli.host.is_none() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let config = RegistryConfig::from_env()?;
    // Captured before the request so the failure hint cannot fail on its own.
    let url = config.endpoint_url();

    if let Err(err) = execute(&config, &cli).await {
        eprintln!("{err:?}");
        eprintln!("Trying to request at {url}");
        std::process::exit(1);
    }
    Ok(())
}

async fn execute(config: &RegistryConfig, cli: &Cli) -> Result<()> {
    let client = RegistryClient::new(config)?;
    let applications = client.fetch_applications().await?;

    // `--list` wins when both flags are given.
    let document = if cli.list {
        Value::Object(inventory_document(&applications))
    } else {
        let hostname = cli.host.as_deref().unwrap_or_default();
        match find_host(&applications, hostname) {
            Some(instance) => Value::Object(instance.clone()),
            None => Value::Object(Map::new()),
        }
    };

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
