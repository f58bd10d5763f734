use desk_core::config::Settings;
use desk_core::http::JsonTransport;
use desk_core::observability::init_tracing;
use inventory_desk::services::{init_metrics, HttpInventoryApi};
use inventory_desk::view::Shell;
use inventory_desk::InventoryDesk;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("inventory-desk", &settings.log)?;
    init_metrics();

    let api = Arc::new(HttpInventoryApi::new(
        JsonTransport::new(&settings.api),
        &settings.inventory.prefix,
    ));
    let desk = InventoryDesk::new(api);

    info!(
        backend = %settings.api.base_url,
        prefix = %settings.inventory.prefix,
        "Starting inventory-desk"
    );
    println!("Inventory desk ready. Type 'help' for commands.");

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut shell = Shell::new(desk, input, std::io::stdout());
    shell.run().await?;

    Ok(())
}
