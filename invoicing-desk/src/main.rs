use desk_core::config::Settings;
use desk_core::http::JsonTransport;
use desk_core::observability::init_tracing;
use invoicing_desk::services::{init_metrics, HttpInvoiceApi, OpenMode, TerminalOpener};
use invoicing_desk::view::Shell;
use invoicing_desk::InvoiceDesk;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("invoicing-desk", &settings.log)?;
    init_metrics();

    let api = Arc::new(HttpInvoiceApi::new(JsonTransport::new(&settings.api)));
    let open_mode = OpenMode::for_user_agent(&settings.client.user_agent);
    let desk = InvoiceDesk::new(api, Arc::new(TerminalOpener), open_mode);

    info!(backend = %settings.api.base_url, "Starting invoicing-desk");
    println!("Invoice desk ready. Type 'help' for commands.");

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut shell = Shell::new(desk, input, std::io::stdout());
    shell.run().await?;

    Ok(())
}
