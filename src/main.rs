use dotenvy::dotenv;
use paynow_console::config::get_configuration;
use paynow_console::observability::init_tracing;
use paynow_console::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("info");

    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;

    Ok(())
}
