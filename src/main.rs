use anyhow::Context;
use env_logger::Env;
use kwscrape::{configuration::get_configuration, startup::run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().context("Failed to read configuration.")?;

    let records = run(configuration).await?;
    log::info!("Wrote {} records", records.len());

    println!("CSV file created successfully!");
    Ok(())
}
