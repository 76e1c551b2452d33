use env_logger::Env;
use newsdrill::{configuration::get_configuration, startup::run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");
    log::info!(
        "Searching {} for {:?} within {} months",
        configuration.search.website,
        configuration.search.search_phrase,
        configuration.search.month_filter
    );

    run(configuration).await?;

    log::info!("Done");
    Ok(())
}
