use ::rugrid_app::{config::AppConfig, run};
use ::rugrid_common::{
    config::{load_config, Args},
    error::Result,
    metrics, tokio,
    tracing::info,
    tracing_subscriber,
};

#[tokio::main]
async fn main() -> Result<()> {
    // setup tracing
    tracing_subscriber::fmt::init();
    let provider = metrics::init_metrics()?;

    let config = match Args::parse_args().config_path {
        Some(path) => load_config(&path)?,
        None => AppConfig::default(),
    };

    let summary = run(&config).await?;
    info!(
        "Processing completed in {:.2} seconds",
        summary.elapsed.as_secs_f64()
    );
    info!("Average result: {:.4}", summary.average_score);

    metrics::shutdown_metrics(provider)
}
