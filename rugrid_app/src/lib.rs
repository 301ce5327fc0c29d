//! Demo application that fans chunked matrix computations out to the
//! task-execution runtime and aggregates the scores.

pub mod config;
pub mod dataset;
pub mod process;
pub mod stats;

use ::core::time::Duration;
use ::std::time::Instant;

use ::rugrid_common::{error::Result, tracing::info};
use ::rugrid_cluster::{client::ClusterClient, task};

use config::AppConfig;
use dataset::Matrix;

/// Outcome of one full run of the demo.
#[derive(Debug)]
pub struct RunSummary {
    /// Number of chunks processed, one task each.
    pub chunk_count: usize,
    /// Mean of the per-chunk scores.
    pub average_score: f64,
    /// Wall time from first submission to last result.
    pub elapsed: Duration,
}

/// Generate the dataset, submit one task per chunk and block until all
/// results are back. Results come back in submission order, one per chunk.
pub async fn run(config: &AppConfig) -> Result<RunSummary> {
    let client = ClusterClient::connect()?;

    let data = Matrix::random(config.rows.get(), config.cols.get());
    let chunks = data.row_chunks(config.chunk_rows);
    info!("Processing {} chunks of data...", chunks.len());

    let start = Instant::now();
    let simulate_work = Duration::from_millis(config.simulate_work_millis);
    let handles = chunks
        .into_iter()
        .map(|chunk| client.submit(process::process_chunk(chunk, simulate_work)))
        .collect::<Vec<_>>();
    let results = task::get_all(handles).await?;

    Ok(RunSummary {
        chunk_count: results.len(),
        average_score: stats::mean(&results).unwrap_or(0.0),
        elapsed: start.elapsed(),
    })
}
