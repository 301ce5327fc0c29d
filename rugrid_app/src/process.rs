use ::core::time::Duration;
use ::std::time::Instant;

use ::rugrid_common::{metrics, tokio::time::sleep};

use crate::{dataset::Chunk, stats};

/// The task function: score one chunk as mean times population standard
/// deviation of its values, sleeping briefly to simulate heavier work.
/// Increments the tasks-completed counter and records the elapsed time
/// in the latency histogram. An empty chunk scores `0.0`.
pub async fn process_chunk(chunk: Chunk, simulate_work: Duration) -> f64 {
    let start = Instant::now();

    let values = chunk.values();
    let score = stats::mean(values)
        .zip(stats::std_dev(values))
        .map(|(mean, std_dev)| mean * std_dev)
        .unwrap_or(0.0);
    sleep(simulate_work).await;

    metrics::increment_tasks_completed();
    metrics::record_task_latency(start.elapsed().as_secs_f64());

    score
}
