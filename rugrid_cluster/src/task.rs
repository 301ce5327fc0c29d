use ::rugrid_common::{error::Result, tokio::task::JoinHandle};

/// Handle to the pending result of a submitted task.
pub struct TaskHandle<T> {
    inner: JoinHandle<T>,
}

impl<T> TaskHandle<T> {
    pub(crate) fn new(inner: JoinHandle<T>) -> Self {
        Self { inner }
    }

    /// Wait for the task to finish and return its result.
    /// A task that panicked or was aborted surfaces as a task failure.
    pub async fn join(self) -> Result<T> {
        self.inner.await.map_err(Into::into)
    }
}

/// Wait for every handle and return the results in submission order.
/// The result list is in 1:1 positional correspondence with `handles`.
pub async fn get_all<T>(handles: Vec<TaskHandle<T>>) -> Result<Vec<T>> {
    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.join().await?);
    }
    Ok(results)
}
