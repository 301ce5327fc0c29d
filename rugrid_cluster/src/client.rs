use ::core::future::Future;

use ::rugrid_common::{
    error::{Result, RugridError},
    tokio::runtime::Handle,
};

use crate::task::TaskHandle;

/// Client for submitting tasks to the execution runtime.
pub struct ClusterClient {
    handle: Handle,
}

impl ClusterClient {
    /// Attach to the runtime the caller is already running on.
    /// # Return
    /// - `Ok(ClusterClient)` when a runtime is reachable.
    /// - `Err(RugridError::ClusterUnavailable)` otherwise.
    pub fn connect() -> Result<Self> {
        Handle::try_current()
            .map(|handle| Self { handle })
            .map_err(|e| RugridError::ClusterUnavailable(e.to_string()))
    }

    /// Submit one task to the runtime and return a handle to its
    /// pending result. Where and when the task runs is up to the runtime.
    pub fn submit<F>(&self, task: F) -> TaskHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        TaskHandle::new(self.handle.spawn(task))
    }
}
