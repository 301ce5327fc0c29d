//! Thin client over the task-execution runtime.
//!
//! Scheduling, parallel execution and worker placement are owned by the
//! runtime; this crate only submits tasks and collects their results.

pub mod client;
pub mod task;
