//! Task metric instruments, exported through OpenTelemetry.
//!
//! Instrument handles live in statics so that task code can record
//! measurements without threading a meter through every call. Before
//! [`init_metrics`] runs, the recording helpers are no-ops.

use ::std::{sync::OnceLock, time::Duration};

use ::opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter},
    InstrumentationScope,
};
use ::opentelemetry_sdk::{
    metrics::{PeriodicReader, SdkMeterProvider},
    Resource,
};
use ::opentelemetry_stdout::MetricExporter;

use crate::error::Result;

static TASKS_COMPLETED: OnceLock<Counter<u64>> = OnceLock::new();
static TASK_LATENCY: OnceLock<Histogram<f64>> = OnceLock::new();

/// Install the global meter provider with a periodic stdout exporter
/// and build the instrument handles.
/// The returned provider must be kept alive and shut down at exit to
/// flush pending measurements.
pub fn init_metrics() -> Result<SdkMeterProvider> {
    let exporter = MetricExporter::default();
    let reader = PeriodicReader::builder(exporter)
        .with_interval(Duration::from_secs(5))
        .build();
    let provider = SdkMeterProvider::builder()
        .with_resource(Resource::builder().with_service_name("rugrid").build())
        .with_reader(reader)
        .build();
    global::set_meter_provider(provider.clone());

    let scope = InstrumentationScope::builder("rugrid")
        .with_version(env!("CARGO_PKG_VERSION"))
        .build();
    init_instruments(global::meter_with_scope(scope));
    Ok(provider)
}

/// Flush pending measurements and shut down the provider.
pub fn shutdown_metrics(provider: SdkMeterProvider) -> Result<()> {
    provider.shutdown()?;
    Ok(())
}

fn init_instruments(meter: Meter) {
    let _ = TASKS_COMPLETED.set(
        meter
            .u64_counter("rugrid_tasks_completed")
            .with_description("Number of tasks completed")
            .build(),
    );
    let _ = TASK_LATENCY.set(
        meter
            .f64_histogram("rugrid_task_latency")
            .with_unit("s")
            .with_description("Task execution time in seconds")
            .build(),
    );
}

pub fn increment_tasks_completed() {
    if let Some(counter) = TASKS_COMPLETED.get() {
        counter.add(1, &[]);
    }
}

pub fn record_task_latency(seconds: f64) {
    if let Some(histogram) = TASK_LATENCY.get() {
        histogram.record(seconds, &[]);
    }
}
