use crate::destination::Destination;
use crate::error::BenchError;
use crate::payload::Payload;
use crate::report;
use crate::statistics::{BenchmarkResult, LatencyStats};
use std::num::NonZeroU32;
use tokio::time::Instant;
use tracing::{debug, error, info};

/// Sends the same payload to a destination a fixed number of times, one call at a time.
pub struct BenchmarkRunner<'a> {
    payload: &'a Payload,
    iterations: NonZeroU32,
}

impl<'a> BenchmarkRunner<'a> {
    pub fn new(payload: &'a Payload, iterations: NonZeroU32) -> Self {
        Self {
            payload,
            iterations,
        }
    }

    /// Stops at the first failed call and returns its error, discarding any samples.
    pub async fn run(&self, destination: &dyn Destination) -> Result<BenchmarkResult, BenchError> {
        let kind = destination.kind();
        let iterations = self.iterations.get();
        info!(
            "Benchmarking {kind}: {iterations} calls with a {} byte message...",
            self.payload.len()
        );

        let mut stats = LatencyStats::default();
        let start = Instant::now();
        for i in 1..=iterations {
            let before_send = Instant::now();
            if let Err(error) = destination.send(self.payload.as_str()).await {
                error!("{kind} call #{i} of {iterations} failed: {error}");
                return Err(error);
            }
            let latency = before_send.elapsed();
            debug!("{kind} call #{i} took {latency:?}");
            stats.record(latency);
        }
        let total = start.elapsed();

        info!("Finished benchmarking {kind} in {total:?}");
        Ok(BenchmarkResult::new(kind, self.iterations, total, &stats))
    }
}

/// Runs every destination in order against one shared payload.
pub struct BenchmarkSuite {
    payload: Payload,
    iterations: NonZeroU32,
    destinations: Vec<Box<dyn Destination>>,
}

impl BenchmarkSuite {
    pub fn new(payload: Payload, iterations: NonZeroU32) -> Self {
        Self {
            payload,
            iterations,
            destinations: Vec::new(),
        }
    }

    pub fn with_destination(mut self, destination: impl Destination + 'static) -> Self {
        self.destinations.push(Box::new(destination));
        self
    }

    pub async fn run(&self) -> Result<Vec<BenchmarkResult>, BenchError> {
        let runner = BenchmarkRunner::new(&self.payload, self.iterations);
        let mut results = Vec::with_capacity(self.destinations.len());
        for destination in &self.destinations {
            report::print_benchmark_start(destination.kind(), self.iterations);
            let result = runner.run(destination.as_ref()).await?;
            report::print_result(&result);
            results.push(result);
        }
        Ok(results)
    }
}
