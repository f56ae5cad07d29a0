use crate::destination::DestinationKind;
use std::num::NonZeroU32;
use std::time::Duration;

/// Running minimum and maximum of per-call latencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyStats {
    min: Duration,
    max: Duration,
    samples: u32,
}

impl Default for LatencyStats {
    fn default() -> Self {
        Self {
            min: Duration::MAX,
            max: Duration::ZERO,
            samples: 0,
        }
    }
}

impl LatencyStats {
    pub fn record(&mut self, latency: Duration) {
        if latency > self.max {
            self.max = latency;
        }
        if latency < self.min {
            self.min = latency;
        }
        self.samples += 1;
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }
}

/// Outcome of one destination's run.
///
/// `total` is the wall time of the whole loop, so `average` also carries the
/// overhead between calls and is not the mean of the samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkResult {
    pub kind: DestinationKind,
    pub iterations: NonZeroU32,
    pub total: Duration,
    pub average: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl BenchmarkResult {
    pub fn new(
        kind: DestinationKind,
        iterations: NonZeroU32,
        total: Duration,
        stats: &LatencyStats,
    ) -> Self {
        debug_assert_eq!(stats.samples(), iterations.get());
        Self {
            kind,
            iterations,
            total,
            average: total / iterations.get(),
            min: stats.min(),
            max: stats.max(),
        }
    }
}
