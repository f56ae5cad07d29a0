use crate::destination::DestinationKind;
use crate::payload::Payload;
use crate::statistics::BenchmarkResult;
use std::fmt::{Display, Formatter};
use std::num::NonZeroU32;

impl Display for BenchmarkResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "performed {} {} {} in {:?} ({:?} per request, {:?} max and {:?} min)",
            self.iterations,
            self.kind,
            self.kind.operation(),
            self.total,
            self.average,
            self.max,
            self.min
        )
    }
}

pub fn payload_summary(payload: &Payload) -> [String; 2] {
    [
        format!("generated {} byte payload", payload.len()),
        format!(
            "payload's hash is {} (calculated in {:?})",
            payload.hash(),
            payload.hash_elapsed()
        ),
    ]
}

pub fn benchmark_start(kind: DestinationKind, iterations: NonZeroU32) -> String {
    format!("{kind} test begins ({iterations} iters)")
}

pub fn print_payload_summary(payload: &Payload) {
    for line in payload_summary(payload) {
        println!("{line}");
    }
}

pub fn print_benchmark_start(kind: DestinationKind, iterations: NonZeroU32) {
    println!("{}", benchmark_start(kind, iterations));
}

pub fn print_result(result: &BenchmarkResult) {
    println!("{result}");
}
