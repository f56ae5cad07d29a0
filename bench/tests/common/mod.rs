use async_trait::async_trait;
use messaging_bench::destination::{Destination, DestinationKind};
use messaging_bench::error::BenchError;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

/// Keeps every message it receives, optionally failing on the given 1-based call.
#[derive(Clone)]
pub struct RecordingDestination {
    kind: DestinationKind,
    fail_on_call: Option<usize>,
    latency: Duration,
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingDestination {
    pub fn new(kind: DestinationKind) -> Self {
        Self {
            kind,
            fail_on_call: None,
            latency: Duration::ZERO,
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing_on(kind: DestinationKind, call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::new(kind)
        }
    }

    /// Every call waits `latency` before it is recorded.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Destination for RecordingDestination {
    fn kind(&self) -> DestinationKind {
        self.kind
    }

    async fn send(&self, message: &str) -> Result<(), BenchError> {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
        let mut messages = self.messages.lock().unwrap();
        messages.push(message.to_owned());
        if self.fail_on_call == Some(messages.len()) {
            return Err(BenchError::DestinationFailed {
                destination: self.kind.to_string(),
                reason: format!("rejected call #{}", messages.len()),
            });
        }
        Ok(())
    }
}
