pub mod sns;
pub mod sqs;

use crate::error::BenchError;
use async_trait::async_trait;
use derive_more::Display;

#[derive(Debug, Display, Copy, Clone, PartialEq, Eq)]
pub enum DestinationKind {
    #[display("sns")]
    Sns,
    #[display("sqs")]
    Sqs,
}

impl DestinationKind {
    /// Name of the call being measured, as printed in the summary line.
    pub fn operation(&self) -> &'static str {
        match self {
            DestinationKind::Sns => "publishes",
            DestinationKind::Sqs => "send",
        }
    }
}

/// A messaging endpoint that accepts a single message per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Destination: Send + Sync {
    fn kind(&self) -> DestinationKind;
    async fn send(&self, message: &str) -> Result<(), BenchError>;
}
