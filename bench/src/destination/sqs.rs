use crate::destination::{Destination, DestinationKind};
use crate::error::BenchError;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sqs::Client;

/// Sends each message to an SQS queue, identified by its URL.
#[derive(Debug, Clone)]
pub struct SqsQueue {
    client: Client,
    queue_url: String,
}

impl SqsQueue {
    pub fn new(sdk_config: &SdkConfig, queue_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(sdk_config),
            queue_url: queue_url.into(),
        }
    }

    pub fn queue_url(&self) -> &str {
        &self.queue_url
    }
}

#[async_trait]
impl Destination for SqsQueue {
    fn kind(&self) -> DestinationKind {
        DestinationKind::Sqs
    }

    async fn send(&self, message: &str) -> Result<(), BenchError> {
        self.client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(message)
            .send()
            .await?;
        Ok(())
    }
}
