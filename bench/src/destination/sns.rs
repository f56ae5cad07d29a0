use crate::destination::{Destination, DestinationKind};
use crate::error::BenchError;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sns::Client;

/// Publishes each message to an SNS topic.
#[derive(Debug, Clone)]
pub struct SnsTopic {
    client: Client,
    topic_arn: String,
}

impl SnsTopic {
    pub fn new(sdk_config: &SdkConfig, topic_arn: impl Into<String>) -> Self {
        Self {
            client: Client::new(sdk_config),
            topic_arn: topic_arn.into(),
        }
    }

    pub fn topic_arn(&self) -> &str {
        &self.topic_arn
    }
}

#[async_trait]
impl Destination for SnsTopic {
    fn kind(&self) -> DestinationKind {
        DestinationKind::Sns
    }

    async fn send(&self, message: &str) -> Result<(), BenchError> {
        self.client
            .publish()
            .topic_arn(&self.topic_arn)
            .message(message)
            .send()
            .await?;
        Ok(())
    }
}
