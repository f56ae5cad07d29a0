use aws_sdk_sns::error::DisplayErrorContext;
use aws_sdk_sns::operation::publish::PublishError;
use aws_sdk_sqs::operation::send_message::SendMessageError;
use thiserror::Error;

pub type SnsSdkError = aws_sdk_sns::error::SdkError<PublishError>;
pub type SqsSdkError = aws_sdk_sqs::error::SdkError<SendMessageError>;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Cannot generate payload")]
    CannotGeneratePayload(#[from] rand::Error),
    #[error("SNS publish failed: {}", DisplayErrorContext(.0))]
    SnsPublishFailed(Box<SnsSdkError>),
    #[error("SQS send failed: {}", aws_sdk_sqs::error::DisplayErrorContext(.0))]
    SqsSendFailed(Box<SqsSdkError>),
    #[error("Destination: {destination} failed: {reason}")]
    DestinationFailed { destination: String, reason: String },
}

impl From<SnsSdkError> for BenchError {
    fn from(error: SnsSdkError) -> Self {
        BenchError::SnsPublishFailed(Box::new(error))
    }
}

impl From<SqsSdkError> for BenchError {
    fn from(error: SqsSdkError) -> Self {
        BenchError::SqsSendFailed(Box::new(error))
    }
}
