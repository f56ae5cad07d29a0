use crate::config::BenchConfig;
use crate::destination::sns::SnsTopic;
use crate::destination::sqs::SqsQueue;
use crate::error::BenchError;
use crate::payload::Payload;
use crate::report;
use crate::runner::BenchmarkSuite;
use crate::statistics::BenchmarkResult;
use aws_config::BehaviorVersion;
use lambda_runtime::LambdaEvent;
use serde_json::Value;
use tracing::{debug, info};

/// Lambda entry point. The event body is ignored, each invocation is one full run.
pub async fn handle_event(event: LambdaEvent<Value>) -> Result<(), lambda_runtime::Error> {
    debug!("Received invocation: {}", event.context.request_id);
    run_benchmarks().await?;
    Ok(())
}

/// Loads the config, builds the payload and benchmarks SNS, then SQS.
///
/// Nothing touches the network until the config and payload are ready.
pub async fn run_benchmarks() -> Result<Vec<BenchmarkResult>, BenchError> {
    let config = BenchConfig::from_env()?;
    let payload = Payload::generate(config.payload_length)?;
    report::print_payload_summary(&payload);

    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let topic = SnsTopic::new(&sdk_config, config.sns_topic);
    let queue = SqsQueue::new(&sdk_config, config.sqs_queue);
    info!(
        "Benchmarking SNS topic: '{}' and SQS queue: '{}'",
        topic.topic_arn(),
        queue.queue_url()
    );

    BenchmarkSuite::new(payload, config.iterations_to_perform)
        .with_destination(topic)
        .with_destination(queue)
        .run()
        .await
}
