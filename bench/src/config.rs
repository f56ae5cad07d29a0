use crate::error::BenchError;
use figment::{providers::Env, Figment};
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::num::NonZeroU32;
use tracing::info;

pub const ITERATIONS_TO_PERFORM: &str = "ITERATIONS_TO_PERFORM";
pub const PAYLOAD_LENGTH: &str = "PAYLOAD_LENGTH";
pub const SNS_TOPIC: &str = "SNS_TOPIC";
pub const SQS_QUEUE: &str = "SQS_QUEUE";

/// Benchmark settings, read once from the process environment.
///
/// Both numeric settings are required. The destinations are read as raw
/// strings and default to empty, a bad identifier surfaces as a failed call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BenchConfig {
    pub iterations_to_perform: NonZeroU32,
    pub payload_length: usize,
    #[serde(skip)]
    pub sns_topic: String,
    #[serde(skip)]
    pub sqs_queue: String,
}

impl BenchConfig {
    pub fn from_env() -> Result<Self, BenchError> {
        let mut config: BenchConfig = Figment::new()
            .merge(Env::raw().only(&[ITERATIONS_TO_PERFORM, PAYLOAD_LENGTH]))
            .extract()
            .map_err(|error| BenchError::InvalidConfiguration(error.to_string()))?;
        // Typed parsing would turn identifiers such as `12345` or `true` into non-strings.
        config.sns_topic = Env::var_or(SNS_TOPIC, "");
        config.sqs_queue = Env::var_or(SQS_QUEUE, "");

        info!("Benchmark config loaded from environment: {config}");
        Ok(config)
    }
}

impl Display for BenchConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ iterations: {}, payload_length: {}, sns_topic: '{}', sqs_queue: '{}' }}",
            self.iterations_to_perform, self.payload_length, self.sns_topic, self.sqs_queue
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn set_required(jail: &mut Jail, iterations: &str, payload_length: &str) {
        jail.set_env(ITERATIONS_TO_PERFORM, iterations);
        jail.set_env(PAYLOAD_LENGTH, payload_length);
    }

    #[test]
    fn should_load_all_values_from_environment() {
        Jail::expect_with(|jail| {
            set_required(jail, "3", "10");
            jail.set_env(SNS_TOPIC, "arn:aws:sns:eu-west-1:123456789012:bench");
            jail.set_env(
                SQS_QUEUE,
                "https://sqs.eu-west-1.amazonaws.com/123456789012/bench",
            );

            let config = BenchConfig::from_env().expect("config should load");
            assert_eq!(config.iterations_to_perform.get(), 3);
            assert_eq!(config.payload_length, 10);
            assert_eq!(config.sns_topic, "arn:aws:sns:eu-west-1:123456789012:bench");
            assert_eq!(
                config.sqs_queue,
                "https://sqs.eu-west-1.amazonaws.com/123456789012/bench"
            );
            Ok(())
        });
    }

    #[test]
    fn should_leave_missing_destinations_empty() {
        Jail::expect_with(|jail| {
            set_required(jail, "1", "0");

            let config = BenchConfig::from_env().expect("config should load");
            assert_eq!(config.payload_length, 0);
            assert!(config.sns_topic.is_empty());
            assert!(config.sqs_queue.is_empty());
            Ok(())
        });
    }

    #[test]
    fn should_keep_scalar_looking_destinations_as_strings() {
        Jail::expect_with(|jail| {
            set_required(jail, "3", "10");
            for identifier in ["12345", "true", "[a]", "1.5", "007"] {
                jail.set_env(SNS_TOPIC, identifier);
                jail.set_env(SQS_QUEUE, identifier);

                let config = BenchConfig::from_env().expect("config should load");
                assert_eq!(config.sns_topic, identifier);
                assert_eq!(config.sqs_queue, identifier);
            }
            Ok(())
        });
    }

    #[test]
    fn should_fail_when_iterations_are_missing() {
        Jail::expect_with(|jail| {
            jail.set_env(PAYLOAD_LENGTH, "10");

            let result = BenchConfig::from_env();
            assert!(matches!(result, Err(BenchError::InvalidConfiguration(_))));
            Ok(())
        });
    }

    #[test]
    fn should_fail_when_payload_length_is_missing() {
        Jail::expect_with(|jail| {
            jail.set_env(ITERATIONS_TO_PERFORM, "10");

            let result = BenchConfig::from_env();
            assert!(matches!(result, Err(BenchError::InvalidConfiguration(_))));
            Ok(())
        });
    }

    #[test]
    fn should_fail_when_values_are_not_numeric() {
        Jail::expect_with(|jail| {
            set_required(jail, "three", "10");
            assert!(BenchConfig::from_env().is_err());

            set_required(jail, "3", "ten");
            assert!(BenchConfig::from_env().is_err());

            set_required(jail, "3", "-1");
            assert!(BenchConfig::from_env().is_err());
            Ok(())
        });
    }

    #[test]
    fn should_reject_zero_iterations() {
        Jail::expect_with(|jail| {
            set_required(jail, "0", "10");

            let result = BenchConfig::from_env();
            assert!(matches!(result, Err(BenchError::InvalidConfiguration(_))));
            Ok(())
        });
    }
}
