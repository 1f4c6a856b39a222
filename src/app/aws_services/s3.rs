use async_trait::async_trait;
use aws_sdk_s3 as s3;

use crate::app::discovery::{BucketNotificationConfig, BucketNotificationSource, WalkError};
use crate::app::sdk_errors::external_api_error;

#[derive(Clone)]
pub struct S3Service {
    client: s3::Client,
}

impl S3Service {
    pub fn new(aws_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: s3::Client::new(aws_config),
        }
    }
}

#[async_trait]
impl BucketNotificationSource for S3Service {
    /// Lambda, queue and topic destinations of the bucket's notification
    /// configuration. EventBridge delivery is not a per-consumer
    /// destination and is not reported.
    async fn bucket_notification_config(
        &self,
        bucket: &str,
    ) -> Result<BucketNotificationConfig, WalkError> {
        let response = self
            .client
            .get_bucket_notification_configuration()
            .bucket(bucket)
            .send()
            .await
            .map_err(|err| {
                external_api_error("S3", "GetBucketNotificationConfiguration", err)
            })?;

        let config = BucketNotificationConfig {
            lambda_function_arns: response
                .lambda_function_configurations
                .unwrap_or_default()
                .into_iter()
                .map(|config| config.lambda_function_arn)
                .collect(),
            queue_arns: response
                .queue_configurations
                .unwrap_or_default()
                .into_iter()
                .map(|config| config.queue_arn)
                .collect(),
            topic_arns: response
                .topic_configurations
                .unwrap_or_default()
                .into_iter()
                .map(|config| config.topic_arn)
                .collect(),
        };

        trace_debug!(
            "Bucket {} notifies {} function(s), {} queue(s), {} topic(s)",
            bucket,
            config.lambda_function_arns.len(),
            config.queue_arns.len(),
            config.topic_arns.len()
        );
        Ok(config)
    }
}
