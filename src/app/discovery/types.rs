//! Discovery Data Types
//!
//! Trails, subscriber descriptions and the consumer records the probes emit.

#![warn(clippy::all, rust_2018_idioms)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse AWS service tag attached to every sink and consumer the walk finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ServiceFamily {
    CloudWatchLogsLogGroup,
    S3,
    Lambda,
    #[serde(rename = "SQS")]
    Sqs,
    #[serde(rename = "SNS")]
    Sns,
    Kinesis,
    Firehose,
    OpenSearch,
}

impl ServiceFamily {
    /// Order in which risk tables are printed.
    pub const REPORT_ORDER: [ServiceFamily; 8] = [
        ServiceFamily::S3,
        ServiceFamily::CloudWatchLogsLogGroup,
        ServiceFamily::Sns,
        ServiceFamily::Sqs,
        ServiceFamily::Lambda,
        ServiceFamily::OpenSearch,
        ServiceFamily::Firehose,
        ServiceFamily::Kinesis,
    ];

    /// Human readable name used in console output
    pub fn label(&self) -> &'static str {
        match self {
            ServiceFamily::CloudWatchLogsLogGroup => "CloudWatch log group",
            ServiceFamily::S3 => "S3",
            ServiceFamily::Lambda => "Lambda",
            ServiceFamily::Sqs => "SQS",
            ServiceFamily::Sns => "SNS",
            ServiceFamily::Kinesis => "Kinesis",
            ServiceFamily::Firehose => "Firehose",
            ServiceFamily::OpenSearch => "OpenSearch",
        }
    }
}

impl fmt::Display for ServiceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of a CloudTrail trail, reduced to the attributes the walk reads.
///
/// Field names follow the CloudTrail `DescribeTrails` JSON shape so fixtures
/// can be pasted straight from `aws cloudtrail describe-trails` output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Trail {
    pub name: String,
    #[serde(default)]
    pub cloud_watch_logs_log_group_arn: Option<String>,
    #[serde(default)]
    pub s3_bucket_name: Option<String>,
}

impl Trail {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_log_group_arn(mut self, arn: impl Into<String>) -> Self {
        self.cloud_watch_logs_log_group_arn = Some(arn.into());
        self
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.s3_bucket_name = Some(bucket.into());
        self
    }

    /// Log-group sink, treating an empty ARN as absent
    pub fn log_group_sink(&self) -> Option<&str> {
        self.cloud_watch_logs_log_group_arn
            .as_deref()
            .filter(|arn| !arn.is_empty())
    }

    /// Bucket sink, treating an empty name as absent
    pub fn bucket_sink(&self) -> Option<&str> {
        self.s3_bucket_name
            .as_deref()
            .filter(|bucket| !bucket.is_empty())
    }
}

/// One CloudWatch Logs subscription filter on a log group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscriptionFilter {
    #[serde(default)]
    pub filter_name: Option<String>,
    #[serde(default)]
    pub destination_arn: Option<String>,
}

/// Destinations registered in an S3 bucket notification configuration.
///
/// The three collections are independent; each entry is a destination ARN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketNotificationConfig {
    #[serde(default)]
    pub lambda_function_arns: Vec<String>,
    #[serde(default)]
    pub queue_arns: Vec<String>,
    #[serde(default)]
    pub topic_arns: Vec<String>,
}

impl BucketNotificationConfig {
    pub fn is_empty(&self) -> bool {
        self.lambda_function_arns.is_empty()
            && self.queue_arns.is_empty()
            && self.topic_arns.is_empty()
    }
}

/// A downstream consumer found behind a sink.
///
/// `family` is `None` when the destination did not match any classification
/// rule: it still becomes a graph edge but has no risk table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerRecord {
    pub destination: String,
    pub family: Option<ServiceFamily>,
}

impl ConsumerRecord {
    pub fn new(destination: impl Into<String>, family: Option<ServiceFamily>) -> Self {
        Self {
            destination: destination.into(),
            family,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_order_covers_every_family_once() {
        let mut seen = ServiceFamily::REPORT_ORDER.to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_empty_sinks_are_absent() {
        let trail = Trail::new("t").with_log_group_arn("").with_bucket("");
        assert_eq!(trail.log_group_sink(), None);
        assert_eq!(trail.bucket_sink(), None);

        let trail = Trail::new("t").with_bucket("audit-bucket");
        assert_eq!(trail.bucket_sink(), Some("audit-bucket"));
        assert_eq!(trail.log_group_sink(), None);
    }

    #[test]
    fn test_family_tags_serialize_like_service_names() {
        assert_eq!(
            serde_json::to_string(&ServiceFamily::Sqs).unwrap(),
            "\"SQS\""
        );
        assert_eq!(
            serde_json::to_string(&ServiceFamily::CloudWatchLogsLogGroup).unwrap(),
            "\"CloudWatchLogsLogGroup\""
        );
    }

    #[test]
    fn test_notification_config_emptiness() {
        assert!(BucketNotificationConfig::default().is_empty());
        let config = BucketNotificationConfig {
            topic_arns: vec!["arn:aws:sns:us-east-1:111122223333:alerts".to_string()],
            ..Default::default()
        };
        assert!(!config.is_empty());
    }
}
