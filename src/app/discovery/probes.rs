//! Sink probes
//!
//! A probe asks one sink who subscribes to it and returns the answer as
//! [`ConsumerRecord`]s. Probes own no state; the walker folds their output
//! into the graph and the service set.

#![warn(clippy::all, rust_2018_idioms)]

use super::arn::log_group_name_from_arn;
use super::classifier::classify;
use super::sources::{BucketNotificationSource, SubscriptionFilterSource};
use super::types::{ConsumerRecord, ServiceFamily};
use super::WalkError;

/// Consumers subscribed to a log group through subscription filters.
///
/// The ARN is validated before any request is made. Destinations that match
/// no classification rule are returned with `family: None`.
pub async fn discover_log_group_subscribers(
    source: &dyn SubscriptionFilterSource,
    log_group_arn: &str,
) -> Result<Vec<ConsumerRecord>, WalkError> {
    let log_group_name = log_group_name_from_arn(log_group_arn)?;
    trace_debug!("Listing subscription filters for log group {}", log_group_name);

    let filters = source.list_subscription_filters(log_group_name).await?;

    let mut consumers = Vec::with_capacity(filters.len());
    for filter in filters {
        let Some(destination) = filter.destination_arn.filter(|arn| !arn.is_empty()) else {
            trace_warn!(
                "Subscription filter {:?} on {} has no destination ARN, skipping",
                filter.filter_name,
                log_group_name
            );
            continue;
        };

        let family = classify(&destination);
        trace_trace!("Log group {} -> {} ({:?})", log_group_name, destination, family);
        consumers.push(ConsumerRecord::new(destination, family));
    }

    Ok(consumers)
}

/// Consumers notified by a bucket's event notification configuration.
///
/// Families are structural: Lambda configurations yield Lambda, queue
/// configurations SQS and topic configurations SNS.
pub async fn discover_bucket_subscribers(
    source: &dyn BucketNotificationSource,
    bucket: &str,
) -> Result<Vec<ConsumerRecord>, WalkError> {
    trace_debug!("Fetching notification configuration for bucket {}", bucket);

    let config = source.bucket_notification_config(bucket).await?;
    if config.is_empty() {
        trace_debug!("Bucket {} has no event notifications", bucket);
        return Ok(Vec::new());
    }

    let collections = [
        (config.lambda_function_arns, ServiceFamily::Lambda),
        (config.queue_arns, ServiceFamily::Sqs),
        (config.topic_arns, ServiceFamily::Sns),
    ];

    let consumers = collections
        .into_iter()
        .flat_map(|(arns, family)| {
            arns.into_iter()
                .map(move |arn| ConsumerRecord::new(arn, Some(family)))
        })
        .collect();

    Ok(consumers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::discovery::types::{BucketNotificationConfig, SubscriptionFilter};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticFilters {
        filters: Vec<SubscriptionFilter>,
        calls: AtomicUsize,
    }

    impl StaticFilters {
        fn new(destinations: &[Option<&str>]) -> Self {
            Self {
                filters: destinations
                    .iter()
                    .map(|destination| SubscriptionFilter {
                        filter_name: Some("filter".to_string()),
                        destination_arn: destination.map(str::to_string),
                    })
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SubscriptionFilterSource for StaticFilters {
        async fn list_subscription_filters(
            &self,
            log_group_name: &str,
        ) -> Result<Vec<SubscriptionFilter>, WalkError> {
            assert_eq!(log_group_name, "myGroup");
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.filters.clone())
        }
    }

    struct StaticNotifications(BucketNotificationConfig);

    #[async_trait]
    impl BucketNotificationSource for StaticNotifications {
        async fn bucket_notification_config(
            &self,
            _bucket: &str,
        ) -> Result<BucketNotificationConfig, WalkError> {
            Ok(self.0.clone())
        }
    }

    const LOG_GROUP: &str = "arn:aws:logs:us-east-1:111122223333:log-group:myGroup:*";

    #[tokio::test]
    async fn test_log_group_probe_classifies_each_filter() {
        let source = StaticFilters::new(&[
            Some("arn:aws:lambda:us-east-1:111122223333:function:forwarder"),
            Some("arn:aws:logs:us-east-1:444455556666:destination:central"),
        ]);

        let consumers = discover_log_group_subscribers(&source, LOG_GROUP).await.unwrap();

        assert_eq!(
            consumers,
            vec![
                ConsumerRecord::new(
                    "arn:aws:lambda:us-east-1:111122223333:function:forwarder",
                    Some(ServiceFamily::Lambda)
                ),
                ConsumerRecord::new("arn:aws:logs:us-east-1:444455556666:destination:central", None),
            ]
        );
    }

    #[tokio::test]
    async fn test_log_group_probe_skips_filters_without_destination() {
        let source = StaticFilters::new(&[None, Some("")]);
        let consumers = discover_log_group_subscribers(&source, LOG_GROUP).await.unwrap();
        assert!(consumers.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_arn_fails_before_any_request() {
        let source = StaticFilters::new(&[]);
        let err = discover_log_group_subscribers(&source, "arn:aws:logs:us-east-1:myGroup")
            .await
            .unwrap_err();
        assert!(matches!(err, WalkError::MalformedArn { .. }));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_bucket_probe_uses_collection_kind() {
        let source = StaticNotifications(BucketNotificationConfig {
            lambda_function_arns: vec!["arn:aws:lambda:us-east-1:111122223333:function:scan".to_string()],
            queue_arns: vec!["arn:aws:sqs:us-east-1:111122223333:lambda-named-queue".to_string()],
            topic_arns: vec!["arn:aws:sns:us-east-1:111122223333:alerts".to_string()],
        });

        let consumers = discover_bucket_subscribers(&source, "audit-bucket").await.unwrap();
        let families: Vec<_> = consumers.iter().map(|c| c.family).collect();

        // the queue name mentions lambda but is still an SQS consumer
        assert_eq!(
            families,
            vec![
                Some(ServiceFamily::Lambda),
                Some(ServiceFamily::Sqs),
                Some(ServiceFamily::Sns)
            ]
        );
    }

    #[tokio::test]
    async fn test_bucket_without_notifications() {
        let source = StaticNotifications(BucketNotificationConfig::default());
        let consumers = discover_bucket_subscribers(&source, "audit-bucket").await.unwrap();
        assert!(consumers.is_empty());
    }
}
