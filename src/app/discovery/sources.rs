//! External collaborators of the walk.
//!
//! Each trait covers exactly one AWS read the walk performs. The SDK backed
//! implementations live in [`crate::app::aws_services`]; tests provide
//! in-memory ones.

use async_trait::async_trait;

use super::types::{BucketNotificationConfig, SubscriptionFilter, Trail};
use super::WalkError;

/// Audit-trail service (CloudTrail `DescribeTrails`)
#[async_trait]
pub trait TrailSource: Send + Sync {
    async fn list_trails(&self) -> Result<Vec<Trail>, WalkError>;
}

/// Log service (CloudWatch Logs `DescribeSubscriptionFilters`)
#[async_trait]
pub trait SubscriptionFilterSource: Send + Sync {
    /// Every subscription filter on the log group, across all pages
    async fn list_subscription_filters(
        &self,
        log_group_name: &str,
    ) -> Result<Vec<SubscriptionFilter>, WalkError>;
}

/// Storage service (S3 `GetBucketNotificationConfiguration`)
#[async_trait]
pub trait BucketNotificationSource: Send + Sync {
    async fn bucket_notification_config(
        &self,
        bucket: &str,
    ) -> Result<BucketNotificationConfig, WalkError>;
}
