//! Trail and Consumer Discovery
//!
//! Everything the walk needs to find out who receives trail data:
//!
//! - [`types`] - trails, subscription filters, notification configurations
//!   and the [`ConsumerRecord`]s the probes emit
//! - [`arn`] - log group name extraction
//! - [`classifier`] - substring rule table mapping destination ARNs to a
//!   [`ServiceFamily`]
//! - [`sources`] - the collaborator traits fronting CloudTrail, CloudWatch
//!   Logs and S3
//! - [`probes`] - the log-group and bucket probes

#![warn(clippy::all, rust_2018_idioms)]

pub mod arn;
pub mod classifier;
pub mod error;
pub mod probes;
pub mod sources;
pub mod types;

// Re-export commonly used types
pub use arn::log_group_name_from_arn;
pub use classifier::{classify, ClassificationRule};
pub use error::WalkError;
pub use probes::{discover_bucket_subscribers, discover_log_group_subscribers};
pub use sources::{BucketNotificationSource, SubscriptionFilterSource, TrailSource};
pub use types::{BucketNotificationConfig, ConsumerRecord, ServiceFamily, SubscriptionFilter, Trail};
