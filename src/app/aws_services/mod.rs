//! AWS SDK adapters
//!
//! One service wrapper per AWS API the walk reads, each implementing the
//! matching collaborator trait from [`crate::app::discovery::sources`].
//! All three clients are built from a single [`aws_config::SdkConfig`], so
//! region and credentials come from the SDK's default provider chain.

#![warn(clippy::all, rust_2018_idioms)]

pub mod cloudtrail;
pub mod logs;
pub mod s3;

use aws_config::BehaviorVersion;

pub use cloudtrail::CloudTrailService;
pub use logs::LogsService;
pub use s3::S3Service;

/// The three service adapters the walker needs
#[derive(Clone)]
pub struct AwsServices {
    pub cloudtrail: CloudTrailService,
    pub logs: LogsService,
    pub s3: S3Service,
}

impl AwsServices {
    pub fn new(aws_config: &aws_config::SdkConfig) -> Self {
        Self {
            cloudtrail: CloudTrailService::new(aws_config),
            logs: LogsService::new(aws_config),
            s3: S3Service::new(aws_config),
        }
    }

    /// Load the ambient AWS configuration and build the adapters
    pub async fn from_env() -> Self {
        let aws_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        match aws_config.region() {
            Some(region) => {
                trace_info!("Using AWS region {}", region);
            }
            None => {
                trace_warn!("No AWS region configured; requests will fail to resolve an endpoint");
            }
        }
        Self::new(&aws_config)
    }
}
