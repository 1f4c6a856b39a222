use async_trait::async_trait;
use aws_sdk_cloudtrail as cloudtrail;

use crate::app::discovery::{Trail, TrailSource, WalkError};
use crate::app::sdk_errors::external_api_error;

#[derive(Clone)]
pub struct CloudTrailService {
    client: cloudtrail::Client,
}

impl CloudTrailService {
    pub fn new(aws_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: cloudtrail::Client::new(aws_config),
        }
    }

    fn trail_from_sdk(trail: cloudtrail::types::Trail) -> Trail {
        Trail {
            name: trail.name.unwrap_or_default(),
            cloud_watch_logs_log_group_arn: trail.cloud_watch_logs_log_group_arn,
            s3_bucket_name: trail.s3_bucket_name,
        }
    }
}

#[async_trait]
impl TrailSource for CloudTrailService {
    /// Trails visible from the configured region, shadow trails of
    /// multi-region trails included
    async fn list_trails(&self) -> Result<Vec<Trail>, WalkError> {
        let response = self
            .client
            .describe_trails()
            .send()
            .await
            .map_err(|err| external_api_error("CloudTrail", "DescribeTrails", err))?;

        let trails: Vec<Trail> = response
            .trail_list
            .unwrap_or_default()
            .into_iter()
            .map(Self::trail_from_sdk)
            .collect();

        trace_debug!("DescribeTrails returned {} trail(s)", trails.len());
        Ok(trails)
    }
}
