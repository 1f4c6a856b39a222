use async_trait::async_trait;
use aws_sdk_cloudwatchlogs as logs;

use crate::app::discovery::{SubscriptionFilter, SubscriptionFilterSource, WalkError};
use crate::app::sdk_errors::external_api_error;

#[derive(Clone)]
pub struct LogsService {
    client: logs::Client,
}

impl LogsService {
    pub fn new(aws_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: logs::Client::new(aws_config),
        }
    }

    fn filter_from_sdk(filter: logs::types::SubscriptionFilter) -> SubscriptionFilter {
        SubscriptionFilter {
            filter_name: filter.filter_name,
            destination_arn: filter.destination_arn,
        }
    }
}

#[async_trait]
impl SubscriptionFilterSource for LogsService {
    async fn list_subscription_filters(
        &self,
        log_group_name: &str,
    ) -> Result<Vec<SubscriptionFilter>, WalkError> {
        let mut paginator = self
            .client
            .describe_subscription_filters()
            .log_group_name(log_group_name)
            .into_paginator()
            .send();

        let mut filters = Vec::new();
        while let Some(page) = paginator.next().await {
            let page = page.map_err(|err| {
                external_api_error("CloudWatch Logs", "DescribeSubscriptionFilters", err)
            })?;
            if let Some(filter_list) = page.subscription_filters {
                filters.extend(filter_list.into_iter().map(Self::filter_from_sdk));
            }
        }

        trace_debug!(
            "DescribeSubscriptionFilters returned {} filter(s) for {}",
            filters.len(),
            log_group_name
        );
        Ok(filters)
    }
}
