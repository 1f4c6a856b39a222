//! Trail-to-consumer walk.
//!
//! The walker enumerates every trail once and, per trail, dispatches to the
//! sink probes:
//!
//! ```text
//! trail ──> log group ARN ──> subscription filter destinations
//!   └─────> bucket name ───> Lambda / SQS / SNS notification targets
//! ```
//!
//! Probe output is returned to the walker and folded into a graph and a
//! service set that only the walker writes to. The walk is sequential and
//! stops at the first error; nothing gathered up to that point is returned.

#![warn(clippy::all, rust_2018_idioms)]

use crate::app::discovery::{
    discover_bucket_subscribers, discover_log_group_subscribers, BucketNotificationSource,
    ConsumerRecord, ServiceFamily, SubscriptionFilterSource, Trail, TrailSource, WalkError,
};
use crate::app::topology::{ServiceSet, TopologyGraph};

/// What a single trail turned out to be connected to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailSummary {
    pub name: String,
    pub log_group_arn: Option<String>,
    pub log_group_consumers: Vec<ConsumerRecord>,
    pub bucket_name: Option<String>,
    pub bucket_consumers: Vec<ConsumerRecord>,
}

impl TrailSummary {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            log_group_arn: None,
            log_group_consumers: Vec::new(),
            bucket_name: None,
            bucket_consumers: Vec::new(),
        }
    }

    pub fn has_sinks(&self) -> bool {
        self.log_group_arn.is_some() || self.bucket_name.is_some()
    }
}

/// Result of a completed walk
#[derive(Debug, Clone)]
pub struct WalkOutcome {
    pub graph: TopologyGraph,
    pub services: ServiceSet,
    pub trails: Vec<TrailSummary>,
}

pub struct TrailWalker<'a> {
    trails: &'a dyn TrailSource,
    logs: &'a dyn SubscriptionFilterSource,
    storage: &'a dyn BucketNotificationSource,
    graph_name: String,
}

impl<'a> TrailWalker<'a> {
    pub fn new(
        trails: &'a dyn TrailSource,
        logs: &'a dyn SubscriptionFilterSource,
        storage: &'a dyn BucketNotificationSource,
        graph_name: impl Into<String>,
    ) -> Self {
        Self {
            trails,
            logs,
            storage,
            graph_name: graph_name.into(),
        }
    }

    /// Walk every trail in the account.
    ///
    /// An account without trails yields an empty graph and an empty service
    /// set.
    pub async fn walk(&self) -> Result<WalkOutcome, WalkError> {
        let trails = self.trails.list_trails().await?;
        trace_info!("Found {} trail(s)", trails.len());

        let mut outcome = WalkOutcome {
            graph: TopologyGraph::new(self.graph_name.as_str()),
            services: ServiceSet::new(),
            trails: Vec::with_capacity(trails.len()),
        };

        for trail in &trails {
            if trail.name.is_empty() {
                trace_warn!("Skipping trail without a name: {:?}", trail);
                continue;
            }
            let summary = self.walk_trail(trail, &mut outcome).await?;
            outcome.trails.push(summary);
        }

        trace_info!(
            "Walk finished: {} node(s), {} edge(s), {} service famil(ies)",
            outcome.graph.node_count(),
            outcome.graph.edge_count(),
            outcome.services.len()
        );
        Ok(outcome)
    }

    async fn walk_trail(
        &self,
        trail: &Trail,
        outcome: &mut WalkOutcome,
    ) -> Result<TrailSummary, WalkError> {
        trace_info!("Walking trail {}", trail.name);
        let mut summary = TrailSummary::new(&trail.name);
        outcome.graph.add_node(&trail.name);

        if let Some(log_group_arn) = trail.log_group_sink() {
            outcome.services.insert(ServiceFamily::CloudWatchLogsLogGroup);
            outcome.graph.add_edge(&trail.name, log_group_arn);

            let consumers = discover_log_group_subscribers(self.logs, log_group_arn).await?;
            trace_info!(
                "Log group {} has {} subscriber(s)",
                log_group_arn,
                consumers.len()
            );
            fold_consumers(outcome, log_group_arn, &consumers);

            summary.log_group_arn = Some(log_group_arn.to_string());
            summary.log_group_consumers = consumers;
        }

        if let Some(bucket) = trail.bucket_sink() {
            outcome.services.insert(ServiceFamily::S3);
            outcome.graph.add_edge(&trail.name, bucket);

            let consumers = discover_bucket_subscribers(self.storage, bucket).await?;
            trace_info!("Bucket {} has {} subscriber(s)", bucket, consumers.len());
            fold_consumers(outcome, bucket, &consumers);

            summary.bucket_name = Some(bucket.to_string());
            summary.bucket_consumers = consumers;
        }

        if !summary.has_sinks() {
            trace_debug!("Trail {} has no log group or bucket sink", trail.name);
        }

        Ok(summary)
    }
}

fn fold_consumers(outcome: &mut WalkOutcome, sink: &str, consumers: &[ConsumerRecord]) {
    for consumer in consumers {
        outcome.graph.add_edge(sink, &consumer.destination);
        if let Some(family) = consumer.family {
            outcome.services.insert(family);
        }
    }
}
