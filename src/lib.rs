//! trailguard - CloudTrail consumer topology and risk report
//!
//! trailguard takes a one-shot snapshot of an AWS account's CloudTrail
//! configuration and answers a single question: once trail data leaves
//! CloudTrail, who else receives it?
//!
//! # Core Features
//!
//! - **Trail walk**: every trail returned by `DescribeTrails` is followed to
//!   its CloudWatch Logs log group and its S3 bucket
//! - **Consumer discovery**: log-group subscription filters and bucket event
//!   notifications are enumerated and classified by service family
//! - **Topology graph**: the discovered flow is written once as a Graphviz
//!   DOT artifact
//! - **Risk report**: a static table of high-risk API commands is printed
//!   for every service family seen during the walk
//!
//! # Architecture Overview
//!
//! - **Discovery** ([`app::discovery`]): data types, ARN parsing, the
//!   service classifier and the two sink probes
//! - **Topology** ([`app::topology`]): graph builder and discovered-services set
//! - **Walker** ([`app::walker`]): the orchestrator that folds probe output
//!   into the topology
//! - **Integration Layer** ([`app::aws_services`]): AWS SDK adapters behind
//!   the collaborator traits in [`app::discovery::sources`]
//! - **Reporting** ([`app::risk_catalogue`]): static risk tables and text rendering
//!
//! The walker never talks to the SDK directly. Everything external sits
//! behind the three traits in [`app::discovery::sources`], which is also how
//! the integration tests drive it.

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
pub mod logging_macros;

pub mod app;

pub use app::walker::{TrailWalker, WalkOutcome};
