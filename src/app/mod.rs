//! Core application modules for trailguard.
//!
//! # Module Organization
//!
//! ## Walk
//! - [`discovery`] - trail and consumer data types, classifier, sink probes
//! - [`topology`] - directed graph builder and discovered-services set
//! - [`walker`] - the trail-to-consumer walk
//!
//! ## AWS Integration
//! - [`aws_services`] - CloudTrail, CloudWatch Logs and S3 adapters
//! - [`sdk_errors`] - categorisation of AWS SDK failures for diagnostics
//!
//! ## Output and Infrastructure
//! - [`risk_catalogue`] - static risk tables and report rendering
//! - [`config`] - run configuration from the environment
//! - [`artifact`] - graph artifact persistence

pub mod artifact;
pub mod aws_services;
pub mod config;
pub mod discovery;
pub mod risk_catalogue;
pub mod sdk_errors;
pub mod topology;
pub mod walker;
