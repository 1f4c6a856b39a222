//! Walk accumulators: the topology graph and the discovered-services set.
//!
//! Both are owned by the [`crate::app::walker::TrailWalker`] for the length
//! of one run and handed to the caller in the walk outcome.

pub mod graph;
pub mod service_set;

pub use graph::TopologyGraph;
pub use service_set::ServiceSet;
