//! Risk Catalogue
//!
//! Static tables of high-risk API commands per service family, and the
//! console rendering of the discovery summary and risk report. Nothing here
//! talks to AWS; the catalogue is consulted once per discovered family after
//! the walk.

pub mod render;
pub mod tables;

pub use render::{render_discovery_summary, render_risk_report, render_risk_table};
pub use tables::{risk_table, RiskTable};
