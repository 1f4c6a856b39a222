//! Text rendering for the console report.

use std::fmt::Write as _;

use super::tables::{risk_table, RiskTable};
use crate::app::discovery::ConsumerRecord;
use crate::app::topology::ServiceSet;
use crate::app::walker::TrailSummary;

const COMMAND_HEADER: &str = "Command";
const DESCRIPTION_HEADER: &str = "Description";

/// Render one risk table as a two column text table.
///
/// Each column is as wide as its widest cell; the border spans both columns
/// plus the separators.
pub fn render_risk_table(table: &RiskTable) -> String {
    let key_width = table
        .entries
        .iter()
        .map(|(command, _)| command.chars().count())
        .chain(std::iter::once(COMMAND_HEADER.len()))
        .max()
        .unwrap_or_default();
    let value_width = table
        .entries
        .iter()
        .map(|(_, description)| description.chars().count())
        .chain(std::iter::once(DESCRIPTION_HEADER.len()))
        .max()
        .unwrap_or_default();
    let border = format!(" {}\n", "-".repeat(key_width + value_width + 5));

    let mut out = String::new();
    let _ = writeln!(out, "      -  Risks of some {} commands  -  ", table.title);
    out.push_str(&border);
    let _ = writeln!(
        out,
        "| {:<key_width$} | {:<value_width$} |",
        COMMAND_HEADER, DESCRIPTION_HEADER
    );
    out.push_str(&border);
    for (command, description) in table.entries {
        let _ = writeln!(out, "| {:<key_width$} | {:<value_width$} |", command, description);
    }
    out.push_str(&border);
    out
}

/// Render the risk tables of every discovered family, in report order.
///
/// Returns an empty string when nothing was discovered.
pub fn render_risk_report(services: &ServiceSet) -> String {
    if services.is_empty() {
        return String::new();
    }

    let mut out = String::from("----------\n\nPossible risks associated with the services used: \n");
    for family in services.in_report_order() {
        out.push_str(&render_risk_table(risk_table(family)));
    }
    out
}

/// Render what each trail was found to be connected to.
pub fn render_discovery_summary(trails: &[TrailSummary]) -> String {
    let mut out = String::new();
    for trail in trails {
        let _ = writeln!(out, "\nTRAIL NAME: {}", trail.name);
        if let Some(arn) = &trail.log_group_arn {
            let _ = writeln!(out, "  - CloudWatch log group ARN: {}", arn);
            write_consumers(&mut out, &trail.log_group_consumers);
        }
        if let Some(bucket) = &trail.bucket_name {
            let _ = writeln!(out, "  - Bucket Name: {}", bucket);
            write_consumers(&mut out, &trail.bucket_consumers);
        }
        if !trail.has_sinks() {
            out.push_str("  - no log group or bucket sink\n");
        }
    }
    out
}

fn write_consumers(out: &mut String, consumers: &[ConsumerRecord]) {
    for consumer in consumers {
        let label = consumer
            .family
            .map(|family| family.label())
            .unwrap_or("Unclassified");
        let _ = writeln!(out, "    - {} ARN: {}", label, consumer.destination);
    }
}
