//! Service family classification for subscription destinations
//!
//! Subscription filter destinations arrive as bare ARNs, so their service
//! family is inferred from substrings. The rules live in a table rather than
//! in the probe so the set can be extended and tested on its own.
//!
//! Bucket notifications never go through this module: the configuration
//! collection an entry came from already fixes its family.

#![warn(clippy::all, rust_2018_idioms)]

use super::types::ServiceFamily;

/// One substring rule. `unless` suppresses the match when the identifier
/// also contains that substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationRule {
    pub pattern: &'static str,
    pub unless: Option<&'static str>,
    pub family: ServiceFamily,
}

impl ClassificationRule {
    pub const fn new(pattern: &'static str, family: ServiceFamily) -> Self {
        Self {
            pattern,
            unless: None,
            family,
        }
    }

    pub const fn unless(self, excluded: &'static str) -> Self {
        Self {
            unless: Some(excluded),
            ..self
        }
    }

    pub fn matches(&self, identifier: &str) -> bool {
        identifier.contains(self.pattern)
            && !self
                .unless
                .is_some_and(|excluded| identifier.contains(excluded))
    }
}

/// Rules applied to subscription filter destinations, first match wins.
pub const DESTINATION_RULES: &[ClassificationRule] = &[
    ClassificationRule::new("lambda", ServiceFamily::Lambda),
    ClassificationRule::new("kinesis", ServiceFamily::Kinesis).unless("firehose"),
    ClassificationRule::new("firehose", ServiceFamily::Firehose),
    ClassificationRule::new("domain", ServiceFamily::OpenSearch),
];

/// Classify a destination ARN with [`DESTINATION_RULES`].
pub fn classify(identifier: &str) -> Option<ServiceFamily> {
    classify_with(DESTINATION_RULES, identifier)
}

/// Classify with a caller supplied rule table.
pub fn classify_with(rules: &[ClassificationRule], identifier: &str) -> Option<ServiceFamily> {
    rules
        .iter()
        .find(|rule| rule.matches(identifier))
        .map(|rule| rule.family)
}
