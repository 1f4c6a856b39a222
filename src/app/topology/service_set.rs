use std::collections::HashSet;

use crate::app::discovery::ServiceFamily;

/// Service families encountered during a walk.
///
/// Append-only; discovery order is irrelevant and duplicates collapse, so a
/// family seen on several trails still gets a single report section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceSet {
    families: HashSet<ServiceFamily>,
}

impl ServiceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the family was not present before.
    pub fn insert(&mut self, family: ServiceFamily) -> bool {
        self.families.insert(family)
    }

    pub fn contains(&self, family: ServiceFamily) -> bool {
        self.families.contains(&family)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Present families in [`ServiceFamily::REPORT_ORDER`]
    pub fn in_report_order(&self) -> impl Iterator<Item = ServiceFamily> + '_ {
        ServiceFamily::REPORT_ORDER
            .into_iter()
            .filter(|family| self.contains(*family))
    }
}

impl Extend<ServiceFamily> for ServiceSet {
    fn extend<I: IntoIterator<Item = ServiceFamily>>(&mut self, iter: I) {
        self.families.extend(iter);
    }
}

impl FromIterator<ServiceFamily> for ServiceSet {
    fn from_iter<I: IntoIterator<Item = ServiceFamily>>(iter: I) -> Self {
        Self {
            families: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let mut set = ServiceSet::new();
        assert!(set.insert(ServiceFamily::Lambda));
        assert!(!set.insert(ServiceFamily::Lambda));
        assert_eq!(set.len(), 1);
        assert!(set.contains(ServiceFamily::Lambda));
        assert!(!set.contains(ServiceFamily::Sqs));
    }

    #[test]
    fn test_report_order_ignores_discovery_order() {
        let set: ServiceSet = [
            ServiceFamily::Kinesis,
            ServiceFamily::Lambda,
            ServiceFamily::S3,
            ServiceFamily::Lambda,
        ]
        .into_iter()
        .collect();

        let ordered: Vec<_> = set.in_report_order().collect();
        assert_eq!(
            ordered,
            vec![ServiceFamily::S3, ServiceFamily::Lambda, ServiceFamily::Kinesis]
        );
    }

    #[test]
    fn test_empty_set() {
        let set = ServiceSet::new();
        assert!(set.is_empty());
        assert_eq!(set.in_report_order().count(), 0);
    }
}
