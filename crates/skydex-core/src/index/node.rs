use crate::stats::AirlineStat;
use std::collections::BTreeMap;

/// One airport in the index. Owns its airline accumulators and both subtrees
/// outright; the code is the BST key and never changes after creation.
pub struct AirportNode {
    code: String,
    airlines: BTreeMap<String, AirlineStat>,
    pub(super) left: Option<Box<AirportNode>>,
    pub(super) right: Option<Box<AirportNode>>,
}

impl AirportNode {
    pub(super) fn new(code: String) -> Self {
        AirportNode {
            code,
            airlines: BTreeMap::new(),
            left: None,
            right: None,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Folds `minutes` into the accumulator for `name`, creating it on first
    /// mention. Exactly one `AirlineStat` ever exists per distinct name here.
    pub fn add_airline(&mut self, name: impl Into<String>, minutes: i64) {
        let stat = self
            .airlines
            .entry(name.into())
            .or_insert_with_key(|name| AirlineStat::new(name.clone()));
        stat.add_minutes(minutes);
    }

    pub fn airline(&self, name: &str) -> Option<&AirlineStat> {
        self.airlines.get(name)
    }

    /// Airline accumulators in name order.
    pub fn airlines(&self) -> impl Iterator<Item = &AirlineStat> {
        self.airlines.values()
    }

    /// Aggregate delay-minutes across every airline at this airport.
    pub fn total_minutes(&self) -> i64 {
        self.airlines.values().map(AirlineStat::total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_airline_creates_then_accumulates() {
        let mut node = AirportNode::new("ATL".to_string());
        node.add_airline("DL", 10);
        node.add_airline("DL", 5);

        let stat = node.airline("DL").unwrap();
        assert_eq!(stat.total(), 15);
        assert_eq!(node.airlines().count(), 1);
    }

    #[test]
    fn test_total_minutes_sums_all_airlines() {
        let mut node = AirportNode::new("ORD".to_string());
        node.add_airline("UA", 40);
        node.add_airline("AA", 2);

        assert_eq!(node.total_minutes(), 42);
    }

    #[test]
    fn test_airlines_iterate_in_name_order() {
        let mut node = AirportNode::new("JFK".to_string());
        node.add_airline("UA", 1);
        node.add_airline("AA", 1);
        node.add_airline("DL", 1);

        let names: Vec<_> = node.airlines().map(|s| s.name()).collect();
        assert_eq!(names, vec!["AA", "DL", "UA"]);
    }

    #[test]
    fn test_unknown_airline_lookup() {
        let node = AirportNode::new("SEA".to_string());
        assert!(node.airline("AS").is_none());
        assert_eq!(node.total_minutes(), 0);
    }
}
