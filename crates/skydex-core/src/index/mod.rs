mod iter;
mod node;

pub use iter::{BreadthFirstIter, DepthFirstIter, InOrderIter};
pub use node::AirportNode;

use crate::report::ReportEntry;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Unbalanced binary search tree keyed by airport code.
///
/// Shape depends only on the insertion order of distinct codes; there is no
/// rebalancing and no deletion. Populated once during ingestion, read-only
/// afterwards.
pub struct AirportIndex {
    root: Option<Box<AirportNode>>,
    len: usize,
}

/// Result of a structural search, carrying the queried code either way and
/// the airport's aggregate delay-minutes on a hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found { code: String, total_minutes: i64 },
    NotFound { code: String },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    pub fn code(&self) -> &str {
        match self {
            SearchOutcome::Found { code, .. } => code,
            SearchOutcome::NotFound { code } => code,
        }
    }

    pub fn total_minutes(&self) -> Option<i64> {
        match self {
            SearchOutcome::Found { total_minutes, .. } => Some(*total_minutes),
            SearchOutcome::NotFound { .. } => None,
        }
    }
}

impl AirportIndex {
    pub fn new() -> Self {
        AirportIndex { root: None, len: 0 }
    }

    /// Number of distinct airports in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts an airport, descending left on strictly-less and right on
    /// strictly-greater. Inserting a code already present is a no-op and
    /// never resets the node's accumulated airline data.
    pub fn insert(&mut self, code: impl Into<String>) {
        self.root = Self::insert_node(self.root.take(), code.into(), &mut self.len);
    }

    fn insert_node(
        node: Option<Box<AirportNode>>,
        code: String,
        len: &mut usize,
    ) -> Option<Box<AirportNode>> {
        match node {
            None => {
                *len += 1;
                Some(Box::new(AirportNode::new(code)))
            }
            Some(mut n) => {
                match code.as_str().cmp(n.code()) {
                    Ordering::Less => n.left = Self::insert_node(n.left.take(), code, len),
                    Ordering::Greater => n.right = Self::insert_node(n.right.take(), code, len),
                    Ordering::Equal => {}
                }
                Some(n)
            }
        }
    }

    /// Keyed lookup by ordered descent. O(height).
    pub fn get(&self, code: &str) -> Option<&AirportNode> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match code.cmp(node.code()) {
                Ordering::Equal => return Some(node),
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        None
    }

    /// Folds `minutes` into `airline`'s accumulator at the given airport.
    ///
    /// When the airport is not in the index this does nothing, silently: the
    /// ingestion path always inserts the airport before updating it, and a
    /// stray update is tolerated rather than treated as an error.
    pub fn add_airline(&mut self, code: &str, airline: impl Into<String>, minutes: i64) {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match code.cmp(node.code()) {
                Ordering::Equal => {
                    node.add_airline(airline, minutes);
                    return;
                }
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
            }
        }
    }

    /// Nodes in ascending code order.
    pub fn in_order(&self) -> InOrderIter<'_> {
        InOrderIter::new(self.root.as_deref())
    }

    /// Pre-order structural traversal over every node.
    pub fn depth_first(&self) -> DepthFirstIter<'_> {
        DepthFirstIter::new(self.root.as_deref())
    }

    /// Level-order structural traversal over every node.
    pub fn breadth_first(&self) -> BreadthFirstIter<'_> {
        BreadthFirstIter::new(self.root.as_deref())
    }

    /// Ascending airport codes only; lets a caller pick a valid code before
    /// searching.
    pub fn codes_in_order(&self) -> impl Iterator<Item = &str> {
        self.in_order().map(|node| node.code())
    }

    /// Per-airport report rows in ascending code order.
    pub fn in_order_report(&self) -> impl Iterator<Item = ReportEntry> + '_ {
        self.in_order().map(ReportEntry::from_node)
    }

    /// Aggregate delay-minutes per airline name across every airport. The
    /// fold is commutative, so the traversal order does not matter.
    pub fn total_minutes_by_airline(&self) -> BTreeMap<String, i64> {
        let mut totals = BTreeMap::new();
        for node in self.in_order() {
            for stat in node.airlines() {
                *totals.entry(stat.name().to_string()).or_insert(0) += stat.total();
            }
        }
        totals
    }

    /// Linear scan in pre-order stack discipline. Deliberately O(n): the
    /// whole structure is walked without exploiting the ordering invariant,
    /// so the visitation order is exactly that of [`Self::depth_first`].
    pub fn search_depth_first(&self, code: &str) -> SearchOutcome {
        Self::scan(self.depth_first(), code, "DFS")
    }

    /// Linear scan in level order. Same O(n) contract as the depth-first
    /// search; only the visitation order differs.
    pub fn search_breadth_first(&self, code: &str) -> SearchOutcome {
        Self::scan(self.breadth_first(), code, "BFS")
    }

    fn scan<'a>(
        nodes: impl Iterator<Item = &'a AirportNode>,
        code: &str,
        strategy: &str,
    ) -> SearchOutcome {
        let mut visited = 0usize;
        for node in nodes {
            visited += 1;
            if node.code() == code {
                tracing::debug!("{} found {} after visiting {} nodes", strategy, code, visited);
                return SearchOutcome::Found {
                    code: node.code().to_string(),
                    total_minutes: node.total_minutes(),
                };
            }
        }
        tracing::debug!("{} visited {} nodes without finding {}", strategy, visited, code);
        SearchOutcome::NotFound {
            code: code.to_string(),
        }
    }
}

impl Default for AirportIndex {
    fn default() -> Self {
        Self::new()
    }
}
