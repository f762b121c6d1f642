use crate::index::AirportNode;
use std::fmt;

/// One airport's row of the in-order report: code, airline display names in
/// name order, and the aggregate delay-minutes across those airlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub code: String,
    pub airlines: Vec<String>,
    pub total_minutes: i64,
}

impl ReportEntry {
    pub fn from_node(node: &AirportNode) -> Self {
        ReportEntry {
            code: node.code().to_string(),
            airlines: node
                .airlines()
                .map(|stat| strip_wrapping_quotes(stat.name()).to_string())
                .collect(),
            total_minutes: node.total_minutes(),
        }
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Airport: {}", self.code)?;
        let quoted: Vec<String> = self
            .airlines
            .iter()
            .map(|name| format!("\"{}\"", name))
            .collect();
        writeln!(f, "Airlines: {}", quoted.join(", "))?;
        write!(f, "Total minutes delayed: {} minutes", self.total_minutes)
    }
}

/// Strips at most one leading and one trailing quote character.
///
/// Airline names arrive with stray wrapping quotes because the decoder splits
/// quoted fields apart; the report re-wraps each name in exactly one pair of
/// quotes, so a name stored as `"DL"` renders as `"DL"`, never `""DL""`.
pub fn strip_wrapping_quotes(name: &str) -> &str {
    let name = name.strip_prefix('"').unwrap_or(name);
    name.strip_suffix('"').unwrap_or(name)
}
