/// Accumulated delay-minutes for one airline at one airport.
///
/// Created on the first mention of an airline at an airport and kept for the
/// lifetime of the index; the total only changes through explicit additions.
/// Negative amounts are accepted as corrections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirlineStat {
    name: String,
    total_delay_minutes: i64,
}

impl AirlineStat {
    pub fn new(name: impl Into<String>) -> Self {
        AirlineStat {
            name: name.into(),
            total_delay_minutes: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_minutes(&mut self, amount: i64) {
        self.total_delay_minutes += amount;
    }

    pub fn total(&self) -> i64 {
        self.total_delay_minutes
    }
}
