mod reader;
mod row;

pub use reader::RowReader;
pub use row::DelayRow;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::index::AirportIndex;

/// Counters reported after an ingest pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    /// Data rows applied.
    pub rows: usize,
    /// Distinct airports in the index afterwards.
    pub airports: usize,
}

/// Applies already-decoded rows to the index.
pub fn ingest_rows<I>(index: &mut AirportIndex, rows: I) -> IngestStats
where
    I: IntoIterator<Item = DelayRow>,
{
    let mut count = 0;
    for row in rows {
        apply_row(index, row);
        count += 1;
    }
    IngestStats {
        rows: count,
        airports: index.len(),
    }
}

/// Reads the configured data file and folds every row into the index.
/// Stops at the first undecodable row; nothing is zero-filled.
pub fn ingest_file(index: &mut AirportIndex, config: &Config) -> Result<IngestStats> {
    config.validate().map_err(Error::InvalidConfig)?;

    let mut reader = RowReader::open(&config.data_path)?;
    if !config.skip_header {
        reader = reader.without_header();
    }

    let mut rows = 0;
    while let Some(row) = reader.next_row()? {
        apply_row(index, row);
        rows += 1;
    }

    let stats = IngestStats {
        rows,
        airports: index.len(),
    };
    tracing::debug!(
        "ingested {} rows into {} airports from {}",
        stats.rows,
        stats.airports,
        config.data_path.display()
    );
    Ok(stats)
}

/// Every airline on a row receives the row's one minutes value. The airport
/// is inserted first, so the updates always land.
fn apply_row(index: &mut AirportIndex, row: DelayRow) {
    let DelayRow {
        airport_code,
        airlines,
        minutes_delayed,
    } = row;

    index.insert(airport_code.clone());
    for airline in airlines {
        index.add_airline(&airport_code, airline, minutes_delayed);
    }
}
