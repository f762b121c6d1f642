pub mod config;
pub mod error;
pub mod stats;

pub mod index;

pub mod ingest;
pub mod report;
pub use config::Config;
pub use error::{Error, Result};
pub use index::{AirportIndex, AirportNode, BreadthFirstIter, DepthFirstIter, InOrderIter, SearchOutcome};
pub use ingest::{ingest_file, ingest_rows, DelayRow, IngestStats, RowReader};
pub use report::{strip_wrapping_quotes, ReportEntry};
pub use stats::AirlineStat;
