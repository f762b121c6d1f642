use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::ingest::row::DelayRow;

/// Streams decoded rows from a delay-statistics file, one line per row.
///
/// Line numbers are physical: the header, when present, is line 1 and the
/// first data row is line 2, so error locations match what an editor shows.
pub struct RowReader<R> {
    reader: R,
    line_no: usize,
    skip_header: bool,
}

impl RowReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(RowReader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> RowReader<R> {
    pub fn new(reader: R) -> Self {
        RowReader {
            reader,
            line_no: 0,
            skip_header: true,
        }
    }

    /// Treats the first line as data instead of a header.
    pub fn without_header(mut self) -> Self {
        self.skip_header = false;
        self
    }

    /// Number of the last physical line read.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Returns the next decoded row, or `None` at end of input.
    pub fn next_row(&mut self) -> Result<Option<DelayRow>> {
        if self.skip_header && self.line_no == 0 && self.read_line()?.is_none() {
            return Ok(None);
        }
        match self.read_line()? {
            Some(line) => DelayRow::decode(&line, self.line_no).map(Some),
            None => Ok(None),
        }
    }

    /// Reads every remaining row, stopping at the first decode failure.
    pub fn read_all(&mut self) -> Result<Vec<DelayRow>> {
        let mut rows = Vec::new();
        while let Some(row) = self.next_row()? {
            rows.push(row);
        }
        Ok(rows)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Cursor;

    const ROW_A: &str = "ATL,DL,6,June,2003,1,2,3,4,5,6,C,2,g1,g2,g3,g4,g5,g6,g7,g8,g9,40,9000,50";
    const ROW_B: &str = "JFK,AA,6,June,2003,1,2,3,4,5,6,C,2,g1,g2,g3,g4,g5,g6,g7,g8,g9,25,9000,50";

    fn reader(data: &str) -> RowReader<Cursor<Vec<u8>>> {
        RowReader::new(Cursor::new(data.as_bytes().to_vec()))
    }

    #[test]
    fn test_skips_header_line() {
        let data = format!("Airport.Code,header,junk\n{ROW_A}\n");
        let mut reader = reader(&data);

        let row = reader.next_row().unwrap().unwrap();
        assert_eq!(row.airport_code, "ATL");
        assert_eq!(row.minutes_delayed, 40);
        assert!(reader.next_row().unwrap().is_none());
    }

    #[test]
    fn test_without_header_reads_first_line() {
        let data = format!("{ROW_A}\n{ROW_B}\n");
        let rows = reader(&data).without_header().read_all().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].airport_code, "ATL");
        assert_eq!(rows[1].airport_code, "JFK");
    }

    #[test]
    fn test_error_carries_physical_line_number() {
        let data = format!("header\n{ROW_A}\nATL,short\n");
        let mut reader = reader(&data);

        assert!(reader.next_row().unwrap().is_some());
        let err = reader.next_row().unwrap_err();
        assert!(matches!(err, Error::MalformedRow { line: 3, .. }));
    }

    #[test]
    fn test_strips_carriage_return() {
        let data = format!("header\r\n{ROW_A}\r\n");
        let row = reader(&data).next_row().unwrap().unwrap();

        assert_eq!(row.airport_code, "ATL");
        assert_eq!(row.minutes_delayed, 40);
    }

    #[test]
    fn test_empty_input() {
        assert!(reader("").next_row().unwrap().is_none());
        assert!(reader("header only\n").next_row().unwrap().is_none());
    }

    #[test]
    fn test_read_all_stops_at_first_bad_row() {
        let data = format!("header\nATL,short\n{ROW_A}\n");
        assert!(reader(&data).read_all().is_err());
    }
}
