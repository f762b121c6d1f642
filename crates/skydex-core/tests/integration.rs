use skydex_core::{ingest_file, AirportIndex, Config, Error};
use tempfile::TempDir;

const HEADER: &str = "Airport.Code,Airport.Name,Time.Label,Time.Month,Time.Month Name,Time.Year,Statistics.# of Delays.Carrier,Statistics.# of Delays.Late Aircraft,Statistics.# of Delays.National Aviation System,Statistics.# of Delays.Security,Statistics.# of Delays.Weather,Statistics.Carriers.Names,Statistics.Carriers.Total,Statistics.Flights.Cancelled,Statistics.Flights.Delayed,Statistics.Flights.Diverted,Statistics.Flights.On Time,Statistics.Flights.Total,Statistics.Minutes Delayed.Carrier,Statistics.Minutes Delayed.Late Aircraft,Statistics.Minutes Delayed.National Aviation System,Statistics.Minutes Delayed.Security,Statistics.Minutes Delayed.Total,Statistics.Minutes Delayed.Weather";

/// One data line in the shape the decoder expects: airline text (may contain
/// commas), a numeric terminator, eight fixed fields, a carrier run, nine
/// more fixed fields, then the minutes value in the security column.
fn data_row(code: &str, airlines: &str, minutes: i64) -> String {
    format!(
        "{code},{airlines},6,June,2003,10,20,30,40,50,60,Carrier,2,1000,10,20,30,40,50,61,62,63,{minutes},9999,88"
    )
}

fn write_data(dir: &TempDir, lines: &[String]) -> Config {
    let path = dir.path().join("airlines.csv");
    let mut contents = String::from(HEADER);
    contents.push('\n');
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }
    std::fs::write(&path, contents).unwrap();
    Config::new(path)
}

#[test]
fn test_ingest_file_end_to_end() {
    let dir = TempDir::new().unwrap();
    let config = write_data(
        &dir,
        &[
            data_row("JFK", "\"JetBlue\"", 25),
            data_row("ATL", "\"Delta Air Lines, Inc.: DL\"", 40),
            data_row("JFK", "\"JetBlue\"", 5),
        ],
    );

    let mut index = AirportIndex::new();
    let stats = ingest_file(&mut index, &config).unwrap();

    assert_eq!(stats.rows, 3);
    assert_eq!(stats.airports, 2);

    let codes: Vec<_> = index.codes_in_order().collect();
    assert_eq!(codes, vec!["ATL", "JFK"]);

    let jfk = index.get("JFK").unwrap();
    assert_eq!(jfk.airline("\"JetBlue\"").unwrap().total(), 30);
    assert_eq!(jfk.total_minutes(), 30);

    // The ATL airline text contains a comma, so it lands as two names, each
    // credited with the row's 40 minutes.
    let atl = index.get("ATL").unwrap();
    assert_eq!(atl.airlines().count(), 2);
    assert_eq!(atl.total_minutes(), 80);
}

#[test]
fn test_report_after_ingest_strips_field_quotes() {
    let dir = TempDir::new().unwrap();
    let config = write_data(&dir, &[data_row("JFK", "\"JetBlue\"", 25)]);

    let mut index = AirportIndex::new();
    ingest_file(&mut index, &config).unwrap();

    let entries: Vec<_> = index.in_order_report().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].to_string(),
        "Airport: JFK\nAirlines: \"JetBlue\"\nTotal minutes delayed: 25 minutes"
    );
}

#[test]
fn test_searches_after_ingest() {
    let dir = TempDir::new().unwrap();
    let config = write_data(
        &dir,
        &[
            data_row("ORD", "\"United\"", 120),
            data_row("DEN", "\"Frontier\"", 15),
            data_row("ATL", "\"Delta\"", 40),
        ],
    );

    let mut index = AirportIndex::new();
    ingest_file(&mut index, &config).unwrap();

    let dfs = index.search_depth_first("DEN");
    let bfs = index.search_breadth_first("DEN");
    assert_eq!(dfs, bfs);
    assert_eq!(dfs.total_minutes(), Some(15));

    assert!(!index.search_depth_first("LAX").is_found());
    assert!(!index.search_breadth_first("LAX").is_found());
}

#[test]
fn test_without_header_reads_first_line_as_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_header.csv");
    std::fs::write(&path, format!("{}\n", data_row("SEA", "\"Alaska\"", 9))).unwrap();

    let mut index = AirportIndex::new();
    let config = Config::new(path).without_header();
    let stats = ingest_file(&mut index, &config).unwrap();

    assert_eq!(stats.rows, 1);
    assert_eq!(index.get("SEA").unwrap().total_minutes(), 9);
}

#[test]
fn test_malformed_row_aborts_with_line_number() {
    let dir = TempDir::new().unwrap();
    let config = write_data(
        &dir,
        &[
            data_row("JFK", "\"JetBlue\"", 25),
            "ATL,truncated,6,June".to_string(),
        ],
    );

    let mut index = AirportIndex::new();
    let err = ingest_file(&mut index, &config).unwrap_err();

    // Header is line 1, so the bad row is physical line 3.
    assert!(matches!(err, Error::MalformedRow { line: 3, .. }));
}

#[test]
fn test_non_integer_minutes_are_an_error_not_zero() {
    let dir = TempDir::new().unwrap();
    let row = data_row("JFK", "\"JetBlue\"", 0).replace(",0,9999,", ",n/a,9999,");
    let config = write_data(&dir, &[row]);

    let mut index = AirportIndex::new();
    match ingest_file(&mut index, &config).unwrap_err() {
        Error::InvalidMinutes { line, value } => {
            assert_eq!(line, 2);
            assert_eq!(value, "n/a");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_airline_totals_span_airports() {
    let dir = TempDir::new().unwrap();
    let config = write_data(
        &dir,
        &[
            data_row("ATL", "\"Delta\"", 40),
            data_row("JFK", "\"Delta\"", 2),
            data_row("JFK", "\"JetBlue\"", 7),
        ],
    );

    let mut index = AirportIndex::new();
    ingest_file(&mut index, &config).unwrap();

    let totals = index.total_minutes_by_airline();
    assert_eq!(totals.get("\"Delta\""), Some(&42));
    assert_eq!(totals.get("\"JetBlue\""), Some(&7));
}
