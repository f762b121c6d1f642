use crate::error::{Error, Result};

/// Fields read and discarded between the airline-name run and the carrier
/// run: month, month name, year, and five delay-cause counts.
const FIELDS_AFTER_AIRLINES: usize = 8;

/// Fields read and discarded after the carrier run before the aggregated
/// value: carriers total, five flight counts, and three minutes-by-cause
/// columns.
const FIELDS_BEFORE_MINUTES: usize = 9;

/// One decoded input row: the airport it belongs to, every airline named on
/// the row, and the single delay-minutes value folded in for each of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayRow {
    pub airport_code: String,
    pub airlines: Vec<String>,
    pub minutes_delayed: i64,
}

impl DelayRow {
    /// Decodes one raw line by splitting on commas. Quoted fields are split
    /// apart like any others; the wrapping quotes that leaves on airline
    /// names are handled at report time.
    ///
    /// Layout: airport code, a run of airline-name tokens ended by the first
    /// purely-numeric token, eight positional fields, a run of carrier-name
    /// tokens ended the same way, then the minutes columns. The value kept is
    /// the security delay-minutes column, the tenth field of that last group;
    /// the nominal total-minutes column two fields later is not used.
    pub fn decode(line: &str, line_no: usize) -> Result<Self> {
        let mut fields = line.split(',');

        let airport_code = fields.next().unwrap_or_default().to_string();

        let mut airlines = Vec::new();
        for token in fields.by_ref() {
            if is_numeric_token(token) {
                break;
            }
            airlines.push(token.to_string());
        }

        for _ in 0..FIELDS_AFTER_AIRLINES {
            fields
                .next()
                .ok_or_else(|| end_of_row(line_no, line, "the month and delay-count fields"))?;
        }

        for token in fields.by_ref() {
            if is_numeric_token(token) {
                break;
            }
        }

        for _ in 0..FIELDS_BEFORE_MINUTES {
            fields
                .next()
                .ok_or_else(|| end_of_row(line_no, line, "the minutes-delayed columns"))?;
        }
        let minutes_field = fields
            .next()
            .ok_or_else(|| end_of_row(line_no, line, "the security delay-minutes column"))?;

        let minutes_delayed = minutes_field
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::invalid_minutes(line_no, minutes_field))?;

        Ok(DelayRow {
            airport_code,
            airlines,
            minutes_delayed,
        })
    }
}

/// True when every character is an ASCII digit. Vacuously true for an empty
/// token, so an empty field also terminates a name run; signed values such as
/// "-5" do not.
pub(crate) fn is_numeric_token(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit())
}

fn end_of_row(line_no: usize, raw: &str, missing: &str) -> Error {
    Error::malformed_row(line_no, format!("row ended before {missing}: {raw:?}"))
}
