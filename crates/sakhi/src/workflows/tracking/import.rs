use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::state::{WeighTime, WeightEntry};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

#[derive(Debug, thiserror::Error)]
pub enum WeightImportError {
    #[error("failed to open weight log: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("line {line}: {message}")]
    InvalidRow { line: u64, message: String },
}

/// Reads a `date,weight,time` CSV export from a scale or another tracker.
/// `time` may be blank (treated as morning).
pub struct WeightLogImporter;

impl WeightLogImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<WeightEntry>, WeightImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<WeightEntry>, WeightImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut entries = Vec::new();

        for (index, row) in csv_reader.deserialize::<WeightRow>().enumerate() {
            // header is line 1
            let line = index as u64 + 2;
            let row = row.map_err(|source| WeightImportError::Csv { line, source })?;
            entries.push(row.into_entry(line)?);
        }

        Ok(entries)
    }
}

#[derive(Debug, Deserialize)]
struct WeightRow {
    date: String,
    weight: f64,
    #[serde(default)]
    time: Option<String>,
}

impl WeightRow {
    fn into_entry(self, line: u64) -> Result<WeightEntry, WeightImportError> {
        let invalid = |message: String| WeightImportError::InvalidRow { line, message };

        let date = parse_date(&self.date)
            .ok_or_else(|| invalid(format!("unrecognised date '{}'", self.date)))?;

        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(invalid(format!("weight must be positive, got {}", self.weight)));
        }

        let time = match self.time.as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("") | Some("morning") => WeighTime::Morning,
            Some("evening") => WeighTime::Evening,
            Some(other) => return Err(invalid(format!("unknown time of day '{other}'"))),
        };

        Ok(WeightEntry {
            date,
            weight: self.weight,
            time,
        })
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value.trim(), format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_with_optional_time() {
        let csv = "date,weight,time\n2025-02-01,71.2,morning\n03/02/2025,70.8,Evening\n2025-02-05,70.5,\n";
        let entries = WeightLogImporter::from_reader(csv.as_bytes()).expect("imports");

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].date, NaiveDate::from_ymd_opt(2025, 2, 3).unwrap());
        assert_eq!(entries[1].time, WeighTime::Evening);
        assert_eq!(entries[2].time, WeighTime::Morning);
    }

    #[test]
    fn bad_weight_reports_its_line() {
        let csv = "date,weight,time\n2025-02-01,71.2,morning\n2025-02-02,heavy,morning\n";
        let err = WeightLogImporter::from_reader(csv.as_bytes()).expect_err("rejects");
        assert!(matches!(err, WeightImportError::Csv { line: 3, .. }));
    }

    #[test]
    fn invalid_values_are_row_errors() {
        let csv = "date,weight,time\n2025-13-40,71.2,morning\n";
        let err = WeightLogImporter::from_reader(csv.as_bytes()).expect_err("rejects");
        assert!(matches!(err, WeightImportError::InvalidRow { line: 2, .. }));

        let csv = "date,weight,time\n2025-02-01,-3,noon\n";
        let err = WeightLogImporter::from_reader(csv.as_bytes()).expect_err("rejects");
        assert!(err.to_string().contains("weight must be positive"));
    }
}
