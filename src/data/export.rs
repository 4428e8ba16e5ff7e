use std::io::{Read, Write};
use std::path::Path;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::data::time_series::TimeSeries;
use crate::error::ExportError;

/// One CSV row: the date index column and the value column.
#[derive(Debug, Serialize, Deserialize)]
struct ExportRow {
    date: NaiveDate,
    value: f64,
}

/// Download file name for the case at zero-based `index`.
pub fn export_file_name(index: usize) -> String {
    format!("time_series_case_{}.csv", index + 1)
}

/// Write `series` as `date,value` CSV.
pub fn write_series<W: Write>(series: &TimeSeries, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (date, value) in series.iter() {
        csv_writer.serialize(ExportRow { date, value })?;
    }
    // Header is only emitted with the first row, so write it explicitly for empty series.
    if series.is_empty() {
        csv_writer.write_record(["date", "value"])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// UTF-8 CSV bytes for a series.
pub fn series_to_csv_bytes(series: &TimeSeries) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    write_series(series, &mut buf)?;
    Ok(buf)
}

/// Write `series` to a CSV file at `path`, replacing any existing file.
pub fn export_series_file(series: &TimeSeries, path: &Path) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_series(series, std::io::BufWriter::new(file))
}

/// Parse a CSV produced by [`write_series`] back into a series.
pub fn read_series<R: Read>(reader: R) -> Result<TimeSeries, ExportError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut points = Vec::new();
    for row in csv_reader.deserialize::<ExportRow>() {
        let row = row?;
        points.push((row.date, row.value));
    }
    Ok(TimeSeries::from_points(points)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaseError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> TimeSeries {
        TimeSeries::from_points(vec![
            (date(2023, 1, 1), 0.0),
            (date(2023, 1, 2), 1.5),
            (date(2023, 1, 3), -0.1),
        ])
        .unwrap()
    }

    #[test]
    fn file_names_are_one_based() {
        assert_eq!(export_file_name(0), "time_series_case_1.csv");
        assert_eq!(export_file_name(11), "time_series_case_12.csv");
    }

    #[test]
    fn csv_has_date_index_and_value_column() {
        let bytes = series_to_csv_bytes(&sample()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "date,value");
        assert_eq!(lines[1], "2023-01-01,0.0");
        assert_eq!(lines[2], "2023-01-02,1.5");
        assert_eq!(lines[3], "2023-01-03,-0.1");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn empty_series_still_has_header() {
        let empty = TimeSeries::from_points(Vec::new()).unwrap();
        let text = String::from_utf8(series_to_csv_bytes(&empty).unwrap()).unwrap();
        assert_eq!(text.trim_end(), "date,value");
    }

    #[test]
    fn csv_round_trip_is_exact() {
        let series = TimeSeries::from_points(vec![
            (date(2024, 2, 28), 1.0 / 3.0),
            (date(2024, 2, 29), 1e-300),
            (date(2024, 3, 1), -123_456_789.987_654_3),
        ])
        .unwrap();
        let bytes = series_to_csv_bytes(&series).unwrap();
        let parsed = read_series(bytes.as_slice()).unwrap();
        assert_eq!(parsed, series);
    }

    #[test]
    fn non_finite_values_round_trip() {
        let series = TimeSeries::from_points(vec![
            (date(2023, 1, 1), f64::INFINITY),
            (date(2023, 1, 2), f64::NEG_INFINITY),
        ])
        .unwrap();
        let bytes = series_to_csv_bytes(&series).unwrap();
        let parsed = read_series(bytes.as_slice()).unwrap();
        assert_eq!(parsed.values(), series.values());
    }

    #[test]
    fn read_rejects_gapped_dates() {
        let text = "date,value\n2023-01-01,1.0\n2023-01-03,2.0\n";
        let err = read_series(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ExportError::Series(CaseError::NonContiguousDates { index: 1 })
        ));
    }

    #[test]
    fn read_rejects_unparseable_value() {
        let text = "date,value\n2023-01-01,abc\n";
        assert!(matches!(read_series(text.as_bytes()), Err(ExportError::Csv(_))));
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(export_file_name(2));
        export_series_file(&sample(), &path).unwrap();

        let parsed = read_series(std::fs::File::open(&path).unwrap()).unwrap();
        assert_eq!(parsed, sample());
    }
}
