use std::fs;
use std::path::Path;

use chrono::{Days, NaiveDate};
use pluvio_record::RawRecord;
use pluvio_store::{read_records, write_records, year_file, StoreError};

/// Helper: a short run of consecutive daily records.
fn make_records(n: usize) -> Vec<RawRecord> {
    let start = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            RawRecord::new(
                start.checked_add_days(Days::new(i as u64)).unwrap(),
                5.0 + i as f64,
                -1.0 + i as f64,
                0.3 * i as f64,
                12.0,
            )
            .unwrap()
        })
        .collect()
}

#[test]
fn write_then_read_reproduces_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = year_file(dir.path(), 2015);

    let records = make_records(10);
    write_records(&path, &records).unwrap();
    let loaded = read_records(&path).unwrap();

    assert_eq!(loaded, records);
}

#[test]
fn header_matches_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weather.csv");

    write_records(&path, &make_records(1)).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let header = text.lines().next().unwrap();
    assert_eq!(
        header,
        "date,year,month,day,weekday,temp_max,temp_min,precipitation,wind_max"
    );
}

#[test]
fn malformed_rows_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weather.csv");

    fs::write(
        &path,
        "date,year,month,day,weekday,temp_max,temp_min,precipitation,wind_max\n\
         2015-01-01,2015,1,1,3,4.0,-2.0,0.5,10.0\n\
         not-a-date,2015,1,2,4,4.0,-2.0,0.5,10.0\n\
         2015-01-03,2015,1,3,5,4.0,-2.0,,10.0\n\
         2015-01-04,2015,1,4,6,4.0,-2.0,0.1,9.0\n",
    )
    .unwrap();

    let loaded = read_records(&path).unwrap();
    let dates: Vec<NaiveDate> = loaded.iter().map(RawRecord::date).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2015, 1, 4).unwrap(),
        ]
    );
}

#[test]
fn redundant_columns_regenerate_from_date() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weather.csv");

    // Calendar columns deliberately disagree with the date; the date wins.
    fs::write(
        &path,
        "date,year,month,day,weekday,temp_max,temp_min,precipitation,wind_max\n\
         2015-06-15,1999,12,31,6,20.0,11.0,0.0,8.0\n",
    )
    .unwrap();

    let loaded = read_records(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].year(), 2015);
    assert_eq!(loaded[0].month(), 6);
    assert_eq!(loaded[0].day(), 15);
    // 2015-06-15 was a Monday.
    assert_eq!(loaded[0].weekday(), 0);
}

#[test]
fn missing_file_is_an_error() {
    let result = read_records(Path::new("does/not/exist.csv"));
    assert!(matches!(result, Err(StoreError::Open { .. })));
}
