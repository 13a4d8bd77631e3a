use partition_readings::{Breakdown, Error, Partition, Pipeline};
use std::{fs, path::Path};
use tempfile::TempDir;

fn input(dir: &TempDir, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("readings.csv");
    let mut contents = String::from("datetime,heart_rate\n");
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    fs::write(&path, contents).unwrap();
    path
}

fn output_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn yearly_hourly() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = input(
        &dir,
        &[
            "2024-01-01 10:00:00,5.7",
            "2024-01-01 10:30:00,7.2",
            "2024-01-01 11:15:00,3.9",
        ],
    );
    let paths = Pipeline::new(&path, out.path())
        .partition(Partition::Yearly)
        .breakdown(Breakdown::Hourly)
        .run()
        .unwrap();
    assert_eq!(paths, vec![out.path().join("2024_hourly.csv")]);
    assert_eq!(
        fs::read_to_string(&paths[0]).unwrap(),
        "dt,avg_hr,max_hr,min_hr\n\
         2024-01-01 10:00:00,6.0,7,5\n\
         2024-01-01 11:00:00,3.0,3,3\n"
    );
}

#[test]
fn monthly_exact_timestamps() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = input(
        &dir,
        &[
            "2023-12-31 23:59:59,80",
            "2024-02-10 08:00:00,61.5",
            "2024-02-10 08:00:00,62.5",
            "2024-02-01 07:00:00,70",
        ],
    );
    Pipeline::new(&path, out.path())
        .partition(Partition::Monthly)
        .breakdown(Breakdown::None)
        .run()
        .unwrap();
    assert_eq!(
        output_files(out.path()),
        vec!["2023_12_none.csv", "2024_2_none.csv"]
    );
    assert_eq!(
        fs::read_to_string(out.path().join("2024_2_none.csv")).unwrap(),
        "dt,avg_hr,max_hr,min_hr\n\
         2024-02-01 07:00:00,70.0,70,70\n\
         2024-02-10 08:00:00,61.5,62,61\n"
    );
}

#[test]
fn malformed_timestamp_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = input(
        &dir,
        &["not-a-date,100", "2024-05-05 05:05:05,10", "2024-05-05 06:00:00,20"],
    );
    Pipeline::new(&path, out.path())
        .partition(Partition::Yearly)
        .breakdown(Breakdown::Daily)
        .run()
        .unwrap();
    assert_eq!(
        fs::read_to_string(out.path().join("2024_daily.csv")).unwrap(),
        "dt,avg_hr,max_hr,min_hr\n2024-05-05,15.0,20,10\n"
    );
}

#[test]
fn malformed_value_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = input(&dir, &["2024-05-05 05:05:05,10", "2025-05-05 05:05:05,abc"]);
    let err = Pipeline::new(&path, out.path())
        .partition(Partition::Yearly)
        .breakdown(Breakdown::Daily)
        .run()
        .unwrap_err();
    assert!(matches!(err, Error::Loader(_)));
    assert!(output_files(out.path()).is_empty());
}

#[test]
fn missing_input_file() {
    let out = tempfile::tempdir().unwrap();
    let err = Pipeline::new(out.path().join("missing.csv"), out.path())
        .run()
        .unwrap_err();
    assert!(matches!(err, Error::Loader(_)));
}

#[test]
fn header_only_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = input(&dir, &[]);
    let paths = Pipeline::new(&path, out.path()).run().unwrap();
    assert!(paths.is_empty());
    assert!(output_files(out.path()).is_empty());
}

#[test]
fn runs_are_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = input(
        &dir,
        &[
            "2024-03-01 00:00:01,1.5",
            "2022-03-01 00:00:01,2.5",
            "2024-03-01 00:59:59,3.5",
            "2024-03-02 13:00:00,4.5",
        ],
    );
    let run = || {
        Pipeline::new(&path, out.path())
            .partition(Partition::Yearly)
            .breakdown(Breakdown::Hourly)
            .run()
            .unwrap()
            .into_iter()
            .map(|p| fs::read(p).unwrap())
            .collect::<Vec<_>>()
    };
    let first = run();
    let second = run();
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}
