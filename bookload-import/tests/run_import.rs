use std::fs;
use std::path::{Path, PathBuf};

use bookload_db::*;
use bookload_import::*;
use tempfile::TempDir;

const HEADER: &str = "CATEGORY,BOOK CODE,BOOK TITLE,BOOK AUTHOR,NO. OF COPIES\n";

fn write_csv(dir: &Path, name: &str, rows: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("{HEADER}{rows}")).unwrap();
    path
}

#[test]
fn sqlite_apply_creates_category_and_book() {
    let tmp = TempDir::new().unwrap();
    let file = write_csv(tmp.path(), "a.csv", "Fiction,F001,Dune,Herbert,3\n");

    let conn = open_memory().unwrap();
    let mut catalog = SqliteCatalog::new(&conn);
    let summary = run_import(&mut catalog, &[file], RunMode::Apply, &SilentEvents);

    assert_eq!((summary.added, summary.updated, summary.skipped), (1, 0, 0));
    assert!(find_category_by_name(&conn, "Fiction").unwrap().is_some());

    let book = find_book_by_code(&conn, "F001").unwrap().unwrap();
    assert_eq!(book.title, "Dune");
    assert_eq!(book.authors.as_deref(), Some("Herbert"));
    assert_eq!(book.number_of_copies, 3);
}

#[test]
fn sqlite_scenario_add_update_skip() {
    let tmp = TempDir::new().unwrap();
    let first = write_csv(tmp.path(), "1.csv", "Fiction,F001,Dune,Herbert,3\n");
    let second = write_csv(tmp.path(), "2.csv", "Fiction,F001,Dune,Herbert,5\n");
    let third = write_csv(tmp.path(), "3.csv", "Fiction,F001,Dune,Herbert,5\n");
    let fourth = write_csv(tmp.path(), "4.csv", "Fiction,F001,,Herbert,5\n");

    let conn = open_memory().unwrap();
    let mut catalog = SqliteCatalog::new(&conn);
    let summary = run_import(
        &mut catalog,
        &[first, second, third, fourth],
        RunMode::Apply,
        &SilentEvents,
    );

    let counts: Vec<(u64, u64, u64)> = summary
        .files
        .iter()
        .map(|f| (f.added, f.updated, f.skipped))
        .collect();
    assert_eq!(counts, vec![(1, 0, 0), (0, 1, 0), (0, 0, 1), (0, 0, 1)]);
    assert_eq!(summary.updated_books, vec!["F001 (Dune)".to_string()]);
    assert_eq!(summary.skipped_rows.len(), 1);
    assert_eq!(summary.skipped_rows[0].book_code, "F001");

    let book = find_book_by_code(&conn, "F001").unwrap().unwrap();
    assert_eq!(book.number_of_copies, 5);
}

#[test]
fn sqlite_preview_never_writes() {
    let tmp = TempDir::new().unwrap();
    let file = write_csv(
        tmp.path(),
        "a.csv",
        "Fiction,F001,Dune,Herbert,3\nScience,S001,Cosmos,Sagan,2\n",
    );

    let conn = open_memory().unwrap();
    let mut catalog = SqliteCatalog::new(&conn);
    let summary = run_import(&mut catalog, &[file], RunMode::Preview, &SilentEvents);
    assert_eq!(summary.added, 2);

    let stats = catalog_stats(&conn).unwrap();
    assert_eq!(stats.books, 0);
    assert_eq!(stats.categories, 0);
    assert_eq!(stats.imports, 0);
}

#[test]
fn apply_records_each_file_in_import_log() {
    let tmp = TempDir::new().unwrap();
    let a = write_csv(tmp.path(), "a.csv", "Fiction,F001,Dune,Herbert,3\n");
    let b = write_csv(tmp.path(), "b.csv", "Fiction,F002,,Austen,1\n");

    let conn = open_memory().unwrap();
    let mut catalog = SqliteCatalog::new(&conn);
    run_import(&mut catalog, &[a, b], RunMode::Apply, &SilentEvents);

    let logs = list_import_logs(&conn, None).unwrap();
    assert_eq!(logs.len(), 2);
    let b_log = logs
        .iter()
        .find(|l| l.source_name.ends_with("b.csv"))
        .unwrap();
    assert_eq!(b_log.records_created, 0);
    assert_eq!(b_log.records_skipped, 1);
}

#[test]
fn missing_file_is_skipped_and_run_continues() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope.csv");
    let good = write_csv(tmp.path(), "good.csv", "Fiction,F001,Dune,Herbert,3\n");

    let mut catalog = MemoryCatalog::new();
    let summary = run_import(
        &mut catalog,
        &[missing, good],
        RunMode::Apply,
        &SilentEvents,
    );

    assert_eq!(summary.added, 1);
    assert_eq!(summary.files.len(), 1);
    assert_eq!(summary.failed.len(), 1);
    assert!(summary.failed[0].source.ends_with("nope.csv"));
    assert!(summary.failed[0].error.starts_with("File not found"));
}

#[test]
fn missing_column_abandons_only_that_file() {
    let tmp = TempDir::new().unwrap();
    let bad = tmp.path().join("bad.csv");
    fs::write(
        &bad,
        "CATEGORY,BOOK CODE,BOOK TITLE,NO. OF COPIES\nFiction,F009,Lost,1\n",
    )
    .unwrap();
    let good = write_csv(tmp.path(), "good.csv", "Fiction,F001,Dune,Herbert,3\n");

    let mut catalog = MemoryCatalog::new();
    let summary = run_import(&mut catalog, &[bad, good], RunMode::Apply, &SilentEvents);

    assert!(catalog.book("F009").is_none());
    assert!(catalog.book("F001").is_some());
    assert_eq!(summary.failed.len(), 1);
    assert!(summary.failed[0].error.contains("BOOK AUTHOR"));
    assert_eq!(catalog.imports().len(), 1);
}

#[test]
fn multi_file_totals_are_sums_and_concatenations() {
    let tmp = TempDir::new().unwrap();
    let a = write_csv(
        tmp.path(),
        "a.csv",
        "Fiction,F001,Dune,Herbert,3\nFiction,F002,,Austen,1\n",
    );
    let b = write_csv(
        tmp.path(),
        "b.csv",
        "Fiction,F001,Dune,Herbert,4\nScience,S001,,Sagan,1\nFiction,F003,Emma,Austen,2\n",
    );
    let c = write_csv(tmp.path(), "c.csv", "Fiction,F001,Dune,Herbert,6\n");

    let mut catalog = MemoryCatalog::new();
    let summary = run_import(&mut catalog, &[a, b, c], RunMode::Apply, &SilentEvents);

    let added: u64 = summary.files.iter().map(|f| f.added).sum();
    let updated: u64 = summary.files.iter().map(|f| f.updated).sum();
    let skipped: u64 = summary.files.iter().map(|f| f.skipped).sum();
    assert_eq!((summary.added, summary.updated, summary.skipped), (added, updated, skipped));
    assert_eq!((summary.added, summary.updated, summary.skipped), (2, 2, 2));

    // The same book updated by two files is listed twice, in file order.
    assert_eq!(
        summary.updated_books,
        vec!["F001 (Dune)".to_string(), "F001 (Dune)".to_string()]
    );
    let skipped_codes: Vec<&str> = summary
        .skipped_rows
        .iter()
        .map(|r| r.book_code.as_str())
        .collect();
    assert_eq!(skipped_codes, vec!["F002", "S001"]);
    assert_eq!(catalog.book("F001").unwrap().number_of_copies, 6);
}
