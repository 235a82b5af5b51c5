use bookload_import::*;

fn file(source: &str, added: u64, updated: &[&str], invalid: &[&str]) -> FileResult {
    FileResult {
        source: source.to_string(),
        added,
        updated: updated.len() as u64,
        skipped: invalid.len() as u64,
        updated_books: updated.iter().map(|s| s.to_string()).collect(),
        unchanged: Vec::new(),
        skipped_rows: invalid
            .iter()
            .map(|code| SkippedRow {
                category: "Fiction".to_string(),
                book_code: code.to_string(),
                cause: SkipCause::MissingTitle,
            })
            .collect(),
    }
}

#[test]
fn empty_run_is_all_zero() {
    let summary = RunAccumulator::default().finalize();
    assert_eq!(summary, RunSummary::default());
}

#[test]
fn add_sums_counts_and_concatenates_lists() {
    let mut totals = RunAccumulator::default();
    totals.add(file("a.csv", 2, &["F001 (Dune)"], &["F009"]));
    totals.add(file("b.csv", 1, &["F001 (Dune)", "S001 (Cosmos)"], &[]));
    let summary = totals.finalize();

    assert_eq!(summary.added, 3);
    assert_eq!(summary.updated, 3);
    assert_eq!(summary.skipped, 1);
    assert_eq!(
        summary.updated_books,
        vec!["F001 (Dune)", "F001 (Dune)", "S001 (Cosmos)"]
    );
    assert_eq!(summary.files.len(), 2);
    assert_eq!(summary.files[1].source, "b.csv");
}

#[test]
fn collecting_file_results_is_a_fold() {
    let results = vec![
        file("a.csv", 1, &[], &["X1"]),
        file("b.csv", 0, &["F001 (Dune)"], &["X2", "X3"]),
    ];
    let summary: RunSummary = results.into_iter().collect();
    assert_eq!((summary.added, summary.updated, summary.skipped), (1, 1, 3));
    let codes: Vec<&str> = summary
        .skipped_rows
        .iter()
        .map(|r| r.book_code.as_str())
        .collect();
    assert_eq!(codes, vec!["X1", "X2", "X3"]);
}

#[test]
fn failures_are_kept_separately() {
    let mut totals = RunAccumulator::default();
    totals.record_failure("gone.csv", &ImportError::SourceNotFound("gone.csv".into()));
    totals.add(file("a.csv", 1, &[], &[]));
    let summary = totals.finalize();

    assert_eq!(summary.added, 1);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].source, "gone.csv");
    assert_eq!(summary.failed[0].error, "File not found: gone.csv");
}
