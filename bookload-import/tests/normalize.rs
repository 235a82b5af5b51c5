use bookload_import::*;

fn row(category: &str, code: &str, title: &str, author: &str, copies: &str) -> Row {
    [
        ("CATEGORY", category),
        ("BOOK CODE", code),
        ("BOOK TITLE", title),
        ("BOOK AUTHOR", author),
        ("NO. OF COPIES", copies),
    ]
    .into_iter()
    .collect()
}

fn valid(normalized: Normalized) -> NormalizedBook {
    match normalized {
        Normalized::Valid(book) => book,
        Normalized::Invalid(skipped) => panic!("row unexpectedly invalid: {skipped:?}"),
    }
}

#[test]
fn trims_text_fields() {
    let book = valid(normalize(&row("  Fiction ", " F001", "Dune  ", " Herbert ", " 3 ")).unwrap());
    assert_eq!(book.book_code, "F001");
    assert_eq!(book.fields.category, "Fiction");
    assert_eq!(book.fields.title, "Dune");
    assert_eq!(book.fields.authors.as_deref(), Some("Herbert"));
    assert_eq!(book.fields.number_of_copies, 3);
}

#[test]
fn blank_author_is_none() {
    let book = valid(normalize(&row("Fiction", "F001", "Dune", "", "3")).unwrap());
    assert_eq!(book.fields.authors, None);

    let book = valid(normalize(&row("Fiction", "F001", "Dune", "   ", "3")).unwrap());
    assert_eq!(book.fields.authors, None);
}

#[test]
fn copies_default_to_one() {
    for raw in ["", "abc", "-2", "2.5", "   "] {
        let book = valid(normalize(&row("Fiction", "F001", "Dune", "Herbert", raw)).unwrap());
        assert_eq!(book.fields.number_of_copies, 1, "input {raw:?}");
    }
}

#[test]
fn zero_copies_is_kept() {
    let book = valid(normalize(&row("Fiction", "F001", "Dune", "Herbert", "0")).unwrap());
    assert_eq!(book.fields.number_of_copies, 0);
}

#[test]
fn empty_title_is_invalid_with_identity() {
    let result = normalize(&row(" Fiction ", "F001", "   ", "Herbert", "3")).unwrap();
    assert_eq!(
        result,
        Normalized::Invalid(SkippedRow {
            category: "Fiction".to_string(),
            book_code: "F001".to_string(),
            cause: SkipCause::MissingTitle,
        })
    );
}

#[test]
fn missing_column_is_an_error() {
    let partial: Row = [
        ("CATEGORY", "Fiction"),
        ("BOOK CODE", "F001"),
        ("BOOK TITLE", "Dune"),
        ("NO. OF COPIES", "3"),
    ]
    .into_iter()
    .collect();

    match normalize(&partial) {
        Err(ImportError::MissingColumn { column }) => assert_eq!(column, "BOOK AUTHOR"),
        other => panic!("expected missing column, got {other:?}"),
    }
}

#[test]
fn parse_copies_accepts_plain_integers() {
    assert_eq!(parse_copies("12"), 12);
    assert_eq!(parse_copies(" 7 "), 7);
    assert_eq!(parse_copies("+4"), 4);
}
