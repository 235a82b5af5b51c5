use bookload_db::schema::{CURRENT_VERSION, create_schema, get_schema_version};
use bookload_db::{open_database, open_memory};
use tempfile::TempDir;

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    let version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(version, CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error
    create_schema(&conn).unwrap();
}

#[test]
fn foreign_keys_enabled() {
    let conn = open_memory().unwrap();
    let fk: i32 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk, 1);
}

#[test]
fn all_tables_exist() {
    let conn = open_memory().unwrap();
    let tables = ["schema_version", "categories", "books", "import_log"];
    for table in tables {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table '{}' should exist", table);
    }
}

#[test]
fn open_database_creates_and_reopens_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("catalog.db");

    {
        let conn = open_database(&path).unwrap();
        conn.execute("INSERT INTO categories (name) VALUES ('Fiction')", [])
            .unwrap();
    }

    let conn = open_database(&path).unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn open_database_rejects_newer_schema() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("catalog.db");

    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_VERSION + 1],
        )
        .unwrap();
    }

    assert!(open_database(&path).is_err());
}

#[test]
fn negative_copies_rejected_by_storage() {
    let conn = open_memory().unwrap();
    conn.execute("INSERT INTO categories (name) VALUES ('Fiction')", [])
        .unwrap();
    let result = conn.execute(
        "INSERT INTO books (category_id, book_code, title, number_of_copies)
         VALUES (1, 'F001', 'Dune', -1)",
        [],
    );
    assert!(result.is_err());
}
