//! Tests for RecordStore
//!
//! These tests verify:
//! - Opening a missing file gives an empty store
//! - Loading stops at the first malformed line, keeping earlier records
//! - Save/load round-trips reproduce the file byte for byte
//! - Case-insensitive key lookup and substring filtering

use std::fs;
use std::path::PathBuf;

use tallybook::bank::Account;
use tallybook::library::{Availability, Book, Patron};
use tallybook::store::{decode_line, encode_record, split_fields};
use tallybook::{RecordStore, TallyError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_file(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    (temp_dir, path)
}

fn write_lines(path: &PathBuf, lines: &[&str]) {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content).unwrap();
}

// =============================================================================
// Open / Load Tests
// =============================================================================

#[test]
fn test_open_missing_file_is_empty() {
    let (_temp, path) = setup_temp_file("books.txt");

    let store = RecordStore::<Book>::open(&path);

    assert!(store.is_empty());
    assert!(!store.load_report().file_found);
    assert!(store.load_report().is_complete());
    assert!(!path.exists());
}

#[test]
fn test_load_trims_fields() {
    let (_temp, path) = setup_temp_file("books.txt");
    write_lines(&path, &["  Dune ,Herbert,  SciFi ,  true  "]);

    let store = RecordStore::<Book>::open(&path);

    assert_eq!(store.len(), 1);
    let book = &store.records()[0];
    assert_eq!(book.title(), "Dune");
    assert_eq!(book.author(), "Herbert");
    assert_eq!(book.genre(), "SciFi");
    assert!(book.is_available());
}

#[test]
fn test_load_availability_flag() {
    let (_temp, path) = setup_temp_file("books.txt");
    write_lines(
        &path,
        &["A, x, y, true", "B, x, y, false", "C, x, y, TRUE", "D, x, y, nope"],
    );

    let store = RecordStore::<Book>::open(&path);

    let states: Vec<Availability> = store.iter().map(Book::availability).collect();
    assert_eq!(
        states,
        vec![
            Availability::Available,
            Availability::Borrowed,
            Availability::Available,
            Availability::Borrowed,
        ]
    );
}

#[test]
fn test_load_stops_at_short_line() {
    let (_temp, path) = setup_temp_file("patrons.txt");
    write_lines(&path, &["Alice, a@x.com", "Bob", "Carol, c@x.com"]);

    let store = RecordStore::<Patron>::open(&path);

    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].name(), "Alice");

    let report = store.load_report();
    assert!(report.file_found);
    assert_eq!(report.records_loaded, 1);
    assert_eq!(report.stopped_at_line, Some(2));
    assert!(!report.is_complete());
}

#[test]
fn test_load_stops_at_non_numeric_field() {
    let (_temp, path) = setup_temp_file("bank_data.txt");
    write_lines(
        &path,
        &[
            "1001,Alice,pw,500.0,savings",
            "1002,Bob,pw,lots,current",
            "1003,Carol,pw,0.0,current",
        ],
    );

    let store = RecordStore::<Account>::open(&path);

    assert_eq!(store.len(), 1);
    assert_eq!(store.load_report().stopped_at_line, Some(2));
    assert!(store.load_report().error.as_deref().unwrap().contains("balance"));
}

#[test]
fn test_load_skips_blank_lines() {
    let (_temp, path) = setup_temp_file("patrons.txt");
    write_lines(&path, &["Alice, a@x.com", "", "   ", "Bob, b@x.com"]);

    let store = RecordStore::<Patron>::open(&path);

    assert_eq!(store.len(), 2);
    assert!(store.load_report().is_complete());
}

#[test]
fn test_extra_fields_are_ignored() {
    let (_temp, path) = setup_temp_file("patrons.txt");
    write_lines(&path, &["Alice, a@x.com, extra"]);

    let store = RecordStore::<Patron>::open(&path);

    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].contact_info(), "a@x.com");
}

// =============================================================================
// Save / Round-Trip Tests
// =============================================================================

#[test]
fn test_round_trip_books_and_patrons() {
    let (_temp, path) = setup_temp_file("books.txt");
    let original = "Dune, Herbert, SciFi, true\nEmma, Austen, Classic, false\n";
    fs::write(&path, original).unwrap();

    let store = RecordStore::<Book>::open(&path);
    store.save().unwrap();
    let reloaded = RecordStore::<Book>::open(&path);
    reloaded.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_round_trip_accounts() {
    let (_temp, path) = setup_temp_file("bank_data.txt");
    let original = "1001,Alice,secret,500.0,savings\n1002,Bob,hunter2,12.75,current\n";
    fs::write(&path, original).unwrap();

    let store = RecordStore::<Account>::open(&path);
    store.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_save_creates_file() {
    let (_temp, path) = setup_temp_file("patrons.txt");

    let mut store = RecordStore::<Patron>::open(&path);
    store.push(Patron::new("Alice", "a@x.com"));
    store.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Alice, a@x.com\n");
}

#[test]
fn test_save_drops_unread_tail_after_partial_load() {
    let (_temp, path) = setup_temp_file("patrons.txt");
    write_lines(&path, &["Alice, a@x.com", "broken", "Carol, c@x.com"]);

    let store = RecordStore::<Patron>::open(&path);
    store.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Alice, a@x.com\n");
}

#[test]
fn test_save_into_missing_directory_fails() {
    let (temp, _) = setup_temp_file("unused");
    let path = temp.path().join("missing").join("books.txt");

    let store = RecordStore::<Book>::open(&path);
    let result = store.save();

    assert!(matches!(result, Err(TallyError::Io(_))));
}

// =============================================================================
// Lookup / Filter Tests
// =============================================================================

#[test]
fn test_find_by_key_ignores_case() {
    let (_temp, path) = setup_temp_file("books.txt");
    let mut store = RecordStore::<Book>::open(&path);
    store.push(Book::new("Dune", "Herbert", "SciFi"));

    assert!(store.find_by_key("dune").is_some());
    assert!(store.find_by_key("DUNE").is_some());
    assert!(store.find_by_key("Dun").is_none());
}

#[test]
fn test_find_by_key_returns_first_duplicate() {
    let (_temp, path) = setup_temp_file("books.txt");
    let mut store = RecordStore::<Book>::open(&path);
    store.push(Book::new("Dune", "Herbert", "SciFi"));
    store.push(Book::new("dune", "Someone Else", "Parody"));

    let found = store.find_by_key("DUNE").unwrap();
    assert_eq!(found.author(), "Herbert");
}

#[test]
fn test_filter_substring_ignores_case() {
    let (_temp, path) = setup_temp_file("books.txt");
    let mut store = RecordStore::<Book>::open(&path);
    store.push(Book::new("Dune", "Herbert", "SciFi"));
    store.push(Book::new("Emma", "Austen", "Classic"));
    store.push(Book::new("Neuromancer", "Gibson", "Science Fiction"));

    let hits = store.filter(Book::genre, "sci");
    let titles: Vec<&str> = hits.iter().map(|b| b.title()).collect();
    assert_eq!(titles, vec!["Dune", "Neuromancer"]);

    assert!(store.filter(Book::author, "tolkien").is_empty());
}

#[test]
fn test_account_key_is_number() {
    let (_temp, path) = setup_temp_file("bank_data.txt");
    write_lines(&path, &["1001,Alice,pw,500.0,savings"]);

    let store = RecordStore::<Account>::open(&path);

    assert_eq!(store.find_by_key("1001").unwrap().holder(), "Alice");
    assert!(store.find_by_key("1002").is_none());
}

// =============================================================================
// Codec Tests
// =============================================================================

#[test]
fn test_split_fields_trims() {
    assert_eq!(split_fields(" a , b ,c"), vec!["a", "b", "c"]);
}

#[test]
fn test_decode_line_reports_line_number() {
    let result = decode_line::<Patron>("only-one-field", 7);

    match result {
        Err(TallyError::Parse { line, .. }) => assert_eq!(line, 7),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_encode_uses_record_separator() {
    let book = Book::new("Dune", "Herbert", "SciFi").with_availability(Availability::Borrowed);
    assert_eq!(encode_record(&book), "Dune, Herbert, SciFi, false");

    let account = decode_line::<Account>("1001, Alice, pw, 500, SAVINGS", 1).unwrap();
    assert_eq!(encode_record(&account), "1001,Alice,pw,500.0,savings");
}
