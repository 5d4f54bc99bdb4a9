//! Store Tests
//!
//! Tests verify:
//! - Loading and saving jar files
//! - Load errors and strict mode
//! - Record counts, clearing and cursors
//! - Field traversal and in-place mapping

use std::fs;

use recordjar::{Config, Direction, Field, FieldInfo, JarError, Query, RecordJar, WarningKind};
use tempfile::tempdir;

// =============================================================================
// Helper Functions
// =============================================================================

const SAMPLE: &str = "%%encoding: US-ASCII\n\
                      name: alpha\n\
                      port: 80\n\
                      %%\n\
                      name: beta\n\
                      notes: first\\n\\\n  second\n";

fn store(text: &str) -> RecordJar {
    RecordJar::from_text(text, Config::default()).unwrap()
}

// =============================================================================
// Load / Save Tests
// =============================================================================

#[test]
fn test_load_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.jar");
    fs::write(&path, SAMPLE).unwrap();

    let mut jar = RecordJar::load(&path).unwrap();
    assert_eq!(jar.len(), 2);
    assert_eq!(jar.size(), 2);
    assert!(jar.warnings().is_empty());

    let notes = jar.get(Direction::This, &Query::by("name", "beta").field("notes"));
    assert_eq!(notes.as_deref(), Some("first\nsecond"));
}

#[test]
fn test_save_and_reload() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source.jar");
    let copy = dir.path().join("copy.jar");
    fs::write(&source, SAMPLE).unwrap();

    let original = RecordJar::load(&source).unwrap();
    original.save(&copy).unwrap();

    let reloaded = RecordJar::load(&copy).unwrap();
    assert_eq!(reloaded.jar(), original.jar());
    assert_eq!(reloaded.size(), original.size());
}

#[test]
fn test_save_writes_header_first() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.jar");

    store("name: alpha\n").save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "%%encoding: US-ASCII\nname: alpha\n");
}

#[test]
fn test_save_replaces_existing_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.jar");
    fs::write(&path, "a much longer previous file content\n".repeat(10)).unwrap();

    store("id: 1\n").save(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "%%encoding: US-ASCII\nid: 1\n");
}

#[test]
fn test_save_empty_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.jar");

    RecordJar::new(Config::default()).save(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "%%encoding: US-ASCII\n");

    let reloaded = RecordJar::load(&path).unwrap();
    assert!(reloaded.is_empty());
    assert_eq!(reloaded.size(), 0);
}

#[test]
fn test_mutations_survive_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("edit.jar");
    fs::write(&path, SAMPLE).unwrap();

    let mut jar = RecordJar::load(&path).unwrap();
    assert!(jar.set(Direction::This, &Query::by("name", "alpha").field("port"), "8080"));
    assert!(jar.add(Direction::This, &Query::by("name", "gamma").field("port"), "90"));
    assert!(jar.add(Direction::This, &Query::by("name", "gamma").field("pad"), "trailing "));
    assert!(jar
        .delete_record(Direction::This, &Query::by("name", "beta"))
        .is_some());
    jar.save(&path).unwrap();

    let mut reloaded = RecordJar::load(&path).unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(
        reloaded
            .get(Direction::This, &Query::by("name", "alpha").field("port"))
            .as_deref(),
        Some("8080")
    );
    assert_eq!(
        reloaded
            .get(Direction::This, &Query::by("name", "gamma").field("pad"))
            .as_deref(),
        Some("trailing ")
    );
    assert_eq!(reloaded.get(Direction::This, &Query::by("name", "beta")), None);
}

#[test]
fn test_special_values_round_trip_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("special.jar");
    let values = [
        "multi\nline\nvalue",
        "ends with newline\n",
        "\n indented after newline",
        "tab\tamp&back\\slash",
        "trailing space ",
        "ends with backslash\\",
    ];

    let mut jar = RecordJar::new(Config::default());
    for (i, value) in values.iter().enumerate() {
        let id = i.to_string();
        assert!(jar.add(Direction::This, &Query::by("id", &id).field("value"), value));
    }
    jar.save(&path).unwrap();

    let mut reloaded = RecordJar::load(&path).unwrap();
    assert!(reloaded.warnings().is_empty());
    for (i, value) in values.iter().enumerate() {
        let id = i.to_string();
        let loaded = reloaded.get(Direction::This, &Query::by("id", &id).field("value"));
        assert_eq!(loaded.as_deref(), Some(*value), "value {:?}", value);
    }
}

#[test]
fn test_empty_value_survives_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty_value.jar");
    let query = Query::by("k", "v").field("f");

    let mut jar = store("k: v\nf: something\n");
    assert!(jar.set(Direction::This, &query, ""));
    jar.save(&path).unwrap();

    let mut reloaded = RecordJar::load(&path).unwrap();
    assert!(reloaded.warnings().is_empty());
    assert_eq!(reloaded.get(Direction::This, &query).as_deref(), Some(""));
}

#[test]
fn test_field_order_survives_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("order.jar");

    let original = store("f: old\nk: v\nf: new\n%%\na: 1\nb: 2\nc: 3\n");
    original.save(&path).unwrap();

    let mut reloaded = RecordJar::load(&path).unwrap();
    assert_eq!(reloaded.jar(), original.jar());
    let value = reloaded.get(Direction::This, &Query::by("k", "v").field("f"));
    assert_eq!(value.as_deref(), Some("new"));
}

#[test]
fn test_write_to_matches_to_text() {
    let jar = store(SAMPLE);

    let mut out = Vec::new();
    jar.write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), jar.to_text().unwrap());
}

#[test]
fn test_to_text_without_folding() {
    let config = Config::builder().fold_newlines(false).build();
    let jar = RecordJar::from_text("text: a\\nb\n", config).unwrap();

    assert_eq!(jar.to_text().unwrap(), "%%encoding: US-ASCII\ntext: a\\nb\n");
}

// =============================================================================
// Load Error Tests
// =============================================================================

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let result = RecordJar::load(dir.path().join("missing.jar"));
    assert!(matches!(result, Err(JarError::Io(_))));
}

#[test]
fn test_load_unsupported_encoding() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("utf8.jar");
    fs::write(&path, "%%encoding: UTF-8\nname: alpha\n").unwrap();

    match RecordJar::load(&path) {
        Err(JarError::EncodingUnsupported(name)) => assert_eq!(name, "UTF-8"),
        other => panic!("Expected EncodingUnsupported, got {:?}", other),
    }
}

#[test]
fn test_load_keeps_warnings() {
    let jar = store("name: alpha\nbroken line\nport: 80\n");

    assert_eq!(jar.jar().field_count(), 2);
    assert_eq!(jar.warnings().len(), 1);
    assert_eq!(jar.warnings()[0].line, 2);
    assert_eq!(jar.warnings()[0].kind, WarningKind::MissingSeparator);
}

#[test]
fn test_load_strict_rejects_malformed_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.jar");
    fs::write(&path, "name: alpha\nbroken line\n").unwrap();

    let config = Config::builder().strict(true).build();
    match RecordJar::load_with(&path, config) {
        Err(JarError::Malformed { line, kind }) => {
            assert_eq!(line, 2);
            assert_eq!(kind, WarningKind::MissingSeparator);
        }
        other => panic!("Expected Malformed, got {:?}", other),
    }
}

// =============================================================================
// State Tests
// =============================================================================

#[test]
fn test_size_is_not_updated_by_mutations() {
    let mut jar = store(SAMPLE);
    assert!(jar.add(Direction::This, &Query::by("name", "gamma").field("port"), "1"));

    assert_eq!(jar.len(), 3);
    assert_eq!(jar.size(), 2);
}

#[test]
fn test_clear() {
    let mut jar = store("name: alpha\nbroken\n");
    jar.clear();

    assert!(jar.is_empty());
    assert_eq!(jar.size(), 0);
    assert!(jar.current_record().is_none());
    assert!(jar.warnings().is_empty());
    assert_eq!(jar.to_text().unwrap(), "%%encoding: US-ASCII\n");
}

#[test]
fn test_config_is_kept() {
    let config = Config::builder().fold_indent("\t").build();
    let jar = RecordJar::new(config.clone());
    assert_eq!(jar.config(), &config);
}

#[test]
fn test_cursor_starts_at_first_record() {
    let jar = store(SAMPLE);
    assert_eq!(jar.current_index(), Some(0));
    assert_eq!(jar.current_record().unwrap().value_of("name"), Some("alpha"));

    assert_eq!(RecordJar::new(Config::default()).current_index(), None);
}

// =============================================================================
// Field Cursor Tests
// =============================================================================

#[test]
fn test_next_field_steps_through_current_record() {
    let mut jar = store(SAMPLE);

    assert_eq!(jar.next_field(), Some(&Field::new("port", "80")));
    assert_eq!(jar.current_field(), Some(&Field::new("port", "80")));
    assert_eq!(jar.next_field(), Some(&Field::new("name", "alpha")));
    assert_eq!(jar.next_field(), None);
    assert_eq!(jar.current_field(), None);

    // Starts over after the end
    assert_eq!(jar.next_field(), Some(&Field::new("port", "80")));
}

#[test]
fn test_query_resets_field_cursor() {
    let mut jar = store(SAMPLE);
    jar.next_field().unwrap();

    jar.get(Direction::Next, &Query::any()).unwrap();
    assert_eq!(jar.current_field(), None);
    assert_eq!(jar.next_field().map(|f| f.name.as_str()), Some("notes"));
}

#[test]
fn test_reset_field_cursor() {
    let mut jar = store(SAMPLE);
    jar.next_field().unwrap();
    jar.next_field().unwrap();

    jar.reset_field_cursor();
    assert_eq!(jar.next_field().map(|f| f.name.as_str()), Some("port"));
}

#[test]
fn test_next_field_on_empty_store() {
    let mut jar = RecordJar::new(Config::default());
    assert_eq!(jar.next_field(), None);
}

// =============================================================================
// Traversal Tests
// =============================================================================

#[test]
fn test_iter_flags() {
    let jar = store("a: 1\nb: 2\n%%\nc: 3\n");
    let visited: Vec<_> = jar
        .iter()
        .map(|(info, field)| (info, field.name.clone()))
        .collect();

    let flags = |record_first, record_last, field_first, field_last| FieldInfo {
        record_first,
        record_last,
        field_first,
        field_last,
    };
    assert_eq!(
        visited,
        vec![
            (flags(true, false, true, false), "b".to_string()),
            (flags(true, false, false, true), "a".to_string()),
            (flags(false, true, true, true), "c".to_string()),
        ]
    );
}

#[test]
fn test_iter_empty_store() {
    let jar = RecordJar::new(Config::default());
    assert_eq!(jar.iter().count(), 0);
}

#[test]
fn test_mapfold_edits_in_place() {
    let mut jar = store("a: one\nb: two\n%%\nc: three\n");

    let mut last_flags = Vec::new();
    jar.mapfold(|info, field| {
        field.value = field.value.to_uppercase();
        last_flags.push(info.field_last);
    });

    assert_eq!(last_flags, vec![false, true, true]);
    assert_eq!(
        jar.to_text().unwrap(),
        "%%encoding: US-ASCII\na: ONE\nb: TWO\n%%\nc: THREE\n"
    );
}
