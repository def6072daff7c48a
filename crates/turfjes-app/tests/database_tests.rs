// Rust guideline compliant 2026-10-19

//! Integration tests for the `Database` facade.
//!
//! Each test opens a database in its own temporary directory; reopening the
//! same directory simulates a process restart.

use std::fs;
use tempfile::TempDir;
use turfjes_app::{AppError, Database, ErrorCode, RemovalTarget};
use turfjes_core::{Config, Error as CoreError, RemovalReason};

fn open(temp_dir: &TempDir) -> Database {
    Database::open(temp_dir.path(), Config::default()).expect("Failed to open database")
}

fn core_error(result: Result<impl std::fmt::Debug, AppError>) -> CoreError {
    match result {
        Err(AppError::Core(core)) => core,
        other => panic!("expected core error, got {:?}", other),
    }
}

#[test]
fn test_open_creates_data_dir_and_files() {
    let temp_dir = TempDir::new().unwrap();
    let db = open(&temp_dir);

    let data = temp_dir.path().join("data");
    assert!(data.is_dir());
    for file in ["settings.json", "people.json", "usersettings.json", "turfjes.json"] {
        assert!(data.join(file).exists(), "{file} should be initialized");
    }
    assert_eq!(db.data_dir().path(), data.as_path());
}

#[test]
fn test_alice_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = open(&temp_dir);

    let alice = db.create_person("Alice", "chair").unwrap();
    assert_eq!(alice.id, 0);

    db.create_reason("late", "arrived late").unwrap();
    let first = db.create_mark_at(0, "late", 100.0).unwrap();
    let second = db.create_mark_at(0, "late", 200.0).unwrap();
    assert_eq!(first.id, 0);
    assert_eq!(second.id, 1);

    db.create_removal_reason_with_count("resolved", "issue resolved", 1)
        .unwrap();
    let removed = db.remove_marks(0, "resolved").unwrap();

    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].id, 0);

    let mark0 = db.get_mark(0).unwrap();
    assert!(mark0.removed);
    assert_eq!(mark0.removal_reason_abbreviation, "resolved");
    assert!(!db.get_mark(1).unwrap().removed);
}

#[test]
fn test_create_mark_then_get() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = open(&temp_dir);
    let person = db.create_person("Bob", "treasurer").unwrap();
    db.create_reason("noise", "too loud").unwrap();

    let created = db.create_mark_at(person.id, "noise", 1234.5).unwrap();
    let loaded = db.get_mark(created.id).unwrap();

    assert_eq!(loaded, created);
    assert_eq!(loaded.person_id, person.id);
    assert_eq!(loaded.reason_abbreviation, "noise");
    assert_eq!(loaded.creation_date, 1234.5);
    assert!(!loaded.removed);
}

#[test]
fn test_create_mark_without_timestamp_uses_call_time() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = open(&temp_dir);
    db.create_person("Bob", "treasurer").unwrap();
    db.create_reason("noise", "too loud").unwrap();

    let before = turfjes_app::unix_timestamp().unwrap();
    let mark = db.create_mark(0, "noise").unwrap();
    let after = turfjes_app::unix_timestamp().unwrap();

    assert!(mark.creation_date >= before && mark.creation_date <= after);
}

#[test]
fn test_create_mark_validates_references() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = open(&temp_dir);
    db.create_person("Alice", "chair").unwrap();
    db.create_reason("late", "arrived late").unwrap();

    assert!(matches!(
        core_error(db.create_mark_at(7, "late", 1.0)),
        CoreError::PersonNotFound(7)
    ));
    assert!(matches!(
        core_error(db.create_mark_at(0, "missing", 1.0)),
        CoreError::ReasonNotFound(_)
    ));
    assert!(db.get_marks(0).is_empty(), "no mark should be created");

    // Failed attempts burned IDs 0 and 1.
    let mark = db.create_mark_at(0, "late", 1.0).unwrap();
    assert_eq!(mark.id, 2);
}

#[test]
fn test_non_finite_creation_date_keeps_database_openable() {
    let temp_dir = TempDir::new().unwrap();
    {
        let mut db = open(&temp_dir);
        db.create_person("Alice", "chair").unwrap();
        db.create_reason("late", "arrived late").unwrap();
        db.create_mark_at(0, "late", 1.0).unwrap();

        let error = db.create_mark_at(0, "late", f64::NAN).unwrap_err();
        assert_eq!(error.code(), ErrorCode::InvalidInput);
        assert!(matches!(
            core_error(db.create_mark_at(0, "late", f64::INFINITY)),
            CoreError::InvalidInput(_)
        ));
    }

    let db = Database::open(temp_dir.path(), Config::default()).expect("reopen should succeed");
    assert_eq!(db.get_marks(0).len(), 1);
}

#[test]
fn test_wall_clock_timestamps_survive_restart() {
    let temp_dir = TempDir::new().unwrap();
    let before = {
        let mut db = open(&temp_dir);
        db.create_person("Alice", "chair").unwrap();
        db.create_reason("late", "arrived late").unwrap();
        let mut date = 1_700_000_000.0_f64;
        for i in 0..200 {
            date += 0.1 + f64::from(i) / 7.0;
            db.create_mark_at(0, "late", date).unwrap();
        }
        db.create_mark(0, "late").unwrap();
        db.get_marks(0)
    };

    let db = open(&temp_dir);
    assert_eq!(db.get_marks(0), before);
}

#[test]
fn test_removal_reason_is_not_a_mark_reason() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = open(&temp_dir);
    db.create_person("Alice", "chair").unwrap();
    db.create_removal_reason("resolved", "issue resolved").unwrap();

    assert!(matches!(
        core_error(db.create_mark_at(0, "resolved", 1.0)),
        CoreError::ReasonNotFound(_)
    ));
}

#[test]
fn test_remove_marks_validates_references() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = open(&temp_dir);
    db.create_person("Alice", "chair").unwrap();
    db.create_reason("late", "arrived late").unwrap();
    db.create_mark_at(0, "late", 1.0).unwrap();
    db.create_removal_reason("resolved", "issue resolved").unwrap();

    assert!(matches!(
        core_error(db.remove_marks(3, "resolved")),
        CoreError::PersonNotFound(3)
    ));
    assert!(matches!(
        core_error(db.remove_marks(0, "late")),
        CoreError::ReasonNotFound(_)
    ));

    let unregistered = RemovalReason {
        abbreviation: "ghost".to_string(),
        description: "not registered".to_string(),
        removal_count: 10,
    };
    assert!(matches!(
        core_error(db.remove_marks(0, &unregistered)),
        CoreError::ReasonNotFound(_)
    ));
    assert_eq!(db.get_active_marks(0).len(), 1);
}

#[test]
fn test_remove_marks_with_resolved_reason() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = open(&temp_dir);
    db.create_person("Alice", "chair").unwrap();
    db.create_reason("late", "arrived late").unwrap();
    for date in [30.0, 10.0, 20.0] {
        db.create_mark_at(0, "late", date).unwrap();
    }
    let reason = db
        .create_removal_reason_with_count("cake", "brought cake", 2)
        .unwrap();

    let removed = db.remove_marks(0, RemovalTarget::Reason(&reason)).unwrap();
    let dates: Vec<f64> = removed.iter().map(|m| m.creation_date).collect();
    assert_eq!(dates, vec![10.0, 20.0]);

    let active = db.get_active_marks(0);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].creation_date, 30.0);
}

#[test]
fn test_remove_more_than_available() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = open(&temp_dir);
    db.create_person("Alice", "chair").unwrap();
    db.create_reason("late", "arrived late").unwrap();
    db.create_mark_at(0, "late", 1.0).unwrap();
    db.create_mark_at(0, "late", 2.0).unwrap();
    db.create_removal_reason_with_count("amnesty", "general amnesty", 10)
        .unwrap();

    let removed = db.remove_marks(0, "amnesty").unwrap();
    assert_eq!(removed.len(), 2);
    assert!(db.get_active_marks(0).is_empty());
    assert_eq!(db.get_marks(0).len(), 2, "removed marks are kept");
}

#[test]
fn test_default_removal_count_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        default_removal_count: 3,
        ..Config::default()
    };
    let mut db = Database::open(temp_dir.path(), config).unwrap();

    let reason = db.create_removal_reason("party", "threw a party").unwrap();
    assert_eq!(reason.removal_count, 3);
}

#[test]
fn test_duplicate_reason_keeps_first() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = open(&temp_dir);

    db.create_reason("X", "desc").unwrap();
    let result = db.create_reason("X", "desc2");

    let error = result.unwrap_err();
    assert_eq!(error.code(), ErrorCode::AlreadyExists);
    assert_eq!(db.get_reason("X").unwrap().description, "desc");
}

#[test]
fn test_update_and_delete_person() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = open(&temp_dir);
    db.create_person("Alice", "chair").unwrap();

    let updated = db.update_person(0, "", "secretary").unwrap();
    assert_eq!(updated.name, "Alice");
    assert_eq!(updated.position, "secretary");

    let error = db.delete_person(4).unwrap_err();
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(db.people().len(), 1);

    db.delete_person(0).unwrap();
    assert!(db.people().is_empty());
}

#[test]
fn test_person_deletion_leaves_marks() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = open(&temp_dir);
    db.create_person("Alice", "chair").unwrap();
    db.create_reason("late", "arrived late").unwrap();
    db.create_mark_at(0, "late", 1.0).unwrap();

    db.delete_person(0).unwrap();

    assert_eq!(db.get_marks(0).len(), 1);
    assert!(db.create_mark_at(0, "late", 2.0).is_err());
}

#[test]
fn test_ids_not_reused_after_delete() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = open(&temp_dir);
    db.create_person("Alice", "chair").unwrap();
    db.delete_person(0).unwrap();

    let bob = db.create_person("Bob", "treasurer").unwrap();
    assert_eq!(bob.id, 1);
}

#[test]
fn test_state_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let (person, reason, removal_reason, marks) = {
        let mut db = open(&temp_dir);
        let person = db.create_person("Alice", "chair").unwrap();
        let reason = db.create_reason("late", "arrived late").unwrap();
        let removal_reason = db
            .create_removal_reason_with_count("resolved", "issue resolved", 2)
            .unwrap();
        db.create_mark_at(0, "late", 10.5).unwrap();
        db.create_mark_at(0, "late", 20.25).unwrap();
        db.create_mark_at(0, "late", 30.0).unwrap();
        db.remove_marks(0, "resolved").unwrap();
        (person, reason, removal_reason, db.get_marks(0))
    };

    let mut db = open(&temp_dir);
    assert_eq!(db.get_person(0).unwrap(), person);
    assert_eq!(db.get_reason("late").unwrap(), reason);
    assert_eq!(db.get_removal_reason("resolved").unwrap(), removal_reason);
    assert_eq!(db.get_marks(0), marks);

    // Counters were persisted too.
    assert_eq!(db.create_person("Bob", "treasurer").unwrap().id, 1);
    assert_eq!(db.create_mark_at(0, "late", 40.0).unwrap().id, 3);
}

#[test]
fn test_reset_empties_everything() {
    let temp_dir = TempDir::new().unwrap();
    let mut db = open(&temp_dir);
    db.create_person("Alice", "chair").unwrap();
    db.create_person("Bob", "treasurer").unwrap();
    db.create_reason("late", "arrived late").unwrap();
    db.create_removal_reason("resolved", "issue resolved").unwrap();
    db.create_mark_at(1, "late", 1.0).unwrap();

    db.reset().unwrap();

    assert!(db.people().is_empty());
    assert!(db.reasons().is_empty());
    assert!(db.removal_reasons().is_empty());
    assert!(db.get_marks(1).is_empty());

    assert_eq!(db.create_person("Carol", "member").unwrap().id, 0);
    db.create_reason("late", "arrived late").unwrap();
    assert_eq!(db.create_mark_at(0, "late", 1.0).unwrap().id, 0);

    drop(db);
    let db = open(&temp_dir);
    assert_eq!(db.people().len(), 1);
}

#[test]
fn test_corrupt_file_is_reported_on_open() {
    let temp_dir = TempDir::new().unwrap();
    drop(open(&temp_dir));
    fs::write(temp_dir.path().join("data").join("people.json"), "{not json").unwrap();

    let error = Database::open(temp_dir.path(), Config::default()).unwrap_err();
    assert_eq!(error.code(), ErrorCode::CorruptStore);
    assert!(error.details().is_some());
}

#[test]
fn test_reads_legacy_files() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("settings.json"),
        r#"{"currentTurfjeID": 1, "currentPersonID": 0}"#,
    )
    .unwrap();
    fs::write(
        data.join("people.json"),
        r#"[{"id": 0, "name": "Alice", "position": "chair"}]"#,
    )
    .unwrap();
    fs::write(
        data.join("usersettings.json"),
        r#"{"reasons": [{"abbreviation": "late", "description": "arrived late"}], "removalReasons": [{"abbreviation": "ok", "description": "fine", "turfjeCount": 1}]}"#,
    )
    .unwrap();
    fs::write(
        data.join("turfjes.json"),
        r#"[{"id": 0, "personId": 0, "reasonAbbreviation": "late", "remReasonAbbreviation": "", "creationDate": 100.0, "removed": false},
{"id": 1, "personId": 0, "reasonAbbreviation": "late", "remReasonAbbreviation": "", "creationDate": 200.0, "removed": false}]"#,
    )
    .unwrap();

    let mut db = open(&temp_dir);
    let removed = db.remove_marks(0, "ok").unwrap();
    assert_eq!(removed[0].id, 0);
    assert_eq!(db.create_mark_at(0, "late", 300.0).unwrap().id, 2);

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(data.join("turfjes.json")).unwrap()).unwrap();
    assert_eq!(raw["schemaVersion"], 1);
    assert_eq!(raw["data"].as_array().unwrap().len(), 3);
}

#[test]
fn test_open_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        data_dir: "records".into(),
        default_removal_count: 2,
        pretty_json: true,
    };
    config.save(temp_dir.path()).unwrap();

    let mut db = Database::open_with_config_file(temp_dir.path()).unwrap();
    assert_eq!(db.config().default_removal_count, 2);
    db.create_person("Alice", "chair").unwrap();

    let raw = fs::read_to_string(temp_dir.path().join("records").join("people.json")).unwrap();
    assert!(raw.contains('\n'), "pretty output expected");
}
