//! End-to-end tests over a file-backed database.
//!
//! These tests:
//! 1. Create a temporary database file, create the schema, and seed it
//! 2. Exercise the documented integrity rules against the persisted file
//! 3. Reopen connections to confirm enforcement is not connection-local

use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::NamedTempFile;

use clubdb::db::{Database, DbError};
use clubdb::model::{Match, MatchStatus, Member, MemberRole, TeamPlayer};
use clubdb::seed::seed_sample_data;

/// Seeded ids are assigned in insertion order, starting at 1 per table.
const CLUB: i64 = 1;
const FOOTBALL_TEAM: i64 = 1;
const COACH: i64 = 3;
const REFEREE: i64 = 4;
const TOURNAMENT: i64 = 1;
const VENUE: i64 = 1;

fn seeded_db() -> (NamedTempFile, PathBuf, Database) {
    let temp_file = NamedTempFile::new().expect("failed to create temp file");
    let db_path = temp_file.path().to_path_buf();

    let db = Database::open(&db_path).expect("failed to open database");
    db.create_tables().expect("failed to create tables");
    seed_sample_data(&db).expect("failed to seed");

    (temp_file, db_path, db)
}

fn sample_match(team1_id: i64, team2_id: i64) -> Match {
    Match {
        id: None,
        tournament_id: TOURNAMENT,
        venue_id: VENUE,
        team1_id,
        team2_id,
        referee_id: None,
        scheduled_at: Utc.with_ymd_and_hms(2024, 3, 1, 15, 0, 0).unwrap(),
        status: MatchStatus::Scheduled,
        team1_score: None,
        team2_score: None,
        result: None,
    }
}

#[test]
fn test_seed_round_trip_counts_survive_reopen() {
    let (_temp, db_path, db) = seeded_db();
    drop(db);

    let db = Database::open(&db_path).expect("failed to reopen");
    let counts: HashMap<_, _> = db.table_counts().unwrap().into_iter().collect();

    assert_eq!(counts["clubs"], 1);
    assert_eq!(counts["sports"], 2);
    assert_eq!(counts["members"], 4);
    assert_eq!(counts["teams"], 1);
    assert_eq!(counts["team_players"], 2);
    assert_eq!(counts["tournaments"], 1);
    assert_eq!(counts["venues"], 1);
    assert_eq!(counts["matches"], 0);
}

#[test]
fn test_self_match_insert_is_rejected() {
    let (_temp, _path, db) = seeded_db();

    // The classic demonstration row: a team scheduled against itself
    let err = db
        .insert_match(&sample_match(FOOTBALL_TEAM, FOOTBALL_TEAM))
        .unwrap_err();

    assert!(matches!(err, DbError::CheckViolation(_)));
    assert_eq!(db.count("matches").unwrap(), 0);
}

#[test]
fn test_duplicate_club_name_rejected_across_connections() {
    let (_temp, db_path, db) = seeded_db();
    drop(db);

    let db = Database::open(&db_path).expect("failed to reopen");
    let mut duplicate = db.list_clubs().unwrap().remove(0);
    duplicate.id = None;
    duplicate.email = Some("second@riverside.example".to_string());

    let err = db.insert_club(&duplicate).unwrap_err();
    assert!(matches!(err, DbError::UniqueViolation(_)));
    assert_eq!(db.count("clubs").unwrap(), 1);
}

#[test]
fn test_duplicate_jersey_number_rejected() {
    let (_temp, _path, db) = seeded_db();

    // Jersey 9 on team 1 is already taken by the seeded forward
    let err = db
        .insert_team_player(&TeamPlayer {
            id: None,
            team_id: FOOTBALL_TEAM,
            member_id: 2,
            position: Some("Midfielder".to_string()),
            jersey_number: Some(9),
            joined_date: None,
            is_active: true,
        })
        .unwrap_err();

    assert!(matches!(err, DbError::UniqueViolation(_)));
    assert_eq!(db.count("team_players").unwrap(), 2);
}

#[test]
fn test_foreign_keys_enforced_after_reopen() {
    let (_temp, db_path, db) = seeded_db();
    drop(db);

    // FK enforcement is per-connection in SQLite; a fresh connection must
    // still reject dangling references.
    let db = Database::open(&db_path).expect("failed to reopen");
    let err = db
        .insert_member(&Member {
            id: None,
            club_id: 999,
            full_name: "Nobody Home".to_string(),
            role: MemberRole::Player,
            date_of_birth: None,
            gender: None,
            contact_number: None,
            join_date: None,
            is_active: true,
        })
        .unwrap_err();

    assert!(matches!(err, DbError::ForeignKeyViolation(_)));
}

#[test]
fn test_delete_club_sweeps_every_dependent_table() {
    let (_temp, _path, db) = seeded_db();

    // Give the cascade a match to sweep as well
    let second_team = db
        .insert_team(&clubdb::model::Team {
            id: None,
            sport_id: 1,
            name: "Riverside Reserves".to_string(),
            coach_id: None,
            created_date: None,
        })
        .unwrap();
    db.insert_match(&sample_match(FOOTBALL_TEAM, second_team))
        .unwrap();
    assert_eq!(db.count("matches").unwrap(), 1);

    db.delete_club(CLUB).unwrap();

    for (name, count) in db.table_counts().unwrap() {
        assert_eq!(count, 0, "table {} not emptied by club deletion", name);
    }
}

#[test]
fn test_delete_coach_and_referee_clear_references() {
    let (_temp, _path, db) = seeded_db();

    let second_team = db
        .insert_team(&clubdb::model::Team {
            id: None,
            sport_id: 1,
            name: "Riverside Reserves".to_string(),
            coach_id: None,
            created_date: None,
        })
        .unwrap();
    let mut m = sample_match(FOOTBALL_TEAM, second_team);
    m.referee_id = Some(REFEREE);
    let match_id = db.insert_match(&m).unwrap();

    db.delete_member(COACH).unwrap();
    db.delete_member(REFEREE).unwrap();

    let team = db.get_team(FOOTBALL_TEAM).unwrap().expect("team deleted");
    assert_eq!(team.coach_id, None);

    let stored = db.get_match(match_id).unwrap().expect("match deleted");
    assert_eq!(stored.referee_id, None);
}

#[test]
fn test_export_round_trip() {
    let (_temp, _path, db) = seeded_db();

    let dump = db.dump().unwrap();
    let json = serde_json::to_string(&dump).unwrap();
    let parsed: clubdb::db::DatabaseDump = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.clubs.len(), 1);
    assert_eq!(parsed.clubs[0].name, "Riverside Sports Club");
    assert_eq!(parsed.members.len(), 4);
    assert_eq!(parsed.team_players.len(), 2);
    assert_eq!(parsed.matches.len(), 0);
    assert_eq!(parsed.members, db.list_members().unwrap());
}

#[test]
fn test_double_booking_rejected_but_other_slots_open() {
    let (_temp, _path, db) = seeded_db();

    let second_team = db
        .insert_team(&clubdb::model::Team {
            id: None,
            sport_id: 1,
            name: "Riverside Reserves".to_string(),
            coach_id: None,
            created_date: None,
        })
        .unwrap();

    db.insert_match(&sample_match(FOOTBALL_TEAM, second_team))
        .unwrap();

    let err = db
        .insert_match(&sample_match(second_team, FOOTBALL_TEAM))
        .unwrap_err();
    assert!(matches!(err, DbError::UniqueViolation(_)));

    let mut later = sample_match(second_team, FOOTBALL_TEAM);
    later.scheduled_at = Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap();
    db.insert_match(&later).unwrap();

    assert_eq!(db.count("matches").unwrap(), 2);
}
