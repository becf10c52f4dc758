//! Sample dataset for a freshly initialized database.
//!
//! Rows are inserted one by one; a failing row rejects only itself, matching
//! the per-statement atomicity of the storage layer. The dataset seeds no
//! matches: the classic demonstration insert for the match table pairs a
//! team against itself and is kept as a negative test fixture instead.

use std::fmt;

use crate::db::{Database, DbError};
use crate::model::{
    Club, Member, MemberRole, Sport, Team, TeamPlayer, Tournament, TournamentStatus, Venue,
    VenueAvailability,
};

/// Per-table row counts after seeding.
#[derive(Debug)]
pub struct SeedSummary {
    pub counts: Vec<(&'static str, i64)>,
}

impl SeedSummary {
    pub fn total(&self) -> i64 {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, count) in &self.counts {
            writeln!(f, "  {:<14} {:>4} rows", name, count)?;
        }
        Ok(())
    }
}

fn date(s: &str) -> Result<chrono::NaiveDate, DbError> {
    s.parse()
        .map_err(|e| DbError::Decode(format!("bad seed date {}: {}", s, e)))
}

/// Insert the sample dataset and report per-table counts.
pub fn seed_sample_data(db: &Database) -> Result<SeedSummary, DbError> {
    let club_id = db.insert_club(&Club {
        id: None,
        name: "Riverside Sports Club".to_string(),
        address: Some("12 River Road, Northbridge".to_string()),
        contact_number: Some("+44 20 7946 0823".to_string()),
        email: Some("office@riverside.example".to_string()),
        founded_year: Some(1987),
    })?;

    let football_id = db.insert_sport(&Sport {
        id: None,
        club_id,
        name: "Football".to_string(),
        rules: Some("11-a-side, two 45-minute halves".to_string()),
    })?;
    db.insert_sport(&Sport {
        id: None,
        club_id,
        name: "Basketball".to_string(),
        rules: Some("5-a-side, four 10-minute quarters".to_string()),
    })?;

    let dana_id = db.insert_member(&Member {
        id: None,
        club_id,
        full_name: "Dana Hart".to_string(),
        role: MemberRole::Player,
        date_of_birth: Some(date("1995-04-12")?),
        gender: Some("F".to_string()),
        contact_number: Some("+44 20 7946 0101".to_string()),
        join_date: Some(date("2021-01-09")?),
        is_active: true,
    })?;
    let alex_id = db.insert_member(&Member {
        id: None,
        club_id,
        full_name: "Alex Reed".to_string(),
        role: MemberRole::Player,
        date_of_birth: Some(date("1998-11-30")?),
        gender: Some("M".to_string()),
        contact_number: Some("+44 20 7946 0102".to_string()),
        join_date: Some(date("2022-03-18")?),
        is_active: true,
    })?;
    let coach_id = db.insert_member(&Member {
        id: None,
        club_id,
        full_name: "Sam Okafor".to_string(),
        role: MemberRole::Coach,
        date_of_birth: Some(date("1979-02-21")?),
        gender: Some("M".to_string()),
        contact_number: Some("+44 20 7946 0103".to_string()),
        join_date: Some(date("2019-08-01")?),
        is_active: true,
    })?;
    db.insert_member(&Member {
        id: None,
        club_id,
        full_name: "Pat Lund".to_string(),
        role: MemberRole::Referee,
        date_of_birth: Some(date("1984-07-05")?),
        gender: None,
        contact_number: Some("+44 20 7946 0104".to_string()),
        join_date: Some(date("2020-05-23")?),
        is_active: true,
    })?;

    let team_id = db.insert_team(&Team {
        id: None,
        sport_id: football_id,
        name: "Riverside Rovers".to_string(),
        coach_id: Some(coach_id),
        created_date: Some(date("2021-02-01")?),
    })?;

    db.insert_team_player(&TeamPlayer {
        id: None,
        team_id,
        member_id: dana_id,
        position: Some("Forward".to_string()),
        jersey_number: Some(9),
        joined_date: Some(date("2021-02-01")?),
        is_active: true,
    })?;
    db.insert_team_player(&TeamPlayer {
        id: None,
        team_id,
        member_id: alex_id,
        position: Some("Goalkeeper".to_string()),
        jersey_number: Some(1),
        joined_date: Some(date("2022-04-02")?),
        is_active: true,
    })?;

    db.insert_tournament(&Tournament {
        id: None,
        sport_id: football_id,
        name: "Spring Cup".to_string(),
        start_date: Some(date("2024-03-01")?),
        end_date: Some(date("2024-04-15")?),
        tournament_type: Some("Knockout".to_string()),
        status: TournamentStatus::Planned,
    })?;

    db.insert_venue(&Venue {
        id: None,
        club_id,
        name: "Riverside Arena".to_string(),
        location: Some("Northbridge".to_string()),
        capacity: Some(4500),
        venue_type: Some("Outdoor".to_string()),
        availability_status: VenueAvailability::Available,
    })?;

    Ok(SeedSummary {
        counts: db.table_counts()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        let db = Database::open_in_memory().unwrap();
        db.create_tables().unwrap();

        let summary = seed_sample_data(&db).unwrap();
        let counts: std::collections::HashMap<_, _> = summary.counts.iter().copied().collect();

        assert_eq!(counts["clubs"], 1);
        assert_eq!(counts["sports"], 2);
        assert_eq!(counts["members"], 4);
        assert_eq!(counts["teams"], 1);
        assert_eq!(counts["team_players"], 2);
        assert_eq!(counts["tournaments"], 1);
        assert_eq!(counts["venues"], 1);
        assert_eq!(counts["matches"], 0);
        assert_eq!(summary.total(), 12);
    }

    #[test]
    fn test_seeded_team_has_its_coach() {
        let db = Database::open_in_memory().unwrap();
        db.create_tables().unwrap();
        seed_sample_data(&db).unwrap();

        let team = &db.list_teams().unwrap()[0];
        let coach = db.get_member(team.coach_id.unwrap()).unwrap().unwrap();
        assert_eq!(coach.role, MemberRole::Coach);
        assert_eq!(coach.full_name, "Sam Okafor");
    }

    #[test]
    fn test_seeding_twice_rejected_without_partial_rows() {
        let db = Database::open_in_memory().unwrap();
        db.create_tables().unwrap();
        seed_sample_data(&db).unwrap();

        // The duplicate club name fails the very first row
        let err = seed_sample_data(&db).unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation(_)));
        assert_eq!(db.count("clubs").unwrap(), 1);
        assert_eq!(db.count("members").unwrap(), 4);
    }
}
