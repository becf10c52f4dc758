//! Typed records for the eight club management entities.
//!
//! Enumerated role/status fields are closed sum types persisted as their
//! exact TEXT labels; the same label sets are enforced again by CHECK
//! constraints in the schema, so raw SQL cannot smuggle in other values.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! sql_text_enum {
    ($ty:ty) => {
        impl ToSql for $ty {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.as_str()))
            }
        }

        impl FromSql for $ty {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                value
                    .as_str()?
                    .parse::<$ty>()
                    .map_err(|e| FromSqlError::Other(e.into()))
            }
        }
    };
}

/// Role a member plays within a club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberRole {
    Player,
    Coach,
    Referee,
    Admin,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Player => "Player",
            MemberRole::Coach => "Coach",
            MemberRole::Referee => "Referee",
            MemberRole::Admin => "Admin",
        }
    }
}

impl FromStr for MemberRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Player" => Ok(MemberRole::Player),
            "Coach" => Ok(MemberRole::Coach),
            "Referee" => Ok(MemberRole::Referee),
            "Admin" => Ok(MemberRole::Admin),
            other => Err(format!("unknown member role: {}", other)),
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tournament lifecycle label. No transition rules are enforced: any value
/// in the set may follow any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TournamentStatus {
    #[default]
    Planned,
    Ongoing,
    Completed,
    Cancelled,
}

impl TournamentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentStatus::Planned => "Planned",
            TournamentStatus::Ongoing => "Ongoing",
            TournamentStatus::Completed => "Completed",
            TournamentStatus::Cancelled => "Cancelled",
        }
    }
}

impl FromStr for TournamentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Planned" => Ok(TournamentStatus::Planned),
            "Ongoing" => Ok(TournamentStatus::Ongoing),
            "Completed" => Ok(TournamentStatus::Completed),
            "Cancelled" => Ok(TournamentStatus::Cancelled),
            other => Err(format!("unknown tournament status: {}", other)),
        }
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Venue availability label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VenueAvailability {
    #[default]
    Available,
    Booked,
    Maintenance,
}

impl VenueAvailability {
    pub fn as_str(&self) -> &'static str {
        match self {
            VenueAvailability::Available => "Available",
            VenueAvailability::Booked => "Booked",
            VenueAvailability::Maintenance => "Maintenance",
        }
    }
}

impl FromStr for VenueAvailability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(VenueAvailability::Available),
            "Booked" => Ok(VenueAvailability::Booked),
            "Maintenance" => Ok(VenueAvailability::Maintenance),
            other => Err(format!("unknown venue availability: {}", other)),
        }
    }
}

impl fmt::Display for VenueAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Match lifecycle label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Finished,
    Postponed,
    Cancelled,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "Scheduled",
            MatchStatus::Finished => "Finished",
            MatchStatus::Postponed => "Postponed",
            MatchStatus::Cancelled => "Cancelled",
        }
    }
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Scheduled" => Ok(MatchStatus::Scheduled),
            "Finished" => Ok(MatchStatus::Finished),
            "Postponed" => Ok(MatchStatus::Postponed),
            "Cancelled" => Ok(MatchStatus::Cancelled),
            other => Err(format!("unknown match status: {}", other)),
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

sql_text_enum!(MemberRole);
sql_text_enum!(TournamentStatus);
sql_text_enum!(VenueAvailability);
sql_text_enum!(MatchStatus);

// =============================================================================
// Records
// =============================================================================
//
// `id` is None until the row has been inserted; the insert methods bind NULL
// and return the rowid SQLite assigns.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: Option<i64>,
    pub name: String,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub founded_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sport {
    pub id: Option<i64>,
    pub club_id: i64,
    pub name: String,
    pub rules: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: Option<i64>,
    pub club_id: i64,
    pub full_name: String,
    pub role: MemberRole,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub contact_number: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: Option<i64>,
    pub sport_id: i64,
    pub name: String,
    pub coach_id: Option<i64>,
    pub created_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPlayer {
    pub id: Option<i64>,
    pub team_id: i64,
    pub member_id: i64,
    pub position: Option<String>,
    pub jersey_number: Option<i32>,
    pub joined_date: Option<NaiveDate>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: Option<i64>,
    pub sport_id: i64,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub tournament_type: Option<String>,
    pub status: TournamentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: Option<i64>,
    pub club_id: i64,
    pub name: String,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub venue_type: Option<String>,
    pub availability_status: VenueAvailability,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: Option<i64>,
    pub tournament_id: i64,
    pub venue_id: i64,
    pub team1_id: i64,
    pub team2_id: i64,
    pub referee_id: Option<i64>,
    pub scheduled_at: DateTime<Utc>,
    pub status: MatchStatus,
    pub team1_score: Option<i32>,
    pub team2_score: Option<i32>,
    pub result: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [
            MemberRole::Player,
            MemberRole::Coach,
            MemberRole::Referee,
            MemberRole::Admin,
        ] {
            assert_eq!(role.as_str().parse::<MemberRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!("Manager".parse::<MemberRole>().is_err());
        assert!("player".parse::<MemberRole>().is_err());
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(
            "Ongoing".parse::<TournamentStatus>().unwrap(),
            TournamentStatus::Ongoing
        );
        assert_eq!(
            "Maintenance".parse::<VenueAvailability>().unwrap(),
            VenueAvailability::Maintenance
        );
        assert_eq!(
            "Postponed".parse::<MatchStatus>().unwrap(),
            MatchStatus::Postponed
        );
        assert!("Done".parse::<MatchStatus>().is_err());
    }

    #[test]
    fn test_status_defaults() {
        assert_eq!(TournamentStatus::default(), TournamentStatus::Planned);
        assert_eq!(VenueAvailability::default(), VenueAvailability::Available);
        assert_eq!(MatchStatus::default(), MatchStatus::Scheduled);
    }
}
