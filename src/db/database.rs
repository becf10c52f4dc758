//! Row-level storage operations over rusqlite.
//!
//! Every operation is a single statement, so each insert/update/delete is
//! atomic with respect to its constraint checks. Constraint failures are
//! classified into [`DbError`] variants; the offending statement is rejected
//! and nothing is written.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ddl::{generate_create_table, generate_indexes};
use super::error::DbError;
use crate::model::{
    Club, Match, MatchStatus, Member, Sport, Team, TeamPlayer, Tournament, TournamentStatus,
    Venue, VenueAvailability,
};
use crate::schema::{DependencyResolver, ALL_TABLES};

/// All rows of every table, in ownership order.
#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseDump {
    pub clubs: Vec<Club>,
    pub sports: Vec<Sport>,
    pub members: Vec<Member>,
    pub venues: Vec<Venue>,
    pub teams: Vec<Team>,
    pub tournaments: Vec<Tournament>,
    pub team_players: Vec<TeamPlayer>,
    pub matches: Vec<Match>,
}

/// Database wrapper for SQLite operations.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create a database at the given path.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DbError::Io(e.to_string()))?;
        }

        let conn =
            Connection::open(path).map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        Self::configure(conn)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        Self::configure(conn)
    }

    fn configure(conn: Connection) -> Result<Self, DbError> {
        // FK enforcement is off by default in SQLite; the cascade and
        // clear-reference semantics depend on it.
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        Ok(Self { conn })
    }

    /// Create all tables and indexes, parents before children.
    pub fn create_tables(&self) -> Result<(), DbError> {
        let resolver = DependencyResolver::new();
        let tables = resolver.creation_order().map_err(DbError::SchemaSetup)?;

        for schema in tables {
            self.conn
                .execute(&generate_create_table(schema), [])
                .map_err(DbError::classify)?;

            for index_sql in generate_indexes(schema) {
                self.conn
                    .execute(&index_sql, [])
                    .map_err(DbError::classify)?;
            }
        }

        Ok(())
    }

    /// Get a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Row count for a single table.
    pub fn count(&self, table: &str) -> Result<i64, DbError> {
        let schema = crate::schema::get_table(table)
            .ok_or_else(|| DbError::NotFound(format!("table {}", table)))?;
        let sql = format!("SELECT COUNT(*) FROM {}", schema.name);
        self.conn
            .query_row(&sql, [], |row| row.get(0))
            .map_err(DbError::classify)
    }

    /// Row counts for every table, in registry order.
    pub fn table_counts(&self) -> Result<Vec<(&'static str, i64)>, DbError> {
        ALL_TABLES
            .iter()
            .map(|schema| Ok((schema.name, self.count(schema.name)?)))
            .collect()
    }

    /// All rows of every table.
    pub fn dump(&self) -> Result<DatabaseDump, DbError> {
        Ok(DatabaseDump {
            clubs: self.list_clubs()?,
            sports: self.list_sports()?,
            members: self.list_members()?,
            venues: self.list_venues()?,
            teams: self.list_teams()?,
            tournaments: self.list_tournaments()?,
            team_players: self.list_team_players()?,
            matches: self.list_matches()?,
        })
    }

    // ========== Clubs ==========

    pub fn insert_club(&self, club: &Club) -> Result<i64, DbError> {
        self.conn
            .execute(
                "INSERT INTO clubs (id, name, address, contact_number, email, founded_year)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    club.id,
                    club.name,
                    club.address,
                    club.contact_number,
                    club.email,
                    club.founded_year,
                ],
            )
            .map_err(DbError::classify)?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_club(&self, id: i64) -> Result<Option<Club>, DbError> {
        self.query_optional(
            "SELECT id, name, address, contact_number, email, founded_year
             FROM clubs WHERE id = ?1",
            id,
            row_to_club,
        )
    }

    pub fn list_clubs(&self) -> Result<Vec<Club>, DbError> {
        self.query_all(
            "SELECT id, name, address, contact_number, email, founded_year
             FROM clubs ORDER BY id",
            row_to_club,
        )
    }

    pub fn update_club(&self, id: i64, club: &Club) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute(
                "UPDATE clubs SET name = ?1, address = ?2, contact_number = ?3,
                 email = ?4, founded_year = ?5 WHERE id = ?6",
                params![
                    club.name,
                    club.address,
                    club.contact_number,
                    club.email,
                    club.founded_year,
                    id,
                ],
            )
            .map_err(DbError::classify)?;

        require_row(rows, "club", id)
    }

    /// Delete a club; its sports, members, and venues go with it, and
    /// transitively every team, roster entry, tournament, and match.
    pub fn delete_club(&self, id: i64) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute("DELETE FROM clubs WHERE id = ?1", params![id])
            .map_err(DbError::classify)?;

        require_row(rows, "club", id)
    }

    // ========== Sports ==========

    pub fn insert_sport(&self, sport: &Sport) -> Result<i64, DbError> {
        self.conn
            .execute(
                "INSERT INTO sports (id, club_id, name, rules) VALUES (?1, ?2, ?3, ?4)",
                params![sport.id, sport.club_id, sport.name, sport.rules],
            )
            .map_err(DbError::classify)?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_sport(&self, id: i64) -> Result<Option<Sport>, DbError> {
        self.query_optional(
            "SELECT id, club_id, name, rules FROM sports WHERE id = ?1",
            id,
            row_to_sport,
        )
    }

    pub fn list_sports(&self) -> Result<Vec<Sport>, DbError> {
        self.query_all(
            "SELECT id, club_id, name, rules FROM sports ORDER BY id",
            row_to_sport,
        )
    }

    pub fn update_sport(&self, id: i64, sport: &Sport) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute(
                "UPDATE sports SET club_id = ?1, name = ?2, rules = ?3 WHERE id = ?4",
                params![sport.club_id, sport.name, sport.rules, id],
            )
            .map_err(DbError::classify)?;

        require_row(rows, "sport", id)
    }

    pub fn delete_sport(&self, id: i64) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute("DELETE FROM sports WHERE id = ?1", params![id])
            .map_err(DbError::classify)?;

        require_row(rows, "sport", id)
    }

    // ========== Members ==========

    pub fn insert_member(&self, member: &Member) -> Result<i64, DbError> {
        self.conn
            .execute(
                "INSERT INTO members (id, club_id, full_name, role, date_of_birth,
                 gender, contact_number, join_date, is_active)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    member.id,
                    member.club_id,
                    member.full_name,
                    member.role,
                    member.date_of_birth,
                    member.gender,
                    member.contact_number,
                    member.join_date,
                    member.is_active,
                ],
            )
            .map_err(DbError::classify)?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_member(&self, id: i64) -> Result<Option<Member>, DbError> {
        self.query_optional(
            "SELECT id, club_id, full_name, role, date_of_birth, gender,
             contact_number, join_date, is_active FROM members WHERE id = ?1",
            id,
            row_to_member,
        )
    }

    pub fn list_members(&self) -> Result<Vec<Member>, DbError> {
        self.query_all(
            "SELECT id, club_id, full_name, role, date_of_birth, gender,
             contact_number, join_date, is_active FROM members ORDER BY id",
            row_to_member,
        )
    }

    pub fn update_member(&self, id: i64, member: &Member) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute(
                "UPDATE members SET club_id = ?1, full_name = ?2, role = ?3,
                 date_of_birth = ?4, gender = ?5, contact_number = ?6,
                 join_date = ?7, is_active = ?8 WHERE id = ?9",
                params![
                    member.club_id,
                    member.full_name,
                    member.role,
                    member.date_of_birth,
                    member.gender,
                    member.contact_number,
                    member.join_date,
                    member.is_active,
                    id,
                ],
            )
            .map_err(DbError::classify)?;

        require_row(rows, "member", id)
    }

    /// Delete a member unconditionally. Teams coached by the member and
    /// matches refereed by the member keep their rows with the reference
    /// cleared; the member's roster entries are removed.
    pub fn delete_member(&self, id: i64) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute("DELETE FROM members WHERE id = ?1", params![id])
            .map_err(DbError::classify)?;

        require_row(rows, "member", id)
    }

    // ========== Venues ==========

    pub fn insert_venue(&self, venue: &Venue) -> Result<i64, DbError> {
        self.conn
            .execute(
                "INSERT INTO venues (id, club_id, name, location, capacity,
                 venue_type, availability_status)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    venue.id,
                    venue.club_id,
                    venue.name,
                    venue.location,
                    venue.capacity,
                    venue.venue_type,
                    venue.availability_status,
                ],
            )
            .map_err(DbError::classify)?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_venue(&self, id: i64) -> Result<Option<Venue>, DbError> {
        self.query_optional(
            "SELECT id, club_id, name, location, capacity, venue_type,
             availability_status FROM venues WHERE id = ?1",
            id,
            row_to_venue,
        )
    }

    pub fn list_venues(&self) -> Result<Vec<Venue>, DbError> {
        self.query_all(
            "SELECT id, club_id, name, location, capacity, venue_type,
             availability_status FROM venues ORDER BY id",
            row_to_venue,
        )
    }

    pub fn update_venue(&self, id: i64, venue: &Venue) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute(
                "UPDATE venues SET club_id = ?1, name = ?2, location = ?3,
                 capacity = ?4, venue_type = ?5, availability_status = ?6
                 WHERE id = ?7",
                params![
                    venue.club_id,
                    venue.name,
                    venue.location,
                    venue.capacity,
                    venue.venue_type,
                    venue.availability_status,
                    id,
                ],
            )
            .map_err(DbError::classify)?;

        require_row(rows, "venue", id)
    }

    pub fn set_venue_availability(
        &self,
        id: i64,
        availability: VenueAvailability,
    ) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute(
                "UPDATE venues SET availability_status = ?1 WHERE id = ?2",
                params![availability, id],
            )
            .map_err(DbError::classify)?;

        require_row(rows, "venue", id)
    }

    pub fn delete_venue(&self, id: i64) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute("DELETE FROM venues WHERE id = ?1", params![id])
            .map_err(DbError::classify)?;

        require_row(rows, "venue", id)
    }

    // ========== Teams ==========

    pub fn insert_team(&self, team: &Team) -> Result<i64, DbError> {
        self.conn
            .execute(
                "INSERT INTO teams (id, sport_id, name, coach_id, created_date)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![team.id, team.sport_id, team.name, team.coach_id, team.created_date],
            )
            .map_err(DbError::classify)?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_team(&self, id: i64) -> Result<Option<Team>, DbError> {
        self.query_optional(
            "SELECT id, sport_id, name, coach_id, created_date FROM teams WHERE id = ?1",
            id,
            row_to_team,
        )
    }

    pub fn list_teams(&self) -> Result<Vec<Team>, DbError> {
        self.query_all(
            "SELECT id, sport_id, name, coach_id, created_date FROM teams ORDER BY id",
            row_to_team,
        )
    }

    pub fn update_team(&self, id: i64, team: &Team) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute(
                "UPDATE teams SET sport_id = ?1, name = ?2, coach_id = ?3,
                 created_date = ?4 WHERE id = ?5",
                params![team.sport_id, team.name, team.coach_id, team.created_date, id],
            )
            .map_err(DbError::classify)?;

        require_row(rows, "team", id)
    }

    /// Assign or clear a team's coach.
    pub fn set_team_coach(&self, team_id: i64, coach_id: Option<i64>) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute(
                "UPDATE teams SET coach_id = ?1 WHERE id = ?2",
                params![coach_id, team_id],
            )
            .map_err(DbError::classify)?;

        require_row(rows, "team", team_id)
    }

    pub fn delete_team(&self, id: i64) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute("DELETE FROM teams WHERE id = ?1", params![id])
            .map_err(DbError::classify)?;

        require_row(rows, "team", id)
    }

    // ========== Team players ==========

    pub fn insert_team_player(&self, player: &TeamPlayer) -> Result<i64, DbError> {
        self.conn
            .execute(
                "INSERT INTO team_players (id, team_id, member_id, position,
                 jersey_number, joined_date, is_active)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    player.id,
                    player.team_id,
                    player.member_id,
                    player.position,
                    player.jersey_number,
                    player.joined_date,
                    player.is_active,
                ],
            )
            .map_err(DbError::classify)?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_team_player(&self, id: i64) -> Result<Option<TeamPlayer>, DbError> {
        self.query_optional(
            "SELECT id, team_id, member_id, position, jersey_number, joined_date,
             is_active FROM team_players WHERE id = ?1",
            id,
            row_to_team_player,
        )
    }

    pub fn list_team_players(&self) -> Result<Vec<TeamPlayer>, DbError> {
        self.query_all(
            "SELECT id, team_id, member_id, position, jersey_number, joined_date,
             is_active FROM team_players ORDER BY id",
            row_to_team_player,
        )
    }

    pub fn update_team_player(&self, id: i64, player: &TeamPlayer) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute(
                "UPDATE team_players SET team_id = ?1, member_id = ?2, position = ?3,
                 jersey_number = ?4, joined_date = ?5, is_active = ?6 WHERE id = ?7",
                params![
                    player.team_id,
                    player.member_id,
                    player.position,
                    player.jersey_number,
                    player.joined_date,
                    player.is_active,
                    id,
                ],
            )
            .map_err(DbError::classify)?;

        require_row(rows, "team player", id)
    }

    pub fn delete_team_player(&self, id: i64) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute("DELETE FROM team_players WHERE id = ?1", params![id])
            .map_err(DbError::classify)?;

        require_row(rows, "team player", id)
    }

    // ========== Tournaments ==========

    pub fn insert_tournament(&self, tournament: &Tournament) -> Result<i64, DbError> {
        self.conn
            .execute(
                "INSERT INTO tournaments (id, sport_id, name, start_date, end_date,
                 tournament_type, status)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    tournament.id,
                    tournament.sport_id,
                    tournament.name,
                    tournament.start_date,
                    tournament.end_date,
                    tournament.tournament_type,
                    tournament.status,
                ],
            )
            .map_err(DbError::classify)?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_tournament(&self, id: i64) -> Result<Option<Tournament>, DbError> {
        self.query_optional(
            "SELECT id, sport_id, name, start_date, end_date, tournament_type,
             status FROM tournaments WHERE id = ?1",
            id,
            row_to_tournament,
        )
    }

    pub fn list_tournaments(&self) -> Result<Vec<Tournament>, DbError> {
        self.query_all(
            "SELECT id, sport_id, name, start_date, end_date, tournament_type,
             status FROM tournaments ORDER BY id",
            row_to_tournament,
        )
    }

    pub fn update_tournament(&self, id: i64, tournament: &Tournament) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute(
                "UPDATE tournaments SET sport_id = ?1, name = ?2, start_date = ?3,
                 end_date = ?4, tournament_type = ?5, status = ?6 WHERE id = ?7",
                params![
                    tournament.sport_id,
                    tournament.name,
                    tournament.start_date,
                    tournament.end_date,
                    tournament.tournament_type,
                    tournament.status,
                    id,
                ],
            )
            .map_err(DbError::classify)?;

        require_row(rows, "tournament", id)
    }

    /// Any status label may follow any other; there are no transition rules.
    pub fn set_tournament_status(&self, id: i64, status: TournamentStatus) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute(
                "UPDATE tournaments SET status = ?1 WHERE id = ?2",
                params![status, id],
            )
            .map_err(DbError::classify)?;

        require_row(rows, "tournament", id)
    }

    pub fn delete_tournament(&self, id: i64) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute("DELETE FROM tournaments WHERE id = ?1", params![id])
            .map_err(DbError::classify)?;

        require_row(rows, "tournament", id)
    }

    // ========== Matches ==========

    pub fn insert_match(&self, m: &Match) -> Result<i64, DbError> {
        self.conn
            .execute(
                "INSERT INTO matches (id, tournament_id, venue_id, team1_id, team2_id,
                 referee_id, scheduled_at, status, team1_score, team2_score, result)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                params![
                    m.id,
                    m.tournament_id,
                    m.venue_id,
                    m.team1_id,
                    m.team2_id,
                    m.referee_id,
                    m.scheduled_at,
                    m.status,
                    m.team1_score,
                    m.team2_score,
                    m.result,
                ],
            )
            .map_err(DbError::classify)?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_match(&self, id: i64) -> Result<Option<Match>, DbError> {
        self.query_optional(
            "SELECT id, tournament_id, venue_id, team1_id, team2_id, referee_id,
             scheduled_at, status, team1_score, team2_score, result
             FROM matches WHERE id = ?1",
            id,
            row_to_match,
        )
    }

    pub fn list_matches(&self) -> Result<Vec<Match>, DbError> {
        self.query_all(
            "SELECT id, tournament_id, venue_id, team1_id, team2_id, referee_id,
             scheduled_at, status, team1_score, team2_score, result
             FROM matches ORDER BY id",
            row_to_match,
        )
    }

    pub fn update_match(&self, id: i64, m: &Match) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute(
                "UPDATE matches SET tournament_id = ?1, venue_id = ?2, team1_id = ?3,
                 team2_id = ?4, referee_id = ?5, scheduled_at = ?6, status = ?7,
                 team1_score = ?8, team2_score = ?9, result = ?10 WHERE id = ?11",
                params![
                    m.tournament_id,
                    m.venue_id,
                    m.team1_id,
                    m.team2_id,
                    m.referee_id,
                    m.scheduled_at,
                    m.status,
                    m.team1_score,
                    m.team2_score,
                    m.result,
                    id,
                ],
            )
            .map_err(DbError::classify)?;

        require_row(rows, "match", id)
    }

    /// Record a final score and mark the match finished.
    pub fn record_match_result(
        &self,
        id: i64,
        team1_score: i32,
        team2_score: i32,
        result: &str,
    ) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute(
                "UPDATE matches SET team1_score = ?1, team2_score = ?2, result = ?3,
                 status = ?4 WHERE id = ?5",
                params![team1_score, team2_score, result, MatchStatus::Finished, id],
            )
            .map_err(DbError::classify)?;

        require_row(rows, "match", id)
    }

    pub fn delete_match(&self, id: i64) -> Result<(), DbError> {
        let rows = self
            .conn
            .execute("DELETE FROM matches WHERE id = ?1", params![id])
            .map_err(DbError::classify)?;

        require_row(rows, "match", id)
    }

    // ========== Query helpers ==========

    fn query_optional<T>(
        &self,
        sql: &str,
        id: i64,
        map: fn(&Row) -> rusqlite::Result<T>,
    ) -> Result<Option<T>, DbError> {
        match self.conn.query_row(sql, params![id], map) {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DbError::classify(e)),
        }
    }

    fn query_all<T>(
        &self,
        sql: &str,
        map: fn(&Row) -> rusqlite::Result<T>,
    ) -> Result<Vec<T>, DbError> {
        let mut stmt = self.conn.prepare(sql).map_err(DbError::classify)?;
        let rows = stmt
            .query_map([], map)
            .map_err(DbError::classify)?
            .collect::<rusqlite::Result<Vec<T>>>()
            .map_err(DbError::classify)?;
        Ok(rows)
    }
}

// ========== Row mapping ==========

fn row_to_club(row: &Row) -> rusqlite::Result<Club> {
    Ok(Club {
        id: row.get(0)?,
        name: row.get(1)?,
        address: row.get(2)?,
        contact_number: row.get(3)?,
        email: row.get(4)?,
        founded_year: row.get(5)?,
    })
}

fn row_to_sport(row: &Row) -> rusqlite::Result<Sport> {
    Ok(Sport {
        id: row.get(0)?,
        club_id: row.get(1)?,
        name: row.get(2)?,
        rules: row.get(3)?,
    })
}

fn row_to_member(row: &Row) -> rusqlite::Result<Member> {
    Ok(Member {
        id: row.get(0)?,
        club_id: row.get(1)?,
        full_name: row.get(2)?,
        role: row.get(3)?,
        date_of_birth: row.get(4)?,
        gender: row.get(5)?,
        contact_number: row.get(6)?,
        join_date: row.get(7)?,
        is_active: row.get(8)?,
    })
}

fn row_to_venue(row: &Row) -> rusqlite::Result<Venue> {
    Ok(Venue {
        id: row.get(0)?,
        club_id: row.get(1)?,
        name: row.get(2)?,
        location: row.get(3)?,
        capacity: row.get(4)?,
        venue_type: row.get(5)?,
        availability_status: row.get(6)?,
    })
}

fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
    Ok(Team {
        id: row.get(0)?,
        sport_id: row.get(1)?,
        name: row.get(2)?,
        coach_id: row.get(3)?,
        created_date: row.get(4)?,
    })
}

fn row_to_team_player(row: &Row) -> rusqlite::Result<TeamPlayer> {
    Ok(TeamPlayer {
        id: row.get(0)?,
        team_id: row.get(1)?,
        member_id: row.get(2)?,
        position: row.get(3)?,
        jersey_number: row.get(4)?,
        joined_date: row.get(5)?,
        is_active: row.get(6)?,
    })
}

fn row_to_tournament(row: &Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        id: row.get(0)?,
        sport_id: row.get(1)?,
        name: row.get(2)?,
        start_date: row.get(3)?,
        end_date: row.get(4)?,
        tournament_type: row.get(5)?,
        status: row.get(6)?,
    })
}

fn row_to_match(row: &Row) -> rusqlite::Result<Match> {
    let scheduled_at: DateTime<Utc> = row.get(6)?;
    Ok(Match {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        venue_id: row.get(2)?,
        team1_id: row.get(3)?,
        team2_id: row.get(4)?,
        referee_id: row.get(5)?,
        scheduled_at,
        status: row.get(7)?,
        team1_score: row.get(8)?,
        team2_score: row.get(9)?,
        result: row.get(10)?,
    })
}

fn require_row(rows: usize, entity: &str, id: i64) -> Result<(), DbError> {
    if rows == 0 {
        return Err(DbError::NotFound(format!("{} {}", entity, id)));
    }
    Ok(())
}
