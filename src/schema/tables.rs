//! Table schema definitions for the club management domain

use super::types::*;

// =============================================================================
// Root entity
// =============================================================================

pub static CLUBS: TableSchema = TableSchema {
    name: "clubs",
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("name", ColumnType::Text),
        Column::new("address", ColumnType::Text),
        Column::new("contact_number", ColumnType::Text),
        Column::new("email", ColumnType::Text),
        Column::new("founded_year", ColumnType::Integer),
    ],
    foreign_keys: &[],
    indexes: &[Index::unique(&["name"])],
    checks: &[],
};

// =============================================================================
// Club-owned entities
// =============================================================================

pub static SPORTS: TableSchema = TableSchema {
    name: "sports",
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("club_id", ColumnType::Integer),
        Column::required("name", ColumnType::Text),
        Column::new("rules", ColumnType::Text),
    ],
    foreign_keys: &[ForeignKey::cascade("club_id", "clubs")],
    indexes: &[Index::unique(&["club_id", "name"])],
    checks: &[],
};

pub static MEMBERS: TableSchema = TableSchema {
    name: "members",
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("club_id", ColumnType::Integer),
        Column::required("full_name", ColumnType::Text),
        Column::required("role", ColumnType::Text),
        Column::new("date_of_birth", ColumnType::Date),
        Column::new("gender", ColumnType::Text),
        Column::new("contact_number", ColumnType::Text),
        Column::new("join_date", ColumnType::Date),
        Column::required("is_active", ColumnType::Boolean),
    ],
    foreign_keys: &[ForeignKey::cascade("club_id", "clubs")],
    indexes: &[Index::on(&["club_id"])],
    checks: &["role IN ('Player', 'Coach', 'Referee', 'Admin')"],
};

pub static VENUES: TableSchema = TableSchema {
    name: "venues",
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("club_id", ColumnType::Integer),
        Column::required("name", ColumnType::Text),
        Column::new("location", ColumnType::Text),
        Column::new("capacity", ColumnType::Integer),
        Column::new("venue_type", ColumnType::Text),
        Column::required("availability_status", ColumnType::Text),
    ],
    foreign_keys: &[ForeignKey::cascade("club_id", "clubs")],
    indexes: &[Index::unique(&["club_id", "name"])],
    checks: &["availability_status IN ('Available', 'Booked', 'Maintenance')"],
};

// =============================================================================
// Sport-owned entities
// =============================================================================

pub static TEAMS: TableSchema = TableSchema {
    name: "teams",
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("sport_id", ColumnType::Integer),
        Column::required("name", ColumnType::Text),
        Column::new("coach_id", ColumnType::Integer),
        Column::new("created_date", ColumnType::Date),
    ],
    foreign_keys: &[
        ForeignKey::cascade("sport_id", "sports"),
        ForeignKey::set_null("coach_id", "members"),
    ],
    indexes: &[Index::unique(&["sport_id", "name"]), Index::on(&["sport_id"])],
    checks: &[],
};

pub static TOURNAMENTS: TableSchema = TableSchema {
    name: "tournaments",
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("sport_id", ColumnType::Integer),
        Column::required("name", ColumnType::Text),
        Column::new("start_date", ColumnType::Date),
        Column::new("end_date", ColumnType::Date),
        Column::new("tournament_type", ColumnType::Text),
        Column::required("status", ColumnType::Text),
    ],
    foreign_keys: &[ForeignKey::cascade("sport_id", "sports")],
    indexes: &[],
    checks: &["status IN ('Planned', 'Ongoing', 'Completed', 'Cancelled')"],
};

// =============================================================================
// Roster and match entities
// =============================================================================

pub static TEAM_PLAYERS: TableSchema = TableSchema {
    name: "team_players",
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("team_id", ColumnType::Integer),
        Column::required("member_id", ColumnType::Integer),
        Column::new("position", ColumnType::Text),
        Column::new("jersey_number", ColumnType::Integer),
        Column::new("joined_date", ColumnType::Date),
        Column::required("is_active", ColumnType::Boolean),
    ],
    foreign_keys: &[
        ForeignKey::cascade("team_id", "teams"),
        ForeignKey::cascade("member_id", "members"),
    ],
    indexes: &[
        Index::unique(&["team_id", "jersey_number"]),
        Index::on(&["team_id"]),
    ],
    checks: &[],
};

pub static MATCHES: TableSchema = TableSchema {
    name: "matches",
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("tournament_id", ColumnType::Integer),
        Column::required("venue_id", ColumnType::Integer),
        Column::required("team1_id", ColumnType::Integer),
        Column::required("team2_id", ColumnType::Integer),
        Column::new("referee_id", ColumnType::Integer),
        Column::required("scheduled_at", ColumnType::DateTime),
        Column::required("status", ColumnType::Text),
        Column::new("team1_score", ColumnType::Integer),
        Column::new("team2_score", ColumnType::Integer),
        Column::new("result", ColumnType::Text),
    ],
    foreign_keys: &[
        ForeignKey::cascade("tournament_id", "tournaments"),
        ForeignKey::cascade("venue_id", "venues"),
        ForeignKey::cascade("team1_id", "teams"),
        ForeignKey::cascade("team2_id", "teams"),
        ForeignKey::set_null("referee_id", "members"),
    ],
    indexes: &[
        Index::unique(&["tournament_id", "venue_id", "scheduled_at"]),
        Index::on(&["tournament_id", "scheduled_at"]),
    ],
    checks: &[
        "team1_id <> team2_id",
        "status IN ('Scheduled', 'Finished', 'Postponed', 'Cancelled')",
    ],
};

// =============================================================================
// Schema Registry
// =============================================================================

/// All table schemas in dependency order
pub static ALL_TABLES: &[&TableSchema] = &[
    // Wave 1: root
    &CLUBS,
    // Wave 2: owned by clubs
    &SPORTS,
    &MEMBERS,
    &VENUES,
    // Wave 3: owned by sports
    &TEAMS,
    &TOURNAMENTS,
    // Wave 4: roster and matches
    &TEAM_PLAYERS,
    &MATCHES,
];

/// Get table schema by name
pub fn get_table(name: &str) -> Option<&'static TableSchema> {
    ALL_TABLES.iter().find(|t| t.name == name).copied()
}

/// Get all table names
pub fn table_names() -> Vec<&'static str> {
    ALL_TABLES.iter().map(|t| t.name).collect()
}
