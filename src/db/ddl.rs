use crate::schema::{ColumnType, OnDelete, TableSchema};

/// Generate CREATE TABLE SQL for a table schema
pub fn generate_create_table(schema: &TableSchema) -> String {
    let mut sql = format!("CREATE TABLE {} (\n", schema.name);
    let mut lines = Vec::new();

    for col in schema.columns {
        let sql_type = match col.col_type {
            ColumnType::Integer => "INTEGER",
            ColumnType::Text => "TEXT",
            ColumnType::Boolean => "INTEGER",
            ColumnType::Date => "TEXT",
            ColumnType::DateTime => "TEXT",
        };

        let null_constraint = if !col.nullable { " NOT NULL" } else { "" };
        let pk = if col.name == "id" { " PRIMARY KEY" } else { "" };

        lines.push(format!(
            "    {} {}{}{}",
            col.name, sql_type, pk, null_constraint
        ));
    }

    for check in schema.checks {
        lines.push(format!("    CHECK ({})", check));
    }

    for fk in schema.foreign_keys {
        let action = match fk.on_delete {
            OnDelete::Cascade => "CASCADE",
            OnDelete::SetNull => "SET NULL",
        };
        lines.push(format!(
            "    FOREIGN KEY ({}) REFERENCES {}({}) ON DELETE {}",
            fk.column, fk.references_table, fk.references_column, action
        ));
    }

    sql.push_str(&lines.join(",\n"));
    sql.push_str("\n)");

    sql
}

/// Generate CREATE INDEX statements for the schema's explicit indexes
pub fn generate_indexes(schema: &TableSchema) -> Vec<String> {
    schema
        .indexes
        .iter()
        .map(|index| {
            let unique = if index.unique { "UNIQUE " } else { "" };
            format!(
                "CREATE {}INDEX idx_{}_{} ON {}({})",
                unique,
                schema.name,
                index.columns.join("_"),
                schema.name,
                index.columns.join(", ")
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tables::{MATCHES, MEMBERS, TEAMS, TEAM_PLAYERS};

    #[test]
    fn test_generate_create_table_matches() {
        let sql = generate_create_table(&MATCHES);
        assert!(sql.contains("CREATE TABLE matches"));
        assert!(sql.contains("id INTEGER PRIMARY KEY"));
        assert!(sql.contains("scheduled_at TEXT NOT NULL"));
        assert!(sql.contains("CHECK (team1_id <> team2_id)"));
        assert!(sql.contains(
            "FOREIGN KEY (tournament_id) REFERENCES tournaments(id) ON DELETE CASCADE"
        ));
        assert!(sql.contains("FOREIGN KEY (referee_id) REFERENCES members(id) ON DELETE SET NULL"));
    }

    #[test]
    fn test_generate_create_table_members() {
        let sql = generate_create_table(&MEMBERS);
        assert!(sql.contains("role TEXT NOT NULL"));
        assert!(sql.contains("CHECK (role IN ('Player', 'Coach', 'Referee', 'Admin'))"));
        assert!(sql.contains("FOREIGN KEY (club_id) REFERENCES clubs(id) ON DELETE CASCADE"));
    }

    #[test]
    fn test_generate_indexes() {
        let team_indexes = generate_indexes(&TEAMS);
        assert!(team_indexes
            .iter()
            .any(|i| i.contains("CREATE UNIQUE INDEX idx_teams_sport_id_name")));
        assert!(team_indexes
            .iter()
            .any(|i| i == "CREATE INDEX idx_teams_sport_id ON teams(sport_id)"));

        let roster_indexes = generate_indexes(&TEAM_PLAYERS);
        assert!(roster_indexes.iter().any(|i| {
            i.starts_with("CREATE UNIQUE INDEX idx_team_players_team_id_jersey_number")
                && i.ends_with("ON team_players(team_id, jersey_number)")
        }));

        let match_indexes = generate_indexes(&MATCHES);
        assert!(match_indexes
            .iter()
            .any(|i| i.contains("matches(tournament_id, scheduled_at)")));
    }
}
