use super::tables::{get_table, ALL_TABLES};
use super::types::TableSchema;
use std::collections::{HashMap, HashSet};

/// Resolves the FK dependency graph between tables
pub struct DependencyResolver {
    /// Map of table name -> tables it depends on
    deps: HashMap<&'static str, HashSet<&'static str>>,
}

impl DependencyResolver {
    pub fn new() -> Self {
        let mut deps: HashMap<&'static str, HashSet<&'static str>> = HashMap::new();

        for table in ALL_TABLES {
            deps.insert(table.name, table.dependencies());
        }

        Self { deps }
    }

    /// Return all tables ordered so that every FK parent precedes its children
    pub fn creation_order(&self) -> Result<Vec<&'static TableSchema>, String> {
        let mut result = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut temp_visited: HashSet<&str> = HashSet::new();

        for table in ALL_TABLES {
            if !visited.contains(table.name) {
                self.visit(table.name, &mut visited, &mut temp_visited, &mut result)?;
            }
        }

        Ok(result)
    }

    fn visit(
        &self,
        name: &'static str,
        visited: &mut HashSet<&'static str>,
        temp_visited: &mut HashSet<&'static str>,
        result: &mut Vec<&'static TableSchema>,
    ) -> Result<(), String> {
        if temp_visited.contains(name) {
            return Err(format!("Circular dependency detected at: {}", name));
        }
        if visited.contains(name) {
            return Ok(());
        }

        temp_visited.insert(name);

        if let Some(deps) = self.deps.get(name) {
            for &dep in deps {
                // Skip self-references
                if dep != name {
                    self.visit(dep, visited, temp_visited, result)?;
                }
            }
        }

        temp_visited.remove(name);
        visited.insert(name);

        if let Some(table) = get_table(name) {
            result.push(table);
        }

        Ok(())
    }
}

impl Default for DependencyResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(names: &[&str], name: &str) -> usize {
        names.iter().position(|&n| n == name).unwrap()
    }

    #[test]
    fn test_creation_order_covers_all_tables() {
        let resolver = DependencyResolver::new();
        let tables = resolver.creation_order().unwrap();
        assert_eq!(tables.len(), ALL_TABLES.len());
    }

    #[test]
    fn test_parents_precede_children() {
        let resolver = DependencyResolver::new();
        let tables = resolver.creation_order().unwrap();
        let names: Vec<_> = tables.iter().map(|t| t.name).collect();

        assert!(position(&names, "clubs") < position(&names, "sports"));
        assert!(position(&names, "clubs") < position(&names, "members"));
        assert!(position(&names, "clubs") < position(&names, "venues"));
        assert!(position(&names, "sports") < position(&names, "teams"));
        assert!(position(&names, "sports") < position(&names, "tournaments"));
        assert!(position(&names, "members") < position(&names, "teams"));
        assert!(position(&names, "teams") < position(&names, "team_players"));
        assert!(position(&names, "tournaments") < position(&names, "matches"));
        assert!(position(&names, "venues") < position(&names, "matches"));
        assert!(position(&names, "teams") < position(&names, "matches"));
    }
}
