use anyhow::{bail, Context, Result};
use clubdb::{
    cli::{default_db_path, Cli, Commands},
    db::{generate_create_table, generate_indexes, Database},
    schema::{table_names, DependencyResolver},
    seed::seed_sample_data,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Init { database, force } => {
            let db_path = resolve_db_path(database)?;
            create_database(&db_path, force)?;
            println!("Created {:?} with {} tables", db_path, table_names().len());
        }

        Commands::Seed { database, force } => {
            let start = Instant::now();

            let db_path = resolve_db_path(database)?;
            let db = create_database(&db_path, force)?;
            let summary = seed_sample_data(&db).context("Failed to seed sample data")?;

            println!("Seeded {:?}:", db_path);
            print!("{}", summary);
            println!(
                "{} rows in {:.2}s",
                summary.total(),
                start.elapsed().as_secs_f64()
            );
        }

        Commands::Tables => {
            println!("Tables:\n");
            for name in table_names() {
                println!("  {}", name);
            }
        }

        Commands::Ddl => {
            let resolver = DependencyResolver::new();
            let tables = resolver
                .creation_order()
                .map_err(|e| anyhow::anyhow!(e))?;

            for schema in tables {
                println!("{};", generate_create_table(schema));
                for index_sql in generate_indexes(schema) {
                    println!("{};", index_sql);
                }
                println!();
            }
        }

        Commands::Export { database } => {
            let db_path = resolve_db_path(database)?;
            if !db_path.exists() {
                bail!("No database at {:?} (run `clubdb seed` first)", db_path);
            }

            let db = Database::open(&db_path)?;
            let dump = db.dump().context("Failed to read tables")?;
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
    }

    Ok(())
}

fn resolve_db_path(database: Option<PathBuf>) -> Result<PathBuf> {
    match database {
        Some(path) => Ok(path),
        None => default_db_path().context("Could not determine a data directory"),
    }
}

fn create_database(db_path: &Path, force: bool) -> Result<Database> {
    if db_path.exists() {
        if !force {
            bail!("{:?} already exists (use --force to replace it)", db_path);
        }
        std::fs::remove_file(db_path).context("Failed to remove existing database")?;
    }

    let db = Database::open(db_path)?;
    db.create_tables().context("Failed to create tables")?;
    Ok(db)
}
