pub mod database;
pub mod ddl;
pub mod error;

pub use database::{Database, DatabaseDump};
pub use ddl::{generate_create_table, generate_indexes};
pub use error::DbError;
