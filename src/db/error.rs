use rusqlite::ffi;
use thiserror::Error;

/// Error taxonomy for row-level operations.
///
/// Constraint failures are classified by SQLite extended result code so
/// callers can react to the specific violated invariant. Every violation
/// rejects only the offending statement; the database is left unchanged.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to open database: {0}")]
    ConnectionFailed(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("schema setup failed: {0}")]
    SchemaSetup(String),

    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("check constraint violated: {0}")]
    CheckViolation(String),

    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("not-null constraint violated: {0}")]
    NotNullViolation(String),

    #[error("record not found: {0}")]
    NotFound(String),

    #[error("stored value could not be decoded: {0}")]
    Decode(String),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

impl DbError {
    /// Classify a rusqlite error into the violation taxonomy.
    pub fn classify(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(ffi_err, msg) = &err {
            let detail = msg.clone().unwrap_or_else(|| ffi_err.to_string());
            match ffi_err.extended_code {
                ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    return DbError::UniqueViolation(detail)
                }
                ffi::SQLITE_CONSTRAINT_CHECK => return DbError::CheckViolation(detail),
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                    return DbError::ForeignKeyViolation(detail)
                }
                ffi::SQLITE_CONSTRAINT_NOTNULL => return DbError::NotNullViolation(detail),
                _ => {}
            }
        }
        DbError::Sqlite(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_passthrough() {
        let err = rusqlite::Error::QueryReturnedNoRows;
        assert!(matches!(DbError::classify(err), DbError::Sqlite(_)));
    }
}
