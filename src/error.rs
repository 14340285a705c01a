//! # Error Handling
//!
//! Seeding has a single failure mode, "seed creation failed". [`SeedError`]
//! records what caused it so the command can report something useful before
//! the transaction is rolled back.

use sea_orm::{DbErr, RuntimeErr, SqlErr};
use thiserror::Error;

const PG_UNIQUE: &str = "23505";
const SQLITE_DUPLICATE_CODES: &[&str] = &["1555", "2067"];

/// Error raised when the sample data could not be created.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A record could not be written, or the transaction could not be
    /// started or committed.
    #[error("database error while creating {record}: {source}")]
    Database {
        record: &'static str,
        #[source]
        source: DbErr,
    },
    /// The sample password could not be hashed.
    #[error("failed to hash password for {email}: {message}")]
    PasswordHash { email: String, message: String },
    /// A literal calendar date was rejected.
    #[error("invalid sample date {year}-01-01")]
    InvalidDate { year: i32 },
}

impl SeedError {
    /// Wraps a database error raised while writing `record`.
    pub fn database(record: &'static str, source: DbErr) -> Self {
        Self::Database { record, source }
    }

    /// Returns true when the failure is a uniqueness violation, which is what a
    /// second run against an already seeded database produces.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Database { source, .. } => is_unique_violation(source),
            _ => false,
        }
    }
}

/// Detects unique-constraint violations across the supported backends.
pub fn is_unique_violation(error: &DbErr) -> bool {
    if matches!(error.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let runtime_err = match error {
        DbErr::Query(RuntimeErr::SqlxError(sqlx_err))
        | DbErr::Exec(RuntimeErr::SqlxError(sqlx_err)) => sqlx_err,
        _ => return false,
    };

    let Some(db_error) = runtime_err.as_database_error() else {
        return false;
    };

    if db_error.is_unique_violation() {
        return true;
    }

    db_error.code().is_some_and(|code| {
        let code = code.as_ref();
        code == PG_UNIQUE || SQLITE_DUPLICATE_CODES.contains(&code)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_is_not_a_unique_violation() {
        let err = SeedError::database("user", DbErr::RecordNotFound("users".to_string()));
        assert!(!err.is_unique_violation());
    }

    #[test]
    fn non_database_errors_are_not_unique_violations() {
        let err = SeedError::InvalidDate { year: 0 };
        assert!(!err.is_unique_violation());
    }

    #[test]
    fn display_names_the_failing_record() {
        let err = SeedError::database("trip pool", DbErr::Custom("boom".to_string()));
        let message = err.to_string();
        assert!(message.contains("trip pool"));
        assert!(message.contains("boom"));
    }
}
