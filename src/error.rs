//! Errors raised while building or filling the store.
/**
 *     /\
 *    ( /   @ @    ()
 *     \  __| |__  /
 *      -/   "   \-
 *     /-|       |-\
 *    / /-\     /-\ \
 *     / /-`---'-\ \
 *      /         \ CRABCAVE
 *
 *   error.rs - the crate error type
 *
 */

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::fmt;
use thiserror::Error;

/// Which constraint a rejected insert ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    NotNull,
    Other,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConstraintKind::Unique => "UNIQUE",
            ConstraintKind::ForeignKey => "FOREIGN KEY",
            ConstraintKind::NotNull => "NOT NULL",
            ConstraintKind::Other => "unknown",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// The store already defines a table we were asked to create.
    #[error("table {table} already exists")]
    SchemaConflict { table: String },

    /// An insert broke a NOT NULL, UNIQUE or FOREIGN KEY constraint.
    #[error("{kind} constraint violated: {message}")]
    ConstraintViolation { kind: ConstraintKind, message: String },

    #[error("no table named {table}")]
    UnknownTable { table: String },

    #[error("unable to open database: {0}")]
    Connection(#[from] diesel::ConnectionError),

    #[error("database error: {0}")]
    Database(DieselError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Error::ConstraintViolation { .. })
    }

    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            Error::ConstraintViolation { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<DieselError> for Error {
    /// Split SQLite constraint failures out from every other diesel error.
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                let constraint = match kind {
                    DatabaseErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
                    DatabaseErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
                    DatabaseErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
                    // Older SQLite builds only report the primary result code.
                    _ if message.contains("constraint failed") => Some(ConstraintKind::Other),
                    _ => None,
                };

                match constraint {
                    Some(kind) => Error::ConstraintViolation { kind, message },
                    None => Error::Database(DieselError::DatabaseError(kind, info)),
                }
            }
            other => Error::Database(other),
        }
    }
}
