//! The Options that the create_db and populate_db programs need. Copied from the command line arguments.
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
 *   ops.rs - Global options
 *
*/

use crate::constants::DEFAULT_DB_PATH;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DbOps {
    /// Path to the SQLite file
    pub db_path: String,
    /// Optional file to copy the log to
    pub log_path: Option<PathBuf>,
}

impl DbOps {
    /// Build the options from the raw argument values.
    ///
    /// * `dbpath` - the --dbpath argument, if given.
    /// * `logfile` - the --logfile argument; "none" means no log file.
    pub fn new(dbpath: Option<String>, logfile: &str) -> DbOps {
        let log_path = if logfile != "none" {
            Some(PathBuf::from(logfile))
        } else {
            None
        };

        DbOps {
            db_path: resolve_db_path(dbpath),
            log_path,
        }
    }
}

/// Decide which database file to use: the argument if given, otherwise the
/// default. The environment is never consulted.
///
/// * `dbpath` - the path given on the command line, if any.
pub fn resolve_db_path(dbpath: Option<String>) -> String {
    dbpath.unwrap_or_else(|| DEFAULT_DB_PATH.to_string())
}
