/// The various functions for the CrabCave project.
/// This library holds the schema of the ratCAVE tracking database, the
/// routine that creates it, the seed data and the lookups used by the
/// create_db and populate_db binaries.

/** ```rust,ignore
 * 
 *     /\
 *    ( /   @ @    ()
 *     \  __| |__  /
 *      -/   "   \-
 *     /-|       |-\
 *    / /-\     /-\ \
 *     / /-`---'-\ \     
 *      /         \ CRABCAVE
 * 
 *   lib.rs - rust lib declaration
 *   ```
 */

pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod ops;
pub mod pose;
pub mod schema;
pub mod seed;
pub mod tables;
