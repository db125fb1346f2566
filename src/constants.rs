//! Some useful global constants we use throughout CrabCave.

/// Where the store lives if nothing else is given.
pub const DEFAULT_DB_PATH: &str = "./testdb.db";

// Seed rats. Cage numbers 2..12 halved give rats 1 to 5.
pub const RAT_CAGES: std::ops::Range<u32> = 2..12;
pub const RAT_LETTERS: &str = "AB";
pub const RAT_BIRTHDATE: (i32, u32, u32) = (2017, 2, 15);
