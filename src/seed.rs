//! Fill a freshly created store with the demonstration dataset: the rats,
//! the experimenters, the three VR experiments and their conditions.
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
 *   seed.rs - populate the demo rows
 *
 */

use crate::constants::{RAT_BIRTHDATE, RAT_CAGES, RAT_LETTERS};
use crate::db::{insert_conditions, insert_experimenters, insert_experiments, insert_rats, get_experiment_by_name};
use crate::error::{Error, Result};
use crate::models::{NewCondition, NewExperiment, NewExperimenter, NewRat};
use chrono::NaiveDate;
use diesel::sqlite::SqliteConnection;
use log::info;

pub const EXPERIMENTERS: [&str; 2] = ["Nicholas A. Del Grosso", "Eduardo Blanco Hernandez"];

pub const CLIFF_EXPERIMENT: &str = "Virtual Cliff Exp";

const CLIFF_DESCRIPTION: &str = "Look for cliff avoidance behavior
jump to side of arena away from cliff) in ratCAVE VR sessions,
when the cliff is virtual, real (nonreflective plastic over actual hole in arena),
or a static (non-VR, non-moving) projection.";

/// Name and description of each experiment.
pub const EXPERIMENTS: [(&str, &str); 3] = [
    (CLIFF_EXPERIMENT, CLIFF_DESCRIPTION),
    ("Virtual Object Preference Exp", "Look for exploration of an"),
    ("Virtual Wall Thigmotaxis Exp", "Look for exploration of an"),
];

pub const CLIFF_CONDITIONS: [(&str, &str); 3] = [
    ("Real Cliff", "An actual cliff"),
    ("VR Cliff", "VR-Projected Cliff"),
    ("Static", "A Cliff projected, but not updated."),
];

pub const OBJECT_CONDITIONS: [(&str, &str); 6] = [
    ("InitialExploration", "The first minute in the arena.  No wall pattern, no objects presented."),
    ("WallPatternA", "2nd phase: Arena wall pattern projected.  No objects presented, no object exploration bias expected."),
    ("VirtualObject_Left", "Virtual Object presented on Left position, including arena wall pattern."),
    ("VirtualObject_Right", "Virtual Object presented on Right position, including arena wall pattern."),
    ("RealObject_Left", "Real Object presented on Left position, including arena wall pattern."),
    ("RealObject_Right", "Real Object presented on Right Position, including arena wall pattern."),
];

/// The rat names, two per cage: VR-1A, VR-1B, VR-2A ... VR-5B.
pub fn seed_rat_names() -> Vec<String> {
    // Cages are numbered in pairs, two rats share a cage number.
    RAT_CAGES
        .zip(RAT_LETTERS.chars().cycle())
        .map(|(cage, letter)| format!("VR-{}{}", cage / 2, letter))
        .collect()
}

fn seed_birthdate() -> Option<NaiveDate> {
    let (y, m, d) = RAT_BIRTHDATE;
    NaiveDate::from_ymd_opt(y, m, d)
}

/// Populate the store in dependency order, one committed batch per table.
///
/// A failing batch is rolled back and the error returned; batches already
/// committed stay. No check is made for existing rows, so a second run stops
/// on the first duplicate rat name.
///
/// * `conn` - the Diesel SqliteConnection object, on a materialized store.
pub fn populate(conn: &mut SqliteConnection) -> Result<()> {
    let rats: Vec<NewRat> = seed_rat_names()
        .into_iter()
        .map(|name| NewRat { name, birthdate: seed_birthdate() })
        .collect();
    let added = insert_rats(conn, &rats)?;
    info!("Committed {} rats", added);

    let people: Vec<NewExperimenter> = EXPERIMENTERS
        .iter()
        .map(|name| NewExperimenter { name: name.to_string() })
        .collect();
    let added = insert_experimenters(conn, &people)?;
    info!("Committed {} experimenters", added);

    let exps: Vec<NewExperiment> = EXPERIMENTS
        .iter()
        .map(|(name, desc)| NewExperiment {
            name: name.to_string(),
            description: Some(desc.to_string()),
        })
        .collect();
    let added = insert_experiments(conn, &exps)?;
    info!("Committed {} experiments", added);

    let cliff = get_experiment_by_name(conn, CLIFF_EXPERIMENT)?
        .ok_or(Error::Database(diesel::result::Error::NotFound))?;

    // All nine conditions hang off the cliff experiment.
    let conds: Vec<NewCondition> = CLIFF_CONDITIONS
        .iter()
        .chain(OBJECT_CONDITIONS.iter())
        .map(|(name, desc)| NewCondition {
            name: name.to_string(),
            description: Some(desc.to_string()),
            experiment_id: cliff.id,
        })
        .collect();
    let added = insert_conditions(conn, &conds)?;
    info!("Committed {} conditions to {}", added, cliff);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{count_rows, establish_connection, get_experiment_conditions, get_rats};
    use crate::tables::materialize;

    fn setup() -> SqliteConnection {
        let mut conn = establish_connection(":memory:").unwrap();
        materialize(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_rat_names() {
        assert_eq!(
            seed_rat_names(),
            vec!["VR-1A", "VR-1B", "VR-2A", "VR-2B", "VR-3A", "VR-3B", "VR-4A", "VR-4B", "VR-5A", "VR-5B"]
        );
    }

    #[test]
    fn test_rat_names_pair_up() {
        let names = seed_rat_names();
        assert_eq!(names.len(), RAT_CAGES.len());
        for pair in names.chunks(2) {
            assert!(pair[0].ends_with('A'));
            assert!(pair[1].ends_with('B'));
            assert_eq!(pair[0][..4], pair[1][..4]);
        }
    }

    #[test]
    fn test_populate() {
        let conn = &mut setup();
        populate(conn).unwrap();

        assert_eq!(count_rows(conn, "rats").unwrap(), 10);
        assert_eq!(count_rows(conn, "experimenters").unwrap(), 2);
        assert_eq!(count_rows(conn, "experiments").unwrap(), 3);
        assert_eq!(count_rows(conn, "conditions").unwrap(), 9);
        assert_eq!(count_rows(conn, "sessions").unwrap(), 0);
        assert_eq!(count_rows(conn, "levels").unwrap(), 0);

        let rats = get_rats(conn).unwrap();
        assert!(rats.iter().all(|r| r.birthdate == NaiveDate::from_ymd_opt(2017, 2, 15)));

        let cliff = get_experiment_by_name(conn, CLIFF_EXPERIMENT).unwrap().unwrap();
        assert!(cliff.description.as_ref().unwrap().starts_with("Look for cliff avoidance behavior\n"));
        assert_eq!(get_experiment_conditions(conn, &cliff).unwrap().len(), 9);
    }

    #[test]
    fn test_populate_twice_fails_on_rats() {
        let conn = &mut setup();
        populate(conn).unwrap();

        let err = populate(conn).unwrap_err();
        assert!(err.is_constraint_violation());
        assert!(err.to_string().contains("rats.name"));
        assert_eq!(count_rows(conn, "rats").unwrap(), 10);
        assert_eq!(count_rows(conn, "experimenters").unwrap(), 2);
    }
}
