//! The major functions that deal with the database part of the tracking store:
//! opening it, inserting rows in batches and following the relationships
//! between the tables.

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
 *   db.rs - database access functions
 *
 *   Relationships are plain foreign keys. A parent's children are found
 *   by query, never held on the parent.
 */

use crate::error::{Error, Result};
use crate::models::{
    Condition, Experiment, Experimenter, Level, NewCondition, NewExperiment, NewExperimenter,
    NewLevel, NewRat, NewSession, NewTrackingDataPoint, NewTrackingObject, Rat, Session,
    TrackingDataPoint, TrackingObject,
};
use crate::pose::Pose;
use crate::schema::{
    conditions, experimenters, experiments, levels, rats, sessions, trackingdata, trackingobjects,
};
use crate::tables;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel::sqlite::SqliteConnection;
use log::debug;

/// Establish a connection to a database file with foreign keys enforced.
///
/// * `database_url` - path to the SQLite file, or `:memory:`.
pub fn establish_connection(database_url: &str) -> Result<SqliteConnection> {
    let mut conn = SqliteConnection::establish(database_url)?;
    // SQLite leaves these off unless asked, per connection.
    conn.batch_execute("PRAGMA foreign_keys = ON")?;
    Ok(conn)
}

// Batch inserts. Each batch is one transaction: all rows or none.

/// Insert a batch of rats and commit them together.
///
/// * `conn` - the Diesel SqliteConnection object.
/// * `new_rats` - the rats to add.
pub fn insert_rats(conn: &mut SqliteConnection, new_rats: &[NewRat]) -> Result<usize> {
    conn.transaction::<_, Error, _>(|conn| {
        let mut count = 0;
        for rat in new_rats {
            count += diesel::insert_into(rats::table).values(rat).execute(conn)?;
            debug!("Added rat {}", rat.name);
        }
        Ok(count)
    })
}

/// Insert a batch of experimenters and commit them together.
///
/// * `conn` - the Diesel SqliteConnection object.
/// * `people` - the experimenters to add.
pub fn insert_experimenters(conn: &mut SqliteConnection, people: &[NewExperimenter]) -> Result<usize> {
    conn.transaction::<_, Error, _>(|conn| {
        let mut count = 0;
        for person in people {
            count += diesel::insert_into(experimenters::table).values(person).execute(conn)?;
            debug!("Added experimenter {}", person.name);
        }
        Ok(count)
    })
}

/// Insert a batch of experiments and commit them together.
///
/// * `conn` - the Diesel SqliteConnection object.
/// * `exps` - the experiments to add.
pub fn insert_experiments(conn: &mut SqliteConnection, exps: &[NewExperiment]) -> Result<usize> {
    conn.transaction::<_, Error, _>(|conn| {
        let mut count = 0;
        for exp in exps {
            count += diesel::insert_into(experiments::table).values(exp).execute(conn)?;
            debug!("Added experiment {}", exp.name);
        }
        Ok(count)
    })
}

/// Insert a batch of conditions and commit them together.
///
/// * `conn` - the Diesel SqliteConnection object.
/// * `conds` - the conditions to add. Their experiments must already exist.
pub fn insert_conditions(conn: &mut SqliteConnection, conds: &[NewCondition]) -> Result<usize> {
    conn.transaction::<_, Error, _>(|conn| {
        let mut count = 0;
        for cond in conds {
            count += diesel::insert_into(conditions::table).values(cond).execute(conn)?;
            debug!("Added condition {}", cond.name);
        }
        Ok(count)
    })
}

// Single row inserts, returning the stored row with its new id.

/// Add one experiment.
pub fn insert_experiment(conn: &mut SqliteConnection, exp: &NewExperiment) -> Result<Experiment> {
    conn.transaction::<_, Error, _>(|conn| {
        diesel::insert_into(experiments::table).values(exp).execute(conn)?;
        Ok(experiments::table
            .select(Experiment::as_select())
            .order(experiments::id.desc())
            .first(conn)?)
    })
}

/// Add one experimenter.
pub fn insert_experimenter(conn: &mut SqliteConnection, person: &NewExperimenter) -> Result<Experimenter> {
    conn.transaction::<_, Error, _>(|conn| {
        diesel::insert_into(experimenters::table).values(person).execute(conn)?;
        Ok(experimenters::table
            .select(Experimenter::as_select())
            .order(experimenters::id.desc())
            .first(conn)?)
    })
}

/// Add one rat.
pub fn insert_rat(conn: &mut SqliteConnection, rat: &NewRat) -> Result<Rat> {
    conn.transaction::<_, Error, _>(|conn| {
        diesel::insert_into(rats::table).values(rat).execute(conn)?;
        Ok(rats::table.select(Rat::as_select()).order(rats::id.desc()).first(conn)?)
    })
}

/// Add one session. The experiment, experimenter and rat must exist.
///
/// * `conn` - the Diesel SqliteConnection object.
/// * `session` - the session to add.
pub fn insert_session(conn: &mut SqliteConnection, session: &NewSession) -> Result<Session> {
    conn.transaction::<_, Error, _>(|conn| {
        diesel::insert_into(sessions::table).values(session).execute(conn)?;
        Ok(sessions::table
            .select(Session::as_select())
            .order(sessions::id.desc())
            .first(conn)?)
    })
}

/// Add one condition to an existing experiment.
pub fn insert_condition(conn: &mut SqliteConnection, cond: &NewCondition) -> Result<Condition> {
    conn.transaction::<_, Error, _>(|conn| {
        diesel::insert_into(conditions::table).values(cond).execute(conn)?;
        Ok(conditions::table
            .select(Condition::as_select())
            .order(conditions::id.desc())
            .first(conn)?)
    })
}

pub fn insert_level(conn: &mut SqliteConnection, level: &NewLevel) -> Result<Level> {
    conn.transaction::<_, Error, _>(|conn| {
        diesel::insert_into(levels::table).values(level).execute(conn)?;
        Ok(levels::table.select(Level::as_select()).order(levels::id.desc()).first(conn)?)
    })
}

pub fn insert_trackingobject(conn: &mut SqliteConnection, obj: &NewTrackingObject) -> Result<TrackingObject> {
    conn.transaction::<_, Error, _>(|conn| {
        diesel::insert_into(trackingobjects::table).values(obj).execute(conn)?;
        Ok(trackingobjects::table
            .select(TrackingObject::as_select())
            .order(trackingobjects::id.desc())
            .first(conn)?)
    })
}

/// Add one tracking sample. Any session, condition or tracking object it
/// points at must already exist.
///
/// * `conn` - the Diesel SqliteConnection object.
/// * `point` - the sample to add.
pub fn insert_trackingdata(conn: &mut SqliteConnection, point: &NewTrackingDataPoint) -> Result<TrackingDataPoint> {
    conn.transaction::<_, Error, _>(|conn| {
        diesel::insert_into(trackingdata::table).values(point).execute(conn)?;
        Ok(trackingdata::table
            .select(TrackingDataPoint::as_select())
            .order(trackingdata::id.desc())
            .first(conn)?)
    })
}

/// Return all the rats in the database, in insertion order.
pub fn get_rats(conn: &mut SqliteConnection) -> Result<Vec<Rat>> {
    Ok(rats::table.select(Rat::as_select()).order(rats::id).load(conn)?)
}

pub fn get_experimenters(conn: &mut SqliteConnection) -> Result<Vec<Experimenter>> {
    Ok(experimenters::table
        .select(Experimenter::as_select())
        .order(experimenters::id)
        .load(conn)?)
}

pub fn get_experiments(conn: &mut SqliteConnection) -> Result<Vec<Experiment>> {
    Ok(experiments::table
        .select(Experiment::as_select())
        .order(experiments::id)
        .load(conn)?)
}

pub fn get_conditions(conn: &mut SqliteConnection) -> Result<Vec<Condition>> {
    Ok(conditions::table
        .select(Condition::as_select())
        .order(conditions::id)
        .load(conn)?)
}

pub fn get_levels(conn: &mut SqliteConnection) -> Result<Vec<Level>> {
    Ok(levels::table.select(Level::as_select()).order(levels::id).load(conn)?)
}

pub fn get_trackingobjects(conn: &mut SqliteConnection) -> Result<Vec<TrackingObject>> {
    Ok(trackingobjects::table
        .select(TrackingObject::as_select())
        .order(trackingobjects::id)
        .load(conn)?)
}

/// Return the rat with this name, if there is one.
///
/// * `conn` - the Diesel SqliteConnection object.
/// * `rat_name` - e.g. VR-1A.
pub fn get_rat_by_name(conn: &mut SqliteConnection, rat_name: &str) -> Result<Option<Rat>> {
    Ok(rats::table
        .select(Rat::as_select())
        .filter(rats::name.eq(rat_name))
        .first(conn)
        .optional()?)
}

pub fn get_experimenter_by_name(conn: &mut SqliteConnection, person: &str) -> Result<Option<Experimenter>> {
    Ok(experimenters::table
        .select(Experimenter::as_select())
        .filter(experimenters::name.eq(person))
        .first(conn)
        .optional()?)
}

/// Return the first experiment with this name. Names are only unique by
/// convention so later duplicates are ignored.
///
/// * `conn` - the Diesel SqliteConnection object.
/// * `exp_name` - the experiment name.
pub fn get_experiment_by_name(conn: &mut SqliteConnection, exp_name: &str) -> Result<Option<Experiment>> {
    Ok(experiments::table
        .select(Experiment::as_select())
        .filter(experiments::name.eq(exp_name))
        .order(experiments::id)
        .first(conn)
        .optional()?)
}

pub fn get_trackingobject_by_name(conn: &mut SqliteConnection, obj_name: &str) -> Result<Option<TrackingObject>> {
    Ok(trackingobjects::table
        .select(TrackingObject::as_select())
        .filter(trackingobjects::name.eq(obj_name))
        .first(conn)
        .optional()?)
}

/// Return the tracking sample with this id, if there is one.
pub fn get_trackingdata_point(conn: &mut SqliteConnection, point_id: i32) -> Result<Option<TrackingDataPoint>> {
    Ok(trackingdata::table
        .find(point_id)
        .select(TrackingDataPoint::as_select())
        .first(conn)
        .optional()?)
}

/// All sessions of an experiment, ordered by date.
///
/// * `conn` - the Diesel SqliteConnection object.
/// * `exp` - the parent Experiment.
pub fn get_experiment_sessions(conn: &mut SqliteConnection, exp: &Experiment) -> Result<Vec<Session>> {
    Ok(Session::belonging_to(exp)
        .select(Session::as_select())
        .order((sessions::date, sessions::id))
        .load(conn)?)
}

/// All sessions run by an experimenter, ordered by date.
pub fn get_experimenter_sessions(conn: &mut SqliteConnection, person: &Experimenter) -> Result<Vec<Session>> {
    Ok(Session::belonging_to(person)
        .select(Session::as_select())
        .order((sessions::date, sessions::id))
        .load(conn)?)
}

/// All sessions a rat took part in, ordered by date.
pub fn get_rat_sessions(conn: &mut SqliteConnection, rat: &Rat) -> Result<Vec<Session>> {
    Ok(Session::belonging_to(rat)
        .select(Session::as_select())
        .order((sessions::date, sessions::id))
        .load(conn)?)
}

/// The conditions of an experiment, ordered by name.
///
/// * `conn` - the Diesel SqliteConnection object.
/// * `exp` - the parent Experiment.
pub fn get_experiment_conditions(conn: &mut SqliteConnection, exp: &Experiment) -> Result<Vec<Condition>> {
    Ok(Condition::belonging_to(exp)
        .select(Condition::as_select())
        .order(conditions::name)
        .load(conn)?)
}

/// Get all the tracking data recorded in a session, in ascending time order.
///
/// * `conn` - the Diesel SqliteConnection object.
/// * `session` - the parent Session.
pub fn get_session_trackingdata(conn: &mut SqliteConnection, session: &Session) -> Result<Vec<TrackingDataPoint>> {
    Ok(TrackingDataPoint::belonging_to(session)
        .select(TrackingDataPoint::as_select())
        .order((trackingdata::time, trackingdata::id))
        .load(conn)?)
}

pub fn get_condition_trackingdata(conn: &mut SqliteConnection, cond: &Condition) -> Result<Vec<TrackingDataPoint>> {
    Ok(TrackingDataPoint::belonging_to(cond)
        .select(TrackingDataPoint::as_select())
        .order((trackingdata::time, trackingdata::id))
        .load(conn)?)
}

pub fn get_trackingobject_trackingdata(
    conn: &mut SqliteConnection,
    obj: &TrackingObject,
) -> Result<Vec<TrackingDataPoint>> {
    Ok(TrackingDataPoint::belonging_to(obj)
        .select(TrackingDataPoint::as_select())
        .order((trackingdata::time, trackingdata::id))
        .load(conn)?)
}

/// Return the experiment a session belongs to.
pub fn get_session_experiment(conn: &mut SqliteConnection, session: &Session) -> Result<Experiment> {
    Ok(experiments::table
        .find(session.experiment_id)
        .select(Experiment::as_select())
        .first(conn)?)
}

pub fn get_session_experimenter(conn: &mut SqliteConnection, session: &Session) -> Result<Experimenter> {
    Ok(experimenters::table
        .find(session.experimenter_id)
        .select(Experimenter::as_select())
        .first(conn)?)
}

pub fn get_session_rat(conn: &mut SqliteConnection, session: &Session) -> Result<Rat> {
    Ok(rats::table.find(session.rat_id).select(Rat::as_select()).first(conn)?)
}

/// Return the experiment a condition belongs to.
pub fn get_condition_experiment(conn: &mut SqliteConnection, cond: &Condition) -> Result<Experiment> {
    Ok(experiments::table
        .find(cond.experiment_id)
        .select(Experiment::as_select())
        .first(conn)?)
}

/// Describe a session with the names of its rat and experiment, e.g.
/// `<Session(date=2017-04-01, rat=VR-1A, experiment=Virtual Cliff Exp)>`.
///
/// * `conn` - the Diesel SqliteConnection object.
/// * `session` - the Session to describe.
pub fn describe_session(conn: &mut SqliteConnection, session: &Session) -> Result<String> {
    let rat = get_session_rat(conn, session)?;
    let exp = get_session_experiment(conn, session)?;
    Ok(format!(
        "<Session(date={}, rat={}, experiment={})>",
        session.date, rat.name, exp.name
    ))
}

/// Describe a tracking sample with its tracking object and session. Missing
/// links show as `None`.
///
/// * `conn` - the Diesel SqliteConnection object.
/// * `point` - the TrackingDataPoint to describe.
pub fn describe_trackingdata(conn: &mut SqliteConnection, point: &TrackingDataPoint) -> Result<String> {
    let obj_name = match point.trackingobject_id {
        Some(id) => trackingobjects::table
            .find(id)
            .select(trackingobjects::name)
            .first::<String>(conn)?,
        None => String::from("None"),
    };

    let session = match point.session_id {
        Some(id) => {
            let session: Session = sessions::table.find(id).select(Session::as_select()).first(conn)?;
            describe_session(conn, &session)?
        }
        None => String::from("None"),
    };

    Ok(format!(
        "<TrackingDataPoint(trackingobject='{}', session={}, time={}, position={}, rotation={})>",
        obj_name,
        session,
        point.time,
        point.position(),
        point.rotation()
    ))
}

#[derive(QueryableByName)]
struct RowCount {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

/// Count the rows in one of the store's tables.
///
/// * `conn` - the Diesel SqliteConnection object.
/// * `table_name` - one of the names in `tables::TABLES`.
pub fn count_rows(conn: &mut SqliteConnection, table_name: &str) -> Result<i64> {
    // Only ever interpolate names we defined ourselves.
    let table = tables::table(table_name).ok_or_else(|| Error::UnknownTable {
        table: table_name.to_string(),
    })?;
    let row: RowCount =
        diesel::sql_query(format!("SELECT COUNT(*) AS count FROM {}", table.name)).get_result(conn)?;
    Ok(row.count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConstraintKind;
    use crate::pose::{Orientation, Position, RotationEuler, RotationQuaternion};
    use crate::tables::materialize;
    use chrono::{NaiveDate, NaiveTime};

    fn setup() -> SqliteConnection {
        let mut conn = establish_connection(":memory:").unwrap();
        materialize(&mut conn).unwrap();
        conn
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    // An experiment, experimenter and rat for sessions to point at.
    fn parents(conn: &mut SqliteConnection) -> (Experiment, Experimenter, Rat) {
        let exp = insert_experiment(
            conn,
            &NewExperiment { name: String::from("Virtual Cliff Exp"), description: None },
        )
        .unwrap();
        let person = insert_experimenter(conn, &NewExperimenter { name: String::from("Nicholas A. Del Grosso") }).unwrap();
        let rat = insert_rat(conn, &NewRat { name: String::from("VR-1A"), birthdate: Some(date(2017, 2, 15)) }).unwrap();
        (exp, person, rat)
    }

    fn new_session(exp: &Experiment, person: &Experimenter, rat: &Rat, day: NaiveDate) -> NewSession {
        NewSession {
            experiment_id: exp.id,
            experimenter_id: person.id,
            rat_id: rat.id,
            date: day,
            time: time(10, 0, 0),
            video_filename: Some(String::from("session.avi")),
            motive_take_filename: None,
        }
    }

    fn assert_constraint(res: Result<impl std::fmt::Debug>, kind: ConstraintKind) {
        match res {
            Err(Error::ConstraintViolation { kind: k, .. }) => assert_eq!(k, kind),
            other => panic!("expected {} violation, got {:?}", kind, other),
        }
    }

    #[test]
    fn test_unique_names() {
        let conn = &mut setup();

        let rat = NewRat { name: String::from("VR-2B"), birthdate: None };
        insert_rat(conn, &rat).unwrap();
        assert_constraint(insert_rat(conn, &rat), ConstraintKind::Unique);

        let person = NewExperimenter { name: String::from("Eduardo Blanco Hernandez") };
        insert_experimenter(conn, &person).unwrap();
        assert_constraint(insert_experimenter(conn, &person), ConstraintKind::Unique);

        let obj = NewTrackingObject { name: String::from("Arena"), system: Some(String::from("Motive")) };
        insert_trackingobject(conn, &obj).unwrap();
        assert_constraint(insert_trackingobject(conn, &obj), ConstraintKind::Unique);

        let level = NewLevel { name: String::from("Easy"), description: None };
        insert_level(conn, &level).unwrap();
        assert_constraint(insert_level(conn, &level), ConstraintKind::Unique);

        assert_eq!(count_rows(conn, "rats").unwrap(), 1);
        assert_eq!(count_rows(conn, "levels").unwrap(), 1);
    }

    #[test]
    fn test_experiment_names_not_unique() {
        let conn = &mut setup();
        let first = insert_experiment(conn, &NewExperiment { name: String::from("Dup"), description: None }).unwrap();
        insert_experiment(conn, &NewExperiment { name: String::from("Dup"), description: Some(String::from("again")) })
            .unwrap();
        assert_eq!(count_rows(conn, "experiments").unwrap(), 2);
        assert_eq!(get_experiment_by_name(conn, "Dup").unwrap(), Some(first));
    }

    #[test]
    fn test_session_foreign_keys() {
        let conn = &mut setup();
        let (exp, person, rat) = parents(conn);
        let good = new_session(&exp, &person, &rat, date(2017, 3, 1));

        let mut bad = good.clone();
        bad.experiment_id = exp.id + 100;
        assert_constraint(insert_session(conn, &bad), ConstraintKind::ForeignKey);

        let mut bad = good.clone();
        bad.experimenter_id = person.id + 100;
        assert_constraint(insert_session(conn, &bad), ConstraintKind::ForeignKey);

        let mut bad = good.clone();
        bad.rat_id = rat.id + 100;
        assert_constraint(insert_session(conn, &bad), ConstraintKind::ForeignKey);

        assert_eq!(count_rows(conn, "sessions").unwrap(), 0);
        let session = insert_session(conn, &good).unwrap();
        assert_eq!(session.video_filename.as_deref(), Some("session.avi"));
        assert_eq!(count_rows(conn, "sessions").unwrap(), 1);
    }

    #[test]
    fn test_condition_foreign_key() {
        let conn = &mut setup();
        let cond = NewCondition {
            name: String::from("VR Cliff"),
            description: None,
            experiment_id: 42,
        };
        assert_constraint(insert_condition(conn, &cond), ConstraintKind::ForeignKey);
        assert_constraint(insert_conditions(conn, &[cond]), ConstraintKind::ForeignKey);
        assert_eq!(count_rows(conn, "conditions").unwrap(), 0);
    }

    #[test]
    fn test_not_null() {
        let conn = &mut setup();
        let res = diesel::sql_query("INSERT INTO rats (birthdate) VALUES ('2017-02-15')")
            .execute(conn)
            .map_err(Error::from);
        assert_constraint(res, ConstraintKind::NotNull);
    }

    #[test]
    fn test_batch_is_all_or_nothing() {
        let conn = &mut setup();
        let batch = vec![
            NewRat { name: String::from("VR-1A"), birthdate: None },
            NewRat { name: String::from("VR-1B"), birthdate: None },
            NewRat { name: String::from("VR-1A"), birthdate: None },
        ];
        assert_constraint(insert_rats(conn, &batch), ConstraintKind::Unique);
        assert_eq!(count_rows(conn, "rats").unwrap(), 0);

        assert_eq!(insert_rats(conn, &batch[..2]).unwrap(), 2);
        assert_eq!(count_rows(conn, "rats").unwrap(), 2);
    }

    #[test]
    fn test_relationships() {
        let conn = &mut setup();
        let (exp, person, rat) = parents(conn);

        let later = insert_session(conn, &new_session(&exp, &person, &rat, date(2017, 5, 2))).unwrap();
        let earlier = insert_session(conn, &new_session(&exp, &person, &rat, date(2017, 4, 1))).unwrap();

        let by_exp = get_experiment_sessions(conn, &exp).unwrap();
        assert_eq!(by_exp, vec![earlier.clone(), later.clone()]);
        assert_eq!(get_rat_sessions(conn, &rat).unwrap().len(), 2);
        assert_eq!(get_experimenter_sessions(conn, &person).unwrap()[0], earlier);

        assert_eq!(get_session_experiment(conn, &later).unwrap(), exp);
        assert_eq!(get_session_experimenter(conn, &later).unwrap(), person);
        assert_eq!(get_session_rat(conn, &later).unwrap(), rat);

        for name in ["VR Cliff", "Real Cliff", "Static"] {
            insert_condition(
                conn,
                &NewCondition { name: name.to_string(), description: None, experiment_id: exp.id },
            )
            .unwrap();
        }
        let conds = get_experiment_conditions(conn, &exp).unwrap();
        let names: Vec<&str> = conds.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Real Cliff", "Static", "VR Cliff"]);
        assert_eq!(get_condition_experiment(conn, &conds[0]).unwrap(), exp);
    }

    #[test]
    fn test_trackingdata_foreign_keys() {
        let conn = &mut setup();
        let mut point = NewTrackingDataPoint::new(time(0, 0, 1), (0.0, 0.0, 0.0).into());
        point.session_id = Some(7);
        assert_constraint(insert_trackingdata(conn, &point), ConstraintKind::ForeignKey);

        // All the links are optional.
        point.session_id = None;
        let stored = insert_trackingdata(conn, &point).unwrap();
        assert_eq!(stored.session_id, None);
        assert_eq!(stored.condition_id, None);
        assert_eq!(stored.trackingobject_id, None);
    }

    #[test]
    fn test_trackingdata_groupings_round_trip() {
        let conn = &mut setup();
        let (exp, person, rat) = parents(conn);
        let session = insert_session(conn, &new_session(&exp, &person, &rat, date(2017, 4, 1))).unwrap();
        let obj = insert_trackingobject(
            conn,
            &NewTrackingObject { name: String::from("Rat"), system: Some(String::from("Motive")) },
        )
        .unwrap();

        let mut point = NewTrackingDataPoint::new(time(10, 0, 2), Position { x: 0.0, y: 0.0, z: 0.0 });
        point.session_id = Some(session.id);
        point.trackingobject_id = Some(obj.id);
        point.motive_timestamp = Some(123_456_789_012);
        point.is_visible = Some(true);
        point.set_position(Position { x: 1.0, y: 2.0, z: 3.0 });
        point.set_rotation((10.0, 20.0, 30.0).into());
        point.set_rotation_quaternion((0.1, 0.2, 0.3, 0.9).into());
        point.set_orientation((-1.0, 0.0, 1.0).into());
        insert_trackingdata(conn, &point).unwrap();

        let mut first = NewTrackingDataPoint::new(time(10, 0, 1), (4.0, 5.0, 6.0).into());
        first.session_id = Some(session.id);
        insert_trackingdata(conn, &first).unwrap();

        let data = get_session_trackingdata(conn, &session).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].position(), Position { x: 4.0, y: 5.0, z: 6.0 });
        assert_eq!(data[0].rotation(), RotationEuler::default());

        let stored = &data[1];
        assert_eq!(stored.position(), Position { x: 1.0, y: 2.0, z: 3.0 });
        assert_eq!(stored.rotation(), RotationEuler { x: Some(10.0), y: Some(20.0), z: Some(30.0) });
        assert_eq!(
            stored.rotation_quaternion(),
            RotationQuaternion { x: Some(0.1), y: Some(0.2), z: Some(0.3), w: Some(0.9) }
        );
        assert_eq!(stored.orientation(), Orientation { x: Some(-1.0), y: Some(0.0), z: Some(1.0) });
        assert_eq!(stored.motive_timestamp, Some(123_456_789_012));
        assert_eq!(stored.is_visible, Some(true));

        let by_obj = get_trackingobject_trackingdata(conn, &obj).unwrap();
        assert_eq!(by_obj.len(), 1);
        assert_eq!(by_obj[0].id, stored.id);
    }

    #[test]
    fn test_describe_names_parents() {
        let conn = &mut setup();
        let (exp, person, rat) = parents(conn);
        let session = insert_session(conn, &new_session(&exp, &person, &rat, date(2017, 4, 1))).unwrap();
        assert_eq!(
            describe_session(conn, &session).unwrap(),
            "<Session(date=2017-04-01, rat=VR-1A, experiment=Virtual Cliff Exp)>"
        );

        let obj = insert_trackingobject(
            conn,
            &NewTrackingObject { name: String::from("Rat"), system: Some(String::from("Motive")) },
        )
        .unwrap();
        let mut point = NewTrackingDataPoint::new(time(10, 0, 2), (1.0, 2.0, 3.0).into());
        point.session_id = Some(session.id);
        point.trackingobject_id = Some(obj.id);
        point.set_rotation((0.0, 90.0, 0.0).into());
        let stored = insert_trackingdata(conn, &point).unwrap();
        assert_eq!(
            describe_trackingdata(conn, &stored).unwrap(),
            "<TrackingDataPoint(trackingobject='Rat', \
             session=<Session(date=2017-04-01, rat=VR-1A, experiment=Virtual Cliff Exp)>, \
             time=10:00:02, position=(1, 2, 3), rotation=(0, 90, 0))>"
        );

        let loose = insert_trackingdata(conn, &NewTrackingDataPoint::new(time(10, 0, 3), (0.0, 0.0, 0.0).into())).unwrap();
        assert_eq!(get_trackingdata_point(conn, stored.id).unwrap(), Some(stored));
        assert_eq!(get_trackingdata_point(conn, 9999).unwrap(), None);
        assert!(describe_trackingdata(conn, &loose)
            .unwrap()
            .starts_with("<TrackingDataPoint(trackingobject='None', session=None,"));
    }

    #[test]
    fn test_count_rows_unknown_table() {
        let conn = &mut setup();
        match count_rows(conn, "rats; DROP TABLE rats") {
            Err(Error::UnknownTable { .. }) => {}
            other => panic!("expected UnknownTable, got {:?}", other),
        }
        assert_eq!(count_rows(conn, "rats").unwrap(), 0);
    }
}
