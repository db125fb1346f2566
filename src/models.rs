//! The model of the tracking database: experiments, the people and rats
//! that take part, recording sessions and per-frame tracking data.
//! We use Diesel to provide an ORM for us.
/** ```rust,ignore
 *     /\
 *    ( /   @ @    ()
 *     \  __| |__  /
 *      -/   "   \-
 *     /-|       |-\
 *    / /-\     /-\ \
 *     / /-`---'-\ \
 *      /         \ CRABCAVE
 *
 *   models.rs - db models for diesel
 *   ```
 */

use crate::pose::{Pose, Position};
use crate::schema::{
    conditions, experimenters, experiments, levels, rats, sessions, trackingdata, trackingobjects,
};
use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;
use std::fmt;

// Order of fields should match these in the schema.rs

/// An experiment, which owns its sessions and conditions.
#[derive(Queryable, Selectable, Identifiable, Clone, Debug, PartialEq)]
#[diesel(table_name = experiments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Experiment {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// A person running sessions.
#[derive(Queryable, Selectable, Identifiable, Clone, Debug, PartialEq)]
#[diesel(table_name = experimenters)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Experimenter {
    pub id: i32,
    pub name: String,
}

#[derive(Queryable, Selectable, Identifiable, Clone, Debug, PartialEq)]
#[diesel(table_name = rats)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Rat {
    pub id: i32,
    pub name: String,
    pub birthdate: Option<NaiveDate>,
}

/// One recording of a rat in an experiment.
#[derive(Queryable, Selectable, Identifiable, Associations, Clone, Debug, PartialEq)]
#[diesel(belongs_to(Experiment))]
#[diesel(belongs_to(Experimenter))]
#[diesel(belongs_to(Rat))]
#[diesel(table_name = sessions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Session {
    pub id: i32,
    pub experiment_id: i32,
    pub experimenter_id: i32,
    pub rat_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Video recorded alongside the session, if any.
    pub video_filename: Option<String>,
    /// The Motive take the tracking data came from.
    pub motive_take_filename: Option<String>,
}

/// An experimental condition. Always belongs to exactly one experiment.
#[derive(Queryable, Selectable, Identifiable, Associations, Clone, Debug, PartialEq)]
#[diesel(belongs_to(Experiment))]
#[diesel(table_name = conditions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Condition {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub experiment_id: i32,
}

#[derive(Queryable, Selectable, Identifiable, Clone, Debug, PartialEq)]
#[diesel(table_name = levels)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Level {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// A rigid body the motion capture system follows.
#[derive(Queryable, Selectable, Identifiable, Clone, Debug, PartialEq)]
#[diesel(table_name = trackingobjects)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TrackingObject {
    pub id: i32,
    pub name: String,
    /// Which tracking system produced it, e.g. Motive.
    pub system: Option<String>,
}

/// A single tracked sample. Position is always present, the rotation and
/// orientation columns may each be missing. See [`crate::pose`] for the
/// grouped views.
#[derive(Queryable, Selectable, Identifiable, Associations, Clone, Debug, PartialEq)]
#[diesel(belongs_to(Condition))]
#[diesel(belongs_to(Session))]
#[diesel(belongs_to(TrackingObject, foreign_key = trackingobject_id))]
#[diesel(table_name = trackingdata)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TrackingDataPoint {
    pub id: i32,
    pub condition_id: Option<i32>,
    pub session_id: Option<i32>,
    pub trackingobject_id: Option<i32>,
    pub time: NaiveTime,
    pub motive_timestamp: Option<i64>,
    pub is_visible: Option<bool>,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub rot_x: Option<f64>,
    pub rot_y: Option<f64>,
    pub rot_z: Option<f64>,
    pub rot_qx: Option<f64>,
    pub rot_qy: Option<f64>,
    pub rot_qz: Option<f64>,
    pub rot_qw: Option<f64>,
    pub ori_x: Option<f64>,
    pub ori_y: Option<f64>,
    pub ori_z: Option<f64>,
}

// Insertable forms. The id is assigned by the store.

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = experiments)]
pub struct NewExperiment {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = experimenters)]
pub struct NewExperimenter {
    pub name: String,
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = rats)]
pub struct NewRat {
    pub name: String,
    pub birthdate: Option<NaiveDate>,
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = sessions)]
pub struct NewSession {
    pub experiment_id: i32,
    pub experimenter_id: i32,
    pub rat_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub video_filename: Option<String>,
    pub motive_take_filename: Option<String>,
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = conditions)]
pub struct NewCondition {
    pub name: String,
    pub description: Option<String>,
    pub experiment_id: i32,
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = levels)]
pub struct NewLevel {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Insertable, Clone, Debug)]
#[diesel(table_name = trackingobjects)]
pub struct NewTrackingObject {
    pub name: String,
    pub system: Option<String>,
}

#[derive(Insertable, Clone, Debug, PartialEq)]
#[diesel(table_name = trackingdata)]
pub struct NewTrackingDataPoint {
    pub condition_id: Option<i32>,
    pub session_id: Option<i32>,
    pub trackingobject_id: Option<i32>,
    pub time: NaiveTime,
    pub motive_timestamp: Option<i64>,
    pub is_visible: Option<bool>,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub rot_x: Option<f64>,
    pub rot_y: Option<f64>,
    pub rot_z: Option<f64>,
    pub rot_qx: Option<f64>,
    pub rot_qy: Option<f64>,
    pub rot_qz: Option<f64>,
    pub rot_qw: Option<f64>,
    pub ori_x: Option<f64>,
    pub ori_y: Option<f64>,
    pub ori_z: Option<f64>,
}

impl NewTrackingDataPoint {
    /// A sample with only the required columns set; everything else starts empty.
    ///
    /// * `time` - time of the sample.
    /// * `position` - where the object was.
    pub fn new(time: NaiveTime, position: Position) -> NewTrackingDataPoint {
        NewTrackingDataPoint {
            condition_id: None,
            session_id: None,
            trackingobject_id: None,
            time,
            motive_timestamp: None,
            is_visible: None,
            x: position.x,
            y: position.y,
            z: position.z,
            rot_x: None,
            rot_y: None,
            rot_z: None,
            rot_qx: None,
            rot_qy: None,
            rot_qz: None,
            rot_qw: None,
            ori_x: None,
            ori_y: None,
            ori_z: None,
        }
    }
}

impl fmt::Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Experiment(name='{}')>", self.name)
    }
}

impl fmt::Display for Experimenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Experimenter(name='{}')>", self.name)
    }
}

impl fmt::Display for Rat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Rat(name='{}')>", self.name)
    }
}

// Session and TrackingDataPoint only show their own columns here. The forms
// naming the rat, experiment and tracking object need a lookup, see
// db::describe_session and db::describe_trackingdata.
impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Session(date={}, time={})>", self.date, self.time)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Condition(name='{}')>", self.name)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Level(name='{}')>", self.name)
    }
}

impl fmt::Display for TrackingObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<TrackingObject(name='{}', system='{}')>",
            self.name,
            self.system.as_deref().unwrap_or("")
        )
    }
}

impl fmt::Display for TrackingDataPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<TrackingDataPoint(time={}, position={}, rotation={})>",
            self.time,
            self.position(),
            self.rotation()
        )
    }
}
