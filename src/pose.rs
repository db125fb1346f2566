//! Grouped views over the flat tracking columns: position, rotation (Euler
//! and quaternion) and orientation. Nothing here is stored on its own.
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
 *   pose.rs - position / rotation / orientation groupings
 *
 */

use crate::models::{NewTrackingDataPoint, TrackingDataPoint};
use std::fmt;

/// Position of a tracked object. Always present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Euler rotation. Each component may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationEuler {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationQuaternion {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub w: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl From<(f64, f64, f64)> for Position {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Position { x, y, z }
    }
}

impl From<(f64, f64, f64)> for RotationEuler {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        RotationEuler { x: Some(x), y: Some(y), z: Some(z) }
    }
}

impl From<(f64, f64, f64, f64)> for RotationQuaternion {
    fn from((x, y, z, w): (f64, f64, f64, f64)) -> Self {
        RotationQuaternion { x: Some(x), y: Some(y), z: Some(z), w: Some(w) }
    }
}

impl From<(f64, f64, f64)> for Orientation {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Orientation { x: Some(x), y: Some(y), z: Some(z) }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl fmt::Display for RotationEuler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: Option<f64>| v.map_or(String::from("None"), |v| v.to_string());
        write!(f, "({}, {}, {})", show(self.x), show(self.y), show(self.z))
    }
}

/// Read and write the grouped views of a tracking row.
pub trait Pose {
    fn position(&self) -> Position;
    fn rotation(&self) -> RotationEuler;
    fn rotation_quaternion(&self) -> RotationQuaternion;
    fn orientation(&self) -> Orientation;

    fn set_position(&mut self, value: Position);
    fn set_rotation(&mut self, value: RotationEuler);
    fn set_rotation_quaternion(&mut self, value: RotationQuaternion);
    fn set_orientation(&mut self, value: Orientation);
}

// Both row types carry the same flat columns.
macro_rules! impl_pose {
    ($t:ty) => {
        impl Pose for $t {
            fn position(&self) -> Position {
                Position { x: self.x, y: self.y, z: self.z }
            }

            fn rotation(&self) -> RotationEuler {
                RotationEuler { x: self.rot_x, y: self.rot_y, z: self.rot_z }
            }

            fn rotation_quaternion(&self) -> RotationQuaternion {
                RotationQuaternion {
                    x: self.rot_qx,
                    y: self.rot_qy,
                    z: self.rot_qz,
                    w: self.rot_qw,
                }
            }

            fn orientation(&self) -> Orientation {
                Orientation { x: self.ori_x, y: self.ori_y, z: self.ori_z }
            }

            fn set_position(&mut self, value: Position) {
                self.x = value.x;
                self.y = value.y;
                self.z = value.z;
            }

            fn set_rotation(&mut self, value: RotationEuler) {
                self.rot_x = value.x;
                self.rot_y = value.y;
                self.rot_z = value.z;
            }

            fn set_rotation_quaternion(&mut self, value: RotationQuaternion) {
                self.rot_qx = value.x;
                self.rot_qy = value.y;
                self.rot_qz = value.z;
                self.rot_qw = value.w;
            }

            fn set_orientation(&mut self, value: Orientation) {
                self.ori_x = value.x;
                self.ori_y = value.y;
                self.ori_z = value.z;
            }
        }
    };
}

impl_pose!(TrackingDataPoint);
impl_pose!(NewTrackingDataPoint);
