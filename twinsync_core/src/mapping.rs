//! Pure mapping helpers.
//!
//! Controller signal kinds map onto mirrored (simulation-side) kinds, and
//! controller joint angles map from degrees to simulation radians. Both
//! are total functions — wrong axis order or a wrong unit here silently
//! breaks the twin, so everything in this module is covered by exact
//! round-trip tests.

use std::f64::consts::PI;

use crate::consts::ROBOT_AXES;
use crate::controller::types::{ControllerSignalKind, JointDegrees};
use crate::host::signal::IoSignalKind;

/// Mirrored kind for a controller signal.
///
/// Mirrors are always output kinds on the simulation side: the twin
/// re-publishes controller state, regardless of the signal's direction
/// on the controller.
pub fn mirrored_kind(kind: ControllerSignalKind) -> IoSignalKind {
    match kind {
        ControllerSignalKind::DigitalInput | ControllerSignalKind::DigitalOutput => {
            IoSignalKind::DigitalOutput
        }
        ControllerSignalKind::GroupInput | ControllerSignalKind::GroupOutput => {
            IoSignalKind::DigitalGroupOutput
        }
        ControllerSignalKind::AnalogInput | ControllerSignalKind::AnalogOutput => {
            IoSignalKind::AnalogOutput
        }
    }
}

/// Controller joint angle \[deg\] → simulation angle \[rad\].
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Convert a full joint position, preserving axis order 1..=6.
pub fn joints_to_radians(joints: &JointDegrees) -> [f64; ROBOT_AXES] {
    joints.axes.map(degrees_to_radians)
}
