//! Data types returned by controller queries.
//!
//! `ControllerSignalKind` is the closed six-way enumeration of electrical
//! signal types a controller exposes; the mirrored-kind mapping over it
//! lives in [`crate::mapping`].

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::consts::ROBOT_AXES;

// ─── ControllerSignalKind ───────────────────────────────────────────

/// Electrical/logical type of a controller I/O signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ControllerSignalKind {
    DigitalInput = 0,
    DigitalOutput = 1,
    GroupInput = 2,
    GroupOutput = 3,
    AnalogInput = 4,
    AnalogOutput = 5,
}

impl ControllerSignalKind {
    /// Convert from raw `u8`. Returns `None` for invalid values.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::DigitalInput),
            1 => Some(Self::DigitalOutput),
            2 => Some(Self::GroupInput),
            3 => Some(Self::GroupOutput),
            4 => Some(Self::AnalogInput),
            5 => Some(Self::AnalogOutput),
            _ => None,
        }
    }
}

impl fmt::Display for ControllerSignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DigitalInput => write!(f, "digital_input"),
            Self::DigitalOutput => write!(f, "digital_output"),
            Self::GroupInput => write!(f, "group_input"),
            Self::GroupOutput => write!(f, "group_output"),
            Self::AnalogInput => write!(f, "analog_input"),
            Self::AnalogOutput => write!(f, "analog_output"),
        }
    }
}

impl FromStr for ControllerSignalKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "digital_input" => Ok(Self::DigitalInput),
            "digital_output" => Ok(Self::DigitalOutput),
            "group_input" => Ok(Self::GroupInput),
            "group_output" => Ok(Self::GroupOutput),
            "analog_input" => Ok(Self::AnalogInput),
            "analog_output" => Ok(Self::AnalogOutput),
            _ => Err(format!("unknown ControllerSignalKind: {s:?}")),
        }
    }
}

// ─── SignalState ────────────────────────────────────────────────────

/// Snapshot of a controller signal at query time.
///
/// Values use a single `f64` carrier: digital signals are 0/1, group
/// signals hold the group's integer value, analog signals the scaled
/// engineering value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalState {
    pub kind: ControllerSignalKind,
    pub value: f64,
}

// ─── JointDegrees ───────────────────────────────────────────────────

/// Six-axis joint position of a mechanical unit, in controller units
/// (degrees). Axis order is fixed 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JointDegrees {
    pub axes: [f64; ROBOT_AXES],
}

impl From<[f64; ROBOT_AXES]> for JointDegrees {
    fn from(axes: [f64; ROBOT_AXES]) -> Self {
        Self { axes }
    }
}
