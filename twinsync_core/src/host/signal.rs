//! Simulation-side I/O signal representation.

use core::fmt;

use crate::consts::MONITOR_GROUP;

// ─── IoSignalKind ───────────────────────────────────────────────────

/// Kind of a simulation-side I/O signal.
///
/// Same six-way closed enumeration the controller side uses, seen from the
/// simulation: triggers are digital inputs, the status output and every
/// mirrored signal are output kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum IoSignalKind {
    DigitalInput = 0,
    DigitalOutput = 1,
    DigitalGroupInput = 2,
    DigitalGroupOutput = 3,
    AnalogInput = 4,
    AnalogOutput = 5,
}

impl fmt::Display for IoSignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DigitalInput => write!(f, "digital_input"),
            Self::DigitalOutput => write!(f, "digital_output"),
            Self::DigitalGroupInput => write!(f, "digital_group_input"),
            Self::DigitalGroupOutput => write!(f, "digital_group_output"),
            Self::AnalogInput => write!(f, "analog_input"),
            Self::AnalogOutput => write!(f, "analog_output"),
        }
    }
}

// ─── IoSignal ───────────────────────────────────────────────────────

/// One signal in the component's signal collection.
///
/// Identity is the name, unique within the owning [`SignalTable`]. The
/// `read_only` flag guards the external write path only; the internal
/// mirror/status path bypasses it.
///
/// [`SignalTable`]: super::table::SignalTable
#[derive(Debug, Clone, PartialEq)]
pub struct IoSignal {
    pub name: String,
    pub kind: IoSignalKind,
    /// Group tag. Mirrored signals carry [`MONITOR_GROUP`]; the fixed
    /// command/status signals carry none.
    pub group: Option<String>,
    /// Rejects writes arriving through the external (host/user) path.
    pub read_only: bool,
    pub value: f64,
}

impl IoSignal {
    /// Create a writable, ungrouped signal with value 0.
    pub fn new(name: impl Into<String>, kind: IoSignalKind) -> Self {
        Self {
            name: name.into(),
            kind,
            group: None,
            read_only: false,
            value: 0.0,
        }
    }

    /// Whether this signal belongs to the "Signal Monitoring" group.
    #[inline]
    pub fn is_monitored(&self) -> bool {
        self.group.as_deref() == Some(MONITOR_GROUP)
    }
}
