//! Prelude module for common re-exports.
//!
//! `use twinsync_core::prelude::*;` pulls in the types most consumers
//! need without listing individual paths.

// ─── Component ──────────────────────────────────────────────────────
pub use crate::component::TwinComponent;
pub use crate::component::connection::{ConnectError, ConnectionManager};
pub use crate::component::registry::{AddSignalError, RemoveSignalError};

// ─── Controller seams ───────────────────────────────────────────────
pub use crate::controller::{
    ControllerDescriptor, ControllerLink, ControllerSignalKind, ControllerTransport,
    JointDegrees, SignalState, TransportError,
};

// ─── Host model ─────────────────────────────────────────────────────
pub use crate::host::{
    IoSignal, IoSignalKind, Mechanism, SignalTable, SignalTableError, SignalWriteError,
};

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LogLevel, SharedConfig};

// ─── Constants ──────────────────────────────────────────────────────
pub use crate::consts::{MONITOR_GROUP, ROBOT_AXES};
