//! Host-side simulation model.
//!
//! The simulation runtime owns the component's I/O signal collection and
//! the mechanism the twin drives. This module holds the signal model
//! ([`IoSignal`], [`SignalTable`]) and the [`Mechanism`] seam; the host
//! itself (clock, event dispatch, serialization) stays outside the core.

pub mod mechanism;
pub mod signal;
pub mod table;

pub use mechanism::Mechanism;
pub use signal::{IoSignal, IoSignalKind};
pub use table::{SignalTable, SignalTableError, SignalWriteError};
