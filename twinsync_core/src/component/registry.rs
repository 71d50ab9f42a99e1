//! Signal Registry — the dynamic mirrored-signal set.
//!
//! Mirrored signals live in the component's [`SignalTable`] under the
//! "Signal Monitoring" group. Every mutating operation here detaches the
//! table from its library template before touching the signal set, so
//! callers cannot forget the detach step.
//!
//! Failures are typed so tests can assert why nothing happened; the
//! component's command dispatch downgrades all of them to silent no-ops.

use thiserror::Error;

use crate::consts::MONITOR_GROUP;
use crate::controller::transport::ControllerLink;
use crate::host::signal::IoSignal;
use crate::host::table::SignalTable;
use crate::mapping;

// ─── Error Types ────────────────────────────────────────────────────

/// Why an add request left the mirrored set unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddSignalError {
    #[error("signal name is empty")]
    EmptyName,
    #[error("not connected to a controller")]
    NotConnected,
    /// The controller has no live signal with this name.
    #[error("controller has no signal named '{0}'")]
    UnknownControllerSignal(String),
    /// A signal with this name already exists in the table (mirrored or
    /// fixed); adding the same name twice is a no-op.
    #[error("signal '{0}' already exists")]
    DuplicateName(String),
}

/// Why a remove request left the mirrored set unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoveSignalError {
    #[error("signal name is empty")]
    EmptyName,
    /// No signal with this name inside the "Signal Monitoring" group.
    /// Same-named signals in other groups are never touched.
    #[error("no mirrored signal named '{0}'")]
    NotMirrored(String),
}

// ─── Operations ─────────────────────────────────────────────────────

/// Mirror the controller signal named `name`.
///
/// Looks the signal up live on the controller, derives the mirrored kind
/// from its controller kind, and inserts a read-only signal tagged
/// "Signal Monitoring" with value 0 — the first tick after insertion
/// syncs the value.
///
/// # Errors
/// `EmptyName`, `NotConnected`, `UnknownControllerSignal`, or
/// `DuplicateName`; the table is untouched on every error path.
pub fn add_mirrored_signal(
    table: &mut SignalTable,
    link: Option<&dyn ControllerLink>,
    name: &str,
) -> Result<(), AddSignalError> {
    if name.is_empty() {
        return Err(AddSignalError::EmptyName);
    }
    let link = link
        .filter(|l| l.is_connected())
        .ok_or(AddSignalError::NotConnected)?;
    if table.contains(name) {
        return Err(AddSignalError::DuplicateName(name.to_string()));
    }
    let state = link
        .io_signal(name)
        .ok_or_else(|| AddSignalError::UnknownControllerSignal(name.to_string()))?;

    table.unlink_from_library();
    let mut signal = IoSignal::new(name, mapping::mirrored_kind(state.kind));
    signal.group = Some(MONITOR_GROUP.to_string());
    signal.read_only = true;
    table
        .add(signal)
        .map_err(|_| AddSignalError::DuplicateName(name.to_string()))
}

/// Remove the mirrored signal named `name`.
///
/// Only signals inside the "Signal Monitoring" group qualify; a
/// same-named signal in another group is left alone.
pub fn remove_mirrored_signal(
    table: &mut SignalTable,
    name: &str,
) -> Result<(), RemoveSignalError> {
    if name.is_empty() {
        return Err(RemoveSignalError::EmptyName);
    }
    if !table.get(name).is_some_and(IoSignal::is_monitored) {
        return Err(RemoveSignalError::NotMirrored(name.to_string()));
    }
    table.unlink_from_library();
    table.remove(name);
    Ok(())
}

/// Remove every mirrored signal.
///
/// Collects the monitored names first and mutates afterwards — the table
/// is never modified while its signal list is being walked. Returns the
/// removed names.
pub fn remove_all_mirrored_signals(table: &mut SignalTable) -> Vec<String> {
    let names = table.monitored_names();
    table.unlink_from_library();
    for name in &names {
        table.remove(name);
    }
    names
}
