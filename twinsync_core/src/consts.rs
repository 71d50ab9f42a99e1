//! System-wide constants for the twinsync workspace.
//!
//! Single source of truth for the fixed joint model and the wire-level
//! signal/property names the host dispatches against. Imported by all
//! crates — no duplication permitted.

/// Number of joints in the mirrored mechanism (fixed six-axis model).
pub const ROBOT_AXES: usize = 6;

/// Group tag that separates dynamically mirrored signals from the fixed
/// command/status surface. Edges on signals in this group never dispatch
/// a command.
pub const MONITOR_GROUP: &str = "Signal Monitoring";

// ─── Trigger Signals ────────────────────────────────────────────────

/// Rising edge initiates a connect attempt against `IpAdress`.
pub const SIG_CONNECT: &str = "Connect";

/// Rising edge releases the controller connection.
pub const SIG_DISCONNECT: &str = "Disconnect";

/// Rising edge mirrors the controller signal named by `IoSignalName`.
pub const SIG_ADD_IO_SIGNAL: &str = "AddIoSignal";

/// Rising edge removes the mirrored signal named by `IoSignalName`.
pub const SIG_REMOVE_IO_SIGNAL: &str = "RemoveIoSignal";

/// Rising edge removes every mirrored signal.
pub const SIG_REMOVE_IO_SIGNAL_ALL: &str = "RemoveIoSignalAll";

// ─── Status Output ──────────────────────────────────────────────────

/// 1 while the controller connection is live, 0 otherwise. The component
/// is the sole writer.
pub const SIG_CONNECTED: &str = "Connected";

// ─── Configuration Properties ───────────────────────────────────────

/// Target controller address. The historical spelling is part of the
/// wire contract.
pub const PROP_IP_ADRESS: &str = "IpAdress";

/// Signal name argument for the add/remove triggers.
pub const PROP_IO_SIGNAL_NAME: &str = "IoSignalName";

/// The structural triggers locked while a simulation session is active.
pub const STRUCTURAL_TRIGGERS: [&str; 3] = [
    SIG_ADD_IO_SIGNAL,
    SIG_REMOVE_IO_SIGNAL,
    SIG_REMOVE_IO_SIGNAL_ALL,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_are_consistent() {
        assert!(ROBOT_AXES == 6);
        assert!(!MONITOR_GROUP.is_empty());
        // The structural triggers are a subset of the trigger signals and
        // never include the connection pair.
        assert!(!STRUCTURAL_TRIGGERS.contains(&SIG_CONNECT));
        assert!(!STRUCTURAL_TRIGGERS.contains(&SIG_DISCONNECT));
        assert!(STRUCTURAL_TRIGGERS.contains(&SIG_ADD_IO_SIGNAL));
    }
}
