//! Digital-twin component shell.
//!
//! [`TwinComponent`] ties the pieces together behind the callback surface
//! the host runtime drives: property edits, signal-edge dispatch, session
//! start/stop, and the per-tick step. One component instance owns one
//! controller connection, one signal table, and mirrors into at most one
//! mechanism.
//!
//! # Callback contract
//!
//! The host guarantees serial invocation — the component is never
//! re-entered concurrently. Trigger commands run inside
//! [`TwinComponent::write_signal`]; the simulation clock drives
//! [`TwinComponent::on_simulation_step`].

use thiserror::Error;
use tracing::{debug, info, warn};

pub mod command;
pub mod connection;
pub mod registry;
pub mod sync;

use crate::consts::{
    PROP_IO_SIGNAL_NAME, PROP_IP_ADRESS, SIG_ADD_IO_SIGNAL, SIG_CONNECT, SIG_CONNECTED,
    SIG_DISCONNECT, SIG_REMOVE_IO_SIGNAL, SIG_REMOVE_IO_SIGNAL_ALL, STRUCTURAL_TRIGGERS,
};
use crate::controller::transport::ControllerTransport;
use crate::host::mechanism::Mechanism;
use crate::host::signal::{IoSignal, IoSignalKind};
use crate::host::table::{SignalTable, SignalWriteError};
use command::Command;
use connection::ConnectionManager;

/// Property access error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("unknown property '{0}'")]
    Unknown(String),
}

/// One digital-twin component instance.
pub struct TwinComponent {
    connection: ConnectionManager,
    signals: SignalTable,
    /// `IpAdress` property.
    ip_address: String,
    /// `IoSignalName` property.
    io_signal_name: String,
}

impl TwinComponent {
    /// Create a component with the fixed signal surface and empty
    /// configuration properties.
    pub fn new(transport: Box<dyn ControllerTransport>) -> Self {
        let mut signals = SignalTable::new();
        for name in [
            SIG_CONNECT,
            SIG_DISCONNECT,
            SIG_ADD_IO_SIGNAL,
            SIG_REMOVE_IO_SIGNAL,
            SIG_REMOVE_IO_SIGNAL_ALL,
        ] {
            let _ = signals.add(IoSignal::new(name, IoSignalKind::DigitalInput));
        }
        let _ = signals.add(IoSignal::new(SIG_CONNECTED, IoSignalKind::DigitalOutput));
        debug_assert_eq!(signals.len(), 6);

        Self {
            connection: ConnectionManager::new(transport),
            signals,
            ip_address: String::new(),
            io_signal_name: String::new(),
        }
    }

    // ─── Properties ─────────────────────────────────────────────────

    /// Set a configuration property by its wire-level name.
    ///
    /// # Errors
    /// `Unknown` for names outside the property surface (the `Mechanism`
    /// reference is resolved by the host and passed into each tick, so it
    /// is not settable here).
    pub fn set_property(&mut self, name: &str, value: &str) -> Result<(), PropertyError> {
        match name {
            PROP_IP_ADRESS => self.ip_address = value.to_string(),
            PROP_IO_SIGNAL_NAME => self.io_signal_name = value.to_string(),
            _ => return Err(PropertyError::Unknown(name.to_string())),
        }
        Ok(())
    }

    /// Read a configuration property by its wire-level name.
    pub fn property(&self, name: &str) -> Option<&str> {
        match name {
            PROP_IP_ADRESS => Some(&self.ip_address),
            PROP_IO_SIGNAL_NAME => Some(&self.io_signal_name),
            _ => None,
        }
    }

    // ─── Signal surface ─────────────────────────────────────────────

    /// The component's signal collection (fixed surface plus mirrors).
    pub fn signals(&self) -> &SignalTable {
        &self.signals
    }

    /// True while the controller connection is live.
    pub fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    /// Host write path: update a signal value and dispatch the edge.
    ///
    /// A rising edge (value == 1) on one of the five trigger signals runs
    /// the matching command. Edges on "Signal Monitoring" signals never
    /// dispatch — that is how the engine's own mirrored outputs are told
    /// apart from real commands.
    ///
    /// # Errors
    /// `NotFound`/`ReadOnly` from the table; a rejected write dispatches
    /// nothing.
    pub fn write_signal(&mut self, name: &str, value: f64) -> Result<(), SignalWriteError> {
        if self.signals.get(name).is_some_and(IoSignal::is_monitored) {
            // Mirrored signals never dispatch; the table still decides
            // whether the write itself is legal.
            return self.signals.write(name, value);
        }
        self.signals.write(name, value)?;
        if value == 1.0 {
            if let Some(cmd) = Command::from_signal_name(name) {
                self.run_command(cmd);
            }
        }
        Ok(())
    }

    // ─── Session lifecycle ──────────────────────────────────────────

    /// Session start: lock the structural triggers so the mirrored set
    /// cannot change while the simulation runs.
    pub fn on_simulation_start(&mut self) {
        for name in STRUCTURAL_TRIGGERS {
            self.signals.set_read_only(name, true);
        }
    }

    /// Session stop: unlock the structural triggers.
    pub fn on_simulation_stop(&mut self) {
        for name in STRUCTURAL_TRIGGERS {
            self.signals.set_read_only(name, false);
        }
    }

    /// One simulation tick.
    ///
    /// Releases a connection that died externally, then runs the
    /// synchronization engine gated on the (re-checked) connection state.
    pub fn on_simulation_step(&mut self, mechanism: Option<&mut dyn Mechanism>) {
        if self.connection.prune_dead_link() {
            warn!("controller connection lost, twin marked disconnected");
        }
        sync::run_step(&mut self.signals, self.connection.link(), mechanism);
    }

    // ─── Command handlers ───────────────────────────────────────────

    fn run_command(&mut self, command: Command) {
        match command {
            Command::Connect => self.handle_connect(),
            Command::Disconnect => self.handle_disconnect(),
            Command::AddIoSignal => self.handle_add_signal(),
            Command::RemoveIoSignal => self.handle_remove_signal(),
            Command::RemoveIoSignalAll => self.handle_remove_all_signals(),
        }
    }

    fn handle_connect(&mut self) {
        // Drop the status first so observers never see a stale
        // "connected" during the attempt.
        self.signals.try_set(SIG_CONNECTED, 0.0);
        match self.connection.connect(&self.ip_address) {
            Ok(()) => {
                self.signals.try_set(SIG_CONNECTED, 1.0);
                info!(address = %self.ip_address, "connected to controller");
            }
            Err(err) => {
                debug!(address = %self.ip_address, %err, "connect attempt failed");
            }
        }
    }

    fn handle_disconnect(&mut self) {
        self.connection.disconnect();
        self.signals.try_set(SIG_CONNECTED, 0.0);
        info!("disconnected from controller");
    }

    fn handle_add_signal(&mut self) {
        match registry::add_mirrored_signal(
            &mut self.signals,
            self.connection.link(),
            &self.io_signal_name,
        ) {
            Ok(()) => info!(signal = %self.io_signal_name, "mirroring controller signal"),
            Err(err) => debug!(signal = %self.io_signal_name, %err, "add signal ignored"),
        }
    }

    fn handle_remove_signal(&mut self) {
        match registry::remove_mirrored_signal(&mut self.signals, &self.io_signal_name) {
            Ok(()) => info!(signal = %self.io_signal_name, "mirrored signal removed"),
            Err(err) => debug!(signal = %self.io_signal_name, %err, "remove signal ignored"),
        }
    }

    fn handle_remove_all_signals(&mut self) {
        let removed = registry::remove_all_mirrored_signals(&mut self.signals);
        info!(count = removed.len(), "mirrored signals removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::types::ControllerSignalKind;
    use crate::sim::{SimController, SimTransport};

    fn component_with(ctrl: &SimController) -> TwinComponent {
        TwinComponent::new(Box::new(SimTransport::new(vec![ctrl.clone()])))
    }

    fn pulse(component: &mut TwinComponent, name: &str) {
        component.write_signal(name, 1.0).unwrap();
        component.write_signal(name, 0.0).unwrap();
    }

    #[test]
    fn fixed_surface_is_complete() {
        let ctrl = SimController::new("10.0.0.5");
        let component = component_with(&ctrl);
        for name in [
            SIG_CONNECT,
            SIG_DISCONNECT,
            SIG_ADD_IO_SIGNAL,
            SIG_REMOVE_IO_SIGNAL,
            SIG_REMOVE_IO_SIGNAL_ALL,
            SIG_CONNECTED,
        ] {
            assert!(component.signals().contains(name), "missing {name}");
        }
        assert_eq!(component.signals().len(), 6);
    }

    #[test]
    fn unknown_property_is_rejected() {
        let ctrl = SimController::new("10.0.0.5");
        let mut component = component_with(&ctrl);
        component.set_property(PROP_IP_ADRESS, "10.0.0.5").unwrap();
        assert_eq!(component.property(PROP_IP_ADRESS), Some("10.0.0.5"));
        assert_eq!(
            component.set_property("Mechanism", "Robot1"),
            Err(PropertyError::Unknown("Mechanism".to_string()))
        );
    }

    #[test]
    fn connect_pulse_sets_status() {
        let ctrl = SimController::new("10.0.0.5");
        let mut component = component_with(&ctrl);
        component.set_property(PROP_IP_ADRESS, "10.0.0.5").unwrap();

        pulse(&mut component, SIG_CONNECT);
        assert!(component.is_connected());
        assert_eq!(component.signals().get(SIG_CONNECTED).unwrap().value, 1.0);
    }

    #[test]
    fn failed_connect_is_externally_silent() {
        let ctrl = SimController::new("10.0.0.5");
        let mut component = component_with(&ctrl);
        component.set_property(PROP_IP_ADRESS, "10.9.9.9").unwrap();

        pulse(&mut component, SIG_CONNECT);
        assert!(!component.is_connected());
        assert_eq!(component.signals().get(SIG_CONNECTED).unwrap().value, 0.0);
    }

    #[test]
    fn falling_edge_dispatches_nothing() {
        let ctrl = SimController::new("10.0.0.5");
        let mut component = component_with(&ctrl);
        component.set_property(PROP_IP_ADRESS, "10.0.0.5").unwrap();

        component.write_signal(SIG_CONNECT, 0.0).unwrap();
        assert!(!component.is_connected());
    }

    #[test]
    fn session_locks_structural_triggers_only() {
        let ctrl = SimController::new("10.0.0.5");
        let mut component = component_with(&ctrl);

        component.on_simulation_start();
        for name in STRUCTURAL_TRIGGERS {
            assert!(component.signals().get(name).unwrap().read_only);
            assert_eq!(
                component.write_signal(name, 1.0),
                Err(SignalWriteError::ReadOnly(name.to_string()))
            );
        }
        // Connect/Disconnect stay writable during the session.
        assert!(!component.signals().get(SIG_CONNECT).unwrap().read_only);
        assert!(!component.signals().get(SIG_DISCONNECT).unwrap().read_only);

        component.on_simulation_stop();
        for name in STRUCTURAL_TRIGGERS {
            assert!(!component.signals().get(name).unwrap().read_only);
        }
    }

    #[test]
    fn monitored_signal_edge_never_dispatches() {
        let ctrl = SimController::new("10.0.0.5");
        ctrl.add_signal("DO1", ControllerSignalKind::DigitalOutput, 0.0);
        let mut component = component_with(&ctrl);
        component.set_property(PROP_IP_ADRESS, "10.0.0.5").unwrap();
        pulse(&mut component, SIG_CONNECT);
        component.set_property(PROP_IO_SIGNAL_NAME, "DO1").unwrap();
        pulse(&mut component, SIG_ADD_IO_SIGNAL);

        // Mirrored signals reject external writes, so no edge can be
        // produced on them from outside in the first place.
        assert_eq!(
            component.write_signal("DO1", 1.0),
            Err(SignalWriteError::ReadOnly("DO1".to_string()))
        );
    }
}
