//! In-process simulated controller backend.
//!
//! [`SimController`] emulates a reachable controller with a mutable
//! signal set and joint position; [`SimTransport`] implements the
//! discovery/connect seam over a set of them. This lets the full
//! component run in headless tests and in the monitor binary without any
//! real controller on the network.
//!
//! Handles are cheap clones sharing one state cell, so a test can keep a
//! [`SimController`] clone and mutate signals, joints, or the online flag
//! after the transport has been moved into the component.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::consts::ROBOT_AXES;
use crate::controller::transport::{
    ControllerDescriptor, ControllerLink, ControllerTransport, TransportError,
};
use crate::controller::types::{ControllerSignalKind, JointDegrees, SignalState};
use crate::host::mechanism::Mechanism;

// ─── Controller state ───────────────────────────────────────────────

#[derive(Debug)]
struct ControllerState {
    /// Appears in discovery scans.
    discoverable: bool,
    /// Accepts sessions and reports connected on live links.
    online: bool,
    signals: HashMap<String, SignalState>,
    /// Joint position of the (single) mechanical unit, if the controller
    /// has one.
    joints_deg: Option<[f64; ROBOT_AXES]>,
}

/// One simulated controller.
#[derive(Clone)]
pub struct SimController {
    descriptor: ControllerDescriptor,
    state: Arc<Mutex<ControllerState>>,
}

impl SimController {
    /// Create a discoverable, online controller at `address` with no
    /// signals and no mechanical unit.
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();
        Self {
            descriptor: ControllerDescriptor {
                system_name: format!("sim-{address}"),
                address,
            },
            state: Arc::new(Mutex::new(ControllerState {
                discoverable: true,
                online: true,
                signals: HashMap::new(),
                joints_deg: None,
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, ControllerState> {
        // Single-threaded host model; tolerate a poisoned lock anyway.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Scan descriptor for this controller.
    pub fn descriptor(&self) -> ControllerDescriptor {
        self.descriptor.clone()
    }

    /// Open a link directly, bypassing the transport. Test convenience.
    pub fn open_link(&self) -> SimLink {
        SimLink {
            state: Arc::clone(&self.state),
        }
    }

    /// Define or redefine a signal.
    pub fn add_signal(&self, name: impl Into<String>, kind: ControllerSignalKind, value: f64) {
        self.state()
            .signals
            .insert(name.into(), SignalState { kind, value });
    }

    /// Update a signal's value. Unknown names are ignored.
    pub fn set_signal_value(&self, name: &str, value: f64) {
        if let Some(signal) = self.state().signals.get_mut(name) {
            signal.value = value;
        }
    }

    /// Delete a signal, as if removed from the controller configuration.
    pub fn remove_signal(&self, name: &str) {
        self.state().signals.remove(name);
    }

    /// Give the controller a mechanical unit at this joint position \[deg\].
    pub fn set_joints(&self, joints_deg: [f64; ROBOT_AXES]) {
        self.state().joints_deg = Some(joints_deg);
    }

    /// Sessions live/die with this flag: false makes existing links
    /// report not-connected and new connects come back rejected.
    pub fn set_online(&self, online: bool) {
        self.state().online = online;
    }

    /// Whether the controller answers discovery scans.
    pub fn set_discoverable(&self, discoverable: bool) {
        self.state().discoverable = discoverable;
    }
}

// ─── Link ───────────────────────────────────────────────────────────

/// Live link into a [`SimController`].
pub struct SimLink {
    state: Arc<Mutex<ControllerState>>,
}

impl SimLink {
    fn state(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ControllerLink for SimLink {
    fn is_connected(&self) -> bool {
        self.state().online
    }

    fn io_signal(&self, name: &str) -> Option<SignalState> {
        self.state().signals.get(name).copied()
    }

    fn joint_degrees(&self) -> Option<JointDegrees> {
        self.state().joints_deg.map(JointDegrees::from)
    }
}

// ─── Transport ──────────────────────────────────────────────────────

/// Discovery/connect seam over a set of simulated controllers.
pub struct SimTransport {
    controllers: Vec<SimController>,
}

impl SimTransport {
    pub fn new(controllers: Vec<SimController>) -> Self {
        Self { controllers }
    }
}

impl ControllerTransport for SimTransport {
    fn scan(&mut self) -> Vec<ControllerDescriptor> {
        self.controllers
            .iter()
            .filter(|c| c.state().discoverable)
            .map(|c| c.descriptor())
            .collect()
    }

    fn connect_standalone(
        &mut self,
        descriptor: &ControllerDescriptor,
    ) -> Result<Box<dyn ControllerLink>, TransportError> {
        let controller = self
            .controllers
            .iter()
            .find(|c| c.descriptor.address == descriptor.address)
            .ok_or_else(|| TransportError {
                address: descriptor.address.clone(),
                reason: "descriptor no longer reachable".to_string(),
            })?;
        Ok(Box::new(controller.open_link()))
    }
}

// ─── Mechanism ──────────────────────────────────────────────────────

/// Simulated six-joint mechanism recording the last joint write.
#[derive(Debug, Default, Clone)]
pub struct SimMechanism {
    joints: [f64; ROBOT_AXES],
    last_update_kinematics: Option<bool>,
}

impl SimMechanism {
    /// `update_kinematics` flag of the most recent joint write, if any.
    pub fn last_update_kinematics(&self) -> Option<bool> {
        self.last_update_kinematics
    }
}

impl Mechanism for SimMechanism {
    fn set_joint_values(&mut self, joints: &[f64; ROBOT_AXES], update_kinematics: bool) {
        self.joints = *joints;
        self.last_update_kinematics = Some(update_kinematics);
    }

    fn joint_values(&self) -> [f64; ROBOT_AXES] {
        self.joints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_lists_only_discoverable_controllers() {
        let a = SimController::new("10.0.0.1");
        let b = SimController::new("10.0.0.2");
        b.set_discoverable(false);
        let mut transport = SimTransport::new(vec![a, b]);

        let descriptors = transport.scan();
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].address, "10.0.0.1");
    }

    #[test]
    fn offline_controller_still_scans_but_rejects_sessions() {
        let ctrl = SimController::new("10.0.0.1");
        ctrl.set_online(false);
        let mut transport = SimTransport::new(vec![ctrl.clone()]);

        let descriptors = transport.scan();
        assert_eq!(descriptors.len(), 1);
        let link = transport.connect_standalone(&descriptors[0]).unwrap();
        assert!(!link.is_connected());

        ctrl.set_online(true);
        assert!(link.is_connected());
    }

    #[test]
    fn link_sees_live_signal_mutations() {
        let ctrl = SimController::new("10.0.0.1");
        ctrl.add_signal("DO1", ControllerSignalKind::DigitalOutput, 0.0);
        let link = ctrl.open_link();

        ctrl.set_signal_value("DO1", 1.0);
        assert_eq!(link.io_signal("DO1").unwrap().value, 1.0);

        ctrl.remove_signal("DO1");
        assert!(link.io_signal("DO1").is_none());
    }

    #[test]
    fn joint_query_requires_a_mechanical_unit() {
        let ctrl = SimController::new("10.0.0.1");
        let link = ctrl.open_link();
        assert!(link.joint_degrees().is_none());

        ctrl.set_joints([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(
            link.joint_degrees().unwrap().axes,
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        );
    }
}
