//! Synchronization Engine — per-tick replication.
//!
//! Runs once per simulation step. While the connection is live it mirrors
//! the controller's joint position into the mechanism and every monitored
//! signal's value into the table, joints first for a deterministic order.
//! The moment the link is gone it drops the `Connected` status to 0 and
//! does nothing else, so the twin recovers from an external disconnect on
//! the very next step.

use crate::consts::SIG_CONNECTED;
use crate::controller::transport::ControllerLink;
use crate::host::mechanism::Mechanism;
use crate::host::table::SignalTable;
use crate::mapping;

/// Execute one synchronization step.
///
/// `link` is the connection manager's current handle (read-only);
/// `mechanism` is the host-resolved mechanism binding for this tick, if
/// any. The `Connected` status output is rewritten on every call.
pub fn run_step(
    table: &mut SignalTable,
    link: Option<&dyn ControllerLink>,
    mechanism: Option<&mut dyn Mechanism>,
) {
    let Some(link) = link.filter(|l| l.is_connected()) else {
        table.try_set(SIG_CONNECTED, 0.0);
        return;
    };
    table.try_set(SIG_CONNECTED, 1.0);

    mirror_joints(link, mechanism);
    mirror_signals(table, link);
}

/// Joint mirroring: first mechanical unit, degrees → radians, fixed axis
/// order 1..=6, fast update (no kinematics pass — the engine writes every
/// tick).
fn mirror_joints(link: &dyn ControllerLink, mechanism: Option<&mut dyn Mechanism>) {
    let Some(mechanism) = mechanism else {
        return;
    };
    let Some(joints) = link.joint_degrees() else {
        return;
    };
    mechanism.set_joint_values(&mapping::joints_to_radians(&joints), false);
}

/// Signal mirroring: each monitored signal takes the value of the
/// same-named live controller signal. A signal that disappeared from the
/// controller is skipped and keeps its last mirrored value.
fn mirror_signals(table: &mut SignalTable, link: &dyn ControllerLink) {
    for name in table.monitored_names() {
        if let Some(state) = link.io_signal(&name) {
            table.try_set(&name, state.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;
    use crate::consts::{MONITOR_GROUP, SIG_CONNECTED};
    use crate::controller::types::ControllerSignalKind;
    use crate::host::signal::{IoSignal, IoSignalKind};
    use crate::sim::{SimController, SimMechanism};

    fn status_table() -> SignalTable {
        let mut table = SignalTable::new();
        table
            .add(IoSignal::new(SIG_CONNECTED, IoSignalKind::DigitalOutput))
            .unwrap();
        table
    }

    fn mirror(table: &mut SignalTable, name: &str) {
        let mut s = IoSignal::new(name, IoSignalKind::DigitalOutput);
        s.group = Some(MONITOR_GROUP.to_string());
        s.read_only = true;
        table.add(s).unwrap();
    }

    #[test]
    fn disconnected_tick_only_clears_status() {
        let mut table = status_table();
        mirror(&mut table, "DO1");
        table.try_set(SIG_CONNECTED, 1.0);
        table.try_set("DO1", 1.0);
        let mut mech = SimMechanism::default();

        run_step(&mut table, None, Some(&mut mech));

        assert_eq!(table.get(SIG_CONNECTED).unwrap().value, 0.0);
        // No mirroring happened: value and mechanism untouched.
        assert_eq!(table.get("DO1").unwrap().value, 1.0);
        assert!(mech.last_update_kinematics().is_none());
    }

    #[test]
    fn dead_link_counts_as_disconnected() {
        let ctrl = SimController::new("10.0.0.5");
        let link = ctrl.open_link();
        ctrl.set_online(false);
        let mut table = status_table();
        table.try_set(SIG_CONNECTED, 1.0);

        run_step(&mut table, Some(&link), None);
        assert_eq!(table.get(SIG_CONNECTED).unwrap().value, 0.0);
    }

    #[test]
    fn joints_are_converted_and_written_in_axis_order() {
        let ctrl = SimController::new("10.0.0.5");
        ctrl.set_joints([0.0, 90.0, -90.0, 180.0, 45.0, 0.0]);
        let link = ctrl.open_link();
        let mut table = status_table();
        let mut mech = SimMechanism::default();

        run_step(&mut table, Some(&link), Some(&mut mech));

        assert_eq!(
            mech.joint_values(),
            [0.0, PI / 2.0, -PI / 2.0, PI, PI / 4.0, 0.0]
        );
        // Fast update: the kinematics pass is skipped.
        assert_eq!(mech.last_update_kinematics(), Some(false));
        assert_eq!(table.get(SIG_CONNECTED).unwrap().value, 1.0);
    }

    #[test]
    fn controller_without_mechanical_unit_skips_joints() {
        let ctrl = SimController::new("10.0.0.5");
        let link = ctrl.open_link();
        let mut table = status_table();
        let mut mech = SimMechanism::default();

        run_step(&mut table, Some(&link), Some(&mut mech));
        assert!(mech.last_update_kinematics().is_none());
    }

    #[test]
    fn monitored_values_follow_the_controller() {
        let ctrl = SimController::new("10.0.0.5");
        ctrl.add_signal("DO1", ControllerSignalKind::DigitalOutput, 1.0);
        let link = ctrl.open_link();
        let mut table = status_table();
        mirror(&mut table, "DO1");

        run_step(&mut table, Some(&link), None);
        assert_eq!(table.get("DO1").unwrap().value, 1.0);

        ctrl.set_signal_value("DO1", 0.0);
        run_step(&mut table, Some(&link), None);
        assert_eq!(table.get("DO1").unwrap().value, 0.0);
    }

    #[test]
    fn stale_mirror_keeps_last_value() {
        let ctrl = SimController::new("10.0.0.5");
        ctrl.add_signal("DO1", ControllerSignalKind::DigitalOutput, 1.0);
        let link = ctrl.open_link();
        let mut table = status_table();
        mirror(&mut table, "DO1");

        run_step(&mut table, Some(&link), None);
        assert_eq!(table.get("DO1").unwrap().value, 1.0);

        // Source disappears upstream: the mirror stays, value frozen.
        ctrl.remove_signal("DO1");
        run_step(&mut table, Some(&link), None);
        assert!(table.contains("DO1"));
        assert_eq!(table.get("DO1").unwrap().value, 1.0);
    }
}
