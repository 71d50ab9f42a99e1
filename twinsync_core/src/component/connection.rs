//! Connection Manager — owns the single controller connection.
//!
//! Exactly one optional link per component instance. The manager is the
//! only writer of the link; the registry and the sync engine read it
//! through [`ConnectionManager::link`]. Connection state is re-evaluated
//! on every query, never cached past one check.

use thiserror::Error;

use crate::controller::transport::{ControllerLink, ControllerTransport, TransportError};

/// Why a connect attempt left the system disconnected.
///
/// Typed internally so tests can assert the reason; the component's
/// command dispatch swallows all variants and only the `Connected`
/// status output is visible externally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// No discovered controller matches the target address.
    #[error("no controller found at '{address}'")]
    NoMatch { address: String },
    /// The controller was reached but the resulting handle reports
    /// not-connected; the handle has been discarded.
    #[error("controller at '{address}' rejected the connection")]
    Rejected { address: String },
    /// Transport-level failure during connect.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Owner of the controller transport and the single optional link.
pub struct ConnectionManager {
    transport: Box<dyn ControllerTransport>,
    link: Option<Box<dyn ControllerLink>>,
}

impl ConnectionManager {
    pub fn new(transport: Box<dyn ControllerTransport>) -> Self {
        Self {
            transport,
            link: None,
        }
    }

    /// Scan, match `target_address` by exact string equality against the
    /// discovered descriptors, and attempt a standalone connection to the
    /// first match.
    ///
    /// Any previously held link is dropped at the start of the attempt,
    /// so a failed connect always leaves the manager without a handle.
    /// No retry is attempted — retry is the caller's re-trigger.
    ///
    /// # Errors
    /// `NoMatch`, `Rejected`, or `Transport`; all leave the manager
    /// disconnected.
    pub fn connect(&mut self, target_address: &str) -> Result<(), ConnectError> {
        self.link = None;

        let descriptors = self.transport.scan();
        let Some(descriptor) = descriptors.iter().find(|d| d.address == target_address) else {
            return Err(ConnectError::NoMatch {
                address: target_address.to_string(),
            });
        };

        let link = self.transport.connect_standalone(descriptor)?;
        if link.is_connected() {
            self.link = Some(link);
            Ok(())
        } else {
            Err(ConnectError::Rejected {
                address: target_address.to_string(),
            })
        }
    }

    /// Release the link if one exists. Idempotent.
    pub fn disconnect(&mut self) {
        self.link = None;
    }

    /// True only if a link exists and it currently reports connected.
    pub fn is_connected(&self) -> bool {
        self.link.as_ref().is_some_and(|l| l.is_connected())
    }

    /// Read-only access to the link for the registry and the engine.
    pub fn link(&self) -> Option<&dyn ControllerLink> {
        self.link.as_deref()
    }

    /// Drop a link that has stopped reporting connected.
    ///
    /// Called by the per-tick engine so an externally lost connection is
    /// released on the next step. Returns whether a dead link was dropped.
    pub fn prune_dead_link(&mut self) -> bool {
        if self.link.as_ref().is_some_and(|l| !l.is_connected()) {
            self.link = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::types::ControllerSignalKind;
    use crate::sim::{SimController, SimTransport};

    fn manager_with(controller: &SimController) -> ConnectionManager {
        ConnectionManager::new(Box::new(SimTransport::new(vec![controller.clone()])))
    }

    #[test]
    fn connect_no_match_leaves_no_handle() {
        let ctrl = SimController::new("192.168.0.10");
        let mut mgr = manager_with(&ctrl);

        let err = mgr.connect("10.0.0.5").unwrap_err();
        assert_eq!(
            err,
            ConnectError::NoMatch {
                address: "10.0.0.5".to_string()
            }
        );
        assert!(!mgr.is_connected());
        assert!(mgr.link().is_none());
    }

    #[test]
    fn connect_matches_exact_address_only() {
        let ctrl = SimController::new("10.0.0.5");
        let mut mgr = manager_with(&ctrl);

        // No normalization: trailing whitespace is a different address.
        assert!(matches!(
            mgr.connect("10.0.0.5 "),
            Err(ConnectError::NoMatch { .. })
        ));
        assert!(mgr.connect("10.0.0.5").is_ok());
        assert!(mgr.is_connected());
    }

    #[test]
    fn rejected_connection_discards_handle() {
        let ctrl = SimController::new("10.0.0.5");
        ctrl.set_online(false);
        let mut mgr = manager_with(&ctrl);

        let err = mgr.connect("10.0.0.5").unwrap_err();
        assert!(matches!(err, ConnectError::Rejected { .. }));
        assert!(mgr.link().is_none());
    }

    #[test]
    fn failed_reconnect_drops_previous_link() {
        let ctrl = SimController::new("10.0.0.5");
        let mut mgr = manager_with(&ctrl);
        mgr.connect("10.0.0.5").unwrap();
        assert!(mgr.is_connected());

        // A new attempt against an unknown address must not keep the old
        // (still healthy) handle around.
        let _ = mgr.connect("10.9.9.9");
        assert!(!mgr.is_connected());
        assert!(mgr.link().is_none());
    }

    #[test]
    fn disconnect_is_idempotent() {
        let ctrl = SimController::new("10.0.0.5");
        let mut mgr = manager_with(&ctrl);
        mgr.connect("10.0.0.5").unwrap();

        mgr.disconnect();
        assert!(!mgr.is_connected());
        mgr.disconnect();
        assert!(!mgr.is_connected());
    }

    #[test]
    fn is_connected_tracks_live_state() {
        let ctrl = SimController::new("10.0.0.5");
        ctrl.add_signal("DO1", ControllerSignalKind::DigitalOutput, 0.0);
        let mut mgr = manager_with(&ctrl);
        mgr.connect("10.0.0.5").unwrap();
        assert!(mgr.is_connected());

        // Connection dies externally: the handle still exists but the
        // manager must report disconnected without being told.
        ctrl.set_online(false);
        assert!(!mgr.is_connected());
        assert!(mgr.link().is_some());

        assert!(mgr.prune_dead_link());
        assert!(mgr.link().is_none());
        assert!(!mgr.prune_dead_link());
    }
}
