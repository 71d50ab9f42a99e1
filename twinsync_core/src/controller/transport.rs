//! Controller transport and link traits.
//!
//! This module defines:
//! - `ControllerTransport` trait - discovery scan + standalone connect
//! - `ControllerLink` trait - read-only queries against a live connection
//! - `ControllerDescriptor` struct - ephemeral scan result
//! - `TransportError` - transport-level connect failure

use thiserror::Error;

use super::types::{JointDegrees, SignalState};

/// Transport-level connection failure (network fault, handshake error).
///
/// "Controller not found" and "connection rejected" are NOT transport
/// errors — they are normal outcomes handled by the connection manager.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("connection to '{address}' failed: {reason}")]
pub struct TransportError {
    /// Address of the descriptor the connect was attempted against.
    pub address: String,
    /// Transport-specific failure description.
    pub reason: String,
}

/// Reachable controller found by a discovery scan.
///
/// Ephemeral: descriptors are consumed by the connect call that follows
/// the scan which produced them and are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerDescriptor {
    /// Network identifier. Matched against the configured target address
    /// by exact string equality, no normalization.
    pub address: String,
    /// Controller system name as reported by the scan.
    pub system_name: String,
}

/// Live connection handle to a controller.
///
/// Handles are exclusively owned by the connection manager; every other
/// component receives `&dyn ControllerLink` and never mutates connection
/// state. Dropping the handle releases the underlying connection.
///
/// All queries are blocking and re-read live state — implementations must
/// not cache `is_connected` past one call.
pub trait ControllerLink {
    /// Whether the underlying connection is currently live.
    fn is_connected(&self) -> bool;

    /// Snapshot of the controller signal named `name`, or `None` if no
    /// such signal exists on the controller right now.
    fn io_signal(&self, name: &str) -> Option<SignalState>;

    /// Joint position of the controller's first mechanical unit, or
    /// `None` if the controller has no mechanical unit.
    fn joint_degrees(&self) -> Option<JointDegrees>;
}

/// Discovery and connect capability for a controller network.
///
/// # Lifecycle
///
/// 1. `scan()` - enumerate reachable controllers
/// 2. `connect_standalone()` - open a connection to one descriptor
///
/// A returned link may still report not-connected (the controller accepted
/// the transport handshake but refused the session); the caller decides
/// whether to keep or discard it.
pub trait ControllerTransport {
    /// Run a discovery scan and return every reachable controller.
    ///
    /// A controller that does not answer the scan is simply absent from
    /// the result; the scan itself does not fail.
    fn scan(&mut self) -> Vec<ControllerDescriptor>;

    /// Attempt a standalone connection to `descriptor`.
    ///
    /// # Errors
    /// Returns `TransportError` only for transport-level faults. A
    /// connection the controller refuses is returned as a link whose
    /// `is_connected()` is false.
    fn connect_standalone(
        &mut self,
        descriptor: &ControllerDescriptor,
    ) -> Result<Box<dyn ControllerLink>, TransportError>;
}
