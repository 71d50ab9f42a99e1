//! Controller-side seams.
//!
//! The real controller is an external system reached over a network. This
//! module defines the two capabilities the core consumes — discovery plus a
//! connect primitive ([`ControllerTransport`]) and read-only signal/motion
//! queries ([`ControllerLink`]) — together with the data types they exchange.
//! The `sim` module provides an in-process implementation for tests and the
//! monitor binary.

pub mod transport;
pub mod types;

pub use transport::{ControllerDescriptor, ControllerLink, ControllerTransport, TransportError};
pub use types::{ControllerSignalKind, JointDegrees, SignalState};
