//! twinsync Core Library
//!
//! Mirrors the live state of an industrial robot controller into a
//! simulated twin: one component instance discovers and connects to a
//! controller over the network, exposes a dynamic subset of its I/O
//! signals as mirrored simulation signals, and replicates signal values
//! and joint positions into the simulation on every step.
//!
//! # Module Structure
//!
//! - [`component`] - connection manager, signal registry, sync engine and
//!   the component shell tying them behind the host callback surface
//! - [`controller`] - transport/link seams to the external controller
//! - [`host`] - simulation-side signal model and the mechanism seam
//! - [`mapping`] - pure kind and unit conversions
//! - [`config`] - TOML configuration loading
//! - [`sim`] - in-process simulated controller for tests and tooling
//! - [`prelude`] - common re-exports for convenience

pub mod component;
pub mod config;
pub mod consts;
pub mod controller;
pub mod host;
pub mod mapping;
pub mod prelude;
pub mod sim;
