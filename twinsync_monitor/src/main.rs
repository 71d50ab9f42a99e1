//! # twinsync Monitor
//!
//! Drives a complete mirror session against the in-process simulated
//! controller: connect, register the configured mirrors, run the per-tick
//! synchronization loop while the simulated controller moves, then tear
//! the session down.
//!
//! # Usage
//!
//! ```bash
//! # Built-in demo session
//! twinsync_monitor
//!
//! # From a config file
//! twinsync_monitor --config config/twinsync.toml
//!
//! # Shorter run, verbose logging
//! twinsync_monitor --ticks 10 --cycle-ms 0 -v
//! ```

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use twinsync_core::config::ConfigLoader;
use twinsync_core::consts::{
    PROP_IO_SIGNAL_NAME, PROP_IP_ADRESS, ROBOT_AXES, SIG_ADD_IO_SIGNAL, SIG_CONNECT,
    SIG_DISCONNECT,
};
use twinsync_core::controller::types::ControllerSignalKind;
use twinsync_core::prelude::*;
use twinsync_core::sim::{SimController, SimMechanism, SimTransport};

mod config;
use config::{MonitorConfig, SignalSpec};

/// twinsync Monitor - mirror-session runner over a simulated controller
#[derive(Parser, Debug)]
#[command(name = "twinsync_monitor")]
#[command(version)]
#[command(about = "Runs a digital-twin mirror session against a simulated controller")]
#[command(long_about = None)]
struct Args {
    /// Path to the session configuration file (TOML). Built-in demo
    /// session when omitted.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the controller address from the config
    #[arg(long)]
    address: Option<String>,

    /// Override the number of simulation steps
    #[arg(long)]
    ticks: Option<u32>,

    /// Override the pause between steps in milliseconds (0 = flat out)
    #[arg(long)]
    cycle_ms: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("mirror session failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => MonitorConfig::load(path)?,
        None => MonitorConfig::default(),
    };
    if let Some(address) = args.address {
        config.controller.address = address;
    }
    if let Some(ticks) = args.ticks {
        config.session.ticks = ticks;
    }
    if let Some(cycle_ms) = args.cycle_ms {
        config.session.cycle_ms = cycle_ms;
    }
    config.shared.validate()?;

    let level = if args.verbose {
        "debug"
    } else {
        config.shared.log_level.as_filter()
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .compact()
        .init();

    info!(service = %config.shared.service_name, "twinsync monitor starting");

    // Bring up the simulated controller the session mirrors.
    let controller = SimController::new(config.controller.address.clone());
    for spec in &config.controller.signals {
        controller.add_signal(&spec.name, spec.kind, 0.0);
    }
    controller.set_joints([0.0; ROBOT_AXES]);

    let mut component = TwinComponent::new(Box::new(SimTransport::new(vec![controller.clone()])));
    component.set_property(PROP_IP_ADRESS, &config.controller.address)?;

    pulse(&mut component, SIG_CONNECT)?;
    if !component.is_connected() {
        return Err(format!(
            "no controller reachable at '{}'",
            config.controller.address
        )
        .into());
    }

    for spec in &config.controller.signals {
        component.set_property(PROP_IO_SIGNAL_NAME, &spec.name)?;
        pulse(&mut component, SIG_ADD_IO_SIGNAL)?;
    }
    let mirrored = component.signals().monitored_names();
    info!(count = mirrored.len(), "mirrors registered: {}", mirrored.join(", "));

    component.on_simulation_start();
    let mut mechanism = SimMechanism::default();

    for tick in 0..config.session.ticks {
        animate_controller(&controller, &config.controller.signals, tick);
        component.on_simulation_step(Some(&mut mechanism));

        let values: Vec<String> = component
            .signals()
            .iter()
            .filter(|s| s.is_monitored())
            .map(|s| format!("{}={:.3}", s.name, s.value))
            .collect();
        debug!(tick, joints = ?mechanism.joint_values(), "step complete");
        info!(tick, "mirrors: [{}]", values.join(", "));

        if config.session.cycle_ms > 0 {
            thread::sleep(Duration::from_millis(config.session.cycle_ms));
        }
    }

    component.on_simulation_stop();
    pulse(&mut component, SIG_DISCONNECT)?;
    info!("mirror session finished");
    Ok(())
}

/// Raise and clear a trigger signal (one-shot pulse).
fn pulse(component: &mut TwinComponent, name: &str) -> Result<(), SignalWriteError> {
    component.write_signal(name, 1.0)?;
    component.write_signal(name, 0.0)
}

/// Move the simulated controller so the twin has something to follow:
/// joints sweep slow sine arcs, digital signals toggle, group signals
/// count, analog signals follow the first joint.
fn animate_controller(controller: &SimController, signals: &[SignalSpec], tick: u32) {
    let phase = f64::from(tick) * 0.1;
    let mut joints = [0.0; ROBOT_AXES];
    for (axis, joint) in joints.iter_mut().enumerate() {
        *joint = 30.0 * (phase + axis as f64 * 0.5).sin();
    }
    controller.set_joints(joints);

    for spec in signals {
        let value = match spec.kind {
            ControllerSignalKind::DigitalInput | ControllerSignalKind::DigitalOutput => {
                f64::from(tick / 5 % 2)
            }
            ControllerSignalKind::GroupInput | ControllerSignalKind::GroupOutput => {
                f64::from(tick % 16)
            }
            ControllerSignalKind::AnalogInput | ControllerSignalKind::AnalogOutput => {
                100.0 * phase.sin().abs()
            }
        };
        controller.set_signal_value(&spec.name, value);
    }
}
