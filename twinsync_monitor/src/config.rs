//! Monitor session configuration.
//!
//! Embeds the workspace [`SharedConfig`] and adds the controller and
//! session sections the mirror run needs. Unknown fields are rejected so
//! typos in a config file fail loudly at load time.

use serde::Deserialize;

use twinsync_core::config::{LogLevel, SharedConfig};
use twinsync_core::controller::types::ControllerSignalKind;

/// Top-level monitor configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorConfig {
    pub shared: SharedConfig,
    pub controller: ControllerSection,
    #[serde(default)]
    pub session: SessionSection,
}

/// Simulated controller to bring up and mirror.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControllerSection {
    /// Address the component's `IpAdress` property is set to.
    pub address: String,
    /// Signals seeded on the controller and registered as mirrors.
    #[serde(default)]
    pub signals: Vec<SignalSpec>,
}

/// One controller signal definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignalSpec {
    pub name: String,
    pub kind: ControllerSignalKind,
}

/// Session pacing.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionSection {
    /// Number of simulation steps to run.
    #[serde(default = "default_ticks")]
    pub ticks: u32,
    /// Wall-clock pause between steps; 0 runs flat out.
    #[serde(default = "default_cycle_ms")]
    pub cycle_ms: u64,
}

fn default_ticks() -> u32 {
    40
}

fn default_cycle_ms() -> u64 {
    50
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            ticks: default_ticks(),
            cycle_ms: default_cycle_ms(),
        }
    }
}

impl Default for MonitorConfig {
    /// Built-in demo session used when no config file is given.
    fn default() -> Self {
        Self {
            shared: SharedConfig {
                log_level: LogLevel::Info,
                service_name: "twinsync-monitor".to_string(),
            },
            controller: ControllerSection {
                address: "192.168.125.1".to_string(),
                signals: vec![
                    SignalSpec {
                        name: "DO_GripperClosed".to_string(),
                        kind: ControllerSignalKind::DigitalOutput,
                    },
                    SignalSpec {
                        name: "GO_StationCode".to_string(),
                        kind: ControllerSignalKind::GroupOutput,
                    },
                    SignalSpec {
                        name: "AO_ConveyorSpeed".to_string(),
                        kind: ControllerSignalKind::AnalogOutput,
                    },
                ],
            },
            session: SessionSection::default(),
        }
    }
}
