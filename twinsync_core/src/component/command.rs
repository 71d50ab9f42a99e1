//! Command trigger decoding.
//!
//! Commands arrive as one-shot boolean pulses on the fixed trigger
//! signals; a rising edge (value == 1) on a trigger name maps to exactly
//! one command. Everything else — falling edges, unknown names, edges on
//! monitored signals — dispatches nothing.

use crate::consts::{
    SIG_ADD_IO_SIGNAL, SIG_CONNECT, SIG_DISCONNECT, SIG_REMOVE_IO_SIGNAL,
    SIG_REMOVE_IO_SIGNAL_ALL,
};

/// Discrete command carried by a trigger signal edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Connect,
    Disconnect,
    AddIoSignal,
    RemoveIoSignal,
    RemoveIoSignalAll,
}

impl Command {
    /// Decode a trigger signal name. Returns `None` for any name that is
    /// not one of the five fixed triggers.
    pub fn from_signal_name(name: &str) -> Option<Self> {
        match name {
            SIG_CONNECT => Some(Self::Connect),
            SIG_DISCONNECT => Some(Self::Disconnect),
            SIG_ADD_IO_SIGNAL => Some(Self::AddIoSignal),
            SIG_REMOVE_IO_SIGNAL => Some(Self::RemoveIoSignal),
            SIG_REMOVE_IO_SIGNAL_ALL => Some(Self::RemoveIoSignalAll),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_names_decode() {
        assert_eq!(Command::from_signal_name("Connect"), Some(Command::Connect));
        assert_eq!(
            Command::from_signal_name("Disconnect"),
            Some(Command::Disconnect)
        );
        assert_eq!(
            Command::from_signal_name("AddIoSignal"),
            Some(Command::AddIoSignal)
        );
        assert_eq!(
            Command::from_signal_name("RemoveIoSignal"),
            Some(Command::RemoveIoSignal)
        );
        assert_eq!(
            Command::from_signal_name("RemoveIoSignalAll"),
            Some(Command::RemoveIoSignalAll)
        );
    }

    #[test]
    fn non_trigger_names_decode_to_none() {
        assert_eq!(Command::from_signal_name("Connected"), None);
        assert_eq!(Command::from_signal_name("connect"), None);
        assert_eq!(Command::from_signal_name(""), None);
        assert_eq!(Command::from_signal_name("DO1"), None);
    }
}
