//! Signal collection owned by one component instance.
//!
//! The table starts in the library-linked template state a host assigns
//! to components instantiated from a library. Structural mutation of the
//! dynamic signal set requires detaching from the template first so the
//! set can diverge per instance; the registry performs the detach as part
//! of every mutating operation.

use thiserror::Error;

use super::signal::IoSignal;

// ─── Error Types ────────────────────────────────────────────────────

/// Structural mutation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalTableError {
    /// A signal with this name already exists (names are unique
    /// table-wide, across all groups).
    #[error("duplicate signal name '{0}'")]
    DuplicateName(String),
}

/// External write-path error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalWriteError {
    #[error("no signal named '{0}'")]
    NotFound(String),
    /// The signal rejects external writes (mirrored signals always, the
    /// structural triggers while a simulation session is active).
    #[error("signal '{0}' is read-only")]
    ReadOnly(String),
}

// ─── SignalTable ────────────────────────────────────────────────────

/// Ordered collection of [`IoSignal`]s with unique names.
///
/// Iteration order is insertion order, which keeps per-tick mirroring
/// deterministic across steps.
#[derive(Debug, Clone)]
pub struct SignalTable {
    signals: Vec<IoSignal>,
    library_linked: bool,
}

impl SignalTable {
    /// Create an empty table in the library-linked template state.
    pub fn new() -> Self {
        Self {
            signals: Vec::new(),
            library_linked: true,
        }
    }

    /// Detach the collection from its library template. Idempotent.
    pub fn unlink_from_library(&mut self) {
        self.library_linked = false;
    }

    /// Whether the collection is still linked to its library template.
    #[inline]
    pub fn is_library_linked(&self) -> bool {
        self.library_linked
    }

    /// Insert a signal.
    ///
    /// # Errors
    /// `DuplicateName` if any signal (in any group) already has the name.
    pub fn add(&mut self, signal: IoSignal) -> Result<(), SignalTableError> {
        if self.contains(&signal.name) {
            return Err(SignalTableError::DuplicateName(signal.name));
        }
        self.signals.push(signal);
        Ok(())
    }

    /// Remove the signal named `name`. Returns whether a signal was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.signals.len();
        self.signals.retain(|s| s.name != name);
        self.signals.len() != before
    }

    pub fn get(&self, name: &str) -> Option<&IoSignal> {
        self.signals.iter().find(|s| s.name == name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// External write path: respects the `read_only` flag.
    ///
    /// # Errors
    /// `NotFound` for an unknown name, `ReadOnly` when the signal rejects
    /// external writes.
    pub fn write(&mut self, name: &str, value: f64) -> Result<(), SignalWriteError> {
        let Some(signal) = self.signals.iter_mut().find(|s| s.name == name) else {
            return Err(SignalWriteError::NotFound(name.to_string()));
        };
        if signal.read_only {
            return Err(SignalWriteError::ReadOnly(name.to_string()));
        }
        signal.value = value;
        Ok(())
    }

    /// Internal mirror/status write path: bypasses `read_only`.
    ///
    /// Returns false when no signal has the name; never escalates.
    pub fn try_set(&mut self, name: &str, value: f64) -> bool {
        match self.signals.iter_mut().find(|s| s.name == name) {
            Some(signal) => {
                signal.value = value;
                true
            }
            None => false,
        }
    }

    /// Flip the `read_only` flag of `name`. Returns whether the signal exists.
    pub fn set_read_only(&mut self, name: &str, read_only: bool) -> bool {
        match self.signals.iter_mut().find(|s| s.name == name) {
            Some(signal) => {
                signal.read_only = read_only;
                true
            }
            None => false,
        }
    }

    /// All signals, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &IoSignal> {
        self.signals.iter()
    }

    /// Names of the signals currently tagged "Signal Monitoring", in
    /// insertion order. Collected into an owned list so callers can
    /// mutate the table while walking the result.
    pub fn monitored_names(&self) -> Vec<String> {
        self.signals
            .iter()
            .filter(|s| s.is_monitored())
            .map(|s| s.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

impl Default for SignalTable {
    fn default() -> Self {
        Self::new()
    }
}
