//! Persisted institute selection.
//!
//! DESIGN
//! ======
//! The chosen tenant is persisted independently of the session so it
//! survives a process restart before the session is rehydrated. The trait
//! is infallible, mirroring browser-storage semantics: the file-backed
//! store logs and swallows I/O failures rather than failing a credential
//! flow over a scratch file.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

use crate::net::types::InstituteRef;

/// Persistence contract for the chosen tenant.
///
/// `clear` is invoked only as part of a confirmed logout, atomically with
/// the session's `UserLogout` dispatch, so the persisted selection and the
/// session auth fields never diverge.
pub trait SelectionStore: Send + Sync {
    fn get(&self) -> Option<InstituteRef>;
    fn set(&self, institute: &InstituteRef);
    fn clear(&self);
}

/// In-process store, used in tests and by embedders that manage their own
/// persistence.
#[derive(Default)]
pub struct MemorySelectionStore {
    slot: Mutex<Option<InstituteRef>>,
}

impl MemorySelectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for MemorySelectionStore {
    fn get(&self) -> Option<InstituteRef> {
        self.slot.lock().expect("selection lock poisoned").clone()
    }

    fn set(&self, institute: &InstituteRef) {
        *self.slot.lock().expect("selection lock poisoned") = Some(institute.clone());
    }

    fn clear(&self) {
        *self.slot.lock().expect("selection lock poisoned") = None;
    }
}

/// Store backed by a JSON file.
pub struct FileSelectionStore {
    path: PathBuf,
}

impl FileSelectionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SelectionStore for FileSelectionStore {
    fn get(&self) -> Option<InstituteRef> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(institute) => Some(institute),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "discarding unreadable institute selection");
                None
            }
        }
    }

    fn set(&self, institute: &InstituteRef) {
        let raw = match serde_json::to_string(institute) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "failed to serialize institute selection");
                return;
            }
        };
        if let Err(err) = std::fs::write(&self.path, raw) {
            warn!(path = %self.path.display(), error = %err, "failed to persist institute selection");
        }
    }

    fn clear(&self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %err, "failed to clear institute selection");
            }
        }
    }
}
