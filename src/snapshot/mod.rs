//! Versioned session snapshots for the external session store.
//!
//! The engine performs no storage I/O itself; the transport layer loads and
//! saves sessions between requests. These codecs give it a stable format
//! with an explicit version gate, in JSON (debuggable) and binary (compact)
//! flavors.

use crate::core::Session;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Version identifier for the snapshot format.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors that can occur while encoding or decoding a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Serializable snapshot of a session between requests.
///
/// # Example
///
/// ```rust
/// use shockbot::core::Session;
/// use shockbot::snapshot::SessionSnapshot;
///
/// let snapshot = SessionSnapshot::capture(Session::new());
/// let json = snapshot.to_json().unwrap();
/// let restored = SessionSnapshot::from_json(&json).unwrap();
/// assert_eq!(restored.session, Session::new());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// When the snapshot was taken
    pub saved_at: DateTime<Utc>,

    /// The session value to restore
    pub session: Session,
}

impl SessionSnapshot {
    /// Snapshot a session at the current format version.
    pub fn capture(session: Session) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            session,
        }
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self)
            .map_err(|error| SnapshotError::SerializationFailed(error.to_string()))
    }

    /// Decode from JSON, rejecting unsupported versions.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|error| SnapshotError::DeserializationFailed(error.to_string()))?;
        snapshot.check_version()
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self)
            .map_err(|error| SnapshotError::SerializationFailed(error.to_string()))
    }

    /// Decode from binary, rejecting unsupported versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|error| SnapshotError::DeserializationFailed(error.to_string()))?;
        snapshot.check_version()
    }

    fn check_version(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}
