//! Core types for result synchronization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current sync posture.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncStatus {
    /// Last successful upload timestamp.
    pub last_sync_at: Option<DateTime<Utc>>,
    /// Number of records waiting in the outbox.
    pub pending_count: usize,
    /// Whether a sync is currently in flight.
    pub in_progress: bool,
}

/// Outcome of an upload attempt.
///
/// Remote failures are reported here instead of propagating: the outbox
/// stays intact and the caller may retry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    pub success: bool,
    /// Number of records flushed on success.
    pub uploaded: usize,
    pub error: Option<String>,
}

impl SyncReport {
    pub fn ok(uploaded: usize) -> Self {
        Self {
            success: true,
            uploaded,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            uploaded: 0,
            error: Some(error.into()),
        }
    }
}
