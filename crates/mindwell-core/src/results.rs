//! Persisted test result records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::Severity;

/// A completed assessment attempt.
///
/// Created once per submission and immutable afterwards except for
/// deletion. May exist in the local store, the pending-sync outbox, and
/// the remote store at the same time; the reconciler makes the three
/// converge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: Uuid,
    pub test_id: String,
    pub test_name: String,
    pub score: u32,
    pub max_score: u32,
    pub level: Severity,
    pub title: String,
    pub date: DateTime<Utc>,
}

/// Caller-supplied fields of a result; id and date are engine-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultDraft {
    pub test_id: String,
    pub test_name: String,
    pub score: u32,
    pub max_score: u32,
    pub level: Severity,
    pub title: String,
}

impl ResultDraft {
    /// Materialize the draft with a fresh UUID and the current time.
    pub fn into_result(self) -> TestResult {
        TestResult {
            id: Uuid::new_v4(),
            test_id: self.test_id,
            test_name: self.test_name,
            score: self.score,
            max_score: self.max_score,
            level: self.level,
            title: self.title,
            date: Utc::now(),
        }
    }
}
