//! Result lifecycle owner: local writes, outbox, remote reconciliation.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{StoreError, SyncError};
use crate::results::{ResultDraft, TestResult};
use crate::storage::local::{OUTBOX_KEY, RESULTS_KEY};
use crate::storage::SqliteStore;
use crate::sync::merge::merge_results;
use crate::sync::remote::RemoteStore;
use crate::sync::types::{SyncReport, SyncStatus};

/// Owns the local store, the remote capability, and the in-flight guard.
///
/// Local reads and writes are synchronous and never wait on the network;
/// the remote store is a durability backstop reconciled asynchronously.
pub struct Reconciler<R: RemoteStore> {
    store: SqliteStore,
    remote: R,
    syncing: AtomicBool,
    last_sync_at: Mutex<Option<DateTime<Utc>>>,
}

/// Clears the in-flight flag when an upload attempt ends, on every path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<R: RemoteStore> Reconciler<R> {
    pub fn new(store: SqliteStore, remote: R) -> Self {
        Self {
            store,
            remote,
            syncing: AtomicBool::new(false),
            last_sync_at: Mutex::new(None),
        }
    }

    /// The remote capability (used by tests and status displays).
    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// All locally stored results, newest first.
    pub fn results(&self) -> Result<Vec<TestResult>, StoreError> {
        self.store.get_blob(RESULTS_KEY)
    }

    /// Locally stored results for one assessment.
    pub fn results_for_test(&self, test_id: &str) -> Result<Vec<TestResult>, StoreError> {
        let mut results: Vec<TestResult> = self.store.get_blob(RESULTS_KEY)?;
        results.retain(|r| r.test_id == test_id);
        Ok(results)
    }

    /// Persist a new result locally and enqueue it for upload.
    ///
    /// Assigns the UUID and timestamp, writes the local store
    /// synchronously, then appends to the outbox. The record is queryable
    /// locally as soon as this returns, regardless of network state.
    pub fn save_result(&self, draft: ResultDraft) -> Result<TestResult, StoreError> {
        let record = draft.into_result();

        let mut results: Vec<TestResult> = self.store.get_blob(RESULTS_KEY)?;
        results.insert(0, record.clone());
        self.store.put_blob(RESULTS_KEY, &results)?;

        let mut outbox: Vec<TestResult> = self.store.get_blob(OUTBOX_KEY)?;
        outbox.push(record.clone());
        self.store.put_blob(OUTBOX_KEY, &outbox)?;

        Ok(record)
    }

    /// Remove a result from the local store.
    ///
    /// Deletions do not propagate to the remote store; a copy uploaded
    /// earlier will reappear on the next `sync_from_cloud`. Known gap.
    pub fn delete_result(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut results: Vec<TestResult> = self.store.get_blob(RESULTS_KEY)?;
        let before = results.len();
        results.retain(|r| r.id != id);
        let removed = results.len() < before;
        if removed {
            self.store.put_blob(RESULTS_KEY, &results)?;
        }

        let mut outbox: Vec<TestResult> = self.store.get_blob(OUTBOX_KEY)?;
        let queued = outbox.len();
        outbox.retain(|r| r.id != id);
        if outbox.len() < queued {
            self.store.put_blob(OUTBOX_KEY, &outbox)?;
        }

        Ok(removed)
    }

    /// Drop every locally stored result and the outbox.
    pub fn clear_results(&self) -> Result<(), StoreError> {
        self.store.delete_blob(RESULTS_KEY)?;
        self.store.delete_blob(OUTBOX_KEY)?;
        Ok(())
    }

    /// Drain the outbox to the remote store.
    ///
    /// At-least-once delivery: queued records are removed only after the
    /// remote confirms the full batch, so a partial failure leaves the
    /// outbox intact for retry. Overlapping calls are rejected with a
    /// "sync in progress" report rather than queued.
    pub async fn sync_to_cloud(&self, user_id: &str) -> SyncReport {
        if self
            .syncing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return SyncReport::failed(SyncError::InProgress.to_string());
        }
        let _guard = InFlightGuard(&self.syncing);

        let pending: Vec<TestResult> = match self.store.get_blob(OUTBOX_KEY) {
            Ok(pending) => pending,
            Err(e) => return SyncReport::failed(e.to_string()),
        };

        if pending.is_empty() {
            return SyncReport::ok(0);
        }

        if let Err(e) = self.remote.upsert(user_id, &pending).await {
            tracing::warn!(error = %e, pending = pending.len(), "upload failed, outbox retained");
            return SyncReport::failed(e.to_string());
        }

        // Remove exactly the flushed records; a save during the upload may
        // have appended to the outbox in the meantime.
        let flushed: HashSet<Uuid> = pending.iter().map(|r| r.id).collect();
        let clear = (|| -> Result<(), StoreError> {
            let mut outbox: Vec<TestResult> = self.store.get_blob(OUTBOX_KEY)?;
            outbox.retain(|r| !flushed.contains(&r.id));
            self.store.put_blob(OUTBOX_KEY, &outbox)
        })();
        if let Err(e) = clear {
            return SyncReport::failed(e.to_string());
        }

        *self.last_sync_at.lock().unwrap() = Some(Utc::now());
        tracing::info!(uploaded = pending.len(), "outbox flushed");
        SyncReport::ok(pending.len())
    }

    /// Fetch remote history and merge it into the local store.
    ///
    /// Last-write-wins by timestamp, keyed by record id. A remote failure
    /// degrades to the local view instead of erroring: offline never
    /// blocks result viewing.
    pub async fn sync_from_cloud(&self, user_id: &str) -> Result<Vec<TestResult>, SyncError> {
        let local: Vec<TestResult> = self.store.get_blob(RESULTS_KEY)?;

        let cloud = match self.remote.fetch(user_id).await {
            Ok(cloud) => cloud,
            Err(e) => {
                tracing::warn!(error = %e, "fetch failed, serving local view");
                return Ok(local);
            }
        };

        let merged = merge_results(local, cloud);
        self.store.put_blob(RESULTS_KEY, &merged)?;
        tracing::debug!(count = merged.len(), "merged remote history");
        Ok(merged)
    }

    /// One-time migration when an anonymous profile gains an identity:
    /// enqueue every local result, then flush.
    pub async fn migrate_local(&self, user_id: &str) -> SyncReport {
        let enqueue = (|| -> Result<(), StoreError> {
            let results: Vec<TestResult> = self.store.get_blob(RESULTS_KEY)?;
            if results.is_empty() {
                return Ok(());
            }
            let mut outbox: Vec<TestResult> = self.store.get_blob(OUTBOX_KEY)?;
            let queued: HashSet<Uuid> = outbox.iter().map(|r| r.id).collect();
            outbox.extend(
                results
                    .into_iter()
                    .filter(|r| !queued.contains(&r.id)),
            );
            self.store.put_blob(OUTBOX_KEY, &outbox)
        })();
        if let Err(e) = enqueue {
            return SyncReport::failed(e.to_string());
        }

        self.sync_to_cloud(user_id).await
    }

    /// Current sync posture.
    pub fn status(&self) -> Result<SyncStatus, StoreError> {
        let outbox: Vec<TestResult> = self.store.get_blob(OUTBOX_KEY)?;
        Ok(SyncStatus {
            last_sync_at: *self.last_sync_at.lock().unwrap(),
            pending_count: outbox.len(),
            in_progress: self.syncing.load(Ordering::SeqCst),
        })
    }
}
