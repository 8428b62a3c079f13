//! Local-first result synchronization.
//!
//! Results are written to the local store synchronously and appended to a
//! durable outbox; a reconciler drains the outbox to the remote store with
//! idempotent upserts and merges remote history back with a
//! last-write-wins rule keyed by record id. The local store never waits on
//! the network.

pub mod merge;
pub mod reconciler;
pub mod remote;
pub mod types;


pub use merge::merge_results;
pub use reconciler::Reconciler;
pub use remote::{HttpRemote, RemoteRow, RemoteStore};
pub use types::{SyncReport, SyncStatus};
