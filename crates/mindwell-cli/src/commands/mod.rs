pub mod assess;
pub mod nutrition;
pub mod results;
pub mod stats;
pub mod sync;

use mindwell_core::storage::Config;
use mindwell_core::sync::{HttpRemote, Reconciler};
use mindwell_core::SqliteStore;

/// Open the local store and wire it to the configured remote.
pub fn open_reconciler() -> Result<Reconciler<HttpRemote>, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = SqliteStore::open()?;
    Ok(Reconciler::new(store, HttpRemote::new(config.sync.base_url)))
}

/// Single-purpose runtime for the async client calls.
pub fn runtime() -> Result<tokio::runtime::Runtime, Box<dyn std::error::Error>> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
