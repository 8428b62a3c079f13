//! Cloud synchronization commands.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum SyncAction {
    /// Upload pending results
    Push {
        /// Cloud user id
        #[arg(long)]
        user: String,
    },
    /// Merge cloud history into the local store
    Pull {
        /// Cloud user id
        #[arg(long)]
        user: String,
    },
    /// Upload the full local history (one-time migration)
    Migrate {
        /// Cloud user id
        #[arg(long)]
        user: String,
    },
    /// Show pending count and last sync time
    Status,
}

pub fn run(action: SyncAction) -> Result<(), Box<dyn std::error::Error>> {
    let reconciler = super::open_reconciler()?;
    let rt = super::runtime()?;

    match action {
        SyncAction::Push { user } => {
            let report = rt.block_on(reconciler.sync_to_cloud(&user));
            if report.success {
                println!("uploaded {} result(s)", report.uploaded);
            } else {
                return Err(report
                    .error
                    .unwrap_or_else(|| "sync failed".to_string())
                    .into());
            }
        }
        SyncAction::Pull { user } => {
            let merged = rt.block_on(reconciler.sync_from_cloud(&user))?;
            println!("{} result(s) after merge", merged.len());
        }
        SyncAction::Migrate { user } => {
            let report = rt.block_on(reconciler.migrate_local(&user));
            if report.success {
                println!("migrated {} result(s)", report.uploaded);
            } else {
                return Err(report
                    .error
                    .unwrap_or_else(|| "migration failed".to_string())
                    .into());
            }
        }
        SyncAction::Status => {
            let status = reconciler.status()?;
            println!("pending: {}", status.pending_count);
            match status.last_sync_at {
                Some(at) => println!("last sync: {}", at.format("%Y-%m-%d %H:%M:%S UTC")),
                None => println!("last sync: never"),
            }
        }
    }
    Ok(())
}
