//! Local result store commands.

use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum ResultsAction {
    /// List stored results, newest first
    List {
        /// Restrict to one assessment id
        #[arg(long)]
        test: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete one result from the local store
    Delete {
        /// Result UUID
        id: Uuid,
    },
    /// Delete every stored result and the pending-sync queue
    Clear,
}

pub fn run(action: ResultsAction) -> Result<(), Box<dyn std::error::Error>> {
    let reconciler = super::open_reconciler()?;

    match action {
        ResultsAction::List { test, json } => {
            let results = match test {
                Some(test_id) => reconciler.results_for_test(&test_id)?,
                None => reconciler.results()?,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("no results");
            } else {
                for r in &results {
                    println!(
                        "{}  {}  {:<18} {:>3}/{:<3} {} ({})",
                        r.id,
                        r.date.format("%Y-%m-%d %H:%M"),
                        r.test_id,
                        r.score,
                        r.max_score,
                        r.title,
                        r.level,
                    );
                }
            }
        }
        ResultsAction::Delete { id } => {
            if reconciler.delete_result(id)? {
                println!("deleted: {id}");
            } else {
                return Err(format!("no result with id {id}").into());
            }
        }
        ResultsAction::Clear => {
            reconciler.clear_results()?;
            println!("cleared");
        }
    }
    Ok(())
}
