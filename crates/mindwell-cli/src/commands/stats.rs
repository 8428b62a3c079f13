//! Streak and badge commands.
//!
//! The gamification backend is authoritative; when it is unreachable the
//! locally tracked stats blob keeps streaks moving until it comes back.

use clap::Subcommand;
use mindwell_core::gamification::{
    apply_local_completion, get_or_create_device_id, GamificationClient, LocalStats, UserStats,
};
use mindwell_core::storage::local::LOCAL_STATS_KEY;
use mindwell_core::storage::Config;
use mindwell_core::SqliteStore;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Current streak and totals
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// All badges with earned status
    Badges,
    /// Record a completed assessment
    Record {
        /// Assessment id
        test_id: String,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let device_id = get_or_create_device_id()?;
    let client = GamificationClient::new(config.gamification.base_url, device_id);
    let rt = super::runtime()?;

    match action {
        StatsAction::Show { json } => {
            let stats = match rt.block_on(client.get_stats()) {
                Ok(stats) => stats,
                Err(e) => {
                    tracing::warn!(error = %e, "backend unreachable, using local stats");
                    local_stats()?
                }
            };
            print_stats(&stats, json)?;
        }
        StatsAction::Badges => {
            let badges = rt.block_on(client.get_badges())?;
            for badge in &badges {
                let mark = if badge.earned { "x" } else { " " };
                println!("[{mark}] {:<12} {} - {}", badge.code, badge.name, badge.description);
            }
        }
        StatsAction::Record { test_id } => match rt.block_on(client.record_test(&test_id)) {
            Ok(outcome) => {
                println!("streak: {}", outcome.streak);
                println!("total tests: {}", outcome.total_tests);
                for badge in &outcome.new_badges {
                    println!("new badge: {} - {}", badge.name, badge.description);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "backend unreachable, recording locally");
                let store = SqliteStore::open()?;
                let mut stats: LocalStats = store.get_blob(LOCAL_STATS_KEY)?;
                let new_badge =
                    apply_local_completion(&mut stats, chrono::Utc::now().date_naive());
                store.put_blob(LOCAL_STATS_KEY, &stats)?;

                println!("streak: {} (offline)", stats.streak.current);
                println!("total tests: {}", stats.tests_completed);
                if let Some(badge) = new_badge {
                    println!("new badge: {} - {}", badge.name, badge.description);
                }
            }
        },
    }
    Ok(())
}

fn local_stats() -> Result<UserStats, Box<dyn std::error::Error>> {
    let store = SqliteStore::open()?;
    Ok(store.get_blob(LOCAL_STATS_KEY)?)
}

fn print_stats(stats: &UserStats, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    } else {
        println!("current streak: {} day(s)", stats.streak.current);
        println!("longest streak: {} day(s)", stats.streak.longest);
        println!("tests completed: {}", stats.tests_completed);
        println!("badges earned: {}", stats.badges_earned);
    }
    Ok(())
}
