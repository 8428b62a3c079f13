//! Offline fallback for streak and badge tracking.
//!
//! Mirrors the backend rules closely enough to keep the UI coherent while
//! offline: streaks advance once per day, totals count every completion,
//! and badges are awarded on first threshold crossing. The backend remains
//! authoritative once reachable.

use chrono::NaiveDate;

use super::{Badge, UserStats};

/// Locally persisted stats blob (same shape as the backend's).
pub type LocalStats = UserStats;

/// Badge threshold tables: (threshold, code, name, description).
const TEST_BADGES: [(u32, &str, &str, &str); 5] = [
    (1, "first_test", "First Step", "Completed your first assessment"),
    (5, "tests_5", "Explorer", "Completed 5 assessments"),
    (10, "tests_10", "Self-Knower", "Completed 10 assessments"),
    (25, "tests_25", "Expert", "Completed 25 assessments"),
    (50, "tests_50", "Master", "Completed 50 assessments"),
];

const STREAK_BADGES: [(u32, &str, &str, &str); 4] = [
    (3, "streak_3", "Consistency", "3 days in a row"),
    (7, "streak_7", "Strong Week", "7 days in a row"),
    (14, "streak_14", "Two Weeks", "14 days in a row"),
    (30, "streak_30", "Month of Care", "30 days in a row"),
];

const RECENT_BADGE_CAP: usize = 10;

/// Advance a daily streak given the previous activity date.
///
/// Same day leaves the streak unchanged (idempotent per day), the day
/// after extends it, anything else restarts at 1.
pub fn advance_streak(last_activity: Option<NaiveDate>, today: NaiveDate, current: u32) -> u32 {
    match last_activity {
        Some(last) if last == today => current.max(1),
        Some(last) if last.succ_opt() == Some(today) => current + 1,
        _ => 1,
    }
}

fn badge(code: &str, name: &str, description: &str, threshold: u32, category: &str) -> Badge {
    Badge {
        code: code.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: String::new(),
        threshold: Some(threshold),
        category: Some(category.to_string()),
        earned: true,
        earned_at: None,
    }
}

/// Apply a completed assessment to locally tracked stats.
///
/// Returns at most one newly earned badge per completion, preferring test
/// badges over streak badges, matching the backend's award order.
pub fn apply_local_completion(stats: &mut LocalStats, today: NaiveDate) -> Option<Badge> {
    stats.streak.current = advance_streak(stats.streak.last_activity, today, stats.streak.current);
    stats.streak.last_activity = Some(today);
    stats.streak.longest = stats.streak.longest.max(stats.streak.current);
    stats.tests_completed += 1;

    let earned: Vec<&str> = stats
        .recent_badges
        .iter()
        .map(|b| b.code.as_str())
        .collect();

    let mut new_badge = TEST_BADGES
        .iter()
        .find(|(threshold, code, _, _)| {
            stats.tests_completed >= *threshold && !earned.contains(code)
        })
        .map(|(threshold, code, name, description)| {
            badge(code, name, description, *threshold, "tests")
        });

    if new_badge.is_none() {
        new_badge = STREAK_BADGES
            .iter()
            .find(|(threshold, code, _, _)| {
                stats.streak.current >= *threshold && !earned.contains(code)
            })
            .map(|(threshold, code, name, description)| {
                badge(code, name, description, *threshold, "streak")
            });
    }

    if let Some(ref badge) = new_badge {
        stats.recent_badges.insert(0, badge.clone());
        stats.recent_badges.truncate(RECENT_BADGE_CAP);
        stats.badges_earned += 1;
    }

    new_badge
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_activity_starts_streak() {
        assert_eq!(advance_streak(None, date(2026, 8, 29), 0), 1);
    }

    #[test]
    fn test_same_day_does_not_double_increment() {
        let today = date(2026, 8, 29);
        assert_eq!(advance_streak(Some(today), today, 4), 4);
    }

    #[test]
    fn test_consecutive_day_extends() {
        assert_eq!(
            advance_streak(Some(date(2026, 8, 28)), date(2026, 8, 29), 4),
            5
        );
    }

    #[test]
    fn test_gap_resets() {
        assert_eq!(
            advance_streak(Some(date(2026, 8, 20)), date(2026, 8, 29), 9),
            1
        );
    }

    #[test]
    fn test_month_boundary_counts_as_consecutive() {
        assert_eq!(
            advance_streak(Some(date(2026, 8, 31)), date(2026, 9, 1), 2),
            3
        );
    }

    #[test]
    fn test_first_completion_awards_first_test_badge() {
        let mut stats = LocalStats::default();
        let badge = apply_local_completion(&mut stats, date(2026, 8, 29)).unwrap();

        assert_eq!(badge.code, "first_test");
        assert_eq!(stats.tests_completed, 1);
        assert_eq!(stats.badges_earned, 1);
        assert_eq!(stats.recent_badges.len(), 1);
    }

    #[test]
    fn test_badge_not_awarded_twice() {
        let mut stats = LocalStats::default();
        let today = date(2026, 8, 29);
        apply_local_completion(&mut stats, today).unwrap();
        let second = apply_local_completion(&mut stats, today);

        // Second completion same day: no new threshold crossed.
        assert!(second.is_none());
        assert_eq!(stats.tests_completed, 2);
        assert_eq!(stats.badges_earned, 1);
    }

    #[test]
    fn test_streak_badge_after_three_days() {
        let mut stats = LocalStats::default();
        apply_local_completion(&mut stats, date(2026, 8, 27)); // first_test
        apply_local_completion(&mut stats, date(2026, 8, 28));
        let third = apply_local_completion(&mut stats, date(2026, 8, 29)).unwrap();

        assert_eq!(third.code, "streak_3");
        assert_eq!(stats.streak.current, 3);
    }

    #[test]
    fn test_total_counts_every_call_but_streak_is_daily() {
        let mut stats = LocalStats::default();
        let today = date(2026, 8, 29);
        apply_local_completion(&mut stats, today);
        apply_local_completion(&mut stats, today);
        apply_local_completion(&mut stats, today);

        assert_eq!(stats.tests_completed, 3);
        assert_eq!(stats.streak.current, 1);
    }

    #[test]
    fn test_longest_streak_retained_after_reset() {
        let mut stats = LocalStats::default();
        apply_local_completion(&mut stats, date(2026, 8, 20));
        apply_local_completion(&mut stats, date(2026, 8, 21));
        apply_local_completion(&mut stats, date(2026, 8, 29));

        assert_eq!(stats.streak.current, 1);
        assert_eq!(stats.streak.longest, 2);
    }
}
