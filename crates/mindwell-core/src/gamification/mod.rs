//! Gamification layer: streaks and badges.
//!
//! The backend is a stateless HTTP service keyed by a client-generated
//! device ID, not an authenticated user. The server-returned `new_badges`
//! list is the only authoritative signal for a first threshold crossing;
//! the local fallback in [`streak`] is used when the backend is
//! unreachable.

pub mod device_id;
pub mod streak;

pub use device_id::{get_or_create_device_id, get_or_create_device_id_at};
pub use streak::{advance_streak, apply_local_completion, LocalStats};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::GamificationError;

/// An earnable badge with its earned status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub code: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub threshold: Option<u32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub earned: bool,
    #[serde(default)]
    pub earned_at: Option<String>,
}

/// Daily activity streak.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakInfo {
    pub current: u32,
    pub longest: u32,
    pub last_activity: Option<NaiveDate>,
}

/// Aggregate per-device stats reported by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub streak: StreakInfo,
    pub tests_completed: u32,
    pub badges_earned: u32,
    #[serde(default)]
    pub recent_badges: Vec<Badge>,
}

/// Backend response to a recorded completion.
///
/// `record_test` is idempotent per day for streak purposes but each call
/// increments the total test count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordTestOutcome {
    pub success: bool,
    pub streak: u32,
    pub total_tests: u32,
    #[serde(default)]
    pub new_badges: Vec<Badge>,
}

/// HTTP client for the gamification backend.
pub struct GamificationClient {
    client: reqwest::Client,
    base_url: String,
    device_id: String,
}

impl GamificationClient {
    pub fn new(base_url: impl Into<String>, device_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            device_id: device_id.into(),
        }
    }

    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        action: &str,
        extra: serde_json::Value,
    ) -> Result<T, GamificationError> {
        let mut body = json!({ "deviceId": self.device_id });
        if let (Some(map), Some(extra_map)) = (body.as_object_mut(), extra.as_object()) {
            for (k, v) in extra_map {
                map.insert(k.clone(), v.clone());
            }
        }

        let response = self
            .client
            .post(&self.base_url)
            .query(&[("action", action)])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unreadable body".to_string());
            return Err(GamificationError::Backend { status, message });
        }

        Ok(response.json().await?)
    }

    /// Current streak, test count, and recent badges for this device.
    pub async fn get_stats(&self) -> Result<UserStats, GamificationError> {
        self.request("get_stats", json!({})).await
    }

    /// Record a completed assessment and collect newly crossed badges.
    pub async fn record_test(&self, test_id: &str) -> Result<RecordTestOutcome, GamificationError> {
        self.request("record_test", json!({ "testId": test_id }))
            .await
    }

    /// Every badge with its earned status for this device.
    pub async fn get_badges(&self) -> Result<Vec<Badge>, GamificationError> {
        self.request("get_badges", json!({})).await
    }
}
