//! Remote persistence capability.
//!
//! The remote store is a black box with upsert-by-id semantics and
//! eventual consistency. A fetch immediately after an upsert is not
//! guaranteed to observe the just-written rows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::Severity;
use crate::error::SyncError;
use crate::results::TestResult;

/// Wire representation of a result row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteRow {
    pub id: Uuid,
    pub user_id: String,
    pub test_id: String,
    pub test_name: String,
    pub score: u32,
    pub max_score: u32,
    pub level: Severity,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl RemoteRow {
    pub fn from_result(user_id: &str, result: &TestResult) -> Self {
        Self {
            id: result.id,
            user_id: user_id.to_string(),
            test_id: result.test_id.clone(),
            test_name: result.test_name.clone(),
            score: result.score,
            max_score: result.max_score,
            level: result.level,
            title: result.title.clone(),
            created_at: result.date,
        }
    }

    pub fn into_result(self) -> TestResult {
        TestResult {
            id: self.id,
            test_id: self.test_id,
            test_name: self.test_name,
            score: self.score,
            max_score: self.max_score,
            level: self.level,
            title: self.title,
            date: self.created_at,
        }
    }
}

/// Abstract remote persistence for result records.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Upsert records keyed by id. Idempotent; safe to retry.
    async fn upsert(&self, user_id: &str, results: &[TestResult]) -> Result<(), SyncError>;

    /// Full history for a user, ordered by `created_at` descending.
    async fn fetch(&self, user_id: &str) -> Result<Vec<TestResult>, SyncError>;
}

/// HTTP client for the hosted result store.
pub struct HttpRemote {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRemote {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/test_results", self.base_url.trim_end_matches('/'))
    }

    async fn error_from(response: reqwest::Response) -> SyncError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unreadable body".to_string());
        SyncError::Remote { status, message }
    }
}

#[async_trait]
impl RemoteStore for HttpRemote {
    async fn upsert(&self, user_id: &str, results: &[TestResult]) -> Result<(), SyncError> {
        let rows: Vec<RemoteRow> = results
            .iter()
            .map(|r| RemoteRow::from_result(user_id, r))
            .collect();

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("on_conflict", "id")])
            .json(&rows)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        Ok(())
    }

    async fn fetch(&self, user_id: &str) -> Result<Vec<TestResult>, SyncError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("user_id", user_id), ("order", "created_at.desc")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let rows: Vec<RemoteRow> = response.json().await?;
        Ok(rows.into_iter().map(RemoteRow::into_result).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> TestResult {
        TestResult {
            id: Uuid::new_v4(),
            test_id: "mood-check".to_string(),
            test_name: "Mood Check".to_string(),
            score: 7,
            max_score: 24,
            level: Severity::Mild,
            title: "Mild signs".to_string(),
            date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_upsert_posts_rows_with_conflict_key() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/test_results")
            .match_query(mockito::Matcher::UrlEncoded(
                "on_conflict".into(),
                "id".into(),
            ))
            .with_status(201)
            .create_async()
            .await;

        let remote = HttpRemote::new(server.url());
        remote
            .upsert("user-1", &[sample_result()])
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upsert_surfaces_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/test_results")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let remote = HttpRemote::new(server.url());
        let err = remote
            .upsert("user-1", &[sample_result()])
            .await
            .unwrap_err();
        assert!(matches!(err, SyncError::Remote { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_fetch_decodes_rows() {
        let result = sample_result();
        let rows = vec![RemoteRow::from_result("user-1", &result)];

        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/test_results")
            .match_query(mockito::Matcher::UrlEncoded(
                "user_id".into(),
                "user-1".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&rows).unwrap())
            .create_async()
            .await;

        let remote = HttpRemote::new(server.url());
        let fetched = remote.fetch("user-1").await.unwrap();
        assert_eq!(fetched, vec![result]);
    }
}
