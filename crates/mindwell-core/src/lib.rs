//! # Mindwell Core Library
//!
//! Core business logic for the Mindwell self-assessment app. All
//! operations are available through a standalone CLI binary, with any
//! GUI expected to be a thin layer over this same library.
//!
//! ## Architecture
//!
//! - **Assessments**: Validated questionnaire definitions and a scoring
//!   engine dispatching on the scoring kind (severity bands, typology,
//!   knowledge, multidimensional, projective)
//! - **Results**: Local-first SQLite store with an outbox-based sync
//!   reconciler; reads never wait on the network
//! - **Gamification**: Streaks and badges via a device-keyed backend,
//!   with an offline fallback
//! - **Nutrition**: Food photo analysis through a vision-model proxy
//!
//! ## Key Components
//!
//! - [`Assessment`]: A questionnaire definition with its scoring rules
//! - [`score`]: Answers in, typed result out
//! - [`Reconciler`]: Result persistence and cloud reconciliation
//! - [`Config`]: Application configuration management

pub mod assessment;
pub mod error;
pub mod gamification;
pub mod nutrition;
pub mod results;
pub mod scoring;
pub mod storage;
pub mod sync;

pub use assessment::{AnswerSet, Assessment, Axis, ScoringKind, Severity};
pub use error::{CoreError, Result, ScoringError, SyncError};
pub use gamification::{GamificationClient, UserStats};
pub use nutrition::{FoodAnalysis, NutritionClient};
pub use results::{ResultDraft, TestResult};
pub use scoring::{score, score_projective, ScoredResult};
pub use storage::{Config, SqliteStore};
pub use sync::{HttpRemote, Reconciler, RemoteStore, SyncReport, SyncStatus};
