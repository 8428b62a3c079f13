//! Scoring engine.
//!
//! Pure, deterministic transformation from a completed answer set to a
//! typed result. No side effects, no I/O. The engine validates its
//! preconditions defensively even though the UI is expected to block
//! incomplete submissions.

mod dimensions;
mod knowledge;
mod projective;
mod standard;
mod typology;

pub use dimensions::DimensionScore;
pub use knowledge::KnowledgeResult;
pub use projective::{
    InkblotResponse, ProjectiveAnalysis, ResponseCategory, ResponseLocation, CARD_COUNT,
};
pub use typology::AxisResult;

use serde::{Deserialize, Serialize};

use crate::assessment::{AnswerSet, Assessment, Interpretation, ScoringKind};
use crate::error::ScoringError;

/// Scored result, one variant per scoring strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScoredResult {
    /// Summed score with its resolved interpretation band.
    Standard {
        score: u32,
        interpretation: Interpretation,
    },
    /// 4-letter type code with per-axis preference strengths.
    Typology { code: String, axes: Vec<AxisResult> },
    /// Correct-answer count and a derived linear estimate.
    Knowledge(KnowledgeResult),
    /// Per-dimension trait scores.
    Multidimensional { scores: Vec<DimensionScore> },
    /// Heuristic projective commentary.
    Projective(ProjectiveAnalysis),
}

/// Score a completed answer set against a validated assessment.
///
/// # Errors
/// - [`ScoringError::IncompleteAnswers`] if any question is unanswered.
/// - [`ScoringError::UnknownQuestion`] if the answer set references a
///   question the assessment does not contain.
/// - [`ScoringError::ProjectiveInput`] for projective assessments, which
///   take structured responses via [`score_projective`] instead.
pub fn score(assessment: &Assessment, answers: &AnswerSet) -> Result<ScoredResult, ScoringError> {
    if let ScoringKind::Projective { .. } = assessment.kind {
        return Err(ScoringError::ProjectiveInput(assessment.id.clone()));
    }

    check_complete(assessment, answers)?;

    let result = match &assessment.kind {
        ScoringKind::Standard { reverse_items } => {
            let (score, interpretation) =
                standard::score_standard(assessment, answers, reverse_items);
            ScoredResult::Standard {
                score,
                interpretation,
            }
        }
        ScoringKind::Typology => {
            let (code, axes) = typology::score_typology(assessment, answers);
            ScoredResult::Typology { code, axes }
        }
        ScoringKind::Knowledge => {
            ScoredResult::Knowledge(knowledge::score_knowledge(assessment, answers))
        }
        ScoringKind::Multidimensional => ScoredResult::Multidimensional {
            scores: dimensions::score_dimensions(assessment, answers),
        },
        ScoringKind::Projective { .. } => unreachable!("handled above"),
    };

    Ok(result)
}

/// Score a projective card session.
///
/// # Errors
/// Returns [`ScoringError::ResponseCountMismatch`] unless exactly one
/// response per card is present.
pub fn score_projective(responses: &[InkblotResponse]) -> Result<ScoredResult, ScoringError> {
    if responses.len() != CARD_COUNT {
        return Err(ScoringError::ResponseCountMismatch {
            expected: CARD_COUNT,
            got: responses.len(),
        });
    }
    Ok(ScoredResult::Projective(projective::analyze(responses)))
}

/// Every question must have an answer, and every answer must belong to a
/// question.
fn check_complete(assessment: &Assessment, answers: &AnswerSet) -> Result<(), ScoringError> {
    for (id, _) in answers.iter() {
        if !assessment.questions.iter().any(|q| q.id == id) {
            return Err(ScoringError::UnknownQuestion(id.to_string()));
        }
    }

    let answered = assessment
        .questions
        .iter()
        .filter(|q| answers.get(&q.id).is_some())
        .count();
    if answered < assessment.questions.len() {
        return Err(ScoringError::IncompleteAnswers {
            expected: assessment.questions.len(),
            got: answered,
        });
    }

    Ok(())
}

#[cfg(test)]
mod engine_tests;
