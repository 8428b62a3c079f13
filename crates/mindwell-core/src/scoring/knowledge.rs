//! Correct/incorrect quiz scoring with a derived linear estimate.

use serde::{Deserialize, Serialize};

use crate::assessment::{AnswerSet, Assessment};

/// Quiz outcome.
///
/// `estimate` is `round(50 + correct/total*100)` -- a simple linear
/// mapping, not a normed psychometric scale. Callers must present it as an
/// approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeResult {
    pub correct: u32,
    pub total: u32,
    pub estimate: u32,
}

pub(super) fn score_knowledge(assessment: &Assessment, answers: &AnswerSet) -> KnowledgeResult {
    let total = assessment.questions.len() as u32;
    let correct = assessment
        .questions
        .iter()
        .filter(|q| {
            // Correct answers are guaranteed present by load-time validation.
            answers.get(&q.id).is_some() && answers.get(&q.id) == q.correct_answer
        })
        .count() as u32;

    let estimate = if total == 0 {
        50
    } else {
        (50.0 + f64::from(correct) / f64::from(total) * 100.0).round() as u32
    };

    KnowledgeResult {
        correct,
        total,
        estimate,
    }
}
