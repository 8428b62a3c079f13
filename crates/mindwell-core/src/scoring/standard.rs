//! Standard summed scoring with reverse-keyed items and ceiling-threshold
//! band resolution.

use crate::assessment::{AnswerSet, Assessment, Interpretation};

/// Sum contributed values and resolve the interpretation band.
///
/// Reverse items are 1-based question positions whose contributed value is
/// `max_option_value - v`; a question phrased in the opposite valence from
/// the rest of the scale is inverted before summing.
pub(super) fn score_standard(
    assessment: &Assessment,
    answers: &AnswerSet,
    reverse_items: &[usize],
) -> (u32, Interpretation) {
    let max_option_value = assessment.max_option_value();

    let mut total = 0u32;
    for (index, question) in assessment.questions.iter().enumerate() {
        // Completeness was checked by the engine entry point.
        let Some(value) = answers.get(&question.id) else {
            continue;
        };
        if reverse_items.contains(&(index + 1)) {
            total += max_option_value.saturating_sub(value);
        } else {
            total += value;
        }
    }

    (total, resolve_band(assessment, total))
}

/// Ceiling-threshold lookup: first band whose inclusive upper bound is at
/// or above the score wins; the last band is open-ended.
///
/// Bands are sorted and validated at assessment load time, so iteration
/// order is ascending by `max`.
pub(super) fn resolve_band(assessment: &Assessment, score: u32) -> Interpretation {
    for band in &assessment.interpretations {
        if score <= band.max {
            return band.clone();
        }
    }
    assessment
        .interpretations
        .last()
        .cloned()
        .expect("validated assessment has at least one band")
}
