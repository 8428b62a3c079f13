//! Per-dimension trait scoring.

use serde::{Deserialize, Serialize};

use crate::assessment::{AnswerSet, Assessment};

/// Score for a single declared dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub code: String,
    pub name: String,
    pub score: u32,
    pub max_score: u32,
}

/// Sum selected values per declared dimension.
///
/// Reverse items are intentionally not applied here: multidimensional
/// questionnaires in the catalog are phrased in a single valence per
/// dimension, so there is nothing to invert.
pub(super) fn score_dimensions(assessment: &Assessment, answers: &AnswerSet) -> Vec<DimensionScore> {
    let max_option_value = assessment.max_option_value();

    assessment
        .dimensions
        .iter()
        .map(|dim| {
            let members: Vec<_> = assessment
                .questions
                .iter()
                .filter(|q| q.dimension.as_deref() == Some(dim.code.as_str()))
                .collect();

            let score = members
                .iter()
                .filter_map(|q| answers.get(&q.id))
                .sum::<u32>();

            DimensionScore {
                code: dim.code.clone(),
                name: dim.name.clone(),
                score,
                max_score: members.len() as u32 * max_option_value,
            }
        })
        .collect()
}
