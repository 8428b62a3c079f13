//! Forced-choice typology scoring over the four fixed axes.

use serde::{Deserialize, Serialize};

use crate::assessment::{AnswerSet, Assessment, Axis};

/// Per-axis preference with rounded percentage split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisResult {
    pub axis: Axis,
    /// Winning letter for this axis.
    pub preference: char,
    /// Percentage of answers favoring the first letter.
    pub percent_a: u32,
    /// Percentage of answers favoring the second letter.
    pub percent_b: u32,
}

/// Count forced choices per axis and build the 4-letter code.
///
/// Answer value 0 counts toward the first letter, anything else toward the
/// second. A 50/50 split favors the first letter; this tie-break is part of
/// the contract so identical answer sets always reproduce the same code.
/// An axis with zero answered questions reports 50/50.
pub(super) fn score_typology(
    assessment: &Assessment,
    answers: &AnswerSet,
) -> (String, Vec<AxisResult>) {
    let mut code = String::with_capacity(4);
    let mut axes = Vec::with_capacity(Axis::ALL.len());

    for axis in Axis::ALL {
        let mut a = 0u32;
        let mut b = 0u32;
        for question in &assessment.questions {
            let on_axis = question
                .dimension
                .as_deref()
                .and_then(Axis::parse)
                .is_some_and(|q_axis| q_axis == axis);
            if !on_axis {
                continue;
            }
            match answers.get(&question.id) {
                Some(0) => a += 1,
                Some(_) => b += 1,
                None => {}
            }
        }

        let (first, second) = axis.letters();
        let preference = if a >= b { first } else { second };

        let (percent_a, percent_b) = if a + b == 0 {
            (50, 50)
        } else {
            let pa = (100.0 * f64::from(a) / f64::from(a + b)).round() as u32;
            (pa, 100 - pa)
        };

        code.push(preference);
        axes.push(AxisResult {
            axis,
            preference,
            percent_a,
            percent_b,
        });
    }

    (code, axes)
}
