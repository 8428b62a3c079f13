//! Assessment definitions: questions, answer options, scoring strategy,
//! and interpretation bands.
//!
//! Definitions are static data validated once at load time via
//! [`Assessment::validate`]. Malformed definitions (out-of-order bands,
//! missing dimensions, missing correct answers) are rejected before any
//! scoring can happen.

pub mod catalog;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::AssessmentError;

/// A single question inside an assessment. Immutable once defined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the assessment
    pub id: String,
    /// Question text shown to the user
    pub text: String,
    /// Dimension code for typology/multidimensional assessments
    #[serde(default)]
    pub dimension: Option<String>,
    /// Index of the correct option for knowledge assessments
    #[serde(default)]
    pub correct_answer: Option<u32>,
    /// Per-question option override (knowledge assessments)
    #[serde(default)]
    pub options: Option<Vec<AnswerOption>>,
}

/// One selectable answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: u32,
    pub label: String,
}

/// Qualitative severity level attached to an interpretation band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    Severe,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Minimal => "minimal",
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        };
        f.write_str(s)
    }
}

/// A score band: `max` is an inclusive upper bound. Bands are ordered
/// ascending; band N's territory begins where band N-1's ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub max: u32,
    pub level: Severity,
    pub title: String,
    pub description: String,
}

/// A named dimension measured by a multidimensional assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionDef {
    pub code: String,
    pub name: String,
}

/// Typology axis in fixed output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Extraversion / Introversion
    EI,
    /// Sensing / Intuition
    SN,
    /// Thinking / Feeling
    TF,
    /// Judging / Perceiving
    JP,
}

impl Axis {
    /// All axes in the order they appear in the 4-letter code.
    pub const ALL: [Axis; 4] = [Axis::EI, Axis::SN, Axis::TF, Axis::JP];

    /// The two preference letters for this axis, first letter wins ties.
    pub fn letters(&self) -> (char, char) {
        match self {
            Axis::EI => ('E', 'I'),
            Axis::SN => ('S', 'N'),
            Axis::TF => ('T', 'F'),
            Axis::JP => ('J', 'P'),
        }
    }

    /// Parse a two-letter axis code.
    pub fn parse(code: &str) -> Option<Axis> {
        match code {
            "EI" => Some(Axis::EI),
            "SN" => Some(Axis::SN),
            "TF" => Some(Axis::TF),
            "JP" => Some(Axis::JP),
            _ => None,
        }
    }
}

/// Scoring strategy, one variant per strategy.
///
/// Adding a new strategy without handling it in the engine is a compile
/// error: the engine matches exhaustively on this enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScoringKind {
    /// Summed Likert scale with optional reverse-keyed items
    /// (1-based question positions scored as `max_option_value - v`).
    Standard { reverse_items: Vec<usize> },
    /// Forced-choice typology over the four fixed axes.
    Typology,
    /// Correct/incorrect quiz with a derived linear estimate.
    Knowledge,
    /// Per-dimension trait sums.
    Multidimensional,
    /// Free-text projective coding over inkblot cards.
    Projective { cards: usize },
}

/// A fixed questionnaire definition with a scoring strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub id: String,
    pub name: String,
    pub description: String,
    pub max_score: u32,
    pub kind: ScoringKind,
    pub questions: Vec<Question>,
    /// Shared option set for standard/typology/multidimensional questions.
    pub options: Vec<AnswerOption>,
    #[serde(default)]
    pub dimensions: Vec<DimensionDef>,
    #[serde(default)]
    pub interpretations: Vec<Interpretation>,
}

impl Assessment {
    /// Largest option value in the shared option set.
    pub fn max_option_value(&self) -> u32 {
        self.options.iter().map(|o| o.value).max().unwrap_or(0)
    }

    /// Validate the definition, sorting interpretation bands ascending.
    ///
    /// Must be called once at load time; scoring assumes a validated
    /// definition.
    ///
    /// # Errors
    /// Returns the first data-shape problem found.
    pub fn validate(&mut self) -> Result<(), AssessmentError> {
        if self.questions.is_empty() && !matches!(self.kind, ScoringKind::Projective { .. }) {
            return Err(AssessmentError::NoQuestions(self.id.clone()));
        }

        let mut seen = std::collections::HashSet::new();
        for q in &self.questions {
            if !seen.insert(q.id.as_str()) {
                return Err(AssessmentError::DuplicateQuestion {
                    assessment: self.id.clone(),
                    question: q.id.clone(),
                });
            }
        }

        match &self.kind {
            ScoringKind::Standard { .. } => {
                if self.options.is_empty() {
                    return Err(AssessmentError::NoOptions(self.id.clone()));
                }
                self.validate_bands()?;
            }
            ScoringKind::Typology => {
                for q in &self.questions {
                    let code = q.dimension.as_deref().ok_or_else(|| {
                        AssessmentError::MissingDimension {
                            assessment: self.id.clone(),
                            question: q.id.clone(),
                        }
                    })?;
                    if Axis::parse(code).is_none() {
                        return Err(AssessmentError::InvalidAxis {
                            assessment: self.id.clone(),
                            question: q.id.clone(),
                            code: code.to_string(),
                        });
                    }
                }
            }
            ScoringKind::Knowledge => {
                for q in &self.questions {
                    if q.correct_answer.is_none() {
                        return Err(AssessmentError::MissingCorrectAnswer {
                            assessment: self.id.clone(),
                            question: q.id.clone(),
                        });
                    }
                }
            }
            ScoringKind::Multidimensional => {
                if self.options.is_empty() {
                    return Err(AssessmentError::NoOptions(self.id.clone()));
                }
                let declared: std::collections::HashSet<&str> =
                    self.dimensions.iter().map(|d| d.code.as_str()).collect();
                for q in &self.questions {
                    let code = q.dimension.as_deref().ok_or_else(|| {
                        AssessmentError::MissingDimension {
                            assessment: self.id.clone(),
                            question: q.id.clone(),
                        }
                    })?;
                    if !declared.contains(code) {
                        return Err(AssessmentError::UnknownDimension {
                            assessment: self.id.clone(),
                            question: q.id.clone(),
                            dimension: code.to_string(),
                        });
                    }
                }
            }
            ScoringKind::Projective { .. } => {}
        }

        Ok(())
    }

    /// Sort bands ascending by `max` and verify they are strictly
    /// monotonic and cover the maximum score.
    fn validate_bands(&mut self) -> Result<(), AssessmentError> {
        if self.interpretations.is_empty() {
            return Err(AssessmentError::NoInterpretations(self.id.clone()));
        }

        self.interpretations.sort_by_key(|i| i.max);

        for pair in self.interpretations.windows(2) {
            if pair[1].max <= pair[0].max {
                return Err(AssessmentError::NonMonotonicBands {
                    assessment: self.id.clone(),
                    prev: pair[0].max,
                    next: pair[1].max,
                });
            }
        }

        let top = self.interpretations.last().map(|i| i.max).unwrap_or(0);
        if top < self.max_score {
            return Err(AssessmentError::BandsNotExhaustive {
                assessment: self.id.clone(),
                top,
                max_score: self.max_score,
            });
        }

        Ok(())
    }
}

/// Mapping from question ID to the selected option value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: HashMap<String, u32>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any previous value for the question.
    pub fn insert(&mut self, question_id: impl Into<String>, value: u32) {
        self.answers.insert(question_id.into(), value);
    }

    /// Selected value for a question, if answered.
    pub fn get(&self, question_id: &str) -> Option<u32> {
        self.answers.get(question_id).copied()
    }

    /// Iterate over `(question_id, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl FromIterator<(String, u32)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (String, u32)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_assessment() -> Assessment {
        Assessment {
            id: "t".to_string(),
            name: "Test".to_string(),
            description: String::new(),
            max_score: 6,
            kind: ScoringKind::Standard {
                reverse_items: vec![],
            },
            questions: vec![
                Question {
                    id: "q1".to_string(),
                    text: "One".to_string(),
                    dimension: None,
                    correct_answer: None,
                    options: None,
                },
                Question {
                    id: "q2".to_string(),
                    text: "Two".to_string(),
                    dimension: None,
                    correct_answer: None,
                    options: None,
                },
            ],
            options: vec![
                AnswerOption {
                    value: 0,
                    label: "no".to_string(),
                },
                AnswerOption {
                    value: 3,
                    label: "yes".to_string(),
                },
            ],
            dimensions: vec![],
            interpretations: vec![
                Interpretation {
                    max: 2,
                    level: Severity::Minimal,
                    title: "Low".to_string(),
                    description: String::new(),
                },
                Interpretation {
                    max: 6,
                    level: Severity::Severe,
                    title: "High".to_string(),
                    description: String::new(),
                },
            ],
        }
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        let mut a = standard_assessment();
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_validate_sorts_bands() {
        let mut a = standard_assessment();
        a.interpretations.reverse();
        a.validate().unwrap();
        assert_eq!(a.interpretations[0].max, 2);
        assert_eq!(a.interpretations[1].max, 6);
    }

    #[test]
    fn test_validate_rejects_duplicate_band_max() {
        let mut a = standard_assessment();
        a.interpretations[0].max = 6;
        let err = a.validate().unwrap_err();
        assert!(matches!(err, AssessmentError::NonMonotonicBands { .. }));
    }

    #[test]
    fn test_validate_rejects_non_exhaustive_bands() {
        let mut a = standard_assessment();
        a.max_score = 10;
        let err = a.validate().unwrap_err();
        assert!(matches!(err, AssessmentError::BandsNotExhaustive { .. }));
    }

    #[test]
    fn test_validate_rejects_duplicate_question() {
        let mut a = standard_assessment();
        a.questions[1].id = "q1".to_string();
        let err = a.validate().unwrap_err();
        assert!(matches!(err, AssessmentError::DuplicateQuestion { .. }));
    }

    #[test]
    fn test_validate_typology_requires_known_axis() {
        let mut a = standard_assessment();
        a.kind = ScoringKind::Typology;
        a.questions[0].dimension = Some("EI".to_string());
        a.questions[1].dimension = Some("XY".to_string());
        let err = a.validate().unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidAxis { .. }));
    }

    #[test]
    fn test_validate_knowledge_requires_correct_answer() {
        let mut a = standard_assessment();
        a.kind = ScoringKind::Knowledge;
        a.questions[0].correct_answer = Some(1);
        let err = a.validate().unwrap_err();
        assert!(matches!(err, AssessmentError::MissingCorrectAnswer { .. }));
    }

    #[test]
    fn test_validate_multidimensional_requires_declared_dimension() {
        let mut a = standard_assessment();
        a.kind = ScoringKind::Multidimensional;
        a.dimensions = vec![DimensionDef {
            code: "SA".to_string(),
            name: "Self-awareness".to_string(),
        }];
        a.questions[0].dimension = Some("SA".to_string());
        a.questions[1].dimension = Some("ZZ".to_string());
        let err = a.validate().unwrap_err();
        assert!(matches!(err, AssessmentError::UnknownDimension { .. }));
    }

    #[test]
    fn test_max_option_value() {
        let a = standard_assessment();
        assert_eq!(a.max_option_value(), 3);
    }
}
