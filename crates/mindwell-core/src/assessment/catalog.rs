//! Built-in assessment catalog.
//!
//! Static definitions loaded at startup. `all()` validates every
//! definition, so a malformed entry fails fast instead of surfacing as a
//! wrong score later.

use crate::error::AssessmentError;

use super::{
    AnswerOption, Assessment, DimensionDef, Interpretation, Question, ScoringKind, Severity,
};

fn question(id: &str, text: &str) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        dimension: None,
        correct_answer: None,
        options: None,
    }
}

fn axis_question(id: &str, text: &str, axis: &str) -> Question {
    Question {
        dimension: Some(axis.to_string()),
        ..question(id, text)
    }
}

fn dimension_question(id: &str, text: &str, code: &str) -> Question {
    Question {
        dimension: Some(code.to_string()),
        ..question(id, text)
    }
}

fn quiz_question(id: &str, text: &str, choices: &[&str], correct: u32) -> Question {
    Question {
        correct_answer: Some(correct),
        options: Some(
            choices
                .iter()
                .enumerate()
                .map(|(i, label)| AnswerOption {
                    value: i as u32,
                    label: label.to_string(),
                })
                .collect(),
        ),
        ..question(id, text)
    }
}

fn option(value: u32, label: &str) -> AnswerOption {
    AnswerOption {
        value,
        label: label.to_string(),
    }
}

fn band(max: u32, level: Severity, title: &str, description: &str) -> Interpretation {
    Interpretation {
        max,
        level,
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn mood_check() -> Assessment {
    Assessment {
        id: "mood-check".to_string(),
        name: "Mood Check".to_string(),
        description: "Short self-report scale for low mood over the past two weeks.".to_string(),
        max_score: 24,
        kind: ScoringKind::Standard {
            reverse_items: vec![3, 7],
        },
        questions: vec![
            question("mc1", "I have had little interest or pleasure in doing things"),
            question("mc2", "I have been feeling down or hopeless"),
            question("mc3", "I have been sleeping well"),
            question("mc4", "I have been feeling tired or low on energy"),
            question("mc5", "I have had a poor appetite or been overeating"),
            question("mc6", "I have had trouble concentrating"),
            question("mc7", "I have been feeling good about myself"),
            question("mc8", "I have been moving or speaking noticeably slower than usual"),
        ],
        options: vec![
            option(0, "Never"),
            option(1, "Several days"),
            option(2, "More than half the days"),
            option(3, "Nearly every day"),
        ],
        dimensions: vec![],
        interpretations: vec![
            band(
                5,
                Severity::Minimal,
                "Minimal signs",
                "Your answers do not suggest a lowered mood right now.",
            ),
            band(
                11,
                Severity::Mild,
                "Mild signs",
                "Some answers point to a mildly lowered mood. Keep an eye on your sleep and routine.",
            ),
            band(
                17,
                Severity::Moderate,
                "Moderate signs",
                "Several answers point to a lowered mood. Consider talking to someone you trust.",
            ),
            band(
                24,
                Severity::Severe,
                "Strong signs",
                "Many answers point to a significantly lowered mood. Talking to a professional may help.",
            ),
        ],
    }
}

fn calm_check() -> Assessment {
    Assessment {
        id: "calm-check".to_string(),
        name: "Calm Check".to_string(),
        description: "Short self-report scale for worry and tension.".to_string(),
        max_score: 18,
        kind: ScoringKind::Standard {
            reverse_items: vec![],
        },
        questions: vec![
            question("cc1", "I have been feeling nervous or on edge"),
            question("cc2", "I have not been able to stop worrying"),
            question("cc3", "I have had trouble relaxing"),
            question("cc4", "I have been so restless it is hard to sit still"),
            question("cc5", "I have been easily annoyed or irritable"),
            question("cc6", "I have felt afraid something awful might happen"),
        ],
        options: vec![
            option(0, "Never"),
            option(1, "Several days"),
            option(2, "More than half the days"),
            option(3, "Nearly every day"),
        ],
        dimensions: vec![],
        interpretations: vec![
            band(
                4,
                Severity::Minimal,
                "Calm",
                "Your answers do not suggest elevated tension.",
            ),
            band(
                9,
                Severity::Mild,
                "Slightly tense",
                "Some tension shows in your answers. A breathing exercise may help.",
            ),
            band(
                13,
                Severity::Moderate,
                "Tense",
                "Worry and tension come through in several answers.",
            ),
            band(
                18,
                Severity::Severe,
                "Very tense",
                "Worry dominates your answers. Consider professional support.",
            ),
        ],
    }
}

fn type_finder() -> Assessment {
    Assessment {
        id: "type-finder".to_string(),
        name: "Type Finder".to_string(),
        description: "Forced-choice personality typing over four axes.".to_string(),
        max_score: 0,
        kind: ScoringKind::Typology,
        questions: vec![
            axis_question("tf1", "After a busy week I recharge by meeting friends", "EI"),
            axis_question("tf2", "In a group conversation I usually speak first", "EI"),
            axis_question("tf3", "I trust concrete facts over hunches", "SN"),
            axis_question("tf4", "I prefer step-by-step instructions to open-ended briefs", "SN"),
            axis_question("tf5", "When deciding, logic matters more to me than harmony", "TF"),
            axis_question("tf6", "Honest feedback beats tactful feedback", "TF"),
            axis_question("tf7", "I like my days planned rather than spontaneous", "JP"),
            axis_question("tf8", "I finish tasks well before the deadline", "JP"),
        ],
        options: vec![option(0, "Agree"), option(1, "Disagree")],
        dimensions: vec![],
        interpretations: vec![],
    }
}

fn pattern_quiz() -> Assessment {
    Assessment {
        id: "pattern-quiz".to_string(),
        name: "Pattern Quiz".to_string(),
        description: "Quick logic and pattern quiz with a rough ability estimate.".to_string(),
        max_score: 5,
        kind: ScoringKind::Knowledge,
        questions: vec![
            quiz_question(
                "pq1",
                "2, 4, 8, 16, ... what comes next?",
                &["24", "30", "32", "64"],
                2,
            ),
            quiz_question(
                "pq2",
                "Which word does not belong: apple, pear, carrot, plum?",
                &["apple", "pear", "carrot", "plum"],
                2,
            ),
            quiz_question(
                "pq3",
                "A is taller than B, B is taller than C. Who is shortest?",
                &["A", "B", "C", "Cannot say"],
                2,
            ),
            quiz_question(
                "pq4",
                "1, 1, 2, 3, 5, 8, ... what comes next?",
                &["11", "12", "13", "15"],
                2,
            ),
            quiz_question(
                "pq5",
                "Mirror writing of 'b' looks like which letter?",
                &["p", "d", "q", "g"],
                1,
            ),
        ],
        options: vec![],
        dimensions: vec![],
        interpretations: vec![],
    }
}

fn emotion_profile() -> Assessment {
    Assessment {
        id: "emotion-profile".to_string(),
        name: "Emotion Profile".to_string(),
        description: "Trait profile across emotional awareness dimensions.".to_string(),
        max_score: 0,
        kind: ScoringKind::Multidimensional,
        questions: vec![
            dimension_question("ep1", "I can name what I am feeling as it happens", "SA"),
            dimension_question("ep2", "I notice how my mood affects my decisions", "SA"),
            dimension_question("ep3", "I sense how others feel before they say it", "EM"),
            dimension_question("ep4", "People come to me when they are upset", "EM"),
            dimension_question("ep5", "I stay composed under pressure", "SR"),
            dimension_question("ep6", "I can let go of anger quickly", "SR"),
        ],
        options: vec![
            option(1, "Strongly disagree"),
            option(2, "Disagree"),
            option(3, "Neutral"),
            option(4, "Agree"),
            option(5, "Strongly agree"),
        ],
        dimensions: vec![
            DimensionDef {
                code: "SA".to_string(),
                name: "Self-awareness".to_string(),
            },
            DimensionDef {
                code: "EM".to_string(),
                name: "Empathy".to_string(),
            },
            DimensionDef {
                code: "SR".to_string(),
                name: "Self-regulation".to_string(),
            },
        ],
        interpretations: vec![],
    }
}

fn inkblot() -> Assessment {
    Assessment {
        id: "inkblot".to_string(),
        name: "Inkblot Cards".to_string(),
        description: "Projective coding over ten inkblot cards. Illustrative, not diagnostic."
            .to_string(),
        max_score: 0,
        kind: ScoringKind::Projective { cards: 10 },
        questions: vec![],
        options: vec![],
        dimensions: vec![],
        interpretations: vec![],
    }
}

/// Return all built-in assessments, validated.
///
/// # Errors
/// Returns the first definition error found; a failing catalog is a
/// content bug and must stop startup.
pub fn all() -> Result<Vec<Assessment>, AssessmentError> {
    let mut assessments = vec![
        mood_check(),
        calm_check(),
        type_finder(),
        pattern_quiz(),
        emotion_profile(),
        inkblot(),
    ];
    for a in &mut assessments {
        a.validate()?;
    }
    Ok(assessments)
}

/// Look up a built-in assessment by ID.
pub fn get(id: &str) -> Result<Option<Assessment>, AssessmentError> {
    Ok(all()?.into_iter().find(|a| a.id == id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads_and_validates() {
        let assessments = all().unwrap();
        assert_eq!(assessments.len(), 6);
    }

    #[test]
    fn test_catalog_lookup() {
        let found = get("mood-check").unwrap();
        assert!(found.is_some());
        assert!(get("no-such-test").unwrap().is_none());
    }

    #[test]
    fn test_mood_check_bands_cover_max_score() {
        let a = get("mood-check").unwrap().unwrap();
        assert_eq!(a.interpretations.last().unwrap().max, a.max_score);
    }

    #[test]
    fn test_standard_max_score_matches_questions() {
        let a = get("mood-check").unwrap().unwrap();
        let expected = a.questions.len() as u32 * a.max_option_value();
        assert_eq!(a.max_score, expected);
    }
}
