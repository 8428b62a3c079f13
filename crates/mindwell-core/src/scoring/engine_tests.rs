use super::*;
use crate::assessment::{
    catalog, AnswerOption, Assessment, Interpretation, Question, ScoringKind, Severity,
};

fn two_question_assessment(reverse_items: Vec<usize>) -> Assessment {
    let mut assessment = Assessment {
        id: "mini".to_string(),
        name: "Mini".to_string(),
        description: String::new(),
        max_score: 2,
        kind: ScoringKind::Standard { reverse_items },
        questions: vec![
            Question {
                id: "q1".to_string(),
                text: "First".to_string(),
                dimension: None,
                correct_answer: None,
                options: None,
            },
            Question {
                id: "q2".to_string(),
                text: "Second".to_string(),
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
                value: 1,
                label: "yes".to_string(),
            },
        ],
        dimensions: vec![],
        interpretations: vec![
            Interpretation {
                max: 0,
                level: Severity::Minimal,
                title: "None".to_string(),
                description: String::new(),
            },
            Interpretation {
                max: 2,
                level: Severity::Severe,
                title: "All".to_string(),
                description: String::new(),
            },
        ],
    };
    assessment.validate().unwrap();
    assessment
}

fn answers(pairs: &[(&str, u32)]) -> AnswerSet {
    pairs
        .iter()
        .map(|(id, v)| (id.to_string(), *v))
        .collect()
}

#[test]
fn test_end_to_end_standard_no_reverse() {
    let assessment = two_question_assessment(vec![]);
    let result = score(&assessment, &answers(&[("q1", 1), ("q2", 1)])).unwrap();

    match result {
        ScoredResult::Standard {
            score,
            interpretation,
        } => {
            assert_eq!(score, 2);
            assert_eq!(interpretation.level, Severity::Severe);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_end_to_end_standard_with_reverse_item() {
    let assessment = two_question_assessment(vec![1]);
    let result = score(&assessment, &answers(&[("q1", 1), ("q2", 1)])).unwrap();

    // Contributed: (1 - 1) + 1 = 1
    match result {
        ScoredResult::Standard { score, .. } => assert_eq!(score, 1),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_reverse_item_inverts_against_max_option() {
    // Options 0..=3, reverse item answered 1 contributes 2.
    let mut assessment = two_question_assessment(vec![1]);
    assessment.options = vec![
        AnswerOption {
            value: 0,
            label: "0".to_string(),
        },
        AnswerOption {
            value: 1,
            label: "1".to_string(),
        },
        AnswerOption {
            value: 2,
            label: "2".to_string(),
        },
        AnswerOption {
            value: 3,
            label: "3".to_string(),
        },
    ];
    assessment.max_score = 6;
    assessment.interpretations[1].max = 6;
    assessment.validate().unwrap();

    let result = score(&assessment, &answers(&[("q1", 1), ("q2", 0)])).unwrap();
    match result {
        ScoredResult::Standard { score, .. } => assert_eq!(score, 2),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let assessment = catalog::get("mood-check").unwrap().unwrap();
    let set: AnswerSet = assessment
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| (q.id.clone(), (i as u32) % 4))
        .collect();

    let first = score(&assessment, &set).unwrap();
    let second = score(&assessment, &set).unwrap();
    match (first, second) {
        (ScoredResult::Standard { score: a, .. }, ScoredResult::Standard { score: b, .. }) => {
            assert_eq!(a, b)
        }
        other => panic!("unexpected results: {other:?}"),
    }
}

#[test]
fn test_band_lookup_is_monotonic() {
    let assessment = catalog::get("mood-check").unwrap().unwrap();
    let mut last_max = 0;
    for total in 0..=assessment.max_score {
        let band = super::standard::resolve_band(&assessment, total);
        assert!(band.max >= last_max, "band regressed at score {total}");
        last_max = band.max;
    }
}

#[test]
fn test_incomplete_answers_rejected() {
    let assessment = two_question_assessment(vec![]);
    let err = score(&assessment, &answers(&[("q1", 1)])).unwrap_err();
    assert!(matches!(
        err,
        ScoringError::IncompleteAnswers {
            expected: 2,
            got: 1
        }
    ));
}

#[test]
fn test_unknown_question_rejected() {
    let assessment = two_question_assessment(vec![]);
    let err = score(&assessment, &answers(&[("q1", 1), ("q2", 0), ("zz", 1)])).unwrap_err();
    assert!(matches!(err, ScoringError::UnknownQuestion(ref id) if id == "zz"));
}

#[test]
fn test_typology_percentages_sum_to_100() {
    let assessment = catalog::get("type-finder").unwrap().unwrap();
    let set: AnswerSet = assessment
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| (q.id.clone(), (i as u32) % 2))
        .collect();

    let result = score(&assessment, &set).unwrap();
    match result {
        ScoredResult::Typology { code, axes } => {
            assert_eq!(code.len(), 4);
            for axis in &axes {
                assert_eq!(axis.percent_a + axis.percent_b, 100);
            }
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_typology_tie_favors_first_letter() {
    let assessment = catalog::get("type-finder").unwrap().unwrap();
    // One answer 0 and one answer 1 per axis: every axis ties.
    let set: AnswerSet = assessment
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| (q.id.clone(), (i as u32) % 2))
        .collect();

    let result = score(&assessment, &set).unwrap();
    match result {
        ScoredResult::Typology { code, .. } => assert_eq!(code, "ESTJ"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_knowledge_estimate_mapping() {
    let assessment = catalog::get("pattern-quiz").unwrap().unwrap();
    // Answer everything correctly.
    let set: AnswerSet = assessment
        .questions
        .iter()
        .map(|q| (q.id.clone(), q.correct_answer.unwrap()))
        .collect();

    let result = score(&assessment, &set).unwrap();
    match result {
        ScoredResult::Knowledge(k) => {
            assert_eq!(k.correct, 5);
            assert_eq!(k.total, 5);
            assert_eq!(k.estimate, 150);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_knowledge_half_correct_maps_to_100() {
    // correct=10, total=20 -> estimate 100 per the linear mapping.
    let k = KnowledgeResult {
        correct: 10,
        total: 20,
        estimate: (50.0_f64 + 10.0 / 20.0 * 100.0).round() as u32,
    };
    assert_eq!(k.estimate, 100);
}

#[test]
fn test_multidimensional_scores_per_dimension() {
    let assessment = catalog::get("emotion-profile").unwrap().unwrap();
    // All answers at the top of the scale.
    let set: AnswerSet = assessment
        .questions
        .iter()
        .map(|q| (q.id.clone(), 5))
        .collect();

    let result = score(&assessment, &set).unwrap();
    match result {
        ScoredResult::Multidimensional { scores } => {
            assert_eq!(scores.len(), 3);
            for dim in &scores {
                assert_eq!(dim.score, 10);
                assert_eq!(dim.max_score, 10);
            }
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_projective_assessment_rejects_answer_set() {
    let assessment = catalog::get("inkblot").unwrap().unwrap();
    let err = score(&assessment, &AnswerSet::new()).unwrap_err();
    assert!(matches!(err, ScoringError::ProjectiveInput(_)));
}

#[test]
fn test_projective_requires_full_session() {
    let responses: Vec<_> = (1..=4)
        .map(|i| InkblotResponse {
            image_id: i,
            description: "a moth".to_string(),
            category: ResponseCategory::Animal,
            location: ResponseLocation::Whole,
        })
        .collect();
    let err = score_projective(&responses).unwrap_err();
    assert!(matches!(
        err,
        ScoringError::ResponseCountMismatch {
            expected: 10,
            got: 4
        }
    ));
}
