//! Assessment browsing and scoring.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Subcommand;
use mindwell_core::assessment::{catalog, AnswerSet, ScoringKind};
use mindwell_core::results::ResultDraft;
use mindwell_core::scoring::{self, InkblotResponse, ScoredResult};

#[derive(Subcommand)]
pub enum AssessAction {
    /// List available assessments
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one assessment's questions and options
    Show {
        /// Assessment id (e.g. mood-check)
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score a completed answer set
    Score {
        /// Assessment id
        id: String,
        /// JSON answers file: a question-id to value map, or a response
        /// list for projective assessments
        #[arg(long)]
        answers: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Save the result to the local store (standard assessments only)
        #[arg(long)]
        save: bool,
    },
}

pub fn run(action: AssessAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AssessAction::List { json } => list(json),
        AssessAction::Show { id, json } => show(&id, json),
        AssessAction::Score {
            id,
            answers,
            json,
            save,
        } => score(&id, &answers, json, save),
    }
}

fn list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let assessments = catalog::all()?;
    if json {
        let summaries: Vec<_> = assessments
            .iter()
            .map(|a| {
                serde_json::json!({
                    "id": a.id,
                    "name": a.name,
                    "questions": a.questions.len(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for a in &assessments {
            println!("{:<18} {} ({} questions)", a.id, a.name, a.questions.len());
        }
    }
    Ok(())
}

fn show(id: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let assessment = catalog::get(id)?.ok_or_else(|| format!("unknown assessment: {id}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
        return Ok(());
    }

    println!("{}: {}", assessment.id, assessment.name);
    for (i, q) in assessment.questions.iter().enumerate() {
        println!("{:>3}. {}", i + 1, q.text);
        let options = q.options.as_deref().unwrap_or(&assessment.options);
        for opt in options {
            println!("       [{}] {}", opt.value, opt.label);
        }
    }
    Ok(())
}

fn score(id: &str, answers: &PathBuf, json: bool, save: bool) -> Result<(), Box<dyn std::error::Error>> {
    let assessment = catalog::get(id)?.ok_or_else(|| format!("unknown assessment: {id}"))?;
    let raw = std::fs::read_to_string(answers)?;

    let result = if matches!(assessment.kind, ScoringKind::Projective { .. }) {
        let responses: Vec<InkblotResponse> = serde_json::from_str(&raw)?;
        scoring::score_projective(&responses)?
    } else {
        let map: HashMap<String, u32> = serde_json::from_str(&raw)?;
        let answer_set: AnswerSet = map.into_iter().collect();
        scoring::score(&assessment, &answer_set)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    if save {
        if let ScoredResult::Standard {
            score,
            ref interpretation,
        } = result
        {
            let reconciler = super::open_reconciler()?;
            let saved = reconciler.save_result(ResultDraft {
                test_id: assessment.id.clone(),
                test_name: assessment.name.clone(),
                score,
                max_score: assessment.max_score,
                level: interpretation.level,
                title: interpretation.title.clone(),
            })?;
            println!("saved: {}", saved.id);
        } else {
            return Err("only standard assessments produce storable results".into());
        }
    }

    Ok(())
}

fn print_result(result: &ScoredResult) {
    match result {
        ScoredResult::Standard {
            score,
            interpretation,
        } => {
            println!("score: {score}");
            println!(
                "{} ({}): {}",
                interpretation.title, interpretation.level, interpretation.description
            );
        }
        ScoredResult::Typology { code, axes } => {
            println!("type: {code}");
            for axis in axes {
                let (a, b) = axis.axis.letters();
                println!("  {a}/{b}: {}% / {}%", axis.percent_a, axis.percent_b);
            }
        }
        ScoredResult::Knowledge(k) => {
            println!("correct: {}/{}", k.correct, k.total);
            println!("estimate: {}", k.estimate);
        }
        ScoredResult::Multidimensional { scores } => {
            for s in scores {
                println!("{:<24} {}/{}", s.name, s.score, s.max_score);
            }
        }
        ScoredResult::Projective(analysis) => {
            println!("{}", analysis.interpretation);
        }
    }
}
