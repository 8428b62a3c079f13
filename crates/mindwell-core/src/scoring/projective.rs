//! Heuristic projective coding over inkblot card responses.
//!
//! This is a commentary generator over response frequencies, not a
//! validated clinical scoring system. Output must always be presented as
//! illustrative.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of cards in a session.
pub const CARD_COUNT: usize = 10;

/// Content category a response is coded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCategory {
    Human,
    Animal,
    Nature,
    Object,
    Abstract,
    Anatomy,
    Movement,
    Other,
}

impl ResponseCategory {
    /// All categories in coding-form order.
    pub const ALL: [ResponseCategory; 8] = [
        ResponseCategory::Human,
        ResponseCategory::Animal,
        ResponseCategory::Nature,
        ResponseCategory::Object,
        ResponseCategory::Abstract,
        ResponseCategory::Anatomy,
        ResponseCategory::Movement,
        ResponseCategory::Other,
    ];

    /// Display label used in breakdowns and interpretation text.
    pub fn label(&self) -> &'static str {
        match self {
            ResponseCategory::Human => "Human / body part",
            ResponseCategory::Animal => "Animal / insect",
            ResponseCategory::Nature => "Nature / landscape",
            ResponseCategory::Object => "Object / item",
            ResponseCategory::Abstract => "Abstraction / symbol",
            ResponseCategory::Anatomy => "Anatomy / x-ray",
            ResponseCategory::Movement => "Movement / action",
            ResponseCategory::Other => "Other",
        }
    }
}

/// Where on the card the response was seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseLocation {
    Whole,
    Detail,
    Space,
}

impl ResponseLocation {
    pub fn label(&self) -> &'static str {
        match self {
            ResponseLocation::Whole => "Whole",
            ResponseLocation::Detail => "Detail",
            ResponseLocation::Space => "Space",
        }
    }
}

/// One coded response to a single card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InkblotResponse {
    /// 1-based card number
    pub image_id: u32,
    pub description: String,
    pub category: ResponseCategory,
    pub location: ResponseLocation,
}

/// Aggregated session commentary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectiveAnalysis {
    pub total_responses: usize,
    pub category_breakdown: BTreeMap<String, u32>,
    pub location_breakdown: BTreeMap<String, u32>,
    pub interpretation: String,
    pub traits: Vec<String>,
}

// Trait inference thresholds over a 10-card session.
const HUMAN_THRESHOLD: usize = 3;
const ANIMAL_THRESHOLD: usize = 4;
const ABSTRACT_THRESHOLD: usize = 2;
const MOVEMENT_THRESHOLD: usize = 2;
const WHOLE_THRESHOLD: usize = 7;
const DETAIL_THRESHOLD: usize = 5;
const ELABORATION_THRESHOLD: usize = 50;

fn category_count(responses: &[InkblotResponse], category: ResponseCategory) -> usize {
    responses.iter().filter(|r| r.category == category).count()
}

fn location_count(responses: &[InkblotResponse], location: ResponseLocation) -> usize {
    responses.iter().filter(|r| r.location == location).count()
}

/// Aggregate frequencies and derive traits and a templated interpretation.
pub(super) fn analyze(responses: &[InkblotResponse]) -> ProjectiveAnalysis {
    let category_breakdown: BTreeMap<String, u32> = ResponseCategory::ALL
        .iter()
        .map(|c| (c.label().to_string(), category_count(responses, *c) as u32))
        .collect();

    let location_breakdown: BTreeMap<String, u32> = [
        ResponseLocation::Whole,
        ResponseLocation::Detail,
        ResponseLocation::Space,
    ]
    .iter()
    .map(|l| (l.label().to_string(), location_count(responses, *l) as u32))
    .collect();

    let mut traits = Vec::new();

    if category_count(responses, ResponseCategory::Human) >= HUMAN_THRESHOLD {
        traits.push("Interest in people and social relationships".to_string());
    }
    if category_count(responses, ResponseCategory::Animal) >= ANIMAL_THRESHOLD {
        traits.push("Practical, concrete thinking style".to_string());
    }
    if category_count(responses, ResponseCategory::Abstract) >= ABSTRACT_THRESHOLD {
        traits.push("Inclination toward abstract thinking".to_string());
    }
    if category_count(responses, ResponseCategory::Movement) >= MOVEMENT_THRESHOLD {
        traits.push("Active imagination and creative potential".to_string());
    }
    if location_count(responses, ResponseLocation::Whole) >= WHOLE_THRESHOLD {
        traits.push("Holistic perception, ability to see the big picture".to_string());
    }
    if location_count(responses, ResponseLocation::Detail) >= DETAIL_THRESHOLD {
        traits.push("Attention to detail, analytical mindset".to_string());
    }

    if !responses.is_empty() {
        let total_len: usize = responses.iter().map(|r| r.description.chars().count()).sum();
        if total_len / responses.len() > ELABORATION_THRESHOLD {
            traits.push("Well-developed verbal expression".to_string());
        }
    }

    if traits.is_empty() {
        traits.push("Balanced perceptual style".to_string());
    }

    ProjectiveAnalysis {
        total_responses: responses.len(),
        interpretation: build_interpretation(responses),
        category_breakdown,
        location_breakdown,
        traits,
    }
}

/// Templated summary naming the two most frequent categories.
fn build_interpretation(responses: &[InkblotResponse]) -> String {
    let mut counts: Vec<(&'static str, usize)> = ResponseCategory::ALL
        .iter()
        .map(|c| (c.label(), category_count(responses, *c)))
        .filter(|(_, count)| *count > 0)
        .collect();
    // Stable sort keeps coding-form order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let leading = counts
        .iter()
        .take(2)
        .map(|(label, count)| format!("{label} ({count})"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Your responses show an individual perceptual style. You gave {} responses \
         across {} cards. Leading categories: {}.",
        responses.len(),
        CARD_COUNT,
        leading
    )
}
