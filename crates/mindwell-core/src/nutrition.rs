//! Food photo analysis client.
//!
//! The analysis endpoint is a vision-model proxy speaking the chat
//! completions shape: we post an instruction plus the encoded image and
//! get back a single assistant message whose content is (ideally) a JSON
//! document. Models wrap that JSON in markdown fences often enough that
//! extraction has to tolerate it.
//!
//! Input is an already-encoded base64 payload; capture and compression
//! happen upstream.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AnalysisError;

/// Default deadline for one analysis call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const ANALYSIS_PROMPT: &str = "You are a nutrition expert. Analyze the food photo and identify \
each dish, its approximate weight in grams (judge by plate and utensil size), calories, protein, \
fat, carbs, and glycemic index (0-100). Respond with ONLY a JSON object, no extra text:\n\
{\"foods\":[{\"name\":\"...\",\"portion\":\"150g\",\"weight\":150,\"calories\":0,\"protein\":0,\
\"fat\":0,\"carbs\":0,\"glycemicIndex\":0,\"confidence\":0.9}],\"totalCalories\":0,\
\"totalProtein\":0,\"totalFat\":0,\"totalCarbs\":0,\"averageGI\":0}\n\
List every visible item. averageGI is the carb-weighted mean.";

/// One recognized dish or product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    #[serde(default)]
    pub portion: String,
    #[serde(rename = "weight", default)]
    pub weight_g: Option<f64>,
    pub calories: f64,
    #[serde(rename = "protein", default)]
    pub protein_g: f64,
    #[serde(rename = "fat", default)]
    pub fat_g: f64,
    #[serde(rename = "carbs", default)]
    pub carbs_g: f64,
    #[serde(rename = "glycemicIndex", default)]
    pub glycemic_index: Option<f64>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Macro totals across all recognized items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutrientTotals {
    #[serde(rename = "totalCalories", default)]
    pub calories: f64,
    #[serde(rename = "totalProtein", default)]
    pub protein_g: f64,
    #[serde(rename = "totalFat", default)]
    pub fat_g: f64,
    #[serde(rename = "totalCarbs", default)]
    pub carbs_g: f64,
}

/// Full analysis of one photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodAnalysis {
    pub foods: Vec<FoodItem>,
    #[serde(flatten)]
    pub totals: NutrientTotals,
    #[serde(rename = "averageGI", default)]
    pub average_gi: Option<f64>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

/// HTTP client for the food analysis endpoint.
pub struct NutritionClient {
    client: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl NutritionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout_secs,
        }
    }

    /// Analyze a base64-encoded JPEG of a meal.
    ///
    /// `hint` is an optional free-text description from the user that is
    /// forwarded to sharpen the analysis. The call is aborted after the
    /// configured deadline; a slow model never wedges the caller.
    ///
    /// # Errors
    /// `Offline` when the endpoint is unreachable, `Timeout` past the
    /// deadline, `Remote` on a non-success status, `MalformedResponse`
    /// when the model's reply cannot be decoded.
    pub async fn analyze_photo(
        &self,
        image_base64: &str,
        hint: Option<&str>,
    ) -> Result<FoodAnalysis, AnalysisError> {
        let user_text = match hint {
            Some(hint) => format!("Analyze this food. Additional context from the user: \"{hint}\""),
            None => "Analyze this food:".to_string(),
        };

        let body = json!({
            "messages": [
                { "role": "system", "content": ANALYSIS_PROMPT },
                { "role": "user", "content": [
                    { "type": "text", "text": user_text },
                    { "type": "image_url", "image_url": {
                        "url": format!("data:image/jpeg;base64,{image_base64}"),
                    }},
                ]},
            ],
            "temperature": 0.3,
            "max_tokens": 500,
        });

        let request = self.client.post(&self.base_url).json(&body).send();

        let response = match tokio::time::timeout(Duration::from_secs(self.timeout_secs), request)
            .await
        {
            Err(_) => {
                return Err(AnalysisError::Timeout {
                    secs: self.timeout_secs,
                })
            }
            Ok(Err(e)) if e.is_connect() || e.is_request() => return Err(AnalysisError::Offline),
            Ok(Err(e)) => return Err(AnalysisError::MalformedResponse(e.to_string())),
            Ok(Ok(response)) => response,
        };

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unreadable body".to_string());
            return Err(AnalysisError::Remote { status, message });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

        let content = chat
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| AnalysisError::MalformedResponse("empty choices".to_string()))?;

        parse_analysis(content)
    }
}

/// Extract the analysis JSON from a model reply.
///
/// Tolerates markdown code fences and prose around the object.
fn parse_analysis(content: &str) -> Result<FoodAnalysis, AnalysisError> {
    let candidate = extract_json(content);
    let analysis: FoodAnalysis = serde_json::from_str(candidate)
        .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

    if analysis.foods.is_empty() {
        return Err(AnalysisError::MalformedResponse(
            "no foods recognized".to_string(),
        ));
    }
    Ok(analysis)
}

fn extract_json(content: &str) -> &str {
    let trimmed = content.trim();

    // ```json ... ``` or bare ``` ... ```
    let inner = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed);

    // Fall back to the outermost brace span when prose surrounds the object.
    match (inner.find('{'), inner.rfind('}')) {
        (Some(start), Some(end)) if start < end => &inner[start..=end],
        _ => inner,
    }
}
