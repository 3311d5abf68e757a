//! Plan providers
//!
//! `RulePlanProvider` wraps the deterministic table. `GeminiPlanProvider`
//! asks Gemini's `generateContent` endpoint for the same JSON shape and
//! leaves recovery to the caller: any error it returns is answered with the
//! offline plan.

use crate::config::AiConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use fitdash_shared::{planner, Plan, PlanError, Profile};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

#[async_trait]
pub trait PlanProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Produce a plan for an already validated profile
    async fn generate(&self, profile: &Profile) -> Result<Plan, PlanError>;
}

/// Build the provider selected by configuration
pub fn provider_from_config(config: &AiConfig) -> Result<Arc<dyn PlanProvider>> {
    if !config.enabled {
        info!("AI plans disabled; using the rule-based generator");
        return Ok(Arc::new(RulePlanProvider));
    }

    let provider = GeminiPlanProvider::new(
        SecretString::new(config.api_key.clone()),
        &config.model,
        &config.base_url,
        config.timeout_secs,
    )?;
    info!(model = %config.model, "AI plans enabled");
    Ok(Arc::new(provider))
}

// ============================================================================
// Rule table
// ============================================================================

pub struct RulePlanProvider;

#[async_trait]
impl PlanProvider for RulePlanProvider {
    fn name(&self) -> &'static str {
        "rules"
    }

    async fn generate(&self, profile: &Profile) -> Result<Plan, PlanError> {
        Ok(planner::plan_for(profile.gender, profile.goal, profile.diet_type))
    }
}

// ============================================================================
// Gemini
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct GeminiPlanProvider {
    client: Client,
    api_key: SecretString,
    model: String,
    base_url: String,
    timeout_secs: u64,
}

impl GeminiPlanProvider {
    pub fn new(api_key: SecretString, model: &str, base_url: &str, timeout_secs: u64) -> Result<Self> {
        if api_key.expose_secret().trim().is_empty() {
            anyhow::bail!("Gemini API key is empty");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key,
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// The URL carries the API key, so it is stripped from errors
    fn map_send_error(&self, err: reqwest::Error) -> PlanError {
        if err.is_timeout() {
            PlanError::Timeout(self.timeout_secs)
        } else {
            PlanError::Request(err.without_url().to_string())
        }
    }
}

#[async_trait]
impl PlanProvider for GeminiPlanProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    #[instrument(skip_all, fields(model = %self.model))]
    async fn generate(&self, profile: &Profile) -> Result<Plan, PlanError> {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![TextPart {
                    text: build_prompt(profile),
                }],
            }],
        };

        debug!("Sending plan request to Gemini");
        let response = self
            .client
            .post(self.url())
            .query(&[("key", self.api_key.expose_secret().as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown").to_string());
            return Err(PlanError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: GenerateResponse = serde_json::from_str(&text)?;
        let reply = envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| PlanError::Parse("Response has no candidate text".to_string()))?;

        parse_plan_reply(&reply)
    }
}

/// The single fixed prompt
pub fn build_prompt(profile: &Profile) -> String {
    format!(
        r#"Act as a fitness coach. Create a 1-day JSON plan for:
{gender}, {age}yrs, {weight}kg, Goal: {goal}, Diet: {diet}.

Return ONLY strict JSON (No markdown):
{{
  "summary": "Short motivation.",
  "meals": [
    {{ "type": "Breakfast", "name": "Food Name", "calories": 350, "protein": "15g" }},
    {{ "type": "Lunch", "name": "Food Name", "calories": 550, "protein": "25g" }},
    {{ "type": "Dinner", "name": "Food Name", "calories": 450, "protein": "20g" }}
  ],
  "workout": {{
    "type": "Workout Name",
    "duration": "45 min",
    "exercises": ["Ex 1", "Ex 2", "Ex 3"]
  }}
}}"#,
        gender = profile.gender,
        age = profile.age,
        weight = profile.weight,
        goal = profile.goal,
        diet = profile.diet_type,
    )
}

/// Pull a plan out of model text
///
/// Markdown fences are dropped and only the span from the first `{` to the
/// last `}` is parsed.
pub fn parse_plan_reply(reply: &str) -> Result<Plan, PlanError> {
    let cleaned = reply.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    let (start, end) = match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => return Err(PlanError::Parse("No JSON object in reply".to_string())),
    };

    let plan: Plan = serde_json::from_str(&cleaned[start..=end])?;
    plan.check().map_err(|e| PlanError::Shape(e.to_string()))?;
    Ok(plan)
}
