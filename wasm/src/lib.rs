//! FitDash WASM Module
//!
//! Browser bindings for the rule-based plan generator and the progress
//! math, so the client can build a plan offline.

use fitdash_shared::{planner, progress, Profile};
use wasm_bindgen::prelude::*;

/// Generate a plan from a profile JSON string; returns the plan as JSON
///
/// Throws a string error for a malformed or out-of-range profile.
#[wasm_bindgen(js_name = generatePlan)]
pub fn generate_plan(profile_json: &str) -> Result<String, JsValue> {
    plan_json(profile_json).map_err(|e| JsValue::from_str(&e))
}

/// Same as `generatePlan`, with the summary flagged as an offline plan
#[wasm_bindgen(js_name = offlinePlan)]
pub fn offline_plan(profile_json: &str) -> Result<String, JsValue> {
    offline_plan_json(profile_json).map_err(|e| JsValue::from_str(&e))
}

/// Percentage of a goal reached, rounded and capped at 100
#[wasm_bindgen(js_name = calculatePercentage)]
pub fn calculate_percentage(current: f64, goal: f64) -> u32 {
    if !current.is_finite() || !goal.is_finite() || goal < 1.0 {
        return 0;
    }
    progress::calculate_percentage(current.max(0.0) as u64, goal.min(f64::from(u32::MAX)) as u32)
}

/// BMI to one decimal; NaN when weight or height is missing
#[wasm_bindgen(js_name = calculateBmi)]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    progress::calculate_bmi(weight_kg, height_cm).unwrap_or(f64::NAN)
}

fn parse_profile(profile_json: &str) -> Result<Profile, String> {
    serde_json::from_str(profile_json).map_err(|e| format!("Invalid profile: {e}"))
}

fn plan_json(profile_json: &str) -> Result<String, String> {
    let profile = parse_profile(profile_json)?;
    let plan = planner::generate(&profile).map_err(|e| e.to_string())?;
    serde_json::to_string(&plan).map_err(|e| e.to_string())
}

fn offline_plan_json(profile_json: &str) -> Result<String, String> {
    let profile = parse_profile(profile_json)?;
    let plan = planner::offline_plan(&profile).map_err(|e| e.to_string())?;
    serde_json::to_string(&plan).map_err(|e| e.to_string())
}
