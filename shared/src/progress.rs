//! Progress-towards-goal calculations for the dashboard

use crate::models::{DailyStats, Goals, Profile};
use serde::{Deserialize, Serialize};

/// Percentage of a goal reached, rounded and capped at 100
///
/// A zero goal yields 0.
pub fn calculate_percentage(current: u64, goal: u32) -> u32 {
    if goal == 0 {
        return 0;
    }
    let percentage = (current as f64 / f64::from(goal) * 100.0).round();
    percentage.min(100.0) as u32
}

/// Body-mass index rounded to one decimal
///
/// Returns `None` when weight or height is missing.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if weight_kg <= 0.0 || height_cm <= 0.0 || !weight_kg.is_finite() || !height_cm.is_finite() {
        return None;
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Some((bmi * 10.0).round() / 10.0)
}

/// Average of the step and calorie percentages
pub fn health_score(stats: &DailyStats, goals: &Goals) -> u32 {
    let steps = calculate_percentage(stats.steps, goals.steps_goal);
    let calories = calculate_percentage(stats.calories, goals.calories_goal);
    ((f64::from(steps) + f64::from(calories)) / 2.0).round() as u32
}

/// Dashboard view of today's progress
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DailyStats,
    pub goals: Goals,
    pub steps_percent: u32,
    pub water_percent: u32,
    pub calories_percent: u32,
    pub health_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
}

/// Build the dashboard view
pub fn dashboard(stats: DailyStats, goals: Goals, profile: Option<&Profile>) -> Dashboard {
    Dashboard {
        steps_percent: calculate_percentage(stats.steps, goals.steps_goal),
        water_percent: calculate_percentage(stats.water, goals.water_goal),
        calories_percent: calculate_percentage(stats.calories, goals.calories_goal),
        health_score: health_score(&stats, &goals),
        bmi: profile.and_then(|p| calculate_bmi(p.weight, p.height)),
        stats,
        goals,
    }
}
