//! API request and response types

use crate::models::{
    DailyStats, Intensity, MealEntry, MealType, Plan, Profile, WorkoutEntry,
};
use crate::validation::{MAX_DURATION_MINUTES, MAX_ENTRY_CALORIES, MAX_WATER_INCREMENT_ML};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Upper bound accepted for a step count update
pub const MAX_STEPS: i64 = 200_000;

// ============================================================================
// Ledger Types
// ============================================================================

/// Meal log request
///
/// Numbers are taken as signed so negative input reaches validation
/// instead of failing as a type error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogMealRequest {
    #[serde(rename = "type")]
    pub meal_type: MealType,
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    #[validate(range(min = 0, max = 50000, message = "Calories must be between 0 and 50000"))]
    pub calories: i64,
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
}

impl LogMealRequest {
    /// Build the ledger entry; call after `validate()`
    pub fn into_entry(self) -> MealEntry {
        MealEntry {
            id: Uuid::new_v4(),
            meal_type: self.meal_type,
            name: self.name.trim().to_string(),
            calories: self.calories.clamp(0, i64::from(MAX_ENTRY_CALORIES)) as u32,
            time: self.time.unwrap_or_else(Utc::now),
        }
    }
}

/// Workout log request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogWorkoutRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    #[validate(range(min = 0, max = 1440, message = "Duration must be between 0 and 1440 minutes"))]
    pub duration: i64,
    #[validate(range(min = 0, max = 50000, message = "Calories must be between 0 and 50000"))]
    pub calories: i64,
    #[serde(default)]
    pub intensity: Option<Intensity>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl LogWorkoutRequest {
    /// Build the ledger entry; call after `validate()`
    pub fn into_entry(self) -> WorkoutEntry {
        WorkoutEntry {
            id: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            duration: self.duration.clamp(0, i64::from(MAX_DURATION_MINUTES)) as u32,
            calories: self.calories.clamp(0, i64::from(MAX_ENTRY_CALORIES)) as u32,
            intensity: self.intensity.unwrap_or_default(),
            date: self.date.unwrap_or_else(|| Utc::now().date_naive()),
        }
    }
}

/// Water intake request (ml)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddWaterRequest {
    #[validate(range(min = 1, max = 10000, message = "Amount must be between 1 and 10000ml"))]
    pub amount: i64,
}

impl AddWaterRequest {
    pub fn amount_ml(&self) -> u32 {
        self.amount.clamp(1, i64::from(MAX_WATER_INCREMENT_ML)) as u32
    }
}

/// Step count update
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SetStepsRequest {
    #[validate(range(min = 0, max = 200000, message = "Steps must be between 0 and 200000"))]
    pub steps: i64,
}

impl SetStepsRequest {
    pub fn steps(&self) -> u64 {
        self.steps.clamp(0, MAX_STEPS) as u64
    }
}

/// Workout history query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutHistoryQuery {
    /// Calendar month as `YYYY-MM`; defaults to the current month
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

/// Response after logging a meal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealLoggedResponse {
    pub meal: MealEntry,
    pub daily_stats: DailyStats,
}

/// Response after logging a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLoggedResponse {
    pub workout: WorkoutEntry,
    pub daily_stats: DailyStats,
}

/// Response after a delete-by-id
///
/// `deleted` is false when the id was not present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted: bool,
    pub daily_stats: DailyStats,
}

// ============================================================================
// Profile Types
// ============================================================================

/// Stored profile lookup; `null` before onboarding
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub profile: Option<Profile>,
}

// ============================================================================
// Plan Types
// ============================================================================

/// Body of the public plan endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanRequest {
    pub user_profile: Profile,
    #[serde(default)]
    #[validate(length(max = 128, message = "User id too long"))]
    pub user_id: Option<String>,
}

/// Stored plan lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub plan: Option<Plan>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_negative_calories_fail_validation() {
        let req: LogMealRequest = serde_json::from_value(json!({
            "type": "Lunch",
            "name": "Soup",
            "calories": -50
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_non_numeric_calories_fail_to_parse() {
        let result = serde_json::from_value::<LogMealRequest>(json!({
            "type": "Lunch",
            "name": "Soup",
            "calories": "lots"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_meal_request_into_entry() {
        let req: LogMealRequest = serde_json::from_value(json!({
            "type": "Snack",
            "name": "  Apple ",
            "calories": 95
        }))
        .unwrap();
        assert!(req.validate().is_ok());

        let entry = req.into_entry();
        assert_eq!(entry.name, "Apple");
        assert_eq!(entry.calories, 95);
        assert_eq!(entry.meal_type, MealType::Snack);
    }

    #[test]
    fn test_workout_request_defaults() {
        let req: LogWorkoutRequest = serde_json::from_value(json!({
            "name": "Run",
            "duration": 30,
            "calories": 300
        }))
        .unwrap();
        assert!(req.validate().is_ok());
        let entry = req.into_entry();
        assert_eq!(entry.intensity, Intensity::Medium);
        assert_eq!(entry.date, Utc::now().date_naive());
    }

    #[test]
    fn test_water_request_bounds() {
        let zero = AddWaterRequest { amount: 0 };
        assert!(zero.validate().is_err());
        let preset = AddWaterRequest { amount: 250 };
        assert!(preset.validate().is_ok());
        assert_eq!(preset.amount_ml(), 250);
    }

    #[test]
    fn test_generate_plan_request_shape() {
        let req: GeneratePlanRequest = serde_json::from_value(json!({
            "userProfile": {
                "gender": "Female",
                "age": 31,
                "weight": 58,
                "height": 163,
                "goal": "Lose Weight",
                "dietType": "Vegan"
            },
            "userId": "user_2abc"
        }))
        .unwrap();
        assert_eq!(req.user_id.as_deref(), Some("user_2abc"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_generate_plan_request_missing_field() {
        let result = serde_json::from_value::<GeneratePlanRequest>(json!({
            "userProfile": { "gender": "Female", "goal": "Maintain" }
        }));
        assert!(result.is_err());
    }
}
