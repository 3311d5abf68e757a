//! Data models for the FitDash application
//!
//! Wire names follow the browser client (`"Lose Weight"`, `"Non-Veg"`,
//! camelCase fields) so persisted snapshots and plan JSON stay compatible.

use crate::errors::DomainError;
use crate::validation;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Default daily step target
pub const DEFAULT_STEPS_GOAL: u32 = 8000;
/// Default daily water target (ml)
pub const DEFAULT_WATER_GOAL_ML: u32 = 3000;
/// Default daily calorie target (kcal)
pub const DEFAULT_CALORIES_GOAL: u32 = 2000;

// ============================================================================
// Profile
// ============================================================================

/// Biological sex as collected at onboarding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

/// Fitness goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FitnessGoal {
    #[serde(rename = "Lose Weight", alias = "LoseWeight")]
    LoseWeight,
    #[serde(rename = "Build Muscle", alias = "BuildMuscle")]
    BuildMuscle,
    Maintain,
}

/// Diet preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DietType {
    Vegetarian,
    #[serde(rename = "Non-Veg", alias = "NonVeg")]
    NonVeg,
    Vegan,
    Keto,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
}

impl FitnessGoal {
    pub const ALL: [FitnessGoal; 3] = [
        FitnessGoal::LoseWeight,
        FitnessGoal::BuildMuscle,
        FitnessGoal::Maintain,
    ];
}

impl DietType {
    pub const ALL: [DietType; 4] = [
        DietType::Vegetarian,
        DietType::NonVeg,
        DietType::Vegan,
        DietType::Keto,
    ];

    /// Plant-based diets share the vegetarian meal table
    pub fn is_plant_based(self) -> bool {
        matches!(self, DietType::Vegetarian | DietType::Vegan)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitnessGoal::LoseWeight => write!(f, "Lose Weight"),
            FitnessGoal::BuildMuscle => write!(f, "Build Muscle"),
            FitnessGoal::Maintain => write!(f, "Maintain"),
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DietType::Vegetarian => write!(f, "Vegetarian"),
            DietType::NonVeg => write!(f, "Non-Veg"),
            DietType::Vegan => write!(f, "Vegan"),
            DietType::Keto => write!(f, "Keto"),
        }
    }
}

/// Demographic profile entered at onboarding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub gender: Gender,
    pub age: u32,
    /// Body weight in kg
    pub weight: f64,
    /// Height in cm
    pub height: f64,
    pub goal: FitnessGoal,
    pub diet_type: DietType,
}

impl Profile {
    /// Check numeric ranges; enum fields are already checked by the type
    pub fn check(&self) -> Result<(), DomainError> {
        validation::validate_age(self.age).map_err(DomainError::Validation)?;
        validation::validate_weight(self.weight).map_err(DomainError::Validation)?;
        validation::validate_height_cm(self.height).map_err(DomainError::Validation)?;
        Ok(())
    }
}

// ============================================================================
// Goals
// ============================================================================

/// Daily targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Goals {
    pub steps_goal: u32,
    /// Water target in ml
    pub water_goal: u32,
    /// Calorie target in kcal
    pub calories_goal: u32,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            steps_goal: DEFAULT_STEPS_GOAL,
            water_goal: DEFAULT_WATER_GOAL_ML,
            calories_goal: DEFAULT_CALORIES_GOAL,
        }
    }
}

/// Partial goals update; absent fields keep their current value
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoalsUpdate {
    #[serde(default)]
    pub steps_goal: Option<u32>,
    #[serde(default)]
    pub water_goal: Option<u32>,
    #[serde(default)]
    pub calories_goal: Option<u32>,
}

impl Goals {
    /// Merge an update into these goals
    ///
    /// All provided values are checked before any is applied.
    pub fn apply(&mut self, update: &GoalsUpdate) -> Result<(), DomainError> {
        let checks = [
            ("stepsGoal", update.steps_goal),
            ("waterGoal", update.water_goal),
            ("caloriesGoal", update.calories_goal),
        ];
        for (field, value) in checks {
            if let Some(value) = value {
                validation::validate_goal_value(field, value).map_err(DomainError::Validation)?;
            }
        }

        if let Some(steps) = update.steps_goal {
            self.steps_goal = steps;
        }
        if let Some(water) = update.water_goal {
            self.water_goal = water;
        }
        if let Some(calories) = update.calories_goal {
            self.calories_goal = calories;
        }
        Ok(())
    }
}

// ============================================================================
// Daily stats and log entries
// ============================================================================

/// Running daily totals
///
/// `calories` is consumed food energy; `calories_burned` is workout energy.
/// Both are derived from the logs and never mixed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub steps: u64,
    /// Water in ml
    pub water: u64,
    pub calories: u64,
    #[serde(default)]
    pub calories_burned: u64,
}

/// Meal slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        };
        f.write_str(name)
    }
}

/// Logged meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealEntry {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub name: String,
    pub calories: u32,
    pub time: DateTime<Utc>,
}

impl MealEntry {
    /// Create an entry with a fresh id, logged now
    pub fn new(meal_type: MealType, name: impl Into<String>, calories: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            meal_type,
            name: name.into(),
            calories,
            time: Utc::now(),
        }
    }

    pub fn check(&self) -> Result<(), DomainError> {
        validation::validate_entry_name(&self.name).map_err(DomainError::Validation)?;
        validation::validate_calories(self.calories).map_err(DomainError::Validation)?;
        Ok(())
    }
}

/// Perceived workout intensity
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Low, Intensity::Medium, Intensity::High];
}

/// Logged workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutEntry {
    pub id: Uuid,
    pub name: String,
    /// Duration in minutes
    pub duration: u32,
    /// Calories burned
    pub calories: u32,
    #[serde(default)]
    pub intensity: Intensity,
    pub date: NaiveDate,
}

impl WorkoutEntry {
    /// Create an entry with a fresh id, dated today (UTC)
    pub fn new(name: impl Into<String>, duration: u32, calories: u32, intensity: Intensity) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            duration,
            calories,
            intensity,
            date: Utc::now().date_naive(),
        }
    }

    pub fn check(&self) -> Result<(), DomainError> {
        validation::validate_entry_name(&self.name).map_err(DomainError::Validation)?;
        validation::validate_duration_minutes(self.duration).map_err(DomainError::Validation)?;
        validation::validate_calories(self.calories).map_err(DomainError::Validation)?;
        Ok(())
    }
}

// ============================================================================
// Plan
// ============================================================================

/// Meals per generated plan
pub const PLAN_MEAL_COUNT: usize = 3;

/// Suggested meal inside a plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannedMeal {
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub name: String,
    pub calories: u32,
    /// Protein as display text, e.g. "18g"
    pub protein: String,
}

/// Suggested workout inside a plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannedWorkout {
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Duration as display text, e.g. "45 min"
    pub duration: String,
    pub exercises: Vec<String>,
}

/// Minutes assumed when a plan duration has no leading number
pub const DEFAULT_PLANNED_MINUTES: u32 = 45;

/// Calories credited when the suggested workout is logged
pub const PLANNED_WORKOUT_CALORIES: u32 = 350;

impl PlannedMeal {
    /// Ledger entry for eating this suggestion now
    pub fn to_entry(&self) -> MealEntry {
        MealEntry::new(self.meal_type, self.name.clone(), self.calories)
    }
}

impl PlannedWorkout {
    /// Leading integer of the duration text ("60 min" -> 60)
    pub fn duration_minutes(&self) -> u32 {
        let digits: String = self
            .duration
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        match digits.parse::<u32>() {
            Ok(minutes) if minutes > 0 => minutes,
            _ => DEFAULT_PLANNED_MINUTES,
        }
    }

    /// Ledger entry for completing this session today
    pub fn to_entry(&self) -> WorkoutEntry {
        WorkoutEntry::new(
            self.workout_type.clone(),
            self.duration_minutes().min(validation::MAX_DURATION_MINUTES),
            PLANNED_WORKOUT_CALORIES,
            Intensity::High,
        )
    }
}

/// One-day nutrition and workout recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    pub summary: String,
    pub meals: Vec<PlannedMeal>,
    pub workout: PlannedWorkout,
}

impl Plan {
    /// Check the plan is fully populated
    pub fn check(&self) -> Result<(), DomainError> {
        if self.meals.len() != PLAN_MEAL_COUNT {
            return Err(DomainError::validation(format!(
                "Plan must contain exactly {} meals, got {}",
                PLAN_MEAL_COUNT,
                self.meals.len()
            )));
        }
        for meal in &self.meals {
            validation::validate_entry_name(&meal.name).map_err(DomainError::Validation)?;
            validation::validate_calories(meal.calories).map_err(DomainError::Validation)?;
        }
        if self.workout.workout_type.trim().is_empty() {
            return Err(DomainError::validation("Plan workout type cannot be empty"));
        }
        if self.workout.exercises.is_empty()
            || self.workout.exercises.iter().any(|e| e.trim().is_empty())
        {
            return Err(DomainError::validation("Plan workout must list exercises"));
        }
        Ok(())
    }
}
