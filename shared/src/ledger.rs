//! Daily ledger
//!
//! Maintains the meals and workouts logs plus the directly incremented
//! water and step counters. Calorie totals are never stored: `stats()`
//! recomputes them from the logs, so
//! `stats().calories == sum(meal.calories)` holds after any sequence of
//! operations and a delete always subtracts exactly the removed entry.

use crate::errors::DomainError;
use crate::models::{DailyStats, MealEntry, WorkoutEntry};
use crate::validation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Accumulator over the day's logs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLedger {
    /// Most recent first
    meals: Vec<MealEntry>,
    /// Most recent first
    workouts: Vec<WorkoutEntry>,
    water_ml: u64,
    steps: u64,
}

impl DailyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from persisted parts
    ///
    /// Entries were checked when first added, so they are taken as-is.
    pub fn restore(
        meals: Vec<MealEntry>,
        workouts: Vec<WorkoutEntry>,
        water_ml: u64,
        steps: u64,
    ) -> Self {
        Self {
            meals,
            workouts,
            water_ml,
            steps,
        }
    }

    pub fn meals(&self) -> &[MealEntry] {
        &self.meals
    }

    pub fn workouts(&self) -> &[WorkoutEntry] {
        &self.workouts
    }

    /// Log a meal; it becomes the first entry of the meals log
    pub fn add_meal(&mut self, entry: MealEntry) -> Result<&MealEntry, DomainError> {
        entry.check()?;
        if self.meals.iter().any(|m| m.id == entry.id) {
            return Err(DomainError::validation(format!(
                "Meal {} is already logged",
                entry.id
            )));
        }
        self.meals.insert(0, entry);
        Ok(&self.meals[0])
    }

    /// Remove a meal by id; unknown ids are a no-op
    pub fn delete_meal(&mut self, id: Uuid) -> Option<MealEntry> {
        let index = self.meals.iter().position(|m| m.id == id)?;
        Some(self.meals.remove(index))
    }

    /// Log a workout; it becomes the first entry of the workouts log
    pub fn add_workout(&mut self, entry: WorkoutEntry) -> Result<&WorkoutEntry, DomainError> {
        entry.check()?;
        if self.workouts.iter().any(|w| w.id == entry.id) {
            return Err(DomainError::validation(format!(
                "Workout {} is already logged",
                entry.id
            )));
        }
        self.workouts.insert(0, entry);
        Ok(&self.workouts[0])
    }

    /// Remove a workout by id; unknown ids are a no-op
    pub fn delete_workout(&mut self, id: Uuid) -> Option<WorkoutEntry> {
        let index = self.workouts.iter().position(|w| w.id == id)?;
        Some(self.workouts.remove(index))
    }

    /// Add water intake, returning the new total in ml
    pub fn add_water(&mut self, amount_ml: u32) -> Result<u64, DomainError> {
        validation::validate_water_amount(amount_ml).map_err(DomainError::Validation)?;
        self.water_ml = self.water_ml.saturating_add(u64::from(amount_ml));
        Ok(self.water_ml)
    }

    /// Set the step counter to an absolute value
    pub fn set_steps(&mut self, steps: u64) {
        self.steps = steps;
    }

    /// Clear both logs and zero the counters
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Consumed calories from the meals log
    pub fn calories_consumed(&self) -> u64 {
        self.meals.iter().map(|m| u64::from(m.calories)).sum()
    }

    /// Burned calories from the workouts log
    pub fn calories_burned(&self) -> u64 {
        self.workouts.iter().map(|w| u64::from(w.calories)).sum()
    }

    /// Derived daily totals
    pub fn stats(&self) -> DailyStats {
        DailyStats {
            steps: self.steps,
            water: self.water_ml,
            calories: self.calories_consumed(),
            calories_burned: self.calories_burned(),
        }
    }
}
