//! Persisted per-user state
//!
//! One JSON document per user, shaped like the browser client's
//! `health-storage` entry. The stored `dailyStats` calorie fields are only a
//! convenience for readers of the raw blob; on load they are recomputed
//! from the logs.

use crate::ledger::DailyLedger;
use crate::models::{DailyStats, Goals, MealEntry, Plan, Profile, WorkoutEntry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSnapshot {
    #[serde(default)]
    pub user_profile: Option<Profile>,
    #[serde(default)]
    pub goals: Goals,
    #[serde(default)]
    pub daily_stats: DailyStats,
    #[serde(default)]
    pub workouts: Vec<WorkoutEntry>,
    #[serde(default)]
    pub meals: Vec<MealEntry>,
    #[serde(default)]
    pub weekly_plan: Option<Plan>,
}

impl HealthSnapshot {
    /// Ledger view of the stored logs and counters
    pub fn ledger(&self) -> DailyLedger {
        DailyLedger::restore(
            self.meals.clone(),
            self.workouts.clone(),
            self.daily_stats.water,
            self.daily_stats.steps,
        )
    }

    /// Write a ledger back, refreshing the derived stats
    pub fn store_ledger(&mut self, ledger: &DailyLedger) {
        self.meals = ledger.meals().to_vec();
        self.workouts = ledger.workouts().to_vec();
        self.daily_stats = ledger.stats();
    }

    /// Snapshot with `dailyStats` recomputed from the logs
    pub fn normalized(mut self) -> Self {
        self.daily_stats = self.ledger().stats();
        self
    }
}
