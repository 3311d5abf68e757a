//! Workout log summaries and filters

use crate::models::{Intensity, WorkoutEntry};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Active days per week that count as fully consistent
pub const CONSISTENCY_TARGET_DAYS: usize = 5;

/// Number of sessions at one intensity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntensityCount {
    pub intensity: Intensity,
    pub count: usize,
}

/// Aggregate view over the workouts log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummary {
    pub total_sessions: usize,
    pub total_calories: u64,
    pub total_minutes: u64,
    /// Only intensities with at least one session
    pub intensity_breakdown: Vec<IntensityCount>,
    pub active_days_this_week: usize,
    pub consistency_percent: u32,
}

/// First day (Sunday) of the week containing `date`
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Summarize the workouts log as of `today`
pub fn summarize_workouts(workouts: &[WorkoutEntry], today: NaiveDate) -> WorkoutSummary {
    let intensity_breakdown = Intensity::ALL
        .iter()
        .map(|&intensity| IntensityCount {
            intensity,
            count: workouts.iter().filter(|w| w.intensity == intensity).count(),
        })
        .filter(|c| c.count > 0)
        .collect();

    let start = week_start(today);
    let active_days: BTreeSet<NaiveDate> = workouts
        .iter()
        .map(|w| w.date)
        .filter(|d| *d >= start && *d <= today)
        .collect();
    let active_days_this_week = active_days.len();
    let consistency_percent =
        ((active_days_this_week * 100) / CONSISTENCY_TARGET_DAYS).min(100) as u32;

    WorkoutSummary {
        total_sessions: workouts.len(),
        total_calories: workouts.iter().map(|w| u64::from(w.calories)).sum(),
        total_minutes: workouts.iter().map(|w| u64::from(w.duration)).sum(),
        intensity_breakdown,
        active_days_this_week,
        consistency_percent,
    }
}

/// Workouts in the given calendar month whose name contains `search`
/// (case-insensitive), sorted by date
///
/// Same-day entries keep the order they were logged in.
pub fn filter_workouts<'a>(
    workouts: &'a [WorkoutEntry],
    year: i32,
    month: u32,
    search: Option<&str>,
) -> Vec<&'a WorkoutEntry> {
    let needle = search.map(|s| s.trim().to_lowercase()).unwrap_or_default();
    // Stored most-recent-first; reversing keeps same-day entries in logging order
    let mut matching: Vec<_> = workouts
        .iter()
        .rev()
        .filter(|w| w.date.year() == year && w.date.month() == month)
        .filter(|w| needle.is_empty() || w.name.to_lowercase().contains(&needle))
        .collect();
    matching.sort_by_key(|w| w.date);
    matching
}
