//! Input validation functions
//!
//! This module provides validation utilities for user input.
//! Request DTOs use the `validator` crate for derive macros; the domain
//! types call these functions directly so the rules hold regardless of
//! where an entry was built.

/// Upper bound for a single meal or workout calorie value
pub const MAX_ENTRY_CALORIES: u32 = 50_000;

/// Upper bound for a workout duration (24 hours)
pub const MAX_DURATION_MINUTES: u32 = 1440;

/// Upper bound for a single water increment
pub const MAX_WATER_INCREMENT_ML: u32 = 10_000;

/// Upper bound for entry names
pub const MAX_NAME_LEN: usize = 200;

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate age in whole years
pub fn validate_age(age: u32) -> Result<(), String> {
    if age == 0 {
        return Err("Age must be at least 1 year".to_string());
    }
    if age > 120 {
        return Err("Age must be at most 120 years".to_string());
    }
    Ok(())
}

/// Validate calorie value of a single entry
pub fn validate_calories(calories: u32) -> Result<(), String> {
    if calories > MAX_ENTRY_CALORIES {
        return Err("Calorie value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate duration in minutes
pub fn validate_duration_minutes(minutes: u32) -> Result<(), String> {
    if minutes > MAX_DURATION_MINUTES {
        return Err("Duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

/// Validate a water increment (ml)
pub fn validate_water_amount(amount_ml: u32) -> Result<(), String> {
    if amount_ml == 0 {
        return Err("Amount must be greater than 0".to_string());
    }
    if amount_ml > MAX_WATER_INCREMENT_ML {
        return Err(format!("Amount cannot exceed {}ml", MAX_WATER_INCREMENT_ML));
    }
    Ok(())
}

/// Validate a meal or workout name
pub fn validate_entry_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(format!("Name cannot exceed {} characters", MAX_NAME_LEN));
    }
    Ok(())
}

/// Validate a daily goal target
pub fn validate_goal_value(field: &str, value: u32) -> Result<(), String> {
    if value == 0 {
        return Err(format!("{} must be greater than 0", field));
    }
    Ok(())
}
