//! Rule-based plan generator
//!
//! A deterministic table keyed on goal and diet family. It is total over
//! the enumerated profile domain and is also the fallback whenever the
//! LLM-backed provider fails.

use crate::errors::DomainError;
use crate::models::{
    DietType, FitnessGoal, Gender, MealType, Plan, PlannedMeal, PlannedWorkout, Profile,
};

/// Prefix placed on the summary of a plan produced after a provider failure
pub const OFFLINE_NOTICE: &str = "AI Connection Failed. Using Offline Plan.";

/// Generate a plan for a profile
///
/// Fails only when the profile itself is invalid.
pub fn generate(profile: &Profile) -> Result<Plan, DomainError> {
    profile.check()?;
    Ok(plan_for(profile.gender, profile.goal, profile.diet_type))
}

/// Deterministic plan used when the provider could not deliver one
pub fn offline_plan(profile: &Profile) -> Result<Plan, DomainError> {
    let mut plan = generate(profile)?;
    plan.summary = format!("{} {}", OFFLINE_NOTICE, plan.summary);
    Ok(plan)
}

/// The decision table itself
///
/// Gender is part of the input domain but no current rule branches on it.
pub fn plan_for(_gender: Gender, goal: FitnessGoal, diet: DietType) -> Plan {
    Plan {
        summary: summary_for(goal).to_string(),
        meals: meals_for(goal, diet),
        workout: workout_for(goal),
    }
}

fn summary_for(goal: FitnessGoal) -> &'static str {
    match goal {
        FitnessGoal::BuildMuscle => {
            "Focus on high protein intake and progressive overload to build size."
        }
        FitnessGoal::LoseWeight => "Maintain a caloric deficit and keep your heart rate up today!",
        FitnessGoal::Maintain => "Stay consistent and trust the process!",
    }
}

fn meal(meal_type: MealType, name: &str, calories: u32, protein: &str) -> PlannedMeal {
    PlannedMeal {
        meal_type,
        name: name.to_string(),
        calories,
        protein: protein.to_string(),
    }
}

fn meals_for(goal: FitnessGoal, diet: DietType) -> Vec<PlannedMeal> {
    let muscle = goal == FitnessGoal::BuildMuscle;
    let loss = goal == FitnessGoal::LoseWeight;

    if diet.is_plant_based() {
        vec![
            if muscle {
                meal(MealType::Breakfast, "Paneer Bhurji & Multigrain Toast", 450, "18g")
            } else {
                meal(MealType::Breakfast, "Oatmeal with Walnuts & Apple", 300, "10g")
            },
            meal(MealType::Lunch, "Dal Tadka, Brown Rice & Cucumber Salad", 550, "22g"),
            if loss {
                meal(MealType::Dinner, "Grilled Tofu & Steamed Broccoli", 350, "15g")
            } else {
                meal(MealType::Dinner, "Mixed Vegetable Curry & Roti", 500, "12g")
            },
        ]
    } else {
        vec![
            if muscle {
                meal(MealType::Breakfast, "3 Whole Eggs & Toast", 400, "20g")
            } else {
                meal(MealType::Breakfast, "Egg White Omelet with Spinach", 250, "18g")
            },
            meal(MealType::Lunch, "Grilled Chicken Breast with Quinoa", 600, "35g"),
            if loss {
                meal(MealType::Dinner, "Lemon Garlic Fish & Asparagus", 400, "30g")
            } else {
                meal(MealType::Dinner, "Chicken Curry & Rice", 600, "30g")
            },
        ]
    }
}

fn workout_for(goal: FitnessGoal) -> PlannedWorkout {
    let (workout_type, duration, exercises): (&str, &str, &[&str]) = match goal {
        FitnessGoal::BuildMuscle => (
            "Strength & Hypertrophy",
            "60 min",
            &["Bench Press (3x10)", "Squats (3x12)", "Deadlifts (3x8)"],
        ),
        FitnessGoal::LoseWeight => (
            "HIIT Cardio Burn",
            "45 min",
            &["Burpees (30s)", "Mountain Climbers (45s)", "Jump Rope (2 min)"],
        ),
        FitnessGoal::Maintain => ("Full Body Tone", "40 min", &["Pushups", "Lunges", "Plank Hold"]),
    };

    PlannedWorkout {
        workout_type: workout_type.to_string(),
        duration: duration.to_string(),
        exercises: exercises.iter().map(|e| e.to_string()).collect(),
    }
}
