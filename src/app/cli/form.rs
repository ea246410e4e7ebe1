//! Profile form: command-line flags first, dialoguer prompts for the rest.

use std::io::ErrorKind;

use clap::Args;
use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::domain::profile::{AGE_YEARS, HEIGHT_CM, NumericBounds, WEIGHT_KG};
use crate::domain::{
    ActivityLevel, AppError, DietType, Gender, Goal, MealsPerDay, ProfileField, ProfileOption,
    RawProfile,
};

/// Profile fields that can be given on the command line.
#[derive(Debug, Clone, Default, Args)]
pub struct ProfileArgs {
    /// Age in years (10-100)
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<i64>,
    /// Male, Female, Prefer not to say
    #[arg(long)]
    pub gender: Option<String>,
    /// Height in cm (120-220)
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<i64>,
    /// Weight in kg (30-200)
    #[arg(long, allow_negative_numbers = true)]
    pub weight: Option<i64>,
    /// Sedentary, Lightly active, Moderately active, Very active
    #[arg(long)]
    pub activity: Option<String>,
    /// Weight loss, Weight maintenance, Muscle gain
    #[arg(long)]
    pub goal: Option<String>,
    /// Vegetarian, Non-Vegetarian, Vegan
    #[arg(long)]
    pub diet: Option<String>,
    /// Meals per day (2, 3 or 4)
    #[arg(long, allow_negative_numbers = true)]
    pub meals: Option<i64>,
    /// Allergies or dislikes, free text
    #[arg(long)]
    pub constraints: Option<String>,
}

impl ProfileArgs {
    /// Whether every field was given as a flag.
    pub fn is_complete(&self) -> bool {
        self.age.is_some()
            && self.gender.is_some()
            && self.height.is_some()
            && self.weight.is_some()
            && self.activity.is_some()
            && self.goal.is_some()
            && self.diet.is_some()
            && self.meals.is_some()
            && self.constraints.is_some()
    }

    /// Flags only, with form defaults for anything missing.
    pub fn with_defaults(&self) -> RawProfile {
        let defaults = RawProfile::default();
        RawProfile {
            age: self.age.unwrap_or(defaults.age),
            gender: self.gender.clone().unwrap_or(defaults.gender),
            height_cm: self.height.unwrap_or(defaults.height_cm),
            weight_kg: self.weight.unwrap_or(defaults.weight_kg),
            activity_level: self.activity.clone().unwrap_or(defaults.activity_level),
            goal: self.goal.clone().unwrap_or(defaults.goal),
            diet_type: self.diet.clone().unwrap_or(defaults.diet_type),
            meals_per_day: self.meals.unwrap_or(defaults.meals_per_day),
            constraints: self.constraints.clone().unwrap_or(defaults.constraints),
        }
    }
}

/// Ask for every field missing from `args`.
///
/// Returns `None` when the user cancels.
pub fn fill(args: &ProfileArgs) -> Result<Option<RawProfile>, AppError> {
    let Some(age) = ask_number(args.age, ProfileField::Age, AGE_YEARS)? else {
        return Ok(None);
    };
    let Some(gender) = ask_choice::<Gender>(&args.gender, ProfileField::Gender)? else {
        return Ok(None);
    };
    let Some(height_cm) = ask_number(args.height, ProfileField::HeightCm, HEIGHT_CM)? else {
        return Ok(None);
    };
    let Some(weight_kg) = ask_number(args.weight, ProfileField::WeightKg, WEIGHT_KG)? else {
        return Ok(None);
    };
    let Some(activity_level) =
        ask_choice::<ActivityLevel>(&args.activity, ProfileField::ActivityLevel)?
    else {
        return Ok(None);
    };
    let Some(goal) = ask_choice::<Goal>(&args.goal, ProfileField::Goal)? else {
        return Ok(None);
    };
    let Some(diet_type) = ask_choice::<DietType>(&args.diet, ProfileField::DietType)? else {
        return Ok(None);
    };
    let Some(meals_per_day) = ask_meals(args.meals)? else {
        return Ok(None);
    };
    let Some(constraints) = ask_constraints(&args.constraints)? else {
        return Ok(None);
    };

    Ok(Some(RawProfile {
        age,
        gender,
        height_cm,
        weight_kg,
        activity_level,
        goal,
        diet_type,
        meals_per_day,
        constraints,
    }))
}

/// Ask whether to start another submission. Cancelling counts as no.
pub fn confirm_another() -> Result<bool, AppError> {
    let answer = Confirm::new()
        .with_prompt("Generate another plan?")
        .default(false)
        .interact_opt()
        .map_err(|err| AppError::Input(format!("Failed to read confirmation: {}", err)))?;
    Ok(answer.unwrap_or(false))
}

fn ask_number(
    given: Option<i64>,
    field: ProfileField,
    bounds: NumericBounds,
) -> Result<Option<i64>, AppError> {
    if given.is_some() {
        return Ok(given);
    }

    let answer = Input::<i64>::new()
        .with_prompt(field.form_label())
        .default(i64::from(bounds.default))
        .validate_with(|value: &i64| -> Result<(), String> {
            if bounds.contains(*value) {
                Ok(())
            } else {
                Err(format!("Enter a value between {} and {}", bounds.min, bounds.max))
            }
        })
        .interact_text();
    interrupted_as_none(answer, field)
}

fn ask_choice<O: ProfileOption>(
    given: &Option<String>,
    field: ProfileField,
) -> Result<Option<String>, AppError> {
    if given.is_some() {
        return Ok(given.clone());
    }

    let labels = O::labels();
    let selection = Select::new()
        .with_prompt(field.form_label())
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(|err| input_error(field, err))?;
    Ok(selection.map(|index| labels[index].to_string()))
}

fn ask_meals(given: Option<i64>) -> Result<Option<i64>, AppError> {
    if given.is_some() {
        return Ok(given);
    }

    let selection = Select::new()
        .with_prompt(ProfileField::MealsPerDay.form_label())
        .items(&MealsPerDay::labels())
        .default(0)
        .interact_opt()
        .map_err(|err| input_error(ProfileField::MealsPerDay, err))?;
    Ok(selection.map(|index| i64::from(MealsPerDay::ALL[index].count())))
}

fn ask_constraints(given: &Option<String>) -> Result<Option<String>, AppError> {
    if given.is_some() {
        return Ok(given.clone());
    }

    let answer = Input::<String>::new()
        .with_prompt(ProfileField::Constraints.form_label())
        .allow_empty(true)
        .interact_text();
    interrupted_as_none(answer, ProfileField::Constraints)
}

fn interrupted_as_none<T>(
    answer: Result<T, DialoguerError>,
    field: ProfileField,
) -> Result<Option<T>, AppError> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(input_error(field, err)),
    }
}

fn input_error(field: ProfileField, err: DialoguerError) -> AppError {
    AppError::Input(format!("Failed to read {}: {}", field.form_label(), err))
}
