use std::fmt;

use serde::Serialize;

/// The nine inputs collected per submission, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Age,
    Gender,
    HeightCm,
    WeightKg,
    ActivityLevel,
    Goal,
    DietType,
    MealsPerDay,
    Constraints,
}

impl ProfileField {
    /// All fields in form order.
    pub const ALL: [ProfileField; 9] = [
        ProfileField::Age,
        ProfileField::Gender,
        ProfileField::HeightCm,
        ProfileField::WeightKg,
        ProfileField::ActivityLevel,
        ProfileField::Goal,
        ProfileField::DietType,
        ProfileField::MealsPerDay,
        ProfileField::Constraints,
    ];

    /// Placeholder name used by the prompt template.
    pub fn template_key(&self) -> &'static str {
        match self {
            ProfileField::Age => "age",
            ProfileField::Gender => "gender",
            ProfileField::HeightCm => "height",
            ProfileField::WeightKg => "weight",
            ProfileField::ActivityLevel => "activity_level",
            ProfileField::Goal => "goal",
            ProfileField::DietType => "diet_type",
            ProfileField::MealsPerDay => "meals_per_day",
            ProfileField::Constraints => "constraints",
        }
    }

    /// Label shown on the form.
    pub fn form_label(&self) -> &'static str {
        match self {
            ProfileField::Age => "Age",
            ProfileField::Gender => "Gender",
            ProfileField::HeightCm => "Height (cm)",
            ProfileField::WeightKg => "Weight (kg)",
            ProfileField::ActivityLevel => "Activity Level",
            ProfileField::Goal => "Goal",
            ProfileField::DietType => "Diet Preference",
            ProfileField::MealsPerDay => "Meals per Day",
            ProfileField::Constraints => "Allergies / Dislikes (optional)",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_key())
    }
}

/// Inclusive bounds for a numeric profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericBounds {
    pub min: u16,
    pub max: u16,
    /// Value preselected on the form.
    pub default: u16,
}

impl NumericBounds {
    pub fn contains(&self, value: i64) -> bool {
        (i64::from(self.min)..=i64::from(self.max)).contains(&value)
    }
}

pub const AGE_YEARS: NumericBounds = NumericBounds { min: 10, max: 100, default: 25 };
pub const HEIGHT_CM: NumericBounds = NumericBounds { min: 120, max: 220, default: 170 };
pub const WEIGHT_KG: NumericBounds = NumericBounds { min: 30, max: 200, default: 70 };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(AGE_YEARS.contains(10));
        assert!(AGE_YEARS.contains(100));
        assert!(!AGE_YEARS.contains(9));
        assert!(!AGE_YEARS.contains(101));
        assert!(HEIGHT_CM.contains(120) && HEIGHT_CM.contains(220));
        assert!(!WEIGHT_KG.contains(29) && !WEIGHT_KG.contains(201));
    }

    #[test]
    fn defaults_fall_within_bounds() {
        for bounds in [AGE_YEARS, HEIGHT_CM, WEIGHT_KG] {
            assert!(bounds.contains(i64::from(bounds.default)));
        }
    }

    #[test]
    fn template_keys_are_unique() {
        let mut keys: Vec<_> = ProfileField::ALL.iter().map(|f| f.template_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ProfileField::ALL.len());
    }
}
