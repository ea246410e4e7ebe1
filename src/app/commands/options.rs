//! Describe what each profile field accepts.

use crate::domain::profile::{AGE_YEARS, HEIGHT_CM, NumericBounds, WEIGHT_KG};
use crate::domain::{
    ActivityLevel, DietType, Gender, Goal, MealsPerDay, ProfileField, ProfileOption,
};

/// Accepted input for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRule {
    Range { min: u16, max: u16, default: u16 },
    Choice { options: Vec<&'static str> },
    FreeText,
}

/// A field together with what it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSummary {
    pub field: ProfileField,
    pub rule: FieldRule,
}

/// Rules for every field, in form order.
pub fn list() -> Vec<FieldSummary> {
    ProfileField::ALL.iter().map(|field| FieldSummary { field: *field, rule: rule_for(*field) }).collect()
}

fn rule_for(field: ProfileField) -> FieldRule {
    match field {
        ProfileField::Age => range(AGE_YEARS),
        ProfileField::HeightCm => range(HEIGHT_CM),
        ProfileField::WeightKg => range(WEIGHT_KG),
        ProfileField::Gender => FieldRule::Choice { options: Gender::labels() },
        ProfileField::ActivityLevel => FieldRule::Choice { options: ActivityLevel::labels() },
        ProfileField::Goal => FieldRule::Choice { options: Goal::labels() },
        ProfileField::DietType => FieldRule::Choice { options: DietType::labels() },
        ProfileField::MealsPerDay => FieldRule::Choice { options: MealsPerDay::labels() },
        ProfileField::Constraints => FieldRule::FreeText,
    }
}

fn range(bounds: NumericBounds) -> FieldRule {
    FieldRule::Range { min: bounds.min, max: bounds.max, default: bounds.default }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_field_in_form_order() {
        let fields: Vec<_> = list().into_iter().map(|summary| summary.field).collect();
        assert_eq!(fields, ProfileField::ALL.to_vec());
    }

    #[test]
    fn age_rule_carries_bounds() {
        let summary = &list()[0];
        assert_eq!(summary.rule, FieldRule::Range { min: 10, max: 100, default: 25 });
    }
}
