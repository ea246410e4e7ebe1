use std::fmt;

use serde::Serialize;

/// A closed set of choices offered for one profile field.
///
/// Labels are the exact strings shown on the form and substituted into the
/// prompt. The first entry of `ALL` is the form default.
pub trait ProfileOption: Copy + Sized + 'static {
    /// Every choice, in display order.
    const ALL: &'static [Self];

    /// Label used on the form and in the prompt.
    fn label(self) -> &'static str;

    /// Parse a user-supplied value, ignoring case and `-`/`_`/space differences.
    fn parse(value: &str) -> Option<Self> {
        let wanted = normalize_label(value);
        Self::ALL.iter().copied().find(|option| normalize_label(option.label()) == wanted)
    }

    /// All labels, in display order.
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|option| option.label()).collect()
    }
}

fn normalize_label(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c.to_ascii_lowercase() })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

macro_rules! profile_option {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl ProfileOption for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

profile_option! {
    /// Gender as offered on the form.
    Gender {
        Male => "Male",
        Female => "Female",
        PreferNotToSay => "Prefer not to say",
    }
}

profile_option! {
    /// Habitual physical activity.
    ActivityLevel {
        Sedentary => "Sedentary",
        LightlyActive => "Lightly active",
        ModeratelyActive => "Moderately active",
        VeryActive => "Very active",
    }
}

profile_option! {
    /// What the plan should work towards.
    Goal {
        WeightLoss => "Weight loss",
        WeightMaintenance => "Weight maintenance",
        MuscleGain => "Muscle gain",
    }
}

profile_option! {
    /// Dietary preference the meal plan must respect.
    DietType {
        Vegetarian => "Vegetarian",
        NonVegetarian => "Non-Vegetarian",
        Vegan => "Vegan",
    }
}

profile_option! {
    /// Number of meals per day.
    MealsPerDay {
        Two => "2",
        Three => "3",
        Four => "4",
    }
}

impl MealsPerDay {
    /// Meal count as a number.
    pub fn count(self) -> u8 {
        match self {
            MealsPerDay::Two => 2,
            MealsPerDay::Three => 3,
            MealsPerDay::Four => 4,
        }
    }

    /// Look up the option for a numeric meal count.
    pub fn from_count(count: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|meals| i64::from(meals.count()) == count)
    }
}
