use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::profile::{Profile, ProfileField};

/// Variables substituted into the prompt template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PromptContext {
    variables: BTreeMap<&'static str, String>,
}

impl PromptContext {
    /// One variable per profile field, keyed by its template placeholder.
    pub fn from_profile(profile: &Profile) -> Self {
        let variables = ProfileField::ALL
            .iter()
            .map(|field| (field.template_key(), profile.field_value(*field)))
            .collect();
        Self { variables }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Placeholder names present in this context.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.variables.keys().copied()
    }
}
