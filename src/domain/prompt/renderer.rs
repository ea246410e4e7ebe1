use std::collections::BTreeSet;
use std::fmt;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::profile::{Profile, ProfileField};

use super::context::PromptContext;
use super::error::PromptError;

/// The final instruction text sent to the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderedPrompt(String);

impl RenderedPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RenderedPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders profiles through a compiled template.
///
/// Construction checks that the template consumes exactly the nine profile
/// placeholders, so a renderer that exists can render any valid [`Profile`].
#[derive(Debug)]
pub struct PromptRenderer {
    env: Environment<'static>,
    template_name: &'static str,
}

impl PromptRenderer {
    pub fn new(template_name: &'static str, source: &'static str) -> Result<Self, PromptError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template(template_name, source).map_err(|err| PromptError::TemplateRender {
            template: template_name.to_string(),
            reason: err.to_string(),
        })?;

        let renderer = Self { env, template_name };
        renderer.check_placeholders()?;
        Ok(renderer)
    }

    /// Placeholders referenced by the template, sorted.
    pub fn placeholders(&self) -> Result<BTreeSet<String>, PromptError> {
        let template = self.env.get_template(self.template_name).map_err(|err| self.render_error(err))?;
        Ok(template.undeclared_variables(false).into_iter().collect())
    }

    /// Substitute every profile field into the template.
    pub fn render(&self, profile: &Profile) -> Result<RenderedPrompt, PromptError> {
        let context = PromptContext::from_profile(profile);
        let template = self.env.get_template(self.template_name).map_err(|err| self.render_error(err))?;
        let rendered = template.render(&context).map_err(|err| self.render_error(err))?;
        Ok(RenderedPrompt(rendered))
    }

    fn check_placeholders(&self) -> Result<(), PromptError> {
        let placeholders = self.placeholders()?;
        let expected: BTreeSet<String> =
            ProfileField::ALL.iter().map(|field| field.template_key().to_string()).collect();

        if placeholders == expected {
            return Ok(());
        }

        Err(PromptError::PlaceholderMismatch {
            template: self.template_name.to_string(),
            missing: expected.difference(&placeholders).cloned().collect(),
            unexpected: placeholders.difference(&expected).cloned().collect(),
        })
    }

    fn render_error(&self, err: minijinja::Error) -> PromptError {
        PromptError::TemplateRender { template: self.template_name.to_string(), reason: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{RawProfile, validate};

    const FULL: &str = "{{ age }}|{{ gender }}|{{ height }}|{{ weight }}|{{ activity_level }}|\
{{ goal }}|{{ diet_type }}|{{ meals_per_day }}|{{ constraints }}";

    #[test]
    fn renders_all_fields_in_place() {
        let renderer = PromptRenderer::new("inline", FULL).unwrap();
        let profile = validate(&RawProfile::default()).unwrap();
        let prompt = renderer.render(&profile).unwrap();
        assert_eq!(prompt.as_str(), "25|Male|170|70|Sedentary|Weight loss|Vegetarian|2|None");
    }

    #[test]
    fn rejects_template_missing_a_field() {
        let err = PromptRenderer::new("short", "{{ age }} {{ gender }}").unwrap_err();
        match err {
            PromptError::PlaceholderMismatch { missing, unexpected, .. } => {
                assert_eq!(missing.len(), 7);
                assert!(missing.contains(&"constraints".to_string()));
                assert!(unexpected.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_template_with_extra_placeholder() {
        let source = "{{ age }}|{{ gender }}|{{ height }}|{{ weight }}|{{ activity_level }}|\
{{ goal }}|{{ diet_type }}|{{ meals_per_day }}|{{ constraints }}|{{ cuisine }}";
        let err = PromptRenderer::new("extra", source).unwrap_err();
        assert!(matches!(
            err,
            PromptError::PlaceholderMismatch { ref unexpected, .. } if unexpected == &vec!["cuisine".to_string()]
        ));
    }

    #[test]
    fn rejects_unparseable_template() {
        let err = PromptRenderer::new("broken", "{{ age ").unwrap_err();
        assert!(matches!(err, PromptError::TemplateRender { .. }));
    }

    #[test]
    fn values_are_not_html_escaped() {
        let renderer = PromptRenderer::new("inline.html", FULL).unwrap();
        let raw = RawProfile { constraints: "no <dairy> & \"nuts\"".into(), ..RawProfile::default() };
        let prompt = renderer.render(&validate(&raw).unwrap()).unwrap();
        assert!(prompt.as_str().ends_with("no <dairy> & \"nuts\""));
    }

    #[test]
    fn template_syntax_in_values_is_not_evaluated() {
        let renderer = PromptRenderer::new("inline", FULL).unwrap();
        let raw = RawProfile { constraints: "{{ age }}".into(), ..RawProfile::default() };
        let prompt = renderer.render(&validate(&raw).unwrap()).unwrap();
        assert!(prompt.as_str().ends_with("|{{ age }}"));
    }
}
