use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::field::ProfileField;

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IssueKind {
    /// Numeric value outside its inclusive bounds.
    OutOfRange { value: i64, min: i64, max: i64 },
    /// Value not in the field's option set.
    UnknownOption { value: String, options: Vec<&'static str> },
    /// Free text containing line breaks or other control characters.
    InvalidText { value: String },
}

/// A rejected field together with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: ProfileField,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::OutOfRange { value, min, max } => {
                write!(f, "{} must be between {} and {} (got {})", self.field, min, max, value)
            }
            IssueKind::UnknownOption { value, options } => {
                write!(f, "{} must be one of {} (got '{}')", self.field, options.join(", "), value)
            }
            IssueKind::InvalidText { value } => {
                write!(f, "{} must be a single line without control characters (got {:?})", self.field, value)
            }
        }
    }
}

/// A submission was rejected; lists every offending field in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid profile: {}", describe_issues(.issues))]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub(crate) fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Fields that failed, in form order.
    pub fn fields(&self) -> Vec<ProfileField> {
        self.issues.iter().map(|issue| issue.field).collect()
    }
}

fn describe_issues(issues: &[FieldIssue]) -> String {
    issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
