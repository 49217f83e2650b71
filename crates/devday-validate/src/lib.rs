//! Field validators for the registration form.
//!
//! Each check is a pure function from a raw field value to an optional
//! [`FieldIssue`]; [`validate_registration`] runs all of them and collects
//! the failures into a [`ValidationReport`] keyed by field. Name and
//! company checks measure the trimmed value; the email pattern runs over
//! the raw value, so a padded address is malformed rather than clean.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use devday_model::{RegistrationInput, Role};

/// Minimum character count for a full name.
pub const MIN_NAME_CHARS: usize = 2;

/// Minimum character count for a company name, when one is given.
pub const MIN_COMPANY_CHARS: usize = 2;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("valid email pattern")
});

/// Form field an issue is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FullName,
    Email,
    Role,
    Company,
}

impl FieldId {
    /// Form label for this field, without the required marker.
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FullName => "Full Name",
            FieldId::Email => "Email Address",
            FieldId::Role => "Your Role",
            FieldId::Company => "Company/Organization",
        }
    }

    /// Whether the field must be filled in before submission.
    pub fn is_required(&self) -> bool {
        matches!(self, FieldId::FullName | FieldId::Email | FieldId::Role)
    }
}

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    EmptyField,
    TooShort,
    InvalidCharacters,
    InvalidFormat,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: FieldId,
    pub kind: ViolationKind,
    /// Message shown under the field.
    pub message: String,
}

impl FieldIssue {
    fn new(field: FieldId, kind: ViolationKind, message: &str) -> Self {
        Self {
            field,
            kind,
            message: message.to_string(),
        }
    }
}

/// Result of one full validation pass. At most one issue is recorded per
/// field; the report is rebuilt wholesale on every pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    issues: BTreeMap<FieldId, FieldIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// The issue recorded against the given field, if any.
    pub fn issue_for(&self, field: FieldId) -> Option<&FieldIssue> {
        self.issues.get(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldIssue> {
        self.issues.values()
    }

    fn record(&mut self, issue: Option<FieldIssue>) {
        if let Some(issue) = issue {
            self.issues.insert(issue.field, issue);
        }
    }
}

/// Validates the full name: required, at least [`MIN_NAME_CHARS`]
/// characters, letters and whitespace only.
pub fn full_name_issue(value: &str) -> Option<FieldIssue> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(FieldIssue::new(
            FieldId::FullName,
            ViolationKind::EmptyField,
            "Full name is required",
        ));
    }
    if trimmed.chars().count() < MIN_NAME_CHARS {
        return Some(FieldIssue::new(
            FieldId::FullName,
            ViolationKind::TooShort,
            "Name must be at least 2 characters",
        ));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return Some(FieldIssue::new(
            FieldId::FullName,
            ViolationKind::InvalidCharacters,
            "Name can only contain letters and spaces",
        ));
    }
    None
}

/// Validates the email address against a `local@domain.tld` pattern,
/// case-insensitive, with a top-level domain of at least two letters.
/// Only the emptiness check trims; the pattern must match the value as
/// entered, surrounding whitespace included.
pub fn email_issue(value: &str) -> Option<FieldIssue> {
    if value.trim().is_empty() {
        return Some(FieldIssue::new(
            FieldId::Email,
            ViolationKind::EmptyField,
            "Email address is required",
        ));
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Some(FieldIssue::new(
            FieldId::Email,
            ViolationKind::InvalidFormat,
            "Please enter a valid email address",
        ));
    }
    None
}

/// Validates that a role has been selected.
pub fn role_issue(value: Option<Role>) -> Option<FieldIssue> {
    if value.is_none() {
        return Some(FieldIssue::new(
            FieldId::Role,
            ViolationKind::EmptyField,
            "Please select your role",
        ));
    }
    None
}

/// Validates the optional company name: absence is fine, but a given
/// value must reach [`MIN_COMPANY_CHARS`] characters.
pub fn company_issue(value: &str) -> Option<FieldIssue> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.chars().count() < MIN_COMPANY_CHARS {
        return Some(FieldIssue::new(
            FieldId::Company,
            ViolationKind::TooShort,
            "Company name must be at least 2 characters",
        ));
    }
    None
}

/// Runs every field validator over the input and collects the failures.
pub fn validate_registration(input: &RegistrationInput) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.record(full_name_issue(&input.full_name));
    report.record(email_issue(&input.email));
    report.record(role_issue(input.role));
    report.record(company_issue(&input.company));
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_required() {
        let issue = full_name_issue("   ").expect("issue");
        assert_eq!(issue.kind, ViolationKind::EmptyField);
        assert_eq!(issue.message, "Full name is required");
    }

    #[test]
    fn single_character_name_is_too_short() {
        let issue = full_name_issue("J").expect("issue");
        assert_eq!(issue.kind, ViolationKind::TooShort);
        assert_eq!(issue.message, "Name must be at least 2 characters");
    }

    #[test]
    fn short_check_runs_before_character_check() {
        // "3" is both too short and non-alphabetic; length wins.
        let issue = full_name_issue("3").expect("issue");
        assert_eq!(issue.kind, ViolationKind::TooShort);
        let issue = full_name_issue("J3").expect("issue");
        assert_eq!(issue.kind, ViolationKind::InvalidCharacters);
        assert_eq!(issue.message, "Name can only contain letters and spaces");
    }

    #[test]
    fn well_formed_names_pass() {
        assert_eq!(full_name_issue("Jane Doe"), None);
        assert_eq!(full_name_issue("  Jane Doe  "), None);
    }

    #[test]
    fn blank_email_is_required() {
        let issue = email_issue("").expect("issue");
        assert_eq!(issue.kind, ViolationKind::EmptyField);
        assert_eq!(issue.message, "Email address is required");
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for value in ["jane", "jane@denver", "jane@denver.c", "@denverdevday.com"] {
            let issue = email_issue(value).expect("issue");
            assert_eq!(issue.kind, ViolationKind::InvalidFormat);
            assert_eq!(issue.message, "Please enter a valid email address");
        }
    }

    #[test]
    fn email_match_is_case_insensitive() {
        assert_eq!(email_issue("jane@denverdevday.com"), None);
        assert_eq!(email_issue("JANE@DENVERDEVDAY.COM"), None);
    }

    #[test]
    fn padded_email_is_malformed_not_stripped() {
        for value in [" jane@denverdevday.com", "jane@denverdevday.com "] {
            let issue = email_issue(value).expect("issue");
            assert_eq!(issue.kind, ViolationKind::InvalidFormat);
            assert_eq!(issue.message, "Please enter a valid email address");
        }
    }

    #[test]
    fn missing_role_is_flagged() {
        let issue = role_issue(None).expect("issue");
        assert_eq!(issue.kind, ViolationKind::EmptyField);
        assert_eq!(issue.message, "Please select your role");
        assert_eq!(role_issue(Some(Role::Developer)), None);
    }

    #[test]
    fn company_is_optional_but_bounded() {
        assert_eq!(company_issue(""), None);
        assert_eq!(company_issue("   "), None);
        let issue = company_issue("A").expect("issue");
        assert_eq!(issue.kind, ViolationKind::TooShort);
        assert_eq!(issue.message, "Company name must be at least 2 characters");
        assert_eq!(company_issue("Acme"), None);
    }

    #[test]
    fn report_collects_one_issue_per_field() {
        let input = RegistrationInput::default();
        let report = validate_registration(&input);
        assert!(!report.is_valid());
        assert_eq!(report.issue_count(), 3);
        assert!(report.issue_for(FieldId::FullName).is_some());
        assert!(report.issue_for(FieldId::Email).is_some());
        assert!(report.issue_for(FieldId::Role).is_some());
        assert!(report.issue_for(FieldId::Company).is_none());
    }

    #[test]
    fn complete_input_validates() {
        let input = RegistrationInput {
            full_name: "Jane Doe".to_string(),
            email: "jane@denverdevday.com".to_string(),
            role: Some(Role::Developer),
            company: "Denver Devs".to_string(),
            dietary: "Vegetarian".to_string(),
            newsletter: true,
        };
        let report = validate_registration(&input);
        assert!(report.is_valid());
        assert_eq!(report.issue_count(), 0);
    }

    #[test]
    fn required_labels() {
        assert!(FieldId::FullName.is_required());
        assert!(FieldId::Email.is_required());
        assert!(FieldId::Role.is_required());
        assert!(!FieldId::Company.is_required());
        assert_eq!(FieldId::Company.label(), "Company/Organization");
    }
}
