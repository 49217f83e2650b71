use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attendee role options offered by the registration form, in the order
/// the dropdown presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Developer,
    Engineer,
    Architect,
    Manager,
    Lead,
    Designer,
    Product,
    Devops,
    Data,
    Student,
    Other,
}

impl Role {
    /// Stored form value for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Developer => "developer",
            Role::Engineer => "engineer",
            Role::Architect => "architect",
            Role::Manager => "manager",
            Role::Lead => "lead",
            Role::Designer => "designer",
            Role::Product => "product",
            Role::Devops => "devops",
            Role::Data => "data",
            Role::Student => "student",
            Role::Other => "other",
        }
    }

    /// Dropdown label for this role.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Developer => "Software Developer",
            Role::Engineer => "Software Engineer",
            Role::Architect => "Software Architect",
            Role::Manager => "Engineering Manager",
            Role::Lead => "Tech Lead",
            Role::Designer => "UX/UI Designer",
            Role::Product => "Product Manager",
            Role::Devops => "DevOps Engineer",
            Role::Data => "Data Scientist",
            Role::Student => "Student",
            Role::Other => "Other",
        }
    }

    /// Every role option, in display order.
    pub fn all() -> [Role; 11] {
        [
            Role::Developer,
            Role::Engineer,
            Role::Architect,
            Role::Manager,
            Role::Lead,
            Role::Designer,
            Role::Product,
            Role::Devops,
            Role::Data,
            Role::Student,
            Role::Other,
        ]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "developer" => Ok(Role::Developer),
            "engineer" => Ok(Role::Engineer),
            "architect" => Ok(Role::Architect),
            "manager" => Ok(Role::Manager),
            "lead" => Ok(Role::Lead),
            "designer" => Ok(Role::Designer),
            "product" => Ok(Role::Product),
            "devops" => Ok(Role::Devops),
            "data" => Ok(Role::Data),
            "student" => Ok(Role::Student),
            "other" => Ok(Role::Other),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Raw values held by the registration form. Empty strings stand for
/// untouched optional fields; `role` is None until a selection is made.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub full_name: String,
    pub email: String,
    pub role: Option<Role>,
    pub company: String,
    pub dietary: String,
    pub newsletter: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_stored_value() {
        for role in Role::all() {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn role_options_stay_in_dropdown_order() {
        let all = Role::all();
        assert_eq!(all.len(), 11);
        assert_eq!(all[0], Role::Developer);
        assert_eq!(all[10], Role::Other);
    }

    #[test]
    fn input_serializes_with_form_field_names() {
        let input = RegistrationInput {
            full_name: "Jane Doe".to_string(),
            email: "jane@denverdevday.com".to_string(),
            role: Some(Role::Developer),
            company: String::new(),
            dietary: String::new(),
            newsletter: true,
        };
        let json = serde_json::to_value(&input).expect("serialize input");
        assert_eq!(json["fullName"], "Jane Doe");
        assert_eq!(json["role"], "developer");
        assert_eq!(json["newsletter"], true);
    }
}
