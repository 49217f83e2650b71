//! Pins the serialized report shape the form renderer consumes.

use devday_model::RegistrationInput;
use devday_validate::validate_registration;

#[test]
fn empty_input_report_lists_required_fields_in_form_order() {
    let report = validate_registration(&RegistrationInput::default());
    let json = serde_json::to_string_pretty(&report).expect("serialize report");
    insta::assert_snapshot!(json, @r#"
    {
      "issues": {
        "fullName": {
          "field": "fullName",
          "kind": "empty_field",
          "message": "Full name is required"
        },
        "email": {
          "field": "email",
          "kind": "empty_field",
          "message": "Email address is required"
        },
        "role": {
          "field": "role",
          "kind": "empty_field",
          "message": "Please select your role"
        }
      }
    }
    "#);
}

#[test]
fn clean_input_report_is_empty() {
    let input = RegistrationInput {
        full_name: "Jane Doe".to_string(),
        email: "jane@denverdevday.com".to_string(),
        role: Some(devday_model::Role::Developer),
        ..RegistrationInput::default()
    };
    let json = serde_json::to_string(&validate_registration(&input)).expect("serialize report");
    insta::assert_snapshot!(json, @r#"{"issues":{}}"#);
}
