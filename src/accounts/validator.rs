//! Authorization entry validation
//!
//! Checks a raw authorizations list for structural problems, collecting every
//! diagnostic instead of stopping at the first one.

use serde_json::Value;

use crate::accounts::parser::parse_account_description;
use crate::error::ValidationError;

/// Validate the raw authorizations value stored under `key`
///
/// A list that produces no errors is *valid*, although not necessarily
/// *normalized*. An absent field arrives as `Null` and is vacuously valid.
/// Every problem found is recorded; duplicates are collapsed before the batch
/// is appended to `output_errors`. This function itself never fails.
pub fn validate_accounts_field(
    key: &str,
    value: &Value,
    output_errors: &mut Vec<ValidationError>,
) {
    if value.is_null() {
        return;
    }

    // The surrounding configuration layer enforces that the field is a list.
    let entries = match value.as_array() {
        Some(entries) => entries,
        None => return,
    };

    // Messages keep the key as a '{{key}}' placeholder for the consumer.
    let key_ref = format!("'{{{{{key}}}}}'");
    let mut errors: Vec<ValidationError> = Vec::new();

    for entry in entries {
        if let Some(description) = entry.as_str() {
            if let Err(e) = parse_account_description(description) {
                errors.push(ValidationError::new(format!(
                    "{key_ref} contains an invalid authorization description ({description}): {e}"
                )));
            }
        } else if let Some(entry) = entry.as_object() {
            match entry.get("username") {
                Some(Value::String(username)) => {
                    if username == "api" {
                        errors.push(ValidationError::new(format!(
                            "{key_ref} may not contain an 'api' username"
                        )));
                    }
                }
                Some(_) => {
                    errors.push(ValidationError::new(format!(
                        "All usernames in {key_ref} must be strings"
                    )));
                }
                None => {
                    errors.push(ValidationError::new(format!(
                        "All objects in {key_ref} must contain the 'username' key"
                    )));
                }
            }

            if let Some(password) = entry.get("password") {
                if !password.is_string() {
                    errors.push(ValidationError::new(format!(
                        "All passwords in {key_ref} must be strings"
                    )));
                }
                if entry.contains_key("password_file") {
                    errors.push(ValidationError::new(format!(
                        "Entries in {key_ref} must contain either the \
                         'password' or the 'password_file' field, but not both"
                    )));
                }
            } else if let Some(password_file) = entry.get("password_file") {
                if !password_file.is_string() {
                    errors.push(ValidationError::new(format!(
                        "All 'password_file' fields in {key_ref} must be strings"
                    )));
                }
            } else {
                errors.push(ValidationError::new(format!(
                    "All objects in {key_ref} must contain either the \
                     'password' or 'password_file' key"
                )));
            }

            if let Some(level) = entry.get("level") {
                if level != "readonly" && level != "full" {
                    errors.push(ValidationError::new(format!(
                        "All 'level' fields in {key_ref} must be either 'readonly' or 'full'"
                    )));
                }
            }
        } else {
            errors.push(ValidationError::new(format!(
                "{key_ref} may only contain strings or objects"
            )));
        }
    }

    output_errors.extend(deduplicate_errors(errors));
}

/// Collapse duplicate diagnostics, keeping the first occurrence of each message
pub fn deduplicate_errors(errors: Vec<ValidationError>) -> Vec<ValidationError> {
    let mut result: Vec<ValidationError> = Vec::with_capacity(errors.len());
    for error in errors {
        if !result.contains(&error) {
            result.push(error);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(value: &Value) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        validate_accounts_field("authorizations", value, &mut errors);
        errors
    }

    #[test]
    fn test_null_value_is_vacuously_valid() {
        assert!(validate(&Value::Null).is_empty());
    }

    #[test]
    fn test_valid_entries_produce_no_errors() {
        let value = json!([
            { "username": "admin", "password": "secret" },
            { "username": "monitor", "password_file": "keys/monitor.txt", "level": "readonly" },
            "full:deploy:/etc/keys/deploy.txt",
        ]);
        assert!(validate(&value).is_empty());
    }

    #[test]
    fn test_username_rules() {
        let errors = validate(&json!([{ "password": "x" }]));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message(),
            "All objects in '{{authorizations}}' must contain the 'username' key"
        );

        let errors = validate(&json!([{ "username": 42, "password": "x" }]));
        assert_eq!(
            errors[0].message(),
            "All usernames in '{{authorizations}}' must be strings"
        );

        let errors = validate(&json!([{ "username": "api", "password": "x" }]));
        assert_eq!(
            errors[0].message(),
            "'{{authorizations}}' may not contain an 'api' username"
        );
    }

    #[test]
    fn test_missing_password_fields_is_one_error() {
        let errors = validate(&json!([{ "username": "admin" }]));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message(),
            "All objects in '{{authorizations}}' must contain either the \
             'password' or 'password_file' key"
        );
    }

    #[test]
    fn test_both_password_fields_is_one_error() {
        let errors = validate(&json!([
            { "username": "admin", "password": "x", "password_file": "keys/a.txt" }
        ]));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message(),
            "Entries in '{{authorizations}}' must contain either the \
             'password' or the 'password_file' field, but not both"
        );
    }

    #[test]
    fn test_password_fields_must_be_strings() {
        let errors = validate(&json!([{ "username": "a", "password": 42 }]));
        assert_eq!(
            errors[0].message(),
            "All passwords in '{{authorizations}}' must be strings"
        );

        let errors = validate(&json!([{ "username": "a", "password_file": true }]));
        assert_eq!(
            errors[0].message(),
            "All 'password_file' fields in '{{authorizations}}' must be strings"
        );
    }

    #[test]
    fn test_level_must_be_readonly_or_full() {
        let expected =
            "All 'level' fields in '{{authorizations}}' must be either 'readonly' or 'full'";

        let errors = validate(&json!([{ "username": "a", "password": "x", "level": "admin" }]));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message(), expected);

        let errors = validate(&json!([{ "username": "a", "password": "x", "level": 1 }]));
        assert_eq!(errors[0].message(), expected);
    }

    #[test]
    fn test_entries_must_be_strings_or_objects() {
        let errors = validate(&json!([42, null, [1, 2]]));
        // Identical messages collapse to one
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message(),
            "'{{authorizations}}' may only contain strings or objects"
        );
    }

    #[test]
    fn test_invalid_description_string_is_reported() {
        let errors = validate(&json!(["admin:bob:keys/bob.txt"]));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message(),
            "'{{authorizations}}' contains an invalid authorization description \
             (admin:bob:keys/bob.txt): 'level' field must be either 'full' or 'readonly'"
        );
    }

    #[test]
    fn test_one_entry_can_accumulate_multiple_errors() {
        let errors = validate(&json!([{ "username": 42, "level": "admin" }]));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_duplicate_errors_collapse() {
        let errors = validate(&json!([
            { "password": "x" },
            { "password": "y" },
        ]));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_errors_append_to_existing_list() {
        let mut errors = vec![ValidationError::new("existing problem")];
        validate_accounts_field("authorizations", &json!([{ "password": "x" }]), &mut errors);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message(), "existing problem");
    }
}
