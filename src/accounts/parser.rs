//! Account description parser
//!
//! Parses compact colon-delimited account descriptions of the form
//! `[LEVEL:]USERNAME:PASSWORDFILE` into structured account objects.

use serde_json::{Value, json};

use crate::error::AccountError;

/// Parse an account description string into a *valid* (but not necessarily
/// *normalized*) account object
///
/// Two-segment descriptions get the default `full` level; three-segment
/// descriptions must name the level explicitly. The username `api` is reserved
/// for the server itself and is rejected in both forms.
pub fn parse_account_description(description: &str) -> Result<Value, AccountError> {
    let segments: Vec<&str> = description.split(':').collect();

    let doc = match segments.len() {
        2 => json!({
            "username": segments[0],
            "password_file": segments[1],
            "level": "full",
        }),
        3 => {
            if segments[0] != "full" && segments[0] != "readonly" {
                return Err(AccountError::InvalidDescriptor(
                    "'level' field must be either 'full' or 'readonly'".to_string(),
                ));
            }
            json!({
                "username": segments[1],
                "password_file": segments[2],
                "level": segments[0],
            })
        }
        // Segment-count failures deliberately carry no message; consumers
        // compare error text literally.
        _ => return Err(AccountError::InvalidDescriptor(String::new())),
    };

    if doc["username"] == "api" {
        return Err(AccountError::InvalidDescriptor(
            "the username 'api' is not allowed".to_string(),
        ));
    }

    Ok(doc)
}
