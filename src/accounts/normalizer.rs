//! Account entry normalization
//!
//! Rewrites *valid* authorization entries into the single canonical object
//! shape: description strings are parsed, `password_file` paths are made
//! absolute and a missing `level` gets the default value.

use std::path::Path;

use serde_json::Value;

use crate::accounts::parser::parse_account_description;
use crate::error::AccountError;
use crate::utils::absolutize_path;

/// Normalize one *valid* authorization entry
///
/// String entries are replaced by their parsed object form. Object entries are
/// copied with `password_file` resolved against `base_dir` and `level`
/// defaulted to `full`. Behavior on entries that never passed validation is
/// undefined.
pub fn normalize_account(entry: &Value, base_dir: &Path) -> Result<Value, AccountError> {
    if let Some(description) = entry.as_str() {
        return parse_account_description(description);
    }

    let mut doc = entry.clone();
    if let Some(entry) = doc.as_object_mut() {
        let absolute = match entry.get("password_file") {
            Some(Value::String(path)) => Some(absolutize_path(path, base_dir)),
            _ => None,
        };
        if let Some(absolute) = absolute {
            entry.insert(
                "password_file".to_string(),
                Value::String(absolute.to_string_lossy().into_owned()),
            );
        }
        if !entry.contains_key("level") {
            entry.insert("level".to_string(), Value::String("full".to_string()));
        }
    }
    Ok(doc)
}

/// Normalize every entry of a *valid* authorizations list, preserving order
pub fn normalize_accounts(value: &Value, base_dir: &Path) -> Result<Value, AccountError> {
    let mut doc = value.clone();
    if let Some(entries) = doc.as_array_mut() {
        for entry in entries.iter_mut() {
            *entry = normalize_account(entry, base_dir)?;
        }
    }
    Ok(doc)
}
