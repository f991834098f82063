//! Account database
//!
//! Resolved API accounts and the ordered, immutable collection the server
//! authenticates requests against.

use std::fs;
use std::mem;

use log::{debug, info};
use serde_json::Value;

use crate::error::AccountError;

/// One authenticated principal, resolved from a *normalized* account object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    /// Plaintext password; already read from disk for `password_file` entries
    pub password: String,
    pub readonly: bool,
}

impl Account {
    /// Build an account from a *normalized* authorization object
    ///
    /// Entries using `password_file` trigger a blocking read of the whole file;
    /// surrounding whitespace is stripped from its contents.
    pub fn from_normalized(doc: &Value) -> Result<Self, AccountError> {
        let username = doc["username"].as_str().unwrap_or_default().to_string();
        let password = match doc.get("password") {
            Some(password) => password.as_str().unwrap_or_default().to_string(),
            None => {
                let path = doc["password_file"].as_str().unwrap_or_default();
                let contents = fs::read_to_string(path)
                    .map_err(|e| AccountError::PasswordFileRead(path.to_string(), e))?;
                debug!("Read password for account '{}' from {}", username, path);
                contents.trim().to_string()
            }
        };
        let readonly = doc["level"] == "readonly";

        Ok(Account {
            username,
            password,
            readonly,
        })
    }
}

/// Ordered, immutable collection of resolved API accounts
///
/// Built once from a *normalized* authorizations list, read-only afterwards.
/// `lookup` never mutates and is safe to call from any number of readers;
/// `swap` is the sole mutator and relies on the caller for safe publication.
#[derive(Debug, Default)]
pub struct AccountDatabase {
    accounts: Vec<Account>,
}

impl AccountDatabase {
    /// Create an empty database
    pub fn new() -> Self {
        AccountDatabase {
            accounts: Vec::new(),
        }
    }

    /// Build a database from a *normalized* authorizations list
    ///
    /// One account is resolved per entry, in input order. An unreadable
    /// password file aborts construction; there is no partial database.
    pub fn from_normalized(authorizations: &Value) -> Result<Self, AccountError> {
        let entries = authorizations.as_array().map(Vec::as_slice).unwrap_or_default();

        let mut accounts = Vec::with_capacity(entries.len());
        for entry in entries {
            accounts.push(Account::from_normalized(entry)?);
        }
        info!("Loaded {} API account(s)", accounts.len());

        Ok(AccountDatabase { accounts })
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Find the account for `username`
    ///
    /// Linear scan in insertion order; the first match wins, so earlier entries
    /// shadow later duplicates. Account lists are operator-managed and small.
    pub fn lookup(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.username == username)
    }

    /// Exchange the contents of two databases in constant time
    ///
    /// No elements are copied. This is not synchronized against concurrent
    /// readers; callers publishing a freshly built database must provide
    /// external mutual exclusion or atomic-pointer publication.
    pub fn swap(&mut self, other: &mut AccountDatabase) {
        mem::swap(&mut self.accounts, &mut other.accounts);
    }
}
