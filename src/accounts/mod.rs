//! API account configuration
//!
//! The server's API endpoints authenticate callers against a small database of
//! accounts, each carrying a username, a plaintext password and a privilege
//! level (`readonly` or `full`). Operators can define accounts in two formats:
//!
//! 1. A structured array:
//!
//!    ```json
//!    [
//!      {
//!        "username": "foo",
//!        "password": "bar",           // or "password_file": "/filename"
//!        "level": "readonly"          // optional, "full" is the default
//!      }
//!    ]
//!    ```
//!
//! 2. Description strings in the form `[LEVEL:]USERNAME:PASSWORDFILE`.
//!
//! A raw list is *valid* once [`validate_accounts_field`] records no errors for
//! it; an entry is *normalized* once it has the canonical object shape produced
//! by [`normalize_account`]. The two concepts are orthogonal: neither implies
//! the other.

pub mod database;
pub mod normalizer;
pub mod parser;
pub mod validator;

pub use database::{Account, AccountDatabase};
pub use normalizer::{normalize_account, normalize_accounts};
pub use parser::parse_account_description;
pub use validator::{deduplicate_errors, validate_accounts_field};
