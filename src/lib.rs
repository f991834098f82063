pub mod accounts;
pub mod config;
pub mod error;
pub mod utils;

pub use accounts::{Account, AccountDatabase};
pub use config::ServerConfig;
pub use error::{AccountError, ValidationError};
