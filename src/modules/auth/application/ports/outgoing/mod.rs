pub mod role_query;
pub mod token_provider;

pub use role_query::{RoleQuery, RoleQueryError};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
