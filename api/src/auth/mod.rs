//! Authentication

mod token;

pub use token::auth_middleware;
