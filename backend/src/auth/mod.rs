//! Authentication boundary
//!
//! Tokens are issued by the external identity provider; this module only
//! verifies them and extracts the opaque user id.

mod jwt;
mod middleware;

pub use jwt::{Claims, JwtService};
pub use middleware::AuthUser;
