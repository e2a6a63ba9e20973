//! JWT authentication: token service and request extractor.

pub mod extractor;
pub mod jwt;

pub use extractor::UserContext;
pub use jwt::{JwtClaims, JwtService};
