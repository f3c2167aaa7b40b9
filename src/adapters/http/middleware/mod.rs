//! HTTP middleware.
//!
//! - `visitor` - Resolves or issues the signed visitor cookie
//! - `cookie_signer` - HMAC-SHA256 signing of visitor cookie values

mod cookie_signer;
mod visitor;

pub use cookie_signer::{CookieError, CookieSigner};
pub use visitor::{visitor_middleware, CurrentVisitor, VisitorCookieState, VisitorRejection};
