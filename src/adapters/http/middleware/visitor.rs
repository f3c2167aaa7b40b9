//! Visitor identification middleware and extractor for axum.
//!
//! This module provides:
//! - `visitor_middleware` - Layer that resolves the visitor from the signed cookie
//! - `CurrentVisitor` - Extractor for the resolved visitor id
//!
//! ```text
//! Request → visitor_middleware → injects VisitorId into extensions
//!                                      ↓
//!                          Handler → CurrentVisitor extractor reads it
//!                                      ↓
//! Response ← Set-Cookie appended when the visitor is new
//! ```

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::SessionConfig;
use crate::domain::foundation::VisitorId;

use super::cookie_signer::CookieSigner;

/// Middleware state - cookie signer plus cookie attributes.
#[derive(Clone)]
pub struct VisitorCookieState {
    signer: Arc<CookieSigner>,
    cookie_name: String,
    secure: bool,
}

impl VisitorCookieState {
    pub fn new(signer: CookieSigner, cookie_name: impl Into<String>, secure: bool) -> Self {
        Self {
            signer: Arc::new(signer),
            cookie_name: cookie_name.into(),
            secure,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(
            CookieSigner::new(config.cookie_secret.clone()),
            config.cookie_name.clone(),
            config.secure_cookie,
        )
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn signer(&self) -> &CookieSigner {
        &self.signer
    }

    /// Resolve the visitor named by the request's cookie, if it verifies.
    fn visitor_from_headers(&self, headers: &HeaderMap) -> Option<VisitorId> {
        let value = cookie_value(headers, &self.cookie_name)?;
        match self.signer.verify(value) {
            Ok(visitor_id) => Some(visitor_id),
            Err(e) => {
                tracing::debug!("Discarding visitor cookie: {}", e);
                None
            }
        }
    }

    fn set_cookie_header(&self, visitor_id: &VisitorId) -> String {
        let mut cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            self.cookie_name,
            self.signer.sign(visitor_id)
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

/// Find cookie `name` across all `Cookie` headers.
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Middleware that assigns every request a visitor id.
///
/// This middleware:
/// 1. Reads the visitor cookie and verifies its signature
/// 2. On a missing or invalid cookie, mints a new visitor id
/// 3. Injects the `VisitorId` into request extensions
/// 4. For new visitors, appends a `Set-Cookie` header to the response
pub async fn visitor_middleware(
    State(state): State<VisitorCookieState>,
    mut request: Request,
    next: Next,
) -> Response {
    let (visitor_id, is_new) = match state.visitor_from_headers(request.headers()) {
        Some(id) => (id, false),
        None => (VisitorId::new(), true),
    };

    request.extensions_mut().insert(visitor_id);
    let mut response = next.run(request).await;

    if is_new {
        match HeaderValue::from_str(&state.set_cookie_header(&visitor_id)) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
                tracing::debug!(visitor = %visitor_id, "Issued visitor cookie");
            }
            Err(e) => tracing::error!("Failed to encode visitor cookie: {}", e),
        }
    }

    response
}

/// Extractor for the current visitor.
///
/// Requires `visitor_middleware` on the route; otherwise the request fails
/// with 500 Internal Server Error.
#[derive(Debug, Clone, Copy)]
pub struct CurrentVisitor(pub VisitorId);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentVisitor
where
    S: Send + Sync,
{
    type Rejection = VisitorRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<VisitorId>()
            .copied()
            .map(CurrentVisitor)
            .ok_or(VisitorRejection::MissingMiddleware)
    }
}

/// Rejection for visitor extraction.
#[derive(Debug, Clone)]
pub enum VisitorRejection {
    MissingMiddleware,
}

impl IntoResponse for VisitorRejection {
    fn into_response(self) -> Response {
        match self {
            VisitorRejection::MissingMiddleware => {
                tracing::error!("CurrentVisitor used without visitor_middleware");
                (StatusCode::INTERNAL_SERVER_ERROR, "Visitor session unavailable").into_response()
            }
        }
    }
}
