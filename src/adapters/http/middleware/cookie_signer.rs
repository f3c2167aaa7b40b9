//! Visitor cookie signing.
//!
//! Cookie values have the form `<visitor-uuid>.<hex hmac-sha256(visitor-uuid)>`.
//! A visitor can read their own id but cannot forge someone else's.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::domain::foundation::VisitorId;

type HmacSha256 = Hmac<Sha256>;

/// Reasons a cookie value was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CookieError {
    #[error("Malformed visitor cookie: {0}")]
    Malformed(&'static str),

    #[error("Visitor cookie signature mismatch")]
    InvalidSignature,
}

/// Signs and verifies visitor cookie values.
pub struct CookieSigner {
    secret: SecretString,
}

impl CookieSigner {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
        }
    }

    /// Produce the cookie value for a visitor.
    pub fn sign(&self, visitor_id: &VisitorId) -> String {
        let id = visitor_id.to_string();
        let signature = self.compute_signature(id.as_bytes());
        format!("{}.{}", id, hex::encode(signature))
    }

    /// Check a cookie value and return the visitor it names.
    ///
    /// # Errors
    ///
    /// - `Malformed` - missing separator, bad hex, or bad UUID
    /// - `InvalidSignature` - signature does not match the id
    pub fn verify(&self, value: &str) -> Result<VisitorId, CookieError> {
        let (id, signature) = value
            .split_once('.')
            .ok_or(CookieError::Malformed("missing signature"))?;
        let signature =
            hex::decode(signature).map_err(|_| CookieError::Malformed("invalid signature hex"))?;

        let expected = self.compute_signature(id.as_bytes());
        if !constant_time_compare(&expected, &signature) {
            return Err(CookieError::InvalidSignature);
        }

        id.parse()
            .map_err(|_| CookieError::Malformed("invalid visitor id"))
    }

    fn compute_signature(&self, payload: &[u8]) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key");
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }
}

/// Performs constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-cookie-secret-with-enough-bytes";

    #[test]
    fn signed_value_verifies() {
        let signer = CookieSigner::new(TEST_SECRET);
        let visitor_id = VisitorId::new();

        let value = signer.sign(&visitor_id);

        assert_eq!(signer.verify(&value), Ok(visitor_id));
    }

    #[test]
    fn value_starts_with_visitor_id() {
        let signer = CookieSigner::new(TEST_SECRET);
        let visitor_id = VisitorId::new();
        let value = signer.sign(&visitor_id);
        assert!(value.starts_with(&visitor_id.to_string()));
    }

    #[test]
    fn swapped_id_is_rejected() {
        let signer = CookieSigner::new(TEST_SECRET);
        let value = signer.sign(&VisitorId::new());
        let (_, signature) = value.split_once('.').unwrap();
        let forged = format!("{}.{}", VisitorId::new(), signature);

        assert_eq!(signer.verify(&forged), Err(CookieError::InvalidSignature));
    }

    #[test]
    fn other_secret_is_rejected() {
        let value = CookieSigner::new(TEST_SECRET).sign(&VisitorId::new());
        let other = CookieSigner::new("another-secret-that-is-long-enough!!");

        assert_eq!(other.verify(&value), Err(CookieError::InvalidSignature));
    }

    #[test]
    fn malformed_values_are_rejected() {
        let signer = CookieSigner::new(TEST_SECRET);
        assert!(matches!(
            signer.verify("no-separator"),
            Err(CookieError::Malformed(_))
        ));
        assert!(matches!(
            signer.verify("abc.not-hex"),
            Err(CookieError::Malformed(_))
        ));
    }

    #[test]
    fn truncated_signature_is_rejected() {
        let signer = CookieSigner::new(TEST_SECRET);
        let value = signer.sign(&VisitorId::new());
        let truncated = &value[..value.len() - 2];
        assert_eq!(signer.verify(truncated), Err(CookieError::InvalidSignature));
    }
}
