//! HS256 JWT creation and validation.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use reelcast_core::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by an access token. `sub` is the user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Symmetric JWT service. Tokens are issued elsewhere with the same shared
/// secret; this service validates them and can mint tokens for tests and
/// tooling.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Mint a token for `user_id` valid for `ttl`.
    pub fn create_token(&self, user_id: Uuid, ttl: Duration) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Validate a token and return its claims.
    pub fn validate_token(&self, token: &str) -> Result<JwtClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        let token_data =
            decode::<JwtClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                tracing::debug!(error = %e, "JWT validation failed");
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::Unauthorized("Token has expired".to_string())
                    }
                    _ => AppError::Unauthorized("Invalid token".to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &http::HeaderMap) -> Result<&str, AppError> {
    let header = headers
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?
        .to_str()
        .map_err(|_| AppError::Unauthorized("Malformed authorization header".to_string()))?;

    header
        .strip_prefix("Bearer ")
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Expected bearer token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::new("0123456789abcdef0123456789abcdef")
    }

    #[test]
    fn test_token_round_trip() {
        let service = test_service();
        let user_id = Uuid::new_v4();
        let token = service.create_token(user_id, Duration::hours(1)).unwrap();
        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = test_service();
        let token = service
            .create_token(Uuid::new_v4(), Duration::hours(-1))
            .unwrap();
        let result = service.validate_token(&token);
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = test_service()
            .create_token(Uuid::new_v4(), Duration::hours(1))
            .unwrap();
        let other = JwtService::new("another-secret-another-secret-xx");
        assert!(matches!(
            other.validate_token(&token),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = http::HeaderMap::new();
        headers.insert(http::header::AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let headers = http::HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = http::HeaderMap::new();
        headers.insert(http::header::AUTHORIZATION, "Basic dXNlcg==".parse().unwrap());
        assert!(matches!(
            bearer_token(&headers),
            Err(AppError::Unauthorized(_))
        ));
    }
}
