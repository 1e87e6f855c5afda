use std::time::Duration;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::core::error::{AppError, Result};

/// Claims this service reads from the hosted auth service's access tokens.
/// `sub` is the auth subject linked to a `profiles.auth_uid` row.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Local HS256 validation of hosted-auth access tokens with the shared
/// secret. Audience is not checked: the hosted service issues a fixed
/// audience that carries no authorization meaning here.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn new(secret: &str, leeway: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway.as_secs();
        validation.validate_aud = false;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn validate(&self, token: &str) -> Result<SessionClaims> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token validation failed: {}", e);
                AppError::Unauthorized("Sesi tidak valid atau sudah berakhir.".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        email: String,
        exp: i64,
    }

    fn token(secret: &str, exp: i64) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &TestClaims {
                sub: "auth-uid-1".to_string(),
                email: "ketua@beryl.test".to_string(),
                exp,
            },
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_token_yields_claims() {
        let validator = JwtValidator::new("secret", Duration::from_secs(0));
        let exp = chrono::Utc::now().timestamp() + 3600;

        let claims = validator.validate(&token("secret", exp)).unwrap();
        assert_eq!(claims.sub, "auth-uid-1");
        assert_eq!(claims.email.as_deref(), Some("ketua@beryl.test"));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let validator = JwtValidator::new("secret", Duration::from_secs(0));
        let exp = chrono::Utc::now().timestamp() + 3600;

        let result = validator.validate(&token("other-secret", exp));
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let validator = JwtValidator::new("secret", Duration::from_secs(0));
        let exp = chrono::Utc::now().timestamp() - 3600;

        let result = validator.validate(&token("secret", exp));
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
