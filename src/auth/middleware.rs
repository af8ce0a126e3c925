// Authentication middleware for protected routes

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::{authorization, error::AuthError, models::Role, token::TokenService};

/// Authenticated caller identity for protected routes.
///
/// The extractor runs before any handler body: it strips the Bearer prefix,
/// verifies signature and expiry through the `TokenService` held in
/// application state, and surfaces the parsed identity and scopes. Handlers
/// never see a raw token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub scopes: Vec<String>,
}

impl AuthenticatedUser {
    /// Deny with `InsufficientScope` unless the caller carries ADMIN scope
    pub fn require_admin(&self) -> Result<(), AuthError> {
        if authorization::has_role(&self.scopes, Role::Admin) {
            Ok(())
        } else {
            Err(AuthError::InsufficientScope)
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
    Arc<TokenService>: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::InvalidToken)?;

        // Verify Bearer token format
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidToken)?;

        let token_service = Arc::<TokenService>::from_ref(state);
        let claims = token_service.verify(token)?;

        Ok(AuthenticatedUser {
            user_id: claims.subject_id()?,
            scopes: claims.scopes(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::{Claims, TOKEN_ISSUER, TOKEN_TTL_SECS};
    use axum::http::Request;
    use chrono::Utc;
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
    use rsa::{RsaPrivateKey, RsaPublicKey};
    use std::sync::OnceLock;

    fn test_keys() -> &'static (String, String) {
        static KEYS: OnceLock<(String, String)> = OnceLock::new();
        KEYS.get_or_init(|| {
            let mut rng = rand::thread_rng();
            let private_key = RsaPrivateKey::new(&mut rng, 2048).expect("keypair generation");
            let public_key = RsaPublicKey::from(&private_key);
            (
                private_key
                    .to_pkcs8_pem(LineEnding::LF)
                    .expect("private key PEM")
                    .to_string(),
                public_key
                    .to_public_key_pem(LineEnding::LF)
                    .expect("public key PEM"),
            )
        })
    }

    fn test_state() -> Arc<TokenService> {
        let (private_pem, public_pem) = test_keys();
        Arc::new(TokenService::from_rsa_pem(private_pem.as_bytes(), public_pem.as_bytes()).unwrap())
    }

    fn parts_with_auth(auth_value: &str) -> Parts {
        let req = Request::builder()
            .uri("/")
            .header(header::AUTHORIZATION, auth_value)
            .body(())
            .unwrap();
        let (parts, _) = req.into_parts();
        parts
    }

    fn parts_without_auth() -> Parts {
        let req = Request::builder().uri("/").body(()).unwrap();
        let (parts, _) = req.into_parts();
        parts
    }

    fn encode_claims(claims: &Claims) -> String {
        let (private_pem, _) = test_keys();
        encode(
            &Header::new(Algorithm::RS256),
            claims,
            &EncodingKey::from_rsa_pem(private_pem.as_bytes()).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn valid_token_is_accepted() {
        let state = test_state();
        let user_id = Uuid::new_v4();
        let issued = state
            .issue(user_id, &["ADMIN".to_string(), "BASIC".to_string()])
            .unwrap();

        let mut parts = parts_with_auth(&format!("Bearer {}", issued.token));
        let user = AuthenticatedUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();

        assert_eq!(user.user_id, user_id);
        assert_eq!(user.scopes, vec!["ADMIN".to_string(), "BASIC".to_string()]);
        assert!(user.require_admin().is_ok());
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        let state = test_state();
        let mut parts = parts_without_auth();
        let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingToken)));
    }

    #[tokio::test]
    async fn non_bearer_header_is_rejected() {
        let state = test_state();
        for auth_value in ["Basic dXNlcjpwYXNz", "token-without-scheme", "bearer x"] {
            let mut parts = parts_with_auth(auth_value);
            let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;
            assert!(matches!(result, Err(AuthError::InvalidToken)));
        }
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let state = test_state();
        let now = Utc::now().timestamp();
        let token = encode_claims(&Claims {
            iss: TOKEN_ISSUER.to_string(),
            sub: Uuid::new_v4().to_string(),
            iat: now - 2 * TOKEN_TTL_SECS,
            exp: now - TOKEN_TTL_SECS,
            scope: "BASIC".to_string(),
        });

        let mut parts = parts_with_auth(&format!("Bearer {}", token));
        let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn non_uuid_subject_is_rejected() {
        let state = test_state();
        let now = Utc::now().timestamp();
        let token = encode_claims(&Claims {
            iss: TOKEN_ISSUER.to_string(),
            sub: "not-a-uuid".to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
            scope: "BASIC".to_string(),
        });

        let mut parts = parts_with_auth(&format!("Bearer {}", token));
        let result = AuthenticatedUser::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn basic_scope_fails_admin_requirement() {
        let state = test_state();
        let issued = state
            .issue(Uuid::new_v4(), &["BASIC".to_string()])
            .unwrap();

        let mut parts = parts_with_auth(&format!("Bearer {}", issued.token));
        let user = AuthenticatedUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();

        assert!(matches!(
            user.require_admin(),
            Err(AuthError::InsufficientScope)
        ));
    }
}
