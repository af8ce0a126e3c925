// JWT token issuance and verification service

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::error::AuthError;

/// Fixed issuer written into every token
pub const TOKEN_ISSUER: &str = "mybackend";

/// Token lifetime in seconds. Expiry is the only lifecycle bound; there is
/// no revocation.
pub const TOKEN_TTL_SECS: i64 = 300;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub sub: String, // user_id
    pub iat: i64,    // issued at timestamp
    pub exp: i64,    // expiration timestamp
    pub scope: String, // space-joined role names
}

impl Claims {
    /// Parse the subject back into a user id
    pub fn subject_id(&self) -> Result<Uuid, AuthError> {
        Uuid::parse_str(&self.sub).map_err(|_| AuthError::InvalidToken)
    }

    /// Role names carried in the scope claim
    pub fn scopes(&self) -> Vec<String> {
        self.scope.split_whitespace().map(str::to_string).collect()
    }
}

/// A freshly issued token together with its lifetime in seconds
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// Token service for JWT operations.
///
/// Tokens are signed with an RSA private key and verified with the matching
/// public key. Verification touches no store, so any replica holding the
/// public key can validate tokens on its own.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Build a TokenService from PEM-encoded RSA keys
    pub fn from_rsa_pem(private_key_pem: &[u8], public_key_pem: &[u8]) -> Result<Self, AuthError> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem)
            .map_err(|e| AuthError::KeyError(e.to_string()))?;
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem)
            .map_err(|e| AuthError::KeyError(e.to_string()))?;

        let mut validation = Validation::new(Algorithm::RS256);
        // A token is good for exactly TOKEN_TTL_SECS; no clock leeway.
        validation.leeway = 0;

        Ok(Self {
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issue a signed token for the user, with its role names joined into
    /// the scope claim
    pub fn issue(&self, user_id: Uuid, role_names: &[String]) -> Result<IssuedToken, AuthError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            iss: TOKEN_ISSUER.to_string(),
            sub: user_id.to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
            scope: role_names.join(" "),
        };

        let token = encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenError(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_in: TOKEN_TTL_SECS,
        })
    }

    /// Verify signature and expiry, returning the parsed claims.
    ///
    /// Fails closed: every decode failure, signature mismatch and expiry
    /// included, maps to `AuthError::InvalidToken`.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}
