//! JWT token service implementation

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use vp_shared::config::JwtConfig;

use crate::domain::entities::User;
use crate::domain::value_objects::TokenPair;
use crate::errors::{DomainResult, TokenError};

/// Claims carried by both access and refresh tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user id
    pub sub: Uuid,
    /// User role at issuance time
    pub role: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
    /// Token id, unique per issuance
    pub jti: Uuid,
}

/// Signs and validates HS256 access/refresh token pairs.
///
/// Access and refresh tokens use distinct secrets so a leaked refresh
/// secret cannot mint access tokens and vice versa.
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Sign a fresh access/refresh pair for a user
    pub fn generate_token_pair(&self, user: &User) -> DomainResult<TokenPair> {
        let access_token = self.sign(
            user,
            &self.config.access_secret,
            self.config.access_ttl_seconds,
        )?;
        let refresh_token = self.sign(
            user,
            &self.config.refresh_secret,
            self.config.refresh_ttl_seconds,
        )?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: self.config.access_ttl_seconds,
        })
    }

    fn sign(&self, user: &User, secret: &str, ttl_seconds: u64) -> DomainResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id,
            role: user.role.as_str().to_string(),
            iat: now,
            exp: now + ttl_seconds as i64,
            jti: Uuid::new_v4(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| {
            TokenError::Generation {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Validate an access token and return its claims
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.access_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })?;

        Ok(data.claims)
    }

    /// SHA-256 hash of a refresh token, for at-rest storage.
    ///
    /// Only the hash is persisted on the user record; a database leak
    /// does not hand out usable refresh tokens.
    pub fn hash_refresh_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }
}
