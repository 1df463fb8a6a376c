//! Password and token plumbing: register, login, token verification.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;

use crate::authz::Principal;
use crate::error::{CoreError, CoreResult};
use crate::users::{Role, User, UserRepository, UserStatus, service::UserService};

/// JWT claims. `sub` carries the user id, `role` the wire form of [`Role`].
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

pub struct UserAuthService {
    pool: PgPool,
    jwt_secret: String,
    token_ttl_hours: i64,
}

impl UserAuthService {
    pub fn new(pool: PgPool, jwt_secret: String, token_ttl_hours: i64) -> Self {
        Self {
            pool,
            jwt_secret,
            token_ttl_hours,
        }
    }

    /// Register a new user (role USER, status ACTIVE) and sign them in.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> CoreResult<(String, User)> {
        let password_hash = hash_password(password)?;
        let user =
            UserService::create(&self.pool, username, email, &password_hash, Role::User).await?;
        let token = self.issue_token(&user)?;
        Ok((token, user))
    }

    /// Verify credentials and issue a JWT. Unknown usernames, wrong
    /// passwords and blocked accounts all answer the same way, so the
    /// response does not reveal which part failed.
    pub async fn login(&self, username: &str, password: &str) -> CoreResult<(String, User)> {
        let user = UserRepository::find_by_username(&self.pool, username)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| CoreError::Internal(format!("stored hash unreadable: {e}")))?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| CoreError::InvalidCredentials)?;

        if user.status == UserStatus::Blocked {
            return Err(CoreError::InvalidCredentials);
        }

        let token = self.issue_token(&user)?;
        info!(user_id = user.id, "user logged in");
        Ok((token, user))
    }

    fn issue_token(&self, user: &User) -> CoreResult<String> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(Duration::hours(self.token_ttl_hours))
            .ok_or_else(|| CoreError::Internal("token expiry overflow".to_string()))?;

        let claims = Claims {
            sub: user.id.to_string(),
            role: user.role.as_str().to_string(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| CoreError::Internal(format!("token encoding failed: {e}")))
    }

    /// Verify a JWT signature and expiry, returning the claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_bytes());
        let validation = Validation::new(Algorithm::HS256);
        let token_data = decode::<Claims>(token, &decoding_key, &validation)?;
        Ok(token_data.claims)
    }
}

fn hash_password(password: &str) -> CoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CoreError::Internal(format!("password hashing failed: {e}")))?
        .to_string())
}

/// Resolve the authenticated principal out of verified claims.
pub fn principal_from_claims(claims: &Claims) -> Result<Principal, String> {
    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| format!("bad subject: {}", claims.sub))?;
    let role = claims.role.parse::<Role>()?;
    Ok(Principal { user_id, role })
}
