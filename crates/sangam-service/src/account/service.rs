//! Account lifecycle: registration, login, token refresh.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use sangam_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use sangam_auth::password::{PasswordHasher, PasswordValidator};
use sangam_core::error::AppError;
use sangam_core::result::AppResult;
use sangam_database::repositories::user::UserRepository;
use sangam_entity::user::{CreateUser, User, UserStatus};

use crate::context::RequestContext;

/// Registration payload after API-level validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterAccount {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Gender.
    pub gender: Option<String>,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
}

/// A user together with freshly issued tokens.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AuthTokens {
    /// The authenticated user.
    pub user: User,
    /// Access and refresh tokens.
    #[serde(flatten)]
    pub tokens: TokenPair,
}

/// Manages account registration and authentication.
#[derive(Debug, Clone)]
pub struct AccountService {
    users: Arc<UserRepository>,
    hasher: PasswordHasher,
    password_policy: PasswordValidator,
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        users: Arc<UserRepository>,
        hasher: PasswordHasher,
        password_policy: PasswordValidator,
        encoder: JwtEncoder,
        decoder: JwtDecoder,
    ) -> Self {
        Self {
            users,
            hasher,
            password_policy,
            encoder,
            decoder,
        }
    }

    /// Registers a new account and logs it in.
    pub async fn register(&self, input: RegisterAccount) -> AppResult<AuthTokens> {
        let username = input.username.trim();
        if username.len() < 3
            || username.len() > 32
            || !username.chars().all(|c| c.is_alphanumeric() || c == '_')
        {
            return Err(AppError::validation(
                "Username must be 3-32 alphanumeric characters or underscores",
            ));
        }
        if !input.email.contains('@') {
            return Err(AppError::validation("A valid email address is required"));
        }

        self.password_policy.validate(&input.password)?;
        let password_hash = self.hasher.hash_password(&input.password)?;

        let user = self
            .users
            .create(&CreateUser {
                username: username.to_string(),
                email: input.email.trim().to_lowercase(),
                password_hash,
                display_name: input.display_name,
                gender: input.gender,
                date_of_birth: input.date_of_birth,
            })
            .await?;

        let tokens = self.encoder.generate_token_pair(user.id, &user.username)?;
        info!(user_id = %user.id, username = %user.username, "Account registered");
        Ok(AuthTokens { user, tokens })
    }

    /// Authenticates a username and password.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<AuthTokens> {
        let user = self
            .users
            .find_by_username(username.trim())
            .await?
            .ok_or_else(|| AppError::authentication("Invalid username or password"))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(AppError::authentication("Invalid username or password"));
        }

        if user.status != UserStatus::Active {
            return Err(AppError::authentication("Account is not active"));
        }

        self.users.touch_last_login(user.id).await?;

        let tokens = self.encoder.generate_token_pair(user.id, &user.username)?;
        info!(user_id = %user.id, "Login succeeded");
        Ok(AuthTokens { user, tokens })
    }

    /// Issues a new token pair from a valid refresh token.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<AuthTokens> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;

        let user = self
            .users
            .find_active_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::authentication("Account no longer active"))?;

        let tokens = self.encoder.generate_token_pair(user.id, &user.username)?;
        Ok(AuthTokens { user, tokens })
    }

    /// Changes the current user's password.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let user = self
            .users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if !self
            .hasher
            .verify_password(current_password, &user.password_hash)?
        {
            return Err(AppError::authentication("Current password is incorrect"));
        }

        self.password_policy
            .validate_not_same(current_password, new_password)?;
        self.password_policy.validate(new_password)?;

        let hash = self.hasher.hash_password(new_password)?;
        self.users.set_password_hash(user.id, &hash).await?;

        info!(user_id = %user.id, "Password changed");
        Ok(())
    }
}
