//! Authentication use cases.
//!
//! Every failure leaves this module as an [`AuthFailure`]; callers on the
//! transport side turn it into an API failure with `?`.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{ApiClient, User};
use crate::error::AuthFailure;
use crate::ports::{ClientDirectory, PasswordService, TokenClaims, TokenService, UserDirectory};

/// Minimum length of passwords and client secrets.
pub const MIN_SECRET_LEN: usize = 8;

/// Access token handed to a caller after a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Authentication service, wired with its ports at construction.
pub struct Authenticator {
    users: Arc<dyn UserDirectory>,
    clients: Arc<dyn ClientDirectory>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl Authenticator {
    pub fn new(
        users: Arc<dyn UserDirectory>,
        clients: Arc<dyn ClientDirectory>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            clients,
            passwords,
            tokens,
        }
    }

    /// Create a user account.
    pub async fn register_user(
        &self,
        email: &str,
        password: &str,
        roles: Vec<String>,
    ) -> Result<User, AuthFailure> {
        let email = normalize_email(email)?;
        check_secret_length(password, "Password")?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthFailure::invalid_input("Email already registered"));
        }

        let password_hash = self.passwords.hash(password)?;
        self.users.insert(User::new(email, password_hash, roles)).await
    }

    /// Create an API client for the client-credentials flow.
    pub async fn register_client(
        &self,
        client_id: &str,
        secret: &str,
        name: &str,
        roles: Vec<String>,
    ) -> Result<ApiClient, AuthFailure> {
        let client_id = client_id.trim();
        if client_id.is_empty() {
            return Err(AuthFailure::invalid_input("Client id is required"));
        }
        check_secret_length(secret, "Client secret")?;

        let secret_hash = self.passwords.hash(secret)?;
        let client = ApiClient::new(
            client_id.to_string(),
            secret_hash,
            name.to_string(),
            roles,
        );
        self.clients.insert(client).await
    }

    /// Sign a user in with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, AuthFailure> {
        let email = normalize_email(email)?;
        if password.is_empty() {
            return Err(AuthFailure::invalid_input("Password is required"));
        }

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AuthFailure::user_not_found(format!("No user with email {email}")))?;

        if user.disabled {
            return Err(AuthFailure::forbidden("This account has been disabled"));
        }

        if !self.passwords.verify(password, &user.password_hash)? {
            return Err(AuthFailure::unauthenticated("Invalid email or password"));
        }

        self.issue_for_user(&user)
    }

    /// Exchange a client id and secret for an access token.
    pub async fn exchange_client_credentials(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<IssuedToken, AuthFailure> {
        let client_id = client_id.trim();
        if client_id.is_empty() || client_secret.is_empty() {
            return Err(AuthFailure::invalid_input(
                "Client id and client secret are required",
            ));
        }

        let client = self
            .clients
            .find_by_client_id(client_id)
            .await?
            .ok_or_else(|| AuthFailure::client_not_found(format!("No client with id {client_id}")))?;

        if !self.passwords.verify(client_secret, &client.secret_hash)? {
            return Err(AuthFailure::unauthenticated("Invalid client credentials"));
        }

        self.issue(client.id, &client.client_id, client.roles.clone())
    }

    /// Issue a token for an already-verified user.
    pub fn issue_for_user(&self, user: &User) -> Result<IssuedToken, AuthFailure> {
        self.issue(user.id, &user.email, user.roles.clone())
    }

    /// Validate a bearer token.
    pub fn authenticate(&self, token: &str) -> Result<TokenClaims, AuthFailure> {
        if token.trim().is_empty() {
            return Err(AuthFailure::unauthenticated("Missing bearer token"));
        }
        self.tokens.validate_token(token)
    }

    /// Load the user a token was issued to.
    pub async fn current_user(&self, claims: &TokenClaims) -> Result<User, AuthFailure> {
        let user = self
            .users
            .find_by_id(claims.subject_id)
            .await?
            .ok_or_else(|| AuthFailure::user_not_found("User no longer exists"))?;

        if user.disabled {
            return Err(AuthFailure::forbidden("This account has been disabled"));
        }

        Ok(user)
    }

    pub fn require_role(&self, claims: &TokenClaims, role: &str) -> Result<(), AuthFailure> {
        if claims.has_role(role) {
            Ok(())
        } else {
            Err(AuthFailure::forbidden(format!("Role '{role}' is required")))
        }
    }

    fn issue(
        &self,
        subject_id: Uuid,
        subject: &str,
        roles: Vec<String>,
    ) -> Result<IssuedToken, AuthFailure> {
        let access_token = self.tokens.generate_token(subject_id, subject, roles)?;
        let expires_in = u64::try_from(self.tokens.expiration_seconds())
            .map_err(|_| AuthFailure::internal("Token lifetime is negative"))?;

        Ok(IssuedToken {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        })
    }
}

fn normalize_email(email: &str) -> Result<String, AuthFailure> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AuthFailure::invalid_input("Invalid email address"));
    }
    Ok(email.to_lowercase())
}

fn check_secret_length(secret: &str, label: &str) -> Result<(), AuthFailure> {
    if secret.chars().count() < MIN_SECRET_LEN {
        return Err(AuthFailure::invalid_input(format!(
            "{label} must be at least {MIN_SECRET_LEN} characters"
        )));
    }
    Ok(())
}
