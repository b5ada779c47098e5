//! # Docdesk Auth Crate
//!
//! Session and authentication for the Docdesk core: [`AuthService`] handles
//! login, registration, logout, and current-session lookup over the user
//! directory, and the [`guard`] module computes the allow/redirect decision
//! consumed by the routing layer.

use std::time::Duration;

use docdesk_store::StoreError;
use docdesk_users::{
    CreateUserRequest, Role, SessionRepository, User, UserError, UserRepository,
};
use thiserror::Error;
use tracing::info;

pub mod guard;

pub use guard::{decide, AuthState, GuardDecision, RouteRules};

const LOGIN_DELAY: Duration = Duration::from_millis(800);
const REGISTER_DELAY: Duration = Duration::from_millis(1000);
const LOGOUT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User with this email already exists")]
    DuplicateEmail,

    #[error("Invalid registration data: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<UserError> for AuthError {
    fn from(error: UserError) -> Self {
        match error {
            UserError::DuplicateEmail => AuthError::DuplicateEmail,
            UserError::Validation(message) => AuthError::Validation(message),
            UserError::Store(error) => AuthError::Store(error),
            UserError::NotFound => AuthError::InvalidCredentials,
        }
    }
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Service for session and authentication operations.
///
/// Mutating operations pay the simulated round-trip; [`current_user`]
/// (consulted on every guarded call) reads the marker synchronously.
///
/// [`current_user`]: Self::current_user
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    sessions: SessionRepository,
    default_role: Role,
}

impl AuthService {
    pub fn new(users: UserRepository) -> Self {
        let sessions = users.sessions().clone();
        Self {
            users,
            sessions,
            default_role: Role::Viewer,
        }
    }

    /// Role assigned when a registration does not name one.
    pub fn with_default_role(mut self, role: Role) -> Self {
        self.default_role = role;
        self
    }

    /// Log in with a case-insensitive email match.
    ///
    /// The password is accepted but never checked: the directory stores no
    /// credentials. On success the matched user becomes the current session.
    pub async fn login(&self, email: &str, _password: &str) -> AuthResult<User> {
        self.sessions
            .store_latency()
            .simulate(LOGIN_DELAY)
            .await;

        let user = self
            .users
            .find_by_email(email)?
            .ok_or(AuthError::InvalidCredentials)?;

        self.sessions.set(&user)?;

        info!(user = %user.id, "user logged in");
        Ok(user)
    }

    /// Register a new account and log it in.
    ///
    /// Fails without touching the store when the email is already taken,
    /// case-insensitively.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        _password: &str,
        role: Option<Role>,
    ) -> AuthResult<User> {
        self.sessions
            .store_latency()
            .simulate(REGISTER_DELAY)
            .await;

        let user = self.users.insert(CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            role: role.unwrap_or(self.default_role),
            avatar: None,
        })?;

        self.sessions.set(&user)?;

        info!(user = %user.id, "user registered");
        Ok(user)
    }

    /// Clear the current session. Logging out twice is not an error.
    pub async fn logout(&self) -> AuthResult<()> {
        self.sessions
            .store_latency()
            .simulate(LOGOUT_DELAY)
            .await;

        self.sessions.clear()?;

        info!("user logged out");
        Ok(())
    }

    /// Synchronous read of the session marker.
    pub fn current_user(&self) -> AuthResult<Option<User>> {
        Ok(self.sessions.current()?)
    }

    pub fn is_authenticated(&self) -> AuthResult<bool> {
        Ok(self.current_user()?.is_some())
    }

    /// Whether the current session's user holds one of `roles`.
    ///
    /// False when unauthenticated, and false for an empty role list.
    pub fn has_role(&self, roles: &[Role]) -> AuthResult<bool> {
        Ok(self
            .current_user()?
            .map(|user| roles.contains(&user.role))
            .unwrap_or(false))
    }

    /// Snapshot of the session as guard input.
    pub fn state(&self) -> AuthResult<AuthState> {
        let user = self.current_user()?;
        Ok(AuthState {
            loading: false,
            is_authenticated: user.is_some(),
            user,
        })
    }
}
