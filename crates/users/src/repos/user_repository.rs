//! User repository over the users collection.

use std::time::Duration;

use docdesk_store::Store;
use tracing::{info, warn};

use crate::entities::{CreateUserRequest, UpdateUserRequest, User};
use crate::repos::session_repository::SessionRepository;
use crate::types::{UserError, UserResult};

/// Storage key of the users collection.
pub const USERS_COLLECTION: &str = "docdesk_users";

const LIST_DELAY: Duration = Duration::from_millis(600);
const FETCH_DELAY: Duration = Duration::from_millis(400);
const WRITE_DELAY: Duration = Duration::from_millis(800);

/// Repository for user directory operations.
///
/// A rejected operation never mutates the store: every check runs against
/// the loaded collection before anything is written back.
#[derive(Clone)]
pub struct UserRepository {
    store: Store,
    sessions: SessionRepository,
}

impl UserRepository {
    pub fn new(store: Store) -> Self {
        let sessions = SessionRepository::new(store.clone());
        Self { store, sessions }
    }

    /// The session marker this repository keeps in sync.
    pub fn sessions(&self) -> &SessionRepository {
        &self.sessions
    }

    /// List all users.
    pub async fn list(&self) -> UserResult<Vec<User>> {
        self.store.latency().simulate(LIST_DELAY).await;
        Ok(self.store.load_collection(USERS_COLLECTION)?)
    }

    /// Fetch a user by id.
    pub async fn get(&self, id: &str) -> UserResult<User> {
        self.store.latency().simulate(FETCH_DELAY).await;

        let users: Vec<User> = self.store.load_collection(USERS_COLLECTION)?;
        users
            .into_iter()
            .find(|user| user.id == id)
            .ok_or(UserError::NotFound)
    }

    /// Case-insensitive email lookup.
    pub fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users: Vec<User> = self.store.load_collection(USERS_COLLECTION)?;
        Ok(users
            .into_iter()
            .find(|user| user.email.eq_ignore_ascii_case(email)))
    }

    /// Validate and insert a new user without the simulated round-trip.
    ///
    /// Shared by administrative [`create`](Self::create) and by
    /// self-registration, which pays its own latency.
    pub fn insert(&self, request: CreateUserRequest) -> UserResult<User> {
        request.validate().map_err(UserError::Validation)?;

        let mut users: Vec<User> = self.store.load_collection(USERS_COLLECTION)?;
        if users
            .iter()
            .any(|user| user.email.eq_ignore_ascii_case(&request.email))
        {
            return Err(UserError::DuplicateEmail);
        }

        let id = cuid2::create_id();
        let avatar = request
            .avatar
            .or_else(|| Some(User::placeholder_avatar(&id)));
        let user = User {
            id,
            name: request.name,
            email: request.email,
            role: request.role,
            avatar,
        };

        users.push(user.clone());
        self.store.save_collection(USERS_COLLECTION, &users)?;

        info!(user = %user.id, email = %user.email, "created user");
        Ok(user)
    }

    /// Create a new user.
    pub async fn create(&self, request: CreateUserRequest) -> UserResult<User> {
        self.store.latency().simulate(WRITE_DELAY).await;
        self.insert(request)
    }

    /// Shallow-merge `request` over an existing user.
    ///
    /// When the updated user is the current session's user, the session
    /// marker is refreshed to match.
    pub async fn update(&self, id: &str, request: UpdateUserRequest) -> UserResult<User> {
        self.store.latency().simulate(WRITE_DELAY).await;
        request.validate().map_err(UserError::Validation)?;

        let mut users: Vec<User> = self.store.load_collection(USERS_COLLECTION)?;
        let index = users
            .iter()
            .position(|user| user.id == id)
            .ok_or(UserError::NotFound)?;

        if let Some(ref email) = request.email {
            let taken = users
                .iter()
                .any(|user| user.id != id && user.email.eq_ignore_ascii_case(email));
            if taken {
                return Err(UserError::DuplicateEmail);
            }
        }

        let user = &mut users[index];
        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(email) = request.email {
            user.email = email;
        }
        if let Some(role) = request.role {
            user.role = role;
        }
        if let Some(avatar) = request.avatar {
            user.avatar = Some(avatar);
        }
        let updated = user.clone();

        self.store.save_collection(USERS_COLLECTION, &users)?;

        if self
            .sessions
            .current()?
            .is_some_and(|current| current.id == id)
        {
            self.sessions.set(&updated)?;
        }

        info!(user = %updated.id, "updated user");
        Ok(updated)
    }

    /// Delete a user.
    ///
    /// Deleting the current session's user clears the session marker, so an
    /// administrator can self-delete and lose their own session.
    pub async fn delete(&self, id: &str) -> UserResult<()> {
        self.store.latency().simulate(WRITE_DELAY).await;

        let mut users: Vec<User> = self.store.load_collection(USERS_COLLECTION)?;
        let before = users.len();
        users.retain(|user| user.id != id);
        if users.len() == before {
            return Err(UserError::NotFound);
        }

        self.store.save_collection(USERS_COLLECTION, &users)?;

        if self
            .sessions
            .current()?
            .is_some_and(|current| current.id == id)
        {
            self.sessions.clear()?;
        }

        warn!(user = %id, "deleted user");
        Ok(())
    }
}
