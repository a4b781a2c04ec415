//! # Database
//!
//! In-memory stand-in for a real user store.
//!
//! - Users keyed by integer id in a `BTreeMap`, so listing is in id order
//! - Ids start at 1, increase monotonically, and are never reused
//! - Email uniqueness is checked under the same lock as the write
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use service::AppError;
use thiserror::Error;
use tracing::info;

use crate::schemas::{NewUser, UserChanges};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub age: u8,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Error, Debug, PartialEq)]
pub enum DatabaseError {
    #[error("Email {0} is already registered")]
    EmailTaken(String),

    #[error("User with ID {0} not found")]
    NotFound(u64),
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::EmailTaken { .. } => AppError::BadRequest(error.to_string()),
            DatabaseError::NotFound { .. } => AppError::NotFound(error.to_string()),
        }
    }
}

struct Tables {
    users: BTreeMap<u64, User>,
    next_id: u64,
    connected: bool,
}

pub struct Database {
    tables: Mutex<Tables>,
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

impl Database {
    pub fn new() -> Self {
        info!("Database connection opened");

        Self {
            tables: Mutex::new(Tables {
                users: BTreeMap::new(),
                next_id: 1,
                connected: true,
            }),
        }
    }

    pub fn close(&self) {
        let mut tables = self.tables.lock();
        if tables.connected {
            tables.connected = false;
            info!("Database connection closed");
        }
    }

    pub fn is_connected(&self) -> bool {
        self.tables.lock().connected
    }

    pub fn user_exists(&self, email: &str) -> bool {
        self.get_user_by_email(email).is_some()
    }

    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.tables
            .lock()
            .users
            .values()
            .find(|user| user.email == email)
            .cloned()
    }

    pub fn get_user(&self, id: u64) -> Option<User> {
        self.tables.lock().users.get(&id).cloned()
    }

    pub fn get_all_users(&self) -> Vec<User> {
        self.tables.lock().users.values().cloned().collect()
    }

    pub fn create_user(&self, new_user: NewUser) -> Result<User, DatabaseError> {
        let mut tables = self.tables.lock();

        if tables.users.values().any(|user| user.email == new_user.email) {
            return Err(DatabaseError::EmailTaken(new_user.email));
        }

        let user = User {
            id: tables.next_id,
            email: new_user.email,
            name: new_user.name,
            age: new_user.age,
            created_at: Utc::now(),
            is_active: true,
        };

        tables.users.insert(user.id, user.clone());
        tables.next_id += 1;

        Ok(user)
    }

    /// Apply the fields present in `changes`. Moving to an email held by
    /// another user fails; re-submitting the user's own email does not.
    pub fn update_user(&self, id: u64, changes: UserChanges) -> Result<User, DatabaseError> {
        let mut tables = self.tables.lock();

        if let Some(email) = &changes.email {
            let taken = tables
                .users
                .values()
                .any(|user| user.id != id && &user.email == email);

            if taken && tables.users.contains_key(&id) {
                return Err(DatabaseError::EmailTaken(email.clone()));
            }
        }

        let user = tables.users.get_mut(&id).ok_or(DatabaseError::NotFound(id))?;

        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(age) = changes.age {
            user.age = age;
        }
        if let Some(is_active) = changes.is_active {
            user.is_active = is_active;
        }

        Ok(user.clone())
    }

    pub fn delete_user(&self, id: u64) -> bool {
        self.tables.lock().users.remove(&id).is_some()
    }
}
