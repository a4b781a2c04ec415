//! Request and response bodies for `/users`.
//!
//! Request bodies deserialize loosely and are then checked by `validate`,
//! which reports every rejected field at once as a 422.
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use service::{AppError, FieldError};

use crate::database::User;

pub const NAME_MAX_CHARS: usize = 100;
pub const AGE_MAX: i64 = 150;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

#[derive(Deserialize, Debug)]
pub struct UserCreate {
    pub email: String,
    pub name: String,
    pub age: i64,
}

#[derive(Deserialize, Debug, Default)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub is_active: Option<bool>,
}

/// A [`UserCreate`] that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub age: u8,
}

/// A [`UserUpdate`] that passed validation. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub email: Option<String>,
    pub name: Option<String>,
    pub age: Option<u8>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub age: u8,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            age: user.age,
            created_at: user.created_at,
            is_active: user.is_active,
        }
    }
}

impl UserCreate {
    pub fn validate(self) -> Result<NewUser, AppError> {
        let mut errors = Vec::new();

        let email = check_email(self.email, &mut errors);
        let name = check_name(&self.name, &mut errors);
        let age = check_age(self.age, &mut errors);

        match (email, name, age) {
            (Some(email), Some(name), Some(age)) => Ok(NewUser { email, name, age }),
            _ => Err(AppError::Unprocessable(errors)),
        }
    }
}

impl UserUpdate {
    pub fn validate(self) -> Result<UserChanges, AppError> {
        let mut errors = Vec::new();

        let changes = UserChanges {
            email: self.email.and_then(|email| check_email(email, &mut errors)),
            name: self.name.and_then(|name| check_name(&name, &mut errors)),
            age: self.age.and_then(|age| check_age(age, &mut errors)),
            is_active: self.is_active,
        };

        if errors.is_empty() {
            Ok(changes)
        } else {
            Err(AppError::Unprocessable(errors))
        }
    }
}

fn check_email(email: String, errors: &mut Vec<FieldError>) -> Option<String> {
    if EMAIL.is_match(&email) {
        return Some(email);
    }

    errors.push(FieldError::new(
        "value_error",
        &["body", "email"],
        "value is not a valid email address",
    ));
    None
}

/// Length is checked on the raw value, blankness after trimming.
fn check_name(name: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    let chars = name.chars().count();

    if chars == 0 {
        errors.push(FieldError::new(
            "string_too_short",
            &["body", "name"],
            "String should have at least 1 character",
        ));
        return None;
    }

    if chars > NAME_MAX_CHARS {
        errors.push(FieldError::new(
            "string_too_long",
            &["body", "name"],
            format!("String should have at most {NAME_MAX_CHARS} characters"),
        ));
        return None;
    }

    let trimmed = name.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(
            "value_error",
            &["body", "name"],
            "Name must not be blank",
        ));
        return None;
    }

    Some(trimmed.to_string())
}

fn check_age(age: i64, errors: &mut Vec<FieldError>) -> Option<u8> {
    if age < 0 {
        errors.push(FieldError::new(
            "greater_than_equal",
            &["body", "age"],
            "Input should be greater than or equal to 0",
        ));
        return None;
    }

    if age > AGE_MAX {
        errors.push(FieldError::new(
            "less_than_equal",
            &["body", "age"],
            format!("Input should be less than or equal to {AGE_MAX}"),
        ));
        return None;
    }

    u8::try_from(age).ok()
}
