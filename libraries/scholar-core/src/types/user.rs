//! User domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScholarError};

#[cfg(feature = "sqlx-support")]
use sqlx::{
    encode::IsNull,
    error::BoxDynError,
    sqlite::{SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef},
    Decode, Encode, Sqlite, Type,
};

pub type UserId = i64;

/// Account role. Only academics may own opportunities and only students
/// take part in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Academic,
}

impl Role {
    /// Database/wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Academic => "academic",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ScholarError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "student" => Ok(Role::Student),
            "academic" => Ok(Role::Academic),
            other => Err(ScholarError::invalid_input(format!(
                "unknown role '{other}' (expected 'student' or 'academic')"
            ))),
        }
    }
}

#[cfg(feature = "sqlx-support")]
impl Type<Sqlite> for Role {
    fn type_info() -> SqliteTypeInfo {
        <String as Type<Sqlite>>::type_info()
    }
}

#[cfg(feature = "sqlx-support")]
impl<'q> Encode<'q, Sqlite> for Role {
    fn encode_by_ref(
        &self,
        args: &mut Vec<SqliteArgumentValue<'q>>,
    ) -> std::result::Result<IsNull, BoxDynError> {
        <String as Encode<Sqlite>>::encode_by_ref(&self.as_str().to_string(), args)
    }
}

#[cfg(feature = "sqlx-support")]
impl<'r> Decode<'r, Sqlite> for Role {
    fn decode(value: SqliteValueRef<'r>) -> std::result::Result<Self, BoxDynError> {
        let s = <String as Decode<Sqlite>>::decode(value)?;
        Ok(s.parse::<Role>()?)
    }
}

/// A registered user (student or academic)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier, assigned by the store
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Unique email address
    pub email: String,

    pub role: Role,

    /// Free-text research interests (students)
    pub interests: Option<String>,

    /// Account creation timestamp (ISO string)
    pub created_at: String,
}

impl User {
    /// Interests if present and non-empty
    pub fn interests(&self) -> Option<&str> {
        self.interests.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }
}

/// Data for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub interests: Option<String>,
}

impl CreateUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
            interests: None,
        }
    }

    #[must_use]
    pub fn with_interests(mut self, interests: impl Into<String>) -> Self {
        self.interests = Some(interests.into());
        self
    }

    /// Check required fields are present
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ScholarError::invalid_input("name is required"));
        }
        if self.email.trim().is_empty() {
            return Err(ScholarError::invalid_input("email is required"));
        }
        Ok(())
    }
}
