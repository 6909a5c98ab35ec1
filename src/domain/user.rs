//! Registered voters.

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// A registered user with a finite vote budget.
///
/// The budget is only ever decremented here; replenishment, if the wider
/// system has any, happens outside the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub gender: String,
    pub age: u8,
    pub email: String,
    pub phone: String,
    /// Remaining vote budget.
    pub budget: u32,
}

impl User {
    /// Create a user with empty profile fields and the given budget.
    pub fn new(id: UserId, name: impl Into<String>, budget: u32) -> Self {
        Self {
            id,
            name: name.into(),
            gender: String::new(),
            age: 0,
            email: String::new(),
            phone: String::new(),
            budget,
        }
    }
}
