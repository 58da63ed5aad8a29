//! Identity shared by everyone who takes part in the store.

use serde::{Deserialize, Serialize};

use crate::capability::Identity;
use crate::types::Email;

/// A named person with a contact email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    email: Email,
}

impl Person {
    pub fn new(name: impl Into<String>, email: Email) -> Self {
        Self {
            name: name.into(),
            email,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// `Name: {name} | Email: {email}`
    #[must_use]
    pub fn display_info(&self) -> String {
        format!("Name: {} | Email: {}", self.name, self.email)
    }
}

impl Identity for Person {
    fn person(&self) -> &Person {
        self
    }
}
