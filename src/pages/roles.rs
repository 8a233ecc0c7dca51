use serde::{Deserialize, Serialize};
use std::fmt;

pub const ADMIN: &str = "admin";
pub const MANAGER: &str = "manager";

/// Access tier of a dashboard page, and the value of a table's `role` prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => ADMIN,
            Role::Manager => MANAGER,
        }
    }

    /// Path prefix under which pages of this tier are mounted.
    pub fn path_prefix(self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Manager => "/manager",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
