use serde::Serialize;

/// Represents a registered user in the system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    #[serde(rename = "ci")]
    pub identifier: String,
    #[serde(rename = "nombres_completos")]
    pub name: String,
}

/// Payload for registering a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub identifier: String,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `name` - User's display name
    /// * `identifier` - Caller-chosen identifier (national id in the storefront)
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
        }
    }
}
