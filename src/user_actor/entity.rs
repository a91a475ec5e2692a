use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate};
use super::UserError;

impl Entity for User {
    type Id = String;
    type CreatePayload = UserCreate;
    type Action = ();
    type ActionResult = ();
    type Error = UserError;

    fn id(&self) -> &String {
        &self.identifier
    }

    /// Users bring their own identifier; duplicates are stored as given.
    fn requested_id(payload: &UserCreate) -> Option<String> {
        Some(payload.identifier.trim().to_string())
    }

    /// Creates a new User from registration parameters.
    ///
    /// # Errors
    /// `ValidationError` when the name or the identifier is blank.
    fn from_create(id: String, payload: UserCreate) -> Result<Self, UserError> {
        let name = payload.name.trim();
        if name.is_empty() {
            return Err(UserError::ValidationError("Name required".to_string()));
        }
        if id.is_empty() {
            return Err(UserError::ValidationError("Identifier required".to_string()));
        }
        Ok(User::new(name, id))
    }

    /// Users are never mutated after registration.
    fn handle_action(&mut self, _action: ()) -> Result<(), UserError> {
        Ok(())
    }
}
