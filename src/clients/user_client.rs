use tracing::{debug, info, instrument, warn};
use crate::domain::{User, UserCreate};
use crate::user_actor::UserError;
use crate::actor_framework::ResourceClient;

/// Client for the user registry actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl_basic_client!(UserClient, User, UserError, user);

impl UserClient {
    /// Appends a user. Identifiers are not unique: an earlier registration with
    /// the same identifier keeps winning lookups.
    #[instrument(skip(self))]
    pub async fn register(&self, name: String, identifier: String) -> Result<User, UserError> {
        debug!("Sending request");
        if let Some(existing) = self.inner.get(identifier.trim().to_string()).await? {
            warn!(user_name = %existing.name, "Identifier already registered, earlier registration wins lookups");
        }
        let user = self.inner.create(UserCreate { name, identifier }).await?;
        info!(user_id = %user.identifier, "User registered");
        Ok(user)
    }

    /// First user registered under `identifier`, trimmed the same way
    /// registration trims it.
    #[instrument(skip(self))]
    pub async fn find_by_identifier(&self, identifier: String) -> Result<User, UserError> {
        debug!("Sending request");
        let identifier = identifier.trim().to_string();
        self.inner
            .get(identifier.clone())
            .await?
            .ok_or(UserError::NotFound(identifier))
    }
}
