use std::collections::HashSet;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

/// Upper bound on redraws when a minted identifier collides with a stored one.
pub const MAX_MINT_ATTEMPTS: usize = 64;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Failures produced by the actor machinery itself, independent of any domain.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("No free identifier after {0} attempts")]
    IdSpaceExhausted(usize),
    #[error("Payload carries no identifier and no minter is installed")]
    MissingId,
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Debug;
    type Action: Send + Debug;
    type ActionResult: Send + Debug;
    type Error: From<FrameworkError> + Send + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Identifier carried by the payload itself. `None` asks the actor to mint one.
    fn requested_id(_payload: &Self::CreatePayload) -> Option<Self::Id> {
        None
    }

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    List {
        respond_to: Response<Vec<T>, T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
    Shutdown,
    #[cfg(test)]
    Count {
        respond_to: Response<usize, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

type IdMinter<Id> = Box<dyn FnMut() -> Id + Send>;

/// Owns one insertion-ordered collection. Every read and write goes through
/// the message loop, so the collection never needs a lock.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    ids: HashSet<T::Id>,
    mint_id: Option<IdMinter<T::Id>>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            ids: HashSet::new(),
            mint_id: None,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Install the generator used for payloads that carry no identifier.
    pub fn with_id_minter(mut self, mint_id: impl FnMut() -> T::Id + Send + 'static) -> Self {
        self.mint_id = Some(Box::new(mint_id));
        self
    }

    /// Insert an entity before the actor is spawned.
    pub fn seed(&mut self, payload: T::CreatePayload) -> Result<&T, T::Error> {
        self.insert(payload)
    }

    fn next_id(&mut self, payload: &T::CreatePayload) -> Result<T::Id, T::Error> {
        if let Some(id) = T::requested_id(payload) {
            return Ok(id);
        }
        let mint_id = self.mint_id.as_mut().ok_or(FrameworkError::MissingId)?;
        for attempt in 1..=MAX_MINT_ATTEMPTS {
            let id = mint_id();
            if !self.ids.contains(&id) {
                return Ok(id);
            }
            warn!(id = %id, attempt, "Minted identifier collides, drawing again");
        }
        Err(FrameworkError::IdSpaceExhausted(MAX_MINT_ATTEMPTS).into())
    }

    fn insert(&mut self, payload: T::CreatePayload) -> Result<&T, T::Error> {
        let id = self.next_id(&payload)?;
        let mut item = T::from_create(id.clone(), payload)?;
        item.on_create()?;
        self.ids.insert(id);
        let index = self.store.len();
        self.store.push(item);
        Ok(&self.store[index])
    }

    fn find(&self, id: &T::Id) -> Option<&T> {
        self.store.iter().find(|item| item.id() == id)
    }

    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!(items = self.store.len(), "Resource actor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let result = self.insert(payload).cloned();
                    if let Ok(item) = &result {
                        debug!(id = %item.id(), "Item created");
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.find(&id).cloned()));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.store.iter_mut().find(|item| item.id() == &id) {
                        Some(item) => item.handle_action(action),
                        None => Err(FrameworkError::NotFound(id.to_string()).into()),
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Shutdown => {
                    info!("Resource actor shutting down");
                    break;
                }
                #[cfg(test)]
                ResourceRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!("Resource actor stopped");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R, T::Error>) -> ResourceRequest<T>,
    ) -> Result<R, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, T::Error> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, T::Error> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }

    /// Stops the actor even while other clients are still alive.
    pub async fn shutdown(&self) -> Result<(), T::Error> {
        self.sender
            .send(ResourceRequest::Shutdown)
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        Ok(())
    }

    #[cfg(test)]
    pub async fn count(&self) -> Result<usize, T::Error> {
        self.request(|respond_to| ResourceRequest::Count { respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
