//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and state of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::{BTreeMap, HashMap, HashSet};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel. Each actor processes its messages sequentially,
/// so the store and the unique-key index need no locking.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<Category>::new(32);
/// tokio::spawn(actor.run(()));
/// let created = client.create_many(vec![params]).await?;
/// ```
///
/// # Batch Semantics
///
/// `Create` and `CreateMany` share one path. For a batch:
///
/// 1. Every payload is turned into an entity with `from_create_params`, using IDs
///    reserved from the `next_id` counter.
/// 2. Unique keys are checked against the store and against earlier payloads of
///    the same batch.
/// 3. `validate` runs for every entity, then `on_create` runs for every entity.
/// 4. Only then are the entities inserted and the counter advanced.
///
/// A failure in any step rejects the whole batch and leaves the store untouched.
/// Side effects already performed by an `on_create` hook on *other* actors are
/// not rolled back.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    keys: HashMap<String, T::Id>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full,
    /// calls to the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            keys: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Product" instead of "catalog_seed::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self
                        .insert_batch(vec![params], &context)
                        .await
                        .map(|mut created| created.remove(0).id().clone());
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::CreateMany { params, respond_to } => {
                    let count = params.len();
                    debug!(entity_type, count, ?params, "CreateMany");
                    let result = self.insert_batch(params, &context).await;
                    match &result {
                        Ok(_) => {
                            info!(entity_type, count, size = self.store.len(), "Created batch")
                        }
                        Err(e) => warn!(entity_type, count, error = %e, "Batch rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&filter))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?filter, found = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::entity(e)));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn insert_batch(
        &mut self,
        params: Vec<T::Create>,
        context: &T::Context,
    ) -> Result<Vec<T>, FrameworkError> {
        let mut items = Vec::with_capacity(params.len());
        let mut batch_keys = HashSet::new();
        let mut next_id = self.next_id;

        for payload in params {
            let item = T::from_create_params(T::Id::from(next_id), payload)
                .map_err(FrameworkError::entity)?;
            next_id += 1;
            for key in item.unique_keys() {
                if self.keys.contains_key(&key) || !batch_keys.insert(key.clone()) {
                    return Err(FrameworkError::Conflict(key));
                }
            }
            items.push(item);
        }

        for item in &items {
            item.validate(context).await.map_err(FrameworkError::entity)?;
        }
        for item in &mut items {
            item.on_create(context).await.map_err(FrameworkError::entity)?;
        }

        self.next_id = next_id;
        for item in &items {
            for key in item.unique_keys() {
                self.keys.insert(key, item.id().clone());
            }
            self.store.insert(item.id().clone(), item.clone());
        }
        Ok(items)
    }
}
