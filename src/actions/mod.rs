use async_trait::async_trait;
use thiserror::Error;

use crate::models::storage::{Storage, UpdateStorageRequest};

/// Errors returned by the storage action layer
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("storage {0} not found")]
    NotFound(String),

    #[error("storage {0} already exists")]
    AlreadyExists(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type ActionResult<T> = Result<T, ActionError>;

/// Business operations behind the storage HTTP handlers.
///
/// Implementations own validation, persistence and quota checks; the
/// handlers only bind requests and translate results.
#[async_trait]
pub trait StorageActions: Send + Sync + 'static {
    /// Create a new storage
    async fn create_storage(&self, storage: Storage) -> ActionResult<()>;

    /// List all storages
    async fn get_storages(&self) -> ActionResult<Vec<Storage>>;

    /// Apply a partial update to the storage called `name`
    async fn update_storage(&self, name: &str, req: UpdateStorageRequest) -> ActionResult<()>;

    /// Delete the storage called `name`
    async fn delete_storage(&self, name: &str) -> ActionResult<()>;
}
