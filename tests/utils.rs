#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, Response};
use volume_manager::actions::{ActionError, ActionResult, StorageActions};
use volume_manager::config::Settings;
use volume_manager::models::storage::{Storage, UpdateStorageRequest};
use volume_manager::{create_app, AppState};

type ErrorFactory = Box<dyn Fn() -> ActionError + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(Storage),
    List,
    Update(String, UpdateStorageRequest),
    Delete(String),
}

/// Records every action call and fails the ones it was told to
#[derive(Default, Clone)]
pub struct MockStorageActions {
    calls: Arc<Mutex<Vec<Call>>>,
    storages: Arc<Mutex<Vec<Storage>>>,
    create_failures: Arc<Mutex<HashMap<String, ErrorFactory>>>,
    failure: Arc<Mutex<Option<ErrorFactory>>>,
}

impl MockStorageActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_storages(self, storages: Vec<Storage>) -> Self {
        *self.storages.lock().unwrap() = storages;
        self
    }

    /// Fail `create_storage` for this name only
    pub fn fail_create(self, name: &str, err: impl Fn() -> ActionError + Send + Sync + 'static) -> Self {
        self.create_failures
            .lock()
            .unwrap()
            .insert(name.to_string(), Box::new(err));
        self
    }

    /// Fail every call
    pub fn fail_all(self, err: impl Fn() -> ActionError + Send + Sync + 'static) -> Self {
        *self.failure.lock().unwrap() = Some(Box::new(err));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> ActionResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().as_ref() {
            Some(err) => Err(err()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StorageActions for MockStorageActions {
    async fn create_storage(&self, storage: Storage) -> ActionResult<()> {
        let name = storage.name.clone();
        self.record(Call::Create(storage))?;
        if let Some(err) = self.create_failures.lock().unwrap().get(&name) {
            return Err(err());
        }
        Ok(())
    }

    async fn get_storages(&self) -> ActionResult<Vec<Storage>> {
        self.record(Call::List)?;
        Ok(self.storages.lock().unwrap().clone())
    }

    async fn update_storage(&self, name: &str, req: UpdateStorageRequest) -> ActionResult<()> {
        self.record(Call::Update(name.to_string(), req))
    }

    async fn delete_storage(&self, name: &str) -> ActionResult<()> {
        self.record(Call::Delete(name.to_string()))
    }
}

pub fn create_test_app(actions: &MockStorageActions) -> axum::Router {
    create_app(AppState::new(Settings::default(), Arc::new(actions.clone())))
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-user-role", "admin")
        .header("x-user-id", "00000000-0000-0000-0000-000000000001")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn admin_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("x-user-role", "admin")
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
