use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Size given to every storage created through the import endpoint
pub const DEFAULT_IMPORT_SIZE: u64 = 100;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate, ToSchema)]
pub struct Storage {
    /// Storage name, unique across the service
    #[validate(length(min = 1))]
    pub name: String,
    /// Capacity in GB
    #[validate(range(min = 1))]
    pub size: u64,
    /// Number of replicas
    #[serde(default)]
    pub replicas: u32,
    /// Addresses of the storage hosts
    #[serde(default)]
    pub ips: Vec<String>,
}

impl Storage {
    /// Storage record used when importing a bare name
    pub fn imported(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: DEFAULT_IMPORT_SIZE,
            replicas: 0,
            ips: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Validate, ToSchema)]
pub struct UpdateStorageRequest {
    /// New storage name
    #[validate(length(min = 1))]
    pub name: Option<String>,
    /// New capacity in GB
    #[validate(range(min = 1))]
    pub size: Option<u64>,
    /// New number of replicas
    pub replicas: Option<u32>,
    /// New host addresses, replaces the current list
    pub ips: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct ImportResult {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Per-item outcome of a bulk import
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, ToSchema)]
pub struct ImportResponse {
    pub imported: Vec<ImportResult>,
    pub failed: Vec<ImportResult>,
}

impl ImportResponse {
    pub fn import_successful(&mut self, name: impl Into<String>, namespace: impl Into<String>) {
        self.imported.push(ImportResult {
            name: name.into(),
            namespace: namespace.into(),
            message: None,
        });
    }

    pub fn import_failed(
        &mut self,
        name: impl Into<String>,
        namespace: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.failed.push(ImportResult {
            name: name.into(),
            namespace: namespace.into(),
            message: Some(message.into()),
        });
    }

    pub fn len(&self) -> usize {
        self.imported.len() + self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
