// In-memory bucket used by the session tests. Records every call it receives.

use crate::core_storage::{DirectoryEntry, StorageBackend, StorageError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Mutex;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    List(usize),
    Stat(String),
    Put(String, usize),
    Delete(String),
    Rename(String, String),
    FetchUrl(String),
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    objects: Mutex<BTreeMap<String, (Vec<u8>, DateTime<Utc>)>>,
    calls: Mutex<Vec<BackendCall>>,
    fetch_base: Option<Url>,
    failing: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation fails with a service error, after being recorded.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_object(self, name: &str, data: &[u8], modified: DateTime<Utc>) -> Self {
        self.objects
            .lock()
            .unwrap()
            .insert(name.to_string(), (data.to_vec(), modified));
        self
    }

    /// Makes `fetch_url` resolve keys against `base`.
    pub fn with_fetch_base(mut self, base: Url) -> Self {
        self.fetch_base = Some(base);
        self
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn object(&self, name: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .get(name)
            .map(|(data, _)| data.clone())
    }

    fn record(&self, call: BackendCall) -> Result<(), StorageError> {
        self.calls.lock().unwrap().push(call);
        if self.failing {
            return Err(StorageError::Service {
                status: 599,
                message: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn list(&self, limit: usize) -> Result<Vec<DirectoryEntry>, StorageError> {
        self.record(BackendCall::List(limit))?;
        let objects = self.objects.lock().unwrap();
        Ok(objects
            .iter()
            .take(limit)
            .map(|(name, (data, modified))| DirectoryEntry {
                name: name.clone(),
                size: data.len() as u64,
                modified: *modified,
            })
            .collect())
    }

    async fn stat(&self, key: &str) -> Result<DirectoryEntry, StorageError> {
        self.record(BackendCall::Stat(key.to_string()))?;
        let objects = self.objects.lock().unwrap();
        let (data, modified) = objects
            .get(key)
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;
        Ok(DirectoryEntry {
            name: key.to_string(),
            size: data.len() as u64,
            modified: *modified,
        })
    }

    async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), StorageError> {
        self.record(BackendCall::Put(key.to_string(), data.len()))?;
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), (data, Utc::now()));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.record(BackendCall::Delete(key.to_string()))?;
        self.objects
            .lock()
            .unwrap()
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    async fn rename(&self, from: &str, to: &str) -> Result<(), StorageError> {
        self.record(BackendCall::Rename(from.to_string(), to.to_string()))?;
        let mut objects = self.objects.lock().unwrap();
        let object = objects
            .remove(from)
            .ok_or_else(|| StorageError::NotFound(from.to_string()))?;
        objects.insert(to.to_string(), object);
        Ok(())
    }

    fn fetch_url(&self, key: &str) -> Result<Url, StorageError> {
        self.record(BackendCall::FetchUrl(key.to_string()))?;
        let base = self
            .fetch_base
            .as_ref()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;
        Ok(base.join(key)?)
    }
}
