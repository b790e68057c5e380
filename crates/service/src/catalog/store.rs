use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::catalog::model::{NewService, Service};
use crate::catalog::repository::CatalogStore;
use crate::catalog::seed::initial_services;
use crate::errors::ServiceError;

struct Catalog {
    services: Vec<Service>,
    next_id: u64,
}

/// In-memory service catalog.
///
/// Records and the id counter sit behind one lock, so id allocation and
/// append happen as a single step and readers never see a half-applied
/// insert or remove. Nothing is persisted; a restart brings back the seed.
pub struct ServiceStore {
    inner: RwLock<Catalog>,
}

impl ServiceStore {
    /// Store holding the six seed records, next id 7.
    pub fn seeded() -> Arc<Self> {
        let services = initial_services();
        // seed ids run 1..=len
        let next_id = services.len() as u64 + 1;
        Self::from_parts(services, next_id)
    }

    pub fn empty() -> Arc<Self> {
        Self::from_parts(Vec::new(), 1)
    }

    /// Start from the given records; the counter resumes after the highest id.
    /// `None` when the highest id leaves no room for another.
    #[cfg(test)]
    pub(crate) fn with_records(services: Vec<Service>) -> Option<Arc<Self>> {
        let next_id = services.iter().map(|s| s.id).max().unwrap_or(0).checked_add(1)?;
        Some(Self::from_parts(services, next_id))
    }

    fn from_parts(services: Vec<Service>, next_id: u64) -> Arc<Self> {
        Arc::new(Self { inner: RwLock::new(Catalog { services, next_id }) })
    }

    /// All records in insertion order.
    pub async fn list(&self) -> Vec<Service> {
        self.inner.read().await.services.clone()
    }

    /// Append a record under a freshly allocated id. Input is assumed valid.
    pub async fn insert(&self, input: NewService) -> Service {
        let mut catalog = self.inner.write().await;
        let rec = Service {
            id: catalog.next_id,
            name: input.name,
            icon: input.icon,
            description: input.description,
        };
        catalog.next_id += 1;
        catalog.services.push(rec.clone());
        debug!(id = rec.id, next_id = catalog.next_id, "service inserted");
        rec
    }

    /// Remove the record with `id` and hand it back.
    pub async fn remove(&self, id: u64) -> Result<Service, ServiceError> {
        let mut catalog = self.inner.write().await;
        let index = catalog
            .services
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| ServiceError::not_found("service"))?;
        Ok(catalog.services.remove(index))
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.services.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CatalogStore for ServiceStore {
    async fn list(&self) -> Vec<Service> { self.list().await }
    async fn insert(&self, input: NewService) -> Service { self.insert(input).await }
    async fn remove(&self, id: u64) -> Result<Service, ServiceError> { self.remove(id).await }
}
