use async_trait::async_trait;

use crate::catalog::model::{NewService, Service};
use crate::errors::ServiceError;

/// Storage seam for the service catalog, so handlers can be driven by any
/// implementation (the in-memory store in production, fakes in tests).
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list(&self) -> Vec<Service>;
    async fn insert(&self, input: NewService) -> Service;
    async fn remove(&self, id: u64) -> Result<Service, ServiceError>;
}
