//! Service catalog: the record model, the seed data and the in-memory store.

pub mod model;
pub mod repository;
pub mod seed;
pub mod store;

pub use model::{CreateServiceRequest, NewService, Service, REQUIRED_FIELDS_MSG};
pub use repository::CatalogStore;
pub use store::ServiceStore;
