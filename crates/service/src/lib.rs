//! Service layer owning the agency's service catalog.
//! - `catalog::ServiceStore` is the single owner of records and the id counter.
//! - Validation of wire input lives next to the model; the store trusts its callers.
//! - Errors are plain enums the HTTP layer maps onto status codes.

pub mod errors;
pub mod catalog;
