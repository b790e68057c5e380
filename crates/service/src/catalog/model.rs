use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::ServiceError;

/// Message returned when a create request lacks one of the three fields.
pub const REQUIRED_FIELDS_MSG: &str = "Name, icon, and description are required";

/// A marketing offering shown on the site.
/// - `id`: assigned by the store, never reused
/// - `icon`: display glyph, one or two characters by convention only
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Service {
    pub id: u64,
    pub name: String,
    pub icon: String,
    pub description: String,
}

/// Validated input for a new record; the id is allocated by the store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct NewService {
    pub name: String,
    pub icon: String,
    pub description: String,
}

impl NewService {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), icon: icon.into(), description: description.into() }
    }
}

/// Raw create payload as it arrives over the wire. Every field is optional
/// so that a missing field maps to a validation error instead of a decode error.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct CreateServiceRequest {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
}

impl CreateServiceRequest {
    /// Presence check only: each field must exist and be non-empty.
    /// Whitespace is not trimmed here; that is the client's concern.
    pub fn validate(self) -> Result<NewService, ServiceError> {
        match (self.name, self.icon, self.description) {
            (Some(name), Some(icon), Some(description))
                if !name.is_empty() && !icon.is_empty() && !description.is_empty() =>
            {
                Ok(NewService { name, icon, description })
            }
            _ => Err(ServiceError::Validation(REQUIRED_FIELDS_MSG.into())),
        }
    }
}
