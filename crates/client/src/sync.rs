use service::catalog::Service;
use thiserror::Error;
use tracing::{error, info};

use crate::api::ServicesApi;
use crate::errors::ClientError;
use crate::form::{FormError, ServiceForm};
use crate::notice::NoticeBoard;
use crate::view::ServicesView;

pub const CONFIRM_DELETE_PROMPT: &str = "Are you sure you want to delete this service?";
pub const ADDED_NOTICE: &str = "✅ Service added successfully!";
pub const DELETED_NOTICE: &str = "✅ Service deleted successfully!";
pub const ADD_FAILED_FALLBACK: &str = "Failed to add service";
pub const DELETE_FAILED_FALLBACK: &str = "Failed to delete service";

/// Asks the user a yes/no question before a destructive action.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Invalid(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ClientError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Deleted(Service),
}

/// Keeps the rendered catalog in line with the server.
///
/// The view is only ever rebuilt from a fresh `list` call; mutations never
/// patch it locally.
pub struct SyncController<A, C> {
    api: A,
    confirm: C,
    view: ServicesView,
    form: ServiceForm,
    notices: NoticeBoard,
}

impl<A: ServicesApi, C: Confirm> SyncController<A, C> {
    pub fn new(api: A, confirm: C) -> Self {
        Self::with_notices(api, confirm, NoticeBoard::default())
    }

    pub fn with_notices(api: A, confirm: C, notices: NoticeBoard) -> Self {
        Self { api, confirm, view: ServicesView::default(), form: ServiceForm::default(), notices }
    }

    pub fn view(&self) -> &ServicesView {
        &self.view
    }

    pub fn form(&self) -> &ServiceForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ServiceForm {
        &mut self.form
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Fetch the full list and rebuild the view. Failures leave the error
    /// placeholder in place; there is no retry.
    pub async fn load(&mut self) -> &ServicesView {
        self.view = match self.api.list().await {
            Ok(services) => ServicesView::from_services(services),
            Err(e) => {
                error!(error = %e, "Error loading services");
                ServicesView::LoadFailed
            }
        };
        &self.view
    }

    /// Validate the form locally, create the record, then reload.
    /// On success the form is cleared and hidden; on any failure it is left as is.
    pub async fn submit_create(&mut self) -> Result<Service, SubmitError> {
        let input = match self.form.validate() {
            Ok(input) => input,
            Err(e) => {
                self.notices.error(format!("❌ {e}"));
                return Err(e.into());
            }
        };

        match self.api.create(&input).await {
            Ok(created) => {
                info!(id = created.id, name = %created.name, "Service added successfully");
                self.load().await;
                self.notices.success(ADDED_NOTICE);
                self.form.cancel();
                Ok(created)
            }
            Err(e) => {
                error!(error = %e, "Error adding service");
                self.notices.error(format!("❌ Error: {}", e.user_message(ADD_FAILED_FALLBACK)));
                Err(e.into())
            }
        }
    }

    /// Ask for confirmation, delete, then reload.
    pub async fn delete(&mut self, id: u64) -> Result<DeleteOutcome, ClientError> {
        if !self.confirm.confirm(CONFIRM_DELETE_PROMPT) {
            return Ok(DeleteOutcome::Declined);
        }

        match self.api.delete(id).await {
            Ok(deleted) => {
                info!(id, message = %deleted.message, "Service deleted");
                self.load().await;
                self.notices.success(DELETED_NOTICE);
                Ok(DeleteOutcome::Deleted(deleted.service))
            }
            Err(e) => {
                error!(id, error = %e, "Error deleting service");
                self.notices.error(format!("❌ Error: {}", e.user_message(DELETE_FAILED_FALLBACK)));
                Err(e)
            }
        }
    }
}
