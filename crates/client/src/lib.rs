//! Client side of the service catalog.
//!
//! [`SyncController`] loads the catalog, submits the add-service form and
//! issues deletes through any [`ServicesApi`], re-fetching after every
//! successful mutation so the rendered [`ServicesView`] only ever reflects
//! confirmed server state. Status messages go through a [`NoticeBoard`]
//! that clears itself after a few seconds.

pub mod api;
pub mod errors;
pub mod form;
pub mod notice;
pub mod sync;
pub mod view;

pub use api::{DeletedService, HttpServicesApi, ServicesApi};
pub use errors::ClientError;
pub use form::{FormError, ServiceForm};
pub use notice::{Notice, NoticeBoard, NoticeKind, NOTICE_TTL};
pub use sync::{Confirm, DeleteOutcome, SubmitError, SyncController};
pub use view::{ServiceCard, ServicesView};
