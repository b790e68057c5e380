use service::catalog::NewService;
use thiserror::Error;

/// Longest accepted icon, counted in UTF-16 code units so that a single
/// emoji (including ones with a variation selector such as "✍️") fits.
pub const MAX_ICON_UNITS: usize = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("All fields are required and cannot be empty or whitespace only.")]
    MissingField,
    #[error("Icon should be a single emoji (1-2 characters).")]
    IconTooLong,
}

/// The "add service" form: three text inputs plus whether it is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceForm {
    pub name: String,
    pub icon: String,
    pub description: String,
    visible: bool,
}

impl ServiceForm {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), icon: icon.into(), description: description.into(), visible: true }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Flip visibility; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Hide and clear, as the cancel button does.
    pub fn cancel(&mut self) {
        self.reset();
        self.visible = false;
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.icon.clear();
        self.description.clear();
    }

    /// Trim every field and check it locally before anything is sent.
    pub fn validate(&self) -> Result<NewService, FormError> {
        let name = self.name.trim();
        let icon = self.icon.trim();
        let description = self.description.trim();

        if name.is_empty() || icon.is_empty() || description.is_empty() {
            return Err(FormError::MissingField);
        }
        if icon.encode_utf16().count() > MAX_ICON_UNITS {
            return Err(FormError::IconTooLong);
        }
        Ok(NewService::new(name, icon, description))
    }
}
