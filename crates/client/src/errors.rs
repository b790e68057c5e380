use thiserror::Error;

/// Failures seen by the sync layer when talking to the API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response at all: connection refused, timeout, DNS.
    #[error("transport error: {0}")]
    Transport(String),
    /// Non-2xx response; `message` is the server's `error` field when the
    /// body carried one.
    #[error("api error {status}: {}", .message.as_deref().unwrap_or("<no error body>"))]
    Api { status: u16, message: Option<String> },
    /// 2xx response whose body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ClientError {
    /// Text to show the user: the server-provided message when there is
    /// one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api { message: Some(msg), .. } if !msg.is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_preferred_over_fallback() {
        let e = ClientError::Api { status: 400, message: Some("Name, icon, and description are required".into()) };
        assert_eq!(e.user_message("Failed to add service"), "Name, icon, and description are required");
    }

    #[test]
    fn fallback_for_bare_status_and_transport() {
        let bare = ClientError::Api { status: 500, message: None };
        assert_eq!(bare.user_message("Failed to delete service"), "Failed to delete service");
        let net = ClientError::Transport("connection refused".into());
        assert_eq!(net.user_message("Failed to add service"), "Failed to add service");
    }
}
