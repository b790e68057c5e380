//! Environment/runtime helpers
//!
//! Sanity checks run once at startup.

use tracing::warn;

/// Warn when the static asset directory is missing. Not fatal: the API
/// keeps working, only `/` and asset paths will 404.
pub async fn ensure_static_dir(static_dir: &str) -> bool {
    match tokio::fs::metadata(static_dir).await {
        Ok(meta) if meta.is_dir() => true,
        Ok(_) => {
            warn!(%static_dir, "static asset path is not a directory; static assets may 404");
            false
        }
        Err(_) => {
            warn!(%static_dir, "static asset directory not found; static assets may 404");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_static_dir_is_reported_not_fatal() {
        assert!(!ensure_static_dir("/definitely/not/here/frontend").await);
        let tmp = std::env::temp_dir();
        assert!(ensure_static_dir(tmp.to_str().unwrap()).await);
    }
}
