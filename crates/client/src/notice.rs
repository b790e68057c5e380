use std::{sync::Arc, time::Duration};

use tokio::sync::watch;

/// How long a notice stays up.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Single-slot status line shared between the controller and its viewers.
///
/// Every `show` arms its own timer and that timer empties the slot when it
/// fires, even if a newer notice replaced the one that armed it.
#[derive(Clone)]
pub struct NoticeBoard {
    tx: Arc<watch::Sender<Option<Notice>>>,
    ttl: Duration,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(NOTICE_TTL)
    }
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx), ttl }
    }

    /// Must be called from within a tokio runtime.
    pub fn show(&self, kind: NoticeKind, message: impl Into<String>) {
        self.tx.send_replace(Some(Notice { kind, message: message.into() }));
        let tx = Arc::clone(&self.tx);
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            tx.send_replace(None);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NoticeKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NoticeKind::Error, message);
    }

    pub fn current(&self) -> Option<Notice> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Notice>> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // with a paused clock, sleeping auto-advances time and runs every timer due earlier
    async fn advance(d: Duration) {
        tokio::time::sleep(d).await;
    }

    #[tokio::test(start_paused = true)]
    async fn notice_clears_after_ttl() {
        let board = NoticeBoard::default();
        board.success("✅ Service added successfully!");
        assert_eq!(board.current().unwrap().kind, NoticeKind::Success);

        advance(Duration::from_millis(4_999)).await;
        assert!(board.current().is_some());

        advance(Duration::from_millis(2)).await;
        assert_eq!(board.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn earlier_timer_clears_newer_notice() {
        let board = NoticeBoard::default();
        board.error("first");
        advance(Duration::from_secs(3)).await;
        board.success("second");
        assert_eq!(board.current().unwrap().message, "second");

        // the first notice's timer fires at t=5s and empties the slot
        advance(Duration::from_millis(2_100)).await;
        assert_eq!(board.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_updates() {
        let board = NoticeBoard::new(Duration::from_secs(1));
        let mut rx = board.subscribe();
        board.error("boom");
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_ref().map(|n| n.message.clone()), Some("boom".to_string()));
    }
}
