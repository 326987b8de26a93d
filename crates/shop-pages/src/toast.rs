//! Transient notifications.
//!
//! One [`ToastNotifier`] lives on each page controller. Toasts expire after
//! their duration and can be dismissed early; both removals are idempotent.

use std::fmt;
use std::time::{Duration, Instant};

use crate::sections::render_toasts;

/// Identifier handed out by [`ToastNotifier::show`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastVariant::Info => "info",
            ToastVariant::Success => "success",
            ToastVariant::Error => "error",
        }
    }
}

/// A toast currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub variant: ToastVariant,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Toast {
    /// Whether the toast has outlived its duration at `now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}

/// Queue of toasts for one page.
#[derive(Debug, Default)]
pub struct ToastNotifier {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastNotifier {
    /// Duration used by [`show`](Self::show).
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast for the default duration.
    pub fn show(&mut self, message: impl Into<String>, variant: ToastVariant) -> ToastId {
        self.show_for(message, variant, Self::DEFAULT_DURATION)
    }

    /// Show a toast for `duration`.
    pub fn show_for(
        &mut self,
        message: impl Into<String>,
        variant: ToastVariant,
        duration: Duration,
    ) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.toasts.push(Toast {
            id,
            message: message.into(),
            variant,
            shown_at: Instant::now(),
            duration,
        });
        id
    }

    /// Remove a toast. Returns false when it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop toasts that expired at `now`. Returns how many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired(now));
        before - self.toasts.len()
    }

    /// Toasts on screen, oldest first.
    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Render the toast container with every active toast.
    pub fn render(&self) -> String {
        render_toasts(&self.toasts)
    }
}
