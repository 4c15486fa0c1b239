//! Notification sink port
//!
//! Outbound, fire-and-forget notifications to a chat webhook. Callers log
//! delivery failures; they never propagate into operation results.

use async_trait::async_trait;

use crate::error::WebhookError;

/// Embed color for promotion notifications (green)
pub const COLOR_PROMOTION: u32 = 0x2ecc71;
/// Embed color for salary notifications (blue)
pub const COLOR_SALARY: u32 = 0x3498db;
/// Embed color for bulk operations (purple)
pub const COLOR_BULK: u32 = 0x9932cc;
/// Default embed color (organization red)
pub const COLOR_DEFAULT: u32 = 0xc8102e;

/// A name/value display field within a notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl NotificationField {
    pub fn inline(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            inline: true,
        }
    }
}

/// A structured event for the notification sink
#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<NotificationField>,
    /// Member the event is about; rendered as an extra field when set
    pub subject_user: Option<String>,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            color: COLOR_DEFAULT,
            fields: Vec::new(),
            subject_user: None,
        }
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push(NotificationField::inline(name, value));
        self
    }

    pub fn subject(mut self, username: impl Into<String>) -> Self {
        self.subject_user = Some(username.into());
        self
    }
}

/// Notification sink
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one notification. Implementations may drop the notification
    /// silently when the sink is not configured.
    async fn send(&self, notification: &Notification) -> Result<(), WebhookError>;
}
