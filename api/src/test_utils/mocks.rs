//! Manual mocks

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{Notification, Notifier};
use crate::error::WebhookError;

/// Notifier that records every notification it is asked to deliver
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every delivery fails
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), WebhookError> {
        if self.fail {
            return Err(WebhookError::Api {
                status: 500,
                message: "mock failure".to_string(),
            });
        }
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}
