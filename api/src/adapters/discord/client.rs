//! Discord webhook notifier implementation
//!
//! Renders `Notification` values as Discord embeds and posts them to a
//! configured webhook URL. When no URL is configured the notifier drops
//! notifications and logs at debug level.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Serialize;

use crate::domain::ports::{Notification, Notifier};
use crate::error::WebhookError;

/// Notifier posting Discord-style embeds to a chat webhook
pub struct DiscordNotifier {
    http: Client,
    webhook_url: Option<String>,
    /// Footer text on every embed
    org_name: String,
}

impl DiscordNotifier {
    pub fn new(webhook_url: Option<String>, org_name: String) -> Self {
        Self {
            http: Client::new(),
            webhook_url,
            org_name,
        }
    }
}

/// Wire types for the Discord webhook API
#[derive(Serialize)]
struct WebhookPayload<'a> {
    embeds: Vec<Embed<'a>>,
    username: &'a str,
}

#[derive(Serialize)]
struct Embed<'a> {
    title: &'a str,
    description: &'a str,
    color: u32,
    timestamp: String,
    footer: EmbedFooter<'a>,
    fields: Vec<EmbedField>,
}

#[derive(Serialize)]
struct EmbedFooter<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct EmbedField {
    name: String,
    value: String,
    inline: bool,
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), WebhookError> {
        let Some(url) = self.webhook_url.as_deref() else {
            tracing::debug!(title = %notification.title, "Notification sink not configured, dropping");
            return Ok(());
        };

        let mut fields: Vec<EmbedField> = notification
            .fields
            .iter()
            .map(|f| EmbedField {
                name: f.name.clone(),
                value: f.value.clone(),
                inline: f.inline,
            })
            .collect();

        if let Some(subject) = &notification.subject_user {
            fields.push(EmbedField {
                name: "Member".to_string(),
                value: subject.clone(),
                inline: true,
            });
        }

        let payload = WebhookPayload {
            embeds: vec![Embed {
                title: &notification.title,
                description: &notification.description,
                color: notification.color,
                timestamp: Utc::now().to_rfc3339(),
                footer: EmbedFooter {
                    text: &self.org_name,
                },
                fields,
            }],
            username: &self.org_name,
        };

        let response = self.http.post(url).json(&payload).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 429 {
            Err(WebhookError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(WebhookError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
