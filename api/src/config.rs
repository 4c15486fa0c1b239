use std::env;

#[derive(Clone)]
pub struct Config {
    /// Discord webhook URL for the notification sink. Notifications are
    /// disabled when unset.
    pub discord_webhook_url: Option<String>,
    /// Organization name shown in notification footers
    pub org_name: String,
    /// Seed the member store with demo accounts on startup
    pub seed_demo_members: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            discord_webhook_url: env::var("DISCORD_WEBHOOK_URL").ok(),
            org_name: env::var("ORG_NAME").unwrap_or_else(|_| "Rankhall".to_string()),
            seed_demo_members: env::var("SEED_DEMO_MEMBERS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    /// Check if the notification sink is configured
    pub fn notifications_enabled(&self) -> bool {
        self.discord_webhook_url.is_some()
    }
}
