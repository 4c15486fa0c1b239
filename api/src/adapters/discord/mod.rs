//! Discord webhook adapter

mod client;

pub use client::DiscordNotifier;
