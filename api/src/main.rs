//! Rankhall API Server
//!
//! Rank-promotion and salary-rating service for an organization's admin
//! dashboard. Uses hexagonal (ports & adapters) architecture for clean
//! separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::{
    DiscordNotifier, InMemoryMemberRepository, InMemoryPromotionHistoryRepository,
    InMemoryServiceEventRepository,
};
use app::{hash_secret, MemberService, PromotionService, SalaryService};
use config::Config;
use domain::entities::{Member, MemberId};
use domain::RankCatalog;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub member_service: Arc<MemberService<InMemoryMemberRepository>>,
    pub promotion_service: Arc<
        PromotionService<
            InMemoryMemberRepository,
            InMemoryPromotionHistoryRepository,
            InMemoryServiceEventRepository,
        >,
    >,
    pub salary_service: Arc<SalaryService<InMemoryServiceEventRepository>>,
    pub event_repo: Arc<InMemoryServiceEventRepository>,
    pub notifier: Arc<DiscordNotifier>,
    pub catalog: Arc<RankCatalog>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Seed demo accounts so a fresh deployment has something to click on
fn seed_demo_members(members: &InMemoryMemberRepository, catalog: &RankCatalog) {
    let (badge, rank) = catalog.entry_rank();

    let mut admin = demo_member("admin", "Administrator", "admin123", badge, rank);
    admin.work_time_minutes = 120;
    members.insert(admin);

    let tester = demo_member("test", "Test Member", "test123", badge, rank);
    members.insert(tester);

    tracing::info!("Seeded demo members: admin, test");
}

fn demo_member(
    username: &str,
    full_name: &str,
    password: &str,
    badge: &str,
    rank: &str,
) -> Member {
    Member {
        id: MemberId::new(),
        username: username.to_string(),
        full_name: full_name.to_string(),
        email: format!("{}@rankhall.local", username),
        password_hash: hash_secret(password),
        token_hash: None,
        rank: rank.to_string(),
        badge: badge.to_string(),
        work_time_minutes: 0,
        salary: 0,
        joined_at: chrono::Utc::now(),
        last_promotion_at: None,
        is_active: true,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rankhall_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Rankhall API...");

    // Load configuration
    let config = Config::from_env();

    // The rank catalog is the single source of truth for badges and ladders
    let catalog = Arc::new(RankCatalog::standard());

    // Create adapters
    let member_repo = Arc::new(InMemoryMemberRepository::new());
    let history_repo = Arc::new(InMemoryPromotionHistoryRepository::new());
    let event_repo = Arc::new(InMemoryServiceEventRepository::new());
    let notifier = Arc::new(DiscordNotifier::new(
        config.discord_webhook_url.clone(),
        config.org_name.clone(),
    ));

    if config.notifications_enabled() {
        tracing::info!("Notification sink configured");
    } else {
        tracing::info!("Notification sink not configured, notifications will be dropped");
    }

    if config.seed_demo_members {
        seed_demo_members(&member_repo, &catalog);
    }

    // Create application services
    let member_service = Arc::new(MemberService::new(member_repo.clone(), catalog.clone()));
    let promotion_service = Arc::new(PromotionService::new(
        catalog.clone(),
        member_repo.clone(),
        history_repo.clone(),
        event_repo.clone(),
    ));
    let salary_service = Arc::new(SalaryService::new(event_repo.clone()));

    // Create app state
    let state = AppState {
        member_service,
        promotion_service,
        salary_service,
        event_repo,
        notifier,
        catalog,
        config,
    };

    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    // (SmartIpKeyExtractor requires X-Forwarded-For headers from reverse proxy)
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    // Rate-limited routes (registration, login)
    let rate_limited_routes = Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Build router
    let app = Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        // Rank catalog (public read)
        .route("/catalog/badges", get(handlers::catalog::list_badges))
        // Merge rate-limited routes
        .merge(rate_limited_routes)
        // Protected routes
        .nest(
            "/",
            Router::new()
                .route("/auth/logout", post(handlers::auth::logout))
                // Members
                .route("/members/me", get(handlers::members::get_me))
                .route("/members/:username", get(handlers::members::get_member))
                .route(
                    "/members/:username/events",
                    get(handlers::members::get_member_events),
                )
                .route(
                    "/members/:username/work-time",
                    put(handlers::members::set_work_time),
                )
                // Promotions
                .route("/promotions/evaluate", post(handlers::promotions::evaluate))
                .route("/promotions/bulk", post(handlers::promotions::evaluate_bulk))
                // Salary ratings
                .route("/salary/rate", post(handlers::salary::rate))
                // Audit archive
                .route("/archive", get(handlers::archive::get_archive))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth::auth_middleware,
                )),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
