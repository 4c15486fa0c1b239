//! Member service
//!
//! Handles member registration, login, and session-token authentication
//! against the identity store.

use std::sync::Arc;

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::domain::entities::{Member, NewMember};
use crate::domain::ports::MemberRepository;
use crate::domain::RankCatalog;
use crate::error::{AppError, DomainError};

/// Service for managing members
pub struct MemberService<MR>
where
    MR: MemberRepository,
{
    members: Arc<MR>,
    catalog: Arc<RankCatalog>,
}

impl<MR> MemberService<MR>
where
    MR: MemberRepository,
{
    pub fn new(members: Arc<MR>, catalog: Arc<RankCatalog>) -> Self {
        Self { members, catalog }
    }

    /// Register a new member at the catalog's entry rank.
    pub async fn register(
        &self,
        username: &str,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> Result<Member, AppError> {
        if username.is_empty() || username.len() > 50 {
            return Err(AppError::BadRequest(
                "Username must be between 1 and 50 characters".to_string(),
            ));
        }
        if password.len() < 6 {
            return Err(AppError::BadRequest(
                "Password must be at least 6 characters".to_string(),
            ));
        }

        if self.members.find_by_username(username).await?.is_some() {
            return Err(AppError::Domain(DomainError::AlreadyExists(format!(
                "Member with username '{}' already exists",
                username
            ))));
        }

        let (badge, rank) = self.catalog.entry_rank();
        let new_member = NewMember {
            username: username.to_string(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            password_hash: hash_secret(password),
            badge: badge.to_string(),
            rank: rank.to_string(),
        };

        let member = self.members.create(&new_member).await?;

        tracing::info!(username = username, "Member registered");

        Ok(member)
    }

    /// Log a member in. Returns the member and a fresh session token;
    /// the token is shown once and stored only as a hash.
    pub async fn login(&self, username: &str, password: &str) -> Result<(Member, String), AppError> {
        let member = self
            .members
            .find_by_username(username)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if !member.is_active || member.password_hash != hash_secret(password) {
            return Err(AppError::Unauthorized);
        }

        let token = generate_token();
        self.members
            .set_token_hash(username, Some(hash_secret(&token)))
            .await?;

        Ok((member, token))
    }

    /// Invalidate the member's session token
    pub async fn logout(&self, username: &str) -> Result<(), AppError> {
        self.members.set_token_hash(username, None).await?;
        Ok(())
    }

    /// Find the member owning a session token hash
    pub async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Member>, AppError> {
        Ok(self.members.find_by_token_hash(token_hash).await?)
    }

    /// Find a member by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Member>, AppError> {
        Ok(self.members.find_by_username(username).await?)
    }
}

/// Generate a random session token
fn generate_token() -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..32).map(|_| rng.gen()).collect();
    format!("rh-{}", hex::encode(bytes))
}

/// Hash a password or session token for storage
pub fn hash_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}
