//! Rank catalog
//!
//! The single source of truth for badges, rank ladders, and required dwell
//! times. Badges are totally ordered; the terminal rank of one badge rolls
//! over into the first rank of the next. The catalog is read-only after
//! construction and can be shared freely.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::DomainError;

/// A badge: a named duty category owning an ordered rank ladder and one
/// required dwell time (minutes) shared by every rank in the ladder.
#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    pub key: String,
    pub display_name: String,
    pub ranks: Vec<String>,
    pub required_minutes: u32,
}

/// Ordered, validated collection of badges
#[derive(Debug)]
pub struct RankCatalog {
    badges: Vec<Badge>,
    index: HashMap<String, usize>,
}

impl RankCatalog {
    /// Build a catalog, enforcing the startup invariants:
    /// every badge has at least one rank, a positive dwell time, a unique
    /// key, and no duplicate rank names within its ladder.
    pub fn new(badges: Vec<Badge>) -> Result<Self, DomainError> {
        if badges.is_empty() {
            return Err(DomainError::Validation(
                "Rank catalog must contain at least one badge".to_string(),
            ));
        }

        let mut index = HashMap::with_capacity(badges.len());
        for (i, badge) in badges.iter().enumerate() {
            if badge.ranks.is_empty() {
                return Err(DomainError::Validation(format!(
                    "Badge '{}' has no ranks",
                    badge.key
                )));
            }
            if badge.required_minutes == 0 {
                return Err(DomainError::Validation(format!(
                    "Badge '{}' has a zero dwell time",
                    badge.key
                )));
            }
            let mut seen = std::collections::HashSet::new();
            for rank in &badge.ranks {
                if !seen.insert(rank.as_str()) {
                    return Err(DomainError::Validation(format!(
                        "Badge '{}' has duplicate rank '{}'",
                        badge.key, rank
                    )));
                }
            }
            if index.insert(badge.key.clone(), i).is_some() {
                return Err(DomainError::Validation(format!(
                    "Duplicate badge key '{}'",
                    badge.key
                )));
            }
        }

        Ok(Self { badges, index })
    }

    /// Look up a badge by key
    pub fn badge(&self, key: &str) -> Result<&Badge, DomainError> {
        self.index
            .get(key)
            .map(|&i| &self.badges[i])
            .ok_or_else(|| DomainError::UnknownBadge(key.to_string()))
    }

    /// The ordered rank ladder of a badge
    pub fn ranks_of(&self, key: &str) -> Result<&[String], DomainError> {
        Ok(&self.badge(key)?.ranks)
    }

    /// Required dwell time (minutes) for promotions within a badge
    pub fn required_time_of(&self, key: &str) -> Result<u32, DomainError> {
        Ok(self.badge(key)?.required_minutes)
    }

    /// Global badge ordering
    pub fn badge_order(&self) -> impl Iterator<Item = &str> {
        self.badges.iter().map(|b| b.key.as_str())
    }

    /// The badge that follows `key` in catalog order, if any
    pub fn next_badge(&self, key: &str) -> Result<Option<&Badge>, DomainError> {
        let i = *self
            .index
            .get(key)
            .ok_or_else(|| DomainError::UnknownBadge(key.to_string()))?;
        Ok(self.badges.get(i + 1))
    }

    /// All badges, in order (for the catalog listing endpoint)
    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    /// The entry rank of the first badge, used to seed new members
    pub fn entry_rank(&self) -> (&str, &str) {
        let first = &self.badges[0];
        (first.key.as_str(), first.ranks[0].as_str())
    }

    /// The standard organization catalog.
    pub fn standard() -> Self {
        let badge = |key: &str, display: &str, minutes: u32, ranks: &[&str]| Badge {
            key: key.to_string(),
            display_name: display.to_string(),
            ranks: ranks.iter().map(|r| r.to_string()).collect(),
            required_minutes: minutes,
        };

        let badges = vec![
            badge(
                "clerical",
                "Clerical Staff",
                25,
                &[
                    "Trainee",
                    "Clerk I",
                    "Clerk II",
                    "Clerk III",
                    "Clerk IV",
                    "Clerk V",
                    "Senior Clerk",
                    "Expert Clerk",
                ],
            ),
            badge(
                "security",
                "Security Team",
                30,
                &[
                    "Security Officer I",
                    "Security Officer II",
                    "Security Officer III",
                    "Security Advisor I",
                    "Security Advisor II",
                    "Security Advisor III",
                    "Security Chief",
                ],
            ),
            badge(
                "training",
                "Training Corps",
                60,
                &[
                    "Instructor I",
                    "Instructor II",
                    "Instructor III",
                    "Senior Instructor",
                    "Training Chief",
                    "Training General",
                    "Training Coordinator",
                    "Executive Instructor",
                    "Training Director",
                    "Deputy Head of Training",
                    "Head of Training",
                ],
            ),
            badge(
                "interior",
                "Interior Affairs",
                90,
                &[
                    "Interior Minister I",
                    "Interior Minister II",
                    "Interior Minister III",
                    "Senior Interior Minister",
                    "General Interior Minister",
                    "Executive Interior Minister",
                    "Interior Directorate Manager",
                    "Head of Interior",
                ],
            ),
            badge(
                "highrank",
                "High Rank",
                120,
                &[
                    "Commander I",
                    "Commander II",
                    "Commander III",
                    "Junior Executive",
                    "Head Executive",
                    "Overseer",
                    "Head Overseer",
                ],
            ),
            badge(
                "diplomat",
                "Diplomats",
                140,
                &[
                    "Trial Senator",
                    "Senator Assistant",
                    "Senator",
                    "Junior Senator",
                    "Senior Senator",
                    "Chief Senator Assistant",
                    "Chief Senator",
                    "Deputy Executive Senator",
                    "Executive Senator",
                    "Deputy Chief Executive Senator",
                    "Chief Executive Senator",
                    "Head Senator",
                ],
            ),
            badge(
                "operations",
                "Operations Division",
                160,
                &[
                    "Program Specialist",
                    "Security Specialist",
                    "Personnel Specialist",
                    "Technical Specialist",
                    "Quality Assurance Specialist",
                    "Advocate Coordinator",
                    "Intelligence Operations Officer",
                    "Contracts Specialist",
                    "Procurement Specialist",
                    "Operations Department Commander",
                    "Operations Commander",
                ],
            ),
            badge(
                "foreign",
                "Foreign Affairs",
                200,
                &[
                    "Trial Foreign Minister",
                    "Foreign Minister Assistant",
                    "Deputy Foreign Minister",
                    "Foreign Minister III",
                    "Foreign Minister II",
                    "Foreign Minister I",
                    "Foreign Minister",
                ],
            ),
            badge(
                "management",
                "Management Bureau",
                240,
                &[
                    "Trial Board Member",
                    "Reception Manager",
                    "Warehouse Officer",
                    "Warehouse Overseer",
                    "Chairholder",
                    "Senior Chancellor",
                    "Executive",
                    "Senior Executive",
                    "Supreme Executive",
                ],
            ),
            badge(
                "roomctrl",
                "Room Control",
                260,
                &[
                    "Room Representative Assistant",
                    "Room Representative Deputy",
                    "Room Representative",
                    "Trial Room Manager",
                    "Room Auditor",
                    "Room Controller",
                    "Room Director",
                ],
            ),
            badge(
                "leaders",
                "Leaders",
                300,
                &[
                    "Leader I",
                    "Leader II",
                    "Leader III",
                    "Leader Assistant",
                    "Supreme Leader",
                    "Senior Leader",
                    "Head Leader",
                ],
            ),
            badge(
                "executive",
                "Upper Management",
                340,
                &[
                    "Trial Upper Management",
                    "Special Operations Chief",
                    "Recruitment Manager",
                    "Head of Trade",
                    "Junior Director",
                    "Director Assistant",
                    "Director",
                    "Senior Director",
                    "Deputy Head Manager",
                    "Deputy Executive Manager",
                    "Executive Manager",
                ],
            ),
            badge(
                "directors",
                "Directors",
                380,
                &[
                    "Trial Manager",
                    "Chief Intelligence Officer",
                    "Head of Risk Management",
                    "Chief Legal Officer",
                    "Chief Financial Officer",
                    "Chief Operating Officer",
                    "Chief Executive",
                ],
            ),
            badge(
                "commanders",
                "Commanders",
                420,
                &[
                    "Commandant I",
                    "Commandant II",
                    "Commandant III",
                    "Senior Commandant",
                    "Deputy Commandant",
                    "Expert Commandant",
                    "Leader of Commandants",
                ],
            ),
            badge(
                "colonel",
                "Colonels",
                460,
                &[
                    "Trial Lieutenant Colonel",
                    "Senior Lieutenant Colonel",
                    "Trial Colonel",
                    "Colonel I",
                    "Colonel II",
                    "Senior Colonel",
                    "Expert Colonel",
                ],
            ),
            badge(
                "premier",
                "Premiers",
                500,
                &[
                    "Trial Premier",
                    "Premier Assistant",
                    "Deputy Premier",
                    "Senior Premier",
                    "Premier I",
                    "Premier II",
                    "Premier III",
                    "Premier",
                ],
            ),
            badge(
                "intelligence",
                "Intelligence",
                560,
                &[
                    "Intelligence Assistant",
                    "Intelligence Deputy",
                    "Intelligence Officer",
                    "Intelligence Commander",
                    "Head of Intelligence",
                ],
            ),
            badge(
                "presidency",
                "Presidency",
                24 * 60,
                &[
                    "Trial President",
                    "Presidential Assistant",
                    "Presidential Secretary General",
                    "Vice President",
                    "Presidential General Aide",
                    "Acting President",
                    "Trial High Councillor",
                    "High Councillor",
                ],
            ),
        ];

        // The standard table satisfies the invariants by construction
        Self::new(badges).expect("standard catalog is valid")
    }
}
