//! Role bucketing - classify guild members into priority-ranked buckets
//!
//! Two-phase by design: classification is additive (a member lands in every
//! bucket whose role they hold), then a prioritization pass keeps each
//! member only in their highest-priority bucket. Collapsing the phases into
//! exclusive assignment would need all of a member's roles up front to
//! decide precedence; keeping them apart decouples "which roles does X
//! have" from "which single bucket should X display under".

use std::collections::HashSet;

use serde::Serialize;

use crate::entities::{avatar_url, Person};
use crate::traits::SourceMember;

/// Staff role tiers in strictly descending priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleTier {
    Owner,
    CoOwner,
    Moderator,
    Seller,
}

impl RoleTier {
    /// All tiers, highest priority first.
    pub const ALL: [RoleTier; 4] = [
        RoleTier::Owner,
        RoleTier::CoOwner,
        RoleTier::Moderator,
        RoleTier::Seller,
    ];

    /// Stable key used in API payloads.
    pub fn key(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::CoOwner => "co_owner",
            Self::Moderator => "moderator",
            Self::Seller => "seller",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::CoOwner => "Co-Owner",
            Self::Moderator => "Moderator",
            Self::Seller => "Seller",
        }
    }
}

/// Explicit tier-to-role-id mapping, built from configuration rather than
/// read from process-wide state.
#[derive(Debug, Clone)]
pub struct RoleMap {
    owner: String,
    co_owner: String,
    moderator: String,
    seller: String,
}

impl RoleMap {
    /// Create a new RoleMap
    pub fn new(
        owner: impl Into<String>,
        co_owner: impl Into<String>,
        moderator: impl Into<String>,
        seller: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            co_owner: co_owner.into(),
            moderator: moderator.into(),
            seller: seller.into(),
        }
    }

    /// The role id configured for a tier.
    pub fn role_id(&self, tier: RoleTier) -> &str {
        match tier {
            RoleTier::Owner => &self.owner,
            RoleTier::CoOwner => &self.co_owner,
            RoleTier::Moderator => &self.moderator,
            RoleTier::Seller => &self.seller,
        }
    }

    /// Highest-priority tier whose role id appears in the given role set.
    pub fn highest_tier(&self, role_ids: &[String]) -> Option<RoleTier> {
        RoleTier::ALL
            .into_iter()
            .find(|tier| role_ids.iter().any(|id| id == self.role_id(*tier)))
    }
}

/// Ordered, duplicate-free staff buckets keyed by tier.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoleBuckets {
    pub owner: Vec<Person>,
    pub co_owner: Vec<Person>,
    pub moderator: Vec<Person>,
    pub seller: Vec<Person>,
}

impl RoleBuckets {
    /// The bucket for a tier.
    pub fn bucket(&self, tier: RoleTier) -> &[Person] {
        match tier {
            RoleTier::Owner => &self.owner,
            RoleTier::CoOwner => &self.co_owner,
            RoleTier::Moderator => &self.moderator,
            RoleTier::Seller => &self.seller,
        }
    }

    fn bucket_mut(&mut self, tier: RoleTier) -> &mut Vec<Person> {
        match tier {
            RoleTier::Owner => &mut self.owner,
            RoleTier::CoOwner => &mut self.co_owner,
            RoleTier::Moderator => &mut self.moderator,
            RoleTier::Seller => &mut self.seller,
        }
    }

    /// Total number of listed people across all buckets.
    pub fn len(&self) -> usize {
        RoleTier::ALL
            .into_iter()
            .map(|tier| self.bucket(tier).len())
            .sum()
    }

    /// Check whether every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify, tidy, and prioritize a member list into staff buckets.
pub fn bucket_members(members: &[SourceMember], roles: &RoleMap) -> RoleBuckets {
    let mut buckets = classify(members, roles);
    for tier in RoleTier::ALL {
        dedupe_and_sort(buckets.bucket_mut(tier));
    }
    prioritize(&mut buckets);
    buckets
}

/// Phase one: additive classification. A member joins every bucket whose
/// role id appears in their role set.
fn classify(members: &[SourceMember], roles: &RoleMap) -> RoleBuckets {
    let mut buckets = RoleBuckets::default();
    for member in members {
        let person = Person {
            id: member.user.id.clone(),
            name: member.display_name().to_string(),
            avatar: member
                .user
                .avatar_hash
                .as_deref()
                .map(|hash| avatar_url(&member.user.id, hash)),
        };
        for tier in RoleTier::ALL {
            if member.has_role(roles.role_id(tier)) {
                buckets.bucket_mut(tier).push(person.clone());
            }
        }
    }
    buckets
}

/// Deduplicate a bucket by id (later entries win, matching map-insertion
/// semantics) and sort by display name. Collation is Rust's `str` ordering:
/// lexicographic over UTF-8 code points, case-sensitive.
fn dedupe_and_sort(bucket: &mut Vec<Person>) {
    let mut deduped: Vec<Person> = Vec::with_capacity(bucket.len());
    for person in bucket.drain(..) {
        if let Some(existing) = deduped.iter_mut().find(|p| p.id == person.id) {
            *existing = person;
        } else {
            deduped.push(person);
        }
    }
    deduped.sort_by(|a, b| a.name.cmp(&b.name));
    *bucket = deduped;
}

/// Phase two: walk tiers in priority order and drop anyone already placed
/// in a higher tier, so every person appears in exactly one bucket.
fn prioritize(buckets: &mut RoleBuckets) {
    let mut seen: HashSet<String> = HashSet::new();
    for tier in RoleTier::ALL {
        buckets
            .bucket_mut(tier)
            .retain(|person| seen.insert(person.id.clone()));
    }
}
