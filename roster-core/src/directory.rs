//! Team, user and statistics directories
//!
//! Thin services over the store that translate store failures into roster
//! errors. Reviewer selection lives in [`crate::assignment`].

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use crate::error::{Entity, Error, Result};
use crate::models::{FullUserInfo, NewMember, PullRequestSummary, ReviewerStats, Team, User};
use crate::store::{Store, StoreError};

fn unexpected(err: StoreError) -> Error {
    Error::Store(err.to_string())
}

/// Team creation and lookup
pub struct TeamDirectory<S: ?Sized> {
    store: Arc<S>,
}

impl<S: Store + ?Sized> TeamDirectory<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a team together with its initial members
    ///
    /// The team and every member are registered together or not at all.
    pub async fn create(&self, name: &str, members: &[NewMember]) -> Result<(Team, Vec<User>)> {
        let mut seen = HashSet::new();
        if let Some(dup) = members.iter().find(|m| !seen.insert(m.id.as_str())) {
            return Err(Error::already_exists(Entity::User, &dup.id));
        }

        let (team, users) = self
            .store
            .create_team_with_members(name, members)
            .await
            .map_err(|e| match e {
                StoreError::TeamExists(name) => Error::already_exists(Entity::Team, name),
                StoreError::UserExists(id) => Error::already_exists(Entity::User, id),
                other => unexpected(other),
            })?;
        info!(team = %team.name, members = users.len(), "Team created");

        Ok((team, users))
    }

    /// Look up a team and its members by name
    pub async fn get(&self, name: &str) -> Result<(Team, Vec<User>)> {
        self.store.team_by_name(name).await.map_err(|e| match e {
            StoreError::NotFound => Error::not_found(Entity::Team, name),
            other => unexpected(other),
        })
    }
}

/// User lookup, activity toggling and review listings
pub struct UserDirectory<S: ?Sized> {
    store: Arc<S>,
}

impl<S: Store + ?Sized> UserDirectory<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn get(&self, user_id: &str) -> Result<FullUserInfo> {
        self.store.user_by_id(user_id).await.map_err(|e| match e {
            StoreError::NotFound => Error::not_found(Entity::User, user_id),
            other => unexpected(other),
        })
    }

    /// Mark a user active or inactive
    ///
    /// Inactive users stay on pull requests they already review; they are
    /// only skipped for new assignments.
    pub async fn set_active(&self, user_id: &str, is_active: bool) -> Result<FullUserInfo> {
        let user = self
            .store
            .set_user_active(user_id, is_active)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => Error::not_found(Entity::User, user_id),
                other => unexpected(other),
            })?;
        info!(user_id = %user_id, is_active, "User activity changed");

        Ok(user)
    }

    /// Pull requests the user currently reviews; empty for unknown users
    pub async fn review_assignments(&self, user_id: &str) -> Result<Vec<PullRequestSummary>> {
        self.store
            .pull_requests_by_reviewer(user_id)
            .await
            .map_err(unexpected)
    }
}

/// Reviewer statistics
pub struct StatsDirectory<S: ?Sized> {
    store: Arc<S>,
}

impl<S: Store + ?Sized> StatsDirectory<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Assignment counts per reviewer, ordered by user id
    pub async fn reviewer_stats(&self) -> Result<Vec<ReviewerStats>> {
        let mut stats = self.store.review_counts().await.map_err(unexpected)?;
        stats.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        Ok(stats)
    }
}
