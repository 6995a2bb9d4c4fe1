//! `roster_core` store traits backed by SQLite

use async_trait::async_trait;
use roster_core::store::{
    MergeOutcome, PullRequestStore, StatsStore, StoreResult, TeamStore, UserStore,
};
use roster_core::{
    FullUserInfo, NewMember, NewPullRequest, PullRequest, PullRequestSummary, ReviewerStats,
    StoreError, Team, User,
};
use sqlx::SqlitePool;

use crate::repos::{PullRequestRepository, StatsRepository, TeamRepository, UserRepository};

/// Store over a shared connection pool; cheap to clone
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamStore for SqliteStore {
    async fn create_team_with_members(
        &self,
        name: &str,
        members: &[NewMember],
    ) -> StoreResult<(Team, Vec<User>)> {
        TeamRepository::new(&self.pool)
            .create_with_members(name, members)
            .await
            .map_err(StoreError::from)
    }

    async fn team_by_name(&self, name: &str) -> StoreResult<(Team, Vec<User>)> {
        TeamRepository::new(&self.pool)
            .get_by_name(name)
            .await
            .map_err(StoreError::from)
    }
}

#[async_trait]
impl UserStore for SqliteStore {
    async fn user_by_id(&self, id: &str) -> StoreResult<FullUserInfo> {
        UserRepository::new(&self.pool)
            .find_by_id(id)
            .await
            .map_err(StoreError::from)
    }

    async fn set_user_active(&self, id: &str, is_active: bool) -> StoreResult<FullUserInfo> {
        UserRepository::new(&self.pool)
            .set_active(id, is_active)
            .await
            .map_err(StoreError::from)
    }

    async fn active_team_members(
        &self,
        team_id: i64,
        exclude_id: Option<&str>,
    ) -> StoreResult<Vec<User>> {
        UserRepository::new(&self.pool)
            .active_members(team_id, exclude_id)
            .await
            .map_err(StoreError::from)
    }
}

#[async_trait]
impl PullRequestStore for SqliteStore {
    async fn create_pull_request_with_reviewers(
        &self,
        pr: &NewPullRequest,
        reviewers: &[String],
    ) -> StoreResult<()> {
        PullRequestRepository::new(&self.pool)
            .create(pr, reviewers)
            .await
            .map_err(StoreError::from)
    }

    async fn pull_request_by_id(&self, id: &str) -> StoreResult<PullRequest> {
        PullRequestRepository::new(&self.pool)
            .find_by_id(id)
            .await
            .map_err(StoreError::from)
    }

    async fn set_merged(&self, id: &str) -> StoreResult<MergeOutcome> {
        PullRequestRepository::new(&self.pool)
            .set_merged(id)
            .await
            .map_err(StoreError::from)
    }

    async fn reassign_reviewer(
        &self,
        pr_id: &str,
        old_reviewer_id: &str,
        new_reviewer_id: &str,
    ) -> StoreResult<()> {
        PullRequestRepository::new(&self.pool)
            .reassign(pr_id, old_reviewer_id, new_reviewer_id)
            .await
            .map_err(StoreError::from)
    }

    async fn pull_requests_by_reviewer(
        &self,
        reviewer_id: &str,
    ) -> StoreResult<Vec<PullRequestSummary>> {
        PullRequestRepository::new(&self.pool)
            .by_reviewer(reviewer_id)
            .await
            .map_err(StoreError::from)
    }
}

#[async_trait]
impl StatsStore for SqliteStore {
    async fn review_counts(&self) -> StoreResult<Vec<ReviewerStats>> {
        StatsRepository::new(&self.pool)
            .review_counts()
            .await
            .map_err(StoreError::from)
    }
}
