//! Store abstraction for roster persistence.
//!
//! The assignment engine never talks to a database directly. It relies on
//! the traits in this module, whose write operations are each a single unit
//! of work: they either apply completely or not at all, and they report
//! conflicts through the closed `StoreError` enum so the engine can map them
//! onto its own error taxonomy without inspecting messages.
//!
//! Implementations:
//! - `MemoryStore` (this crate): everything behind one lock, used in tests
//! - `SqliteStore` (`roster-db`): sqlx transactions over SQLite

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    FullUserInfo, NewMember, NewPullRequest, PullRequest, PullRequestSummary, ReviewerStats, Team,
    User,
};

/// Failure reported by a store operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The addressed row does not exist
    #[error("record not found")]
    NotFound,

    /// Team name is taken
    #[error("team name already exists: {0}")]
    TeamExists(String),

    /// User id is already registered
    #[error("user already exists: {0}")]
    UserExists(String),

    /// Pull request id is taken
    #[error("pull request already exists: {0}")]
    PullRequestExists(String),

    /// The pull request was merged before the write could apply
    #[error("pull request is merged")]
    PullRequestMerged,

    /// The reviewer being replaced is no longer assigned
    #[error("reviewer is not assigned")]
    ReviewerNotAssigned,

    /// The replacement is already a reviewer (or the author) of the pull request
    #[error("reviewer already assigned: {0}")]
    ReviewerTaken(String),

    /// Anything the backend could not classify
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Outcome of the conditional merge update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    /// The pull request exists, whatever its status
    pub exists: bool,
    /// This call performed the OPEN -> MERGED transition
    pub updated: bool,
}

/// Team persistence
#[async_trait]
pub trait TeamStore: Send + Sync {
    /// Create a team and register its members, all or nothing.
    ///
    /// Fails with `TeamExists` when the name is taken and `UserExists` when
    /// any member id is already registered.
    async fn create_team_with_members(
        &self,
        name: &str,
        members: &[NewMember],
    ) -> StoreResult<(Team, Vec<User>)>;

    /// Look up a team and its members (ordered by user id)
    async fn team_by_name(&self, name: &str) -> StoreResult<(Team, Vec<User>)>;
}

/// User persistence
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn user_by_id(&self, id: &str) -> StoreResult<FullUserInfo>;

    /// Set the active flag and return the updated user
    async fn set_user_active(&self, id: &str, is_active: bool) -> StoreResult<FullUserInfo>;

    /// Snapshot of the active members of a team, optionally excluding one id
    async fn active_team_members(
        &self,
        team_id: i64,
        exclude_id: Option<&str>,
    ) -> StoreResult<Vec<User>>;
}

/// Pull request persistence
#[async_trait]
pub trait PullRequestStore: Send + Sync {
    /// Insert the pull request and its reviewer rows, all or nothing.
    ///
    /// Fails with `PullRequestExists` when the id is taken; no reviewer rows
    /// are written in that case.
    async fn create_pull_request_with_reviewers(
        &self,
        pr: &NewPullRequest,
        reviewers: &[String],
    ) -> StoreResult<()>;

    async fn pull_request_by_id(&self, id: &str) -> StoreResult<PullRequest>;

    /// Move the pull request to MERGED if it is still OPEN
    async fn set_merged(&self, id: &str) -> StoreResult<MergeOutcome>;

    /// Swap one current reviewer for another in a single write.
    ///
    /// Re-checks the preconditions at write time: the pull request must still
    /// be OPEN, `old_reviewer_id` must still be assigned and
    /// `new_reviewer_id` must not be.
    async fn reassign_reviewer(
        &self,
        pr_id: &str,
        old_reviewer_id: &str,
        new_reviewer_id: &str,
    ) -> StoreResult<()>;

    /// Pull requests the user is currently assigned to review
    async fn pull_requests_by_reviewer(
        &self,
        reviewer_id: &str,
    ) -> StoreResult<Vec<PullRequestSummary>>;
}

/// Review statistics
#[async_trait]
pub trait StatsStore: Send + Sync {
    /// Assignment counts per reviewer over all history, ordered by user id
    async fn review_counts(&self) -> StoreResult<Vec<ReviewerStats>>;
}

/// Everything the roster services need from persistence
pub trait Store: TeamStore + UserStore + PullRequestStore + StatsStore {}

impl<T> Store for T where T: TeamStore + UserStore + PullRequestStore + StatsStore {}
