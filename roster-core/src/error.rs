//! Error types for roster operations

use std::fmt;

use thiserror::Error;

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, Error>;

/// Kind of record an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Team,
    User,
    PullRequest,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Team => write!(f, "team"),
            Entity::User => write!(f, "user"),
            Entity::PullRequest => write!(f, "pull request"),
        }
    }
}

/// Error type for roster operations
#[derive(Error, Debug)]
pub enum Error {
    /// Referenced team, user or pull request does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: String },

    /// Team name, user id or pull request id is already taken
    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: Entity, id: String },

    /// Mutation attempted on a merged pull request
    #[error("pull request {0} is merged")]
    PrMerged(String),

    /// Reassignment target is not a current reviewer
    #[error("user {reviewer_id} is not assigned to pull request {pr_id}")]
    NotAssigned { pr_id: String, reviewer_id: String },

    /// No eligible replacement reviewer exists in the team
    #[error("no active replacement candidate in team for pull request {0}")]
    NoCandidates(String),

    /// A concurrent write invalidated the reassignment before it committed
    #[error("pull request {pr_id} changed concurrently: {reason}")]
    Conflict { pr_id: String, reason: String },

    /// Untranslated persistence failure
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn not_found(entity: Entity, id: impl Into<String>) -> Self {
        Error::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub(crate) fn already_exists(entity: Entity, id: impl Into<String>) -> Self {
        Error::AlreadyExists {
            entity,
            id: id.into(),
        }
    }

    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            Error::NotFound { .. } => "NOT_FOUND",
            Error::AlreadyExists {
                entity: Entity::Team,
                ..
            } => "TEAM_EXISTS",
            Error::AlreadyExists {
                entity: Entity::User,
                ..
            } => "USER_EXISTS",
            Error::AlreadyExists {
                entity: Entity::PullRequest,
                ..
            } => "PR_EXISTS",
            Error::PrMerged(_) => "PR_MERGED",
            Error::NotAssigned { .. } => "NOT_ASSIGNED",
            Error::NoCandidates(_) => "NO_CANDIDATE",
            Error::Conflict { .. } => "CONFLICT",
            Error::Store(_) | Error::Config(_) | Error::Io(_) => "INTERNAL_ERROR",
        }
    }
}
