//! Roster Core - teams, users and pull request reviewer assignment
//!
//! This crate holds the domain model, the store contract the persistence
//! layer must honour, and the assignment engine that picks reviewers when a
//! pull request is opened and swaps them out on request.

pub mod assignment;
pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use assignment::{AssignmentEngine, Reassignment, ReviewerPicker, REVIEWERS_PER_PULL_REQUEST};
pub use config::Config;
pub use directory::{StatsDirectory, TeamDirectory, UserDirectory};
pub use error::{Entity, Error, Result};
pub use models::{
    FullUserInfo, NewMember, NewPullRequest, PrStatus, PullRequest, PullRequestSummary,
    ReviewerStats, Team, User,
};
pub use service::RosterService;
pub use store::{MemoryStore, Store, StoreError};
