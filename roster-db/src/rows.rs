//! Row types as stored in SQLite

use chrono::{DateTime, Utc};
use roster_core::{FullUserInfo, PrStatus, PullRequest, PullRequestSummary, User};

use crate::error::{DbError, Result};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub is_active: bool,
    pub team_id: i64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            is_active: row.is_active,
            team_id: row.team_id,
        }
    }
}

/// User joined with their team's name
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FullUserRow {
    pub id: String,
    pub username: String,
    pub is_active: bool,
    pub team_id: i64,
    pub team_name: String,
}

impl From<FullUserRow> for FullUserInfo {
    fn from(row: FullUserRow) -> Self {
        FullUserInfo {
            user: User {
                id: row.id,
                username: row.username,
                is_active: row.is_active,
                team_id: row.team_id,
            },
            team_name: row.team_name,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PullRequestRow {
    pub id: String,
    pub name: String,
    pub author_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequestRow {
    pub fn into_pull_request(self, assigned_reviewers: Vec<String>) -> Result<PullRequest> {
        Ok(PullRequest {
            status: parse_status(&self.status)?,
            id: self.id,
            name: self.name,
            author_id: self.author_id,
            assigned_reviewers,
            created_at: self.created_at,
            merged_at: self.merged_at,
        })
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PullRequestSummaryRow {
    pub id: String,
    pub name: String,
    pub author_id: String,
    pub status: String,
}

impl TryFrom<PullRequestSummaryRow> for PullRequestSummary {
    type Error = DbError;

    fn try_from(row: PullRequestSummaryRow) -> Result<Self> {
        Ok(PullRequestSummary {
            status: parse_status(&row.status)?,
            id: row.id,
            name: row.name,
            author_id: row.author_id,
        })
    }
}

pub(crate) fn parse_status(raw: &str) -> Result<PrStatus> {
    raw.parse().map_err(DbError::InvalidData)
}
