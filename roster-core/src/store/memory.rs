//! In-memory implementation of the store traits.
//!
//! All state lives in one `MemoryState` behind a `RwLock`. Every write
//! operation validates and applies under a single write guard, which makes
//! the guard its unit of work: readers never observe a half-applied change.
//! All state is lost when the store is dropped.

use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::{
    MergeOutcome, PullRequestStore, StatsStore, StoreError, StoreResult, TeamStore, UserStore,
};
use crate::models::{
    FullUserInfo, NewMember, NewPullRequest, PrStatus, PullRequest, PullRequestSummary,
    ReviewerStats, Team, User,
};

#[derive(Debug, Clone)]
struct PullRequestRecord {
    id: String,
    name: String,
    author_id: String,
    status: PrStatus,
    created_at: DateTime<Utc>,
    merged_at: Option<DateTime<Utc>>,
}

/// One reviewer assignment; kept after reassignment for statistics
#[derive(Debug, Clone)]
struct AssignmentRow {
    pull_request_id: String,
    reviewer_id: String,
    current: bool,
}

#[derive(Debug, Default)]
struct MemoryState {
    next_team_id: i64,
    teams: BTreeMap<i64, Team>,
    team_ids_by_name: HashMap<String, i64>,
    users: BTreeMap<String, User>,
    pull_requests: HashMap<String, PullRequestRecord>,
    assignments: Vec<AssignmentRow>,
}

impl MemoryState {
    fn full_user(&self, id: &str) -> StoreResult<FullUserInfo> {
        let user = self.users.get(id).ok_or(StoreError::NotFound)?;
        let team = self
            .teams
            .get(&user.team_id)
            .ok_or_else(|| StoreError::Backend(format!("user {} has no team", id)))?;

        Ok(FullUserInfo {
            user: user.clone(),
            team_name: team.name.clone(),
        })
    }

    fn members_of(&self, team_id: i64) -> Vec<User> {
        self.users
            .values()
            .filter(|u| u.team_id == team_id)
            .cloned()
            .collect()
    }

    fn current_reviewers(&self, pr_id: &str) -> Vec<String> {
        self.assignments
            .iter()
            .filter(|a| a.current && a.pull_request_id == pr_id)
            .map(|a| a.reviewer_id.clone())
            .collect()
    }

    fn project(&self, record: &PullRequestRecord) -> PullRequest {
        PullRequest {
            id: record.id.clone(),
            name: record.name.clone(),
            author_id: record.author_id.clone(),
            status: record.status,
            assigned_reviewers: self.current_reviewers(&record.id),
            created_at: record.created_at,
            merged_at: record.merged_at,
        }
    }
}

/// In-memory roster store
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                next_team_id: 1,
                ..Default::default()
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TeamStore for MemoryStore {
    async fn create_team_with_members(
        &self,
        name: &str,
        members: &[NewMember],
    ) -> StoreResult<(Team, Vec<User>)> {
        let mut state = self.state.write().await;

        if state.team_ids_by_name.contains_key(name) {
            return Err(StoreError::TeamExists(name.to_string()));
        }

        let mut seen = HashSet::new();
        for member in members {
            if state.users.contains_key(&member.id) || !seen.insert(member.id.as_str()) {
                return Err(StoreError::UserExists(member.id.clone()));
            }
        }

        let team = Team {
            id: state.next_team_id,
            name: name.to_string(),
        };
        state.next_team_id += 1;
        state.team_ids_by_name.insert(team.name.clone(), team.id);
        state.teams.insert(team.id, team.clone());

        for member in members {
            state.users.insert(
                member.id.clone(),
                User {
                    id: member.id.clone(),
                    username: member.username.clone(),
                    is_active: member.is_active,
                    team_id: team.id,
                },
            );
        }

        let users = state.members_of(team.id);
        Ok((team, users))
    }

    async fn team_by_name(&self, name: &str) -> StoreResult<(Team, Vec<User>)> {
        let state = self.state.read().await;
        let team_id = state
            .team_ids_by_name
            .get(name)
            .copied()
            .ok_or(StoreError::NotFound)?;
        let team = state.teams.get(&team_id).cloned().ok_or(StoreError::NotFound)?;

        Ok((team, state.members_of(team_id)))
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn user_by_id(&self, id: &str) -> StoreResult<FullUserInfo> {
        self.state.read().await.full_user(id)
    }

    async fn set_user_active(&self, id: &str, is_active: bool) -> StoreResult<FullUserInfo> {
        let mut state = self.state.write().await;
        let user = state.users.get_mut(id).ok_or(StoreError::NotFound)?;
        user.is_active = is_active;

        state.full_user(id)
    }

    async fn active_team_members(
        &self,
        team_id: i64,
        exclude_id: Option<&str>,
    ) -> StoreResult<Vec<User>> {
        let state = self.state.read().await;

        Ok(state
            .users
            .values()
            .filter(|u| u.team_id == team_id && u.is_active)
            .filter(|u| Some(u.id.as_str()) != exclude_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PullRequestStore for MemoryStore {
    async fn create_pull_request_with_reviewers(
        &self,
        pr: &NewPullRequest,
        reviewers: &[String],
    ) -> StoreResult<()> {
        let mut state = self.state.write().await;

        if state.pull_requests.contains_key(&pr.id) {
            return Err(StoreError::PullRequestExists(pr.id.clone()));
        }
        if !state.users.contains_key(&pr.author_id) {
            return Err(StoreError::NotFound);
        }
        for (i, reviewer) in reviewers.iter().enumerate() {
            if !state.users.contains_key(reviewer) {
                return Err(StoreError::NotFound);
            }
            if reviewers[..i].contains(reviewer) {
                return Err(StoreError::ReviewerTaken(reviewer.clone()));
            }
        }

        state.pull_requests.insert(
            pr.id.clone(),
            PullRequestRecord {
                id: pr.id.clone(),
                name: pr.name.clone(),
                author_id: pr.author_id.clone(),
                status: PrStatus::Open,
                created_at: Utc::now(),
                merged_at: None,
            },
        );
        for reviewer in reviewers {
            state.assignments.push(AssignmentRow {
                pull_request_id: pr.id.clone(),
                reviewer_id: reviewer.clone(),
                current: true,
            });
        }

        Ok(())
    }

    async fn pull_request_by_id(&self, id: &str) -> StoreResult<PullRequest> {
        let state = self.state.read().await;
        let record = state.pull_requests.get(id).ok_or(StoreError::NotFound)?;

        Ok(state.project(record))
    }

    async fn set_merged(&self, id: &str) -> StoreResult<MergeOutcome> {
        let mut state = self.state.write().await;

        match state.pull_requests.get_mut(id) {
            None => Ok(MergeOutcome {
                exists: false,
                updated: false,
            }),
            Some(record) if record.status == PrStatus::Merged => Ok(MergeOutcome {
                exists: true,
                updated: false,
            }),
            Some(record) => {
                record.status = PrStatus::Merged;
                record.merged_at = Some(Utc::now());
                Ok(MergeOutcome {
                    exists: true,
                    updated: true,
                })
            }
        }
    }

    async fn reassign_reviewer(
        &self,
        pr_id: &str,
        old_reviewer_id: &str,
        new_reviewer_id: &str,
    ) -> StoreResult<()> {
        let mut state = self.state.write().await;

        let record = state.pull_requests.get(pr_id).ok_or(StoreError::NotFound)?;
        if record.status == PrStatus::Merged {
            return Err(StoreError::PullRequestMerged);
        }
        if record.author_id == new_reviewer_id {
            return Err(StoreError::ReviewerTaken(new_reviewer_id.to_string()));
        }
        if !state.users.contains_key(new_reviewer_id) {
            return Err(StoreError::NotFound);
        }

        let current = state.current_reviewers(pr_id);
        if !current.iter().any(|r| r == old_reviewer_id) {
            return Err(StoreError::ReviewerNotAssigned);
        }
        if current.iter().any(|r| r == new_reviewer_id) {
            return Err(StoreError::ReviewerTaken(new_reviewer_id.to_string()));
        }

        for row in state.assignments.iter_mut() {
            if row.current && row.pull_request_id == pr_id && row.reviewer_id == old_reviewer_id {
                row.current = false;
            }
        }
        state.assignments.push(AssignmentRow {
            pull_request_id: pr_id.to_string(),
            reviewer_id: new_reviewer_id.to_string(),
            current: true,
        });

        Ok(())
    }

    async fn pull_requests_by_reviewer(
        &self,
        reviewer_id: &str,
    ) -> StoreResult<Vec<PullRequestSummary>> {
        let state = self.state.read().await;

        let mut summaries: Vec<PullRequestSummary> = state
            .assignments
            .iter()
            .filter(|a| a.current && a.reviewer_id == reviewer_id)
            .filter_map(|a| state.pull_requests.get(&a.pull_request_id))
            .map(|record| state.project(record).summary())
            .collect();
        summaries.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(summaries)
    }
}

#[async_trait]
impl StatsStore for MemoryStore {
    async fn review_counts(&self) -> StoreResult<Vec<ReviewerStats>> {
        let state = self.state.read().await;

        let mut counts: BTreeMap<&str, i64> = BTreeMap::new();
        for row in &state.assignments {
            *counts.entry(row.reviewer_id.as_str()).or_default() += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(user_id, review_count)| ReviewerStats {
                user_id: user_id.to_string(),
                review_count,
            })
            .collect())
    }
}
