//! Reviewer assignment engine
//!
//! Picks reviewers when a pull request is opened, merges pull requests
//! idempotently and replaces a reviewer on request. The engine decides who
//! gets picked; the store decides which concurrent write wins. Every store
//! failure is mapped explicitly onto the roster error taxonomy here.

mod picker;

pub use picker::ReviewerPicker;

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Entity, Error, Result};
use crate::models::{NewPullRequest, PullRequest};
use crate::store::{Store, StoreError};

/// Upper bound on reviewers picked for a new pull request
pub const REVIEWERS_PER_PULL_REQUEST: usize = 2;

/// Result of a successful reviewer reassignment
#[derive(Debug, Clone, Serialize)]
pub struct Reassignment {
    pub pull_request: PullRequest,
    /// The reviewer who took over the slot
    pub replaced_by: String,
}

fn unexpected(err: StoreError) -> Error {
    Error::Store(err.to_string())
}

/// Reviewer assignment engine over a shared store
pub struct AssignmentEngine<S: ?Sized> {
    store: Arc<S>,
    picker: ReviewerPicker,
}

impl<S: Store + ?Sized> AssignmentEngine<S> {
    pub fn new(store: Arc<S>, picker: ReviewerPicker) -> Self {
        Self { store, picker }
    }

    /// Fetch a pull request by id
    pub async fn pull_request(&self, id: &str) -> Result<PullRequest> {
        self.store.pull_request_by_id(id).await.map_err(|e| match e {
            StoreError::NotFound => Error::not_found(Entity::PullRequest, id),
            other => unexpected(other),
        })
    }

    /// Open a pull request and assign up to two active teammates of the author
    ///
    /// Zero or one reviewer is not an error; it just means the author's team
    /// has fewer active members.
    pub async fn create(&self, pr: NewPullRequest) -> Result<PullRequest> {
        let author = self
            .store
            .user_by_id(&pr.author_id)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => Error::not_found(Entity::User, &pr.author_id),
                other => unexpected(other),
            })?;

        let candidates = self
            .store
            .active_team_members(author.user.team_id, Some(&author.user.id))
            .await
            .map_err(unexpected)?;
        debug!(
            pr_id = %pr.id,
            team = %author.team_name,
            candidates = candidates.len(),
            "Selecting reviewers"
        );

        let reviewers: Vec<String> = self
            .picker
            .pick(candidates, REVIEWERS_PER_PULL_REQUEST)
            .into_iter()
            .map(|u| u.id)
            .collect();

        self.store
            .create_pull_request_with_reviewers(&pr, &reviewers)
            .await
            .map_err(|e| match e {
                StoreError::PullRequestExists(id) => Error::already_exists(Entity::PullRequest, id),
                StoreError::NotFound => Error::not_found(Entity::User, &pr.author_id),
                other => unexpected(other),
            })?;
        info!(pr_id = %pr.id, author = %pr.author_id, reviewers = ?reviewers, "Pull request created");

        self.pull_request(&pr.id).await
    }

    /// Merge a pull request; merging an already merged one is a no-op
    pub async fn merge(&self, id: &str) -> Result<PullRequest> {
        let current = self.pull_request(id).await?;
        if current.is_merged() {
            debug!(pr_id = %id, "Pull request already merged");
            return Ok(current);
        }

        let outcome = self.store.set_merged(id).await.map_err(unexpected)?;
        if !outcome.exists {
            return Err(Error::not_found(Entity::PullRequest, id));
        }
        if outcome.updated {
            info!(pr_id = %id, "Pull request merged");
        } else {
            debug!(pr_id = %id, "Pull request merged by a concurrent request");
        }

        self.pull_request(id).await
    }

    /// Replace `old_reviewer_id` with a random eligible teammate
    ///
    /// Eligible means active, in the old reviewer's team, and neither the
    /// author nor any current reviewer (including the one being replaced).
    pub async fn reassign(&self, pr_id: &str, old_reviewer_id: &str) -> Result<Reassignment> {
        let pr = self.pull_request(pr_id).await?;

        if pr.is_merged() {
            return Err(Error::PrMerged(pr_id.to_string()));
        }
        if !pr.is_reviewer(old_reviewer_id) {
            return Err(Error::NotAssigned {
                pr_id: pr_id.to_string(),
                reviewer_id: old_reviewer_id.to_string(),
            });
        }

        let old_reviewer = self
            .store
            .user_by_id(old_reviewer_id)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => Error::not_found(Entity::User, old_reviewer_id),
                other => unexpected(other),
            })?;

        let candidates: Vec<String> = self
            .store
            .active_team_members(old_reviewer.user.team_id, None)
            .await
            .map_err(unexpected)?
            .into_iter()
            .filter(|u| u.id != pr.author_id && !pr.is_reviewer(&u.id))
            .map(|u| u.id)
            .collect();
        debug!(pr_id = %pr_id, candidates = candidates.len(), "Selecting replacement reviewer");

        let new_reviewer_id = self
            .picker
            .pick_one(candidates)
            .ok_or_else(|| Error::NoCandidates(pr_id.to_string()))?;

        self.store
            .reassign_reviewer(pr_id, old_reviewer_id, &new_reviewer_id)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => Error::not_found(Entity::PullRequest, pr_id),
                StoreError::PullRequestMerged => Error::PrMerged(pr_id.to_string()),
                StoreError::ReviewerNotAssigned => Error::NotAssigned {
                    pr_id: pr_id.to_string(),
                    reviewer_id: old_reviewer_id.to_string(),
                },
                StoreError::ReviewerTaken(id) => {
                    warn!(pr_id = %pr_id, reviewer = %id, "Replacement was assigned concurrently");
                    Error::Conflict {
                        pr_id: pr_id.to_string(),
                        reason: format!("reviewer {} was assigned concurrently", id),
                    }
                }
                other => unexpected(other),
            })?;
        info!(
            pr_id = %pr_id,
            old_reviewer = %old_reviewer_id,
            new_reviewer = %new_reviewer_id,
            "Reviewer reassigned"
        );

        Ok(Reassignment {
            pull_request: self.pull_request(pr_id).await?,
            replaced_by: new_reviewer_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewMember, PrStatus};
    use crate::store::{MemoryStore, StatsStore, TeamStore, UserStore};
    use std::collections::HashSet;

    async fn engine_with_team(members: &[NewMember], seed: u64) -> AssignmentEngine<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        store
            .create_team_with_members("T", members)
            .await
            .unwrap();
        AssignmentEngine::new(store, ReviewerPicker::with_seed(seed))
    }

    fn abcd() -> Vec<NewMember> {
        vec![
            NewMember::new("A", "Author"),
            NewMember::new("B", "Bea"),
            NewMember::new("C", "Cal"),
            NewMember::new("D", "Dee"),
        ]
    }

    #[tokio::test]
    async fn test_create_assigns_min_two_active_teammates() {
        for (teammates, expected) in [(0usize, 0usize), (1, 1), (2, 2), (5, 2)] {
            let mut members = vec![NewMember::new("author", "Author")];
            for i in 0..teammates {
                members.push(NewMember::new(format!("m{}", i), format!("Member {}", i)));
            }
            // Inactive teammates never count
            members.push(NewMember::new("idle", "Idle").with_active(false));

            let engine = engine_with_team(&members, teammates as u64).await;
            let pr = engine
                .create(NewPullRequest::new("pr-1", "Feature", "author"))
                .await
                .unwrap();

            assert_eq!(pr.assigned_reviewers.len(), expected);
            assert!(!pr.is_reviewer("author"));
            assert!(!pr.is_reviewer("idle"));
            let unique: HashSet<_> = pr.assigned_reviewers.iter().collect();
            assert_eq!(unique.len(), pr.assigned_reviewers.len());
            assert_eq!(pr.status, PrStatus::Open);
            assert!(pr.merged_at.is_none());
        }
    }

    #[tokio::test]
    async fn test_create_unknown_author() {
        let engine = engine_with_team(&abcd(), 1).await;

        let err = engine
            .create(NewPullRequest::new("pr-1", "Feature", "ghost"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::NotFound {
                entity: Entity::User,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_create_duplicate_id_keeps_original_reviewers() {
        let engine = engine_with_team(&abcd(), 3).await;

        let first = engine
            .create(NewPullRequest::new("pr-1", "Feature", "A"))
            .await
            .unwrap();
        let err = engine
            .create(NewPullRequest::new("pr-1", "Other", "B"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::AlreadyExists {
                entity: Entity::PullRequest,
                ..
            }
        ));

        let stored = engine.pull_request("pr-1").await.unwrap();
        assert_eq!(stored.assigned_reviewers, first.assigned_reviewers);
        assert_eq!(stored.author_id, "A");

        let counts = engine.store.review_counts().await.unwrap();
        let total: i64 = counts.iter().map(|s| s.review_count).sum();
        assert_eq!(total, 2);
    }

    #[tokio::test]
    async fn test_team_with_only_author_gets_no_reviewers() {
        let engine = engine_with_team(&[NewMember::new("A", "Solo")], 1).await;

        let pr = engine
            .create(NewPullRequest::new("pr-1", "Feature", "A"))
            .await
            .unwrap();
        assert!(pr.assigned_reviewers.is_empty());
    }

    #[tokio::test]
    async fn test_merge_is_idempotent() {
        let engine = engine_with_team(&abcd(), 1).await;
        engine
            .create(NewPullRequest::new("pr-1", "Feature", "A"))
            .await
            .unwrap();

        let first = engine.merge("pr-1").await.unwrap();
        assert_eq!(first.status, PrStatus::Merged);
        let merged_at = first.merged_at.expect("merged_at set");

        let second = engine.merge("pr-1").await.unwrap();
        assert_eq!(second.status, PrStatus::Merged);
        assert_eq!(second.merged_at, Some(merged_at));
        assert_eq!(second.assigned_reviewers, first.assigned_reviewers);
    }

    #[tokio::test]
    async fn test_merge_unknown_pull_request() {
        let engine = engine_with_team(&abcd(), 1).await;

        let err = engine.merge("pr-404").await.unwrap_err();
        assert!(matches!(
            err,
            Error::NotFound {
                entity: Entity::PullRequest,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_concurrent_merges_both_succeed() {
        let engine = Arc::new(engine_with_team(&abcd(), 1).await);
        engine
            .create(NewPullRequest::new("pr-1", "Feature", "A"))
            .await
            .unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = engine.clone();
                tokio::spawn(async move { engine.merge("pr-1").await })
            })
            .collect();

        let mut merged_at = HashSet::new();
        for handle in handles {
            let pr = handle.await.unwrap().unwrap();
            assert_eq!(pr.status, PrStatus::Merged);
            merged_at.insert(pr.merged_at);
        }
        assert_eq!(merged_at.len(), 1);
    }

    #[tokio::test]
    async fn test_reassign_merged_fails_regardless_of_reviewer() {
        let engine = engine_with_team(&abcd(), 1).await;
        let pr = engine
            .create(NewPullRequest::new("pr-1", "Feature", "A"))
            .await
            .unwrap();
        engine.merge("pr-1").await.unwrap();

        let assigned = pr.assigned_reviewers[0].clone();
        for old in [assigned.as_str(), "A", "nobody"] {
            let err = engine.reassign("pr-1", old).await.unwrap_err();
            assert!(matches!(err, Error::PrMerged(_)), "got {:?}", err);
        }
    }

    #[tokio::test]
    async fn test_reassign_not_assigned_teammate() {
        let engine = engine_with_team(&abcd(), 1).await;
        let pr = engine
            .create(NewPullRequest::new("pr-1", "Feature", "A"))
            .await
            .unwrap();

        let outsider = ["B", "C", "D"]
            .into_iter()
            .find(|id| !pr.is_reviewer(id))
            .unwrap();
        let err = engine.reassign("pr-1", outsider).await.unwrap_err();
        assert!(matches!(err, Error::NotAssigned { .. }));
    }

    #[tokio::test]
    async fn test_reassign_unknown_pull_request() {
        let engine = engine_with_team(&abcd(), 1).await;
        let err = engine.reassign("pr-404", "B").await.unwrap_err();
        assert!(matches!(
            err,
            Error::NotFound {
                entity: Entity::PullRequest,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_reassign_scenario_picks_remaining_teammate() {
        for seed in 0..20 {
            let engine = engine_with_team(&abcd(), seed).await;
            let pr = engine
                .create(NewPullRequest::new("pr-1", "Feature", "A"))
                .await
                .unwrap();
            assert_eq!(pr.assigned_reviewers.len(), 2);

            let third = ["B", "C", "D"]
                .into_iter()
                .find(|id| !pr.is_reviewer(id))
                .unwrap();
            let old = pr.assigned_reviewers[0].clone();
            let kept = pr.assigned_reviewers[1].clone();

            let result = engine.reassign("pr-1", &old).await.unwrap();
            assert_eq!(result.replaced_by, third);
            assert!(!result.pull_request.is_reviewer(&old));
            assert!(result.pull_request.is_reviewer(&kept));
            assert!(result.pull_request.is_reviewer(third));
            assert_eq!(result.pull_request.assigned_reviewers.len(), 2);

            let err = engine.reassign("pr-1", &old).await.unwrap_err();
            assert!(matches!(err, Error::NotAssigned { .. }));
        }
    }

    #[tokio::test]
    async fn test_reassign_without_candidates_leaves_reviewers() {
        let engine = engine_with_team(&abcd()[..3], 9).await;
        let pr = engine
            .create(NewPullRequest::new("pr-1", "Feature", "A"))
            .await
            .unwrap();
        assert_eq!(pr.assigned_reviewers.len(), 2);

        let err = engine
            .reassign("pr-1", &pr.assigned_reviewers[0])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NoCandidates(_)));

        let after = engine.pull_request("pr-1").await.unwrap();
        assert_eq!(after.assigned_reviewers, pr.assigned_reviewers);
    }

    #[tokio::test]
    async fn test_reassign_skips_inactive_teammates() {
        let engine = engine_with_team(&abcd(), 4).await;
        let pr = engine
            .create(NewPullRequest::new("pr-1", "Feature", "A"))
            .await
            .unwrap();
        let third = ["B", "C", "D"]
            .into_iter()
            .find(|id| !pr.is_reviewer(id))
            .unwrap();
        engine.store.set_user_active(third, false).await.unwrap();

        let err = engine
            .reassign("pr-1", &pr.assigned_reviewers[0])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NoCandidates(_)));
    }

    #[tokio::test]
    async fn test_reassign_replacement_invariants() {
        let mut members = abcd();
        members.push(NewMember::new("E", "Eve"));
        members.push(NewMember::new("F", "Fay"));

        for seed in 0..20 {
            let engine = engine_with_team(&members, seed).await;
            let pr = engine
                .create(NewPullRequest::new("pr-1", "Feature", "A"))
                .await
                .unwrap();
            let old = pr.assigned_reviewers[1].clone();
            let other = pr.assigned_reviewers[0].clone();

            let result = engine.reassign("pr-1", &old).await.unwrap();
            let reviewers = &result.pull_request.assigned_reviewers;

            assert_eq!(reviewers.len(), 2);
            assert!(!reviewers.contains(&old));
            assert!(reviewers.contains(&result.replaced_by));
            assert_ne!(result.replaced_by, "A");
            assert_ne!(result.replaced_by, other);
            assert_ne!(result.replaced_by, old);
        }
    }

    #[tokio::test]
    async fn test_concurrent_reassign_of_different_reviewers() {
        let mut members = abcd();
        for id in ["E", "F", "G", "H"] {
            members.push(NewMember::new(id, id));
        }
        let engine = Arc::new(engine_with_team(&members, 17).await);
        let pr = engine
            .create(NewPullRequest::new("pr-1", "Feature", "A"))
            .await
            .unwrap();

        let handles: Vec<_> = pr
            .assigned_reviewers
            .iter()
            .cloned()
            .map(|old| {
                let engine = engine.clone();
                tokio::spawn(async move { engine.reassign("pr-1", &old).await })
            })
            .collect();

        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) | Err(Error::Conflict { .. }) => {}
                Err(other) => panic!("unexpected error: {:?}", other),
            }
        }

        let after = engine.pull_request("pr-1").await.unwrap();
        assert_eq!(after.assigned_reviewers.len(), 2);
        let unique: HashSet<_> = after.assigned_reviewers.iter().collect();
        assert_eq!(unique.len(), 2);
        assert!(!after.is_reviewer("A"));
    }

    /// Store that lets another writer slip in between the engine's read and
    /// its reviewer swap
    mod interleaved {
        use super::*;
        use crate::models::{FullUserInfo, PullRequestSummary, ReviewerStats, Team, User};
        use crate::store::{MergeOutcome, PullRequestStore, StoreResult};
        use async_trait::async_trait;
        use std::sync::Mutex;

        #[derive(Debug, Clone, Copy)]
        enum Interleave {
            Merge,
            MoveOldReviewer,
            TakeReplacement,
        }

        struct InterleavingStore {
            inner: MemoryStore,
            next: Mutex<Option<Interleave>>,
        }

        impl InterleavingStore {
            fn arm(&self, step: Interleave) {
                *self.next.lock().unwrap() = Some(step);
            }
        }

        #[async_trait]
        impl TeamStore for InterleavingStore {
            async fn create_team_with_members(
                &self,
                name: &str,
                members: &[NewMember],
            ) -> StoreResult<(Team, Vec<User>)> {
                self.inner.create_team_with_members(name, members).await
            }

            async fn team_by_name(&self, name: &str) -> StoreResult<(Team, Vec<User>)> {
                self.inner.team_by_name(name).await
            }
        }

        #[async_trait]
        impl UserStore for InterleavingStore {
            async fn user_by_id(&self, id: &str) -> StoreResult<FullUserInfo> {
                self.inner.user_by_id(id).await
            }

            async fn set_user_active(&self, id: &str, is_active: bool) -> StoreResult<FullUserInfo> {
                self.inner.set_user_active(id, is_active).await
            }

            async fn active_team_members(
                &self,
                team_id: i64,
                exclude_id: Option<&str>,
            ) -> StoreResult<Vec<User>> {
                self.inner.active_team_members(team_id, exclude_id).await
            }
        }

        #[async_trait]
        impl PullRequestStore for InterleavingStore {
            async fn create_pull_request_with_reviewers(
                &self,
                pr: &NewPullRequest,
                reviewers: &[String],
            ) -> StoreResult<()> {
                self.inner.create_pull_request_with_reviewers(pr, reviewers).await
            }

            async fn pull_request_by_id(&self, id: &str) -> StoreResult<PullRequest> {
                self.inner.pull_request_by_id(id).await
            }

            async fn set_merged(&self, id: &str) -> StoreResult<MergeOutcome> {
                self.inner.set_merged(id).await
            }

            async fn reassign_reviewer(
                &self,
                pr_id: &str,
                old_reviewer_id: &str,
                new_reviewer_id: &str,
            ) -> StoreResult<()> {
                let step = self.next.lock().unwrap().take();
                match step {
                    Some(Interleave::Merge) => {
                        self.inner.set_merged(pr_id).await?;
                    }
                    Some(Interleave::MoveOldReviewer) => {
                        self.inner
                            .reassign_reviewer(pr_id, old_reviewer_id, new_reviewer_id)
                            .await?;
                    }
                    Some(Interleave::TakeReplacement) => {
                        let pr = self.inner.pull_request_by_id(pr_id).await?;
                        let other = pr
                            .assigned_reviewers
                            .iter()
                            .find(|r| *r != old_reviewer_id)
                            .cloned()
                            .ok_or(StoreError::NotFound)?;
                        self.inner
                            .reassign_reviewer(pr_id, &other, new_reviewer_id)
                            .await?;
                    }
                    None => {}
                }

                self.inner
                    .reassign_reviewer(pr_id, old_reviewer_id, new_reviewer_id)
                    .await
            }

            async fn pull_requests_by_reviewer(
                &self,
                reviewer_id: &str,
            ) -> StoreResult<Vec<PullRequestSummary>> {
                self.inner.pull_requests_by_reviewer(reviewer_id).await
            }
        }

        #[async_trait]
        impl StatsStore for InterleavingStore {
            async fn review_counts(&self) -> StoreResult<Vec<ReviewerStats>> {
                self.inner.review_counts().await
            }
        }

        /// Team A..E, pull request by A with two reviewers
        async fn setup(step: Interleave) -> (AssignmentEngine<InterleavingStore>, PullRequest) {
            let store = Arc::new(InterleavingStore {
                inner: MemoryStore::new(),
                next: Mutex::new(None),
            });
            let mut members = abcd();
            members.push(NewMember::new("E", "Eve"));
            store.create_team_with_members("T", &members).await.unwrap();

            let engine = AssignmentEngine::new(store.clone(), ReviewerPicker::with_seed(23));
            let pr = engine
                .create(NewPullRequest::new("pr-1", "Feature", "A"))
                .await
                .unwrap();
            assert_eq!(pr.assigned_reviewers.len(), 2);

            store.arm(step);
            (engine, pr)
        }

        #[tokio::test]
        async fn test_merge_before_swap_is_pr_merged() {
            let (engine, pr) = setup(Interleave::Merge).await;
            let old = pr.assigned_reviewers[0].clone();

            let err = engine.reassign("pr-1", &old).await.unwrap_err();
            assert!(matches!(err, Error::PrMerged(ref id) if id == "pr-1"));

            let after = engine.pull_request("pr-1").await.unwrap();
            assert_eq!(after.status, PrStatus::Merged);
            assert_eq!(after.assigned_reviewers, pr.assigned_reviewers);
        }

        #[tokio::test]
        async fn test_old_reviewer_gone_before_swap_is_not_assigned() {
            let (engine, pr) = setup(Interleave::MoveOldReviewer).await;
            let old = pr.assigned_reviewers[0].clone();
            let kept = pr.assigned_reviewers[1].clone();

            let err = engine.reassign("pr-1", &old).await.unwrap_err();
            assert!(matches!(
                err,
                Error::NotAssigned { ref pr_id, ref reviewer_id } if pr_id == "pr-1" && *reviewer_id == old
            ));

            // Only the competing swap landed
            let after = engine.pull_request("pr-1").await.unwrap();
            assert_eq!(after.assigned_reviewers.len(), 2);
            assert_eq!(after.assigned_reviewers[0], kept);
            assert!(!after.is_reviewer(&old));
            let counts = engine.store.review_counts().await.unwrap();
            assert_eq!(counts.iter().map(|s| s.review_count).sum::<i64>(), 3);
        }

        #[tokio::test]
        async fn test_replacement_taken_before_swap_is_conflict() {
            let (engine, pr) = setup(Interleave::TakeReplacement).await;
            let old = pr.assigned_reviewers[0].clone();
            let other = pr.assigned_reviewers[1].clone();

            let err = engine.reassign("pr-1", &old).await.unwrap_err();
            assert!(matches!(err, Error::Conflict { ref pr_id, .. } if pr_id == "pr-1"));
            assert_eq!(err.code(), "CONFLICT");

            // The old reviewer keeps the slot; the competing swap replaced the other one
            let after = engine.pull_request("pr-1").await.unwrap();
            assert_eq!(after.assigned_reviewers.len(), 2);
            assert_eq!(after.assigned_reviewers[0], old);
            assert!(!after.is_reviewer(&other));
            assert!(!after.is_reviewer("A"));
        }

        #[tokio::test]
        async fn test_unarmed_store_swaps_normally() {
            let store = InterleavingStore {
                inner: MemoryStore::new(),
                next: Mutex::new(None),
            };
            store
                .create_team_with_members("T", &abcd())
                .await
                .unwrap();
            let engine = AssignmentEngine::new(Arc::new(store), ReviewerPicker::with_seed(3));
            let pr = engine
                .create(NewPullRequest::new("pr-1", "Feature", "A"))
                .await
                .unwrap();

            let result = engine
                .reassign("pr-1", &pr.assigned_reviewers[0])
                .await
                .unwrap();
            assert!(result.pull_request.is_reviewer(&result.replaced_by));
        }
    }
}
