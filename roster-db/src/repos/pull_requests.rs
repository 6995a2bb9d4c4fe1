//! Pull request repository
//!
//! Reviewer assignments live in `pull_request_reviewers`. A row is current
//! while `unassigned_at` is NULL; reassigning closes the old row and inserts a
//! new one, so the table keeps the full assignment history.

use chrono::Utc;
use roster_core::store::MergeOutcome;
use roster_core::{NewPullRequest, PullRequest, PullRequestSummary, StoreError};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::{is_foreign_key_violation, is_unique_violation, Result};
use crate::rows::{PullRequestRow, PullRequestSummaryRow};
use crate::unit_of_work::UnitOfWork;

pub struct PullRequestRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PullRequestRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an OPEN pull request and its initial reviewers together
    pub async fn create(&self, pr: &NewPullRequest, reviewers: &[String]) -> Result<()> {
        let now = Utc::now();
        let mut uow = UnitOfWork::begin(self.pool).await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO pull_requests (id, name, author_id, status, created_at)
            VALUES (?, ?, ?, 'OPEN', ?)
            "#,
        )
        .bind(&pr.id)
        .bind(&pr.name)
        .bind(&pr.author_id)
        .bind(now)
        .execute(uow.conn())
        .await;

        match inserted {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                return Err(StoreError::PullRequestExists(pr.id.clone()).into())
            }
            Err(e) if is_foreign_key_violation(&e) => return Err(StoreError::NotFound.into()),
            Err(e) => return Err(e.into()),
        }

        for reviewer_id in reviewers {
            insert_reviewer(uow.conn(), &pr.id, reviewer_id).await?;
        }

        uow.commit().await?;
        debug!(pr_id = %pr.id, reviewers = reviewers.len(), "Pull request stored");
        Ok(())
    }

    /// Get a pull request with its current reviewers in assignment order
    pub async fn find_by_id(&self, id: &str) -> Result<PullRequest> {
        // Both reads come from one snapshot
        let mut uow = UnitOfWork::begin(self.pool).await?;

        let row = sqlx::query_as::<_, PullRequestRow>(
            r#"
            SELECT id, name, author_id, status, created_at, merged_at
            FROM pull_requests
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(uow.conn())
        .await?
        .ok_or(StoreError::NotFound)?;

        let reviewers: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT reviewer_id
            FROM pull_request_reviewers
            WHERE pull_request_id = ? AND unassigned_at IS NULL
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(uow.conn())
        .await?;

        uow.commit().await?;
        row.into_pull_request(reviewers)
    }

    /// Conditional OPEN -> MERGED transition
    pub async fn set_merged(&self, id: &str) -> Result<MergeOutcome> {
        let result = sqlx::query(
            "UPDATE pull_requests SET status = 'MERGED', merged_at = ? WHERE id = ? AND status = 'OPEN'",
        )
        .bind(Utc::now())
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(MergeOutcome {
                exists: true,
                updated: true,
            });
        }

        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pull_requests WHERE id = ?)")
            .bind(id)
            .fetch_one(self.pool)
            .await?;

        Ok(MergeOutcome {
            exists,
            updated: false,
        })
    }

    /// Replace one current reviewer with another in a single transaction
    pub async fn reassign(&self, pr_id: &str, old_reviewer_id: &str, new_reviewer_id: &str) -> Result<()> {
        let mut uow = UnitOfWork::begin(self.pool).await?;

        // Closing the old row first takes the write lock; the status guard
        // keeps a concurrent merge from being overtaken.
        let closed = sqlx::query(
            r#"
            UPDATE pull_request_reviewers
            SET unassigned_at = ?
            WHERE pull_request_id = ?
              AND reviewer_id = ?
              AND unassigned_at IS NULL
              AND EXISTS (SELECT 1 FROM pull_requests WHERE id = ? AND status = 'OPEN')
            "#,
        )
        .bind(Utc::now())
        .bind(pr_id)
        .bind(old_reviewer_id)
        .bind(pr_id)
        .execute(uow.conn())
        .await?;

        let status: Option<(String, String)> =
            sqlx::query_as("SELECT status, author_id FROM pull_requests WHERE id = ?")
                .bind(pr_id)
                .fetch_optional(uow.conn())
                .await?;

        let Some((status, author_id)) = status else {
            return Err(StoreError::NotFound.into());
        };
        if closed.rows_affected() == 0 {
            return Err(if status == "MERGED" {
                StoreError::PullRequestMerged
            } else {
                StoreError::ReviewerNotAssigned
            }
            .into());
        }
        if new_reviewer_id == author_id || new_reviewer_id == old_reviewer_id {
            return Err(StoreError::ReviewerTaken(new_reviewer_id.to_string()).into());
        }

        insert_reviewer(uow.conn(), pr_id, new_reviewer_id).await?;
        uow.commit().await?;

        debug!(pr_id, old = old_reviewer_id, new = new_reviewer_id, "Reviewer swapped");
        Ok(())
    }

    /// Pull requests with a current assignment for the reviewer, ordered by id
    pub async fn by_reviewer(&self, reviewer_id: &str) -> Result<Vec<PullRequestSummary>> {
        let rows = sqlx::query_as::<_, PullRequestSummaryRow>(
            r#"
            SELECT p.id, p.name, p.author_id, p.status
            FROM pull_request_reviewers r
            JOIN pull_requests p ON p.id = r.pull_request_id
            WHERE r.reviewer_id = ? AND r.unassigned_at IS NULL
            ORDER BY p.id
            "#,
        )
        .bind(reviewer_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(PullRequestSummary::try_from).collect()
    }
}

async fn insert_reviewer(conn: &mut SqliteConnection, pr_id: &str, reviewer_id: &str) -> Result<()> {
    let inserted = sqlx::query(
        r#"
        INSERT INTO pull_request_reviewers (pull_request_id, reviewer_id, assigned_at)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(pr_id)
    .bind(reviewer_id)
    .bind(Utc::now())
    .execute(conn)
    .await;

    match inserted {
        Ok(_) => Ok(()),
        Err(e) if is_unique_violation(&e) => {
            Err(StoreError::ReviewerTaken(reviewer_id.to_string()).into())
        }
        Err(e) if is_foreign_key_violation(&e) => Err(StoreError::NotFound.into()),
        Err(e) => Err(e.into()),
    }
}
