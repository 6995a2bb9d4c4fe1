//! Review statistics queries

use roster_core::ReviewerStats;
use sqlx::SqlitePool;

use crate::error::Result;

pub struct StatsRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StatsRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Assignments per reviewer, counting reassigned-away rows too
    pub async fn review_counts(&self) -> Result<Vec<ReviewerStats>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT reviewer_id, COUNT(*)
            FROM pull_request_reviewers
            GROUP BY reviewer_id
            ORDER BY reviewer_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(user_id, review_count)| ReviewerStats {
                user_id,
                review_count,
            })
            .collect())
    }
}
