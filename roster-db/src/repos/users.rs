//! User repository

use roster_core::{FullUserInfo, StoreError, User};
use sqlx::SqlitePool;

use crate::error::Result;
use crate::rows::{FullUserRow, UserRow};
use crate::unit_of_work::UnitOfWork;

const SELECT_FULL_USER: &str = "SELECT u.id, u.username, u.is_active, u.team_id, t.name AS team_name \
     FROM users u JOIN teams t ON t.id = u.team_id WHERE u.id = ?";

pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a user together with their team's name
    pub async fn find_by_id(&self, id: &str) -> Result<FullUserInfo> {
        let row = sqlx::query_as::<_, FullUserRow>(SELECT_FULL_USER)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StoreError::NotFound)?;
        Ok(row.into())
    }

    /// Update the active flag and read the user back in the same transaction
    pub async fn set_active(&self, id: &str, is_active: bool) -> Result<FullUserInfo> {
        let mut uow = UnitOfWork::begin(self.pool).await?;

        let result = sqlx::query("UPDATE users SET is_active = ? WHERE id = ?")
            .bind(is_active)
            .bind(id)
            .execute(uow.conn())
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound.into());
        }

        let row = sqlx::query_as::<_, FullUserRow>(SELECT_FULL_USER)
            .bind(id)
            .fetch_one(uow.conn())
            .await?;
        uow.commit().await?;

        Ok(row.into())
    }

    /// Active members of a team ordered by id, optionally leaving one out
    pub async fn active_members(&self, team_id: i64, exclude_id: Option<&str>) -> Result<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, is_active, team_id
            FROM users
            WHERE team_id = ? AND is_active = 1 AND (? IS NULL OR id <> ?)
            ORDER BY id
            "#,
        )
        .bind(team_id)
        .bind(exclude_id)
        .bind(exclude_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
