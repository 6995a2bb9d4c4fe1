//! Team repository

use roster_core::{NewMember, StoreError, Team, User};
use sqlx::SqlitePool;

use crate::error::{is_unique_violation, Result};
use crate::rows::UserRow;
use crate::unit_of_work::UnitOfWork;

/// Repository for teams and their initial member batch
pub struct TeamRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a team and all its members in one transaction
    pub async fn create_with_members(
        &self,
        name: &str,
        members: &[NewMember],
    ) -> Result<(Team, Vec<User>)> {
        let mut uow = UnitOfWork::begin(self.pool).await?;

        let team_id = match sqlx::query("INSERT INTO teams (name) VALUES (?)")
            .bind(name)
            .execute(uow.conn())
            .await
        {
            Ok(result) => result.last_insert_rowid(),
            Err(e) if is_unique_violation(&e) => {
                return Err(StoreError::TeamExists(name.to_string()).into())
            }
            Err(e) => return Err(e.into()),
        };

        for member in members {
            let inserted = sqlx::query(
                "INSERT INTO users (id, username, is_active, team_id) VALUES (?, ?, ?, ?)",
            )
            .bind(&member.id)
            .bind(&member.username)
            .bind(member.is_active)
            .bind(team_id)
            .execute(uow.conn())
            .await;

            match inserted {
                Ok(_) => {}
                Err(e) if is_unique_violation(&e) => {
                    return Err(StoreError::UserExists(member.id.clone()).into())
                }
                Err(e) => return Err(e.into()),
            }
        }

        uow.commit().await?;

        let mut users: Vec<User> = members
            .iter()
            .map(|m| User {
                id: m.id.clone(),
                username: m.username.clone(),
                is_active: m.is_active,
                team_id,
            })
            .collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));

        Ok((
            Team {
                id: team_id,
                name: name.to_string(),
            },
            users,
        ))
    }

    /// Get a team and its members (ordered by user id)
    pub async fn get_by_name(&self, name: &str) -> Result<(Team, Vec<User>)> {
        let (id, name) = sqlx::query_as::<_, (i64, String)>("SELECT id, name FROM teams WHERE name = ?")
            .bind(name)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StoreError::NotFound)?;

        let members = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, is_active, team_id FROM users WHERE team_id = ? ORDER BY id",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok((
            Team { id, name },
            members.into_iter().map(User::from).collect(),
        ))
    }
}
