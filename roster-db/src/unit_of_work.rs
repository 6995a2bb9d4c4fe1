//! Explicit transaction boundary for multi-statement writes
//!
//! A `UnitOfWork` wraps one SQLite transaction. Statements run through
//! [`UnitOfWork::conn`]; nothing is visible to other connections until
//! [`UnitOfWork::commit`]. Dropping it without committing rolls back.
//!
//! SQLite starts transactions deferred, so write units should issue a write
//! as their first statement to take the write lock before reading.

use sqlx::sqlite::{SqliteConnection, SqlitePool};
use sqlx::{Sqlite, Transaction};

use crate::error::Result;

/// One all-or-nothing database transaction
pub struct UnitOfWork {
    tx: Transaction<'static, Sqlite>,
}

impl UnitOfWork {
    /// Begin a transaction on a pooled connection
    pub async fn begin(pool: &SqlitePool) -> Result<Self> {
        Ok(Self {
            tx: pool.begin().await?,
        })
    }

    /// Connection to run statements on inside the transaction
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }

    /// Make every statement of this unit visible at once
    pub async fn commit(self) -> Result<()> {
        self.tx.commit().await?;
        Ok(())
    }
}
