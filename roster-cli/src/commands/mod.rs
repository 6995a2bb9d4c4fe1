//! CLI command implementations

pub mod pr;
pub mod stats;
pub mod team;
pub mod user;

pub use pr::PrArgs;
pub use team::TeamArgs;
pub use user::UserArgs;

use roster_core::{PullRequest, PullRequestSummary, RosterService, User};
use roster_db::SqliteStore;
use serde::Serialize;

/// The service every data command runs against
pub type Service = RosterService<SqliteStore>;

/// Chooses between human-readable and JSON output
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Print a value as pretty JSON on stdout
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Report a domain error with its stable code
    pub fn error(&self, err: &roster_core::Error) -> anyhow::Result<()> {
        if self.json {
            let body = serde_json::json!({
                "error": { "code": err.code(), "message": err.to_string() }
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        } else {
            eprintln!("Error [{}]: {}", err.code(), err);
        }
        Ok(())
    }
}

pub(crate) fn print_members(members: &[User]) {
    if members.is_empty() {
        println!("  (no members)");
        return;
    }
    for user in members {
        let state = if user.is_active { "active" } else { "inactive" };
        println!("  {:<12} {:<20} {}", user.id, user.username, state);
    }
}

pub(crate) fn print_pull_request(pr: &PullRequest) {
    println!("Pull request {}", pr.id);
    println!("  Name:      {}", pr.name);
    println!("  Author:    {}", pr.author_id);
    println!("  Status:    {}", pr.status);
    if pr.assigned_reviewers.is_empty() {
        println!("  Reviewers: (none)");
    } else {
        println!("  Reviewers: {}", pr.assigned_reviewers.join(", "));
    }
    println!("  Created:   {}", pr.created_at.format("%Y-%m-%d %H:%M:%S UTC"));
    if let Some(merged_at) = pr.merged_at {
        println!("  Merged:    {}", merged_at.format("%Y-%m-%d %H:%M:%S UTC"));
    }
}

pub(crate) fn print_summaries(summaries: &[PullRequestSummary]) {
    for pr in summaries {
        println!("  {:<12} {:<8} {:<12} {}", pr.id, pr.status.as_str(), pr.author_id, pr.name);
    }
}
