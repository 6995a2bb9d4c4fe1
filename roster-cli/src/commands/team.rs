//! Team management commands

use clap::{Args, Subcommand};
use roster_core::{NewMember, Team, User};
use serde::Serialize;

use super::{print_members, Output, Service};

/// Team management commands
#[derive(Args, Debug)]
pub struct TeamArgs {
    #[command(subcommand)]
    pub command: TeamCommand,
}

#[derive(Subcommand, Debug)]
pub enum TeamCommand {
    /// Create a team together with its members
    Add {
        /// Team name
        name: String,

        /// Member as ID:USERNAME, optionally suffixed with :inactive
        #[arg(short, long = "member", value_parser = parse_member)]
        members: Vec<NewMember>,
    },

    /// Show a team and its members
    Get {
        /// Team name
        name: String,
    },
}

#[derive(Serialize)]
struct TeamView<'a> {
    #[serde(flatten)]
    team: &'a Team,
    members: &'a [User],
}

impl TeamArgs {
    /// Execute the team command
    pub async fn execute(&self, service: &Service, out: &Output) -> anyhow::Result<()> {
        let (team, members, created) = match &self.command {
            TeamCommand::Add { name, members } => {
                let (team, users) = service.teams.create(name, members).await?;
                (team, users, true)
            }
            TeamCommand::Get { name } => {
                let (team, users) = service.teams.get(name).await?;
                (team, users, false)
            }
        };

        if out.is_json() {
            return out.json(&TeamView {
                team: &team,
                members: &members,
            });
        }

        if created {
            println!("Created team {} (id {})", team.name, team.id);
        } else {
            println!("Team {} (id {})", team.name, team.id);
        }
        print_members(&members);
        Ok(())
    }
}

/// Parse `ID:USERNAME[:active|:inactive]`
fn parse_member(raw: &str) -> Result<NewMember, String> {
    let mut parts = raw.splitn(3, ':');
    let id = parts.next().unwrap_or_default().trim();
    let username = parts.next().map(str::trim).unwrap_or_default();

    if id.is_empty() || username.is_empty() {
        return Err(format!("expected ID:USERNAME, got '{}'", raw));
    }

    let is_active = match parts.next().map(str::trim) {
        None | Some("active") => true,
        Some("inactive") => false,
        Some(other) => {
            return Err(format!(
                "unknown member state '{}' (expected 'active' or 'inactive')",
                other
            ))
        }
    };

    Ok(NewMember::new(id, username).with_active(is_active))
}
