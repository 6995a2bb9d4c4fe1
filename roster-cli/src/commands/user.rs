//! User commands

use clap::{Args, Subcommand};
use roster_core::FullUserInfo;

use super::{print_summaries, Output, Service};

/// User commands
#[derive(Args, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Show a user and their team
    Show {
        /// User id
        id: String,
    },

    /// Mark a user active or inactive
    SetActive {
        /// User id
        id: String,

        /// New activity flag
        #[arg(long, action = clap::ArgAction::Set)]
        active: bool,
    },

    /// List pull requests the user currently reviews
    Reviews {
        /// User id
        id: String,
    },
}

impl UserArgs {
    /// Execute the user command
    pub async fn execute(&self, service: &Service, out: &Output) -> anyhow::Result<()> {
        match &self.command {
            UserCommand::Show { id } => {
                let info = service.users.get(id).await?;
                show_user(&info, out)
            }
            UserCommand::SetActive { id, active } => {
                let info = service.users.set_active(id, *active).await?;
                show_user(&info, out)
            }
            UserCommand::Reviews { id } => {
                let reviews = service.users.review_assignments(id).await?;
                if out.is_json() {
                    return out.json(&serde_json::json!({
                        "user_id": id,
                        "pull_requests": reviews,
                    }));
                }

                if reviews.is_empty() {
                    println!("{} has no open review assignments", id);
                } else {
                    println!("Reviews assigned to {}:", id);
                    print_summaries(&reviews);
                }
                Ok(())
            }
        }
    }
}

fn show_user(info: &FullUserInfo, out: &Output) -> anyhow::Result<()> {
    if out.is_json() {
        return out.json(info);
    }

    println!("User {}", info.user.id);
    println!("  Username: {}", info.user.username);
    println!("  Team:     {}", info.team_name);
    println!(
        "  Active:   {}",
        if info.user.is_active { "yes" } else { "no" }
    );
    Ok(())
}
