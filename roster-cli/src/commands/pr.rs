//! Pull request commands

use clap::{Args, Subcommand};
use roster_core::NewPullRequest;

use super::{print_pull_request, Output, Service};

/// Pull request commands
#[derive(Args, Debug)]
pub struct PrArgs {
    #[command(subcommand)]
    pub command: PrCommand,
}

#[derive(Subcommand, Debug)]
pub enum PrCommand {
    /// Open a pull request and assign reviewers from the author's team
    Create {
        /// Pull request id
        id: String,

        /// Pull request title
        #[arg(short, long)]
        name: String,

        /// Author user id
        #[arg(short, long)]
        author: String,
    },

    /// Show a pull request
    Show {
        /// Pull request id
        id: String,
    },

    /// Merge a pull request (merging twice is a no-op)
    Merge {
        /// Pull request id
        id: String,
    },

    /// Replace a reviewer with another active teammate
    Reassign {
        /// Pull request id
        id: String,

        /// Reviewer to replace
        #[arg(long = "old")]
        old_reviewer: String,
    },
}

impl PrArgs {
    /// Execute the pull request command
    pub async fn execute(&self, service: &Service, out: &Output) -> anyhow::Result<()> {
        let engine = &service.pull_requests;

        let pr = match &self.command {
            PrCommand::Create { id, name, author } => {
                engine
                    .create(NewPullRequest::new(id.as_str(), name.as_str(), author.as_str()))
                    .await?
            }
            PrCommand::Show { id } => engine.pull_request(id).await?,
            PrCommand::Merge { id } => engine.merge(id).await?,
            PrCommand::Reassign { id, old_reviewer } => {
                let reassignment = engine.reassign(id, old_reviewer).await?;
                if out.is_json() {
                    return out.json(&reassignment);
                }
                println!(
                    "Replaced {} with {}",
                    old_reviewer, reassignment.replaced_by
                );
                reassignment.pull_request
            }
        };

        if out.is_json() {
            return out.json(&pr);
        }
        print_pull_request(&pr);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(subcommand)]
        command: PrCommand,
    }

    #[test]
    fn test_parse_reassign() {
        let parsed = Harness::try_parse_from(["pr", "reassign", "pr-1", "--old", "u2"]).unwrap();
        match parsed.command {
            PrCommand::Reassign { id, old_reviewer } => {
                assert_eq!(id, "pr-1");
                assert_eq!(old_reviewer, "u2");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_create_requires_author() {
        assert!(Harness::try_parse_from(["pr", "create", "pr-1", "--name", "Fix"]).is_err());
    }
}
