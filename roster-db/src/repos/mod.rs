//! Repository modules for database operations

pub mod pull_requests;
pub mod stats;
pub mod teams;
pub mod users;

pub use pull_requests::PullRequestRepository;
pub use stats::StatsRepository;
pub use teams::TeamRepository;
pub use users::UserRepository;
