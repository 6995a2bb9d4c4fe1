//! Roster service facade bundling the directories and the assignment engine

use std::sync::Arc;

use crate::assignment::{AssignmentEngine, ReviewerPicker};
use crate::directory::{StatsDirectory, TeamDirectory, UserDirectory};
use crate::store::Store;

/// Every roster operation over one shared store
pub struct RosterService<S: ?Sized> {
    pub teams: TeamDirectory<S>,
    pub users: UserDirectory<S>,
    pub stats: StatsDirectory<S>,
    pub pull_requests: AssignmentEngine<S>,
}

impl<S: Store + ?Sized> RosterService<S> {
    pub fn new(store: Arc<S>, picker: ReviewerPicker) -> Self {
        Self {
            teams: TeamDirectory::new(store.clone()),
            users: UserDirectory::new(store.clone()),
            stats: StatsDirectory::new(store.clone()),
            pull_requests: AssignmentEngine::new(store, picker),
        }
    }
}
