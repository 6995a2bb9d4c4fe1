//! Random reviewer selection
//!
//! The picker owns one seeded generator shared by every request. The mutex
//! is only held while shuffling, never across an await point.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Uniform random selection of reviewers from a candidate pool
#[derive(Debug)]
pub struct ReviewerPicker {
    rng: Mutex<StdRng>,
}

impl ReviewerPicker {
    /// Create a picker seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a picker with a fixed seed, for reproducible assignments
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Create a picker from an optional configured seed
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Apply a uniform random permutation to the pool and keep the first `count`
    pub fn pick<T>(&self, mut pool: Vec<T>, count: usize) -> Vec<T> {
        {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            pool.shuffle(&mut *rng);
        }
        pool.truncate(count);
        pool
    }

    /// Choose one element uniformly at random, or `None` for an empty pool
    pub fn pick_one<T>(&self, pool: Vec<T>) -> Option<T> {
        self.pick(pool, 1).into_iter().next()
    }
}

impl Default for ReviewerPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}
