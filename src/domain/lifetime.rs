// src/domain/lifetime.rs

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Tracks whether a view is still the one on screen.
///
/// A fetch takes a ticket when it starts. When the view is torn down or
/// refreshed, the generation moves on and older tickets stop being current,
/// so their results get dropped instead of written into a dead view.
#[derive(Debug, Clone, Default)]
pub struct ViewLifetime {
    generation: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    owner: Arc<AtomicU64>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticket(&self) -> FetchTicket {
        FetchTicket {
            generation: self.generation.load(Ordering::Acquire),
            owner: Arc::clone(&self.generation),
        }
    }

    pub fn teardown(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

impl FetchTicket {
    pub fn is_current(&self) -> bool {
        self.owner.load(Ordering::Acquire) == self.generation
    }
}
