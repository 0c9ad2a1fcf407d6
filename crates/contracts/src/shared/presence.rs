//! Mount lifecycle of content that animates out before it is removed.
//!
//! Content is `mounted` while visible and for the length of its exit
//! animation (`leaving`). Each exit hands out a ticket; only the ticket of
//! the latest exit may unmount, so reopening during an exit cancels it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Presence {
    mounted: bool,
    leaving: bool,
    generation: u64,
}

impl Presence {
    pub fn new(visible: bool) -> Self {
        Self {
            mounted: visible,
            ..Self::default()
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_leaving(&self) -> bool {
        self.leaving
    }

    /// Mounts the content (or cancels a running exit). Returns `true` if
    /// anything changed.
    pub fn show(&mut self) -> bool {
        let before = *self;
        self.mounted = true;
        self.leaving = false;
        *self != before
    }

    /// Starts the exit animation. Returns the ticket to pass to
    /// [`Presence::exit_finished`] once the exit has played, or `None` when
    /// nothing is mounted or an exit is already running.
    pub fn hide(&mut self) -> Option<u64> {
        if !self.mounted || self.leaving {
            return None;
        }
        self.leaving = true;
        self.generation += 1;
        Some(self.generation)
    }

    /// Unmounts if `ticket` belongs to the exit still in progress.
    pub fn exit_finished(&mut self, ticket: u64) -> bool {
        if !self.leaving || ticket != self.generation {
            return false;
        }
        self.mounted = false;
        self.leaving = false;
        true
    }
}
