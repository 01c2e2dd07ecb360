use log::debug;

/// Reachability of the robot endpoint as last observed by the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkState {
    Reachable,
    #[default]
    Unreachable,
}

/// Debounced link-state tracker.
///
/// Owned by the single monitor task, which makes the observe-then-notify
/// step atomic without a lock. Starts `Unreachable`, so a failing first
/// probe produces no notification.
#[derive(Debug, Default)]
pub struct LinkTracker {
    state: LinkState,
}

impl LinkTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Feeds one probe result. Returns `Some(new_state)` exactly when the
    /// observation differs from the stored state; repeated observations of
    /// the same state are suppressed.
    pub fn observe(&mut self, reachable: bool) -> Option<LinkState> {
        let candidate = if reachable {
            LinkState::Reachable
        } else {
            LinkState::Unreachable
        };
        if candidate == self.state {
            return None;
        }
        debug!("link state {:?} -> {:?}", self.state, candidate);
        self.state = candidate;
        Some(candidate)
    }
}
