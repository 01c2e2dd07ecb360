use std::fmt;

use crate::link::LinkState;

/// Ephemeral operator-facing notification. Emitted on command dispatch
/// outcomes and on link-state transitions, never on steady state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Command reached the robot; carries the raw response body, which is
    /// surfaced but never parsed.
    CommandSent { response: String },
    CommandFailed { reason: String },
    LinkChanged(LinkState),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::CommandSent { response } => {
                write!(f, "Command sent successfully: {}", response)
            }
            Notice::CommandFailed { reason } => {
                write!(f, "Failed to send command: {}", reason)
            }
            Notice::LinkChanged(LinkState::Reachable) => write!(f, "Connection successful"),
            Notice::LinkChanged(LinkState::Unreachable) => write!(f, "Connection lost"),
        }
    }
}
