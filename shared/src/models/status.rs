//! Order / reservation status lifecycle
//!
//! One linear state machine shared by orders and table reservations:
//!
//! ```text
//! pending → confirmed → completed
//!    └──────────┴─────→ cancelled
//! ```
//!
//! `completed` and `cancelled` are terminal. Transitions are validated
//! server-side against this table before any mutation, independent of
//! which dashboard button produced the request.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle status of an order or reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Initial state, set at creation and never client-supplied
    Pending,
    /// Accepted by the operator
    Confirmed,
    /// Fulfilled; contributes to daily revenue
    Completed,
    /// Declined or abandoned; listed in history with zero revenue
    Cancelled,
}

/// Rejected status transition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("cannot leave terminal status '{0}'")]
    Terminal(Status),
    #[error("illegal status transition '{from}' -> '{to}'")]
    Illegal { from: Status, to: Status },
    #[error("unknown status '{0}'")]
    Unknown(String),
}

impl Status {
    /// Whether no further transitions are permitted from this status
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Completed | Status::Cancelled)
    }

    /// Transition table: (current, requested) -> allowed
    pub fn can_transition_to(self, next: Status) -> bool {
        matches!(
            (self, next),
            (Status::Pending, Status::Confirmed)
                | (Status::Pending, Status::Cancelled)
                | (Status::Confirmed, Status::Completed)
                | (Status::Confirmed, Status::Cancelled)
        )
    }

    /// Validate a requested transition, with a reason on rejection
    pub fn transition_to(self, next: Status) -> Result<Status, TransitionError> {
        if self.is_terminal() {
            return Err(TransitionError::Terminal(self));
        }
        if !self.can_transition_to(next) {
            return Err(TransitionError::Illegal {
                from: self,
                to: next,
            });
        }
        Ok(next)
    }

    /// The next forward step the dashboard action buttons advance to,
    /// if any ("Accept" / "Complete & Bill")
    pub fn next_forward(self) -> Option<Status> {
        match self {
            Status::Pending => Some(Status::Confirmed),
            Status::Confirmed => Some(Status::Completed),
            Status::Completed | Status::Cancelled => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Confirmed => "confirmed",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TransitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Status::Pending),
            "confirmed" => Ok(Status::Confirmed),
            "completed" => Ok(Status::Completed),
            "cancelled" => Ok(Status::Cancelled),
            other => Err(TransitionError::Unknown(other.to_string())),
        }
    }
}

/// Body of `PATCH /api/admin/{orders,reservations}/:id/status`
///
/// The status arrives as a raw string so an unknown value surfaces as a
/// 400 validation error rather than a body-rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_chain_is_allowed() {
        assert_eq!(
            Status::Pending.transition_to(Status::Confirmed),
            Ok(Status::Confirmed)
        );
        assert_eq!(
            Status::Confirmed.transition_to(Status::Completed),
            Ok(Status::Completed)
        );
    }

    #[test]
    fn cancellation_branch() {
        assert!(Status::Pending.can_transition_to(Status::Cancelled));
        assert!(Status::Confirmed.can_transition_to(Status::Cancelled));
    }

    #[test]
    fn terminal_states_reject_everything() {
        for terminal in [Status::Completed, Status::Cancelled] {
            assert!(terminal.is_terminal());
            for next in [
                Status::Pending,
                Status::Confirmed,
                Status::Completed,
                Status::Cancelled,
            ] {
                assert_eq!(
                    terminal.transition_to(next),
                    Err(TransitionError::Terminal(terminal))
                );
            }
        }
    }

    #[test]
    fn same_state_and_backward_jumps_rejected() {
        assert_eq!(
            Status::Pending.transition_to(Status::Pending),
            Err(TransitionError::Illegal {
                from: Status::Pending,
                to: Status::Pending
            })
        );
        assert_eq!(
            Status::Confirmed.transition_to(Status::Pending),
            Err(TransitionError::Illegal {
                from: Status::Confirmed,
                to: Status::Pending
            })
        );
        // Skipping confirmed entirely is not a legal jump
        assert!(!Status::Pending.can_transition_to(Status::Completed));
    }

    #[test]
    fn next_forward_matches_dashboard_buttons() {
        assert_eq!(Status::Pending.next_forward(), Some(Status::Confirmed));
        assert_eq!(Status::Confirmed.next_forward(), Some(Status::Completed));
        assert_eq!(Status::Completed.next_forward(), None);
        assert_eq!(Status::Cancelled.next_forward(), None);
    }

    #[test]
    fn parses_wire_strings() {
        assert_eq!("pending".parse::<Status>(), Ok(Status::Pending));
        assert_eq!(
            "shipped".parse::<Status>(),
            Err(TransitionError::Unknown("shipped".to_string()))
        );
        assert_eq!(
            serde_json::to_string(&Status::Confirmed).unwrap(),
            "\"confirmed\""
        );
    }
}
