//! State - Process lifecycle machine
//!
//! Manages process lifecycle and state transitions

use core::fmt;

/// Process state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    /// Process is queued in a ready container (possibly waiting out I/O)
    Ready,

    /// Process is currently dispatched on the simulated CPU
    Running,

    /// Process has consumed its entire burst sequence
    Finished,
}

impl ProcessState {
    /// Check if state is schedulable
    pub fn is_schedulable(self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Check if state is terminal
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "Ready"),
            Self::Running => write!(f, "Running"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

/// Validate state transition
pub fn validate_transition(from: ProcessState, to: ProcessState) -> bool {
    use ProcessState::*;

    match (from, to) {
        // Ready -> Running (dispatch)
        (Ready, Running) => true,

        // Running -> Ready (quantum expiry, preemption, I/O wait)
        (Running, Ready) => true,

        // Running -> Finished (last burst consumed)
        (Running, Finished) => true,

        // All other transitions invalid
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_transition() {
        assert!(validate_transition(ProcessState::Ready, ProcessState::Running));
        assert!(validate_transition(ProcessState::Running, ProcessState::Ready));
        assert!(validate_transition(ProcessState::Running, ProcessState::Finished));
    }

    #[test]
    fn test_finished_is_terminal() {
        assert!(!validate_transition(ProcessState::Finished, ProcessState::Ready));
        assert!(!validate_transition(ProcessState::Finished, ProcessState::Running));
        assert!(ProcessState::Finished.is_terminal());
        assert!(!ProcessState::Finished.is_schedulable());
    }

    #[test]
    fn test_no_direct_finish_from_ready() {
        assert!(!validate_transition(ProcessState::Ready, ProcessState::Finished));
    }
}
