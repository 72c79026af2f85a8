//! Conversation stage machine — tracks which phase of the scripted flow
//! the conversation is in.

use serde::{Deserialize, Serialize};

/// The stages of the study-recommendation conversation.
///
/// Greeting → DataCollection → Processing → Results → FollowUp, with
/// FollowUp looping back to DataCollection for another search or closing
/// out at Ended. A failed recommendation call drops Processing back to
/// Greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Greeting,
    DataCollection,
    Processing,
    Results,
    FollowUp,
    Ended,
}

impl Stage {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: Stage) -> bool {
        use Stage::*;
        matches!(
            (self, target),
            (Greeting, DataCollection)
                | (DataCollection, Processing)
                | (Processing, Results)
                | (Processing, Greeting)
                | (Results, FollowUp)
                | (FollowUp, DataCollection)
                | (FollowUp, Ended)
        )
    }

    /// Whether this stage is terminal (the conversation is over).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ended)
    }

    /// Whether user input drives a transition from this stage.
    ///
    /// Processing and Results take no input (Results is a momentary
    /// pass-through during call resolution), and Ended is absorbing.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::Greeting | Self::DataCollection | Self::FollowUp)
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::Greeting
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Greeting => "greeting",
            Self::DataCollection => "data-collection",
            Self::Processing => "processing",
            Self::Results => "results",
            Self::FollowUp => "follow-up",
            Self::Ended => "ended",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_transitions() {
        use Stage::*;
        let transitions = [
            (Greeting, DataCollection),
            (DataCollection, Processing),
            (Processing, Results),
            (Processing, Greeting),
            (Results, FollowUp),
            (FollowUp, DataCollection),
            (FollowUp, Ended),
        ];
        for (from, to) in transitions {
            assert!(
                from.can_transition_to(to),
                "{from} should transition to {to}"
            );
        }
    }

    #[test]
    fn invalid_transitions() {
        use Stage::*;
        // Skip stages
        assert!(!Greeting.can_transition_to(Processing));
        assert!(!DataCollection.can_transition_to(Results));
        // Go backward
        assert!(!Results.can_transition_to(Processing));
        assert!(!DataCollection.can_transition_to(Greeting));
        // Terminal
        assert!(!Ended.can_transition_to(Greeting));
        assert!(!Ended.can_transition_to(DataCollection));
        // Self-transition
        assert!(!Processing.can_transition_to(Processing));
    }

    #[test]
    fn is_terminal() {
        use Stage::*;
        assert!(Ended.is_terminal());
        assert!(!Greeting.is_terminal());
        assert!(!Processing.is_terminal());
        assert!(!FollowUp.is_terminal());
    }

    #[test]
    fn accepts_input() {
        use Stage::*;
        assert!(Greeting.accepts_input());
        assert!(DataCollection.accepts_input());
        assert!(FollowUp.accepts_input());
        assert!(!Processing.accepts_input());
        assert!(!Results.accepts_input());
        assert!(!Ended.accepts_input());
    }

    #[test]
    fn display_matches_serde() {
        use Stage::*;
        let stages = [Greeting, DataCollection, Processing, Results, FollowUp, Ended];
        for stage in stages {
            let display = format!("{stage}");
            let json = serde_json::to_string(&stage).unwrap();
            // JSON wraps in quotes
            assert_eq!(
                format!("\"{display}\""),
                json,
                "Display and serde should match for {stage:?}"
            );
        }
    }
}
