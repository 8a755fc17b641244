//! Conversation states for the guided sizing dialogue.
//!
//! The conversation is a fixed, linearly ordered sequence of questions
//! ending in a single terminal calculation state. States are immutable
//! values; all methods here are pure.

use serde::{Deserialize, Serialize};

/// One position in the sizing conversation.
///
/// States form a strict linear order: each question has exactly one
/// successor, and [`ConversationState::Calculate`] has none. A session only
/// ever moves forward by one state per accepted answer, or stays put.
///
/// # Example
///
/// ```rust
/// use shockbot::core::ConversationState;
///
/// let state = ConversationState::initial();
/// assert_eq!(state, ConversationState::AskScenario);
/// assert_eq!(state.successor(), Some(ConversationState::AskMass));
/// assert!(!state.is_terminal());
/// assert!(ConversationState::Calculate.is_terminal());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    AskScenario,
    AskMass,
    AskVelocity,
    AskCycles,
    AskForce,
    AskStroke,
    AskAbsorbers,
    AskCurrency,
    Calculate,
}

impl ConversationState {
    /// Every state in conversation order. The successor of each entry is the
    /// next entry; the last entry is terminal.
    pub const SEQUENCE: [ConversationState; 9] = [
        Self::AskScenario,
        Self::AskMass,
        Self::AskVelocity,
        Self::AskCycles,
        Self::AskForce,
        Self::AskStroke,
        Self::AskAbsorbers,
        Self::AskCurrency,
        Self::Calculate,
    ];

    /// The state every fresh session starts in.
    pub fn initial() -> Self {
        Self::AskScenario
    }

    /// The unique next state, or `None` for the terminal state.
    pub fn successor(&self) -> Option<Self> {
        match self {
            Self::AskScenario => Some(Self::AskMass),
            Self::AskMass => Some(Self::AskVelocity),
            Self::AskVelocity => Some(Self::AskCycles),
            Self::AskCycles => Some(Self::AskForce),
            Self::AskForce => Some(Self::AskStroke),
            Self::AskStroke => Some(Self::AskAbsorbers),
            Self::AskAbsorbers => Some(Self::AskCurrency),
            Self::AskCurrency => Some(Self::Calculate),
            Self::Calculate => None,
        }
    }

    /// Get the state's wire name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AskScenario => "ask_scenario",
            Self::AskMass => "ask_mass",
            Self::AskVelocity => "ask_velocity",
            Self::AskCycles => "ask_cycles",
            Self::AskForce => "ask_force",
            Self::AskStroke => "ask_stroke",
            Self::AskAbsorbers => "ask_absorbers",
            Self::AskCurrency => "ask_currency",
            Self::Calculate => "calculate",
        }
    }

    /// The question asked when the conversation enters this state. The
    /// terminal state carries the post-completion nudge instead.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::AskScenario => "Choose a scenario: 1. Mass with Propelling Force",
            Self::AskMass => "Enter mass (kg or tonne):",
            Self::AskVelocity => "Enter velocity (m/sec or m/min):",
            Self::AskCycles => "Enter cycles per hour:",
            Self::AskForce => "Enter force (N):",
            Self::AskStroke => "Select stroke (25, 50, 70, 75, 100, 125, 127, 150, 165, 200 mm):",
            Self::AskAbsorbers => "Select number of shock absorbers (1, 2, 3, 4):",
            Self::AskCurrency => "Choose currency (INR or USD):",
            Self::Calculate => "Session complete. Type \"restart\" to size another absorber.",
        }
    }

    /// Check if this is the terminal state. No further field is requested
    /// once it is reached; the one-shot calculation fires on entry.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Calculate)
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::initial()
    }
}
