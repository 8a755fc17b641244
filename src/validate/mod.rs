//! Per-field validation of raw conversation messages.
//!
//! A rejected message is ordinary conversation traffic, not an error: the
//! validator hands back the exact text to re-prompt the user with and the
//! machine stays in place. Nothing in this module raises.

mod fields;

pub use fields::{absorbers, currency, cycles, force, mass, scenario, stroke, velocity};

use crate::core::{ConversationState, FieldUpdate};

/// Message sent back to the user when an input is rejected. The wrapped text
/// restates the expected format or valid set for the field.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RePrompt(String);

impl RePrompt {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The re-prompt text.
    pub fn message(&self) -> &str {
        &self.0
    }

    /// Consume the re-prompt, yielding the text.
    pub fn into_message(self) -> String {
        self.0
    }
}

/// Validator for a single conversation state. The message arrives trimmed.
pub type Validator = fn(&str) -> Result<FieldUpdate, RePrompt>;

/// Look up the validator that guards `state`.
///
/// Returns `None` exactly for the terminal state, which collects nothing.
pub fn for_state(state: ConversationState) -> Option<Validator> {
    match state {
        ConversationState::AskScenario => Some(fields::scenario),
        ConversationState::AskMass => Some(fields::mass),
        ConversationState::AskVelocity => Some(fields::velocity),
        ConversationState::AskCycles => Some(fields::cycles),
        ConversationState::AskForce => Some(fields::force),
        ConversationState::AskStroke => Some(fields::stroke),
        ConversationState::AskAbsorbers => Some(fields::absorbers),
        ConversationState::AskCurrency => Some(fields::currency),
        ConversationState::Calculate => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_question_state_has_a_validator() {
        for state in ConversationState::SEQUENCE {
            assert_eq!(for_state(state).is_some(), !state.is_terminal());
        }
    }
}
