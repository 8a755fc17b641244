//! The conversation session value.

use super::inputs::InputSet;
use super::state::ConversationState;
use serde::{Deserialize, Serialize};

/// One guided conversation: the current state plus everything collected so
/// far.
///
/// The session is a plain value owned by the transport layer. The engine
/// receives it per request and returns the updated version; it keeps no
/// session registry of its own, so concurrent sessions never share state.
/// A session is never destroyed explicitly — it becomes inert once the
/// terminal state is reached, or expires with its external storage.
///
/// # Example
///
/// ```rust
/// use shockbot::core::{ConversationState, Session};
///
/// let session = Session::new();
/// assert_eq!(session.state, ConversationState::AskScenario);
/// assert!(session.inputs.is_empty());
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Session {
    pub state: ConversationState,
    #[serde(default)]
    pub inputs: InputSet,
}

impl Session {
    /// Fresh session: initial state, empty inputs. Also the result of the
    /// restart command, from any state.
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the terminal state has been reached.
    pub fn is_complete(&self) -> bool {
        self.state.is_terminal()
    }
}
