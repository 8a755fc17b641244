//! Pure core of the conversation engine.
//!
//! This module contains only values and pure functions:
//! - The ordered [`ConversationState`] sequence
//! - Typed input accumulation in [`InputSet`]
//! - Unit normalization for mass and velocity
//! - The [`Session`] value the transport layer persists
//!
//! Nothing here performs I/O; side effects live behind the engine's
//! effectful shell.

mod inputs;
mod session;
mod state;
mod units;

pub use inputs::{
    Currency, FieldUpdate, InputSet, MassInput, Scenario, VelocityInput, DEFAULT_MIN_TEMPERATURE,
    VALID_ABSORBER_COUNTS, VALID_STROKES_MM,
};
pub use session::Session;
pub use state::ConversationState;
pub use units::{MassUnit, VelocityUnit};
