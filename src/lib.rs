//! Shockbot: a guided conversation engine for shock absorber sizing.
//!
//! The engine walks a user through a fixed sequence of questions (mass,
//! velocity, duty cycles, force, stroke, absorber count, currency),
//! validates every answer in place, and finishes with a deterministic
//! calculation plus a catalog recommendation.
//!
//! The crate keeps a "pure core, imperative shell" split: transitions and
//! validation are pure functions over an explicit [`core::Session`] value,
//! while the terminal lookup-and-persist step runs as an effect against a
//! repository environment.
//!
//! # Core Concepts
//!
//! - **Session**: the conversation value the transport layer persists
//!   between requests; the engine holds no state of its own
//! - **Validators**: per-field parsers that re-prompt instead of erroring
//! - **Engine**: pure [`engine::step`] decisions, effectful
//!   [`engine::handle`] turns
//! - **Resolver**: recommendation lookup with a fixed fallback, so a
//!   storage outage never breaks the conversation
//!
//! # Example
//!
//! ```rust
//! use shockbot::engine::{self, StepOutcome};
//! use shockbot::core::ConversationState;
//!
//! let (prompt, session) = engine::start();
//! assert_eq!(prompt, "Choose a scenario: 1. Mass with Propelling Force");
//!
//! // An accepted answer advances exactly one state.
//! match engine::step(&session, "1") {
//!     StepOutcome::Advanced(next) => assert_eq!(next.state, ConversationState::AskMass),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//!
//! // A rejected answer re-prompts and stays put.
//! match engine::step(&session, "7") {
//!     StepOutcome::Reprompted { message } => {
//!         assert_eq!(message, "Please select \"1\" for Mass with Propelling Force.");
//!     }
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```
//!
//! Driving a full turn, including the terminal calculation, goes through
//! [`engine::handle`], whose effect is run against a
//! [`recommend::RecommendationRepository`]:
//!
//! ```rust
//! use shockbot::{engine, recommend::InMemoryRepository};
//! use stillwater::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let repo = InMemoryRepository::new();
//! let (_, session) = engine::start();
//! let turn = engine::handle(&session, "1").run(&repo).await.unwrap();
//! assert_eq!(turn.reply, "Enter mass (kg or tonne):");
//! # }
//! ```

pub mod calc;
pub mod core;
pub mod engine;
pub mod recommend;
pub mod snapshot;
pub mod validate;

// Re-export the types a transport layer touches on every request.
pub use crate::core::{ConversationState, InputSet, Session};
pub use crate::engine::{handle, start, StepOutcome, Turn};
