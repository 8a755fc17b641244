//! The conversation state machine.
//!
//! [`step`] is the pure core: one message in, one transition decision out,
//! no side effects. [`handle`] is the imperative shell: it wraps the
//! decision in an effect so the terminal calculation can reach the
//! recommendation repository supplied as the effect environment. Everything
//! the transport layer needs is [`start`] and [`handle`].

use crate::calc::{Calculation, CalculationInput};
use crate::core::{ConversationState, Session};
use crate::recommend::{self, RecommendationRecord, RecommendationRepository};
use crate::validate;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;
use stillwater::validation::Validation;
use thiserror::Error;

/// Reserved command that resets the conversation from any state, including
/// the terminal one, bypassing all validators. Matched case-insensitively.
pub const RESTART_TOKEN: &str = "restart";

/// Acknowledgment sent after a restart.
pub const RESTART_REPLY: &str = "Restarted. Choose a scenario: 1. Mass with Propelling Force";

/// Errors the engine cannot recover from.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The session entered the terminal state without every field collected.
    /// Unreachable through [`step`]; it means the stored session was
    /// corrupted, and the request fails rather than guessing.
    #[error("terminal state reached with incomplete inputs: {missing}")]
    IncompleteInputs { missing: String },
}

/// One reply to the user together with the session to persist.
#[derive(Clone, PartialEq, Debug)]
pub struct Turn {
    pub reply: String,
    pub session: Session,
}

/// Decision produced by the pure transition core.
#[derive(Clone, PartialEq, Debug)]
pub enum StepOutcome {
    /// The restart command was received; the conversation starts over.
    Restarted(Session),

    /// The active validator rejected the message; nothing moved.
    Reprompted { message: String },

    /// A field was captured and the next question is due.
    Advanced(Session),

    /// The final field was captured; the session entered the terminal state.
    Completed(Session),

    /// The session already sits in the terminal state; there is nothing
    /// left to collect.
    Inert,
}

/// Start a conversation: the opening prompt plus a fresh session.
pub fn start() -> (String, Session) {
    let session = Session::new();
    (session.state.prompt().to_string(), session)
}

/// Pure transition function: exactly one state transition per call.
///
/// The machine never looks ahead or batches multiple fields out of one
/// message. An accepted answer moves the session forward by one state; a
/// rejected one leaves it exactly where it was.
///
/// # Example
///
/// ```rust
/// use shockbot::core::{ConversationState, Session};
/// use shockbot::engine::{step, StepOutcome};
///
/// let session = Session::new();
/// match step(&session, "1") {
///     StepOutcome::Advanced(next) => assert_eq!(next.state, ConversationState::AskMass),
///     other => panic!("unexpected outcome: {:?}", other),
/// }
/// ```
pub fn step(session: &Session, raw_message: &str) -> StepOutcome {
    let message = raw_message.trim();

    if message.eq_ignore_ascii_case(RESTART_TOKEN) {
        return StepOutcome::Restarted(Session::new());
    }

    let Some(validator) = validate::for_state(session.state) else {
        return StepOutcome::Inert;
    };

    match validator(message) {
        Err(reprompt) => StepOutcome::Reprompted {
            message: reprompt.into_message(),
        },
        Ok(update) => {
            let mut next = session.clone();
            next.inputs.apply(update);
            // a validator exists, so this is not the terminal state
            next.state = session
                .state
                .successor()
                .expect("non-terminal state has a successor");
            if next.state.is_terminal() {
                StepOutcome::Completed(next)
            } else {
                StepOutcome::Advanced(next)
            }
        }
    }
}

/// Handle one message: the transport layer's single entry point.
///
/// Returns an effect to be run against the recommendation repository. Only
/// the terminal transition actually touches the environment; every other
/// outcome resolves to a pure turn.
pub fn handle<R>(session: &Session, raw_message: &str) -> BoxedEffect<Turn, EngineError, R>
where
    R: RecommendationRepository + Clone + Send + Sync + 'static,
{
    match step(session, raw_message) {
        StepOutcome::Restarted(fresh) => {
            tracing::debug!("conversation restarted");
            pure(Turn {
                reply: RESTART_REPLY.to_string(),
                session: fresh,
            })
            .boxed()
        }
        StepOutcome::Inert => pure(Turn {
            reply: ConversationState::Calculate.prompt().to_string(),
            session: session.clone(),
        })
        .boxed(),
        StepOutcome::Reprompted { message } => pure(Turn {
            reply: message,
            session: session.clone(),
        })
        .boxed(),
        StepOutcome::Advanced(next) => {
            tracing::debug!(state = next.state.name(), "conversation advanced");
            pure(Turn {
                reply: next.state.prompt().to_string(),
                session: next,
            })
            .boxed()
        }
        StepOutcome::Completed(next) => from_fn(move |repo: &R| complete(repo, &next)).boxed(),
    }
}

/// Terminal step: calculate, resolve recommendations, compose the summary,
/// then persist. The reply is fixed before the insert is issued, so a
/// failed insert can never change it.
fn complete<R: RecommendationRepository>(repo: &R, session: &Session) -> Result<Turn, EngineError> {
    let input = match CalculationInput::from_set(&session.inputs) {
        Validation::Success(input) => input,
        Validation::Failure(missing) => {
            let missing = missing
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(EngineError::IncompleteInputs { missing });
        }
    };

    let calculations = Calculation::evaluate(&input);
    let recommendations = recommend::resolve(repo, input.stroke_mm);
    let reply = summary(&recommendations, &calculations);

    let scenario = session
        .inputs
        .scenario
        .expect("completeness checked by from_set");
    let record = RecommendationRecord::new(
        scenario,
        session.inputs.clone(),
        calculations,
        recommendations,
    );
    recommend::persist(repo, &record);

    Ok(Turn {
        reply,
        session: session.clone(),
    })
}

/// Compose the terminal summary: the recommendations line first, then the
/// derived quantities with two-decimal formatting, in fixed order.
fn summary(recommendations: &[String], calc: &Calculation) -> String {
    format!(
        "Recommended absorbers: {}\n\
         Calculations: Kinetic Energy: {:.2} kg, Potential Energy: {:.2} Nm, \
         Total Energy: {:.2} Nm, Energy per Hour: {:.2} Nm/hr, \
         Impact Velocity: {:.2} m/s, Emass min: {:.2} kg",
        recommendations.join(", "),
        calc.kinetic_energy,
        calc.potential_energy,
        calc.total_energy,
        calc.energy_per_hour,
        calc.impact_velocity,
        calc.emass_min,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InputSet;
    use crate::recommend::{InMemoryRepository, StoredRecommendation, FALLBACK_RECOMMENDATION};

    const REFERENCE_ANSWERS: [&str; 8] = [
        "1", "1000 kg", "2 m/sec", "100", "500", "100", "2", "INR",
    ];

    /// Walk the conversation up to (but not through) the terminal answer.
    fn session_at(state: ConversationState) -> Session {
        let mut session = Session::new();
        for answer in REFERENCE_ANSWERS {
            if session.state == state {
                return session;
            }
            session = match step(&session, answer) {
                StepOutcome::Advanced(next) | StepOutcome::Completed(next) => next,
                other => panic!("expected an accepted answer, got {:?}", other),
            };
        }
        assert_eq!(session.state, state);
        session
    }

    #[test]
    fn start_returns_the_opening_prompt() {
        let (prompt, session) = start();
        assert_eq!(prompt, "Choose a scenario: 1. Mass with Propelling Force");
        assert_eq!(session, Session::new());
    }

    #[test]
    fn accepted_answers_advance_one_state_at_a_time() {
        let mut session = Session::new();
        for (i, answer) in REFERENCE_ANSWERS.iter().enumerate() {
            let expected = ConversationState::SEQUENCE[i + 1];
            session = match step(&session, answer) {
                StepOutcome::Advanced(next) => {
                    assert!(!next.state.is_terminal());
                    next
                }
                StepOutcome::Completed(next) => {
                    assert!(next.state.is_terminal());
                    next
                }
                other => panic!("answer {:?} was not accepted: {:?}", answer, other),
            };
            assert_eq!(session.state, expected);
        }
    }

    #[test]
    fn rejected_answers_hold_the_state_and_inputs() {
        let session = session_at(ConversationState::AskStroke);
        let before = session.clone();

        match step(&session, "99") {
            StepOutcome::Reprompted { message } => {
                assert_eq!(
                    message,
                    "Stroke must be one of [25, 50, 70, 75, 100, 125, 127, 150, 165, 200]. Try again:"
                );
            }
            other => panic!("expected a re-prompt, got {:?}", other),
        }
        assert_eq!(session, before);
    }

    #[test]
    fn restart_works_from_any_state_and_any_case() {
        for state in ConversationState::SEQUENCE {
            let session = if state.is_terminal() {
                Session {
                    state,
                    inputs: session_at(ConversationState::AskCurrency).inputs,
                }
            } else {
                session_at(state)
            };

            for token in ["restart", "RESTART", "  Restart  "] {
                match step(&session, token) {
                    StepOutcome::Restarted(fresh) => {
                        assert_eq!(fresh, Session::new());
                    }
                    other => panic!("restart failed in {:?}: {:?}", state, other),
                }
            }
        }
    }

    #[test]
    fn terminal_sessions_are_inert() {
        let session = Session {
            state: ConversationState::Calculate,
            inputs: InputSet::new(),
        };
        assert_eq!(step(&session, "hello"), StepOutcome::Inert);
    }

    #[tokio::test]
    async fn full_conversation_produces_the_reference_summary() {
        let repo = InMemoryRepository::new();
        let (_, mut session) = start();

        let mut last_reply = String::new();
        for answer in REFERENCE_ANSWERS {
            let turn = handle(&session, answer).run(&repo).await.unwrap();
            last_reply = turn.reply;
            session = turn.session;
        }

        assert!(session.is_complete());
        assert_eq!(
            last_reply,
            "Recommended absorbers: Mock Model\n\
             Calculations: Kinetic Energy: 2000.00 kg, Potential Energy: 50.00 Nm, \
             Total Energy: 2050.00 Nm, Energy per Hour: 205000.00 Nm/hr, \
             Impact Velocity: 2.00 m/s, Emass min: 500.00 kg"
        );
    }

    #[tokio::test]
    async fn seeded_catalog_replaces_the_fallback() {
        let repo = InMemoryRepository::new();
        repo.seed(StoredRecommendation {
            stroke_mm: 100.0,
            recommendations: vec!["SA-100".to_string(), "SA-100HD".to_string()],
        });

        let session = session_at(ConversationState::AskCurrency);
        let turn = handle(&session, "INR").run(&repo).await.unwrap();

        assert!(turn.reply.starts_with("Recommended absorbers: SA-100, SA-100HD\n"));
        assert!(!turn.reply.contains(FALLBACK_RECOMMENDATION));
    }

    #[tokio::test]
    async fn completed_session_is_persisted_once() {
        let repo = InMemoryRepository::new();
        let session = session_at(ConversationState::AskCurrency);

        let turn = handle(&session, "usd").run(&repo).await.unwrap();
        assert!(turn.session.is_complete());

        let records = repo.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].inputs.currency, turn.session.inputs.currency);
        assert_eq!(records[0].recommendations, vec![FALLBACK_RECOMMENDATION]);
    }

    #[tokio::test]
    async fn prompts_follow_the_question_order() {
        let repo = InMemoryRepository::new();
        let (_, session) = start();

        let turn = handle(&session, "1").run(&repo).await.unwrap();
        assert_eq!(turn.reply, "Enter mass (kg or tonne):");

        let turn = handle(&turn.session, "5 tonne").run(&repo).await.unwrap();
        assert_eq!(turn.reply, "Enter velocity (m/sec or m/min):");
    }

    #[tokio::test]
    async fn restart_replies_with_the_acknowledgment() {
        let repo = InMemoryRepository::new();
        let session = session_at(ConversationState::AskForce);

        let turn = handle(&session, "restart").run(&repo).await.unwrap();
        assert_eq!(turn.reply, RESTART_REPLY);
        assert_eq!(turn.session, Session::new());
    }

    #[tokio::test]
    async fn messages_after_completion_nudge_towards_restart() {
        let repo = InMemoryRepository::new();
        let session = session_at(ConversationState::AskCurrency);
        let turn = handle(&session, "INR").run(&repo).await.unwrap();

        let after = handle(&turn.session, "thanks").run(&repo).await.unwrap();
        assert_eq!(
            after.reply,
            "Session complete. Type \"restart\" to size another absorber."
        );
        assert_eq!(after.session, turn.session);
        // still exactly one record from the one completed conversation
        assert_eq!(repo.records().len(), 1);
    }

    #[tokio::test]
    async fn corrupted_session_fails_fast_listing_every_hole() {
        let repo = InMemoryRepository::new();
        // terminal-entry answer on a session whose earlier inputs vanished
        let session = Session {
            state: ConversationState::AskCurrency,
            inputs: InputSet::new(),
        };

        let error = handle(&session, "INR").run(&repo).await.unwrap_err();
        let message = error.to_string();
        for field in ["scenario", "mass", "velocity", "cycles", "force", "stroke", "absorbers"] {
            assert!(message.contains(field), "missing {:?} in {:?}", field, message);
        }
        assert!(!message.contains("currency"));
        assert!(repo.records().is_empty());
    }
}
