//! The deterministic calculation step.
//!
//! Runs exactly once per session, on entry into the terminal state. The
//! completeness check uses `Validation` to accumulate ALL missing fields
//! instead of stopping at the first, so a corrupted session is reported in
//! one pass.

use crate::core::InputSet;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A collected field the calculation requires but the session is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MissingInput {
    #[error("scenario")]
    Scenario,
    #[error("mass")]
    Mass,
    #[error("velocity")]
    Velocity,
    #[error("cycles")]
    Cycles,
    #[error("force")]
    Force,
    #[error("stroke")]
    Stroke,
    #[error("absorbers")]
    Absorbers,
    #[error("currency")]
    Currency,
}

/// Inputs normalized to the units the formulas expect: kilograms and meters
/// per second.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CalculationInput {
    pub mass_kg: f64,
    pub velocity_mps: f64,
    pub cycles_per_hour: f64,
    pub force_n: f64,
    pub stroke_mm: f64,
}

impl CalculationInput {
    /// Normalize a completed [`InputSet`].
    ///
    /// Every collected field is checked, including the ones the formulas do
    /// not consume — reaching the calculation with any hole means the
    /// session skipped a state, which the caller treats as fatal. Failures
    /// accumulate: the result names every missing field, not just the first.
    pub fn from_set(inputs: &InputSet) -> Validation<Self, NonEmptyVec<MissingInput>> {
        match (
            inputs.scenario,
            inputs.mass,
            inputs.velocity,
            inputs.cycles,
            inputs.force,
            inputs.stroke,
            inputs.absorbers,
            inputs.currency,
        ) {
            (
                Some(_),
                Some(mass),
                Some(velocity),
                Some(cycles),
                Some(force),
                Some(stroke),
                Some(_),
                Some(_),
            ) => Validation::success(Self {
                mass_kg: mass.in_kilograms(),
                velocity_mps: velocity.in_meters_per_second(),
                cycles_per_hour: cycles,
                force_n: force,
                stroke_mm: stroke,
            }),
            _ => {
                let checks: Vec<Validation<(), NonEmptyVec<MissingInput>>> = vec![
                    require(inputs.scenario.is_some(), MissingInput::Scenario),
                    require(inputs.mass.is_some(), MissingInput::Mass),
                    require(inputs.velocity.is_some(), MissingInput::Velocity),
                    require(inputs.cycles.is_some(), MissingInput::Cycles),
                    require(inputs.force.is_some(), MissingInput::Force),
                    require(inputs.stroke.is_some(), MissingInput::Stroke),
                    require(inputs.absorbers.is_some(), MissingInput::Absorbers),
                    require(inputs.currency.is_some(), MissingInput::Currency),
                ];
                Validation::all_vec(checks)
                    .map(|_| unreachable!("at least one input is missing in this arm"))
            }
        }
    }
}

fn require(present: bool, missing: MissingInput) -> Validation<(), NonEmptyVec<MissingInput>> {
    if present {
        Validation::success(())
    } else {
        Validation::fail(missing)
    }
}

/// Derived quantities for a completed session. Created once, consumed
/// immediately for the reply and the persisted record, never mutated.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Calculation {
    pub kinetic_energy: f64,
    pub potential_energy: f64,
    pub total_energy: f64,
    pub energy_per_hour: f64,
    pub impact_velocity: f64,
    pub emass_min: f64,
}

impl Calculation {
    /// Evaluate the fixed formula set. Pure: no randomness, no external
    /// state.
    ///
    /// `emass_min` keeps the literal kinetic-energy-over-velocity-squared
    /// form. Nothing upstream forbids a zero velocity, so that case divides
    /// zero by zero and yields NaN — carried through rather than guarded.
    pub fn evaluate(input: &CalculationInput) -> Self {
        let kinetic_energy = 0.5 * input.mass_kg * input.velocity_mps.powi(2);
        let potential_energy = input.force_n * (input.stroke_mm / 1000.0);
        let total_energy = kinetic_energy + potential_energy;
        Self {
            kinetic_energy,
            potential_energy,
            total_energy,
            energy_per_hour: total_energy * input.cycles_per_hour,
            impact_velocity: input.velocity_mps,
            emass_min: kinetic_energy / input.velocity_mps.powi(2),
        }
    }
}
