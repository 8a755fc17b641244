//! Typed accumulation of the values collected during a conversation.
//!
//! A field is present in an [`InputSet`] if and only if its question has
//! been answered successfully. Values keep the unit they were entered in;
//! normalization happens in the calculation step.

use super::units::{MassUnit, VelocityUnit};
use serde::{Deserialize, Serialize};

/// Rated stroke lengths (mm) offered by the absorber range.
pub const VALID_STROKES_MM: [f64; 10] = [
    25.0, 50.0, 70.0, 75.0, 100.0, 125.0, 127.0, 150.0, 165.0, 200.0,
];

/// Supported absorber counts for a single installation.
pub const VALID_ABSORBER_COUNTS: [i64; 4] = [1, 2, 3, 4];

/// Default minimum operating temperature (deg C) applied to every session.
pub const DEFAULT_MIN_TEMPERATURE: f64 = 60.0;

/// The sizing scenario being walked through. A single scenario is supported
/// today; the enum keeps the door open without widening any signature.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    MassWithPropellingForce,
}

impl Scenario {
    /// Human-readable scenario label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MassWithPropellingForce => "Mass with Propelling Force",
        }
    }
}

/// Currency the quotation should be produced in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
}

impl Currency {
    /// Case-insensitive parse; the stored value is always uppercase.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "INR" => Some(Self::Inr),
            "USD" => Some(Self::Usd),
            _ => None,
        }
    }

    /// Normalized uppercase code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
        }
    }
}

/// A mass value as entered, with the unit it was typed in.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct MassInput {
    pub value: f64,
    pub unit: MassUnit,
}

impl MassInput {
    /// Canonical SI value.
    pub fn in_kilograms(&self) -> f64 {
        self.unit.to_kilograms(self.value)
    }
}

/// A velocity value as entered, with the unit it was typed in.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct VelocityInput {
    pub value: f64,
    pub unit: VelocityUnit,
}

impl VelocityInput {
    /// Canonical SI value.
    pub fn in_meters_per_second(&self) -> f64 {
        self.unit.to_meters_per_second(self.value)
    }
}

/// A single validated field ready to be merged into an [`InputSet`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FieldUpdate {
    Scenario(Scenario),
    Mass(MassInput),
    Velocity(VelocityInput),
    Cycles(f64),
    Force(f64),
    Stroke(f64),
    Absorbers(i64),
    Currency(Currency),
}

/// Progressively filled set of collected inputs.
///
/// `min_temperature` is a fixed default, not collected from the user, and is
/// therefore always present.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct InputSet {
    #[serde(default)]
    pub scenario: Option<Scenario>,
    #[serde(default)]
    pub mass: Option<MassInput>,
    #[serde(default)]
    pub velocity: Option<VelocityInput>,
    #[serde(default)]
    pub cycles: Option<f64>,
    #[serde(default)]
    pub force: Option<f64>,
    #[serde(default)]
    pub stroke: Option<f64>,
    #[serde(default)]
    pub absorbers: Option<i64>,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(default = "default_min_temperature")]
    pub min_temperature: f64,
}

fn default_min_temperature() -> f64 {
    DEFAULT_MIN_TEMPERATURE
}

impl Default for InputSet {
    fn default() -> Self {
        Self {
            scenario: None,
            mass: None,
            velocity: None,
            cycles: None,
            force: None,
            stroke: None,
            absorbers: None,
            currency: None,
            min_temperature: DEFAULT_MIN_TEMPERATURE,
        }
    }
}

impl InputSet {
    /// Empty set with the default minimum temperature.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one validated field into the set.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Scenario(scenario) => self.scenario = Some(scenario),
            FieldUpdate::Mass(mass) => self.mass = Some(mass),
            FieldUpdate::Velocity(velocity) => self.velocity = Some(velocity),
            FieldUpdate::Cycles(cycles) => self.cycles = Some(cycles),
            FieldUpdate::Force(force) => self.force = Some(force),
            FieldUpdate::Stroke(stroke) => self.stroke = Some(stroke),
            FieldUpdate::Absorbers(absorbers) => self.absorbers = Some(absorbers),
            FieldUpdate::Currency(currency) => self.currency = Some(currency),
        }
    }

    /// True when no collected field is present.
    pub fn is_empty(&self) -> bool {
        self.scenario.is_none()
            && self.mass.is_none()
            && self.velocity.is_none()
            && self.cycles.is_none()
            && self.force.is_none()
            && self.stroke.is_none()
            && self.absorbers.is_none()
            && self.currency.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_set_is_empty_with_default_temperature() {
        let inputs = InputSet::new();
        assert!(inputs.is_empty());
        assert_eq!(inputs.min_temperature, DEFAULT_MIN_TEMPERATURE);
    }

    #[test]
    fn apply_merges_each_field() {
        let mut inputs = InputSet::new();

        inputs.apply(FieldUpdate::Scenario(Scenario::MassWithPropellingForce));
        inputs.apply(FieldUpdate::Mass(MassInput {
            value: 5.0,
            unit: MassUnit::Tonne,
        }));
        inputs.apply(FieldUpdate::Velocity(VelocityInput {
            value: 120.0,
            unit: VelocityUnit::MetersPerMinute,
        }));
        inputs.apply(FieldUpdate::Cycles(100.0));
        inputs.apply(FieldUpdate::Force(500.0));
        inputs.apply(FieldUpdate::Stroke(100.0));
        inputs.apply(FieldUpdate::Absorbers(2));
        inputs.apply(FieldUpdate::Currency(Currency::Inr));

        assert!(!inputs.is_empty());
        assert_eq!(inputs.scenario, Some(Scenario::MassWithPropellingForce));
        assert_eq!(inputs.mass.unwrap().in_kilograms(), 5000.0);
        assert_eq!(inputs.velocity.unwrap().in_meters_per_second(), 2.0);
        assert_eq!(inputs.cycles, Some(100.0));
        assert_eq!(inputs.force, Some(500.0));
        assert_eq!(inputs.stroke, Some(100.0));
        assert_eq!(inputs.absorbers, Some(2));
        assert_eq!(inputs.currency, Some(Currency::Inr));
    }

    #[test]
    fn apply_overwrites_a_previous_value() {
        let mut inputs = InputSet::new();
        inputs.apply(FieldUpdate::Cycles(10.0));
        inputs.apply(FieldUpdate::Cycles(20.0));
        assert_eq!(inputs.cycles, Some(20.0));
    }

    #[test]
    fn currency_parses_case_insensitively() {
        assert_eq!(Currency::parse("inr"), Some(Currency::Inr));
        assert_eq!(Currency::parse("Usd"), Some(Currency::Usd));
        assert_eq!(Currency::parse("EUR"), None);
        assert_eq!(Currency::Inr.as_str(), "INR");
    }

    #[test]
    fn valid_sets_match_the_catalog() {
        assert_eq!(VALID_STROKES_MM.len(), 10);
        assert!(VALID_STROKES_MM.contains(&127.0));
        assert!(!VALID_STROKES_MM.contains(&99.0));
        assert_eq!(VALID_ABSORBER_COUNTS, [1, 2, 3, 4]);
    }

    #[test]
    fn input_set_round_trips_through_json() {
        let mut inputs = InputSet::new();
        inputs.apply(FieldUpdate::Mass(MassInput {
            value: 50.0,
            unit: MassUnit::Kilogram,
        }));
        inputs.apply(FieldUpdate::Currency(Currency::Usd));

        let json = serde_json::to_string(&inputs).unwrap();
        let decoded: InputSet = serde_json::from_str(&json).unwrap();
        assert_eq!(inputs, decoded);
    }
}
