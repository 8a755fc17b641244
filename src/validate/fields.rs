//! The eight field validators, one per question in conversation order.
//!
//! Mass and velocity accept an optional unit as the second whitespace token;
//! extra tokens are ignored. All other fields parse the whole message.

use super::RePrompt;
use crate::core::{
    Currency, FieldUpdate, MassInput, MassUnit, Scenario, VelocityInput, VelocityUnit,
    VALID_ABSORBER_COUNTS, VALID_STROKES_MM,
};

pub fn scenario(raw: &str) -> Result<FieldUpdate, RePrompt> {
    if raw == "1" {
        Ok(FieldUpdate::Scenario(Scenario::MassWithPropellingForce))
    } else {
        Err(RePrompt::new(
            "Please select \"1\" for Mass with Propelling Force.",
        ))
    }
}

pub fn mass(raw: &str) -> Result<FieldUpdate, RePrompt> {
    let mut tokens = raw.split_whitespace();
    let value = tokens
        .next()
        .and_then(|token| token.parse::<f64>().ok())
        .ok_or_else(|| RePrompt::new("Invalid mass. Enter a number (e.g., \"50 kg\"):"))?;
    let unit = match tokens.next() {
        Some(token) => MassUnit::parse(token)
            .ok_or_else(|| RePrompt::new("Unit must be kg or tonne. Try again:"))?,
        None => MassUnit::default(),
    };
    Ok(FieldUpdate::Mass(MassInput { value, unit }))
}

pub fn velocity(raw: &str) -> Result<FieldUpdate, RePrompt> {
    let mut tokens = raw.split_whitespace();
    let value = tokens
        .next()
        .and_then(|token| token.parse::<f64>().ok())
        .ok_or_else(|| RePrompt::new("Invalid velocity. Enter a number (e.g., \"2 m/sec\"):"))?;
    let unit = match tokens.next() {
        Some(token) => VelocityUnit::parse(token)
            .ok_or_else(|| RePrompt::new("Unit must be m/sec or m/min. Try again:"))?,
        None => VelocityUnit::default(),
    };
    Ok(FieldUpdate::Velocity(VelocityInput { value, unit }))
}

pub fn cycles(raw: &str) -> Result<FieldUpdate, RePrompt> {
    let value = raw
        .parse::<f64>()
        .map_err(|_| RePrompt::new("Invalid cycles. Enter a number:"))?;
    if value <= 0.0 {
        return Err(RePrompt::new("Cycles must be positive. Try again:"));
    }
    Ok(FieldUpdate::Cycles(value))
}

pub fn force(raw: &str) -> Result<FieldUpdate, RePrompt> {
    let value = raw
        .parse::<f64>()
        .map_err(|_| RePrompt::new("Invalid force. Enter a number:"))?;
    if value <= 0.0 {
        return Err(RePrompt::new("Force must be positive. Try again:"));
    }
    Ok(FieldUpdate::Force(value))
}

pub fn stroke(raw: &str) -> Result<FieldUpdate, RePrompt> {
    let value = raw
        .parse::<f64>()
        .map_err(|_| RePrompt::new("Invalid stroke. Enter a number:"))?;
    if !VALID_STROKES_MM.contains(&value) {
        return Err(RePrompt::new(format!(
            "Stroke must be one of [{}]. Try again:",
            join(&VALID_STROKES_MM)
        )));
    }
    Ok(FieldUpdate::Stroke(value))
}

pub fn absorbers(raw: &str) -> Result<FieldUpdate, RePrompt> {
    let value = raw
        .parse::<i64>()
        .map_err(|_| RePrompt::new("Invalid number. Enter 1, 2, 3, or 4:"))?;
    if !VALID_ABSORBER_COUNTS.contains(&value) {
        return Err(RePrompt::new(format!(
            "Number of absorbers must be one of [{}]. Try again:",
            join(&VALID_ABSORBER_COUNTS)
        )));
    }
    Ok(FieldUpdate::Absorbers(value))
}

pub fn currency(raw: &str) -> Result<FieldUpdate, RePrompt> {
    Currency::parse(raw)
        .map(FieldUpdate::Currency)
        .ok_or_else(|| RePrompt::new("Currency must be INR or USD. Try again:"))
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
