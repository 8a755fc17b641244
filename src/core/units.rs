//! Unit handling for mass and velocity inputs.
//!
//! Users may answer in either of two spellings per quantity. The value is
//! captured together with the unit it was typed in and only converted to
//! canonical SI units when the calculation runs.

use serde::{Deserialize, Serialize};

/// Unit a mass value was entered in.
///
/// # Example
///
/// ```rust
/// use shockbot::core::MassUnit;
///
/// assert_eq!(MassUnit::parse("tonne"), Some(MassUnit::Tonne));
/// assert_eq!(MassUnit::Tonne.to_kilograms(5.0), 5000.0);
/// assert_eq!(MassUnit::default(), MassUnit::Kilogram);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassUnit {
    #[default]
    Kilogram,
    Tonne,
}

impl MassUnit {
    /// Parse the unit token as the user types it. Spellings are exact.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "kg" => Some(Self::Kilogram),
            "tonne" => Some(Self::Tonne),
            _ => None,
        }
    }

    /// The token spelling accepted by [`MassUnit::parse`].
    pub fn token(&self) -> &'static str {
        match self {
            Self::Kilogram => "kg",
            Self::Tonne => "tonne",
        }
    }

    /// Convert a value in this unit to kilograms.
    pub fn to_kilograms(&self, value: f64) -> f64 {
        match self {
            Self::Kilogram => value,
            Self::Tonne => value * 1000.0,
        }
    }
}

/// Unit a velocity value was entered in.
///
/// # Example
///
/// ```rust
/// use shockbot::core::VelocityUnit;
///
/// assert_eq!(VelocityUnit::parse("m/min"), Some(VelocityUnit::MetersPerMinute));
/// assert_eq!(VelocityUnit::MetersPerMinute.to_meters_per_second(120.0), 2.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocityUnit {
    #[default]
    MetersPerSecond,
    MetersPerMinute,
}

impl VelocityUnit {
    /// Parse the unit token as the user types it. Spellings are exact.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "m/sec" => Some(Self::MetersPerSecond),
            "m/min" => Some(Self::MetersPerMinute),
            _ => None,
        }
    }

    /// The token spelling accepted by [`VelocityUnit::parse`].
    pub fn token(&self) -> &'static str {
        match self {
            Self::MetersPerSecond => "m/sec",
            Self::MetersPerMinute => "m/min",
        }
    }

    /// Convert a value in this unit to meters per second.
    pub fn to_meters_per_second(&self, value: f64) -> f64 {
        match self {
            Self::MetersPerSecond => value,
            Self::MetersPerMinute => value / 60.0,
        }
    }
}
