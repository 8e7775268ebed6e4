//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (lengths, flows, pressures,
//! temperatures). [`uom`] has a thermal conductance (W/K) but no thermal
//! resistance, which is the quantity every heat sink result is reported in,
//! so [`ThermalResistance`] fills that gap.

use std::ops::Add;

use uom::si::{f64::ThermalConductance, thermal_conductance::watt_per_kelvin};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Temperature rise per unit of dissipated heat, in kelvin per watt.
///
/// The value is always strictly positive.
///
/// ```
/// use heat_sink_models::support::units::ThermalResistance;
///
/// let baseplate = ThermalResistance::new(0.05).unwrap();
/// let convection = ThermalResistance::new(0.4).unwrap();
/// assert_eq!((baseplate + convection).kelvin_per_watt(), 0.45);
///
/// assert!(ThermalResistance::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct ThermalResistance(f64);

impl ThermalResistance {
    /// Creates a thermal resistance from a value in K/W.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new(kelvin_per_watt: f64) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(StrictlyPositive::new(kelvin_per_watt)?))
    }

    /// Creates a thermal resistance from a pre-validated value in K/W.
    #[must_use]
    pub fn from_constrained(kelvin_per_watt: Constrained<f64, StrictlyPositive>) -> Self {
        Self(kelvin_per_watt.into_inner())
    }

    /// Returns the resistance in K/W.
    #[must_use]
    pub fn kelvin_per_watt(self) -> f64 {
        self.0
    }

    /// Returns the equivalent thermal conductance (W/K).
    #[must_use]
    pub fn conductance(self) -> ThermalConductance {
        ThermalConductance::new::<watt_per_kelvin>(1.0 / self.0)
    }
}

/// Resistances in series add.
impl Add for ThermalResistance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl TryFrom<f64> for ThermalResistance {
    type Error = crate::support::constraint::ConstraintError;

    fn try_from(kelvin_per_watt: f64) -> ConstraintResult<Self> {
        Self::new(kelvin_per_watt)
    }
}

impl From<ThermalResistance> for f64 {
    fn from(resistance: ThermalResistance) -> Self {
        resistance.0
    }
}
