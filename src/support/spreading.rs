//! Heat spreading from a small source into a larger plate.
//!
//! When a device footprint is smaller than the plate it is mounted on, heat
//! has to spread laterally before it reaches the rest of the thermal path.
//! The extra resistance this causes depends on the plate's size and
//! conductivity, and on how well the plate is cooled from below, which is
//! captured by the resistance of everything downstream of the plate.
//!
//! The closed-form constriction model below is evaluated in one pass:
//!
//! ```text
//! ε   = sqrt(A_s / A_p)
//! σ   = π + 1 / (sqrt(π)·ε)
//! τ   = d·sqrt(π / A_p)
//! Bi  = 1 / (R_0·k·sqrt(π·A_p))
//! φ   = (tanh(σ·τ) + σ/Bi) / (1 + (σ/Bi)·tanh(σ·τ))
//! ψ   = ½·(1 − ε)^1.5·φ
//! R_f = ψ / (k·sqrt(A_s))
//! R_m = d / (A_p·k)
//! ```

use std::f64::consts::PI;

use thiserror::Error;
use uom::si::{
    area::square_meter,
    f64::{Area, Length, ThermalConductivity},
    length::meter,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::{
    constraint::{ConstraintError, StrictlyPositive},
    units::ThermalResistance,
};

/// Errors raised when describing a spreading plate.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpreadingError {
    /// A material field violates its numeric constraint.
    #[error("{field} is invalid: {source}")]
    Field {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The heat source is larger than the plate it spreads into.
    #[error("source area {source_area:?} exceeds spread area {spread_area:?}")]
    SourceLargerThanPlate { source_area: Area, spread_area: Area },

    /// A resistance contribution is not a finite positive number.
    #[error("{quantity} resistance evaluated to {value}")]
    NonPhysical { quantity: &'static str, value: f64 },
}

impl SpreadingError {
    fn field(field: &'static str) -> impl Fn(ConstraintError) -> Self {
        move |source| Self::Field { field, source }
    }
}

/// A heat source mounted on a spreading plate.
///
/// The spread area is never smaller than the source area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadingMaterial {
    source_area: Area,
    spread_area: Area,
    conductivity: ThermalConductivity,
    thickness: Length,
}

impl SpreadingMaterial {
    /// Describes a spreading plate.
    ///
    /// # Errors
    ///
    /// Returns [`SpreadingError`] if any field is not strictly positive or if
    /// the source is larger than the plate.
    pub fn new(
        source_area: Area,
        spread_area: Area,
        conductivity: ThermalConductivity,
        thickness: Length,
    ) -> Result<Self, SpreadingError> {
        let source_area = StrictlyPositive::new(source_area)
            .map_err(SpreadingError::field("source area"))?
            .into_inner();
        let spread_area = StrictlyPositive::new(spread_area)
            .map_err(SpreadingError::field("spread area"))?
            .into_inner();
        let conductivity = StrictlyPositive::new(conductivity)
            .map_err(SpreadingError::field("conductivity"))?
            .into_inner();
        let thickness = StrictlyPositive::new(thickness)
            .map_err(SpreadingError::field("thickness"))?
            .into_inner();

        if source_area > spread_area {
            return Err(SpreadingError::SourceLargerThanPlate {
                source_area,
                spread_area,
            });
        }

        Ok(Self {
            source_area,
            spread_area,
            conductivity,
            thickness,
        })
    }

    /// Heat source footprint.
    #[must_use]
    pub fn source_area(&self) -> Area {
        self.source_area
    }

    /// Plate area the heat spreads into.
    #[must_use]
    pub fn spread_area(&self) -> Area {
        self.spread_area
    }

    /// Plate thermal conductivity.
    #[must_use]
    pub fn conductivity(&self) -> ThermalConductivity {
        self.conductivity
    }

    /// Plate thickness.
    #[must_use]
    pub fn thickness(&self) -> Length {
        self.thickness
    }
}

/// Spreading resistance split into its two contributions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpreadingResistance {
    /// Constriction part caused by lateral spreading (`R_f`), absent when the
    /// source covers the whole plate.
    pub constriction: Option<ThermalResistance>,

    /// Planar conduction through the plate thickness (`R_m`).
    pub planar: ThermalResistance,
}

impl SpreadingResistance {
    /// Total spreading resistance `R_f + R_m`.
    #[must_use]
    pub fn total(&self) -> ThermalResistance {
        match self.constriction {
            Some(constriction) => constriction + self.planar,
            None => self.planar,
        }
    }
}

/// Computes the spreading resistance of a plate given the resistance of
/// everything downstream of it.
///
/// # Errors
///
/// Returns [`SpreadingError::NonPhysical`] if a contribution is not a finite
/// non-negative number, as happens for an infinite downstream resistance.
pub fn spreading_resistance(
    material: &SpreadingMaterial,
    downstream: ThermalResistance,
) -> Result<SpreadingResistance, SpreadingError> {
    let source_area = material.source_area.get::<square_meter>();
    let spread_area = material.spread_area.get::<square_meter>();
    let k = material.conductivity.get::<watt_per_meter_kelvin>();
    let thickness = material.thickness.get::<meter>();
    let r_0 = downstream.kelvin_per_watt();

    let planar = thickness / (spread_area * k);

    let epsilon = (source_area / spread_area).sqrt();
    let sigma = PI + 1.0 / (PI.sqrt() * epsilon);
    let biot = 1.0 / (r_0 * k * (PI * spread_area).sqrt());
    let tau = thickness * (PI / spread_area).sqrt();

    let phi = ((sigma * tau).tanh() + sigma / biot) / (1.0 + sigma / biot * (sigma * tau).tanh());
    let psi = 0.5 * (1.0 - epsilon).powf(1.5) * phi;

    let constriction = psi / k / source_area.sqrt();

    Ok(SpreadingResistance {
        constriction: if constriction == 0.0 {
            None
        } else {
            Some(resistance("constriction", constriction)?)
        },
        planar: resistance("planar", planar)?,
    })
}

fn resistance(quantity: &'static str, value: f64) -> Result<ThermalResistance, SpreadingError> {
    if !value.is_finite() {
        return Err(SpreadingError::NonPhysical { quantity, value });
    }
    ThermalResistance::new(value).map_err(|_| SpreadingError::NonPhysical { quantity, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn mosfet_on_copper(thickness: f64) -> SpreadingMaterial {
        let footprint = 4.04e-3 * 6.44e-3;
        SpreadingMaterial::new(
            Area::new::<square_meter>(footprint),
            Area::new::<square_meter>(2.0 * footprint),
            ThermalConductivity::new::<watt_per_meter_kelvin>(400.0),
            Length::new::<meter>(thickness),
        )
        .unwrap()
    }

    #[test]
    fn mosfet_footprint_regression() {
        let material = mosfet_on_copper(0.5e-3);
        let downstream = ThermalResistance::new(1.0).unwrap();

        let resistance = spreading_resistance(&material, downstream).unwrap();

        assert_relative_eq!(
            resistance.total().kelvin_per_watt(),
            0.103_594_850_586_995_19,
            max_relative = 1e-12
        );
    }

    #[test]
    fn equal_areas_leave_only_planar_conduction() {
        let area = Area::new::<square_meter>(1e-4);
        let material = SpreadingMaterial::new(
            area,
            area,
            ThermalConductivity::new::<watt_per_meter_kelvin>(200.0),
            Length::new::<meter>(2e-3),
        )
        .unwrap();

        let resistance =
            spreading_resistance(&material, ThermalResistance::new(0.5).unwrap()).unwrap();

        assert_eq!(resistance.constriction, None);
        assert_relative_eq!(resistance.planar.kelvin_per_watt(), 2e-3 / (1e-4 * 200.0));
        assert_eq!(resistance.total(), resistance.planar);
    }

    #[test]
    fn weaker_downstream_cooling_increases_constriction() {
        let material = mosfet_on_copper(0.3e-3);

        let cooled = |r_0: f64| {
            spreading_resistance(&material, ThermalResistance::new(r_0).unwrap()).unwrap()
        };
        let poorly_cooled = cooled(10.0);
        let well_cooled = cooled(0.1);

        assert!(poorly_cooled.constriction.unwrap() > well_cooled.constriction.unwrap());
        assert_eq!(well_cooled.planar, poorly_cooled.planar);
    }

    #[test]
    fn insulated_plate_has_no_finite_resistance() {
        let material = mosfet_on_copper(0.5e-3);
        let insulated = ThermalResistance::new(f64::INFINITY).unwrap();

        assert!(matches!(
            spreading_resistance(&material, insulated),
            Err(SpreadingError::NonPhysical {
                quantity: "constriction",
                ..
            })
        ));
    }

    #[test]
    fn rejects_source_larger_than_plate() {
        let result = SpreadingMaterial::new(
            Area::new::<square_meter>(2e-4),
            Area::new::<square_meter>(1e-4),
            ThermalConductivity::new::<watt_per_meter_kelvin>(400.0),
            Length::new::<meter>(1e-3),
        );

        assert!(matches!(
            result,
            Err(SpreadingError::SourceLargerThanPlate { .. })
        ));
    }

    #[test]
    fn rejects_zero_thickness() {
        let result = SpreadingMaterial::new(
            Area::new::<square_meter>(1e-4),
            Area::new::<square_meter>(2e-4),
            ThermalConductivity::new::<watt_per_meter_kelvin>(400.0),
            Length::new::<meter>(0.0),
        );

        assert_eq!(
            result,
            Err(SpreadingError::Field {
                field: "thickness",
                source: ConstraintError::Zero,
            })
        );
    }
}
