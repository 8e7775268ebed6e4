//! Sink-to-ambient thermal resistance at a given airflow.
//!
//! The convective part follows the combined entry region model for laminar
//! flow in rectangular channels. A blended Nusselt number yields the heat
//! transfer coefficient, which together with the fin efficiency gives an
//! effective area. The air temperature rise along the channel is captured by
//! an effectiveness form:
//!
//! ```text
//! R_conv = 1 / (ρ·c·V·(1 − exp(−h·A_eff / (ρ·c·V))))
//! ```
//!
//! Conduction through the baseplate is added in series.

use std::f64::consts::{E, PI};

use uom::si::{
    f64::{HeatTransfer, ThermodynamicTemperature, VolumeRate},
    heat_transfer::watt_per_square_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::ThermalResistance;

use super::{
    FluidConstants, Geometry, HeatSinkError, NumericError, ValidationError,
    channel::{
        apparent_fre, checked_aspect_ratio, forward_flow, fully_developed_fre,
        hydraulic_diameter_of,
    },
};

/// Thermal resistance with the intermediate quantities of the correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResistanceBreakdown {
    /// Conduction through the baseplate.
    pub baseplate: ThermalResistance,

    /// Convection from fins and base into the air stream.
    pub convection: ThermalResistance,

    pub prandtl: f64,
    pub nusselt: f64,
    pub heat_transfer_coefficient: HeatTransfer,
    pub fin_efficiency: f64,
}

impl ResistanceBreakdown {
    /// Sink-to-ambient resistance `R_th,sa`.
    #[must_use]
    pub fn total(&self) -> ThermalResistance {
        self.baseplate + self.convection
    }
}

/// Computes the sink-to-ambient thermal resistance.
///
/// # Errors
///
/// Returns [`HeatSinkError`] if the flow is not positive, the ambient
/// temperature puts the Prandtl number outside the correlation's range, the
/// channel shape factor is invalid, or a resistance is not a positive
/// finite number.
pub fn thermal_resistance(
    geometry: &Geometry,
    constants: &FluidConstants,
    ambient: ThermodynamicTemperature,
    flow: VolumeRate,
) -> Result<ResistanceBreakdown, HeatSinkError> {
    let v = forward_flow(flow)?;

    let d = geometry.dims();
    let c = constants.props();

    let baseplate = d.baseplate / (d.width * d.length * c.k_material);

    let prandtl = prandtl_number(ambient.get::<degree_celsius>())?;
    let epsilon = checked_aspect_ratio(&d)?.into_inner();
    let d_h = hydraulic_diameter_of(&d);
    let fre = apparent_fre(fully_developed_fre(epsilon), v, &d, c.mu);

    let uwt = uniform_wall_temperature(prandtl);
    let z_star = d.length * d.fins * c.mu / (prandtl * v);
    let m = blending_exponent(prandtl)?;

    let entry = (c.c4 * uwt / z_star.sqrt()).powf(m);
    let developed = (c.c1 * fre / (8.0 * PI.sqrt() * epsilon.powf(c.gamma))).powf(5.0);
    let developing = (c.c2 * c.c3 * (fre / z_star).powf(1.0 / 3.0)).powf(5.0);
    let nusselt = (entry + (developed + developing).powf(m / 5.0)).powf(1.0 / m);

    let h = nusselt * c.k_air / d_h;

    let fin_parameter = (h * 2.0 * (d.fin_thickness + d.length)
        / (c.k_material * d.fin_thickness * d.length))
        .sqrt()
        * d.channel_height;
    let fin_efficiency = fin_parameter.tanh() / fin_parameter;

    let effective_area =
        d.fins * (2.0 * d.channel_height * fin_efficiency + d.fin_spacing) * d.length;

    let capacity = c.rho * c.cp * v;
    let convection =
        1.0 / (capacity * (1.0 - E.powf(-h * effective_area / c.rho / c.cp / v)));

    Ok(ResistanceBreakdown {
        baseplate: resistance("baseplate resistance", baseplate)?,
        convection: resistance("convective resistance", convection)?,
        prandtl,
        nusselt,
        heat_transfer_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(h),
        fin_efficiency,
    })
}

/// Prandtl number of air at a temperature in degrees Celsius.
fn prandtl_number(celsius: f64) -> Result<f64, ValidationError> {
    let denominator = 1.1 * celsius.powf(3.0) - 1200.0 * celsius.powi(2)
        + 322_000.0 * celsius
        + 1.393 * 1e9;
    let prandtl = 1e9 / denominator;
    if prandtl < 0.1 {
        return Err(ValidationError::PrandtlBelowFloor { prandtl });
    }
    Ok(prandtl)
}

/// Boundary function for a uniform wall temperature.
fn uniform_wall_temperature(prandtl: f64) -> f64 {
    0.564 / (1.0 + (1.664 * prandtl.powf(1.0 / 6.0)).powf(9.0 / 2.0)).powf(2.0 / 9.0)
}

fn blending_exponent(prandtl: f64) -> Result<f64, ValidationError> {
    let exponent = 2.27 + 1.65 * prandtl.powf(1.0 / 3.0);
    if !(2.0..=7.0).contains(&exponent) {
        return Err(ValidationError::BlendingOutOfRange { exponent });
    }
    Ok(exponent)
}

fn resistance(quantity: &'static str, value: f64) -> Result<ThermalResistance, NumericError> {
    if !value.is_finite() {
        return Err(NumericError::NonPhysical { quantity, value });
    }
    ThermalResistance::new(value).map_err(|_| NumericError::NonPhysical { quantity, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::volume_rate::cubic_meter_per_second;

    use crate::models::thermal::heat_sink::core::test_support::reference_geometry;

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    fn flow(value: f64) -> VolumeRate {
        VolumeRate::new::<cubic_meter_per_second>(value)
    }

    #[test]
    fn reference_resistance() {
        let breakdown = thermal_resistance(
            &reference_geometry(),
            &FluidConstants::default(),
            celsius(25.0),
            flow(0.014),
        )
        .unwrap();

        assert_relative_eq!(
            breakdown.total().kelvin_per_watt(),
            0.464_429_828_729_064_96,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            breakdown.baseplate.kelvin_per_watt(),
            3e-3 / (40e-3 * 100e-3 * 210.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(breakdown.prandtl, 0.714_123_920_584_956_8, max_relative = 1e-12);
        assert_relative_eq!(breakdown.nusselt, 35.292_901_216_155_43, max_relative = 1e-10);
        assert_relative_eq!(breakdown.fin_efficiency, 0.813_673_741_057_505, max_relative = 1e-10);
    }

    #[test]
    fn hot_air_is_below_prandtl_floor() {
        let result = thermal_resistance(
            &reference_geometry(),
            &FluidConstants::default(),
            celsius(2500.0),
            flow(0.01),
        );

        assert!(matches!(
            result,
            Err(HeatSinkError::Validation(ValidationError::PrandtlBelowFloor { .. }))
        ));
    }

    #[test]
    fn blending_exponent_bounds() {
        assert_relative_eq!(blending_exponent(0.7).unwrap(), 2.27 + 1.65 * 0.7_f64.cbrt(), max_relative = 1e-14);
        assert!(matches!(
            blending_exponent(30.0),
            Err(ValidationError::BlendingOutOfRange { .. })
        ));
    }

    #[test]
    fn copper_conducts_better_than_aluminium() {
        use uom::si::{
            f64::{MassDensity, ThermalConductivity},
            mass_density::kilogram_per_cubic_meter,
            thermal_conductivity::watt_per_meter_kelvin,
        };

        let aluminium = FluidConstants::default();
        let copper = aluminium.with_material(
            ThermalConductivity::new::<watt_per_meter_kelvin>(401.0),
            MassDensity::new::<kilogram_per_cubic_meter>(8960.0),
        )
        .unwrap();
        let geometry = reference_geometry();

        let r_al = thermal_resistance(&geometry, &aluminium, celsius(25.0), flow(5e-3)).unwrap();
        let r_cu = thermal_resistance(&geometry, &copper, celsius(25.0), flow(5e-3)).unwrap();

        assert!(r_cu.total() < r_al.total());
        assert!(r_cu.fin_efficiency > r_al.fin_efficiency);
    }

    proptest! {
        #[test]
        fn more_airflow_never_raises_resistance(a in 1e-4..0.05_f64, b in 1e-4..0.05_f64) {
            let (low, high) = if a < b { (a, b) } else { (b, a) };
            let geometry = reference_geometry();
            let constants = FluidConstants::default();

            let r_low = thermal_resistance(&geometry, &constants, celsius(25.0), flow(low)).unwrap();
            let r_high = thermal_resistance(&geometry, &constants, celsius(25.0), flow(high)).unwrap();

            prop_assert!(r_high.total() <= r_low.total());
        }
    }
}
