//! Hydraulic impedance of the duct and heat sink.
//!
//! The static pressure the fan has to overcome is the sum of three parts:
//!
//! - Channel: developing laminar flow between the fins plus the sudden
//!   contraction and expansion at the fin inlet and outlet.
//! - Duct: the transition from the sink cross-section towards the fan, with
//!   its own friction factor and an inlet loss.
//! - Acceleration: the frictionless change of flow area from the sink
//!   front face into the channels, which can be negative.

use std::f64::consts::SQRT_2;

use uom::si::{
    f64::{Length, Pressure, VolumeRate},
    length::meter,
    pressure::pascal,
    volume_rate::cubic_meter_per_second,
};

use super::{
    FluidConstants, Geometry, GeometryError, HeatSinkError, NumericError,
    channel::{
        apparent_fre, checked_aspect_ratio, forward_flow, fully_developed_fre,
        hydraulic_diameter_of,
    },
    constants::Props,
    geometry::Dims,
};

/// Static pressure drop split by cause.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PressureDrop {
    /// Friction and inlet/outlet losses of the fin channels.
    pub channel: Pressure,

    /// Friction and inlet loss of the duct.
    pub duct: Pressure,

    /// Acceleration into the reduced channel cross-section.
    pub acceleration: Pressure,
}

impl PressureDrop {
    #[must_use]
    pub fn total(&self) -> Pressure {
        self.acceleration + self.duct + self.channel
    }
}

/// Computes the pressure drop across duct and heat sink at a given flow.
///
/// # Errors
///
/// Returns [`HeatSinkError`] if the flow is not positive, the channel shape
/// factor is invalid, the duct does not fit, or the duct friction
/// correlation breaks down.
pub fn pressure_drop(
    geometry: &Geometry,
    constants: &FluidConstants,
    flow: VolumeRate,
) -> Result<PressureDrop, HeatSinkError> {
    let v = forward_flow(flow)?;

    let d = geometry.dims();
    let c = constants.props();

    let epsilon = checked_aspect_ratio(&d)?.into_inner();
    let d_h = hydraulic_diameter_of(&d);
    let (k_se, k_sc) = loss_coefficients(&d);
    let fre = apparent_fre(fully_developed_fre(epsilon), v, &d, c.mu);

    let u_channel = v / d.fins / d.fin_spacing / d.channel_height;
    let f_app = d.fins * c.mu * (d.channel_height * d.fin_spacing).sqrt() * fre / v;
    let channel = (f_app * d.length / d_h + k_se + k_sc) * (c.rho / 2.0 * u_channel.powi(2));

    let duct_d_h =
        2.0 * d.width * (d.width + d.channel_height) / (3.0 * d.width + d.channel_height);
    let duct_length = duct_length(&d)?;
    let u_duct = v / d.width / d.channel_height;
    let f_duct = duct_friction(&d, &c, v, fre)?;
    let duct = (f_duct * duct_length / duct_d_h / 4.0 + c.k_venturi) * (c.rho / 2.0 * u_duct.powi(2));

    let area_term = 1.0 / (d.fins * d.fin_spacing * d.channel_height).powi(2) - 1.0 / d.width.powf(4.0);
    let acceleration = area_term * (c.rho / 2.0 * v.powi(2));

    Ok(PressureDrop {
        channel: Pressure::new::<pascal>(channel),
        duct: Pressure::new::<pascal>(duct),
        acceleration: Pressure::new::<pascal>(acceleration),
    })
}

/// Evaluates the total pressure drop at every flow sample.
///
/// Every loss term vanishes as the flow goes to zero, so a zero flow sample
/// maps to exactly 0 Pa.
///
/// # Errors
///
/// Returns the first [`HeatSinkError`] raised by [`pressure_drop`].
pub fn system_curve(
    geometry: &Geometry,
    constants: &FluidConstants,
    flows: &[VolumeRate],
) -> Result<Vec<Pressure>, HeatSinkError> {
    flows
        .iter()
        .map(|&flow| {
            if flow.get::<cubic_meter_per_second>() == 0.0 {
                Ok(Pressure::new::<pascal>(0.0))
            } else {
                Ok(pressure_drop(geometry, constants, flow)?.total())
            }
        })
        .collect()
}

/// Sudden contraction and expansion coefficients at the fin inlet and outlet.
fn loss_coefficients(d: &Dims) -> (f64, f64) {
    let open = (1.0 - (d.fins + 1.0) * d.fin_thickness / d.width).powi(2);
    let contraction = (1.0 - open).powi(2);
    let expansion = 0.42 * (1.0 - open);
    (contraction, expansion)
}

/// Duct length at the configured angle, never shorter than the minimum.
fn duct_length(d: &Dims) -> Result<f64, GeometryError> {
    let length = (d.width - d.channel_height) / 2.0 / d.duct_angle.tan();
    if length < 0.0 {
        return Err(GeometryError::NegativeDuctLength {
            length: Length::new::<meter>(length),
        });
    }
    Ok(length.max(d.min_duct_length))
}

fn duct_friction(d: &Dims, c: &Props, v: f64, fre: f64) -> Result<f64, NumericError> {
    let viscous = c.mu * (d.width * (d.width + d.channel_height)).sqrt() / SQRT_2 / v;
    let developing =
        11.8336 * v * 2.0 * d.duct_angle.tan() / (d.width - d.channel_height) / c.mu;
    if developing < 0.0 {
        return Err(NumericError::NegativeDuctFlowTerm { value: developing });
    }

    let friction = viscous * (developing + fre.powi(2)).powf(0.5);
    if friction.is_nan() || friction < 0.0 {
        return Err(NumericError::DuctFrictionFactor { value: friction });
    }
    Ok(friction)
}
