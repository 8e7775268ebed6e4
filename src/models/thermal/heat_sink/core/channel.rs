//! Air channel between two fins.
//!
//! Both the pressure drop and the heat transfer correlations work with the
//! friction factor–Reynolds product `fRe√A`, which avoids computing a
//! Reynolds number explicitly.

use std::f64::consts::PI;

use uom::si::{
    f64::{Length, VolumeRate},
    length::meter,
    volume_rate::cubic_meter_per_second,
};

use crate::support::constraint::{Constrained, StrictlyPositive, UnitIntervalLowerOpen};

use super::{NumericError, ValidationError, geometry::Dims};

/// Aspect ratio `ε = min(s, c) / max(s, c)` of a channel.
///
/// # Errors
///
/// Returns [`ValidationError::ShapeFactor`] if the ratio leaves `(0, 1]`.
pub fn shape_factor(
    geometry: &super::Geometry,
) -> Result<Constrained<f64, UnitIntervalLowerOpen>, ValidationError> {
    checked_aspect_ratio(&geometry.dims())
}

/// Hydraulic diameter `2·s·c / (s + c)` of a channel.
#[must_use]
pub fn hydraulic_diameter(geometry: &super::Geometry) -> Length {
    Length::new::<meter>(hydraulic_diameter_of(&geometry.dims()))
}

pub(super) fn aspect_ratio(d: &Dims) -> f64 {
    if d.fin_spacing < d.channel_height {
        d.fin_spacing / d.channel_height
    } else {
        d.channel_height / d.fin_spacing
    }
}

pub(super) fn checked_aspect_ratio(
    d: &Dims,
) -> Result<Constrained<f64, UnitIntervalLowerOpen>, ValidationError> {
    let epsilon = aspect_ratio(d);
    UnitIntervalLowerOpen::new(epsilon).map_err(|_| ValidationError::ShapeFactor { epsilon })
}

/// Forward air flow through the sink in m³/s.
pub(super) fn forward_flow(flow: VolumeRate) -> Result<f64, NumericError> {
    StrictlyPositive::new(flow)
        .map(|flow| flow.into_inner().get::<cubic_meter_per_second>())
        .map_err(|_| NumericError::NonPositiveFlow { flow })
}

pub(super) fn hydraulic_diameter_of(d: &Dims) -> f64 {
    2.0 * d.fin_spacing * d.channel_height / (d.fin_spacing + d.channel_height)
}

/// Fully developed `fRe√A` of a rectangular channel.
pub(super) fn fully_developed_fre(epsilon: f64) -> f64 {
    let denominator = epsilon.sqrt()
        * (1.0 + epsilon)
        * (1.0 - 192.0 / PI.powf(5.0) * epsilon * (PI / 2.0 / epsilon).tanh());
    12.0 / denominator
}

/// Flow-dependent `fRe√A` including the developing-flow contribution.
pub(super) fn apparent_fre(fully_developed: f64, flow: f64, d: &Dims, mu: f64) -> f64 {
    (11.8336 * flow / (d.length * d.fins * mu) + fully_developed.powi(2)).powf(0.5)
}
