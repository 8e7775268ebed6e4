//! Volume, mass and footprint of the fan, duct and sink assembly.

use uom::si::{
    area::square_meter,
    f64::{Area, Length, Mass, Volume},
    length::meter,
    mass::kilogram,
    volume::cubic_meter,
};

use crate::support::fan::FanSpec;

use super::{FluidConstants, Geometry, GeometryError};

/// Volumes of the three parts of a cooling system.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Volumes {
    /// Bounding box of the heat sink.
    pub heat_sink: Volume,
    pub fan: Volume,
    pub duct: Volume,
}

impl Volumes {
    /// Computes all volumes for a sink and fan.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::FanTooSmall`] if the fan does not cover the
    /// sink cross-section.
    pub fn new(geometry: &Geometry, fan: &FanSpec) -> Result<Self, GeometryError> {
        Ok(Self {
            heat_sink: boxed_volume(geometry),
            fan: fan_volume(fan),
            duct: duct_volume(geometry, fan)?,
        })
    }

    #[must_use]
    pub fn total(&self) -> Volume {
        self.heat_sink + self.fan + self.duct
    }
}

/// Bounding box volume `L·b·(c + d)` of a heat sink.
#[must_use]
pub fn boxed_volume(geometry: &Geometry) -> Volume {
    let d = geometry.dims();
    Volume::new::<cubic_meter>(d.length * d.width * (d.channel_height + d.baseplate))
}

/// Volume of a fan's square frame.
#[must_use]
pub fn fan_volume(fan: &FanSpec) -> Volume {
    let frame = fan.frame_size().get::<meter>();
    Volume::new::<cubic_meter>(frame.powi(2) * fan.depth().get::<meter>())
}

/// Volume of the duct that widens from the sink to the fan frame.
///
/// The duct length follows from where the fan frame and the smaller sink
/// dimension meet the duct angle, and is never shorter than the minimum.
///
/// # Errors
///
/// Returns [`GeometryError::FanTooSmall`] if the fan frame is smaller than the
/// sink cross-section.
pub fn duct_volume(geometry: &Geometry, fan: &FanSpec) -> Result<Volume, GeometryError> {
    let d = geometry.dims();
    let frame = fan.frame_size().get::<meter>();
    let half_angle = (d.duct_angle / 2.0).tan();

    let narrow = d.width.min(d.channel_height);
    let length = (frame / 2.0) / half_angle - (narrow / 2.0) / half_angle;
    if length < 0.0 {
        return Err(GeometryError::FanTooSmall {
            frame_size: Length::new::<meter>(frame),
        });
    }
    let length = length.max(d.min_duct_length);

    Ok(Volume::new::<cubic_meter>(
        (frame + d.width) / 2.0 * (frame + d.channel_height) / 2.0 * length,
    ))
}

/// Metal mass of a heat sink, its bounding box less the air gaps.
#[must_use]
pub fn heat_sink_mass(geometry: &Geometry, constants: &FluidConstants) -> Mass {
    let d = geometry.dims();
    let boxed = boxed_volume(geometry).get::<cubic_meter>();
    let air = (d.fins - 1.0) * d.fin_spacing * d.channel_height * d.length;
    Mass::new::<kilogram>((boxed - air) * constants.props().rho_material)
}

/// Mounting footprint `b·L` of a heat sink.
#[must_use]
pub fn footprint(geometry: &Geometry) -> Area {
    let d = geometry.dims();
    Area::new::<square_meter>(d.width * d.length)
}
