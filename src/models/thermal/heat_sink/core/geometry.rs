//! Heat sink geometry records.

use std::f64::consts::FRAC_PI_2;

use uom::si::{
    angle::radian,
    f64::{Angle, Length},
    length::meter,
};

use crate::support::constraint::{ConstraintError, NonNegative, StrictlyPositive};

use super::GeometryError;

/// Raw dimensions of an extruded-fin heat sink and its inlet duct.
///
/// The fin spacing is not part of the raw record; it follows from the other
/// fields and is attached exactly once by [`Geometry::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryParams {
    /// Fin height, which is also the height of each air channel.
    pub channel_height: Length,

    /// Sink width across the fins.
    pub width: Length,

    /// Sink length in the flow direction.
    pub length: Length,

    /// Baseplate thickness.
    pub baseplate: Length,

    pub fin_count: u32,

    pub fin_thickness: Length,

    /// Half-angle of the inlet duct between fan and sink.
    pub duct_angle: Angle,

    /// Shortest duct that is ever built.
    pub min_duct_length: Length,
}

/// A validated geometry with its derived fin spacing.
///
/// Engines read the fin spacing from here and never recompute it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    params: GeometryParams,
    fin_spacing: Length,
}

impl Geometry {
    /// Validates the raw dimensions and derives the fin spacing
    /// `s = (b − (n + 1)·t) / n`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] if a dimension is not strictly positive, the
    /// duct angle is not below a right angle, there are no fins, or the fins
    /// leave no gap between them.
    pub fn new(params: GeometryParams) -> Result<Self, GeometryError> {
        positive("channel height", params.channel_height)?;
        positive("width", params.width)?;
        positive("length", params.length)?;
        positive("baseplate", params.baseplate)?;
        positive("fin thickness", params.fin_thickness)?;
        positive("duct angle", params.duct_angle)?;
        if params.duct_angle.get::<radian>() >= FRAC_PI_2 {
            return Err(GeometryError::Dimension {
                field: "duct angle",
                source: ConstraintError::AboveMaximum,
            });
        }
        NonNegative::new(params.min_duct_length).map_err(|source| GeometryError::Dimension {
            field: "minimum duct length",
            source,
        })?;

        if params.fin_count == 0 {
            return Err(GeometryError::NoFins);
        }

        let fin_spacing = Length::new::<meter>(fin_spacing(&params));
        if fin_spacing.get::<meter>() <= 0.0 {
            return Err(GeometryError::NonPositiveFinSpacing {
                spacing: fin_spacing,
            });
        }

        Ok(Self {
            params,
            fin_spacing,
        })
    }

    /// The raw record this geometry was built from.
    #[must_use]
    pub fn params(&self) -> &GeometryParams {
        &self.params
    }

    #[must_use]
    pub fn channel_height(&self) -> Length {
        self.params.channel_height
    }

    #[must_use]
    pub fn width(&self) -> Length {
        self.params.width
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.params.length
    }

    #[must_use]
    pub fn baseplate(&self) -> Length {
        self.params.baseplate
    }

    #[must_use]
    pub fn fin_count(&self) -> u32 {
        self.params.fin_count
    }

    #[must_use]
    pub fn fin_thickness(&self) -> Length {
        self.params.fin_thickness
    }

    /// Clear gap between two neighboring fins.
    #[must_use]
    pub fn fin_spacing(&self) -> Length {
        self.fin_spacing
    }

    #[must_use]
    pub fn duct_angle(&self) -> Angle {
        self.params.duct_angle
    }

    #[must_use]
    pub fn min_duct_length(&self) -> Length {
        self.params.min_duct_length
    }

    /// Dimensions as plain SI numbers for the correlations.
    pub(super) fn dims(&self) -> Dims {
        let p = &self.params;
        Dims {
            channel_height: p.channel_height.get::<meter>(),
            width: p.width.get::<meter>(),
            length: p.length.get::<meter>(),
            baseplate: p.baseplate.get::<meter>(),
            fins: f64::from(p.fin_count),
            fin_thickness: p.fin_thickness.get::<meter>(),
            fin_spacing: self.fin_spacing.get::<meter>(),
            duct_angle: p.duct_angle.get::<radian>(),
            min_duct_length: p.min_duct_length.get::<meter>(),
        }
    }
}

/// Geometry in metres and radians.
#[derive(Debug, Clone, Copy)]
pub(super) struct Dims {
    pub channel_height: f64,
    pub width: f64,
    pub length: f64,
    pub baseplate: f64,
    pub fins: f64,
    pub fin_thickness: f64,
    pub fin_spacing: f64,
    pub duct_angle: f64,
    pub min_duct_length: f64,
}

fn fin_spacing(params: &GeometryParams) -> f64 {
    let n = f64::from(params.fin_count);
    let b = params.width.get::<meter>();
    let t = params.fin_thickness.get::<meter>();
    (b - (n + 1.0) * t) / n
}

fn positive<Q>(field: &'static str, value: Q) -> Result<(), GeometryError>
where
    Q: PartialOrd + num_traits::Zero,
{
    StrictlyPositive::new(value)
        .map(|_| ())
        .map_err(|source| GeometryError::Dimension { field, source })
}
