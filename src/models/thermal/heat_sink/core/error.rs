use thiserror::Error;
use uom::si::f64::{Length, VolumeRate};

use crate::support::constraint::ConstraintError;

/// An input combination outside a correlation's calibrated range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    /// The Prandtl number polynomial fell below its validity floor.
    #[error("Prandtl number {prandtl} is below the correlation floor of 0.1")]
    PrandtlBelowFloor { prandtl: f64 },

    /// The Nusselt blending exponent left `[2, 7]`.
    #[error("blending exponent {exponent} is outside [2, 7], check the Prandtl number")]
    BlendingOutOfRange { exponent: f64 },

    /// The channel aspect ratio is outside `(0, 1]`.
    #[error("shape factor {epsilon} is outside (0, 1]")]
    ShapeFactor { epsilon: f64 },
}

/// A physically unrealizable configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// A raw dimension violates its constraint.
    #[error("{field} is invalid: {source}")]
    Dimension {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// A heat sink needs at least one fin.
    #[error("fin count must be at least 1")]
    NoFins,

    /// The fins do not fit into the sink width.
    #[error("fin spacing {spacing:?} is not positive")]
    NonPositiveFinSpacing { spacing: Length },

    /// The channel is taller than the sink is wide, so no duct fits at the
    /// configured angle.
    #[error("duct length {length:?} is negative")]
    NegativeDuctLength { length: Length },

    /// The fan frame is smaller than the heat sink cross-section.
    #[error("fan frame {frame_size:?} is too small for the heat sink")]
    FanTooSmall { frame_size: Length },
}

/// A correlation coefficient or property that cannot describe real air or
/// metal.
///
/// Raised when [`FluidConstants`](super::FluidConstants) are built, never
/// while a design is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstantsError {
    #[error("{field} is invalid: {source}")]
    Property {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },
}

/// A numerical breakdown of a correlation for the given inputs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NumericError {
    /// The flow-dependent term of the duct friction factor is negative.
    #[error("duct friction flow term {value} is negative")]
    NegativeDuctFlowTerm { value: f64 },

    /// The duct friction factor is `NaN` or negative.
    #[error("duct friction factor {value} is not a positive number")]
    DuctFrictionFactor { value: f64 },

    /// The correlations are only defined for forward flow.
    #[error("volumetric flow {flow:?} is not positive")]
    NonPositiveFlow { flow: VolumeRate },

    /// A result is not finite or has the wrong sign.
    #[error("{quantity} evaluated to {value}")]
    NonPhysical { quantity: &'static str, value: f64 },
}

/// Errors raised while intersecting a system curve with a fan curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OperatingPointError {
    /// The curves never cross.
    #[error("system and fan curves do not cross")]
    NoCrossing,

    /// The curves cross more than once, so the operating point is ambiguous.
    #[error("system and fan curves cross {count} times")]
    MultipleCrossings { count: usize },

    /// A sample is `NaN` or infinite.
    #[error("sample {index} is not finite")]
    NonFinite { index: usize },

    /// The three sample vectors differ in length.
    #[error("sample counts differ: {flow} flow, {system} system, {fan} fan")]
    MismatchedLengths {
        flow: usize,
        system: usize,
        fan: usize,
    },

    /// At least two samples are needed to bracket a crossing.
    #[error("{count} samples given, at least 2 are required")]
    TooFewSamples { count: usize },

    /// Flow samples must be strictly ascending.
    #[error("flow is not strictly ascending at sample {index}")]
    NotAscending { index: usize },
}

impl OperatingPointError {
    /// Returns `true` if the curves are well formed but admit no unique
    /// operating point.
    ///
    /// The remaining kinds indicate malformed input and are defects in the
    /// caller.
    #[must_use]
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::NoCrossing | Self::MultipleCrossings { .. } | Self::NonFinite { .. }
        )
    }
}

/// Any failure of a heat sink calculation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum HeatSinkError {
    #[error("validity range exceeded")]
    Validation(#[from] ValidationError),

    #[error("infeasible geometry")]
    Geometry(#[from] GeometryError),

    #[error("numerical breakdown")]
    Numeric(#[from] NumericError),

    #[error("operating point not found")]
    OperatingPoint(#[from] OperatingPointError),
}

impl HeatSinkError {
    /// Returns `true` for the closed set of failures that mark a design as
    /// infeasible rather than a defect.
    #[must_use]
    pub fn is_domain(&self) -> bool {
        match self {
            Self::Validation(_) | Self::Geometry(_) | Self::Numeric(_) => true,
            Self::OperatingPoint(error) => error.is_domain(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_curves_are_not_domain_errors() {
        let defect = HeatSinkError::from(OperatingPointError::NotAscending { index: 3 });
        let ambiguous = HeatSinkError::from(OperatingPointError::MultipleCrossings { count: 2 });

        assert!(!defect.is_domain());
        assert!(ambiguous.is_domain());
        assert!(HeatSinkError::from(GeometryError::NoFins).is_domain());
    }
}
