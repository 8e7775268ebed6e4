//! Thermal-hydraulic engines for an extruded-fin heat sink.
//!
//! Every engine is a pure function of a validated [`Geometry`], the
//! [`FluidConstants`] and the inputs it names. Flows and pressures are
//! resolved by [`solve_operating_point`], which feeds the airflow into
//! [`thermal_resistance`].

mod channel;
mod constants;
mod error;
mod geometry;
mod hydraulic;
mod operating_point;
mod thermal;
mod volume;

#[cfg(test)]
pub(super) mod test_support;

pub use channel::{hydraulic_diameter, shape_factor};
pub use constants::{FluidConstants, FluidConstantsParams};
pub use error::{
    ConstantsError, GeometryError, HeatSinkError, NumericError, OperatingPointError,
    ValidationError,
};
pub use geometry::{Geometry, GeometryParams};
pub use hydraulic::{PressureDrop, pressure_drop, system_curve};
pub use operating_point::{
    Intersection, OperatingPoint, OperatingPointSolution, intersect, solve_operating_point,
};
pub use thermal::{ResistanceBreakdown, thermal_resistance};
pub use volume::{Volumes, boxed_volume, duct_volume, fan_volume, footprint, heat_sink_mass};
