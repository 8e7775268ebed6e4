//! Axial fan data.
//!
//! A fan enters a cooling system calculation in two ways:
//!
//! - Its pressure-flow characteristic, a [`FanCurve`] parsed from a
//!   manufacturer datasheet export, decides how much air it pushes through a
//!   given heat sink.
//! - Its mechanical envelope, a [`FanSpec`] from the static [`catalog`],
//!   adds fan and duct volume to the assembly.
//!
//! Curves are loaded once per fan identifier into a [`FanLibrary`] and never
//! change afterwards.
//!
//! # Example
//!
//! ```
//! use heat_sink_models::support::fan::{FanCurve, catalog};
//! use uom::si::{pressure::pascal, volume_rate::cubic_meter_per_second};
//!
//! let curve = FanCurve::parse("CFM;inH2O\n0,0;0,20\n4,2;0,10\n8,4;0,01\n").unwrap();
//!
//! // The last sample is the free-flow point.
//! assert_eq!(curve.pressure()[2].get::<pascal>(), 0.0);
//! assert_eq!(curve.flow()[1].get::<cubic_meter_per_second>(), 4.2 / 2118.8799);
//!
//! let spec = catalog::lookup("orion_od4010m.csv").unwrap();
//! assert_eq!(spec.model(), "od4010m");
//! ```

pub mod catalog;
mod curve;
mod error;
mod library;

pub use catalog::FanSpec;
pub use curve::{CFM_PER_CUBIC_METER_PER_SECOND, FanCurve, PASCAL_PER_INCH_WATER};
pub use error::FanCurveError;
pub use library::FanLibrary;

/// Strips an optional `.csv` suffix so datasheet file names and catalog
/// identifiers can be used interchangeably.
pub(crate) fn fan_id(name: &str) -> &str {
    name.strip_suffix(".csv").unwrap_or(name)
}
