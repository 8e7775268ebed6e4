//! Fan-cooled extruded-fin heat sink.
//!
//! A [`CoolingSystem`] answers "how well does this sink cool with that fan?"
//! It resolves where the fan curve meets the sink's hydraulic impedance,
//! then feeds that airflow into the thermal resistance correlation.
//!
//! The engines are also usable directly: [`pressure_drop`],
//! [`solve_operating_point`], [`thermal_resistance`] and the volumetric
//! helpers all take a validated [`Geometry`] and [`FluidConstants`].
//!
//! # Example
//!
//! ```
//! use heat_sink_models::models::thermal::heat_sink::{
//!     FluidConstants, Geometry, GeometryParams, thermal_resistance,
//! };
//! use uom::si::{
//!     angle::degree,
//!     f64::{Angle, Length, ThermodynamicTemperature, VolumeRate},
//!     length::millimeter,
//!     thermodynamic_temperature::degree_celsius,
//!     volume_rate::cubic_meter_per_second,
//! };
//!
//! let geometry = Geometry::new(GeometryParams {
//!     channel_height: Length::new::<millimeter>(30.0),
//!     width: Length::new::<millimeter>(40.0),
//!     length: Length::new::<millimeter>(100.0),
//!     baseplate: Length::new::<millimeter>(3.0),
//!     fin_count: 5,
//!     fin_thickness: Length::new::<millimeter>(1.0),
//!     duct_angle: Angle::new::<degree>(40.0),
//!     min_duct_length: Length::new::<millimeter>(5.0),
//! })
//! .unwrap();
//!
//! let r_th = thermal_resistance(
//!     &geometry,
//!     &FluidConstants::default(),
//!     ThermodynamicTemperature::new::<degree_celsius>(25.0),
//!     VolumeRate::new::<cubic_meter_per_second>(0.014),
//! )
//! .unwrap()
//! .total();
//!
//! assert!((r_th.kelvin_per_watt() - 0.4644).abs() < 1e-4);
//! ```

mod config;
pub(crate) mod core;
mod error;
mod evaluation;
pub mod search;

pub use self::core::{
    ConstantsError, FluidConstants, FluidConstantsParams, Geometry, GeometryError,
    GeometryParams, HeatSinkError, Intersection, NumericError, OperatingPoint,
    OperatingPointError, OperatingPointSolution, PressureDrop, ResistanceBreakdown,
    ValidationError, Volumes, boxed_volume, duct_volume, fan_volume, footprint, heat_sink_mass,
    hydraulic_diameter, intersect, pressure_drop, shape_factor, solve_operating_point,
    system_curve, thermal_resistance,
};
pub use config::{EvaluationConfig, ObjectiveCount, ObjectiveCountError};
pub use error::CoolingSystemError;
pub use evaluation::{Analysis, Design, Evaluation, InfeasibleReason, Objectives};

use twine_core::Model;
use uom::si::{f64::ThermodynamicTemperature, length::meter};

use crate::support::{
    fan::{FanCurve, FanLibrary, FanSpec, catalog},
    units::ThermalResistance,
};

/// A set of fans that can be paired with heat sink designs.
///
/// The [`Model`] implementation delegates to [`CoolingSystem::evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub struct CoolingSystem {
    constants: FluidConstants,
    fans: FanLibrary,
    config: EvaluationConfig,
}

impl CoolingSystem {
    /// Creates a cooling system with the default constants and configuration.
    #[must_use]
    pub fn new(fans: FanLibrary) -> Self {
        Self {
            constants: FluidConstants::default(),
            fans,
            config: EvaluationConfig::default(),
        }
    }

    #[must_use]
    pub fn with_constants(self, constants: FluidConstants) -> Self {
        Self { constants, ..self }
    }

    #[must_use]
    pub fn with_config(self, config: EvaluationConfig) -> Self {
        Self { config, ..self }
    }

    #[must_use]
    pub fn constants(&self) -> &FluidConstants {
        &self.constants
    }

    #[must_use]
    pub fn fans(&self) -> &FanLibrary {
        &self.fans
    }

    #[must_use]
    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Resolves the airflow a fan pushes through a sink.
    ///
    /// # Errors
    ///
    /// Returns [`CoolingSystemError`] if the fan is unknown or the operating
    /// point cannot be resolved.
    pub fn operating_point(
        &self,
        fan: &str,
        geometry: &Geometry,
    ) -> Result<OperatingPointSolution, CoolingSystemError> {
        let curve = self.curve(fan)?;
        Ok(solve_operating_point(geometry, &self.constants, curve)?)
    }

    /// Sink-to-ambient thermal resistance of a sink cooled by a fan.
    ///
    /// # Errors
    ///
    /// Returns [`CoolingSystemError`] if the fan is unknown or any engine
    /// fails.
    pub fn thermal_resistance(
        &self,
        fan: &str,
        geometry: &Geometry,
        ambient: ThermodynamicTemperature,
    ) -> Result<ThermalResistance, CoolingSystemError> {
        let solution = self.operating_point(fan, geometry)?;
        let breakdown = thermal_resistance(geometry, &self.constants, ambient, solution.point.flow)?;
        Ok(breakdown.total())
    }

    /// Computes everything known about a design.
    ///
    /// # Errors
    ///
    /// Returns [`CoolingSystemError`] if the fan is unknown or any engine
    /// fails. Unlike [`CoolingSystem::evaluate`], domain errors are not
    /// converted.
    pub fn analyze(&self, design: &Design) -> Result<Analysis, CoolingSystemError> {
        let (curve, spec) = self.fan(&design.fan)?;
        let geometry = Geometry::new(design.geometry_params(&self.config))
            .map_err(HeatSinkError::from)?;
        Ok(self.resolve(geometry, curve, spec, design.ambient)?)
    }

    /// Evaluates a design's objectives.
    ///
    /// Designs whose fin gap is at or below the configured minimum, and
    /// designs for which an engine raises a domain error, are
    /// [`Evaluation::Infeasible`].
    ///
    /// # Errors
    ///
    /// Returns [`CoolingSystemError::UnknownFan`] if the fan is unknown and
    /// [`CoolingSystemError::HeatSink`] for failures that are not domain
    /// errors.
    pub fn evaluate(&self, design: &Design) -> Result<Evaluation, CoolingSystemError> {
        let (curve, spec) = self.fan(&design.fan)?;

        let geometry = match Geometry::new(design.geometry_params(&self.config)) {
            Ok(geometry) => geometry,
            Err(error) => return Ok(Self::infeasible(design, HeatSinkError::from(error))),
        };

        let spacing = geometry.fin_spacing();
        if spacing <= self.config.min_fin_spacing {
            tracing::debug!(
                fan = %design.fan,
                spacing = spacing.get::<meter>(),
                "fin spacing below minimum, design infeasible"
            );
            return Ok(Evaluation::Infeasible(InfeasibleReason::FinSpacing { spacing }));
        }

        match self.resolve(geometry, curve, spec, design.ambient) {
            Ok(analysis) => Ok(Evaluation::Feasible(analysis.objectives())),
            Err(error) if error.is_domain() => Ok(Self::infeasible(design, error)),
            Err(error) => Err(error.into()),
        }
    }

    fn resolve(
        &self,
        geometry: Geometry,
        curve: &FanCurve,
        spec: &FanSpec,
        ambient: ThermodynamicTemperature,
    ) -> Result<Analysis, HeatSinkError> {
        let operating_point = solve_operating_point(&geometry, &self.constants, curve)?;
        let resistance =
            thermal_resistance(&geometry, &self.constants, ambient, operating_point.point.flow)?;
        let volumes = Volumes::new(&geometry, spec)?;

        Ok(Analysis {
            mass: heat_sink_mass(&geometry, &self.constants),
            footprint: footprint(&geometry),
            geometry,
            operating_point,
            resistance,
            volumes,
        })
    }

    fn infeasible(design: &Design, error: HeatSinkError) -> Evaluation {
        tracing::debug!(fan = %design.fan, %error, "design infeasible");
        Evaluation::Infeasible(InfeasibleReason::HeatSink(error))
    }

    fn curve(&self, id: &str) -> Result<&FanCurve, CoolingSystemError> {
        self.fans
            .get(id)
            .ok_or_else(|| CoolingSystemError::UnknownFan { id: id.to_owned() })
    }

    fn fan(&self, id: &str) -> Result<(&FanCurve, &'static FanSpec), CoolingSystemError> {
        let curve = self.curve(id)?;
        let spec = catalog::lookup(id).ok_or_else(|| CoolingSystemError::UnknownFan {
            id: id.to_owned(),
        })?;
        Ok((curve, spec))
    }
}

impl Model for CoolingSystem {
    type Input = Design;
    type Output = Evaluation;
    type Error = CoolingSystemError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.evaluate(input)
    }
}
