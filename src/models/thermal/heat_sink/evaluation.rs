use uom::si::{
    area::square_meter,
    f64::{Area, Length, Mass, ThermodynamicTemperature, Volume},
    volume::cubic_meter,
};

use crate::support::units::ThermalResistance;

use super::{
    EvaluationConfig, GeometryParams, ObjectiveCount,
    core::{Geometry, HeatSinkError, OperatingPointSolution, ResistanceBreakdown, Volumes},
};

/// One candidate cooling system: a fan, a sink and the ambient it runs in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Design {
    /// Fan identifier, with or without a `.csv` suffix.
    pub fan: String,
    pub channel_height: Length,
    pub width: Length,
    pub length: Length,
    pub baseplate: Length,
    pub fin_count: u32,
    pub fin_thickness: Length,
    pub ambient: ThermodynamicTemperature,
}

impl Design {
    /// Raw sink geometry with the duct settings taken from `config`.
    #[must_use]
    pub fn geometry_params(&self, config: &EvaluationConfig) -> GeometryParams {
        GeometryParams {
            channel_height: self.channel_height,
            width: self.width,
            length: self.length,
            baseplate: self.baseplate,
            fin_count: self.fin_count,
            fin_thickness: self.fin_thickness,
            duct_angle: config.duct_angle,
            min_duct_length: config.min_duct_length,
        }
    }
}

/// Objectives of a feasible design, all to be minimized.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objectives {
    /// Sink, fan and duct volume.
    pub total_volume: Volume,

    /// Sink-to-ambient thermal resistance.
    pub thermal_resistance: ThermalResistance,

    /// Mounting footprint of the sink.
    pub footprint: Area,
}

impl Objectives {
    /// Objective values in SI units: m³, K/W and, for three objectives, m².
    #[must_use]
    pub fn values(&self, count: ObjectiveCount) -> Vec<f64> {
        let mut values = vec![
            self.total_volume.get::<cubic_meter>(),
            self.thermal_resistance.kelvin_per_watt(),
        ];
        if count == ObjectiveCount::Three {
            values.push(self.footprint.get::<square_meter>());
        }
        values
    }
}

/// Why a design was judged infeasible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InfeasibleReason {
    /// The fin gap is at or below the configured minimum.
    FinSpacing { spacing: Length },

    /// A heat sink calculation failed with a domain error.
    HeatSink(HeatSinkError),
}

/// Outcome of evaluating a design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    Feasible(Objectives),
    Infeasible(InfeasibleReason),
}

impl Evaluation {
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible(_))
    }

    #[must_use]
    pub fn objectives(&self) -> Option<&Objectives> {
        match self {
            Self::Feasible(objectives) => Some(objectives),
            Self::Infeasible(_) => None,
        }
    }

    /// Objective vector for an optimizer, `NaN` in every slot when infeasible.
    #[must_use]
    pub fn values(&self, count: ObjectiveCount) -> Vec<f64> {
        match self {
            Self::Feasible(objectives) => objectives.values(count),
            Self::Infeasible(_) => vec![f64::NAN; count.get()],
        }
    }
}

/// Full result for one design.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub geometry: Geometry,
    pub operating_point: OperatingPointSolution,
    pub resistance: ResistanceBreakdown,
    pub volumes: Volumes,

    /// Metal mass of the sink.
    pub mass: Mass,
    pub footprint: Area,
}

impl Analysis {
    #[must_use]
    pub fn objectives(&self) -> Objectives {
        Objectives {
            total_volume: self.volumes.total(),
            thermal_resistance: self.resistance.total(),
            footprint: self.footprint,
        }
    }
}
