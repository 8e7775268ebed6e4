use thiserror::Error;
use uom::si::{
    angle::radian,
    f64::{Angle, Length},
    length::meter,
};

/// Number of objectives an evaluation reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum ObjectiveCount {
    /// Total volume and thermal resistance.
    #[default]
    Two,

    /// Total volume, thermal resistance and footprint area.
    Three,
}

impl ObjectiveCount {
    #[must_use]
    pub fn get(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// Only two or three objectives are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{count} objectives requested, expected 2 or 3")]
pub struct ObjectiveCountError {
    pub count: u8,
}

impl TryFrom<u8> for ObjectiveCount {
    type Error = ObjectiveCountError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        match count {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            count => Err(ObjectiveCountError { count }),
        }
    }
}

impl From<ObjectiveCount> for u8 {
    fn from(count: ObjectiveCount) -> Self {
        match count {
            ObjectiveCount::Two => 2,
            ObjectiveCount::Three => 3,
        }
    }
}

/// Settings shared by every design evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationConfig {
    pub objectives: ObjectiveCount,

    /// Half-angle of the duct between fan and sink.
    pub duct_angle: Angle,

    /// Shortest duct that is ever built.
    pub min_duct_length: Length,

    /// Designs with a fin gap at or below this are infeasible.
    pub min_fin_spacing: Length,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            objectives: ObjectiveCount::Two,
            duct_angle: Angle::new::<radian>(40_f64.to_radians()),
            min_duct_length: Length::new::<meter>(5e-3),
            min_fin_spacing: Length::new::<meter>(0.1e-3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objective_count_conversions() {
        assert_eq!(ObjectiveCount::try_from(3), Ok(ObjectiveCount::Three));
        assert_eq!(
            ObjectiveCount::try_from(4),
            Err(ObjectiveCountError { count: 4 })
        );
        assert_eq!(u8::from(ObjectiveCount::default()), 2);
        assert_eq!(ObjectiveCount::Three.get(), 3);
    }
}
