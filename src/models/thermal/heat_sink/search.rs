//! Multi-objective design search.
//!
//! The search itself is delegated to an external optimizer, seen here only
//! through the [`Study`] and [`Trial`] capabilities. Any ask/tell optimizer
//! (NSGA-II or similar) fits, including one that resumes from persisted
//! trials. This module supplies the objective function and the loop that
//! drives a study.

use thiserror::Error;
use uom::si::{
    f64::{Length, ThermodynamicTemperature},
    length::meter,
    thermodynamic_temperature::degree_celsius,
};

use super::{CoolingSystem, CoolingSystemError, Design};

/// A single trial that suggests parameter values.
pub trait Trial {
    /// Picks one of `choices`, which is never empty.
    fn suggest_categorical<'c>(&mut self, name: &str, choices: &'c [String]) -> &'c str;

    /// Picks a value in `[low, high]`.
    fn suggest_float(&mut self, name: &str, low: f64, high: f64) -> f64;

    /// Picks an integer in `[low, high]`.
    fn suggest_int(&mut self, name: &str, low: u32, high: u32) -> u32;
}

/// An optimizer that hands out trials and records their objectives.
pub trait Study {
    type Trial: Trial;

    fn ask(&mut self) -> Self::Trial;

    /// Records a finished trial. Infeasible trials carry `NaN` in every slot.
    fn tell(&mut self, trial: Self::Trial, values: &[f64]);
}

/// Inclusive bounds of a search dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<T> {
    pub low: T,
    pub high: T,
}

impl<T> Bounds<T> {
    pub const fn new(low: T, high: T) -> Self {
        Self { low, high }
    }
}

/// Ranges of every design parameter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchSpace {
    /// Fan identifiers to choose from.
    pub fans: Vec<String>,
    pub channel_height: Bounds<Length>,
    pub baseplate: Bounds<Length>,
    pub length: Bounds<Length>,
    pub width: Bounds<Length>,
    pub fin_thickness: Bounds<Length>,
    pub fin_count: Bounds<u32>,

    /// Ambient temperature every design is evaluated at.
    pub ambient: ThermodynamicTemperature,
}

impl SearchSpace {
    /// Search space over the given fans with the stock geometry ranges:
    /// 20–80 mm fin height and sink width, 80–200 mm length, 1–3 mm
    /// baseplate, 5–20 fins of 1–5 mm thickness, at 40 °C.
    pub fn new<I, S>(fans: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fans: fans.into_iter().map(Into::into).collect(),
            channel_height: Bounds::new(Length::new::<meter>(0.02), Length::new::<meter>(0.08)),
            baseplate: Bounds::new(Length::new::<meter>(0.001), Length::new::<meter>(0.003)),
            length: Bounds::new(Length::new::<meter>(0.08), Length::new::<meter>(0.20)),
            width: Bounds::new(Length::new::<meter>(0.02), Length::new::<meter>(0.08)),
            fin_thickness: Bounds::new(Length::new::<meter>(1e-3), Length::new::<meter>(5e-3)),
            fin_count: Bounds::new(5, 20),
            ambient: ThermodynamicTemperature::new::<degree_celsius>(40.0),
        }
    }
}

/// Errors that stop a search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("search space has no fans")]
    NoFans,

    #[error("design evaluation failed")]
    Evaluation(#[from] CoolingSystemError),
}

/// Counts of a finished search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub trials: usize,
    pub infeasible: usize,
}

/// Suggests a design from `trial` and returns its objective values.
///
/// # Errors
///
/// Returns [`SearchError`] if the space has no fans or the evaluation fails
/// with an error that does not mark the design infeasible.
pub fn objective(
    trial: &mut impl Trial,
    space: &SearchSpace,
    system: &CoolingSystem,
) -> Result<Vec<f64>, SearchError> {
    let design = suggest(trial, space)?;
    let evaluation = system.evaluate(&design)?;
    Ok(evaluation.values(system.config().objectives))
}

/// Runs `trials` trials of a study.
///
/// # Errors
///
/// Stops at the first [`SearchError`]; trials told so far stay recorded.
pub fn optimize<S: Study>(
    study: &mut S,
    space: &SearchSpace,
    system: &CoolingSystem,
    trials: usize,
) -> Result<SearchSummary, SearchError> {
    let mut summary = SearchSummary::default();
    for _ in 0..trials {
        let mut trial = study.ask();
        let values = objective(&mut trial, space, system)?;
        if values.iter().any(|value| value.is_nan()) {
            summary.infeasible += 1;
        }
        study.tell(trial, &values);
        summary.trials += 1;
    }
    tracing::debug!(
        trials = summary.trials,
        infeasible = summary.infeasible,
        "search finished"
    );
    Ok(summary)
}

fn suggest(trial: &mut impl Trial, space: &SearchSpace) -> Result<Design, SearchError> {
    if space.fans.is_empty() {
        return Err(SearchError::NoFans);
    }

    let fan = trial.suggest_categorical("fan", &space.fans).to_owned();
    let channel_height = suggest_length(trial, "channel_height", space.channel_height);
    let baseplate = suggest_length(trial, "baseplate", space.baseplate);
    let length = suggest_length(trial, "length", space.length);
    let width = suggest_length(trial, "width", space.width);
    let fin_thickness = suggest_length(trial, "fin_thickness", space.fin_thickness);
    let fin_count = trial.suggest_int("fin_count", space.fin_count.low, space.fin_count.high);

    Ok(Design {
        fan,
        channel_height,
        width,
        length,
        baseplate,
        fin_count,
        fin_thickness,
        ambient: space.ambient,
    })
}

fn suggest_length(trial: &mut impl Trial, name: &str, bounds: Bounds<Length>) -> Length {
    let value = trial.suggest_float(name, bounds.low.get::<meter>(), bounds.high.get::<meter>());
    Length::new::<meter>(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use uom::si::{
        f64::{Pressure, VolumeRate},
        pressure::pascal,
        volume_rate::cubic_meter_per_second,
    };

    use crate::{
        models::thermal::heat_sink::{EvaluationConfig, ObjectiveCount},
        support::fan::{FanCurve, FanLibrary},
    };

    /// Replays fixed values and records which parameters were asked for.
    struct ScriptedTrial {
        floats: HashMap<&'static str, f64>,
        fin_count: u32,
        asked: Vec<String>,
    }

    impl Trial for ScriptedTrial {
        fn suggest_categorical<'c>(&mut self, name: &str, choices: &'c [String]) -> &'c str {
            self.asked.push(name.to_owned());
            &choices[0]
        }

        fn suggest_float(&mut self, name: &str, low: f64, high: f64) -> f64 {
            self.asked.push(name.to_owned());
            self.floats.get(name).copied().unwrap_or(low).clamp(low, high)
        }

        fn suggest_int(&mut self, name: &str, low: u32, high: u32) -> u32 {
            self.asked.push(name.to_owned());
            self.fin_count.clamp(low, high)
        }
    }

    /// Alternates between a feasible design and one with crowded fins.
    #[derive(Default)]
    struct AlternatingStudy {
        asked: usize,
        told: Vec<Vec<f64>>,
    }

    impl Study for AlternatingStudy {
        type Trial = ScriptedTrial;

        fn ask(&mut self) -> ScriptedTrial {
            self.asked += 1;
            if self.asked % 2 == 1 {
                reference_trial()
            } else {
                ScriptedTrial {
                    fin_count: 20,
                    floats: HashMap::from([("width", 0.02), ("fin_thickness", 5e-3)]),
                    ..reference_trial()
                }
            }
        }

        fn tell(&mut self, _trial: ScriptedTrial, values: &[f64]) {
            self.told.push(values.to_vec());
        }
    }

    fn reference_trial() -> ScriptedTrial {
        ScriptedTrial {
            floats: HashMap::from([
                ("channel_height", 0.03),
                ("baseplate", 0.003),
                ("length", 0.1),
                ("width", 0.04),
                ("fin_thickness", 0.001),
            ]),
            fin_count: 5,
            asked: Vec::new(),
        }
    }

    fn system() -> CoolingSystem {
        let flow = [0.0, 2e-3, 4e-3, 6e-3].map(VolumeRate::new::<cubic_meter_per_second>);
        let pressure = [40.0, 30.0, 15.0, 0.0].map(Pressure::new::<pascal>);
        let mut fans = FanLibrary::new();
        fans.insert(
            "orion_od4010m",
            FanCurve::from_samples(flow.to_vec(), pressure.to_vec()).unwrap(),
        );
        CoolingSystem::new(fans)
    }

    #[test]
    fn objective_suggests_every_parameter_once() {
        let space = SearchSpace::new(["orion_od4010m"]);
        let mut trial = reference_trial();

        let values = objective(&mut trial, &space, &system()).unwrap();

        assert_eq!(
            trial.asked,
            [
                "fan",
                "channel_height",
                "baseplate",
                "length",
                "width",
                "fin_thickness",
                "fin_count"
            ]
        );
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(|value| value.is_finite()));
    }

    #[test]
    fn third_objective_is_footprint() {
        let space = SearchSpace::new(["orion_od4010m"]);
        let system = system().with_config(EvaluationConfig {
            objectives: ObjectiveCount::Three,
            ..EvaluationConfig::default()
        });

        let values = objective(&mut reference_trial(), &space, &system).unwrap();

        assert_eq!(values.len(), 3);
        approx::assert_relative_eq!(values[2], 0.04 * 0.1);
    }

    #[test]
    fn optimize_records_infeasible_trials_as_nan() {
        let space = SearchSpace::new(["orion_od4010m"]);
        let mut study = AlternatingStudy::default();

        let summary = optimize(&mut study, &space, &system(), 4).unwrap();

        assert_eq!(
            summary,
            SearchSummary {
                trials: 4,
                infeasible: 2
            }
        );
        assert!(study.told[0].iter().all(|value| value.is_finite()));
        assert!(study.told[1].iter().all(|value| value.is_nan()));
    }

    #[test]
    fn empty_space_and_unknown_fans_stop_the_search() {
        let mut study = AlternatingStudy::default();

        let empty = SearchSpace::new(Vec::<String>::new());
        assert_eq!(
            optimize(&mut study, &empty, &system(), 1),
            Err(SearchError::NoFans)
        );

        let unknown = SearchSpace::new(["orion_od6025h"]);
        assert!(matches!(
            optimize(&mut study, &unknown, &system(), 1),
            Err(SearchError::Evaluation(CoolingSystemError::UnknownFan { .. }))
        ));
        assert!(study.told.is_empty());
    }
}
