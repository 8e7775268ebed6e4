//! Operating point of a fan pushing air through a heat sink.
//!
//! The system curve is sampled at the fan curve's flow samples, so both
//! curves share one abscissa. Where the sign of `system − fan` changes, the
//! two bracketing segments are intersected as straight lines.

use uom::si::{
    f64::{Pressure, VolumeRate},
    pressure::pascal,
    volume_rate::cubic_meter_per_second,
};

use crate::support::fan::FanCurve;

use super::{FluidConstants, Geometry, HeatSinkError, OperatingPointError, hydraulic::system_curve};

/// Flow and pressure at which fan and system curves meet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperatingPoint {
    pub flow: VolumeRate,
    pub pressure: Pressure,
}

/// An operating point with both curves, augmented by the crossing sample.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatingPointSolution {
    pub point: OperatingPoint,

    /// Shared flow samples, including the crossing.
    pub flow: Vec<VolumeRate>,

    /// System pressure drop at each flow sample.
    pub system: Vec<Pressure>,

    /// Fan pressure at each flow sample.
    pub fan: Vec<Pressure>,
}

/// Two sampled curves over a shared abscissa, augmented by their crossing.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    pub x: Vec<f64>,
    pub y1: Vec<f64>,
    pub y2: Vec<f64>,

    /// The crossing as `(x, y)`.
    pub crossing: (f64, f64),
}

/// Finds the single crossing of the curves `(x, y1)` and `(x, y2)`.
///
/// The crossing is inserted into all three vectors in order, unless it falls
/// exactly on a sample. In that case the sample itself is the crossing and
/// the vectors are returned unchanged.
///
/// # Errors
///
/// Returns [`OperatingPointError`] if the vectors are malformed or the curves
/// cross zero or several times.
pub fn intersect(x: &[f64], y1: &[f64], y2: &[f64]) -> Result<Intersection, OperatingPointError> {
    if x.len() != y1.len() || x.len() != y2.len() {
        return Err(OperatingPointError::MismatchedLengths {
            flow: x.len(),
            system: y1.len(),
            fan: y2.len(),
        });
    }
    if x.len() < 2 {
        return Err(OperatingPointError::TooFewSamples { count: x.len() });
    }
    if let Some(index) = (0..x.len()).find(|&i| {
        !x[i].is_finite() || !y1[i].is_finite() || !y2[i].is_finite()
    }) {
        return Err(OperatingPointError::NonFinite { index });
    }
    if let Some(index) = x.windows(2).position(|pair| pair[1] <= pair[0]) {
        return Err(OperatingPointError::NotAscending { index: index + 1 });
    }

    let signs: Vec<i8> = y1.iter().zip(y2).map(|(a, b)| sign(a - b)).collect();
    let changes: Vec<usize> = signs
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] != pair[1])
        .map(|(i, _)| i)
        .collect();

    match changes.as_slice() {
        [] => Err(OperatingPointError::NoCrossing),
        &[i] if signs[i + 1] == 0 => Ok(on_sample(x, y1, y2, i + 1)),
        &[i] if signs[i] == 0 => Ok(on_sample(x, y1, y2, i)),
        &[i] => Ok(interpolate(x, y1, y2, i)),
        &[i, j] if j == i + 1 && signs[j] == 0 && signs[i] == -signs[j + 1] => {
            Ok(on_sample(x, y1, y2, j))
        }
        many => Err(OperatingPointError::MultipleCrossings { count: many.len() }),
    }
}

/// Resolves the operating point of a fan on a heat sink.
///
/// # Errors
///
/// Returns [`HeatSinkError`] if the system curve cannot be evaluated at a
/// fan flow sample or the curves do not have a single crossing.
pub fn solve_operating_point(
    geometry: &Geometry,
    constants: &FluidConstants,
    fan: &FanCurve,
) -> Result<OperatingPointSolution, HeatSinkError> {
    let system = system_curve(geometry, constants, fan.flow())?;

    let x: Vec<f64> = fan.flow().iter().map(|q| q.get::<cubic_meter_per_second>()).collect();
    let y1: Vec<f64> = system.iter().map(|p| p.get::<pascal>()).collect();
    let y2: Vec<f64> = fan.pressure().iter().map(|p| p.get::<pascal>()).collect();

    let intersection = intersect(&x, &y1, &y2)?;
    let (flow, pressure) = intersection.crossing;
    tracing::trace!(flow, pressure, "resolved operating point");

    Ok(OperatingPointSolution {
        point: OperatingPoint {
            flow: VolumeRate::new::<cubic_meter_per_second>(flow),
            pressure: Pressure::new::<pascal>(pressure),
        },
        flow: intersection
            .x
            .into_iter()
            .map(VolumeRate::new::<cubic_meter_per_second>)
            .collect(),
        system: intersection.y1.into_iter().map(Pressure::new::<pascal>).collect(),
        fan: intersection.y2.into_iter().map(Pressure::new::<pascal>).collect(),
    })
}

fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

fn on_sample(x: &[f64], y1: &[f64], y2: &[f64], i: usize) -> Intersection {
    Intersection {
        x: x.to_vec(),
        y1: y1.to_vec(),
        y2: y2.to_vec(),
        crossing: (x[i], y1[i]),
    }
}

fn interpolate(x: &[f64], y1: &[f64], y2: &[f64], i: usize) -> Intersection {
    let dx = x[i + 1] - x[i];
    let m1 = (y1[i + 1] - y1[i]) / dx;
    let m2 = (y2[i + 1] - y2[i]) / dx;
    let t1 = y1[i] - m1 * x[i];
    let t2 = y2[i] - m2 * x[i];

    let x_cross = (t2 - t1) / (m1 - m2);
    let y_cross = m1 * x_cross + t1;

    let insert = |values: &[f64], value: f64| {
        let mut augmented = Vec::with_capacity(values.len() + 1);
        augmented.extend_from_slice(&values[..=i]);
        augmented.push(value);
        augmented.extend_from_slice(&values[i + 1..]);
        augmented
    };

    Intersection {
        x: insert(x, x_cross),
        y1: insert(y1, y_cross),
        y2: insert(y2, y_cross),
        crossing: (x_cross, y_cross),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::thermal::heat_sink::core::test_support::reference_geometry;

    #[test]
    fn crossing_lines() {
        let result = intersect(&[0.0, 1.0], &[0.0, 1.0], &[1.0, 0.0]).unwrap();

        assert_eq!(result.x, vec![0.0, 0.5, 1.0]);
        assert_eq!(result.y1, vec![0.0, 0.5, 1.0]);
        assert_eq!(result.y2, vec![1.0, 0.5, 0.0]);
        assert_eq!(result.crossing, (0.5, 0.5));
    }

    #[test]
    fn crossing_in_later_segment() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let system = [0.0, 1.0, 4.0, 9.0];
        let fan = [6.0, 5.0, 3.0, 0.0];

        let result = intersect(&x, &system, &fan).unwrap();

        assert_relative_eq!(result.crossing.0, 1.8);
        assert_relative_eq!(result.crossing.1, 3.4);
        assert_eq!(result.x.len(), 5);
        assert_eq!(result.x[2], result.crossing.0);
    }

    #[test]
    fn crossing_exactly_on_a_sample() {
        let result = intersect(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], &[2.0, 1.0, 0.0]).unwrap();

        assert_eq!(result.crossing, (1.0, 1.0));
        assert_eq!(result.x, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn crossing_on_an_end_sample() {
        let x = [0.0, 1.0, 2.0];

        let last = intersect(&x, &[0.0, 1.0, 2.0], &[4.0, 3.0, 2.0]).unwrap();
        assert_eq!(last.crossing, (2.0, 2.0));
        assert_eq!(last.x, x);

        let first = intersect(&x, &[0.0, 1.0, 2.0], &[0.0, 0.5, 0.0]).unwrap();
        assert_eq!(first.crossing, (0.0, 0.0));
        assert_eq!(first.x, x);
        assert_eq!(first.y2, vec![0.0, 0.5, 0.0]);
    }

    #[test]
    fn no_crossing() {
        let result = intersect(&[0.0, 1.0, 2.0], &[5.0, 6.0, 7.0], &[4.0, 2.0, 0.0]);
        assert_eq!(result, Err(OperatingPointError::NoCrossing));
    }

    #[test]
    fn several_crossings_are_ambiguous() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let system = [0.0, 2.0, 0.0, 2.0];
        let fan = [1.0, 1.0, 1.0, 1.0];

        assert_eq!(
            intersect(&x, &system, &fan),
            Err(OperatingPointError::MultipleCrossings { count: 3 })
        );
    }

    #[test]
    fn touching_without_crossing_is_ambiguous() {
        let result = intersect(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], &[1.0, 1.0, 1.0]);
        assert_eq!(result, Err(OperatingPointError::MultipleCrossings { count: 2 }));
    }

    #[test]
    fn malformed_input() {
        assert_eq!(
            intersect(&[0.0, 1.0], &[0.0], &[1.0, 0.0]),
            Err(OperatingPointError::MismatchedLengths {
                flow: 2,
                system: 1,
                fan: 2
            })
        );
        assert_eq!(
            intersect(&[0.0], &[0.0], &[1.0]),
            Err(OperatingPointError::TooFewSamples { count: 1 })
        );
        assert_eq!(
            intersect(&[0.0, 1.0], &[0.0, f64::NAN], &[1.0, 0.0]),
            Err(OperatingPointError::NonFinite { index: 1 })
        );
        assert_eq!(
            intersect(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0], &[2.0, 1.0, 0.0]),
            Err(OperatingPointError::NotAscending { index: 2 })
        );
    }

    #[test]
    fn fan_on_reference_sink() {
        let flow = [0.0, 2e-3, 4e-3, 6e-3].map(VolumeRate::new::<cubic_meter_per_second>);
        let pressure = [40.0, 30.0, 15.0, 0.0].map(Pressure::new::<pascal>);
        let fan = FanCurve::from_samples(flow.to_vec(), pressure.to_vec()).unwrap();

        let solution =
            solve_operating_point(&reference_geometry(), &FluidConstants::default(), &fan).unwrap();

        let q = solution.point.flow.get::<cubic_meter_per_second>();
        assert!(q > 2e-3 && q < 6e-3);
        assert_eq!(solution.flow.len(), 5);
        assert_eq!(solution.system[0].get::<pascal>(), 0.0);
        assert_eq!(solution.system.len(), solution.fan.len());
        assert!(solution.flow.windows(2).all(|pair| pair[1] > pair[0]));
    }
}
