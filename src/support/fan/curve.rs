use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use uom::si::{
    f64::{Pressure, VolumeRate},
    pressure::pascal,
    volume_rate::cubic_meter_per_second,
};

use crate::support::constraint::NonNegative;

use super::FanCurveError;

/// Cubic feet per minute in one cubic meter per second.
pub const CFM_PER_CUBIC_METER_PER_SECOND: f64 = 2118.8799;

/// Pascal per inch of water used when converting datasheet exports.
pub const PASCAL_PER_INCH_WATER: f64 = 500.0 / 2.0;

/// A fan's static pressure as a function of volumetric flow.
///
/// Samples are ordered by strictly ascending, non-negative flow. Pressure
/// normally falls with flow, but a rising segment (the stall region of an
/// axial fan) is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct FanCurve {
    flow: Vec<VolumeRate>,
    pressure: Vec<Pressure>,
}

impl FanCurve {
    /// Builds a curve from samples already in SI units.
    ///
    /// The samples are used as given; no free-flow point is forced.
    ///
    /// # Errors
    ///
    /// Returns [`FanCurveError`] if the sample counts differ, fewer than two
    /// samples are given, any sample is not finite, or flow is negative or
    /// not strictly ascending.
    pub fn from_samples(
        flow: Vec<VolumeRate>,
        pressure: Vec<Pressure>,
    ) -> Result<Self, FanCurveError> {
        if flow.len() != pressure.len() {
            return Err(FanCurveError::MismatchedLengths {
                flow: flow.len(),
                pressure: pressure.len(),
            });
        }
        if flow.len() < 2 {
            return Err(FanCurveError::TooFewSamples { count: flow.len() });
        }

        for (index, (q, p)) in flow.iter().zip(&pressure).enumerate() {
            if !q.value.is_finite() || !p.value.is_finite() {
                return Err(FanCurveError::NonFinite { index });
            }
            NonNegative::new(*q).map_err(|_| FanCurveError::NegativeFlow { index })?;
        }

        if let Some(index) = flow.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(FanCurveError::NotAscending { index: index + 1 });
        }

        if let Some(index) = pressure.windows(2).position(|pair| pair[1] > pair[0]) {
            tracing::warn!(
                sample = index + 1,
                "fan pressure rises with flow; curve has a stall region"
            );
        }

        Ok(Self { flow, pressure })
    }

    /// Parses a datasheet export.
    ///
    /// The format is `;`-delimited with a decimal comma and one header row.
    /// Blank lines are ignored, including any before the header.
    /// Each data row holds the flow in cubic feet per minute and the static
    /// pressure in inches of water; further columns are ignored. The last
    /// pressure sample is set to exactly 0 Pa, the free-flow point.
    ///
    /// # Errors
    ///
    /// Returns [`FanCurveError`] on malformed rows or if the samples fail the
    /// checks of [`FanCurve::from_samples`].
    pub fn parse(text: &str) -> Result<Self, FanCurveError> {
        let mut flow = Vec::new();
        let mut pressure = Vec::new();

        let rows = text
            .lines()
            .enumerate()
            .map(|(index, row)| (index + 1, row.trim()))
            .filter(|(_, row)| !row.is_empty())
            .skip(1);

        for (line, row) in rows {
            let mut columns = row.split(';');
            let (Some(cfm), Some(inches)) = (columns.next(), columns.next()) else {
                return Err(FanCurveError::MissingColumn {
                    line,
                    content: row.to_owned(),
                });
            };

            let cfm = parse_decimal_comma(cfm, line)?;
            let inches = parse_decimal_comma(inches, line)?;

            flow.push(VolumeRate::new::<cubic_meter_per_second>(
                cfm / CFM_PER_CUBIC_METER_PER_SECOND,
            ));
            pressure.push(Pressure::new::<pascal>(inches * PASCAL_PER_INCH_WATER));
        }

        if let Some(last) = pressure.last_mut() {
            *last = Pressure::new::<pascal>(0.0);
        }

        Self::from_samples(flow, pressure)
    }

    /// Reads and parses a datasheet export.
    ///
    /// # Errors
    ///
    /// Returns [`FanCurveError`] on I/O failures or invalid content.
    pub fn from_reader(mut reader: impl BufRead) -> Result<Self, FanCurveError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Reads and parses a datasheet export from a file.
    ///
    /// # Errors
    ///
    /// Returns [`FanCurveError`] on I/O failures or invalid content.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FanCurveError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Flow samples in ascending order.
    #[must_use]
    pub fn flow(&self) -> &[VolumeRate] {
        &self.flow
    }

    /// Pressure samples, one per flow sample.
    #[must_use]
    pub fn pressure(&self) -> &[Pressure] {
        &self.pressure
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flow.len()
    }

    /// Always `false`; a valid curve has at least two samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flow.is_empty()
    }

    /// Flow at which the fan delivers no static pressure.
    #[must_use]
    pub fn free_flow(&self) -> VolumeRate {
        self.flow[self.flow.len() - 1]
    }
}

fn parse_decimal_comma(value: &str, line: usize) -> Result<f64, FanCurveError> {
    let trimmed = value.trim();
    trimmed
        .replace(',', ".")
        .parse()
        .map_err(|_| FanCurveError::InvalidNumber {
            line,
            value: trimmed.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const DATASHEET: &str = "\
Airflow (CFM);Static pressure (inH2O)
0,00;0,160
2,50;0,120
5,00;0,070
7,50;0,030
9,80;0,004
";

    #[test]
    fn converts_datasheet_units() {
        let curve = FanCurve::parse(DATASHEET).unwrap();

        assert_eq!(curve.len(), 5);
        assert_eq!(curve.flow()[0].get::<cubic_meter_per_second>(), 0.0);
        assert_eq!(
            curve.flow()[1].get::<cubic_meter_per_second>(),
            2.5 / 2118.8799
        );
        assert_relative_eq!(curve.pressure()[0].get::<pascal>(), 40.0);
        assert_relative_eq!(curve.pressure()[2].get::<pascal>(), 17.5);
    }

    #[test]
    fn forces_free_flow_point() {
        let curve = FanCurve::parse(DATASHEET).unwrap();

        assert_eq!(curve.pressure()[4].get::<pascal>(), 0.0);
        assert_eq!(
            curve.free_flow().get::<cubic_meter_per_second>(),
            9.8 / 2118.8799
        );
    }

    #[test]
    fn skips_blank_lines_and_extra_columns() {
        let text = "flow;pressure;note\n\n1,0;0,1;peak\n  \n2,0;0,05;\n";
        let curve = FanCurve::parse(text).unwrap();

        assert_eq!(curve.len(), 2);
        assert_relative_eq!(curve.pressure()[0].get::<pascal>(), 25.0);
    }

    #[test]
    fn header_may_follow_blank_lines() {
        let text = format!("\n  \n{DATASHEET}");

        assert_eq!(
            FanCurve::parse(&text).unwrap(),
            FanCurve::parse(DATASHEET).unwrap()
        );
        assert!(matches!(
            FanCurve::parse("\nflow;pressure\n1,0\n"),
            Err(FanCurveError::MissingColumn { line: 3, .. })
        ));
    }

    #[test]
    fn reports_line_of_malformed_value() {
        let text = "flow;pressure\n1,0;0,1\n2,x;0,05\n";

        match FanCurve::parse(text) {
            Err(FanCurveError::InvalidNumber { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "2,x");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn reports_missing_column() {
        let text = "flow;pressure\n1,0\n";

        assert!(matches!(
            FanCurve::parse(text),
            Err(FanCurveError::MissingColumn { line: 2, .. })
        ));
    }

    #[test]
    fn header_only_has_too_few_samples() {
        assert!(matches!(
            FanCurve::parse("flow;pressure\n"),
            Err(FanCurveError::TooFewSamples { count: 0 })
        ));
    }

    #[test]
    fn rejects_unordered_flow() {
        let text = "flow;pressure\n1,0;0,1\n3,0;0,05\n2,0;0,0\n";

        assert!(matches!(
            FanCurve::parse(text),
            Err(FanCurveError::NotAscending { index: 2 })
        ));
    }

    #[test]
    fn rejects_negative_flow() {
        let flow = [-1e-3, 1e-3].map(VolumeRate::new::<cubic_meter_per_second>);
        let pressure = [10.0, 0.0].map(Pressure::new::<pascal>);

        assert!(matches!(
            FanCurve::from_samples(flow.to_vec(), pressure.to_vec()),
            Err(FanCurveError::NegativeFlow { index: 0 })
        ));
    }

    #[test]
    fn reads_from_buffer() {
        let curve = FanCurve::from_reader(DATASHEET.as_bytes()).unwrap();
        assert_eq!(curve, FanCurve::parse(DATASHEET).unwrap());
    }
}
