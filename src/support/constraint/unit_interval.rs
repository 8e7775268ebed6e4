use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing the lower-open unit interval `0 < x ≤ 1`.
///
/// Aspect ratios defined as `min / max` of two positive lengths live here.
///
/// # Examples
///
/// ```
/// use heat_sink_models::support::constraint::UnitIntervalLowerOpen;
///
/// assert!(UnitIntervalLowerOpen::new(1.0).is_ok());
/// assert!(UnitIntervalLowerOpen::new(0.2).is_ok());
/// assert!(UnitIntervalLowerOpen::new(0.0).is_err());
/// assert!(UnitIntervalLowerOpen::new(1.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalLowerOpen;

impl UnitIntervalLowerOpen {
    /// Constructs a [`Constrained<f64, UnitIntervalLowerOpen>`] if `0 < value ≤ 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is outside the interval or `NaN`.
    pub fn new(value: f64) -> Result<Constrained<f64, UnitIntervalLowerOpen>, ConstraintError> {
        Constrained::<f64, UnitIntervalLowerOpen>::new(value)
    }
}

impl Constraint<f64> for UnitIntervalLowerOpen {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if *value <= 0.0 {
            Err(ConstraintError::BelowMinimum)
        } else if *value > 1.0 {
            Err(ConstraintError::AboveMaximum)
        } else {
            Ok(())
        }
    }
}
