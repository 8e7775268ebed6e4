use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is greater than zero.
///
/// Geometry dimensions, material properties and the air flow handed to the
/// correlation engines all use this constraint.
///
/// # Examples
///
/// ```
/// use heat_sink_models::support::constraint::StrictlyPositive;
///
/// assert!(StrictlyPositive::new(0.014).is_ok());
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, VolumeRate},
        length::meter,
        volume_rate::cubic_meter_per_second,
    };

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(1e-9).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn integers() {
        assert_eq!(StrictlyPositive::new(5_u32).unwrap().into_inner(), 5);
        assert!(StrictlyPositive::new(0_u32).is_err());
    }

    #[test]
    fn quantities() {
        assert!(StrictlyPositive::new(Length::new::<meter>(0.04)).is_ok());
        assert!(StrictlyPositive::new(Length::new::<meter>(-0.04)).is_err());

        let flow = VolumeRate::new::<cubic_meter_per_second>(0.0);
        assert!(StrictlyPositive::new(flow).is_err());
    }
}
