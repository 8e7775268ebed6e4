use thiserror::Error;

use super::HeatSinkError;

/// Errors returned by a [`CoolingSystem`](super::CoolingSystem).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoolingSystemError {
    /// The fan has no loaded curve or no catalog entry.
    #[error("unknown fan `{id}`")]
    UnknownFan { id: String },

    /// A heat sink calculation failed.
    ///
    /// [`CoolingSystem::evaluate`](super::CoolingSystem::evaluate) only
    /// returns this for failures outside the infeasible set, see
    /// [`HeatSinkError::is_domain`].
    #[error("heat sink calculation failed")]
    HeatSink(#[from] HeatSinkError),
}
