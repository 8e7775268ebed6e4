//! # Heat Sink Models
//!
//! Coupled thermal-hydraulic models of fan-cooled extruded-fin heat sinks,
//! built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a sink geometry, a fan and an ambient temperature, the models find
//! where the fan curve meets the sink's pressure-drop curve and turn that
//! airflow into a sink-to-ambient thermal resistance.
//!
//! ## Crate layout
//!
//! - [`models`]: The heat sink [`twine_core::Model`] and its engines.
//! - [`support`]: Constraints, units, fan data and heat spreading.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful beyond that model.

pub mod models;
pub mod support;
