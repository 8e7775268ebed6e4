//! Thermal systems models.
//!
//! This module contains models for air-cooled electronics, currently a
//! fan-driven extruded-fin heat sink.

pub mod heat_sink;
