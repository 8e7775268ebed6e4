//! Public heat sink models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail, but its engines are re-exported by the model module so
//! they can be called without going through the [`twine_core::Model`] adapter.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates to
//! the model's own API.

pub mod thermal;
