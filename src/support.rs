//! Reusable building blocks shared by the models.
//!
//! These modules are public because they are useful on their own, but their
//! APIs are not stable.

pub mod constraint;
pub mod fan;
pub mod spreading;
pub mod units;
