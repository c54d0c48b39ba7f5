//! Shape views over canonical expressions.
//!
//! `PolynomialView` and `FractionView` recognize polynomial and fraction
//! shapes inside an already-normalized expression and run the shape-specific
//! algorithms a solver needs: synthetic division, rational-root candidate
//! enumeration, fraction decomposition, unit-circle angle normalization.
//!
//! Shape mismatches are ordinary `Err` results: callers routinely fall back
//! to another interpretation of the same expression.

pub mod error;
pub mod fraction;
pub mod polynomial;

pub use error::ShapeError;
pub use fraction::{FractionPolicy, FractionView};
pub use polynomial::{PolynomialView, SyntheticDivision};

#[cfg(test)]
mod division_property_tests;
