//! Minimal expression engine consumed by the shape views in `cas_views`.
//!
//! Expressions are immutable nodes interned in a [`Context`] arena and
//! referenced by copyable [`ExprId`]s. On top of the raw tree, this crate
//! provides the canonical-form views (additive groups, multiplicative
//! factors, fraction parts), simplifying arithmetic builders, and the
//! polynomial-map extraction used by `PolynomialView`.

pub mod build;
pub mod context;
pub mod divisors;
pub mod display;
pub mod expression;
pub mod numeric;
pub mod poly_map;
pub mod symbol;
pub mod views;

pub use context::{Context, ExprId};
pub use expression::{Constant, Expr};
pub use poly_map::PolyError;
pub use symbol::{SymbolId, SymbolTable};
