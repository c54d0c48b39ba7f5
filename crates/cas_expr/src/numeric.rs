//! Number inspection helpers (zero-clone).

use crate::context::{Context, ExprId};
use crate::expression::Expr;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

/// Reference to the rational behind a `Number` node, without cloning.
#[inline]
pub fn as_number(ctx: &Context, id: ExprId) -> Option<&BigRational> {
    match ctx.get(id) {
        Expr::Number(n) => Some(n),
        _ => None,
    }
}

/// Exact integer behind a `Number` node, if it has one.
///
/// Returns `None` for non-numbers and for rationals with denominator != 1,
/// so "plain number that is an exact integer" is a single call.
pub fn as_integer(ctx: &Context, id: ExprId) -> Option<BigInt> {
    match ctx.get(id) {
        Expr::Number(n) if n.is_integer() => Some(n.to_integer()),
        _ => None,
    }
}

/// True when the node is the exact number zero.
#[inline]
pub fn is_zero_number(ctx: &Context, id: ExprId) -> bool {
    matches!(ctx.get(id), Expr::Number(n) if n.is_zero())
}
