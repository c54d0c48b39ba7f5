//! Sparse polynomial-map extraction for a governing variable.
//!
//! Walks the additive groups of a canonical expression and classifies each
//! one as `coeff * var^exp`. Coefficients stay symbolic (`ExprId`); only the
//! exponents must be exact non-negative integers.

use crate::build;
use crate::context::{Context, ExprId};
use crate::expression::Expr;
use crate::symbol::SymbolId;
use crate::views::{additive_groups, contains_var};
use num_traits::{Signed, ToPrimitive};
use std::collections::BTreeMap;
use thiserror::Error;

/// Why an expression has no polynomial map in the governing variable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyError {
    /// A term cannot be split into `coeff * var^exp` (variable in a
    /// denominator, symbolic exponent, variable nested in an unsupported
    /// construct).
    #[error("expression is not a polynomial in the governing variable")]
    NonPolynomial,
    /// An exponent on the governing variable is negative or non-integral.
    #[error("negative or non-integer exponent on the governing variable")]
    BadExponent,
}

/// Extract `exponent -> coefficient` pairs for `var`.
///
/// Coefficients at the same exponent are combined with the simplifying
/// adder, so numeric collisions fold to a single `Number`.
pub fn poly_map(
    ctx: &mut Context,
    expr: ExprId,
    var: SymbolId,
) -> Result<BTreeMap<u32, ExprId>, PolyError> {
    let groups = additive_groups(ctx, expr);
    let mut map: BTreeMap<u32, ExprId> = BTreeMap::new();

    for group in groups {
        let (coeff, exp) = analyze_term(ctx, group.root, var)?;
        let coeff = if group.sign < 0 {
            build::neg(ctx, coeff)
        } else {
            coeff
        };
        match map.get(&exp).copied() {
            Some(prev) => {
                let combined = build::add2(ctx, prev, coeff);
                map.insert(exp, combined);
            }
            None => {
                map.insert(exp, coeff);
            }
        }
    }

    if map.is_empty() {
        return Err(PolyError::NonPolynomial);
    }
    Ok(map)
}

/// Split one additive group into `(coeff, exp)` over `var`.
fn analyze_term(ctx: &mut Context, term: ExprId, var: SymbolId) -> Result<(ExprId, u32), PolyError> {
    if !contains_var(ctx, term, var) {
        return Ok((term, 0));
    }

    let node = ctx.get(term).clone();
    match node {
        Expr::Variable(sym) if sym == var => {
            let one = ctx.num(1);
            Ok((one, 1))
        }
        Expr::Pow(base, exp) => {
            if !matches!(ctx.get(base), Expr::Variable(sym) if *sym == var) {
                return Err(PolyError::NonPolynomial);
            }
            if contains_var(ctx, exp, var) {
                return Err(PolyError::NonPolynomial);
            }
            match ctx.get(exp) {
                Expr::Number(n) => {
                    if !n.is_integer() || n.is_negative() {
                        return Err(PolyError::BadExponent);
                    }
                    let d = n
                        .to_integer()
                        .to_u32()
                        .ok_or(PolyError::BadExponent)?;
                    let one = ctx.num(1);
                    Ok((one, d))
                }
                Expr::Neg(_) => Err(PolyError::BadExponent),
                _ => Err(PolyError::NonPolynomial),
            }
        }
        Expr::Mul(l, r) => {
            let l_has = contains_var(ctx, l, var);
            let r_has = contains_var(ctx, r, var);
            if l_has && r_has {
                let (c1, d1) = analyze_term(ctx, l, var)?;
                let (c2, d2) = analyze_term(ctx, r, var)?;
                let coeff = build::mul2(ctx, c1, c2);
                Ok((coeff, d1 + d2))
            } else if l_has {
                let (c, d) = analyze_term(ctx, l, var)?;
                let coeff = build::mul2(ctx, c, r);
                Ok((coeff, d))
            } else {
                let (c, d) = analyze_term(ctx, r, var)?;
                let coeff = build::mul2(ctx, l, c);
                Ok((coeff, d))
            }
        }
        Expr::Div(l, r) => {
            if contains_var(ctx, r, var) {
                return Err(PolyError::NonPolynomial);
            }
            let (c, d) = analyze_term(ctx, l, var)?;
            let coeff = build::div2(ctx, c, r);
            Ok((coeff, d))
        }
        Expr::Neg(inner) => {
            let (c, d) = analyze_term(ctx, inner, var)?;
            let coeff = build::neg(ctx, c);
            Ok((coeff, d))
        }
        _ => Err(PolyError::NonPolynomial),
    }
}
