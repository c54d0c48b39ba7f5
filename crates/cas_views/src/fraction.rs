//! Fraction view and unit-circle angle recognition.

use crate::error::ShapeError;
use cas_expr::numeric::{as_integer, as_number, is_zero_number};
use cas_expr::views::{
    additive_groups, contains_constant, fraction_parts, is_fraction_compatible, is_zero_expr,
    remove_redundancy, FactorOp,
};
use cas_expr::{build, Constant, Context, Expr, ExprId};
use num_bigint::BigInt;
use num_traits::Zero;

/// How strictly construction interprets the source expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionPolicy {
    /// Only an expression that is already a single pure-ratio group is
    /// accepted; plain polynomials and multi-term sums are rejected.
    Strict,
    /// Zero shape, then pure-fraction shape, then anything else over one.
    Loose,
}

/// Numerator/denominator pair read from a canonical expression.
///
/// The pair `(0, 0)` is a reserved sentinel meaning "the value is exactly
/// zero", not a genuine zero-over-zero; in every other valid state the
/// denominator is non-zero. Views are read-only once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FractionView {
    numerator: ExprId,
    denominator: ExprId,
}

impl FractionView {
    /// Decompose `expr` under the given policy.
    pub fn from_expr(
        ctx: &mut Context,
        expr: ExprId,
        policy: FractionPolicy,
    ) -> Result<Self, ShapeError> {
        match policy {
            FractionPolicy::Strict => {
                let cleaned = remove_redundancy(ctx, expr);
                if !is_fraction_compatible(ctx, cleaned)
                    || additive_groups(ctx, cleaned).len() != 1
                {
                    return Err(ShapeError::NotAFraction);
                }
                let (numerator, denominator) =
                    fraction_parts(ctx, cleaned).ok_or(ShapeError::NotAFraction)?;
                // Only the (0, 0) sentinel may carry a zero denominator.
                if is_zero_number(ctx, denominator) {
                    return Err(ShapeError::NotAFraction);
                }
                Ok(Self {
                    numerator,
                    denominator,
                })
            }
            FractionPolicy::Loose => {
                if is_zero_expr(ctx, expr) {
                    let numerator = ctx.num(0);
                    let denominator = ctx.num(0);
                    return Ok(Self {
                        numerator,
                        denominator,
                    });
                }
                let cleaned = remove_redundancy(ctx, expr);
                if is_fraction_compatible(ctx, cleaned)
                    && additive_groups(ctx, cleaned).len() == 1
                {
                    if let Some((numerator, denominator)) = fraction_parts(ctx, cleaned) {
                        if is_zero_number(ctx, denominator) {
                            return Err(ShapeError::NotAFraction);
                        }
                        return Ok(Self {
                            numerator,
                            denominator,
                        });
                    }
                }
                // Fallback: the whole expression over one.
                let denominator = ctx.num(1);
                Ok(Self {
                    numerator: cleaned,
                    denominator,
                })
            }
        }
    }

    pub fn numerator(&self) -> ExprId {
        self.numerator
    }

    pub fn denominator(&self) -> ExprId {
        self.denominator
    }

    /// True for the reserved `(0, 0)` zero sentinel.
    pub fn is_zero_sentinel(&self, ctx: &Context) -> bool {
        is_zero_number(ctx, self.numerator) && is_zero_number(ctx, self.denominator)
    }

    /// `denominator / numerator` via the simplifying divider.
    ///
    /// # Panics
    /// Panics on the zero sentinel; the caller must guard.
    pub fn reciprocal(&self, ctx: &mut Context) -> ExprId {
        assert!(
            !self.is_zero_sentinel(ctx),
            "reciprocal of the zero sentinel is undefined"
        );
        build::div2(ctx, self.denominator, self.numerator)
    }

    /// Recognize the fraction as a rational multiple of π on the unit
    /// circle and normalize it into one full turn.
    ///
    /// Returns the integer pair `(num, den)` of the canonical angle
    /// `num·π / den`; the zero angle is `(0, 0)`. With `reflect_negative`
    /// set, a negative numerator is reflected into the equivalent
    /// positive-rotation angle; reflection happens after the modular
    /// reduction.
    pub fn unit_circle_angle(
        &self,
        ctx: &Context,
        reflect_negative: bool,
    ) -> Result<(BigInt, BigInt), ShapeError> {
        if self.is_zero_sentinel(ctx) {
            return Ok((BigInt::zero(), BigInt::zero()));
        }

        let den_value = as_number(ctx, self.denominator).ok_or(ShapeError::NotAPiMultiple)?;
        if !contains_constant(ctx, self.numerator, Constant::Pi) {
            return Err(ShapeError::NotAPiMultiple);
        }

        let coeff = pi_coefficient(ctx, self.numerator).ok_or(ShapeError::NotAPiMultiple)?;

        if !den_value.is_integer() {
            return Err(ShapeError::NonIntegerAngle);
        }
        let coeff = match coeff {
            PiCoefficient::One => BigInt::from(1),
            PiCoefficient::MinusOne => BigInt::from(-1),
            PiCoefficient::Value(id) => {
                as_integer(ctx, id).ok_or(ShapeError::NonIntegerAngle)?
            }
            PiCoefficient::NegatedValue(id) => {
                -as_integer(ctx, id).ok_or(ShapeError::NonIntegerAngle)?
            }
        };

        let mut num = coeff;
        let mut den = den_value.to_integer();
        let two_den = BigInt::from(2) * &den;

        let was_negative = num < BigInt::zero();
        if was_negative {
            num = -num;
        }

        if num >= two_den {
            num = num % &two_den;
            if num.is_zero() {
                den = BigInt::zero();
            }
        }

        if was_negative && reflect_negative {
            num = &two_den - &num;
        }

        Ok((num, den))
    }
}

enum PiCoefficient {
    One,
    MinusOne,
    Value(ExprId),
    NegatedValue(ExprId),
}

/// Read the numerator as `π`, `-π`, `k·π` or `π·k` with a plain-number `k`.
///
/// Exactly one additive group with one or two multiplicative factors
/// matches; anything else is not a recognizable π multiple.
fn pi_coefficient(ctx: &Context, numerator: ExprId) -> Option<PiCoefficient> {
    let groups = additive_groups(ctx, numerator);
    if groups.len() != 1 {
        return None;
    }
    let group = groups[0];
    let factors = group.factors(ctx);
    if factors.iter().any(|f| f.op == FactorOp::Div) {
        return None;
    }

    let is_pi = |id: ExprId| matches!(ctx.get(id), Expr::Constant(Constant::Pi));
    let negative = group.sign < 0;

    match factors.as_slice() {
        [only] if is_pi(only.value) => Some(if negative {
            PiCoefficient::MinusOne
        } else {
            PiCoefficient::One
        }),
        [first, second] => {
            let coeff = if is_pi(first.value) && as_number(ctx, second.value).is_some() {
                second.value
            } else if is_pi(second.value) && as_number(ctx, first.value).is_some() {
                first.value
            } else {
                return None;
            };
            Some(if negative {
                PiCoefficient::NegatedValue(coeff)
            } else {
                PiCoefficient::Value(coeff)
            })
        }
        _ => None,
    }
}
