//! Property tests for synthetic division.
//!
//! The recorded remainder must always equal the dividend evaluated at the
//! candidate root; exact divisions are precisely the zero-remainder cases.
//! Kept as unit tests next to the implementation, with a fixed case count
//! for CI stability.

use crate::polynomial::PolynomialView;
use cas_expr::numeric::as_number;
use cas_expr::{Context, Expr, ExprId};
use num_rational::BigRational;
use num_traits::Zero;
use proptest::prelude::*;

/// Build `c0 + c1*x + ...` from integer coefficients.
fn poly_expr(ctx: &mut Context, coeffs: &[i64]) -> ExprId {
    let mut acc: Option<ExprId> = None;
    for (exp, &c) in coeffs.iter().enumerate() {
        if c == 0 {
            continue;
        }
        let coeff = ctx.num(c);
        let term = match exp {
            0 => coeff,
            1 => {
                let x = ctx.var("x");
                ctx.add(Expr::Mul(coeff, x))
            }
            _ => {
                let x = ctx.var("x");
                let e = ctx.num(exp as i64);
                let pow = ctx.add(Expr::Pow(x, e));
                ctx.add(Expr::Mul(coeff, pow))
            }
        };
        acc = Some(match acc {
            None => term,
            Some(prev) => ctx.add(Expr::Add(prev, term)),
        });
    }
    acc.unwrap_or_else(|| ctx.num(0))
}

/// Horner evaluation of the same coefficients, computed independently.
fn horner(coeffs: &[i64], x: i64) -> BigRational {
    let x = BigRational::from_integer(x.into());
    let mut result = BigRational::zero();
    for &c in coeffs.iter().rev() {
        result = result * x.clone() + BigRational::from_integer(c.into());
    }
    result
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn remainder_equals_value_at_root(
        lower in prop::collection::vec(-9i64..=9, 1..=4),
        leading in 1i64..=5,
        root in -4i64..=4,
    ) {
        let mut coeffs = lower;
        coeffs.push(leading);

        let mut ctx = Context::new();
        let expr = poly_expr(&mut ctx, &coeffs);
        let view = PolynomialView::from_expr(&mut ctx, expr, "x").expect("poly");
        let original_degree = view.degree();

        let root_id = ctx.num(root);
        let result = view.synthetic_division(&mut ctx, root_id).expect("division");

        let expected = horner(&coeffs, root);
        if result.quotient.degree() < original_degree {
            // Exact division: the dropped remainder was zero.
            prop_assert_eq!(result.quotient.degree(), original_degree - 1);
            prop_assert!(expected.is_zero());
        } else {
            let remainder = as_number(&ctx, result.quotient.constant_coefficient())
                .expect("numeric remainder")
                .clone();
            prop_assert!(!remainder.is_zero());
            prop_assert_eq!(remainder, expected);
        }
    }

    #[test]
    fn quotient_is_always_dense(
        lower in prop::collection::vec(-9i64..=9, 1..=4),
        leading in 1i64..=5,
        root in -4i64..=4,
    ) {
        let mut coeffs = lower;
        coeffs.push(leading);

        let mut ctx = Context::new();
        let expr = poly_expr(&mut ctx, &coeffs);
        let view = PolynomialView::from_expr(&mut ctx, expr, "x").expect("poly");

        let root_id = ctx.num(root);
        let result = view.synthetic_division(&mut ctx, root_id).expect("division");

        let degree = result.quotient.degree();
        let seq = result.quotient.coefficient_sequence(&mut ctx);
        prop_assert_eq!(seq.len() as u32, degree + 1);
        for exp in 0..=degree {
            prop_assert!(result.quotient.coefficient(exp).is_some());
        }
    }
}
