//! Simplifying arithmetic builders.
//!
//! Each builder folds plain-number operands to an exact `Number` and applies
//! identity cleanup (`0 + x`, `1 * x`, `x / 1`, `--x`). Anything symbolic is
//! kept as a composite node; deeper rewriting is the simplifier's job, not
//! ours.

use crate::context::{Context, ExprId};
use crate::expression::Expr;
use crate::numeric::is_zero_number;
use num_traits::{One, Zero};

/// `a + b` with numeric folding.
pub fn add2(ctx: &mut Context, a: ExprId, b: ExprId) -> ExprId {
    if let (Expr::Number(x), Expr::Number(y)) = (ctx.get(a), ctx.get(b)) {
        let sum = x + y;
        return ctx.add(Expr::Number(sum));
    }
    if is_zero_number(ctx, a) {
        return b;
    }
    if is_zero_number(ctx, b) {
        return a;
    }
    ctx.add(Expr::Add(a, b))
}

/// `a * b` with numeric folding.
pub fn mul2(ctx: &mut Context, a: ExprId, b: ExprId) -> ExprId {
    if let (Expr::Number(x), Expr::Number(y)) = (ctx.get(a), ctx.get(b)) {
        let prod = x * y;
        return ctx.add(Expr::Number(prod));
    }
    if is_zero_number(ctx, a) || is_zero_number(ctx, b) {
        return ctx.num(0);
    }
    if matches!(ctx.get(a), Expr::Number(n) if n.is_one()) {
        return b;
    }
    if matches!(ctx.get(b), Expr::Number(n) if n.is_one()) {
        return a;
    }
    ctx.add(Expr::Mul(a, b))
}

/// `a / b` with numeric folding. A numeric zero denominator is left as a
/// `Div` node for the caller to reject.
pub fn div2(ctx: &mut Context, a: ExprId, b: ExprId) -> ExprId {
    if let (Expr::Number(x), Expr::Number(y)) = (ctx.get(a), ctx.get(b)) {
        if !y.is_zero() {
            let quot = x / y;
            return ctx.add(Expr::Number(quot));
        }
    }
    if matches!(ctx.get(b), Expr::Number(n) if n.is_one()) {
        return a;
    }
    if is_zero_number(ctx, a) && !is_zero_number(ctx, b) {
        return ctx.num(0);
    }
    ctx.add(Expr::Div(a, b))
}

/// `-a` with numeric folding and double-negation removal.
pub fn neg(ctx: &mut Context, a: ExprId) -> ExprId {
    match ctx.get(a) {
        Expr::Number(n) => {
            let m = -n;
            ctx.add(Expr::Number(m))
        }
        Expr::Neg(inner) => *inner,
        _ => ctx.add(Expr::Neg(a)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::BigRational;

    #[test]
    fn add2_folds_numbers() {
        let mut ctx = Context::new();
        let a = ctx.num(2);
        let b = ctx.num(3);
        let r = add2(&mut ctx, a, b);
        assert!(matches!(ctx.get(r), Expr::Number(n) if n == &BigRational::from_integer(5.into())));
    }

    #[test]
    fn add2_drops_zero_operand() {
        let mut ctx = Context::new();
        let x = ctx.var("x");
        let zero = ctx.num(0);
        assert_eq!(add2(&mut ctx, zero, x), x);
        assert_eq!(add2(&mut ctx, x, zero), x);
    }

    #[test]
    fn mul2_handles_identities() {
        let mut ctx = Context::new();
        let x = ctx.var("x");
        let one = ctx.num(1);
        let zero = ctx.num(0);
        assert_eq!(mul2(&mut ctx, one, x), x);
        let z = mul2(&mut ctx, zero, x);
        assert!(is_zero_number(&ctx, z));
    }

    #[test]
    fn div2_folds_and_cleans() {
        let mut ctx = Context::new();
        let three = ctx.num(3);
        let four = ctx.num(4);
        let q = div2(&mut ctx, three, four);
        assert!(matches!(ctx.get(q), Expr::Number(n) if *n == BigRational::new(3.into(), 4.into())));

        let x = ctx.var("x");
        let one = ctx.num(1);
        assert_eq!(div2(&mut ctx, x, one), x);
    }

    #[test]
    fn neg_folds_and_cancels() {
        let mut ctx = Context::new();
        let two = ctx.num(2);
        let m = neg(&mut ctx, two);
        assert!(matches!(ctx.get(m), Expr::Number(n) if *n == BigRational::from_integer((-2).into())));

        let x = ctx.var("x");
        let nx = neg(&mut ctx, x);
        assert_eq!(neg(&mut ctx, nx), x);
    }
}
