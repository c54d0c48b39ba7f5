//! Plain-text rendering of arena expressions.

use crate::context::{Context, ExprId};
use crate::expression::{Constant, Expr};
use std::fmt;

/// Borrowing wrapper so `ExprId`s can be formatted with `{}`.
pub struct DisplayExpr<'a> {
    ctx: &'a Context,
    id: ExprId,
}

impl Context {
    /// Render an expression for diagnostics and test failure messages.
    pub fn display(&self, id: ExprId) -> DisplayExpr<'_> {
        DisplayExpr { ctx: self, id }
    }
}

fn precedence(ctx: &Context, id: ExprId) -> u8 {
    match ctx.get(id) {
        Expr::Add(_, _) | Expr::Sub(_, _) => 1,
        Expr::Mul(_, _) | Expr::Div(_, _) => 2,
        Expr::Pow(_, _) => 3,
        Expr::Neg(_) => 4,
        Expr::Number(_) | Expr::Constant(_) | Expr::Variable(_) => 5,
    }
}

fn write_child(
    f: &mut fmt::Formatter<'_>,
    ctx: &Context,
    child: ExprId,
    parent_prec: u8,
    parens_on_equal: bool,
) -> fmt::Result {
    let child_prec = precedence(ctx, child);
    let needs_parens = child_prec < parent_prec || (parens_on_equal && child_prec == parent_prec);
    if needs_parens {
        write!(f, "({})", ctx.display(child))
    } else {
        write!(f, "{}", ctx.display(child))
    }
}

impl fmt::Display for DisplayExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ctx = self.ctx;
        let my_prec = precedence(ctx, self.id);
        match ctx.get(self.id) {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Constant(Constant::Pi) => write!(f, "pi"),
            Expr::Constant(Constant::E) => write!(f, "e"),
            Expr::Variable(sym) => write!(f, "{}", ctx.sym_name(*sym)),
            Expr::Add(l, r) => {
                write_child(f, ctx, *l, my_prec, false)?;
                write!(f, " + ")?;
                write_child(f, ctx, *r, my_prec, false)
            }
            Expr::Sub(l, r) => {
                write_child(f, ctx, *l, my_prec, false)?;
                write!(f, " - ")?;
                write_child(f, ctx, *r, my_prec, true)
            }
            Expr::Mul(l, r) => {
                write_child(f, ctx, *l, my_prec, false)?;
                write!(f, " * ")?;
                write_child(f, ctx, *r, my_prec, false)
            }
            Expr::Div(l, r) => {
                write_child(f, ctx, *l, my_prec, false)?;
                write!(f, " / ")?;
                write_child(f, ctx, *r, my_prec, true)
            }
            Expr::Pow(b, e) => {
                write_child(f, ctx, *b, my_prec, false)?;
                write!(f, "^")?;
                write_child(f, ctx, *e, my_prec, false)
            }
            Expr::Neg(inner) => {
                write!(f, "-")?;
                write_child(f, ctx, *inner, my_prec, false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_with_precedence_parens() {
        let mut ctx = Context::new();
        // (a + b)^2
        let a = ctx.var("a");
        let b = ctx.var("b");
        let sum = ctx.add(Expr::Add(a, b));
        let two = ctx.num(2);
        let pow = ctx.add(Expr::Pow(sum, two));
        assert_eq!(format!("{}", ctx.display(pow)), "(a + b)^2");
    }

    #[test]
    fn renders_fraction_of_pi() {
        let mut ctx = Context::new();
        let pi = ctx.pi();
        let two = ctx.num(2);
        let frac = ctx.add(Expr::Div(pi, two));
        assert_eq!(format!("{}", ctx.display(frac)), "pi / 2");
    }
}
