//! Canonical-form views over a normalized expression.
//!
//! A canonical expression is a sum of products: an ordered run of additive
//! groups, each an ordered run of multiplicative/divisive factors. These
//! views flatten the binary tree into that shape on demand so pattern code
//! never matches raw `Add`/`Mul` spines.

use crate::context::{Context, ExprId};
use crate::expression::{Constant, Expr};
use crate::numeric::is_zero_number;
use crate::symbol::SymbolId;
use crate::build;
use num_traits::One;

/// Whether a factor multiplies or divides its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorOp {
    Mul,
    Div,
}

/// One multiplicative/divisive factor of an additive group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Factor {
    pub op: FactorOp,
    pub value: ExprId,
}

/// One additive group: a sign pulled off the `Sub`/`Neg` spine plus the
/// root of the group's factor tree.
#[derive(Debug, Clone, Copy)]
pub struct Group {
    pub sign: i8,
    pub root: ExprId,
}

impl Group {
    /// Ordered factors of this group, `Mul`/`Div` wrapping removed.
    pub fn factors(&self, ctx: &Context) -> Vec<Factor> {
        let mut out = Vec::new();
        collect_factors(ctx, self.root, FactorOp::Mul, &mut out);
        out
    }
}

fn collect_factors(ctx: &Context, id: ExprId, op: FactorOp, out: &mut Vec<Factor>) {
    match ctx.get(id) {
        Expr::Mul(l, r) => {
            collect_factors(ctx, *l, op, out);
            collect_factors(ctx, *r, op, out);
        }
        Expr::Div(l, r) => {
            collect_factors(ctx, *l, op, out);
            let flipped = match op {
                FactorOp::Mul => FactorOp::Div,
                FactorOp::Div => FactorOp::Mul,
            };
            collect_factors(ctx, *r, flipped, out);
        }
        _ => out.push(Factor { op, value: id }),
    }
}

/// Flatten the `Add`/`Sub`/`Neg` spine into ordered additive groups.
pub fn additive_groups(ctx: &Context, id: ExprId) -> Vec<Group> {
    let mut groups = Vec::new();
    let mut stack: Vec<(ExprId, i8)> = vec![(id, 1)];
    while let Some((curr, sign)) = stack.pop() {
        match ctx.get(curr) {
            Expr::Add(l, r) => {
                stack.push((*r, sign));
                stack.push((*l, sign));
            }
            Expr::Sub(l, r) => {
                stack.push((*r, -sign));
                stack.push((*l, sign));
            }
            Expr::Neg(inner) => stack.push((*inner, -sign)),
            _ => groups.push(Group { sign, root: curr }),
        }
    }
    groups
}

/// Strip redundant wrappers from the top of the tree: double negation,
/// multiplication by one, addition of zero, division by one.
pub fn remove_redundancy(ctx: &Context, mut id: ExprId) -> ExprId {
    loop {
        let next = match ctx.get(id) {
            Expr::Neg(inner) => match ctx.get(*inner) {
                Expr::Neg(x) => Some(*x),
                _ => None,
            },
            Expr::Mul(l, r) => {
                if matches!(ctx.get(*l), Expr::Number(n) if n.is_one()) {
                    Some(*r)
                } else if matches!(ctx.get(*r), Expr::Number(n) if n.is_one()) {
                    Some(*l)
                } else {
                    None
                }
            }
            Expr::Add(l, r) => {
                if is_zero_number(ctx, *l) {
                    Some(*r)
                } else if is_zero_number(ctx, *r) {
                    Some(*l)
                } else {
                    None
                }
            }
            Expr::Div(l, r) => {
                if matches!(ctx.get(*r), Expr::Number(n) if n.is_one()) {
                    Some(*l)
                } else {
                    None
                }
            }
            _ => None,
        };
        match next {
            Some(n) => id = n,
            None => return id,
        }
    }
}

/// Zero test: every additive group folds to the exact number zero.
pub fn is_zero_expr(ctx: &Context, id: ExprId) -> bool {
    additive_groups(ctx, remove_redundancy(ctx, id))
        .iter()
        .all(|g| is_zero_number(ctx, g.root))
}

/// True when every factor of every group is a plain value or a power of
/// one, i.e. nothing a single-ratio extraction cannot handle.
pub fn is_fraction_compatible(ctx: &Context, id: ExprId) -> bool {
    additive_groups(ctx, id).iter().all(|g| {
        g.factors(ctx).iter().all(|f| {
            let node = ctx.get(f.value);
            node.is_atom()
                || matches!(node, Expr::Pow(_, _))
                || matches!(node, Expr::Neg(inner) if ctx.get(*inner).is_atom())
        })
    })
}

/// Numerator/denominator of a single pure-ratio group.
///
/// Returns `None` unless the expression is exactly one additive group with
/// at least one divisive factor. The group sign lands on the numerator.
pub fn fraction_parts(ctx: &mut Context, id: ExprId) -> Option<(ExprId, ExprId)> {
    let groups = additive_groups(ctx, id);
    if groups.len() != 1 {
        return None;
    }
    let group = groups[0];
    let factors = group.factors(ctx);
    if !factors.iter().any(|f| f.op == FactorOp::Div) {
        return None;
    }

    let mut num: Option<ExprId> = None;
    let mut den: Option<ExprId> = None;
    for f in factors {
        let slot = match f.op {
            FactorOp::Mul => &mut num,
            FactorOp::Div => &mut den,
        };
        *slot = Some(match *slot {
            None => f.value,
            Some(prev) => build::mul2(ctx, prev, f.value),
        });
    }

    let mut num = num.unwrap_or_else(|| ctx.num(1));
    if group.sign < 0 {
        num = build::neg(ctx, num);
    }
    let den = den.expect("divisive factor checked above");
    Some((num, den))
}

/// Membership test for a named constant anywhere in the tree.
pub fn contains_constant(ctx: &Context, id: ExprId, needle: Constant) -> bool {
    let mut worklist = vec![id];
    while let Some(curr) = worklist.pop() {
        match ctx.get(curr) {
            Expr::Constant(c) if *c == needle => return true,
            Expr::Add(l, r)
            | Expr::Sub(l, r)
            | Expr::Mul(l, r)
            | Expr::Div(l, r)
            | Expr::Pow(l, r) => {
                worklist.push(*l);
                worklist.push(*r);
            }
            Expr::Neg(inner) => worklist.push(*inner),
            Expr::Number(_) | Expr::Constant(_) | Expr::Variable(_) => {}
        }
    }
    false
}

/// Exact structural equality of two expression values.
pub fn exprs_equal(ctx: &Context, a: ExprId, b: ExprId) -> bool {
    if a == b {
        return true;
    }
    match (ctx.get(a), ctx.get(b)) {
        (Expr::Number(n1), Expr::Number(n2)) => n1 == n2,
        (Expr::Variable(v1), Expr::Variable(v2)) => v1 == v2,
        (Expr::Constant(c1), Expr::Constant(c2)) => c1 == c2,
        (Expr::Add(l1, r1), Expr::Add(l2, r2))
        | (Expr::Sub(l1, r1), Expr::Sub(l2, r2))
        | (Expr::Mul(l1, r1), Expr::Mul(l2, r2))
        | (Expr::Div(l1, r1), Expr::Div(l2, r2))
        | (Expr::Pow(l1, r1), Expr::Pow(l2, r2)) => {
            exprs_equal(ctx, *l1, *l2) && exprs_equal(ctx, *r1, *r2)
        }
        (Expr::Neg(e1), Expr::Neg(e2)) => exprs_equal(ctx, *e1, *e2),
        _ => false,
    }
}

/// Whether any node of the tree is the given variable.
pub fn contains_var(ctx: &Context, id: ExprId, var: SymbolId) -> bool {
    let mut worklist = vec![id];
    while let Some(curr) = worklist.pop() {
        match ctx.get(curr) {
            Expr::Variable(sym) if *sym == var => return true,
            Expr::Add(l, r)
            | Expr::Sub(l, r)
            | Expr::Mul(l, r)
            | Expr::Div(l, r)
            | Expr::Pow(l, r) => {
                worklist.push(*l);
                worklist.push(*r);
            }
            Expr::Neg(inner) => worklist.push(*inner),
            Expr::Number(_) | Expr::Constant(_) | Expr::Variable(_) => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additive_groups_preserve_order_and_sign() {
        let mut ctx = Context::new();
        // a - b + c
        let a = ctx.var("a");
        let b = ctx.var("b");
        let c = ctx.var("c");
        let ab = ctx.add(Expr::Sub(a, b));
        let expr = ctx.add(Expr::Add(ab, c));

        let groups = additive_groups(&ctx, expr);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].sign, 1);
        assert_eq!(groups[1].sign, -1);
        assert_eq!(groups[2].sign, 1);
        assert_eq!(groups[0].root, a);
        assert_eq!(groups[1].root, b);
        assert_eq!(groups[2].root, c);
    }

    #[test]
    fn factors_split_mul_and_div() {
        let mut ctx = Context::new();
        // 3 * x / 2
        let three = ctx.num(3);
        let x = ctx.var("x");
        let two = ctx.num(2);
        let num = ctx.add(Expr::Mul(three, x));
        let expr = ctx.add(Expr::Div(num, two));

        let groups = additive_groups(&ctx, expr);
        assert_eq!(groups.len(), 1);
        let factors = groups[0].factors(&ctx);
        assert_eq!(factors.len(), 3);
        assert_eq!(factors[0].op, FactorOp::Mul);
        assert_eq!(factors[1].op, FactorOp::Mul);
        assert_eq!(factors[2].op, FactorOp::Div);
        assert_eq!(factors[2].value, two);
    }

    #[test]
    fn fraction_parts_of_simple_ratio() {
        let mut ctx = Context::new();
        let x = ctx.var("x");
        let two = ctx.num(2);
        let expr = ctx.add(Expr::Div(x, two));
        let (num, den) = fraction_parts(&mut ctx, expr).expect("ratio");
        assert_eq!(num, x);
        assert_eq!(den, two);
    }

    #[test]
    fn fraction_parts_rejects_sums_and_plain_terms() {
        let mut ctx = Context::new();
        let x = ctx.var("x");
        let one = ctx.num(1);
        let sum = ctx.add(Expr::Add(x, one));
        assert!(fraction_parts(&mut ctx, sum).is_none());
        assert!(fraction_parts(&mut ctx, x).is_none());
    }

    #[test]
    fn redundancy_removal_strips_wrappers() {
        let mut ctx = Context::new();
        let x = ctx.var("x");
        let one = ctx.num(1);
        let wrapped = ctx.add(Expr::Mul(one, x));
        let negneg = ctx.add(Expr::Neg(wrapped));
        let negneg = ctx.add(Expr::Neg(negneg));
        assert_eq!(remove_redundancy(&ctx, negneg), x);
    }

    #[test]
    fn zero_test_sees_through_structure() {
        let mut ctx = Context::new();
        let zero = ctx.num(0);
        let z2 = ctx.num(0);
        let sum = ctx.add(Expr::Add(zero, z2));
        assert!(is_zero_expr(&ctx, sum));
        let x = ctx.var("x");
        assert!(!is_zero_expr(&ctx, x));
    }

    #[test]
    fn contains_constant_finds_pi() {
        let mut ctx = Context::new();
        let pi = ctx.pi();
        let two = ctx.num(2);
        let expr = ctx.add(Expr::Div(pi, two));
        assert!(contains_constant(&ctx, expr, Constant::Pi));
        assert!(!contains_constant(&ctx, two, Constant::Pi));
        assert!(!contains_constant(&ctx, expr, Constant::E));
    }
}
