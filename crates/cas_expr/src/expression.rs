//! Expression node type.

use crate::context::ExprId;
use crate::symbol::SymbolId;
use num_rational::BigRational;

/// Named mathematical constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
}

/// A single expression node. Children are arena ids, so nodes are cheap to
/// copy around and never mutated after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Exact rational number (integers are rationals with denominator 1).
    Number(BigRational),
    Constant(Constant),
    Variable(SymbolId),
    Add(ExprId, ExprId),
    Sub(ExprId, ExprId),
    Mul(ExprId, ExprId),
    Div(ExprId, ExprId),
    Pow(ExprId, ExprId),
    Neg(ExprId),
}

impl Expr {
    /// True for leaf nodes (numbers, constants, variables).
    pub fn is_atom(&self) -> bool {
        matches!(
            self,
            Expr::Number(_) | Expr::Constant(_) | Expr::Variable(_)
        )
    }
}
