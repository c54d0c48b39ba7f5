//! Expression arena.

use crate::expression::{Constant, Expr};
use crate::symbol::{SymbolId, SymbolTable};
use num_rational::BigRational;

/// Handle to a node stored in a [`Context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprId(usize);

/// Arena holding expression nodes and the symbol table.
///
/// Nodes are append-only: an `ExprId` stays valid and its node never changes,
/// which is what makes ids safe to store inside views.
#[derive(Debug, Clone, Default)]
pub struct Context {
    nodes: Vec<Expr>,
    symbols: SymbolTable,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node and return its id.
    pub fn add(&mut self, expr: Expr) -> ExprId {
        let id = ExprId(self.nodes.len());
        self.nodes.push(expr);
        id
    }

    /// Resolve an id to its node.
    ///
    /// # Panics
    /// Panics if the id belongs to a different context.
    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.nodes[id.0]
    }

    /// Integer literal.
    pub fn num(&mut self, n: i64) -> ExprId {
        self.add(Expr::Number(BigRational::from_integer(n.into())))
    }

    /// Exact rational literal.
    pub fn num_rational(&mut self, q: BigRational) -> ExprId {
        self.add(Expr::Number(q))
    }

    /// Variable node, interning the name.
    pub fn var(&mut self, name: &str) -> ExprId {
        let sym = self.symbols.intern(name);
        self.add(Expr::Variable(sym))
    }

    /// The π constant.
    pub fn pi(&mut self) -> ExprId {
        self.add(Expr::Constant(Constant::Pi))
    }

    /// Intern a variable name without creating a node.
    pub fn intern(&mut self, name: &str) -> SymbolId {
        self.symbols.intern(name)
    }

    /// Resolve a symbol id to its name.
    #[inline]
    pub fn sym_name(&self, id: SymbolId) -> &str {
        self.symbols.resolve(id)
    }
}
