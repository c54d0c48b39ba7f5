//! Single-variable polynomial view.
//!
//! A `PolynomialView` is an immutable sparse `exponent -> coefficient` map
//! for one governing variable, densified over `[0, degree]` at construction
//! so indexed lookup never has to special-case missing terms. Coefficients
//! are expression values and may be symbolic; only exponents must be exact
//! non-negative integers.

use crate::error::ShapeError;
use cas_expr::numeric::{as_integer, is_zero_number};
use cas_expr::poly_map::poly_map;
use cas_expr::{build, divisors, Context, Expr, ExprId, SymbolId};
use num_rational::BigRational;
use num_traits::Signed;
use std::collections::BTreeMap;

/// Polynomial shape extracted from a canonical expression.
///
/// Value object: every transformation builds a new view, the map is never
/// mutated in place and `degree` is derived once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialView {
    var: SymbolId,
    terms: BTreeMap<u32, ExprId>,
    degree: u32,
}

/// Outcome of one synthetic-division step.
///
/// `products` and `sums` are the multiply and add results recorded at each
/// step in descending-exponent order, for callers that display or verify
/// the division.
#[derive(Debug, Clone)]
pub struct SyntheticDivision {
    pub quotient: PolynomialView,
    pub products: Vec<ExprId>,
    pub sums: Vec<ExprId>,
}

impl PolynomialView {
    /// Extract the polynomial shape of `expr` in `var`.
    ///
    /// Fails with [`ShapeError::NonPolynomial`] or
    /// [`ShapeError::BadExponent`] when the expression is not a polynomial
    /// of integer degree in that variable; no partial view is returned.
    pub fn from_expr(ctx: &mut Context, expr: ExprId, var: &str) -> Result<Self, ShapeError> {
        let sym = ctx.intern(var);
        let mut terms = poly_map(ctx, expr, sym)?;
        let degree = *terms.keys().next_back().ok_or(ShapeError::NonPolynomial)?;

        // Densify: every exponent in [0, degree] gets an explicit zero.
        for exp in 0..degree {
            if !terms.contains_key(&exp) {
                let zero = ctx.num(0);
                terms.insert(exp, zero);
            }
        }

        Ok(Self {
            var: sym,
            terms,
            degree,
        })
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn var(&self) -> SymbolId {
        self.var
    }

    /// Coefficient at the maximum exponent. Always present after
    /// construction.
    pub fn leading_coefficient(&self) -> ExprId {
        self.terms[&self.degree]
    }

    /// Coefficient at exponent zero. Always present after construction.
    pub fn constant_coefficient(&self) -> ExprId {
        self.terms[&0]
    }

    /// Coefficient at a specific exponent, if materialized.
    pub fn coefficient(&self, exp: u32) -> Option<ExprId> {
        self.terms.get(&exp).copied()
    }

    /// Ordered coefficients from exponent 0 up to `degree`.
    ///
    /// Substitutes an exact zero for any absent slot, independently of the
    /// densification done at construction.
    pub fn coefficient_sequence(&self, ctx: &mut Context) -> Vec<ExprId> {
        (0..=self.degree)
            .map(|exp| match self.terms.get(&exp) {
                Some(&id) => id,
                None => ctx.num(0),
            })
            .collect()
    }

    /// Divide by `(var - root)` using synthetic division.
    ///
    /// If the final remainder is exactly zero it is dropped and every
    /// exponent shifts down by one (exact division, degree decreases).
    /// Otherwise the remainder stays as the constant term of a view of
    /// unchanged degree (inexact division).
    ///
    /// A degree-0 view has nothing to divide into and is rejected.
    pub fn synthetic_division(
        &self,
        ctx: &mut Context,
        root: ExprId,
    ) -> Result<SyntheticDivision, ShapeError> {
        if self.degree == 0 {
            return Err(ShapeError::ConstantPolynomial);
        }

        let mut running = self.leading_coefficient();
        // Quotient coefficients in descending-exponent order.
        let mut recorded: Vec<ExprId> = Vec::with_capacity(self.degree as usize);
        let mut products: Vec<ExprId> = Vec::with_capacity(self.degree as usize);
        let mut sums: Vec<ExprId> = Vec::with_capacity(self.degree as usize);

        for exp in (0..self.degree).rev() {
            recorded.push(running);
            let product = build::mul2(ctx, root, running);
            let coeff = self.terms[&exp];
            let sum = build::add2(ctx, coeff, product);
            products.push(product);
            sums.push(sum);
            running = sum;
        }

        // Reassemble: remainder at exponent 0, recorded coefficients back in
        // ascending order above it.
        let mut terms: BTreeMap<u32, ExprId> = BTreeMap::new();
        terms.insert(0, running);
        for (offset, &coeff) in recorded.iter().rev().enumerate() {
            terms.insert(offset as u32 + 1, coeff);
        }

        let quotient = if is_zero_number(ctx, running) {
            terms.remove(&0);
            let shifted: BTreeMap<u32, ExprId> =
                terms.into_iter().map(|(exp, c)| (exp - 1, c)).collect();
            PolynomialView {
                var: self.var,
                terms: shifted,
                degree: self.degree - 1,
            }
        } else {
            PolynomialView {
                var: self.var,
                terms,
                degree: self.degree,
            }
        };

        Ok(SyntheticDivision {
            quotient,
            products,
            sums,
        })
    }

    /// Rational-root-theorem candidates, as exact number values.
    ///
    /// Applicable only when both the leading and the constant coefficient
    /// are plain exact integers; otherwise the list is empty. Order:
    /// `d/a` for each divisor `d` of `|constant|` (outer) and `a` of
    /// `|leading|` (inner), then the negation of every emitted candidate,
    /// deduplicated by exact value with first-seen order preserved.
    pub fn rational_root_candidates(&self, ctx: &mut Context) -> Vec<ExprId> {
        let leading = match as_integer(ctx, self.leading_coefficient()) {
            Some(n) => n,
            None => return Vec::new(),
        };
        let constant = match as_integer(ctx, self.constant_coefficient()) {
            Some(n) => n,
            None => return Vec::new(),
        };

        let div_leading = divisors::divisors(&leading.abs(), true, true);
        let div_constant = divisors::divisors(&constant.abs(), true, true);

        let mut candidates: Vec<ExprId> = Vec::new();
        for d in &div_constant {
            for a in &div_leading {
                let ratio = BigRational::new(d.clone(), a.clone());
                candidates.push(ctx.num_rational(ratio));
            }
        }
        for i in 0..candidates.len() {
            let negated = build::neg(ctx, candidates[i]);
            candidates.push(negated);
        }

        divisors::dedup_exprs(ctx, candidates)
    }

    /// Rebuild a canonical expression from the view.
    ///
    /// Walks ascending exponents, skipping exact-zero coefficients:
    /// exponent 0 contributes the bare coefficient, exponent 1 contributes
    /// `coeff * var`, higher exponents `coeff * var^exp`. The result is not
    /// simplified further.
    pub fn to_expr(&self, ctx: &mut Context) -> ExprId {
        let mut acc: Option<ExprId> = None;
        for exp in 0..=self.degree {
            let coeff = match self.terms.get(&exp) {
                Some(&id) => id,
                None => continue,
            };
            if is_zero_number(ctx, coeff) {
                continue;
            }
            let term = match exp {
                0 => coeff,
                1 => {
                    let var = ctx.add(Expr::Variable(self.var));
                    ctx.add(Expr::Mul(coeff, var))
                }
                _ => {
                    let var = ctx.add(Expr::Variable(self.var));
                    let exp_id = ctx.num(exp as i64);
                    let pow = ctx.add(Expr::Pow(var, exp_id));
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
}
