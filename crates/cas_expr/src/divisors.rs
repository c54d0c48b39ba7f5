//! Positive divisor enumeration and order-preserving value dedup.

use crate::context::{Context, ExprId};
use crate::views::exprs_equal;
use num_bigint::BigInt;
use num_integer::{Integer, Roots};
use num_traits::{Signed, ToPrimitive, Zero};

/// Ascending positive divisors of `|n|`.
///
/// The inclusion flags control whether `1` and `|n|` themselves appear.
/// Zero has no divisors; values too large for the trial loop yield an empty
/// list, which callers treat as "no candidates".
pub fn divisors(n: &BigInt, include_one: bool, include_self: bool) -> Vec<BigInt> {
    if n.is_zero() {
        return Vec::new();
    }
    let n_u64: u64 = match n.abs().to_u64() {
        Some(v) => v,
        None => return Vec::new(),
    };

    let mut divs: Vec<u64> = Vec::new();
    // Integer square root: f64 rounding would miss the square-root divisor
    // of perfect squares above 2^53.
    let sqrt_n = Roots::sqrt(&n_u64);
    for i in 1..=sqrt_n {
        if Integer::is_multiple_of(&n_u64, &i) {
            divs.push(i);
            if i != n_u64 / i {
                divs.push(n_u64 / i);
            }
        }
    }
    divs.sort_unstable();

    divs.into_iter()
        .filter(|&d| (include_one || d != 1) && (include_self || d != n_u64))
        .map(BigInt::from)
        .collect()
}

/// Remove exact-equality duplicates, keeping the first occurrence of each
/// value in order. Candidate lists are small, so a quadratic scan is fine.
pub fn dedup_exprs(ctx: &Context, items: Vec<ExprId>) -> Vec<ExprId> {
    let mut out: Vec<ExprId> = Vec::with_capacity(items.len());
    for id in items {
        if !out.iter().any(|&kept| exprs_equal(ctx, kept, id)) {
            out.push(id);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_u64s(divs: Vec<BigInt>) -> Vec<u64> {
        divs.iter().map(|d| d.to_u64().unwrap()).collect()
    }

    #[test]
    fn divisors_of_twelve() {
        assert_eq!(
            to_u64s(divisors(&BigInt::from(12), true, true)),
            vec![1, 2, 3, 4, 6, 12]
        );
    }

    #[test]
    fn divisors_respect_inclusion_flags() {
        assert_eq!(
            to_u64s(divisors(&BigInt::from(12), false, false)),
            vec![2, 3, 4, 6]
        );
        assert_eq!(to_u64s(divisors(&BigInt::from(1), true, true)), vec![1]);
        assert!(divisors(&BigInt::from(1), false, true).is_empty());
    }

    #[test]
    fn perfect_squares_keep_their_square_root_divisor() {
        assert_eq!(
            to_u64s(divisors(&BigInt::from(36), true, true)),
            vec![1, 2, 3, 4, 6, 9, 12, 18, 36]
        );
        // 94906267^2 is a perfect square above 2^53, where f64 square
        // roots are no longer exact.
        let big = 94_906_267u64;
        let square = BigInt::from(big) * BigInt::from(big);
        let divs = divisors(&square, true, true);
        assert!(divs.contains(&BigInt::from(big)));
    }

    #[test]
    fn divisors_of_zero_are_empty() {
        assert!(divisors(&BigInt::zero(), true, true).is_empty());
    }

    #[test]
    fn divisors_use_absolute_value() {
        assert_eq!(to_u64s(divisors(&BigInt::from(-6), true, true)), vec![1, 2, 3, 6]);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let mut ctx = Context::new();
        let a = ctx.num(1);
        let b = ctx.num(2);
        let a2 = ctx.num(1);
        let out = dedup_exprs(&ctx, vec![a, b, a2]);
        assert_eq!(out, vec![a, b]);
    }
}
