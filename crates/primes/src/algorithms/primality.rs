//! Trial-division primality test.
//!
//! ## Purpose
//!
//! This module decides whether a single integer is prime. It is the unit of
//! work that every filter pass applies to each candidate.
//!
//! ## Design notes
//!
//! * **Pure**: No side effects, no allocation, deterministic.
//! * **Total**: Defined for every value of every primitive integer type,
//!   including negatives and `T::max_value()`.
//! * **Overflow-free bound**: The loop condition `d <= n / d` is equivalent
//!   to `d <= floor(sqrt(n))` and never computes `d * d`.
//!
//! ## Key concepts
//!
//! * **Fast path**: 2, 3, 5 and 7 are accepted without division.
//! * **Even rejection**: Any other even number is composite.
//! * **Odd trial division**: Divide by 3, 5, 7, ... up to the square root.
//!
//! ## Non-goals
//!
//! * This module does not implement sieves or probabilistic tests.

// External dependencies
use num_traits::PrimInt;

/// Return `true` iff `n` is prime.
#[inline]
pub fn is_prime<T: PrimInt>(n: T) -> bool {
    let one = T::one();
    let two = one + one;
    if n < two {
        return false;
    }

    let three = two + one;
    let five = three + two;
    let seven = five + two;
    if n == two || n == three || n == five || n == seven {
        return true;
    }

    if (n % two).is_zero() {
        return false;
    }

    let mut divisor = three;
    while divisor <= n / divisor {
        if (n % divisor).is_zero() {
            return false;
        }
        divisor = divisor + two;
    }

    true
}
