//! Number theory: Fibonacci, primality, factorization, GCD and LCM.

use num_bigint::BigUint;
use std::mem;

/// The Fibonacci sequence `0, 1, 1, 2, 3, 5, ...` as an unbounded iterator.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: BigUint,
    next: BigUint,
}

impl Fibonacci {
    /// Start the sequence at `F(0) = 0`.
    pub fn new() -> Self {
        Self {
            current: BigUint::from(0u8),
            next: BigUint::from(1u8),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let following = &self.current + &self.next;
        let next = mem::replace(&mut self.next, following);
        Some(mem::replace(&mut self.current, next))
    }
}

/// The first `n` Fibonacci numbers; empty for `n <= 0`.
pub fn fibonacci_sequence(n: i64) -> Vec<BigUint> {
    let count = usize::try_from(n).unwrap_or(0);
    Fibonacci::new().take(count).collect()
}

/// Whether `n` is prime. Numbers below 2 never are.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut divisor = 3u64;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Prime factors of `n` in ascending order, with multiplicity.
///
/// `0` and `1` have no prime factors.
pub fn prime_factors(n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }

    let mut rest = n;
    while rest % 2 == 0 {
        factors.push(2);
        rest /= 2;
    }

    let mut divisor = 3u64;
    // u128 keeps the square from overflowing near u64::MAX.
    while u128::from(divisor) * u128::from(divisor) <= u128::from(rest) {
        while rest % divisor == 0 {
            factors.push(divisor);
            rest /= divisor;
        }
        divisor += 2;
    }
    if rest > 1 {
        factors.push(rest);
    }

    factors
}

/// Greatest common divisor by Euclid's algorithm.
///
/// Signs are ignored and `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, `|a * b| / gcd(a, b)`.
///
/// Zero if either argument is zero. The result is exact for every pair of
/// `i64` values.
pub fn lcm(a: i64, b: i64) -> u128 {
    if a == 0 || b == 0 {
        return 0;
    }
    let divisor = u128::from(gcd(a, b));
    u128::from(a.unsigned_abs()) / divisor * u128::from(b.unsigned_abs())
}
