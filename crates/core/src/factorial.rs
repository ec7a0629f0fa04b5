// crates/core/src/factorial.rs

/// Smallest `n` whose factorial carries 64 factors of two, i.e. wraps to 0.
const WRAPPED_ZERO_FROM: i64 = 66;

/// Computes `n!` by recursive descent over wrapping 64-bit arithmetic.
///
/// Exact through `20!`; from `21!` on the product wraps silently, matching
/// two's-complement `long long` behavior. `n!` is divisible by 2^64 for
/// every `n >= 66`, so the wrapped result is zero from there and the descent
/// stops instead of recursing `n` deep. `n <= 1` (including negative `n`)
/// yields 1.
#[must_use]
pub fn factorial(n: i64) -> i64 {
    if n >= WRAPPED_ZERO_FROM {
        return 0;
    }
    if n <= 1 {
        return 1;
    }
    n.wrapping_mul(factorial(n - 1))
}
