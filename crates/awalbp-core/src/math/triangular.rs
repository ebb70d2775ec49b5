// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::{CheckedAdd, CheckedMul, PrimInt};

/// Computes the `n`-th triangular number `n * (n + 1) / 2`.
///
/// Returns `None` if `n` is negative or if the intermediate product
/// overflows `T`. The product `n * (n + 1)` is always even, so the final
/// division is exact and cannot fail.
///
/// # Examples
///
/// ```rust
/// # use awalbp_core::math::triangular::triangular;
///
/// assert_eq!(triangular(4i64), Some(10));
/// assert_eq!(triangular(0i64), Some(0));
/// assert_eq!(triangular(-1i64), None);
/// assert_eq!(triangular(i8::MAX), None); // 127 * 128 overflows i8
/// ```
#[inline]
pub fn triangular<T>(n: T) -> Option<T>
where
    T: PrimInt + CheckedAdd + CheckedMul,
{
    if n < T::zero() {
        return None;
    }

    let successor = n.checked_add(&T::one())?;
    let product = n.checked_mul(&successor)?;
    Some(product / (T::one() + T::one()))
}
