//! Integer helpers with C `int` semantics: overflow wraps in two's complement.

/// Wrapping addition, so `add(i32::MAX, 1) == i32::MIN`.
#[inline]
pub const fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Addition that reports overflow instead of wrapping.
#[inline]
pub const fn checked_add(a: i32, b: i32) -> Option<i32> {
    a.checked_add(b)
}

#[inline]
pub const fn square(x: i32) -> i32 {
    x.wrapping_mul(x)
}

#[inline]
pub const fn is_positive(x: i32) -> bool {
    x > 0
}

/// Largest element, or `None` for an empty slice.
pub fn find_max(values: &[i32]) -> Option<i32> {
    values.iter().copied().max()
}
