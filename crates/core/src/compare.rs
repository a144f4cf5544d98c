//! Null-safe equality operators.
//!
//! Absent operands are `None`. Both absent compare equal, exactly one absent
//! compares unequal, and `not_equals` is always the negation of `equals`.

/// `lhs == rhs` with absent operands.
///
/// Present operands are always compared through `PartialEq`, so this agrees
/// with `==` on every pair.
pub fn equals<T>(lhs: Option<&T>, rhs: Option<&T>) -> bool
where
    T: PartialEq + ?Sized,
{
    match (lhs, rhs) {
        (None, None) => true,
        (Some(lhs), Some(rhs)) => lhs == rhs,
        _ => false,
    }
}

/// `lhs != rhs` with absent operands.
pub fn not_equals<T>(lhs: Option<&T>, rhs: Option<&T>) -> bool
where
    T: PartialEq + ?Sized,
{
    !equals(lhs, rhs)
}
