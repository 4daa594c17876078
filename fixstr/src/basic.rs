//! Small helpers on arrays and comparable values.

/// Number of elements of a fixed-size array type.
pub trait Dim {
    /// Number of elements.
    const DIM: usize;
}

impl<T, const N: usize> Dim for [T; N] {
    const DIM: usize = N;
}

/// Returns the number of elements of `array`.
pub const fn dim<T, const N: usize>(_array: &[T; N]) -> usize {
    N
}

/// Returns the greater of `a` and `b`. When neither is greater (including unordered values such
/// as NaN), returns `b`.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

/// Returns the lesser of `a` and `b`. When neither is lesser (including unordered values such as
/// NaN), returns `b`.
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { a } else { b }
}

/// Tests if a value lies between a left and a right border, using the given comparison operators.
///
/// The value is evaluated once. Each operand must be a single token, optionally negated, so wrap
/// anything else in parentheses.
///
/// # Example
///
/// ```
/// use fixstr::between;
///
/// let x = 5;
/// assert!(between!(0 <= x < 10));
/// assert!(!between!(0 < (x - 5) <= 10));
/// assert!(between!(-10 < -x < 0));
/// ```
#[macro_export]
macro_rules! between {
    (@cmp $l:tt $cl:tt $v:tt $cr:tt $r:tt) => {
        match $v {
            v => ($l $cl v) && (v $cr $r),
        }
    };
    // A negated operand is two tokens. Group it into one before going on.
    (@r $l:tt $cl:tt $v:tt $cr:tt - $r:tt) => {
        $crate::between!(@cmp $l $cl $v $cr (-$r))
    };
    (@r $l:tt $cl:tt $v:tt $cr:tt $r:tt) => {
        $crate::between!(@cmp $l $cl $v $cr $r)
    };
    (@v $l:tt $cl:tt - $v:tt $($rest:tt)+) => {
        $crate::between!(@r $l $cl (-$v) $($rest)+)
    };
    (@v $l:tt $cl:tt $v:tt $($rest:tt)+) => {
        $crate::between!(@r $l $cl $v $($rest)+)
    };
    (- $l:tt $($rest:tt)+) => {
        $crate::between!(@v (-$l) $($rest)+)
    };
    ($l:tt $($rest:tt)+) => {
        $crate::between!(@v $l $($rest)+)
    };
}
