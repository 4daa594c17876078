//! Source code positions that can be passed around as a plain value.

use core::fmt::Display;
use core::panic::Location;

/// File, function and line of a place in the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// File name.
    pub file: &'static str,
    /// Path of the enclosing function. [`None`] when it cannot be known, e.g. for positions
    /// obtained through [`Position::caller()`].
    pub function: Option<&'static str>,
    /// Line number.
    pub line: u32,
}

impl Position {
    /// Returns the position of the caller. When the calling function is annotated with
    /// `#[track_caller]`, the position of its caller is returned instead, and so on.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&'static Location<'static>> for Position {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            function: None,
            line: location.line(),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)?;
        if let Some(function) = self.function {
            write!(f, " ({})", function)?;
        }
        Ok(())
    }
}

/// Expands to the path of the enclosing function as `&'static str`, e.g. `my_crate::module::func`.
///
/// Closures do not count as functions. Inside one, the function defining the closure is returned.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::position::trim_function_name(type_name_of(f))
    }};
}

/// Expands to the [`Position`] of the macro invocation.
///
/// # Example
///
/// ```
/// use fixstr::{here, position::Position};
///
/// fn report(pos: Position) -> u32 {
///     pos.line
/// }
///
/// assert!(report(here!()) > 0);
/// ```
#[macro_export]
macro_rules! here {
    () => {
        $crate::position::Position {
            file: ::core::file!(),
            function: ::core::option::Option::Some($crate::function_name!()),
            line: ::core::line!(),
        }
    };
}

/// Strips the helper item and closure markers that [`function_name!`] sees from the type name.
#[doc(hidden)]
pub fn trim_function_name(name: &'static str) -> &'static str {
    let mut name = name.strip_suffix("::f").unwrap_or(name);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}
