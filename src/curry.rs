//! Currying and partial application
//!
//! Currying turns a multi-argument function into a chain of single-argument
//! functions; partial application fixes some arguments up front and leaves
//! the rest open. Both produce small, named, reusable functions out of
//! general ones: the functional answer to writing one-off wrapper methods.
//!
//! The canonical demonstration is a family of unit converters built from a
//! single rate-based conversion:
//!
//! ```rust
//! use meander::curry2;
//!
//! fn convert(rate: f64, value: f64) -> f64 {
//!     value * rate
//! }
//!
//! let curried = curry2!(convert);
//! let km_to_miles = curried(0.621_371);
//! let kg_to_pounds = curried(2.204_623);
//!
//! assert!((km_to_miles(100.0) - 62.137_1).abs() < 1e-9);
//! assert!((kg_to_pounds(10.0) - 22.046_23).abs() < 1e-9);
//! ```
//!
//! # Cloning semantics
//!
//! Each level of a curried chain clones the function and the arguments
//! fixed so far, so intermediate applications are ordinary reusable `Fn`
//! closures: applying `curried(0.621_371)` does not consume `curried`.
//! Argument types therefore need [`Clone`] (most do; function items and
//! copyable scalars are free to clone).

/// Convert a two-argument function into curried form.
///
/// `curry2!(f)` returns a closure such that `curry2!(f)(a)(b) == f(a, b)`.
/// Intermediate applications are reusable:
///
/// ```rust
/// use meander::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 {
///     first * second
/// }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
///
/// Closures curry the same way as named functions:
///
/// ```rust
/// use meander::curry2;
///
/// let join = curry2!(|left: String, right: String| format!("{left}-{right}"));
/// let with_prefix = join(String::from("id"));
///
/// assert_eq!(with_prefix(String::from("42")), "id-42");
/// assert_eq!(with_prefix(String::from("43")), "id-43");
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |first| {
            let function = function.clone();
            move |second| function(::core::clone::Clone::clone(&first), second)
        }
    }};
}

/// Convert a three-argument function into curried form.
///
/// `curry3!(f)` returns nested closures such that
/// `curry3!(f)(a)(b)(c) == f(a, b, c)`.
///
/// ```rust
/// use meander::curry3;
///
/// fn volume(width: f64, height: f64, depth: f64) -> f64 {
///     width * height * depth
/// }
///
/// let curried = curry3!(volume);
/// let unit_column = curried(1.0)(1.0);
///
/// assert_eq!(unit_column(5.0), 5.0);
/// assert_eq!(curried(2.0)(3.0)(4.0), 24.0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |first| {
            let function = function.clone();
            move |second| {
                let function = function.clone();
                let first = ::core::clone::Clone::clone(&first);
                move |third| function(
                    ::core::clone::Clone::clone(&first),
                    ::core::clone::Clone::clone(&second),
                    third,
                )
            }
        }
    }};
}

/// Partially apply a function, leaving `__` positions open.
///
/// `__` is matched as a literal token: write it directly in the call, it is
/// not an item to import. The fixed arguments are cloned into the returned
/// closure; open positions become the closure's parameters, in order.
///
/// # Supported forms
///
/// Two-argument functions with one open position, and three-argument
/// functions with one or two open positions:
///
/// ```rust
/// use meander::partial;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let from_ten = partial!(subtract, 10, __);
/// let minus_three = partial!(subtract, __, 3);
///
/// assert_eq!(from_ten(4), 6);
/// assert_eq!(minus_three(10), 7);
/// ```
///
/// ```rust
/// use meander::partial;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let percent = partial!(clamp, 0, 100, __);
/// assert_eq!(percent(120), 100);
/// assert_eq!(percent(-5), 0);
///
/// let bounded_by = partial!(clamp, __, __, 50);
/// assert_eq!(bounded_by(0, 10), 10);
/// ```
#[macro_export]
macro_rules! partial {
    // two open positions of three
    ($function:expr, __, __, $third:expr $(,)?) => {{
        let function = $function;
        let third = $third;
        move |first, second| function(first, second, third.clone())
    }};
    ($function:expr, __, $second:expr, __ $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first, third| function(first, second.clone(), third)
    }};
    ($function:expr, $first:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third| function(first.clone(), second, third)
    }};
    // one open position of three
    ($function:expr, __, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        let third = $third;
        move |first| function(first, second.clone(), third.clone())
    }};
    ($function:expr, $first:expr, __, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let third = $third;
        move |second| function(first.clone(), second, third.clone())
    }};
    ($function:expr, $first:expr, $second:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move |third| function(first.clone(), second.clone(), third)
    }};
    // one open position of two
    ($function:expr, __, $second:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first| function(first, second.clone())
    }};
    ($function:expr, $first:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second| function(first.clone(), second)
    }};
}
