/// Numeric helpers.
///
/// The language has a single value type, `f64`. This module holds the
/// conventions built on top of it: how truth is encoded as a number, which
/// numbers count as true, and how numbers are printed.
pub mod num;
