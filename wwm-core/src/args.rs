//! Host argument validation.
//!
//! Host bindings translate each incoming value into `Option<Number>`:
//! `Some` for numbers, `None` for anything else (strings, booleans, `None`,
//! missing arguments).  [`int_args`] then either yields `N` coerced `i32`
//! values or [`WindowManagerError::InvalidArgumentType`] before any OS call
//! is made.

use crate::errors::WindowManagerError;

/// 2^32, the modulus of `ToInt32`.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// A numeric host value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Coerce to `i32` with ECMAScript `ToInt32` semantics: truncate toward
    /// zero, wrap modulo 2^32, non-finite values become 0.
    pub fn to_i32(self) -> i32 {
        match self {
            Number::Int(v) => v as i32,
            Number::Float(v) => float_to_i32(v),
        }
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::Int(v as i64)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

fn float_to_i32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let wrapped = value.trunc().rem_euclid(TWO_POW_32);
    wrapped as u32 as i32
}

/// Validate and coerce the first `N` host arguments.
///
/// Extra arguments are ignored; a missing or non-numeric one fails the
/// whole call.
pub fn int_args<const N: usize>(args: &[Option<Number>]) -> Result<[i32; N], WindowManagerError> {
    let mut out = [0i32; N];
    for (i, slot) in out.iter_mut().enumerate() {
        let number = args
            .get(i)
            .copied()
            .flatten()
            .ok_or(WindowManagerError::InvalidArgumentType)?;
        *slot = number.to_i32();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_args_all_numbers() {
        let args = [Some(Number::from(1)), Some(Number::from(-2)), Some(Number::from(3.9))];
        assert_eq!(int_args::<3>(&args), Ok([1, -2, 3]));
    }

    #[test]
    fn test_int_args_rejects_non_number() {
        let args = [Some(Number::from(1)), None];
        assert_eq!(
            int_args::<2>(&args),
            Err(WindowManagerError::InvalidArgumentType)
        );
    }

    #[test]
    fn test_int_args_rejects_missing() {
        let args = [Some(Number::from(1))];
        assert_eq!(
            int_args::<2>(&args),
            Err(WindowManagerError::InvalidArgumentType)
        );
    }

    #[test]
    fn test_int_args_ignores_extra() {
        let args = [Some(Number::from(7)), None, None];
        assert_eq!(int_args::<1>(&args), Ok([7]));
    }

    #[test]
    fn test_float_truncates_toward_zero() {
        assert_eq!(Number::from(-3.7).to_i32(), -3);
        assert_eq!(Number::from(3.7).to_i32(), 3);
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(Number::from(f64::NAN).to_i32(), 0);
        assert_eq!(Number::from(f64::INFINITY).to_i32(), 0);
        assert_eq!(Number::from(f64::NEG_INFINITY).to_i32(), 0);
    }

    #[test]
    fn test_wraps_modulo_two_pow_32() {
        assert_eq!(Number::from(4_294_967_296_i64).to_i32(), 0);
        assert_eq!(Number::from(2_147_483_648_i64).to_i32(), i32::MIN);
        assert_eq!(Number::from(2_147_483_648.0).to_i32(), i32::MIN);
        assert_eq!(Number::from(-4_294_967_297.0).to_i32(), -1);
    }
}
