//! Fixed-scale integer amounts (wei, token units)

use std::fmt;
use std::ops::{Add, Sub};

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{ToPrimitive, Zero};

use crate::{codec, PrimitiveError};

/// Scale used when none is given: 10^18 wei per ether
pub const DEFAULT_DECIMALS: u32 = 18;

/// An arbitrary-precision integer paired with a decimal scale.
///
/// `value` is the raw integer amount (wei for ether). `decimals` only affects
/// rendering; equality and arithmetic look at `value` alone, so callers mixing
/// scales must keep them consistent themselves.
///
/// ```
/// use ethrpc_primitives::EtherValue;
///
/// let v = EtherValue::from_hex("0x153711f0a39755800").unwrap();
/// assert_eq!(v.to_string(), "24.45936518");
/// ```
#[derive(Clone)]
pub struct EtherValue {
    value: BigInt,
    decimals: u32,
}

impl EtherValue {
    /// Wrap an integer at the default scale
    pub fn new(value: impl Into<BigInt>) -> Self {
        Self::with_decimals(value, DEFAULT_DECIMALS)
    }

    /// Wrap an integer at an explicit scale
    pub fn with_decimals(value: impl Into<BigInt>, decimals: u32) -> Self {
        EtherValue {
            value: value.into(),
            decimals,
        }
    }

    /// Zero at the default scale
    pub fn zero() -> Self {
        Self::new(BigInt::zero())
    }

    /// One whole unit (10^18) at the default scale
    pub fn one() -> Self {
        Self::new(BigInt::from(10u32).pow(DEFAULT_DECIMALS))
    }

    /// Interpret a hex quantity as the raw integer amount
    pub fn from_hex(s: &str) -> Result<Self, PrimitiveError> {
        let bytes = codec::decode(s)?;
        Ok(Self::new(codec::to_big_integer(&bytes)))
    }

    /// Parse a base-10 integer string as the raw integer amount
    pub fn from_int_string(s: &str) -> Result<Self, PrimitiveError> {
        BigInt::parse_bytes(s.as_bytes(), 10)
            .map(Self::new)
            .ok_or_else(|| PrimitiveError::InvalidNumericFormat(s.to_string()))
    }

    /// Parse a human-readable decimal amount (`"0.1"`, `"74"`) at the default scale
    pub fn from_decimal_str(s: &str) -> Result<Self, PrimitiveError> {
        Self::from_decimal_str_with_decimals(s, DEFAULT_DECIMALS)
    }

    /// Parse a human-readable decimal amount at an explicit scale.
    ///
    /// The fractional part is right-padded with zeros to `decimals` digits,
    /// or truncated if it carries more precision than the scale allows.
    pub fn from_decimal_str_with_decimals(s: &str, decimals: u32) -> Result<Self, PrimitiveError> {
        let invalid = || PrimitiveError::InvalidNumericFormat(s.to_string());

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(invalid());
        }
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }

        let scale = decimals as usize;
        let mut digits = String::with_capacity(int_part.len() + scale);
        digits.push_str(int_part);
        if frac_part.len() >= scale {
            digits.push_str(&frac_part[..scale]);
        } else {
            digits.push_str(frac_part);
            digits.extend(std::iter::repeat('0').take(scale - frac_part.len()));
        }

        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let value = if negative { -magnitude } else { magnitude };
        Ok(Self::with_decimals(value, decimals))
    }

    /// Raw integer amount
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Decimal scale
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Consume into the raw integer amount
    pub fn into_inner(self) -> BigInt {
        self.value
    }

    /// Approximate floating point amount in whole units
    pub fn to_f64(&self) -> f64 {
        let raw = self.value.to_f64().unwrap_or(f64::NAN);
        raw / 10f64.powi(self.decimals as i32)
    }

    /// Raw integer amount as a hex quantity, e.g. `0x3e8`
    pub fn to_hex_string(&self) -> String {
        let encoded = codec::encode_display(&self.value.magnitude().to_bytes_be());
        if self.value.sign() == Sign::Minus {
            format!("-{}", encoded)
        } else {
            encoded
        }
    }

    fn render(&self) -> String {
        let digits = self.value.magnitude().to_str_radix(10);
        let sign = if self.value.sign() == Sign::Minus { "-" } else { "" };
        if self.decimals == 0 {
            return format!("{}{}", sign, digits);
        }

        let scale = self.decimals as usize;
        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        let frac_part = frac_part.trim_end_matches('0');
        if frac_part.is_empty() {
            format!("{}{}", sign, int_part)
        } else {
            format!("{}{}.{}", sign, int_part, frac_part)
        }
    }
}

impl Default for EtherValue {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for EtherValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for EtherValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EtherValue({}, decimals={})", self.value, self.decimals)
    }
}

impl PartialEq for EtherValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for EtherValue {}

impl From<BigUint> for EtherValue {
    fn from(value: BigUint) -> Self {
        Self::new(value)
    }
}

impl From<u64> for EtherValue {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl Add for &EtherValue {
    type Output = EtherValue;

    fn add(self, rhs: &EtherValue) -> EtherValue {
        EtherValue::new(&self.value + &rhs.value)
    }
}

impl Add for EtherValue {
    type Output = EtherValue;

    fn add(self, rhs: EtherValue) -> EtherValue {
        &self + &rhs
    }
}

impl Sub for &EtherValue {
    type Output = EtherValue;

    fn sub(self, rhs: &EtherValue) -> EtherValue {
        EtherValue::new(&self.value - &rhs.value)
    }
}

impl Sub for EtherValue {
    type Output = EtherValue;

    fn sub(self, rhs: EtherValue) -> EtherValue {
        &self - &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Rendering ====================

    #[test]
    fn test_render_smallest_unit() {
        assert_eq!(EtherValue::new(1).to_string(), "0.000000000000000001");
    }

    #[test]
    fn test_render_zero() {
        assert_eq!(EtherValue::zero().to_string(), "0");
        assert_eq!(EtherValue::with_decimals(0, 0).to_string(), "0");
    }

    #[test]
    fn test_render_whole_units() {
        let v = EtherValue::new(BigInt::from(74) * BigInt::from(10u32).pow(18));
        assert_eq!(v.to_string(), "74");
        assert_eq!(EtherValue::one().to_string(), "1");
    }

    #[test]
    fn test_render_other_scales() {
        assert_eq!(EtherValue::with_decimals(1_500_000, 6).to_string(), "1.5");
        assert_eq!(EtherValue::with_decimals(42, 0).to_string(), "42");
    }

    #[test]
    fn test_render_negative() {
        assert_eq!(EtherValue::new(-1).to_string(), "-0.000000000000000001");
        let v = EtherValue::zero() - EtherValue::one();
        assert_eq!(v.to_string(), "-1");
    }

    #[test]
    fn test_from_hex_render() {
        let v = EtherValue::from_hex("0x153711f0a39755800").unwrap();
        assert_eq!(v.value().to_string(), "24459365180000000000");
        assert_eq!(v.to_string(), "24.45936518");
    }

    // ==================== Decimal parsing ====================

    #[test]
    fn test_from_decimal_fraction() {
        let v = EtherValue::from_decimal_str("0.1").unwrap();
        assert_eq!(v.value().to_string(), "100000000000000000");
        assert_eq!(v.to_string(), "0.1");
    }

    #[test]
    fn test_from_decimal_integer_forms() {
        let a = EtherValue::from_decimal_str("74").unwrap();
        let b = EtherValue::from_decimal_str("74.0").unwrap();
        assert_eq!(a.value().to_string(), "74000000000000000000");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "74");
        assert_eq!(b.to_string(), "74");
    }

    #[test]
    fn test_from_decimal_long_fraction() {
        let v = EtherValue::from_decimal_str("12345678.123981345").unwrap();
        assert_eq!(v.value().to_string(), "12345678123981345000000000");
    }

    #[test]
    fn test_from_decimal_truncates_excess_precision() {
        let v = EtherValue::from_decimal_str_with_decimals("1.23456", 2).unwrap();
        assert_eq!(v.value().to_string(), "123");
        assert_eq!(v.decimals(), 2);
    }

    #[test]
    fn test_from_decimal_partial_forms() {
        assert_eq!(
            EtherValue::from_decimal_str(".5").unwrap().to_string(),
            "0.5"
        );
        assert_eq!(EtherValue::from_decimal_str("5.").unwrap().to_string(), "5");
        assert_eq!(
            EtherValue::from_decimal_str("-2.5").unwrap().to_string(),
            "-2.5"
        );
    }

    #[test]
    fn test_from_decimal_invalid() {
        for input in ["", ".", "abc", "1.2.3", "1,5", "0x10", "--1"] {
            match EtherValue::from_decimal_str(input) {
                Err(PrimitiveError::InvalidNumericFormat(_)) => {}
                other => panic!("Expected InvalidNumericFormat for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_from_int_string() {
        let v = EtherValue::from_int_string("1299").unwrap();
        assert_eq!(v.value().to_string(), "1299");
        assert!(EtherValue::from_int_string("12.5").is_err());
    }

    // ==================== Arithmetic ====================

    #[test]
    fn test_add() {
        let a = EtherValue::from_int_string("1299").unwrap();
        let b = EtherValue::from_int_string("31701").unwrap();
        assert_eq!((&a + &b).value().to_string(), "33000");
    }

    #[test]
    fn test_sub() {
        let a = EtherValue::from_int_string("33000").unwrap();
        let b = EtherValue::from_int_string("1299").unwrap();
        assert_eq!((a - b).value().to_string(), "31701");
    }

    #[test]
    fn test_arithmetic_returns_default_scale() {
        let a = EtherValue::with_decimals(1, 6);
        let b = EtherValue::with_decimals(2, 6);
        assert_eq!((a + b).decimals(), DEFAULT_DECIMALS);
    }

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(EtherValue::with_decimals(5, 6), EtherValue::new(5));
        assert_ne!(EtherValue::new(5), EtherValue::new(6));
    }

    // ==================== Conversions ====================

    #[test]
    fn test_to_hex_string() {
        assert_eq!(EtherValue::new(1000).to_hex_string(), "0x3e8");
        assert_eq!(EtherValue::zero().to_hex_string(), "0x0");
    }

    #[test]
    fn test_to_f64() {
        let v = EtherValue::from_decimal_str("0.1").unwrap();
        assert!((v.to_f64() - 0.1).abs() < 1e-12);
    }
}
