//! Exact number helpers shared by every unit generator.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`gcd`] | Euclid's algorithm on non-negative integers |
//! | [`simplify_fraction`] | Canonical `sign?num/den` answer string |
//! | [`Fraction`] | Always-reduced rational used for working values |
//! | [`Decimal`] | Terminating decimal stored as a scaled integer |
//! | [`decimal_to_fraction`] | Finite decimal → canonical fraction string |
//! | [`round_to`] | Round to a fixed number of fractional digits |

use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Answer marker for a fraction whose denominator is zero.
pub const UNDEFINED: &str = "Undefined";

/// Scaling stops once the decimal is this close to an integer.
const SCALE_TOLERANCE: f64 = 1e-9;

/// Upper bound on the fractional digits `decimal_to_fraction` will scale through.
const MAX_SCALE_PLACES: u32 = 9;

/// Greatest common divisor; `gcd(a, 0) == a`.
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Reduce `numerator/denominator` and format it as the canonical answer string.
///
/// Returns [`UNDEFINED`] for a zero denominator and `"0/1"` for a zero
/// numerator. The sign is carried on the numerator only.
pub fn simplify_fraction(numerator: i64, denominator: i64) -> String {
    if denominator == 0 {
        return UNDEFINED.to_string();
    }
    if numerator == 0 {
        return "0/1".to_string();
    }
    let common = gcd(numerator.unsigned_abs(), denominator.unsigned_abs());
    let sign = if numerator.signum() * denominator.signum() < 0 { "-" } else { "" };
    format!(
        "{sign}{}/{}",
        numerator.unsigned_abs() / common,
        denominator.unsigned_abs() / common
    )
}

/// Convert a finite decimal (at most a handful of fractional digits) to its
/// canonical fraction string, e.g. `0.25 → "1/4"`, `-1.5 → "-3/2"`.
pub fn decimal_to_fraction(value: f64) -> String {
    match Fraction::from_decimal(value) {
        Some(f) => f.canonical(),
        None => UNDEFINED.to_string(),
    }
}

/// Round `value` to `places` fractional digits.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

// ---------------------------------------------------------------------------
// Fraction
// ---------------------------------------------------------------------------

/// A rational number kept in lowest terms with a positive denominator.
///
/// Every constructor and operator re-reduces, so two equal values always have
/// identical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    num: i64,
    den: i64,
}

impl Fraction {
    /// `None` when `den == 0`.
    pub fn new(num: i64, den: i64) -> Option<Self> {
        if den == 0 {
            return None;
        }
        if num == 0 {
            return Some(Fraction { num: 0, den: 1 });
        }
        let common = gcd(num.unsigned_abs(), den.unsigned_abs()) as i64;
        let sign = num.signum() * den.signum();
        Some(Fraction {
            num: sign * (num.abs() / common),
            den: den.abs() / common,
        })
    }

    pub fn whole(n: i64) -> Self {
        Fraction { num: n, den: 1 }
    }

    pub fn numerator(self) -> i64 {
        self.num
    }

    pub fn denominator(self) -> i64 {
        self.den
    }

    pub fn is_whole(self) -> bool {
        self.den == 1
    }

    pub fn is_zero(self) -> bool {
        self.num == 0
    }

    /// Division; `None` when `rhs` is zero.
    pub fn checked_div(self, rhs: Fraction) -> Option<Fraction> {
        Fraction::new(self.num * rhs.den, self.den * rhs.num)
    }

    /// `self^exp` for a small non-negative exponent.
    pub fn pow(self, exp: u32) -> Fraction {
        (0..exp).fold(Fraction::whole(1), |acc, _| acc * self)
    }

    /// Largest integer `<= self`.
    pub fn floor(self) -> i64 {
        self.num.div_euclid(self.den)
    }

    /// Smallest integer `>= self`.
    pub fn ceil(self) -> i64 {
        -(-self.num).div_euclid(self.den)
    }

    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Canonical answer string (see [`simplify_fraction`]).
    pub fn canonical(self) -> String {
        simplify_fraction(self.num, self.den)
    }

    /// Scale a finite decimal by powers of ten until it is integral, then
    /// reduce. The sign is taken off before scaling.
    pub fn from_decimal(value: f64) -> Option<Fraction> {
        if !value.is_finite() {
            return None;
        }
        if value == 0.0 {
            return Some(Fraction::whole(0));
        }
        let negative = value < 0.0;
        let mut magnitude = value.abs();
        let mut den: i64 = 1;
        let mut places = 0;
        while (magnitude - magnitude.round()).abs() > SCALE_TOLERANCE && places < MAX_SCALE_PLACES {
            magnitude *= 10.0;
            den *= 10;
            places += 1;
        }
        let num = magnitude.round() as i64;
        Fraction::new(if negative { -num } else { num }, den)
    }
}

impl Add for Fraction {
    type Output = Fraction;
    fn add(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.den + rhs.num * self.den, self.den * rhs.den)
            .unwrap_or(Fraction::whole(0))
    }
}

impl Sub for Fraction {
    type Output = Fraction;
    fn sub(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.den - rhs.num * self.den, self.den * rhs.den)
            .unwrap_or(Fraction::whole(0))
    }
}

impl Mul for Fraction {
    type Output = Fraction;
    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.num, self.den * rhs.den).unwrap_or(Fraction::whole(0))
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Fraction::whole(n)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

// ---------------------------------------------------------------------------
// Decimal
// ---------------------------------------------------------------------------

/// A terminating decimal: `scaled / 10^places`.
///
/// Generators draw decimals as scaled integers so every operand and answer
/// stays exact until the final (optional) rounding step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decimal {
    pub scaled: i64,
    pub places: u32,
}

impl Decimal {
    pub fn new(scaled: i64, places: u32) -> Self {
        Decimal { scaled, places }
    }

    pub fn scale(self) -> i64 {
        10i64.pow(self.places)
    }

    pub fn to_fraction(self) -> Fraction {
        Fraction::new(self.scaled, self.scale()).unwrap_or(Fraction::whole(0))
    }

    pub fn to_f64(self) -> f64 {
        self.scaled as f64 / self.scale() as f64
    }
}

/// Trailing zeros are dropped: `2.50 → "2.5"`, `3.0 → "3"`.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = self.scale();
        let sign = if self.scaled < 0 { "-" } else { "" };
        let abs = self.scaled.unsigned_abs();
        let int_part = abs / scale as u64;
        let frac_part = abs % scale as u64;
        if frac_part == 0 {
            return write!(f, "{sign}{int_part}");
        }
        let digits = format!("{:0width$}", frac_part, width = self.places as usize);
        write!(f, "{sign}{int_part}.{}", digits.trim_end_matches('0'))
    }
}
