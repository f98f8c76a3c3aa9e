//! Decimal numbers: a double in the trivial case, a `BigDecimal` otherwise.
//!
//! The trivial payload holds the bits of the magnitude as an `f64` and the
//! sign sits in the cell as for every other kind. A value is stored trivially
//! exactly when its decimal expansion is the shortest rendering of a finite
//! double, anything else (more digits, larger range) is kept in a
//! [`DecimalLayout`]. Arithmetic between two trivial values runs in `f64`
//! and only falls back to exact arithmetic when the double overflows.

// used for layout downcasting
use std::any::Any;
// used for comparisons
use std::cmp::Ordering;
// used when parsing a string to a Decimal
use std::str::FromStr;
// used to print out readable forms of a decimal
use std::fmt;
// used to indicate that decimals are hashable
use std::hash::{Hash, Hasher};
// used to overload common operations for decimals
use std::ops;

// used for decimal numbers
use bigdecimal::BigDecimal;
use lazy_static::lazy_static;
use num_bigint::{BigInt, Sign};
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};
use regex::Regex;
use tracing::debug;

use crate::data::Data;
use crate::error::{NumcellError, Result};
use crate::hash;
use crate::integer::Integer;
use crate::kind::Kind;
use crate::layout::Layout;
use crate::magnitude;
use crate::natural::Natural;
use crate::radix::{self, Literal, Radix};
use crate::settings::{DEFAULT_DECIMAL_PRECISION, Settings};

// 2^64, the first magnitude that no longer fits an integer word
const WORD_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Largest absolute exponent accepted in a decimal literal such as `1e100000`.
/// Larger exponents are a parse error, so rendering stays bounded by the input.
pub const MAX_DECIMAL_EXPONENT: i64 = 100_000;

// finite doubles lie within 10^-324 and 10^309
const DOUBLE_EXPONENT_RANGE: i64 = 330;

lazy_static! {
    // digits, optional fraction and exponent; the sign is split off beforehand
    static ref DECIMAL_LITERAL: Regex =
        Regex::new(r"^([0-9]*)(?:\.([0-9]*))?(?:[eE]([+-]?[0-9]+))?$").expect("decimal literal pattern");
}

// ------------- Layout --------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalLayout {
    value: BigDecimal,
}

impl DecimalLayout {
    /// Keeps the magnitude only, the sign belongs to the owning cell.
    pub fn new(value: BigDecimal) -> Self {
        Self { value: value.abs() }
    }
    pub fn value(&self) -> &BigDecimal {
        &self.value
    }
}

impl Layout for DecimalLayout {
    fn clone_layout(&self) -> Box<dyn Layout> {
        Box::new(self.clone())
    }
    fn hash_layout(&self) -> u64 {
        let (digits, exponent) = self.value.normalized().as_bigint_and_exponent();
        let (_, bytes) = digits.to_bytes_le();
        hash::combine(hash::bytes(&bytes), hash::value(exponent as u64))
    }
    fn eq_layout(&self, other: &dyn Layout) -> bool {
        other
            .downcast_ref::<DecimalLayout>()
            .is_some_and(|other| self.value == other.value)
    }
    fn render(&self, radix: Radix, literal: Literal) -> Result<String> {
        render_magnitude(&self.value, radix, literal, DEFAULT_DECIMAL_PRECISION)
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
    fn kind(&self) -> &'static str {
        Decimal::KIND
    }
}

fn ten_pow(exponent: u64) -> BigInt {
    Pow::pow(BigInt::from(10u32), exponent)
}

fn words_to_bigint(words: &[u64]) -> BigInt {
    BigInt::from(magnitude::to_big(words))
}

// position of the leading digit, 0 for 1.x, -1 for 0.1x
fn adjusted_exponent(value: &BigDecimal) -> i64 {
    let (digits, scale) = value.normalized().as_bigint_and_exponent();
    let length = digits.abs().to_string().len() as i64;
    length.saturating_sub(1).saturating_sub(scale)
}

fn integer_to_big(integer: &Integer) -> BigDecimal {
    let digits = words_to_bigint(integer.words());
    let digits = if integer.is_negative() { -digits } else { digits };
    BigDecimal::new(digits, 0)
}

// positional rendering without exponent, e.g. "0.00125" or "1200"
fn plain(value: &BigDecimal) -> String {
    let (digits, scale) = value.normalized().as_bigint_and_exponent();
    let digits = digits.abs().to_string();
    if scale <= 0 {
        return format!("{}{}", digits, "0".repeat((-scale) as usize));
    }
    let scale = scale as usize;
    if digits.len() > scale {
        let point = digits.len() - scale;
        format!("{}.{}", &digits[..point], &digits[point..])
    } else {
        format!("0.{}{}", "0".repeat(scale - digits.len()), digits)
    }
}

/// `a / b` rounded to `precision` significant digits.
fn divide(a: &BigDecimal, b: &BigDecimal, precision: u64) -> BigDecimal {
    let (a_digits, a_scale) = a.as_bigint_and_exponent();
    let (b_digits, b_scale) = b.as_bigint_and_exponent();
    let a_len = a_digits.abs().to_string().len() as i64;
    let b_len = b_digits.abs().to_string().len() as i64;
    let shift = (precision as i64 + b_len - a_len + 1).max(0);
    let quotient = (a_digits * ten_pow(shift as u64)) / b_digits;
    BigDecimal::new(quotient, a_scale - b_scale + shift).with_prec(precision)
}

fn render_magnitude(value: &BigDecimal, radix: Radix, literal: Literal, precision: u64) -> Result<String> {
    let prefix = radix::prefix(radix, literal)?;
    if radix == Radix::Decimal {
        return Ok(format!("{}{}", prefix, plain(value)));
    }
    let (digits, scale) = value.normalized().as_bigint_and_exponent();
    let digits = digits.abs();
    let (integral, mut fraction, unit) = if scale <= 0 {
        (digits * ten_pow(scale.unsigned_abs()), BigInt::zero(), BigInt::one())
    } else {
        let unit = ten_pow(scale as u64);
        (&digits / &unit, &digits % &unit, unit)
    };
    let (_, words) = integral.to_u64_digits();
    let mut text = format!("{}{}", prefix, radix::render_magnitude(&words, radix, literal));
    if fraction.is_zero() {
        return Ok(text);
    }
    if literal == Literal::Unix {
        return Err(NumcellError::domain(
            "the unix alphabet uses '.' as a digit and cannot render a fraction",
        ));
    }
    text.push('.');
    let base = BigInt::from(radix.value());
    for _ in 0..precision {
        if fraction.is_zero() {
            break;
        }
        fraction *= &base;
        let digit = &fraction / &unit;
        fraction = &fraction % &unit;
        text.push(radix::digit_char(digit.to_u64().unwrap_or(0), literal));
    }
    Ok(text)
}

fn parse_decimal_radix(text: &str, body: &str) -> Result<BigDecimal> {
    let captures = DECIMAL_LITERAL
        .captures(body)
        .ok_or_else(|| NumcellError::parse(text, "malformed decimal literal"))?;
    let integral = captures.get(1).map_or("", |m| m.as_str());
    let fraction = captures.get(2).map_or("", |m| m.as_str());
    if integral.is_empty() && fraction.is_empty() {
        return Err(NumcellError::parse(text, "no digits found"));
    }
    let exponent: i64 = match captures.get(3) {
        Some(m) => m
            .as_str()
            .parse()
            .map_err(|_| NumcellError::parse(text, "exponent out of range"))?,
        None => 0,
    };
    if exponent.unsigned_abs() > MAX_DECIMAL_EXPONENT as u64 {
        debug!(input = text, exponent, "decimal exponent rejected");
        return Err(NumcellError::parse(
            text,
            format!("exponent beyond +-{}", MAX_DECIMAL_EXPONENT),
        ));
    }
    let scale = (fraction.len() as i64)
        .checked_sub(exponent)
        .ok_or_else(|| NumcellError::parse(text, "exponent out of range"))?;
    let digits = BigInt::from_str(&format!("{}{}", integral, fraction))
        .map_err(|e| NumcellError::parse(text, e.to_string()))?;
    Ok(BigDecimal::new(digits, scale))
}

fn parse_positional(text: &str, body: &str, radix: Radix, literal: Literal) -> Result<BigDecimal> {
    let (integral, fraction) = match (literal, body.split_once('.')) {
        (Literal::Unix, _) | (_, None) => (body, ""),
        (_, Some(split)) => split,
    };
    if integral.is_empty() && fraction.is_empty() {
        return Err(NumcellError::parse(text, "no digits found"));
    }
    let integral = match integral.is_empty() {
        true => Vec::new(),
        false => radix::parse_magnitude(text, integral, radix, literal)?,
    };
    let mut value = BigDecimal::new(words_to_bigint(&integral), 0);
    if !fraction.is_empty() {
        let numerator = radix::parse_magnitude(text, fraction, radix, literal)?;
        let denominator = magnitude::pow(&[radix.value()], fraction.len() as u64);
        value = value
            + divide(
                &BigDecimal::new(words_to_bigint(&numerator), 0),
                &BigDecimal::new(words_to_bigint(&denominator), 0),
                DEFAULT_DECIMAL_PRECISION,
            );
    }
    Ok(value)
}

// ------------- Decimal --------------
#[derive(Debug, Clone)]
pub struct Decimal(Data);

impl Decimal {
    // the float must be finite
    fn from_float(float: f64) -> Decimal {
        let magnitude = float.abs();
        Decimal(Data::new(magnitude.to_bits(), float < 0.0))
    }
    /// Builds the canonical decimal for an exact value.
    pub fn from_big(value: BigDecimal) -> Decimal {
        let sign = value.sign() == Sign::Minus;
        let magnitude = value.abs();
        let exponent = adjusted_exponent(&magnitude);
        if exponent.unsigned_abs() <= DOUBLE_EXPONENT_RANGE as u64 {
            let text = plain(&magnitude);
            if let Ok(float) = text.parse::<f64>() {
                if float.is_finite() && format!("{}", float) == text {
                    return Decimal(Data::new(float.to_bits(), sign));
                }
            }
        }
        debug!(exponent, "decimal kept in layout");
        Decimal(Data::from_layout(Box::new(DecimalLayout::new(magnitude))).with_sign(sign))
    }
    /// Parses `text` in the given radix and literal dialect. A `.` separates
    /// the fraction; the decimal radix also accepts an `e` exponent.
    pub fn parse(text: &str, radix: Radix, literal: Literal) -> Result<Decimal> {
        let parts = radix::split(text, radix, literal)?;
        let magnitude = match radix {
            Radix::Decimal => parse_decimal_radix(text, &parts.body)?,
            _ => parse_positional(text, &parts.body, radix, literal)?,
        };
        Ok(Decimal::from_big(if parts.sign { -magnitude } else { magnitude }))
    }
    /// `numerator / denominator` with `settings.decimal_precision` significant digits.
    pub fn from_ratio(numerator: &Integer, denominator: &Integer, settings: &Settings) -> Result<Decimal> {
        if denominator.is_zero() {
            return Err(NumcellError::domain("division by zero"));
        }
        Ok(Decimal::from_big(divide(
            &integer_to_big(numerator),
            &integer_to_big(denominator),
            settings.decimal_precision,
        )))
    }
    // signed value of a trivial decimal
    fn as_float(&self) -> Option<f64> {
        if !self.0.trivial() {
            return None;
        }
        let magnitude = f64::from_bits(self.0.value());
        Some(if self.0.sign() { -magnitude } else { magnitude })
    }
    /// The exact value.
    pub fn to_big(&self) -> BigDecimal {
        let magnitude = match self.as_float() {
            Some(float) => BigDecimal::from_str(&format!("{}", float.abs())).unwrap_or_default(),
            None => self
                .0
                .layout::<DecimalLayout>()
                .map(|layout| layout.value().clone())
                .unwrap_or_default(),
        };
        if self.0.sign() { -magnitude } else { magnitude }
    }
    /// Nearest double, infinite when out of range.
    pub fn to_f64(&self) -> f64 {
        match self.as_float() {
            Some(float) => float,
            None => self.to_big().to_string().parse().unwrap_or(f64::NAN),
        }
    }
    pub fn is_zero(&self) -> bool {
        match self.as_float() {
            Some(float) => float == 0.0,
            None => self.to_big().is_zero(),
        }
    }
    pub fn into_data(self) -> Data {
        self.0
    }
    /// Truncates toward zero. Only trivial decimals below 2^64 in magnitude
    /// convert, anything else would lose precision.
    pub fn to_integer(&self) -> Result<Integer> {
        match self.as_float() {
            Some(float) => {
                let truncated = float.abs().trunc();
                if truncated < WORD_LIMIT {
                    Ok(Integer::from_words(vec![truncated as u64], self.0.sign()))
                } else {
                    Err(NumcellError::Precision(format!(
                        "'{}' does not fit a 64 bit integer magnitude",
                        self
                    )))
                }
            }
            None => Err(NumcellError::Precision(format!(
                "'{}' is not a trivial decimal and cannot be converted to an integer",
                self
            ))),
        }
    }
    pub fn checked_div(&self, rhs: &Decimal) -> Result<Decimal> {
        self.div_with(rhs, &Settings::default())
    }
    /// Division, exact quotients are rounded to `settings.decimal_precision` significant digits.
    pub fn div_with(&self, rhs: &Decimal, settings: &Settings) -> Result<Decimal> {
        if rhs.is_zero() {
            return Err(NumcellError::domain("division by zero"));
        }
        if let (Some(x), Some(y)) = (self.as_float(), rhs.as_float()) {
            let quotient = x / y;
            if quotient.is_finite() {
                return Ok(Decimal::from_float(quotient));
            }
        }
        Ok(Decimal::from_big(divide(
            &self.to_big(),
            &rhs.to_big(),
            settings.decimal_precision,
        )))
    }
    pub fn pow(&self, exponent: u64) -> Decimal {
        let mut result = Decimal::from(1u64);
        let mut base = self.clone();
        let mut exponent = exponent;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = mul(&result, &base);
            }
            exponent >>= 1;
            if exponent > 0 {
                base = mul(&base, &base);
            }
        }
        result
    }
    pub fn checked_pow(&self, exponent: &Natural) -> Result<Decimal> {
        let exponent = exponent
            .to_u64()
            .ok_or_else(|| NumcellError::domain(format!("exponent '{}' is out of range", exponent)))?;
        Ok(self.pow(exponent))
    }
    /// Renders with at most `precision` fractional digits in radices where the
    /// expansion does not terminate.
    pub fn to_string_with(&self, radix: Radix, literal: Literal, precision: u64) -> Result<String> {
        let body = render_magnitude(&self.to_big().abs(), radix, literal, precision)?;
        if self.0.sign() {
            Ok(format!("-{}", body))
        } else {
            Ok(body)
        }
    }
}

/// Parses a decimal literal in the given radix without a dialect prefix.
pub fn create_decimal(text: &str, radix: Radix) -> Result<Decimal> {
    Decimal::parse(text, radix, Literal::None)
}

/// The cell behind a trivial decimal holds the bits of an `f64`, so
/// `self.data()` on its own renders those bits as an integer. Render through
/// the `Kind` methods or `Display` of the decimal instead.
impl Kind for Decimal {
    const UID: u8 = 4;
    const KIND: &'static str = "Decimal";
    fn data(&self) -> &Data {
        &self.0
    }
    // the trivial payload is a double, so the cell cannot render it on its own
    fn to_string_radix(&self, radix: Radix, literal: Literal) -> Result<String> {
        self.to_string_with(radix, literal, DEFAULT_DECIMAL_PRECISION)
    }
    fn render(&self, settings: &Settings) -> Result<String> {
        self.to_string_with(settings.radix, settings.literal, settings.decimal_precision)
    }
}

impl TryFrom<f64> for Decimal {
    type Error = NumcellError;
    fn try_from(value: f64) -> Result<Decimal> {
        if value.is_finite() {
            Ok(Decimal::from_float(value))
        } else {
            Err(NumcellError::domain(format!("'{}' is not a finite number", value)))
        }
    }
}
impl From<&Integer> for Decimal {
    fn from(integer: &Integer) -> Self {
        Decimal::from_big(integer_to_big(integer))
    }
}
impl From<Integer> for Decimal {
    fn from(integer: Integer) -> Self {
        Decimal::from(&integer)
    }
}
impl From<&Natural> for Decimal {
    fn from(natural: &Natural) -> Self {
        Decimal::from(natural.as_integer())
    }
}
impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Decimal::from(&Integer::from(value))
    }
}
impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal::from(&Integer::from(value))
    }
}
impl From<Decimal> for Data {
    fn from(decimal: Decimal) -> Self {
        decimal.0
    }
}
impl FromStr for Decimal {
    type Err = NumcellError;
    fn from_str(s: &str) -> Result<Decimal> {
        create_decimal(s, Radix::Decimal)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Decimal {}
impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_float(), other.as_float()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => self.to_big().cmp(&other.to_big()),
        }
    }
}
impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_string_radix(Radix::Decimal, Literal::None) {
            Ok(text) => write!(f, "{}", text),
            Err(_) => write!(f, "undef"),
        }
    }
}

// ------------- Arithmetic --------------
fn arithmetic(
    a: &Decimal,
    b: &Decimal,
    float: fn(f64, f64) -> f64,
    exact: fn(&BigDecimal, &BigDecimal) -> BigDecimal,
) -> Decimal {
    if let (Some(x), Some(y)) = (a.as_float(), b.as_float()) {
        let result = float(x, y);
        if result.is_finite() {
            return Decimal::from_float(result);
        }
    }
    Decimal::from_big(exact(&a.to_big(), &b.to_big()))
}
fn add(a: &Decimal, b: &Decimal) -> Decimal {
    arithmetic(a, b, |x, y| x + y, |x, y| x + y)
}
fn sub(a: &Decimal, b: &Decimal) -> Decimal {
    arithmetic(a, b, |x, y| x - y, |x, y| x - y)
}
fn mul(a: &Decimal, b: &Decimal) -> Decimal {
    arithmetic(a, b, |x, y| x * y, |x, y| x * y)
}
fn div(a: &Decimal, b: &Decimal) -> Decimal {
    match a.checked_div(b) {
        Ok(quotient) => quotient,
        Err(e) => panic!("{}", e),
    }
}

forward_binop!(Decimal, Add, add, add);
forward_binop!(Decimal, Sub, sub, sub);
forward_binop!(Decimal, Mul, mul, mul);
forward_binop!(Decimal, Div, div, div);
forward_assign!(Decimal, AddAssign, add_assign, add);
forward_assign!(Decimal, SubAssign, sub_assign, sub);
forward_assign!(Decimal, MulAssign, mul_assign, mul);
forward_assign!(Decimal, DivAssign, div_assign, div);

impl ops::Neg for Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        if self.is_zero() {
            self
        } else {
            Decimal(-self.0)
        }
    }
}
impl ops::Neg for &Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        -self.clone()
    }
}
