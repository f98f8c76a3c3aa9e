//! Fractions of arbitrary precision integers.
//!
//! A rational is always boxed in a [`RationalLayout`] holding the magnitudes
//! of numerator and denominator, while the sign of the whole fraction lives in
//! the `Data` cell. Values are kept as constructed (`2/4` stays `2/4`), use
//! [`Rational::reduce`] for lowest terms. Equality, ordering and hashing are
//! by value, so `1/2 == 2/4`.

// used for layout downcasting
use std::any::Any;
// used for comparisons
use std::cmp::Ordering;
// used when parsing a string to a Rational
use std::str::FromStr;
// used to print out readable forms of a rational
use std::fmt;
// used to indicate that rationals are hashable
use std::hash::{Hash, Hasher};
// used to overload common operations for rationals
use std::ops;

use crate::data::Data;
use crate::decimal::Decimal;
use crate::error::{NumcellError, Result};
use crate::hash;
use crate::integer::Integer;
use crate::kind::Kind;
use crate::layout::Layout;
use crate::magnitude;
use crate::natural::Natural;
use crate::radix::{self, Literal, Radix};
use crate::settings::Settings;

const ONE: &[u64] = &[1];

// ------------- Layout --------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RationalLayout {
    numerator: Natural,
    denominator: Natural,
}

impl RationalLayout {
    pub fn new(numerator: Natural, denominator: Natural) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
    pub fn numerator(&self) -> &Natural {
        &self.numerator
    }
    pub fn denominator(&self) -> &Natural {
        &self.denominator
    }
}

impl Layout for RationalLayout {
    fn clone_layout(&self) -> Box<dyn Layout> {
        Box::new(self.clone())
    }
    fn hash_layout(&self) -> u64 {
        // equal fractions share their lowest terms
        let (numerator, denominator) = lowest_terms(self.numerator.words(), self.denominator.words());
        hash::combine(hash::words(&numerator), hash::words(&denominator))
    }
    fn eq_layout(&self, other: &dyn Layout) -> bool {
        other.downcast_ref::<RationalLayout>().is_some_and(|other| {
            let lhs = magnitude::mul(self.numerator.words(), other.denominator.words());
            let rhs = magnitude::mul(other.numerator.words(), self.denominator.words());
            magnitude::cmp(&lhs, &rhs) == Ordering::Equal
        })
    }
    fn render(&self, radix: Radix, literal: Literal) -> Result<String> {
        if slash_is_digit(literal) {
            return Err(NumcellError::domain(format!(
                "the {} alphabet uses '/' as a digit and cannot render a fraction",
                literal
            )));
        }
        let prefix = radix::prefix(radix, literal)?;
        Ok(format!(
            "{}{}/{}{}",
            prefix,
            radix::render_magnitude(self.numerator.words(), radix, literal),
            prefix,
            radix::render_magnitude(self.denominator.words(), radix, literal)
        ))
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
    fn kind(&self) -> &'static str {
        Rational::KIND
    }
}

// both radix 64 alphabets spend '/' on a digit
fn slash_is_digit(literal: Literal) -> bool {
    matches!(literal, Literal::Base64 | Literal::Unix)
}

fn lowest_terms(numerator: &[u64], denominator: &[u64]) -> (Vec<u64>, Vec<u64>) {
    let divisor = magnitude::gcd(numerator, denominator);
    if divisor.is_empty() {
        return (magnitude::trim(numerator.to_vec()), magnitude::trim(denominator.to_vec()));
    }
    (
        magnitude::divrem(numerator, &divisor).0,
        magnitude::divrem(denominator, &divisor).0,
    )
}

// ------------- Rational --------------
#[derive(Debug, Clone)]
pub struct Rational(Data);

impl Rational {
    /// `numerator / denominator`, a zero denominator is a domain error.
    pub fn new(numerator: &Integer, denominator: &Integer) -> Result<Rational> {
        if denominator.is_zero() {
            return Err(NumcellError::domain("denominator of rational cannot be zero"));
        }
        Ok(Rational::from_parts(
            numerator.words().to_vec(),
            denominator.words().to_vec(),
            numerator.is_negative() ^ denominator.is_negative(),
        ))
    }
    // the denominator is known to be non-zero
    fn from_parts(numerator: Vec<u64>, denominator: Vec<u64>, sign: bool) -> Rational {
        let sign = sign && !magnitude::is_zero(&numerator);
        let layout = RationalLayout::new(Natural::from_words(numerator), Natural::from_words(denominator));
        Rational(Data::from_layout(Box::new(layout)).with_sign(sign))
    }
    /// Parses `n` or `n/d`, each component in the given radix and dialect.
    /// Under the base64 and unix alphabets `/` is a digit, so only `n` is accepted.
    pub fn parse(text: &str, radix: Radix, literal: Literal) -> Result<Rational> {
        let parts: Vec<&str> = match slash_is_digit(literal) {
            true => vec![text],
            false => text.split('/').collect(),
        };
        match parts.as_slice() {
            [numerator] => Ok(Rational::from(Integer::parse(numerator, radix, literal)?)),
            [numerator, denominator] => {
                let numerator = Integer::parse(numerator, radix, literal)?;
                let denominator = Integer::parse(denominator, radix, literal)?;
                Rational::new(&numerator, &denominator)
            }
            _ => Err(NumcellError::parse(text, "a rational has at most one '/' separator")),
        }
    }
    fn parts(&self) -> (&[u64], &[u64]) {
        match self.0.layout::<RationalLayout>() {
            Some(layout) => (layout.numerator.words(), layout.denominator.words()),
            None => (&[], ONE),
        }
    }
    /// The signed numerator.
    pub fn numerator(&self) -> Integer {
        Integer::from_words(self.parts().0.to_vec(), self.0.sign())
    }
    pub fn denominator(&self) -> Natural {
        Natural::from_words(self.parts().1.to_vec())
    }
    pub fn is_zero(&self) -> bool {
        magnitude::is_zero(self.parts().0)
    }
    pub fn into_data(self) -> Data {
        self.0
    }
    pub fn reduce(&self) -> Rational {
        let (numerator, denominator) = self.parts();
        let (numerator, denominator) = lowest_terms(numerator, denominator);
        Rational::from_parts(numerator, denominator, self.0.sign())
    }
    pub fn recip(&self) -> Result<Rational> {
        if self.is_zero() {
            return Err(NumcellError::domain("reciprocal of zero"));
        }
        let (numerator, denominator) = self.parts();
        Ok(Rational::from_parts(denominator.to_vec(), numerator.to_vec(), self.0.sign()))
    }
    pub fn checked_div(&self, rhs: &Rational) -> Result<Rational> {
        Ok(mul(self, &rhs.recip()?))
    }
    /// Divides out to a decimal with `settings.decimal_precision` significant digits.
    pub fn to_decimal(&self, settings: &Settings) -> Result<Decimal> {
        Decimal::from_ratio(&self.numerator(), &Integer::from(self.denominator()), settings)
    }
}

/// Parses a rational literal `n` or `n/d` in the given radix without a dialect prefix.
pub fn create_rational(text: &str, radix: Radix) -> Result<Rational> {
    Rational::parse(text, radix, Literal::None)
}

impl Kind for Rational {
    const UID: u8 = 3;
    const KIND: &'static str = "Rational";
    fn data(&self) -> &Data {
        &self.0
    }
}

impl From<Integer> for Rational {
    fn from(integer: Integer) -> Self {
        Rational::from_parts(integer.words().to_vec(), ONE.to_vec(), integer.is_negative())
    }
}
impl From<u64> for Rational {
    fn from(value: u64) -> Self {
        Rational::from(Integer::from(value))
    }
}
impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational::from(Integer::from(value))
    }
}
impl From<Rational> for Data {
    fn from(rational: Rational) -> Self {
        rational.0
    }
}
impl FromStr for Rational {
    type Err = NumcellError;
    fn from_str(s: &str) -> Result<Rational> {
        create_rational(s, Radix::Decimal)
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Rational {}
impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = &self.numerator() * &Integer::from(other.denominator());
        let rhs = &other.numerator() * &Integer::from(self.denominator());
        lhs.cmp(&rhs)
    }
}
impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ------------- Arithmetic --------------
// results keep whatever common factors the operands bring along
fn combine(a: &Rational, b: &Rational, negate: bool) -> Rational {
    let a_denominator = Integer::from(a.denominator());
    let b_denominator = Integer::from(b.denominator());
    let mut rhs = &b.numerator() * &a_denominator;
    if negate {
        rhs = -rhs;
    }
    let numerator = &(&a.numerator() * &b_denominator) + &rhs;
    let denominator = &a_denominator * &b_denominator;
    Rational::from_parts(numerator.words().to_vec(), denominator.words().to_vec(), numerator.is_negative())
}
fn add(a: &Rational, b: &Rational) -> Rational {
    combine(a, b, false)
}
fn sub(a: &Rational, b: &Rational) -> Rational {
    combine(a, b, true)
}
fn mul(a: &Rational, b: &Rational) -> Rational {
    let (a_numerator, a_denominator) = a.parts();
    let (b_numerator, b_denominator) = b.parts();
    Rational::from_parts(
        magnitude::mul(a_numerator, b_numerator),
        magnitude::mul(a_denominator, b_denominator),
        a.0.sign() ^ b.0.sign(),
    )
}
fn div(a: &Rational, b: &Rational) -> Rational {
    match a.checked_div(b) {
        Ok(quotient) => quotient,
        Err(e) => panic!("{}", e),
    }
}

forward_binop!(Rational, Add, add, add);
forward_binop!(Rational, Sub, sub, sub);
forward_binop!(Rational, Mul, mul, mul);
forward_binop!(Rational, Div, div, div);
forward_assign!(Rational, AddAssign, add_assign, add);
forward_assign!(Rational, SubAssign, sub_assign, sub);
forward_assign!(Rational, MulAssign, mul_assign, mul);
forward_assign!(Rational, DivAssign, div_assign, div);

impl ops::Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        if self.is_zero() {
            self
        } else {
            Rational(-self.0)
        }
    }
}
impl ops::Neg for &Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        -self.clone()
    }
}
