//! Arbitrary precision signed integers on top of a `Data` cell.
//!
//! A magnitude that fits one word is always stored inline (trivial), anything
//! wider lives in an [`IntegerLayout`] of little-word-first `u64`s. Every
//! constructor and operator keeps this canonical form, and zero never carries
//! a sign, so two equal integers always have equal cells.

// used for layout downcasting
use std::any::Any;
// used for comparisons
use std::cmp::Ordering;
// used when parsing a string to an Integer
use std::str::FromStr;
// used to print out readable forms of an integer
use std::fmt;
// used to indicate that integers are hashable
use std::hash::{Hash, Hasher};
// used to overload common operations for integers
use std::ops;

use tracing::trace;

use crate::data::{Content, Data};
use crate::error::{NumcellError, Result};
use crate::hash;
use crate::kind::Kind;
use crate::layout::Layout;
use crate::magnitude;
use crate::natural::Natural;
use crate::radix::{self, Literal, Radix};

// ------------- Layout --------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLayout {
    words: Vec<u64>,
}

impl IntegerLayout {
    /// A two word magnitude, `low` being the least significant word.
    pub fn new(low: u64, high: u64) -> Self {
        Self {
            words: vec![low, high],
        }
    }
    pub fn from_words(words: Vec<u64>) -> Self {
        Self { words }
    }
    pub fn words(&self) -> &[u64] {
        &self.words
    }
    /// The word at `index`, zero past the stored words.
    pub fn word(&self, index: usize) -> u64 {
        self.words.get(index).copied().unwrap_or(0)
    }
    pub fn len(&self) -> usize {
        self.words.len()
    }
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Layout for IntegerLayout {
    fn clone_layout(&self) -> Box<dyn Layout> {
        Box::new(self.clone())
    }
    fn hash_layout(&self) -> u64 {
        hash::words(magnitude::significant(&self.words))
    }
    fn eq_layout(&self, other: &dyn Layout) -> bool {
        other
            .downcast_ref::<IntegerLayout>()
            .is_some_and(|other| magnitude::cmp(&self.words, &other.words) == Ordering::Equal)
    }
    fn render(&self, radix: Radix, literal: Literal) -> Result<String> {
        let prefix = radix::prefix(radix, literal)?;
        Ok(format!(
            "{}{}",
            prefix,
            radix::render_magnitude(&self.words, radix, literal)
        ))
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
    fn kind(&self) -> &'static str {
        Integer::KIND
    }
}

// ------------- Integer --------------
#[derive(Debug, Clone)]
pub struct Integer(Data);

impl Integer {
    /// Builds the canonical integer for a magnitude and sign.
    pub fn from_words(words: Vec<u64>, sign: bool) -> Integer {
        let words = magnitude::trim(words);
        match words.len() {
            0 => Integer(Data::new(0, false)),
            1 => Integer(Data::new(words[0], sign)),
            len => {
                trace!(words = len, "integer promoted to layout");
                Integer(Data::from_layout(Box::new(IntegerLayout::from_words(words))).with_sign(sign))
            }
        }
    }
    /// Parses `text` in the given radix and literal dialect. Digit separators
    /// (`'`), a leading sign and the dialect's prefix are accepted.
    pub fn parse(text: &str, radix: Radix, literal: Literal) -> Result<Integer> {
        let parts = radix::split(text, radix, literal)?;
        let words = radix::parse_magnitude(text, &parts.body, radix, literal)?;
        Ok(Integer::from_words(words, parts.sign))
    }
    pub fn zero() -> Integer {
        Integer(Data::new(0, false))
    }
    pub fn one() -> Integer {
        Integer(Data::new(1, false))
    }
    pub fn into_data(self) -> Data {
        self.0
    }
    /// The low word of a trivial integer, zero for a boxed one.
    pub fn value(&self) -> u64 {
        self.0.value()
    }
    /// The little-word-first magnitude, a trivial zero reads as `[0]`.
    pub fn words(&self) -> &[u64] {
        match self.0.content() {
            Content::Trivial(value) => std::slice::from_ref(value),
            Content::Boxed(layout) => match layout.downcast_ref::<IntegerLayout>() {
                Some(layout) => layout.words(),
                None => &[],
            },
            Content::Undefined => &[],
        }
    }
    pub fn word(&self, index: usize) -> u64 {
        self.words().get(index).copied().unwrap_or(0)
    }
    pub fn is_zero(&self) -> bool {
        magnitude::is_zero(self.words())
    }
    pub fn is_negative(&self) -> bool {
        self.0.sign()
    }
    pub fn abs(&self) -> Integer {
        Integer::from_words(self.words().to_vec(), false)
    }
    pub fn to_u64(&self) -> Option<u64> {
        match (self.0.trivial(), self.0.sign()) {
            (true, false) => Some(self.0.value()),
            _ => None,
        }
    }
    pub fn to_i64(&self) -> Option<i64> {
        if !self.0.trivial() {
            return None;
        }
        let value = self.0.value();
        if self.0.sign() {
            match value.cmp(&(1u64 << 63)) {
                Ordering::Less => Some(-(value as i64)),
                Ordering::Equal => Some(i64::MIN),
                Ordering::Greater => None,
            }
        } else {
            i64::try_from(value).ok()
        }
    }
    pub fn checked_div(&self, rhs: &Integer) -> Result<Integer> {
        self.divrem(rhs).map(|(quotient, _)| quotient)
    }
    pub fn checked_rem(&self, rhs: &Integer) -> Result<Integer> {
        self.divrem(rhs).map(|(_, remainder)| remainder)
    }
    /// Truncating division: the quotient rounds toward zero and the remainder
    /// takes the sign of the dividend.
    pub fn divrem(&self, rhs: &Integer) -> Result<(Integer, Integer)> {
        if rhs.is_zero() {
            return Err(NumcellError::domain("division by zero"));
        }
        let (quotient, remainder) = magnitude::divrem(self.words(), rhs.words());
        Ok((
            Integer::from_words(quotient, self.sign() ^ rhs.sign()),
            Integer::from_words(remainder, self.sign()),
        ))
    }
    /// Raises to a word sized power, the result is negative iff the base is
    /// negative and the exponent odd.
    pub fn pow(&self, exponent: u64) -> Integer {
        let words = magnitude::pow(self.words(), exponent);
        Integer::from_words(words, self.sign() && exponent & 1 == 1)
    }
    pub fn checked_pow(&self, exponent: &Natural) -> Result<Integer> {
        let exponent = exponent
            .to_u64()
            .ok_or_else(|| NumcellError::domain(format!("exponent '{}' is out of range", exponent)))?;
        Ok(self.pow(exponent))
    }
    pub fn gcd(&self, other: &Integer) -> Integer {
        Integer::from_words(magnitude::gcd(self.words(), other.words()), false)
    }
}

/// Parses a signed integer literal in the given radix without a dialect prefix.
pub fn create_integer(text: &str, radix: Radix) -> Result<Integer> {
    Integer::parse(text, radix, Literal::None)
}

impl Kind for Integer {
    const UID: u8 = 1;
    const KIND: &'static str = "Integer";
    fn data(&self) -> &Data {
        &self.0
    }
}

impl Default for Integer {
    fn default() -> Self {
        Integer::zero()
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Integer(Data::new(value, false))
    }
}
impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Integer::from_words(vec![value.unsigned_abs()], value < 0)
    }
}
impl From<u32> for Integer {
    fn from(value: u32) -> Self {
        Integer::from(value as u64)
    }
}
impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Integer::from(value as i64)
    }
}
impl From<Integer> for Data {
    fn from(integer: Integer) -> Self {
        integer.0
    }
}
impl TryFrom<Data> for Integer {
    type Error = NumcellError;
    fn try_from(data: Data) -> Result<Integer> {
        if !data.defined() {
            return Err(NumcellError::domain("undefined data is not an integer"));
        }
        if data.trivial() {
            return Ok(Integer::from_words(vec![data.value()], data.sign()));
        }
        match data.layout::<IntegerLayout>() {
            Some(layout) => Ok(Integer::from_words(layout.words().to_vec(), data.sign())),
            None => Err(NumcellError::domain(format!(
                "a {} layout is not an integer",
                data.ptr().map(|layout| layout.kind()).unwrap_or("missing")
            ))),
        }
    }
}
impl FromStr for Integer {
    type Err = NumcellError;
    fn from_str(s: &str) -> Result<Integer> {
        create_integer(s, Radix::Decimal)
    }
}

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Integer {}
impl PartialEq<u64> for Integer {
    fn eq(&self, other: &u64) -> bool {
        self.to_u64() == Some(*other)
    }
}
impl Hash for Integer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign(), other.sign()) {
            (false, false) => magnitude::cmp(self.words(), other.words()),
            (true, true) => magnitude::cmp(other.words(), self.words()),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
        }
    }
}
impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ------------- Arithmetic --------------
fn signed_add(a: &[u64], a_sign: bool, b: &[u64], b_sign: bool) -> Integer {
    if a_sign == b_sign {
        return Integer::from_words(magnitude::add(a, b), a_sign);
    }
    match magnitude::cmp(a, b) {
        Ordering::Less => Integer::from_words(magnitude::sub(b, a), b_sign),
        _ => Integer::from_words(magnitude::sub(a, b), a_sign),
    }
}
fn demoted(a: &Integer, b: &Integer, result: Integer) -> Integer {
    if result.trivial() && !(a.trivial() && b.trivial()) {
        trace!("integer demoted to trivial");
    }
    result
}
fn add(a: &Integer, b: &Integer) -> Integer {
    demoted(a, b, signed_add(a.words(), a.sign(), b.words(), b.sign()))
}
fn sub(a: &Integer, b: &Integer) -> Integer {
    demoted(a, b, signed_add(a.words(), a.sign(), b.words(), !b.sign()))
}
fn mul(a: &Integer, b: &Integer) -> Integer {
    Integer::from_words(magnitude::mul(a.words(), b.words()), a.sign() ^ b.sign())
}
fn div(a: &Integer, b: &Integer) -> Integer {
    match a.checked_div(b) {
        Ok(quotient) => quotient,
        Err(e) => panic!("{}", e),
    }
}
fn rem(a: &Integer, b: &Integer) -> Integer {
    match a.checked_rem(b) {
        Ok(remainder) => remainder,
        Err(e) => panic!("{}", e),
    }
}

forward_binop!(Integer, Add, add, add);
forward_binop!(Integer, Sub, sub, sub);
forward_binop!(Integer, Mul, mul, mul);
forward_binop!(Integer, Div, div, div);
forward_binop!(Integer, Rem, rem, rem);
forward_assign!(Integer, AddAssign, add_assign, add);
forward_assign!(Integer, SubAssign, sub_assign, sub);
forward_assign!(Integer, MulAssign, mul_assign, mul);
forward_assign!(Integer, DivAssign, div_assign, div);
forward_assign!(Integer, RemAssign, rem_assign, rem);

impl ops::AddAssign<u64> for Integer {
    fn add_assign(&mut self, rhs: u64) {
        *self = add(self, &Integer::from(rhs));
    }
}
impl ops::SubAssign<u64> for Integer {
    fn sub_assign(&mut self, rhs: u64) {
        *self = sub(self, &Integer::from(rhs));
    }
}

impl ops::Neg for Integer {
    type Output = Integer;
    fn neg(self) -> Integer {
        if self.is_zero() {
            self
        } else {
            Integer(-self.0)
        }
    }
}
impl ops::Neg for &Integer {
    type Output = Integer;
    fn neg(self) -> Integer {
        -self.clone()
    }
}
/// Shifts the magnitude, the sign is kept.
impl ops::Shl<u64> for &Integer {
    type Output = Integer;
    fn shl(self, shift: u64) -> Integer {
        Integer::from_words(magnitude::shl(self.words(), shift), self.sign())
    }
}
impl ops::Shl<u64> for Integer {
    type Output = Integer;
    fn shl(self, shift: u64) -> Integer {
        &self << shift
    }
}
/// Shifts the magnitude, so negative values round toward zero.
impl ops::Shr<u64> for &Integer {
    type Output = Integer;
    fn shr(self, shift: u64) -> Integer {
        Integer::from_words(magnitude::shr(self.words(), shift), self.sign())
    }
}
impl ops::Shr<u64> for Integer {
    type Output = Integer;
    fn shr(self, shift: u64) -> Integer {
        &self >> shift
    }
}
/// Complements every word of the magnitude, the sign is kept.
impl ops::Not for &Integer {
    type Output = Integer;
    fn not(self) -> Integer {
        Integer::from_words(magnitude::not(self.words()), self.sign())
    }
}
impl ops::Not for Integer {
    type Output = Integer;
    fn not(self) -> Integer {
        !&self
    }
}
