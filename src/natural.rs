//! Non-negative integers. Shares the integer layout and keeps the sign clear.

// used when parsing a string to a Natural
use std::str::FromStr;
// used to print out readable forms of a natural
use std::fmt;
// used to overload common operations for naturals
use std::ops;

use crate::data::Data;
use crate::error::{NumcellError, Result};
use crate::integer::Integer;
use crate::kind::Kind;
use crate::radix::{Literal, Radix};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Natural(Integer);

impl Natural {
    /// Parses `text` in the given radix and literal dialect, a `-` sign is a domain error.
    pub fn parse(text: &str, radix: Radix, literal: Literal) -> Result<Natural> {
        Natural::try_from(Integer::parse(text, radix, literal)?)
    }
    pub fn from_words(words: Vec<u64>) -> Natural {
        Natural(Integer::from_words(words, false))
    }
    pub fn value(&self) -> u64 {
        self.0.value()
    }
    pub fn words(&self) -> &[u64] {
        self.0.words()
    }
    pub fn word(&self, index: usize) -> u64 {
        self.0.word(index)
    }
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }
    pub fn as_integer(&self) -> &Integer {
        &self.0
    }
    pub fn into_data(self) -> Data {
        self.0.into_data()
    }
    /// A domain error when `rhs` is larger than `self`.
    pub fn checked_sub(&self, rhs: &Natural) -> Result<Natural> {
        if self < rhs {
            return Err(NumcellError::domain(format!(
                "attempt to subtract {} from {}",
                rhs, self
            )));
        }
        Ok(Natural(&self.0 - &rhs.0))
    }
    pub fn checked_div(&self, rhs: &Natural) -> Result<Natural> {
        self.0.checked_div(&rhs.0).map(Natural)
    }
    pub fn checked_rem(&self, rhs: &Natural) -> Result<Natural> {
        self.0.checked_rem(&rhs.0).map(Natural)
    }
    pub fn pow(&self, exponent: u64) -> Natural {
        Natural(self.0.pow(exponent))
    }
    pub fn gcd(&self, other: &Natural) -> Natural {
        Natural(self.0.gcd(&other.0))
    }
}

/// Parses a natural literal in the given radix without a dialect prefix.
pub fn create_natural(text: &str, radix: Radix) -> Result<Natural> {
    Natural::parse(text, radix, Literal::None)
}

impl Kind for Natural {
    const UID: u8 = 2;
    const KIND: &'static str = "Natural";
    fn data(&self) -> &Data {
        self.0.data()
    }
}

impl From<u64> for Natural {
    fn from(value: u64) -> Self {
        Natural(Integer::from(value))
    }
}
impl From<u32> for Natural {
    fn from(value: u32) -> Self {
        Natural(Integer::from(value))
    }
}
impl From<Natural> for Integer {
    fn from(natural: Natural) -> Self {
        natural.0
    }
}
impl TryFrom<Integer> for Natural {
    type Error = NumcellError;
    fn try_from(integer: Integer) -> Result<Natural> {
        if integer.is_negative() {
            Err(NumcellError::domain(format!(
                "'{}' is negative and not a natural number",
                integer
            )))
        } else {
            Ok(Natural(integer))
        }
    }
}
impl TryFrom<Data> for Natural {
    type Error = NumcellError;
    fn try_from(data: Data) -> Result<Natural> {
        Natural::try_from(Integer::try_from(data)?)
    }
}
impl FromStr for Natural {
    type Err = NumcellError;
    fn from_str(s: &str) -> Result<Natural> {
        create_natural(s, Radix::Decimal)
    }
}
impl PartialEq<u64> for Natural {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}
impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn add(a: &Natural, b: &Natural) -> Natural {
    Natural(&a.0 + &b.0)
}
fn sub(a: &Natural, b: &Natural) -> Natural {
    match a.checked_sub(b) {
        Ok(difference) => difference,
        Err(e) => panic!("{}", e),
    }
}
fn mul(a: &Natural, b: &Natural) -> Natural {
    Natural(&a.0 * &b.0)
}
fn div(a: &Natural, b: &Natural) -> Natural {
    Natural(&a.0 / &b.0)
}
fn rem(a: &Natural, b: &Natural) -> Natural {
    Natural(&a.0 % &b.0)
}

forward_binop!(Natural, Add, add, add);
forward_binop!(Natural, Sub, sub, sub);
forward_binop!(Natural, Mul, mul, mul);
forward_binop!(Natural, Div, div, div);
forward_binop!(Natural, Rem, rem, rem);
forward_assign!(Natural, AddAssign, add_assign, add);
forward_assign!(Natural, SubAssign, sub_assign, sub);
forward_assign!(Natural, MulAssign, mul_assign, mul);

impl ops::Shl<u64> for &Natural {
    type Output = Natural;
    fn shl(self, shift: u64) -> Natural {
        Natural(&self.0 << shift)
    }
}
impl ops::Shr<u64> for &Natural {
    type Output = Natural;
    fn shr(self, shift: u64) -> Natural {
        Natural(&self.0 >> shift)
    }
}
