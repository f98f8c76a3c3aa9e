//! The radix/literal conversion engine.
//!
//! Maps digit characters to values and back for the supported radices
//! (2, 8, 10, 16, 60, 64) and decorates rendered values according to a
//! literal dialect (`0x`, `0b`, ... prefixes, base64 alphabets).

// used to print out readable forms of radix and literal
use std::fmt;

use lazy_static::lazy_static;
// used to convert digit strings to and from magnitudes
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NumcellError, Result};
use crate::magnitude;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
    Sexagesimal,
    Radix64,
}

impl Radix {
    pub const ALL: [Radix; 6] = [
        Radix::Binary,
        Radix::Octal,
        Radix::Decimal,
        Radix::Hexadecimal,
        Radix::Sexagesimal,
        Radix::Radix64,
    ];
    pub fn value(&self) -> u64 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
            Radix::Sexagesimal => 60,
            Radix::Radix64 => 64,
        }
    }
    pub fn from_value(value: u64) -> Result<Radix> {
        Radix::ALL
            .into_iter()
            .find(|r| r.value() == value)
            .ok_or_else(|| NumcellError::domain(format!("unsupported radix '{}'", value)))
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Literal {
    None,
    Stdhl,
    C,
    Cpp14,
    Base64,
    Unix,
}

impl Literal {
    pub const ALL: [Literal; 6] = [
        Literal::None,
        Literal::Stdhl,
        Literal::C,
        Literal::Cpp14,
        Literal::Base64,
        Literal::Unix,
    ];
    fn alphabet(&self) -> Alphabet {
        match self {
            Literal::None | Literal::Stdhl | Literal::C | Literal::Cpp14 => Alphabet::General,
            Literal::Base64 => Alphabet::Base64,
            Literal::Unix => Alphabet::Unix,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Literal::None => "none",
            Literal::Stdhl => "stdhl",
            Literal::C => "c",
            Literal::Cpp14 => "c++14",
            Literal::Base64 => "base64",
            Literal::Unix => "unix",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alphabet {
    General,
    Base64,
    Unix,
}

const ALPHABETS: [&[u8; 64]; 3] = [
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ@$",
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
    b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
];

const NO_DIGIT: u8 = u8::MAX;

impl Alphabet {
    fn index(&self) -> usize {
        match self {
            Alphabet::General => 0,
            Alphabet::Base64 => 1,
            Alphabet::Unix => 2,
        }
    }
    fn symbols(&self) -> &'static [u8; 64] {
        ALPHABETS[self.index()]
    }
}

lazy_static! {
    // reverse lookup: byte -> digit value per alphabet
    static ref DIGIT_TABLES: [[u8; 256]; 3] = {
        let mut tables = [[NO_DIGIT; 256]; 3];
        for (t, symbols) in ALPHABETS.iter().enumerate() {
            for (value, symbol) in symbols.iter().enumerate() {
                tables[t][*symbol as usize] = value as u8;
            }
        }
        tables
    };
}

/// Maps one character to its digit value under the given radix and literal dialect.
pub fn to_digit(character: char, radix: Radix, literal: Literal) -> Result<u64> {
    let invalid = || NumcellError::InvalidDigit { character, radix, literal };
    if !character.is_ascii() {
        return Err(invalid());
    }
    let alphabet = literal.alphabet();
    let mut byte = character as u8;
    // letters are case-insensitive as long as the radix does not reach the upper-case block
    if alphabet == Alphabet::General && radix.value() <= 36 {
        byte = byte.to_ascii_lowercase();
    }
    match DIGIT_TABLES[alphabet.index()][byte as usize] {
        NO_DIGIT => Err(invalid()),
        digit if (digit as u64) < radix.value() => Ok(digit as u64),
        _ => Err(invalid()),
    }
}

pub(crate) fn digit_char(digit: u64, literal: Literal) -> char {
    literal.alphabet().symbols()[(digit % 64) as usize] as char
}

/// The prefix a literal dialect puts in front of a value in the given radix.
/// Combinations a dialect has no notation for are a domain error.
pub fn prefix(radix: Radix, literal: Literal) -> Result<&'static str> {
    let unsupported = |what: &str| {
        Err(NumcellError::domain(format!(
            "{} literal format not specified for radix '{}'",
            what, radix
        )))
    };
    match literal {
        Literal::None => Ok(""),
        Literal::Stdhl | Literal::C | Literal::Cpp14 => match radix {
            Radix::Binary => match literal {
                Literal::C => unsupported("binary"),
                _ => Ok("0b"),
            },
            Radix::Octal => match literal {
                Literal::Stdhl => Ok("0c"),
                _ => Ok("0"),
            },
            Radix::Decimal => Ok(""),
            Radix::Hexadecimal => Ok("0x"),
            Radix::Sexagesimal => match literal {
                Literal::Stdhl => Ok("0s"),
                _ => unsupported("sexagesimal"),
            },
            Radix::Radix64 => match literal {
                Literal::Stdhl => Ok(""),
                _ => unsupported("radix 64"),
            },
        },
        Literal::Base64 => match radix {
            Radix::Radix64 => Ok(""),
            _ => unsupported("base64"),
        },
        Literal::Unix => match radix {
            Radix::Radix64 => Ok(""),
            _ => unsupported("unix"),
        },
    }
}

/// A numeric literal split into its sign and digit body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Parts {
    pub sign: bool,
    pub body: String,
}

/// Removes digit separators and splits off an optional sign and dialect prefix.
/// The base64 alphabets use `+` as a digit, so their sign may only be `-`.
pub(crate) fn split(input: &str, radix: Radix, literal: Literal) -> Result<Parts> {
    let cleaned: String = input.trim().chars().filter(|c| *c != '\'').collect();
    let (sign, rest) = match (cleaned.chars().next(), literal.alphabet()) {
        (Some('-'), _) => (true, &cleaned[1..]),
        (Some('+'), Alphabet::General) => (false, &cleaned[1..]),
        _ => (false, cleaned.as_str()),
    };
    let prefix = prefix(radix, literal)?;
    // the octal `0` prefix of C is indistinguishable from a leading zero digit
    let body = match rest.strip_prefix(prefix) {
        Some(stripped) if !prefix.is_empty() && !stripped.is_empty() => stripped,
        _ => rest,
    };
    if body.is_empty() {
        return Err(NumcellError::parse(input, "no digits found"));
    }
    Ok(Parts {
        sign,
        body: body.to_string(),
    })
}

/// Accumulates a digit string positionally into a magnitude.
pub(crate) fn parse_magnitude(input: &str, digits: &str, radix: Radix, literal: Literal) -> Result<Vec<u64>> {
    if digits.is_empty() {
        return Err(NumcellError::parse(input, "no digits found"));
    }
    let mut values: Vec<u8> = Vec::with_capacity(digits.len());
    for character in digits.chars() {
        let digit = to_digit(character, radix, literal).map_err(|e| {
            debug!(input, %radix, %literal, %character, "invalid digit while parsing");
            NumcellError::parse(input, e.to_string())
        })?;
        values.push(digit as u8);
    }
    let value = BigUint::from_radix_be(&values, radix.value() as u32)
        .ok_or_else(|| NumcellError::parse(input, "digit out of range"))?;
    Ok(magnitude::from_big(&value))
}

/// Renders the digits of a magnitude without sign or prefix.
pub(crate) fn render_magnitude(words: &[u64], radix: Radix, literal: Literal) -> String {
    magnitude::to_big(words)
        .to_radix_be(radix.value() as u32)
        .into_iter()
        .map(|digit| digit_char(digit as u64, literal))
        .collect()
}
