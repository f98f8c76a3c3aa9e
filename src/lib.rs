//! Numcell – tagged numeric cells that are either an inline machine word or an
//! owned, arbitrarily large payload.
//!
//! Everything is built around the [`data::Data`] cell:
//! * A *trivial* cell stores a `u64` inline next to a sign flag.
//! * A *boxed* cell exclusively owns a [`layout::Layout`], the polymorphic heap
//!   payload of big integers, fractions, decimals and text.
//! * An *undefined* cell holds nothing; it is what [`data::Data::take`] leaves
//!   behind when a value is moved out.
//!
//! Copying a cell deep-clones its layout, so two cells never share a payload,
//! and negation only ever flips the sign.
//!
//! ## Kinds
//! * [`integer::Integer`] – signed, arbitrary precision, trivial whenever the
//!   magnitude fits one word.
//! * [`natural::Natural`] – non-negative integers.
//! * [`rational::Rational`] – numerator/denominator pairs, always boxed.
//! * [`decimal::Decimal`] – a double when that is exact, a `BigDecimal` otherwise.
//! * [`text::Text`] – the string kind.
//!
//! Every kind implements [`kind::Kind`], which carries a stable `UID` and name
//! in the same way for all of them.
//!
//! ## Radix and literals
//! Values are parsed and rendered in radix 2, 8, 10, 16, 60 and 64 through the
//! [`radix`] engine. A [`radix::Literal`] dialect picks the digit alphabet and
//! the prefix, for example `0x1f` for C or `0c17` for the stdhl notation.
//!
//! ## Quick Start
//! ```
//! use numcell::{create_integer, Kind, Literal, Radix};
//! let value = create_integer("-1'234", Radix::Decimal).unwrap();
//! assert!(value.sign() && value.trivial());
//! assert_eq!(value.to_string_radix(Radix::Hexadecimal, Literal::C).unwrap(), "-0x4d2");
//! ```
//!
//! ## Settings
//! [`settings::Settings`] (decimal precision, default radix and literal) can be
//! read from a file through the `config` crate; nothing is read from the
//! environment.
//!
//! ## License
//! GPL-3.0-or-later.

#[macro_use]
mod macros;

pub mod data;
pub mod decimal;
pub mod error;
pub mod hash;
pub mod integer;
pub mod kind;
pub mod layout;
mod magnitude;
pub mod natural;
pub mod radix;
pub mod rational;
pub mod settings;
pub mod text;

pub use data::Data;
pub use decimal::{Decimal, DecimalLayout, create_decimal};
pub use error::{NumcellError, Result};
pub use integer::{Integer, IntegerLayout, create_integer};
pub use kind::Kind;
pub use layout::Layout;
pub use natural::{Natural, create_natural};
pub use radix::{Literal, Radix};
pub use rational::{Rational, RationalLayout, create_rational};
pub use settings::Settings;
pub use text::{StringLayout, Text, create_string};
