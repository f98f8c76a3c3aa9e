// used to print out readable forms of a cell
use std::fmt;
// used to indicate that cells are hashable
use std::hash::{Hash, Hasher};
// used to overload negation
use std::ops;

use tracing::trace;

use crate::error::{NumcellError, Result};
use crate::hash;
use crate::layout::Layout;
use crate::radix::{self, Literal, Radix};

// the 10'000th prime, keeps the seed of defined cells away from zero
const HASH_PRIME: u64 = 104_729;

#[derive(Debug, Default)]
pub(crate) enum Content {
    #[default]
    Undefined,
    Trivial(u64),
    Boxed(Box<dyn Layout>),
}

/*
A Data cell holds either a small value inline (trivial) or exclusively owns
a heap Layout (non-trivial). The sign lives next to the payload and is never
part of it, so negation never touches the representation.

States: Undefined, TrivialDefined, BoxedDefined.
- clone preserves the state, deep-cloning a boxed payload
- take moves the state out and leaves Undefined behind
- drop releases an owned layout exactly once
*/
#[derive(Debug, Default)]
pub struct Data {
    content: Content,
    sign: bool,
}

impl Data {
    /// trivial defined data
    pub fn new(value: u64, sign: bool) -> Self {
        Self {
            content: Content::Trivial(value),
            sign,
        }
    }
    /// non-trivial defined data, the cell takes ownership of the layout
    pub fn from_layout(layout: Box<dyn Layout>) -> Self {
        Self {
            content: Content::Boxed(layout),
            sign: false,
        }
    }
    /// undefined data
    pub fn undefined() -> Self {
        Self::default()
    }
    // Getters only, values are immutable after creation apart from
    // assignment, take and negation.
    pub fn value(&self) -> u64 {
        match self.content {
            Content::Trivial(value) => value,
            _ => 0,
        }
    }
    pub fn ptr(&self) -> Option<&(dyn Layout + 'static)> {
        match &self.content {
            Content::Boxed(layout) => Some(layout.as_ref()),
            _ => None,
        }
    }
    pub fn layout<T: Layout>(&self) -> Option<&T> {
        self.ptr().and_then(|layout| layout.downcast_ref::<T>())
    }
    pub(crate) fn layout_mut<T: Layout>(&mut self) -> Option<&mut T> {
        match &mut self.content {
            Content::Boxed(layout) => layout.downcast_mut::<T>(),
            _ => None,
        }
    }
    pub(crate) fn content(&self) -> &Content {
        &self.content
    }
    pub fn sign(&self) -> bool {
        self.sign
    }
    pub(crate) fn with_sign(mut self, sign: bool) -> Self {
        self.sign = sign;
        self
    }
    pub fn trivial(&self) -> bool {
        matches!(self.content, Content::Trivial(_))
    }
    pub fn defined(&self) -> bool {
        !matches!(self.content, Content::Undefined)
    }
    /// Moves the cell out, leaving the undefined state behind.
    pub fn take(&mut self) -> Data {
        std::mem::take(self)
    }
    pub fn hash_value(&self) -> u64 {
        let seed = (HASH_PRIME << 2) | ((self.sign as u64) << 1) | (self.defined() as u64);
        let content = match &self.content {
            Content::Undefined => 0,
            Content::Trivial(value) => hash::value(*value),
            Content::Boxed(layout) => layout.hash_layout(),
        };
        hash::combine(seed, content)
    }
    pub fn to_string_radix(&self, radix: Radix, literal: Literal) -> Result<String> {
        let body = match &self.content {
            Content::Undefined => {
                return Err(NumcellError::domain("undefined data cannot be formatted"));
            }
            Content::Trivial(value) => {
                let prefix = radix::prefix(radix, literal)?;
                format!("{}{}", prefix, radix::render_magnitude(&[*value], radix, literal))
            }
            Content::Boxed(layout) => layout.render(radix, literal)?,
        };
        let negative_zero = self.trivial() && self.value() == 0;
        if self.sign && !negative_zero {
            Ok(format!("-{}", body))
        } else {
            Ok(body)
        }
    }
    /// The parsing primitive: one character to its digit value.
    pub fn to_digit(character: char, radix: Radix, literal: Literal) -> Result<u64> {
        radix::to_digit(character, radix, literal)
    }
}

impl Clone for Data {
    fn clone(&self) -> Self {
        let content = match &self.content {
            Content::Undefined => Content::Undefined,
            Content::Trivial(value) => Content::Trivial(*value),
            Content::Boxed(layout) => {
                trace!(kind = layout.kind(), "deep clone of layout");
                Content::Boxed(layout.clone_layout())
            }
        };
        Self {
            content,
            sign: self.sign,
        }
    }
}

impl PartialEq for Data {
    fn eq(&self, other: &Self) -> bool {
        match (&self.content, &other.content) {
            (Content::Undefined, Content::Undefined) => true,
            (Content::Trivial(a), Content::Trivial(b)) => a == b && self.sign == other.sign,
            (Content::Boxed(a), Content::Boxed(b)) => {
                self.sign == other.sign && a.eq_layout(b.as_ref())
            }
            _ => false,
        }
    }
}
impl Eq for Data {}

impl Hash for Data {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

impl ops::Neg for Data {
    type Output = Data;
    fn neg(mut self) -> Data {
        self.sign = !self.sign;
        self
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_string_radix(Radix::Decimal, Literal::None) {
            Ok(text) => write!(f, "{}", text),
            Err(_) => write!(f, "undef"),
        }
    }
}
