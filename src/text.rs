//! The String kind: an owned UTF-8 buffer behind a `Data` cell.
//!
//! Named `Text` so it does not shadow `std::string::String`.

// used for layout downcasting
use std::any::Any;
// used for comparisons
use std::cmp::Ordering;
// used when parsing a string to a Text
use std::convert::Infallible;
use std::str::FromStr;
// used to print out readable forms of a text
use std::fmt;
// used to indicate that texts are hashable
use std::hash::{Hash, Hasher};
// used to overload concatenation
use std::ops;

use crate::data::Data;
use crate::error::Result;
use crate::hash;
use crate::kind::Kind;
use crate::layout::Layout;
use crate::radix::{Literal, Radix};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLayout {
    text: String,
}

impl StringLayout {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Layout for StringLayout {
    fn clone_layout(&self) -> Box<dyn Layout> {
        Box::new(self.clone())
    }
    fn hash_layout(&self) -> u64 {
        hash::bytes(self.text.as_bytes())
    }
    fn eq_layout(&self, other: &dyn Layout) -> bool {
        other
            .downcast_ref::<StringLayout>()
            .is_some_and(|other| self.text == other.text)
    }
    // text has no radix
    fn render(&self, _radix: Radix, _literal: Literal) -> Result<String> {
        Ok(self.text.clone())
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
    fn kind(&self) -> &'static str {
        Text::KIND
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text(Data);

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Text(Data::from_layout(Box::new(StringLayout::new(text))))
    }
    pub fn as_str(&self) -> &str {
        self.0
            .layout::<StringLayout>()
            .map(|layout| layout.as_str())
            .unwrap_or("")
    }
    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.as_str().len()
    }
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
    pub fn into_data(self) -> Data {
        self.0
    }
    fn push_str(&mut self, tail: &str) {
        match self.0.layout_mut::<StringLayout>() {
            Some(layout) => layout.text.push_str(tail),
            None => *self = Text::new(tail),
        }
    }
}

pub fn create_string(text: &str) -> Text {
    Text::new(text)
}

impl Kind for Text {
    const UID: u8 = 5;
    const KIND: &'static str = "String";
    fn data(&self) -> &Data {
        &self.0
    }
}

impl Default for Text {
    fn default() -> Self {
        Text::new("")
    }
}
impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Text::new(text)
    }
}
impl From<String> for Text {
    fn from(text: String) -> Self {
        Text::new(text)
    }
}
impl From<Text> for Data {
    fn from(text: Text) -> Self {
        text.0
    }
}
impl FromStr for Text {
    type Err = Infallible;
    fn from_str(s: &str) -> std::result::Result<Text, Infallible> {
        Ok(Text::new(s))
    }
}
impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
impl Ord for Text {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().as_bytes().cmp(other.as_str().as_bytes())
    }
}
impl PartialOrd for Text {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ops::AddAssign<&str> for Text {
    fn add_assign(&mut self, rhs: &str) {
        self.push_str(rhs);
    }
}
impl ops::AddAssign<&Text> for Text {
    fn add_assign(&mut self, rhs: &Text) {
        self.push_str(rhs.as_str());
    }
}
impl ops::Add<&Text> for &Text {
    type Output = Text;
    fn add(self, rhs: &Text) -> Text {
        let mut result = self.clone();
        result.push_str(rhs.as_str());
        result
    }
}
impl ops::Add<&str> for Text {
    type Output = Text;
    fn add(mut self, rhs: &str) -> Text {
        self.push_str(rhs);
        self
    }
}
impl ops::Add<&Text> for Text {
    type Output = Text;
    fn add(mut self, rhs: &Text) -> Text {
        self.push_str(rhs.as_str());
        self
    }
}
