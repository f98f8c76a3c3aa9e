// used to print out readable forms of a kind
use std::fmt;
// used to indicate that kinds need to be hashable
use std::hash::Hash;

use crate::data::Data;
use crate::error::Result;
use crate::radix::{Literal, Radix};
use crate::settings::Settings;

/// Common surface of every value kind built on a `Data` cell.
pub trait Kind: fmt::Display + fmt::Debug + Clone + Eq + Hash {
    // static stuff which needs to be implemented downstream
    const UID: u8;
    const KIND: &'static str;
    fn data(&self) -> &Data;
    // instance callable with pre-made implementation
    fn kind(&self) -> &'static str {
        Self::KIND
    }
    fn identifier(&self) -> u8 {
        Self::UID
    }
    fn sign(&self) -> bool {
        self.data().sign()
    }
    fn trivial(&self) -> bool {
        self.data().trivial()
    }
    fn defined(&self) -> bool {
        self.data().defined()
    }
    fn to_string_radix(&self, radix: Radix, literal: Literal) -> Result<String> {
        self.data().to_string_radix(radix, literal)
    }
    fn render(&self, settings: &Settings) -> Result<String> {
        self.to_string_radix(settings.radix, settings.literal)
    }
}
