//! The polymorphic heap payload behind every non-trivial `Data` cell.
//!
//! A layout is owned by exactly one `Data`. Copying a cell deep-clones its
//! layout through [`Layout::clone_layout`], so two cells never alias one payload.

use std::any::Any;
use std::fmt;

use crate::error::Result;
use crate::radix::{Literal, Radix};

pub trait Layout: Any + fmt::Debug {
    // static stuff which needs to be implemented downstream
    fn clone_layout(&self) -> Box<dyn Layout>;
    fn hash_layout(&self) -> u64;
    /// Content equality, `false` for layouts of a different concrete type.
    fn eq_layout(&self, other: &dyn Layout) -> bool;
    /// Renders the payload without sign, including any literal prefix.
    fn render(&self, radix: Radix, literal: Literal) -> Result<String>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn kind(&self) -> &'static str;
}

impl Clone for Box<dyn Layout> {
    fn clone(&self) -> Self {
        self.clone_layout()
    }
}

impl dyn Layout {
    pub fn downcast_ref<T: Layout>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
    pub fn downcast_mut<T: Layout>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}
