#![allow(dead_code)]

// used to compare hashes through the std Hash implementations
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use numcell::{Data, Layout};
use tracing_subscriber::EnvFilter;

/// Routes library events to the test output, filtered by RUST_LOG.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Address of the layout owned by a cell, if any.
pub fn address(data: &Data) -> Option<*const ()> {
    data.ptr().map(|layout| layout as *const dyn Layout as *const ())
}
