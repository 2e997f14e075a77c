#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]

#[macro_use]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
pub use error::TreeError;

mod node;
pub use node::{Color, NodeId, NodeView};

mod tree;
pub use tree::RbTree;

mod export;
