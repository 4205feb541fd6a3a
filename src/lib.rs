mod const_union_find;
pub mod error;
mod union_find;

pub use const_union_find::*;
pub use union_find::*;
