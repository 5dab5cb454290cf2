//! Error types

mod field;
mod render;

pub use field::*;
pub use render::*;
