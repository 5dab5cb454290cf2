//! Value types with their own display rules

mod choice;

pub use choice::*;
