// Utils compartidos

pub mod constants;
pub mod markup;

pub use constants::*;
pub use markup::{parse_inline, Segment};
