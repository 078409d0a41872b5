//! Box-drawing symbols for borders and dividers.

pub mod border;
pub mod line;
