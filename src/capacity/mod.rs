pub mod lookup;
pub mod tables;

pub use lookup::*;
pub use tables::*;
