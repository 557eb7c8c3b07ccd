pub mod angles;
pub mod triangle;

pub use angles::*;
pub use triangle::*;
