pub mod entry;
pub mod export;
pub mod schedule;
pub mod store;
pub mod tracker;

pub use entry::*;
pub use export::*;
pub use schedule::*;
pub use store::*;
pub use tracker::*;
