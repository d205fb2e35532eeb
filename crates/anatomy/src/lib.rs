pub mod bounds;
pub mod catalog;
pub mod region;

pub use bounds::*;
pub use catalog::*;
pub use region::*;
